use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    core::{
        AlertClient, AlertError,
        net::{self, Request},
    },
    news::{
        NewsQuery,
        model::{NewsItem, UNTITLED},
        wire,
    },
};

pub(super) async fn fetch_news(
    client: &AlertClient,
    keywords: &[String],
    from: NaiveDate,
    query: &NewsQuery,
) -> Result<Vec<NewsItem>, AlertError> {
    if keywords.is_empty() {
        return Err(AlertError::Config("news search needs at least one keyword".into()));
    }

    let url = net::endpoint(client.base_news(), &["v2", "everything"])?;
    let mut req = Request::get(url)
        .param("q", keywords.join(" OR "))
        .param("searchIn", query.search_in.as_str())
        .param("from", from.format("%Y-%m-%d").to_string())
        .param("sortBy", query.sort_by.as_str());
    if let Some(n) = query.page_size {
        req = req.param("pageSize", n.to_string());
    }
    let req = req.param("apiKey", &client.settings().news_api_key);

    let envelope: wire::EverythingEnvelope = net::send_json(client, req).await?;

    if envelope.status != "ok" {
        return Err(AlertError::Api {
            service: "news",
            message: envelope.message.unwrap_or(envelope.status),
        });
    }

    let items = envelope
        .articles
        .into_iter()
        .map(|raw| {
            // Blanked-out entries keep their place in provider order.
            let title = raw
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| UNTITLED.to_string());

            let published_at = raw
                .published_at
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                .map(|dt| dt.with_timezone(&Utc));

            NewsItem {
                title,
                description: raw.description.unwrap_or_default(),
                url: raw.url,
                source: raw.source.and_then(|s| s.name),
                published_at,
            }
        })
        .collect();

    Ok(items)
}
