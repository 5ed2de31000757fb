use chrono::NaiveDate;

use crate::{
    core::{
        AlertClient, AlertError,
        net::{self, Request},
    },
    quote::{model::DailyQuote, wire},
};

pub(super) async fn fetch_daily_quote(
    client: &AlertClient,
    symbol: &str,
    date: NaiveDate,
) -> Result<DailyQuote, AlertError> {
    let day = date.format("%Y-%m-%d").to_string();
    let url = net::endpoint(client.base_quote(), &["v1", "open-close", symbol, day.as_str()])?;
    let req = Request::get(url).param("apiKey", &client.settings().stock_api_key);

    let envelope: wire::OpenCloseEnvelope = net::send_json(client, req).await?;

    if let Some(status) = envelope.status.as_deref()
        && !status.eq_ignore_ascii_case("OK")
    {
        return Err(AlertError::Api {
            service: "quote",
            message: envelope.message.unwrap_or_else(|| status.to_string()),
        });
    }

    let close = envelope
        .close
        .ok_or_else(|| AlertError::Data(format!("no close for {symbol} on {day}")))?;
    let open = envelope
        .open
        .ok_or_else(|| AlertError::Data(format!("no open for {symbol} on {day}")))?;

    Ok(DailyQuote {
        symbol: envelope.symbol.unwrap_or_else(|| symbol.to_string()),
        date,
        open,
        high: envelope.high,
        low: envelope.low,
        close,
        volume: envelope.volume,
    })
}
