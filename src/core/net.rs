use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{AlertClient, AlertError};

/// Query parameters whose values must never leave the process in logs or errors.
const SECRET_PARAMS: &[&str] = &["apiKey", "apikey", "token"];

/// A single outgoing API call: method, target and ordered query parameters.
///
/// The target is a parsed [`Url`], so a request cannot exist without one.
#[derive(Debug, Clone)]
pub(crate) struct Request {
    method: Method,
    url: Url,
    params: Vec<(String, String)>,
}

impl Request {
    pub(crate) fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            params: Vec::new(),
        }
    }

    pub(crate) fn post(url: Url) -> Self {
        Self {
            method: Method::POST,
            url,
            params: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    fn into_url(self) -> (Method, Url) {
        let mut url = self.url;
        if !self.params.is_empty() {
            let mut qp = url.query_pairs_mut();
            for (k, v) in &self.params {
                qp.append_pair(k, v);
            }
        }
        (self.method, url)
    }
}

/// Appends path segments to `base`, keeping any path it already has.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, AlertError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| AlertError::Data(format!("base URL cannot take a path: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Sends `req`, rejects non-2xx statuses and decodes the body as JSON.
pub(crate) async fn send_json<T: DeserializeOwned>(
    client: &AlertClient,
    req: Request,
) -> Result<T, AlertError> {
    let (method, url) = req.into_url();
    tracing::debug!(method = %method, url = %redact(&url), "sending request");

    let resp = client
        .http()
        .request(method, url.clone())
        .send()
        .await
        .map_err(transport)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(AlertError::Status {
            status: status.as_u16(),
            url: redact(&url),
        });
    }

    let body = resp.text().await.map_err(transport)?;
    serde_json::from_str(&body).map_err(AlertError::Json)
}

/// Strips the request URL from a transport error; it carries credentials.
fn transport(err: reqwest::Error) -> AlertError {
    AlertError::Http(err.without_url())
}

/// Renders `url` with credential query values and bot tokens masked.
pub(crate) fn redact(url: &Url) -> String {
    let mut out = url.clone();

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if SECRET_PARAMS.contains(&k.as_ref()) {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    if pairs.is_empty() {
        out.set_query(None);
    } else {
        out.query_pairs_mut().clear().extend_pairs(pairs);
    }

    let segments: Option<Vec<String>> = url.path_segments().map(|segs| {
        segs.map(|s| {
            if s.starts_with("bot") && s.contains(':') {
                "bot***".to_string()
            } else {
                s.to_string()
            }
        })
        .collect()
    });
    if let Some(segments) = segments
        && let Ok(mut path) = out.path_segments_mut()
    {
        path.clear().extend(segments);
    }

    out.to_string()
}
