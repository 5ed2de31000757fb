use serde::Deserialize;

/// Body of `GET /v1/open-close/{symbol}/{date}`.
#[derive(Deserialize)]
pub(crate) struct OpenCloseEnvelope {
    pub(crate) status: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) symbol: Option<String>,
    pub(crate) open: Option<f64>,
    pub(crate) high: Option<f64>,
    pub(crate) low: Option<f64>,
    pub(crate) close: Option<f64>,
    pub(crate) volume: Option<f64>,
}
