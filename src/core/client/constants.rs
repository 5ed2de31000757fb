//! Centralized constants for default endpoints and UA.

/// UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("stock-alert/", env!("CARGO_PKG_VERSION"));

/// Polygon REST base (`v1/open-close/{symbol}/{date}` is appended).
pub(crate) const DEFAULT_BASE_QUOTE: &str = "https://api.polygon.io/";

/// NewsAPI base (`v2/everything` is appended).
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://newsapi.org/";

/// Telegram Bot API base (`bot{token}/sendMessage` is appended).
pub(crate) const DEFAULT_BASE_TELEGRAM: &str = "https://api.telegram.org/";
