//! Startup settings.
//!
//! Everything is read once, up front, from environment variables, optionally
//! seeded from a `.env` file (see [`load_dotenv`]). The `from_lookup` constructors take the variable source as a closure so the
//! parsing rules can be exercised without touching the process environment.

use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use chrono_tz::Tz;

use crate::core::AlertError;

/// Default watched symbol.
pub const DEFAULT_SYMBOL: &str = "NU";
/// Default news keywords (searched in titles, joined with `OR`).
pub const DEFAULT_KEYWORDS: &str = "Nu Holdings";
/// Default trigger threshold, in percent.
pub const DEFAULT_THRESHOLD: f64 = 5.0;
/// Default market timezone.
pub const DEFAULT_TIMEZONE: &str = "US/Eastern";
/// Default regular-session close, local market time.
pub const DEFAULT_CLOSE_CUTOFF: &str = "16:00";
/// Default cap on the number of headlines sent per alert.
pub const DEFAULT_MAX_NEWS: usize = 3;

/// API credentials and the chat destination.
#[derive(Clone)]
pub struct Settings {
    /// Key for the daily open/close quote API.
    pub stock_api_key: String,
    /// Key for the news search API.
    pub news_api_key: String,
    /// Telegram bot token.
    pub bot_token: String,
    /// Telegram chat that receives the alerts.
    pub chat_id: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("stock_api_key", &"<redacted>")
            .field("news_api_key", &"<redacted>")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl Settings {
    /// Reads the credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AlertError::Config` naming the first missing or empty variable.
    pub fn from_env() -> Result<Self, AlertError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the credentials through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `AlertError::Config` naming the first missing or empty variable.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, AlertError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut required = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AlertError::Config(format!("missing required setting {key}")))
        };

        Ok(Self {
            stock_api_key: required("STOCK_API_KEY")?,
            news_api_key: required("NEWS_API_KEY")?,
            bot_token: required("BOT_TOKEN")?,
            chat_id: required("CHAT_ID")?,
        })
    }
}

/// What to watch and when to fire.
#[derive(Debug, Clone)]
pub struct AlertConfig {
    /// Ticker symbol passed to the quote API.
    pub symbol: String,
    /// Title keywords for the news search.
    pub keywords: Vec<String>,
    /// Minimum absolute percent change that triggers an alert.
    pub threshold: f64,
    /// Timezone in which "today" is evaluated.
    pub timezone: Tz,
    /// Local time after which today's session counts as closed. `None` treats
    /// the session as closed as soon as the day starts.
    pub close_cutoff: Option<NaiveTime>,
    /// Maximum number of headlines attached to one alert.
    pub max_news: usize,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            keywords: split_keywords(DEFAULT_KEYWORDS),
            threshold: DEFAULT_THRESHOLD,
            timezone: chrono_tz::US::Eastern,
            close_cutoff: NaiveTime::from_hms_opt(16, 0, 0),
            max_news: DEFAULT_MAX_NEWS,
        }
    }
}

impl AlertConfig {
    /// Reads the job settings from the process environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `AlertError::Config` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, AlertError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the job settings through `lookup`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `AlertError::Config` if a variable is present but malformed.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, AlertError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let symbol = get("ALERT_SYMBOL", DEFAULT_SYMBOL);

        let keywords = split_keywords(&get("ALERT_KEYWORDS", DEFAULT_KEYWORDS));
        if keywords.is_empty() {
            return Err(AlertError::Config("ALERT_KEYWORDS has no keywords".into()));
        }

        let raw = get("ALERT_THRESHOLD", DEFAULT_THRESHOLD.to_string().as_str());
        let threshold: f64 = raw
            .parse()
            .map_err(|_| AlertError::Config(format!("ALERT_THRESHOLD is not a number: {raw}")))?;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(AlertError::Config(format!(
                "ALERT_THRESHOLD must be a non-negative number, got {raw}"
            )));
        }

        let raw = get("ALERT_TIMEZONE", DEFAULT_TIMEZONE);
        let timezone: Tz = raw
            .parse()
            .map_err(|_| AlertError::Config(format!("ALERT_TIMEZONE is not a known timezone: {raw}")))?;

        let raw = get("ALERT_CLOSE_CUTOFF", DEFAULT_CLOSE_CUTOFF);
        let close_cutoff = if raw.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(NaiveTime::parse_from_str(&raw, "%H:%M").map_err(|_| {
                AlertError::Config(format!("ALERT_CLOSE_CUTOFF must be HH:MM or 'none', got {raw}"))
            })?)
        };

        let raw = get("ALERT_MAX_NEWS", DEFAULT_MAX_NEWS.to_string().as_str());
        let max_news: usize = raw
            .parse()
            .map_err(|_| AlertError::Config(format!("ALERT_MAX_NEWS is not a count: {raw}")))?;

        Ok(Self {
            symbol,
            keywords,
            threshold,
            timezone,
            close_cutoff,
            max_news,
        })
    }
}

/// Loads the nearest `.env` file (current directory or a parent) into the
/// process environment. Variables that are already set win.
///
/// Returns the file that was read, or `None` when there is none.
///
/// # Errors
///
/// Returns `AlertError::Config` if the file exists but cannot be read or parsed.
pub fn load_dotenv() -> Result<Option<PathBuf>, AlertError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(AlertError::Config(format!("cannot load .env: {e}"))),
    }
}

/// Loads the dotenv file at `path` into the process environment, without
/// overriding variables that are already set.
///
/// Returns `false` when `path` does not exist.
///
/// # Errors
///
/// Returns `AlertError::Config` if the file cannot be read or parsed.
pub fn load_dotenv_from(path: impl AsRef<Path>) -> Result<bool, AlertError> {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(AlertError::Config(format!(
            "cannot load {}: {e}",
            path.display()
        ))),
    }
}

fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
