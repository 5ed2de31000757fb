//! Public client surface + builder.
//! Default endpoints and the UA live in `constants`.

mod constants;

use crate::core::{AlertError, Settings};
use constants::{DEFAULT_BASE_NEWS, DEFAULT_BASE_QUOTE, DEFAULT_BASE_TELEGRAM, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client, base URLs and credentials
/// for the quote, news and Telegram APIs.
#[derive(Debug, Clone)]
pub struct AlertClient {
    http: Client,
    base_quote: Url,
    base_news: Url,
    base_telegram: Url,
    settings: Settings,
}

impl AlertClient {
    /// Create a new builder.
    pub fn builder() -> AlertClientBuilder {
        AlertClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_quote(&self) -> &Url {
        &self.base_quote
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_telegram(&self) -> &Url {
        &self.base_telegram
    }
    pub(crate) fn settings(&self) -> &Settings {
        &self.settings
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct AlertClientBuilder {
    user_agent: Option<String>,
    base_quote: Option<Url>,
    base_news: Option<Url>,
    base_telegram: Option<Url>,
    settings: Option<Settings>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl AlertClientBuilder {
    /// Credentials and chat destination. Required.
    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quote API base (e.g., `https://api.polygon.io/`).
    #[must_use]
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = Some(url);
        self
    }

    /// Override the news API base (e.g., `https://newsapi.org/`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the Telegram Bot API base (e.g., `https://api.telegram.org/`).
    #[must_use]
    pub fn base_telegram(mut self, url: Url) -> Self {
        self.base_telegram = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `AlertError::Config` when no settings were supplied, or an
    /// HTTP/URL error if the underlying client cannot be constructed.
    pub fn build(self) -> Result<AlertClient, AlertError> {
        let settings = self
            .settings
            .ok_or_else(|| AlertError::Config("client built without credentials".into()))?;

        let base_quote = match self.base_quote {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE)?,
        };
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };
        let base_telegram = match self.base_telegram {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_TELEGRAM)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(AlertClient {
            http,
            base_quote,
            base_news,
            base_telegram,
            settings,
        })
    }
}
