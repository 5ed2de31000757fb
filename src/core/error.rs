use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum AlertError {
    /// A required setting is missing or could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, with credentials redacted.
        url: String,
    },

    /// The response body could not be decoded.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The provider answered 2xx but flagged the request as failed in its body.
    #[error("{service} reported an error: {message}")]
    Api {
        /// Which collaborator rejected the call.
        service: &'static str,
        /// Message returned by the provider, if any.
        message: String,
    },

    /// The previous close was zero, so no percentage change exists.
    #[error("cannot compute percent change: previous price is zero")]
    ZeroPreviousPrice,
}

/// Coarse classification of an [`AlertError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Startup settings were absent or malformed.
    Configuration,
    /// A quote, news or notification call failed.
    RemoteCall,
    /// The change calculation was undefined.
    Arithmetic,
}

impl AlertError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Configuration,
            Self::ZeroPreviousPrice => ErrorKind::Arithmetic,
            Self::Http(_)
            | Self::Url(_)
            | Self::Status { .. }
            | Self::Json(_)
            | Self::Data(_)
            | Self::Api { .. } => ErrorKind::RemoteCall,
        }
    }
}
