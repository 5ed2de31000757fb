//! Telegram Bot API delivery.

mod api;
mod model;
mod wire;

pub use model::MessageAck;

use crate::core::{AlertClient, AlertError, Notifier, ServiceFuture};

/// How Telegram should interpret the message text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Legacy Markdown (`*bold*`, `_italic_`).
    #[default]
    Markdown,
    /// MarkdownV2, which requires escaping reserved characters.
    MarkdownV2,
    /// A subset of HTML tags.
    Html,
}

impl ParseMode {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "Markdown",
            Self::MarkdownV2 => "MarkdownV2",
            Self::Html => "HTML",
        }
    }
}

/// A builder for a single `sendMessage` call.
pub struct MessageBuilder {
    client: AlertClient,
    chat_id: String,
    parse_mode: Option<ParseMode>,
}

impl MessageBuilder {
    /// Creates a message addressed to `chat_id`, formatted as legacy Markdown.
    pub fn new(client: &AlertClient, chat_id: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            chat_id: chat_id.into(),
            parse_mode: Some(ParseMode::default()),
        }
    }

    /// Sets the parse mode; `None` sends the text verbatim.
    #[must_use]
    pub fn parse_mode(mut self, mode: Option<ParseMode>) -> Self {
        self.parse_mode = mode;
        self
    }

    /// Sends `text`.
    ///
    /// # Errors
    ///
    /// Returns `AlertError::Status` if Telegram rejects the request, or
    /// `AlertError::Api` if it answers 2xx with `ok: false`.
    #[tracing::instrument(skip(self, text), err, fields(chat_id = %self.chat_id))]
    pub async fn send(self, text: &str) -> Result<MessageAck, AlertError> {
        api::send_message(&self.client, &self.chat_id, text, self.parse_mode).await
    }
}

impl Notifier for AlertClient {
    fn send<'a>(&'a self, message: &'a str, destination: &'a str) -> ServiceFuture<'a, MessageAck> {
        Box::pin(MessageBuilder::new(self, destination).send(message))
    }
}
