use chrono::NaiveDate;

use crate::core::AlertError;
use crate::news::NewsItem;
use crate::notify::MessageAck;
use crate::quote::DailyQuote;

/// Boxed, sendable future returned by the service traits.
pub type ServiceFuture<'a, T> =
    core::pin::Pin<Box<dyn core::future::Future<Output = Result<T, AlertError>> + Send + 'a>>;

/// A source of daily closing prices.
///
/// Implemented by [`AlertClient`](crate::AlertClient); the alert pipeline only
/// depends on this trait so it can be driven by in-memory fakes.
pub trait QuoteService: Send + Sync {
    /// Fetches the open/close summary of `symbol` for the trading `date`.
    ///
    /// # Errors
    /// Fails on a non-2xx status or a payload without prices.
    fn daily_quote<'a>(&'a self, symbol: &'a str, date: NaiveDate) -> ServiceFuture<'a, DailyQuote>;
}

/// A headline search, ordered by relevance/popularity descending.
pub trait NewsService: Send + Sync {
    /// Searches titles for any of `keywords`, published on or after `from`.
    ///
    /// # Errors
    /// Fails on a non-2xx status or an error payload.
    fn search_news<'a>(
        &'a self,
        keywords: &'a [String],
        from: NaiveDate,
    ) -> ServiceFuture<'a, Vec<NewsItem>>;
}

/// Delivers a text message to a destination chat.
pub trait Notifier: Send + Sync {
    /// Sends `message` to `destination`.
    ///
    /// # Errors
    /// Fails when the message is not accepted for delivery.
    fn send<'a>(&'a self, message: &'a str, destination: &'a str) -> ServiceFuture<'a, MessageAck>;
}
