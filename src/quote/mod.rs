mod api;
mod model;
mod wire;

pub use model::DailyQuote;

use chrono::NaiveDate;

use crate::core::{AlertClient, AlertError, QuoteService, ServiceFuture};

/// Fetches the daily open/close summary of `symbol` on `date`.
///
/// # Errors
///
/// Returns `AlertError::Status` on a non-2xx response, `AlertError::Api` when the
/// provider flags the request as failed, and `AlertError::Data` when the payload
/// carries no open or close price.
#[tracing::instrument(skip(client), err)]
pub async fn daily_quote(
    client: &AlertClient,
    symbol: &str,
    date: NaiveDate,
) -> Result<DailyQuote, AlertError> {
    api::fetch_daily_quote(client, symbol, date).await
}

impl QuoteService for AlertClient {
    fn daily_quote<'a>(&'a self, symbol: &'a str, date: NaiveDate) -> ServiceFuture<'a, DailyQuote> {
        Box::pin(daily_quote(self, symbol, date))
    }
}
