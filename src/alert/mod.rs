//! The alert run: pick dates, compare closes, attach news, dispatch.

mod dates;
mod message;

pub use dates::{ComparisonDates, DateDecision, as_of_date, select_dates};
pub use message::{AlertMessage, NO_NEWS};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::calendar::BusinessCalendar;
use crate::change::{exceeds_threshold, percent_change};
use crate::core::{AlertClient, AlertConfig, AlertError, NewsService, Notifier, QuoteService};
use crate::notify::MessageAck;

/// What a run did.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The last completed session was already covered, or none closed since.
    NotReady(DateDecision),
    /// Closes were compared but the move was too small.
    BelowThreshold {
        /// Sessions compared.
        dates: ComparisonDates,
        /// Signed percent change.
        pct: f64,
    },
    /// Alert messages were delivered.
    Alerted {
        /// Sessions compared.
        dates: ComparisonDates,
        /// Signed percent change.
        pct: f64,
        /// One receipt per dispatched message, in send order.
        sent: Vec<MessageAck>,
    },
}

/// One watch job wired to its collaborators.
///
/// Runs are strictly sequential: quote for the base date, quote for the
/// previous date, then (only if triggered) news and dispatch. Every message is
/// formatted before the first send, so a failed fetch sends nothing.
pub struct AlertPipeline<'a> {
    calendar: &'a BusinessCalendar,
    config: &'a AlertConfig,
    destination: &'a str,
    quotes: &'a dyn QuoteService,
    news: &'a dyn NewsService,
    notifier: &'a dyn Notifier,
}

impl<'a> AlertPipeline<'a> {
    /// Wires a pipeline to explicit collaborators.
    pub fn new(
        calendar: &'a BusinessCalendar,
        config: &'a AlertConfig,
        destination: &'a str,
        quotes: &'a dyn QuoteService,
        news: &'a dyn NewsService,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            calendar,
            config,
            destination,
            quotes,
            news,
            notifier,
        }
    }

    /// Wires a pipeline to the HTTP client, sending to the configured chat.
    pub fn with_client(
        calendar: &'a BusinessCalendar,
        config: &'a AlertConfig,
        client: &'a AlertClient,
    ) -> Self {
        Self::new(
            calendar,
            config,
            &client.settings().chat_id,
            client,
            client,
            client,
        )
    }

    /// Runs against the current wall-clock time.
    ///
    /// # Errors
    ///
    /// See [`AlertPipeline::run_at`].
    pub async fn run(&self) -> Result<RunOutcome, AlertError> {
        self.run_at(Utc::now()).await
    }

    /// Runs as if the current instant were `now`.
    ///
    /// # Errors
    ///
    /// Any failed quote, news or delivery call aborts the run, as does a zero
    /// previous close.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.config.symbol))]
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<RunOutcome, AlertError> {
        let local = now.with_timezone(&self.config.timezone);

        let dates = match select_dates(self.calendar, &local, self.config.close_cutoff) {
            DateDecision::Compare(dates) => dates,
            not_ready @ DateDecision::NotReady { today, last_session } => {
                info!(%today, %last_session, "no newly closed session, nothing to do");
                return Ok(RunOutcome::NotReady(not_ready));
            }
        };
        debug!(base = %dates.base, previous = %dates.previous, "comparing sessions");

        let symbol = self.config.symbol.as_str();
        let current = self.quotes.daily_quote(symbol, dates.base).await?;
        let previous = self.quotes.daily_quote(symbol, dates.previous).await?;
        debug!(current = current.close, previous = previous.close, "fetched closes");

        let pct = percent_change(current.close, previous.close)?;
        if !exceeds_threshold(pct, self.config.threshold) {
            info!(pct, threshold = self.config.threshold, "move below threshold");
            return Ok(RunOutcome::BelowThreshold { dates, pct });
        }

        let news = self
            .news
            .search_news(&self.config.keywords, dates.previous)
            .await?;
        debug!(found = news.len(), "news search done");

        let alert = AlertMessage::new(symbol, pct, news, self.config.max_news);
        let texts = alert.render();

        let mut sent = Vec::with_capacity(texts.len());
        for text in &texts {
            sent.push(self.notifier.send(text, self.destination).await?);
        }
        info!(pct, messages = sent.len(), "alert dispatched");

        Ok(RunOutcome::Alerted { dates, pct, sent })
    }
}
