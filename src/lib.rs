//! stock-alert: watches one symbol's daily close and pushes move alerts.
//!
//! A run decides which two trading sessions to compare (weekend-, holiday- and
//! close-time-aware), fetches both closes, and if the percentage change crosses
//! the configured threshold, searches related headlines and sends them to a
//! Telegram chat. The job is meant to be started by an external scheduler and
//! exits when the run is done.
//!
//! ```no_run
//! # use stock_alert::{AlertClient, AlertConfig, AlertPipeline, BusinessCalendar, Settings};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::from_env()?;
//! let config = AlertConfig::from_env()?;
//! let client = AlertClient::builder().settings(settings).build()?;
//! let calendar = BusinessCalendar::us_federal();
//!
//! let outcome = AlertPipeline::with_client(&calendar, &config, &client).run().await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

pub mod alert;
pub mod calendar;
pub mod change;
pub mod core;
pub mod news;
pub mod notify;
pub mod quote;

pub use alert::{AlertMessage, AlertPipeline, ComparisonDates, DateDecision, RunOutcome};
pub use calendar::{BusinessCalendar, TradingDate, WeekMask, days_between};
pub use change::{Direction, exceeds_threshold, percent_change};
pub use crate::core::{
    AlertClient, AlertClientBuilder, AlertConfig, AlertError, ErrorKind, NewsService, Notifier,
    QuoteService, Settings, load_dotenv, load_dotenv_from,
};
pub use news::{NewsBuilder, NewsItem, SearchIn, SortBy};
pub use notify::{MessageAck, MessageBuilder, ParseMode};
pub use quote::DailyQuote;
