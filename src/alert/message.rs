//! Alert texts: the stock line and one message per attached headline.

use std::fmt;

use crate::change::{Direction, display_magnitude};
use crate::news::NewsItem;

/// Suffix used when no headline could be attached.
pub const NO_NEWS: &str = "No news to show.";

/// A move alert for one symbol, with the headlines to send alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertMessage {
    symbol: String,
    direction: Direction,
    magnitude: u64,
    headlines: Vec<NewsItem>,
}

impl AlertMessage {
    /// Builds an alert for a `pct` move, keeping at most `max_news` headlines
    /// in the order given.
    pub fn new(symbol: impl Into<String>, pct: f64, mut news: Vec<NewsItem>, max_news: usize) -> Self {
        news.truncate(max_news);
        Self {
            symbol: symbol.into(),
            direction: Direction::of(pct),
            magnitude: display_magnitude(pct),
            headlines: news,
        }
    }

    /// Whether the close moved up or down.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whole-percent size of the move, as shown in the stock line.
    pub fn magnitude(&self) -> u64 {
        self.magnitude
    }

    /// Headlines kept after the cap, in provider order.
    pub fn headlines(&self) -> &[NewsItem] {
        &self.headlines
    }

    /// The texts to dispatch: one per headline, or a single no-news notice.
    pub fn render(&self) -> Vec<String> {
        if self.headlines.is_empty() {
            return vec![format!("{self}\n{NO_NEWS}")];
        }
        self.headlines
            .iter()
            .map(|item| format!("{self}\n*Headline*: {}\n\n{}", item.title, item.description))
            .collect()
    }
}

/// The stock line, e.g. `NU: 🔺 5%`.
impl fmt::Display for AlertMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}%",
            self.symbol,
            self.direction.emoji(),
            self.magnitude
        )
    }
}
