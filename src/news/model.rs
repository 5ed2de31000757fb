use chrono::{DateTime, Utc};

/// Title shown for an article the provider returned without one.
pub const UNTITLED: &str = "(no title)";

/// A single headline returned by the news search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    /// The headline of the article, or [`UNTITLED`].
    pub title: String,
    /// The article summary. Empty when the provider has none.
    pub description: String,
    /// A direct link to the article.
    pub url: Option<String>,
    /// The publisher of the article (e.g., "Reuters").
    pub source: Option<String>,
    /// When the article was published.
    pub published_at: Option<DateTime<Utc>>,
}
