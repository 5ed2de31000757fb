mod api;
mod model;
mod wire;

pub use model::{NewsItem, UNTITLED};

use chrono::NaiveDate;

use crate::core::{AlertClient, AlertError, NewsService, ServiceFuture};

/// Which article fields the keywords are matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchIn {
    /// Headlines only.
    #[default]
    Title,
    /// Summaries only.
    Description,
    /// Headline, summary and body.
    All,
}

impl SearchIn {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::All => "title,description,content",
        }
    }
}

/// Result ordering requested from the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Articles from popular sources and publishers first.
    #[default]
    Popularity,
    /// Articles more closely related to the query first.
    Relevancy,
    /// Newest articles first.
    PublishedAt,
}

impl SortBy {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::Relevancy => "relevancy",
            Self::PublishedAt => "publishedAt",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct NewsQuery {
    pub(crate) search_in: SearchIn,
    pub(crate) sort_by: SortBy,
    pub(crate) page_size: Option<u32>,
}

/// A builder for searching headlines that mention any of a set of keywords.
pub struct NewsBuilder {
    client: AlertClient,
    keywords: Vec<String>,
    from: NaiveDate,
    query: NewsQuery,
}

impl NewsBuilder {
    /// Creates a search for articles published on or after `from`.
    pub fn new(client: &AlertClient, from: NaiveDate) -> Self {
        Self {
            client: client.clone(),
            keywords: Vec::new(),
            from,
            query: NewsQuery::default(),
        }
    }

    /// Sets the keywords; an article matches if it mentions any of them.
    #[must_use]
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Sets which fields are searched. Defaults to titles only.
    #[must_use]
    pub fn search_in(mut self, search_in: SearchIn) -> Self {
        self.query.search_in = search_in;
        self
    }

    /// Sets the result ordering. Defaults to popularity.
    #[must_use]
    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.query.sort_by = sort_by;
        self
    }

    /// Caps how many articles the provider returns.
    #[must_use]
    pub fn page_size(mut self, n: u32) -> Self {
        self.query.page_size = Some(n);
        self
    }

    /// Executes the search.
    ///
    /// # Errors
    ///
    /// Returns an `AlertError` if no keywords were set, the request fails,
    /// the provider answers with an error payload, or the body cannot be parsed.
    #[tracing::instrument(skip(self), err, fields(from = %self.from, keywords = ?self.keywords))]
    pub async fn fetch(self) -> Result<Vec<NewsItem>, AlertError> {
        api::fetch_news(&self.client, &self.keywords, self.from, &self.query).await
    }
}

impl NewsService for AlertClient {
    fn search_news<'a>(
        &'a self,
        keywords: &'a [String],
        from: NaiveDate,
    ) -> ServiceFuture<'a, Vec<NewsItem>> {
        Box::pin(
            NewsBuilder::new(self, from)
                .keywords(keywords.iter().cloned())
                .fetch(),
        )
    }
}
