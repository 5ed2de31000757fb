use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct EverythingEnvelope {
    pub(crate) status: String,
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) articles: Vec<Article>,
}

#[derive(Deserialize)]
pub(crate) struct Article {
    pub(crate) source: Option<Source>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct Source {
    pub(crate) name: Option<String>,
}
