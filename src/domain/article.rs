use serde::{Deserialize, Serialize};

/// One news item's displayable metadata, exactly as the API delivers it.
///
/// `date` is an unparsed display string and is never normalized. Equality is
/// structural over all fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub date: String,
    pub url: String,
    pub image: Option<String>,
    pub source: String,
}

impl ArticleRecord {
    /// Title with HTML entities decoded, for terminal display.
    /// The stored field is left untouched so re-encoding stays exact.
    pub fn display_title(&self) -> String {
        html_escape::decode_html_entities(&self.title).to_string()
    }
}

/// The response envelope: `{ "articles": [ ... ] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleFeed {
    pub articles: Vec<ArticleRecord>,
}
