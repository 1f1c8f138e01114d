use std::sync::Arc;

use crate::app::NewswireError;
use crate::domain::{ArticleFeed, ArticleRecord, FetchError, FetchState};
use crate::fetcher::Fetcher;

pub const DEFAULT_ENDPOINT: &str = "https://api.lil.software/news";

/// Retrieves and decodes the article list from a fixed endpoint.
///
/// Every fetch completes with an explicit `FetchState`: `Loaded` with the
/// articles in response order, or `Failed` with a classified error. There is
/// no de-duplication of in-flight fetches; concurrent completions race and
/// the last one applied wins.
pub struct ArticleSource {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    endpoint: String,
}

impl ArticleSource {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, endpoint: impl Into<String>) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch(&self) -> FetchState {
        match self.fetch_articles().await {
            Ok(articles) => {
                tracing::info!("Loaded {} articles from {}", articles.len(), self.endpoint);
                FetchState::Loaded(articles)
            }
            Err(err) => {
                tracing::warn!("Fetch from {} failed: {}", self.endpoint, err);
                FetchState::Failed(classify(&err))
            }
        }
    }

    async fn fetch_articles(&self) -> crate::app::Result<Vec<ArticleRecord>> {
        let body = self.fetcher.fetch(&self.endpoint).await?;
        let feed: ArticleFeed =
            serde_json::from_slice(&body).map_err(|e| NewswireError::Decode(e.to_string()))?;
        Ok(feed.articles)
    }
}

fn classify(err: &NewswireError) -> FetchError {
    match err {
        NewswireError::Decode(_) => FetchError::Decoding,
        NewswireError::Status(code) => FetchError::ErrorCode(*code),
        _ => FetchError::Unknown,
    }
}
