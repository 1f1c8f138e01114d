use std::sync::Arc;

use crate::fetcher::http::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::source::{ArticleSource, DEFAULT_ENDPOINT};

pub struct AppContext {
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub source: Arc<ArticleSource>,
}

impl AppContext {
    pub fn new(endpoint: Option<String>) -> Self {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new());
        let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let source = Arc::new(ArticleSource::new(fetcher.clone(), endpoint));

        Self { fetcher, source }
    }
}
