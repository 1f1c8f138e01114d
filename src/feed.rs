use std::sync::Arc;

use crate::domain::{ArticleRecord, FetchState};
use crate::search;
use crate::source::ArticleSource;

/// What clearing a non-empty search term does.
///
/// `Reload` re-fetches the list from the source rather than restoring it
/// from memory. `Restore` keeps the in-memory list and just drops the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearBehavior {
    Reload,
    Restore,
}

/// Explicit view state for the article list: the current fetch state, the
/// current search term, and the clear-search policy.
///
/// Fetch completions are installed through [`apply`](NewsFeed::apply); callers
/// may apply them in any order and the last one applied wins. In-flight
/// fetches are never cancelled, so a stale completion can overwrite a fresher
/// one.
pub struct NewsFeed {
    source: Arc<ArticleSource>,
    state: FetchState,
    term: String,
    clear_behavior: ClearBehavior,
}

impl NewsFeed {
    pub fn new(source: Arc<ArticleSource>) -> Self {
        Self {
            source,
            state: FetchState::Loading,
            term: String::new(),
            clear_behavior: ClearBehavior::Reload,
        }
    }

    pub fn with_clear_behavior(mut self, clear_behavior: ClearBehavior) -> Self {
        self.clear_behavior = clear_behavior;
        self
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn search_term(&self) -> &str {
        &self.term
    }

    /// Resets to `Loading` ahead of a new fetch.
    pub fn begin_refresh(&mut self) {
        self.state = FetchState::Loading;
    }

    /// Installs a completed fetch. Last write wins.
    pub fn apply(&mut self, completion: FetchState) {
        self.state = completion;
    }

    /// Begin, fetch, and apply in one step.
    pub async fn refresh(&mut self) {
        self.begin_refresh();
        let completion = self.source.fetch().await;
        self.apply(completion);
    }

    /// Stores the term. Clearing a non-empty term follows the configured
    /// [`ClearBehavior`].
    pub async fn set_search_term(&mut self, term: &str) {
        let clearing = term.is_empty() && !self.term.is_empty();
        self.term = term.to_string();

        if clearing && self.clear_behavior == ClearBehavior::Reload {
            self.refresh().await;
        }
    }

    /// The held list, filtered by the current term when it is non-empty.
    /// Empty while loading or failed.
    pub fn visible_articles(&self) -> Vec<ArticleRecord> {
        match self.state.articles() {
            Some(all) => search::filter(all, &self.term),
            None => Vec::new(),
        }
    }

    /// Handoff URL for the browser collaborator, indexed into the visible list.
    pub fn article_url(&self, index: usize) -> Option<String> {
        self.visible_articles().get(index).map(|a| a.url.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::app::Result;
    use crate::domain::FetchError;
    use crate::fetcher::Fetcher;

    struct CountingFetcher {
        calls: AtomicUsize,
        body: String,
    }

    impl CountingFetcher {
        fn serving(body: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                body: body.to_string(),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Fetcher for CountingFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.clone().into_bytes())
        }
    }

    const STORM_PAYLOAD: &str = r#"{"articles":[{"title":"Storm hits coast","date":"Jan 1","url":"https://n.example/1","source":"Wire"}]}"#;

    fn feed_over(fetcher: Arc<CountingFetcher>) -> NewsFeed {
        let source = Arc::new(ArticleSource::new(fetcher, "https://n.example/news"));
        NewsFeed::new(source)
    }

    #[tokio::test]
    async fn test_starts_loading_then_loads_in_response_order() {
        let mut feed = feed_over(CountingFetcher::serving(STORM_PAYLOAD));
        assert!(feed.state().is_loading());

        feed.refresh().await;

        let articles = feed.state().articles().expect("should be loaded");
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Storm hits coast");
        assert_eq!(articles[0].image, None);
    }

    #[tokio::test]
    async fn test_clearing_search_term_triggers_new_fetch() {
        let fetcher = CountingFetcher::serving(STORM_PAYLOAD);
        let mut feed = feed_over(fetcher.clone());

        feed.refresh().await;
        assert_eq!(fetcher.calls(), 1);

        feed.set_search_term("Storm").await;
        assert_eq!(fetcher.calls(), 1);

        feed.set_search_term("").await;
        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test]
    async fn test_setting_empty_term_twice_fetches_once() {
        let fetcher = CountingFetcher::serving(STORM_PAYLOAD);
        let mut feed = feed_over(fetcher.clone());

        feed.refresh().await;
        feed.set_search_term("").await;
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_restore_policy_does_not_refetch() {
        let fetcher = CountingFetcher::serving(STORM_PAYLOAD);
        let source = Arc::new(ArticleSource::new(
            fetcher.clone(),
            "https://n.example/news",
        ));
        let mut feed = NewsFeed::new(source).with_clear_behavior(ClearBehavior::Restore);

        feed.refresh().await;
        feed.set_search_term("Storm").await;
        feed.set_search_term("").await;

        assert_eq!(fetcher.calls(), 1);
        assert_eq!(feed.visible_articles().len(), 1);
    }

    #[tokio::test]
    async fn test_last_applied_completion_wins() {
        let mut feed = feed_over(CountingFetcher::serving(STORM_PAYLOAD));

        // Two racing fetches: the one issued first lands last.
        let first = FetchState::Failed(FetchError::ErrorCode(500));
        let second = FetchState::Loaded(vec![ArticleRecord {
            title: "Fresh".into(),
            date: "Jan 2".into(),
            url: "https://n.example/2".into(),
            image: None,
            source: "Wire".into(),
        }]);

        feed.begin_refresh();
        feed.apply(second);
        feed.apply(first.clone());

        assert_eq!(feed.state(), &first);
    }

    #[tokio::test]
    async fn test_case_sensitive_search_end_to_end() {
        let mut feed = feed_over(CountingFetcher::serving(STORM_PAYLOAD));
        feed.refresh().await;

        feed.set_search_term("storm").await;
        assert!(feed.visible_articles().is_empty());

        feed.set_search_term("Storm").await;
        assert_eq!(feed.visible_articles().len(), 1);
    }

    #[test]
    fn test_article_url_indexes_visible_list() {
        tokio_test::block_on(async {
            let mut feed = feed_over(CountingFetcher::serving(STORM_PAYLOAD));
            feed.refresh().await;

            assert_eq!(
                feed.article_url(0).as_deref(),
                Some("https://n.example/1")
            );
            assert_eq!(feed.article_url(1), None);
        });
    }
}
