use crate::domain::ArticleRecord;

/// Returns the subsequence of `all` whose titles contain `term` as a literal,
/// case-sensitive substring, preserving order. No normalization, no ranking.
///
/// An empty term returns the full list unchanged; the "clearing the search
/// re-fetches" policy lives in [`NewsFeed`](crate::feed::NewsFeed), not here.
pub fn filter(all: &[ArticleRecord], term: &str) -> Vec<ArticleRecord> {
    if term.is_empty() {
        return all.to_vec();
    }

    all.iter()
        .filter(|article| article.title.contains(term))
        .cloned()
        .collect()
}
