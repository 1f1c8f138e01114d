//! # Newswire
//!
//! A thin client for a remote news-article endpoint.
//!
//! The whole system is a single fetch-and-render loop:
//!
//! ```text
//! Fetcher → ArticleSource → NewsFeed → (rendering consumer)
//! ```
//!
//! - [`fetcher`]: HTTP transport behind an async trait
//! - [`source`]: fetches and decodes the article list into a [`FetchState`](domain::FetchState)
//! - [`feed`]: in-memory view state (fetch state, search term, clear policy)
//! - [`search`]: pure title-substring filtering
//! - [`images`]: per-article thumbnail loader with placeholder semantics
//!
//! There is no persistence, no retry, and no request de-duplication:
//! concurrent fetches race and the last completion wins.

/// Application context and error handling.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Core domain models.
///
/// - [`ArticleRecord`](domain::ArticleRecord): one news item's displayable metadata
/// - [`FetchState`](domain::FetchState): tri-state outcome of a list retrieval
/// - [`FetchError`](domain::FetchError): closed set of failure classifications
pub mod domain;

/// In-memory view state wiring fetching, searching, and selection together.
pub mod feed;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for byte-level GETs
/// - [`HttpFetcher`](fetcher::http::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Per-article thumbnail loading.
///
/// One [`ImageLoader`](images::ImageLoader) per article row; failures degrade
/// to a permanently empty buffer that consumers render as a placeholder.
pub mod images;

/// Title filtering.
pub mod search;

/// Article-list retrieval and failure classification.
pub mod source;
