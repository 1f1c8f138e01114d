use thiserror::Error;

use crate::domain::ArticleRecord;

/// Tri-state outcome of an article-list retrieval.
///
/// Exactly one variant is active at a time. Transitions are
/// `Loading → Loaded` or `Loading → Failed`, driven solely by fetch
/// completion; a new fetch resets a terminal state back to `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    /// Insertion order equals API response order.
    Loaded(Vec<ArticleRecord>),
    Failed(FetchError),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn articles(&self) -> Option<&[ArticleRecord]> {
        match self {
            FetchState::Loaded(articles) => Some(articles),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Closed set of failure classifications, with user-facing messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The response body did not match the expected shape.
    #[error("Failed to decode the object from the service")]
    Decoding,

    /// Non-success HTTP status.
    #[error("{0} - Something went wrong")]
    ErrorCode(u16),

    /// Anything else, including transport failure.
    #[error("The error is unknown")]
    Unknown,
}
