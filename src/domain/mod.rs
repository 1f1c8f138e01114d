pub mod article;
pub mod state;

pub use article::{ArticleFeed, ArticleRecord};
pub use state::{FetchError, FetchState};
