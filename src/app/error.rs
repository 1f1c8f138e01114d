use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewswireError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status code: {0}")]
    Status(u16),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No article at index {0}")]
    ArticleNotFound(usize),
}

pub type Result<T> = std::result::Result<T, NewswireError>;
