pub mod http;

use async_trait::async_trait;

use crate::app::Result;

#[async_trait]
pub trait Fetcher {
    /// Issue one GET and return the response body bytes.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
