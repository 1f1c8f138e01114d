use tokio::sync::watch;
use url::Url;

use crate::fetcher::Fetcher;

/// Rewrites a leading `http://` to `https://`. Textual prefix replacement
/// only; anything else passes through untouched.
pub fn normalize_image_url(raw: &str) -> String {
    match raw.strip_prefix("http://") {
        Some(rest) => format!("https://{}", rest),
        None => raw.to_string(),
    }
}

/// One-shot thumbnail fetcher for a single article row.
///
/// The buffer starts empty and is overwritten at most once, on a successful
/// non-empty response. Every failure is swallowed after logging: an invalid
/// URL or a failed fetch leaves the buffer empty forever, and consumers
/// render a placeholder. Empty-initial and empty-failed are indistinguishable
/// by contract. No retry, no shared cache; duplicate URLs re-fetch.
pub struct ImageLoader {
    url: Option<Url>,
    buffer: watch::Sender<Vec<u8>>,
}

impl ImageLoader {
    pub fn new(raw_url: &str) -> Self {
        let normalized = normalize_image_url(raw_url);
        let url = match Url::parse(&normalized) {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!("Invalid image URL {:?}: {}", raw_url, err);
                None
            }
        };

        let (buffer, _) = watch::channel(Vec::new());
        Self { url, buffer }
    }

    /// The resolved fetch target, if the URL parsed.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Observable handle for a display consumer.
    pub fn subscribe(&self) -> watch::Receiver<Vec<u8>> {
        self.buffer.subscribe()
    }

    /// Snapshot of the current buffer contents.
    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.borrow().is_empty()
    }

    /// Issue the one GET. Never returns an error; the buffer either fills
    /// once or stays empty.
    pub async fn load(&self, fetcher: &(dyn Fetcher + Send + Sync)) {
        let Some(url) = &self.url else {
            return;
        };

        match fetcher.fetch(url.as_str()).await {
            Ok(bytes) if !bytes.is_empty() => {
                tracing::debug!("Loaded {} image bytes from {}", bytes.len(), url);
                self.buffer.send_replace(bytes);
            }
            Ok(_) => {
                tracing::warn!("Image fetch from {} returned an empty body", url);
            }
            Err(err) => {
                tracing::warn!("Image fetch from {} failed: {}", url, err);
            }
        }
    }
}
