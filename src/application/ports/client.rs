//! Translation client port interface

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Transport-level errors
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Response body is empty")]
    EmptyBody,
}

/// Port for the remote translation service
#[async_trait]
pub trait TranslationClient: Send + Sync {
    /// Issue a single GET against the request URL.
    ///
    /// # Returns
    /// The raw response body, or a transport error
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, ClientError>;
}
