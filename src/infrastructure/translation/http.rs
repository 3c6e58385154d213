//! HTTP translation client adapter

use async_trait::async_trait;
use url::Url;

use crate::application::ports::{ClientError, TranslationClient};

/// Translation client using reqwest with transport defaults
pub struct HttpTranslationClient {
    client: reqwest::Client,
}

impl HttpTranslationClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTranslationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationClient for HttpTranslationClient {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, ClientError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        if body.is_empty() {
            return Err(ClientError::EmptyBody);
        }

        Ok(body.to_vec())
    }
}
