//! Standard input attachment

use async_trait::async_trait;
use tokio::io::{self, AsyncReadExt};

use crate::application::ports::{Attachment, AttachmentError, PLAIN_TEXT};

/// Attachment that reads standard input when loaded
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinAttachment;

impl StdinAttachment {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Attachment for StdinAttachment {
    fn content_type(&self) -> &str {
        PLAIN_TEXT
    }

    async fn load(&self, content_type: &str) -> Result<Option<String>, AttachmentError> {
        if !self.conforms_to(content_type) {
            return Err(AttachmentError::UnsupportedType(content_type.to_string()));
        }

        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .await
            .map_err(|e| AttachmentError::ReadFailed(format!("stdin: {}", e)))?;

        Ok(String::from_utf8(bytes).ok())
    }
}
