//! In-memory text attachment

use async_trait::async_trait;

use crate::application::ports::{Attachment, AttachmentError, PLAIN_TEXT};

/// Attachment holding text already in memory (CLI arguments, stdin)
#[derive(Debug, Clone)]
pub struct TextAttachment {
    text: String,
}

impl TextAttachment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl Attachment for TextAttachment {
    fn content_type(&self) -> &str {
        PLAIN_TEXT
    }

    async fn load(&self, content_type: &str) -> Result<Option<String>, AttachmentError> {
        if !self.conforms_to(content_type) {
            return Err(AttachmentError::UnsupportedType(content_type.to_string()));
        }
        Ok(Some(self.text.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_as_plain_text() {
        let attachment = TextAttachment::new("Hello");
        assert!(attachment.conforms_to(PLAIN_TEXT));
        assert_eq!(
            attachment.load(PLAIN_TEXT).await.unwrap(),
            Some("Hello".to_string())
        );
    }

    #[tokio::test]
    async fn refuses_other_types() {
        let attachment = TextAttachment::new("Hello");
        assert!(!attachment.conforms_to("image/png"));
        assert!(matches!(
            attachment.load("image/png").await,
            Err(AttachmentError::UnsupportedType(_))
        ));
    }
}
