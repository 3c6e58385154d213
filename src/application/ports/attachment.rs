//! Attachment port interface

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Content type identifier for plain text
pub const PLAIN_TEXT: &str = "text/plain";

/// Alternate plain-text identifier used by some hosts
pub const PLAIN_TEXT_ALIAS: &str = "public.plain-text";

/// Check whether a content type identifier denotes plain text.
/// Parameters such as `; charset=utf-8` are ignored.
pub fn is_plain_text(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == PLAIN_TEXT || essence == PLAIN_TEXT_ALIAS
}

/// Attachment load errors
#[derive(Debug, Clone, Error)]
pub enum AttachmentError {
    #[error("Failed to read attachment: {0}")]
    ReadFailed(String),

    #[error("Attachment does not provide '{0}'")]
    UnsupportedType(String),

    #[error("Attachment load task failed: {0}")]
    TaskFailed(String),
}

/// Port for a unit of data offered by the host
#[async_trait]
pub trait Attachment: Send + Sync {
    /// Content type identifier of this attachment
    fn content_type(&self) -> &str;

    /// Whether this attachment can provide the given content type
    fn conforms_to(&self, content_type: &str) -> bool {
        if is_plain_text(content_type) {
            is_plain_text(self.content_type())
        } else {
            self.content_type().eq_ignore_ascii_case(content_type)
        }
    }

    /// Load the payload as the given content type.
    ///
    /// `Ok(None)` means the payload exists but is not text of that type.
    async fn load(&self, content_type: &str) -> Result<Option<String>, AttachmentError>;
}

/// A host-supplied container of attachments
#[derive(Clone, Default)]
pub struct InputItem {
    attachments: Vec<Arc<dyn Attachment>>,
}

impl InputItem {
    pub fn new(attachments: Vec<Arc<dyn Attachment>>) -> Self {
        Self { attachments }
    }

    /// Create an item holding a single attachment
    pub fn single(attachment: impl Attachment + 'static) -> Self {
        Self::new(vec![Arc::new(attachment)])
    }

    pub fn attachments(&self) -> &[Arc<dyn Attachment>] {
        &self.attachments
    }
}

impl fmt::Debug for InputItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<&str> = self.attachments.iter().map(|a| a.content_type()).collect();
        f.debug_struct("InputItem")
            .field("attachments", &types)
            .finish()
    }
}
