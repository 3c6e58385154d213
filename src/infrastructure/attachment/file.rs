//! File-backed attachment adapter

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{Attachment, AttachmentError, PLAIN_TEXT};

/// Content type for anything that is not recognised as text
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Extensions treated as plain text
const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

/// Guess a content type from a file's extension.
/// Files without an extension are assumed to be text.
pub fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        None => PLAIN_TEXT,
        Some(ext) if TEXT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) => PLAIN_TEXT,
        Some(_) => OCTET_STREAM,
    }
}

/// Attachment backed by a file on disk
#[derive(Debug, Clone)]
pub struct FileAttachment {
    path: PathBuf,
    content_type: String,
}

impl FileAttachment {
    /// Create an attachment, guessing its content type from the extension
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let content_type = guess_content_type(&path).to_string();
        Self { path, content_type }
    }

    /// Create an attachment with an explicit content type
    pub fn with_content_type(path: impl Into<PathBuf>, content_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content_type: content_type.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Attachment for FileAttachment {
    fn content_type(&self) -> &str {
        &self.content_type
    }

    async fn load(&self, content_type: &str) -> Result<Option<String>, AttachmentError> {
        if !self.conforms_to(content_type) {
            return Err(AttachmentError::UnsupportedType(content_type.to_string()));
        }

        let bytes = fs::read(&self.path).await.map_err(|e| {
            AttachmentError::ReadFailed(format!("{}: {}", self.path.display(), e))
        })?;

        // Bytes that are not UTF-8 are not a text payload
        Ok(String::from_utf8(bytes).ok())
    }
}
