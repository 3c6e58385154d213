//! Input extraction
//!
//! Finds the first plain-text attachment offered by the host and loads it.

use std::sync::Arc;

use super::ports::{Attachment, AttachmentError, InputItem, PLAIN_TEXT};

/// Find the first plain-text attachment, scanning items then attachments in order.
pub fn find_text_attachment(items: &[InputItem]) -> Option<Arc<dyn Attachment>> {
    items
        .iter()
        .flat_map(|item| item.attachments().iter())
        .find(|attachment| attachment.conforms_to(PLAIN_TEXT))
        .cloned()
}

/// Locate and load the text to translate.
///
/// Returns `None` when there is nothing actionable: no plain-text attachment,
/// a payload that is not text, a failed load, or blank text. Only the first
/// match is ever loaded.
pub async fn extract_text(items: &[InputItem]) -> Option<String> {
    let Some(attachment) = find_text_attachment(items) else {
        tracing::debug!(items = items.len(), "no plain-text attachment found");
        return None;
    };

    let load = tokio::spawn(async move { attachment.load(PLAIN_TEXT).await });

    let loaded = match load.await {
        Ok(result) => result,
        Err(e) => Err(AttachmentError::TaskFailed(e.to_string())),
    };

    match loaded {
        Ok(Some(text)) if !text.trim().is_empty() => Some(text),
        Ok(Some(_)) => {
            tracing::debug!("plain-text attachment is blank");
            None
        }
        Ok(None) => {
            tracing::debug!("attachment yielded no text payload");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load attachment");
            None
        }
    }
}
