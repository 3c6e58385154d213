//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod attachment;
pub mod client;
pub mod config;
pub mod display;

// Re-export common types
pub use attachment::{is_plain_text, Attachment, AttachmentError, InputItem, PLAIN_TEXT};
pub use client::{ClientError, TranslationClient};
pub use config::ConfigStore;
pub use display::DisplaySurface;
