//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the filesystem, the translation API, and the terminal.

pub mod attachment;
pub mod config;
pub mod display;
pub mod translation;

// Re-export adapters
pub use attachment::{FileAttachment, StdinAttachment, TextAttachment};
pub use config::XdgConfigStore;
pub use display::TerminalDisplay;
pub use translation::HttpTranslationClient;
