//! Attachment infrastructure module
//!
//! Attachments the command-line host can offer: in-memory text, stdin, and files.

mod file;
mod stdin;
mod text;

pub use file::{guess_content_type, FileAttachment, OCTET_STREAM};
pub use stdin::StdinAttachment;
pub use text::TextAttachment;
