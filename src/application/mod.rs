//! Application layer - Use cases and port interfaces
//!
//! Contains the translation pipeline stages and trait definitions
//! for external system interactions.

pub mod extract;
pub mod ports;
pub mod present;
pub mod translate;

// Re-export use cases
pub use extract::{extract_text, find_text_attachment};
pub use present::{PresentError, PresentationContext, PresentationHandle, ResultPresenter};
pub use translate::{
    TranslateCallbacks, TranslateError, TranslateInput, TranslateOutput, TranslateTextUseCase,
};
