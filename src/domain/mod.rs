//! Domain layer - Core business logic
//!
//! Contains value objects, the pipeline outcome, and domain errors.
//! This layer performs no I/O.

pub mod config;
pub mod error;
pub mod translation;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use translation::{
    FailureKind, LanguageCode, LanguageTable, PipelineOutcome, RequestBuilder, TranslationRequest,
};
