//! Translation domain module

mod language;
mod outcome;
mod request;
mod response;

pub use language::{LanguageCode, LanguageTable, DEFAULT_TARGET, DEFAULT_TARGET_LABEL};
pub use outcome::{FailureKind, PipelineOutcome};
pub use request::{RequestBuilder, TranslationRequest, DEFAULT_ENDPOINT};
pub use response::interpret;
