//! Pipeline outcome value objects

use thiserror::Error;

/// Why a translation attempt produced no text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("No plain-text input to translate")]
    NoActionableInput,

    #[error("Malformed request URL: {0}")]
    MalformedUrl(String),

    #[error("Network request failed: {0}")]
    NetworkFailure(String),

    #[error("Malformed JSON response: {0}")]
    MalformedJson(String),

    #[error("Translation output list is empty")]
    EmptyOutputList,

    #[error("Unrecognized response shape at outputs.output")]
    UnrecognizedShape,
}

/// Terminal value of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    Success(String),
    Failure(FailureKind),
}

impl PipelineOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Translated text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Success(text) => Some(text),
            Self::Failure(_) => None,
        }
    }
}

impl From<Result<String, FailureKind>> for PipelineOutcome {
    fn from(result: Result<String, FailureKind>) -> Self {
        match result {
            Ok(text) => Self::Success(text),
            Err(kind) => Self::Failure(kind),
        }
    }
}
