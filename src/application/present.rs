//! Result presentation
//!
//! Maps a pipeline outcome to one display string and applies it on the
//! presentation context: a dedicated thread that owns the display surface.
//! Workers hand text over through a channel and wait for the write to land.

use std::thread::{self, JoinHandle};

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

use super::ports::DisplaySurface;
use crate::domain::translation::{FailureKind, LanguageCode, LanguageTable, PipelineOutcome};

/// Name of the presentation thread
pub const PRESENTATION_THREAD: &str = "presentation";

/// Shown for every reported failure except a malformed URL
pub const GENERIC_ERROR_MESSAGE: &str = "An error has occurred, please try your request again.";

/// Shown when the request URL could not be built
pub const URL_ERROR_MESSAGE: &str = "There has been an error processing your translation request.";

/// Shown for missing input when empty input is reported
pub const NOTHING_TO_TRANSLATE_MESSAGE: &str = "Nothing to translate.";

/// Presentation errors
#[derive(Debug, Error)]
pub enum PresentError {
    #[error("Failed to start presentation thread: {0}")]
    SpawnFailed(String),

    #[error("Presentation context is closed")]
    ContextClosed,

    #[error("Presentation thread panicked")]
    Panicked,
}

struct PendingWrite {
    text: String,
    applied: oneshot::Sender<()>,
}

/// Owner of the presentation thread.
///
/// Dropping every handle and calling [`PresentationContext::shutdown`] stops
/// the thread and hands the surface back.
pub struct PresentationContext<D: DisplaySurface + 'static> {
    sender: mpsc::UnboundedSender<PendingWrite>,
    thread: JoinHandle<D>,
}

impl<D: DisplaySurface + 'static> PresentationContext<D> {
    /// Move the surface onto a new presentation thread
    pub fn spawn(mut surface: D) -> Result<Self, PresentError> {
        let (sender, mut receiver) = mpsc::unbounded_channel::<PendingWrite>();

        let thread = thread::Builder::new()
            .name(PRESENTATION_THREAD.to_string())
            .spawn(move || {
                while let Some(write) = receiver.blocking_recv() {
                    surface.set_text(&write.text);
                    let _ = write.applied.send(());
                }
                surface
            })
            .map_err(|e| PresentError::SpawnFailed(e.to_string()))?;

        Ok(Self { sender, thread })
    }

    /// Get a handle for submitting writes
    pub fn handle(&self) -> PresentationHandle {
        PresentationHandle {
            sender: self.sender.clone(),
        }
    }

    /// Stop the thread once outstanding writes are applied and return the surface.
    /// Blocks until every handle is dropped.
    pub fn shutdown(self) -> Result<D, PresentError> {
        drop(self.sender);
        self.thread.join().map_err(|_| PresentError::Panicked)
    }
}

/// Cloneable sender of display writes
#[derive(Clone)]
pub struct PresentationHandle {
    sender: mpsc::UnboundedSender<PendingWrite>,
}

impl PresentationHandle {
    /// Apply text on the presentation thread and wait until it is written
    pub async fn apply(&self, text: impl Into<String>) -> Result<(), PresentError> {
        let (applied, done) = oneshot::channel();
        self.sender
            .send(PendingWrite {
                text: text.into(),
                applied,
            })
            .map_err(|_| PresentError::ContextClosed)?;
        done.await.map_err(|_| PresentError::ContextClosed)
    }
}

/// Maps outcomes to user-facing text
#[derive(Debug, Clone, Default)]
pub struct ResultPresenter {
    languages: LanguageTable,
}

impl ResultPresenter {
    pub fn new(languages: LanguageTable) -> Self {
        Self { languages }
    }

    /// Render the single display string for an outcome.
    ///
    /// Failure details never reach the user; only the generic messages do.
    pub fn render(&self, outcome: &PipelineOutcome, target: &LanguageCode) -> String {
        match outcome {
            PipelineOutcome::Success(text) => {
                let label = self.languages.label(target).unwrap_or(target.as_str());
                format!("{} Text: {}", label, text)
            }
            PipelineOutcome::Failure(FailureKind::MalformedUrl(_)) => URL_ERROR_MESSAGE.to_string(),
            PipelineOutcome::Failure(FailureKind::NoActionableInput) => {
                NOTHING_TO_TRANSLATE_MESSAGE.to_string()
            }
            PipelineOutcome::Failure(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// Log the outcome, render it, and write it on the presentation context
    pub async fn present(
        &self,
        outcome: &PipelineOutcome,
        target: &LanguageCode,
        display: &PresentationHandle,
    ) -> Result<(), PresentError> {
        match outcome {
            PipelineOutcome::Success(_) => {
                tracing::info!(target_language = %target, "translation succeeded")
            }
            PipelineOutcome::Failure(kind) => tracing::warn!(error = %kind, "translation failed"),
        }
        display.apply(self.render(outcome, target)).await
    }
}
