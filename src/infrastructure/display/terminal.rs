//! Terminal display surface

use std::io::{self, Stdout, Write};

use crate::application::ports::DisplaySurface;

/// Display surface writing each result as one line.
/// Stdout carries only results; status goes to stderr.
pub struct TerminalDisplay<W: Write + Send = Stdout> {
    out: W,
    last: Option<String>,
}

impl TerminalDisplay<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    /// The most recently displayed text
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> DisplaySurface for TerminalDisplay<W> {
    fn set_text(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "failed to write result");
        }
        self.last = Some(text.to_string());
    }
}
