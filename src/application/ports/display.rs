//! Display surface port interface

/// Port for the text surface the result is written to.
///
/// Implementations are only ever touched from the presentation context,
/// so they need to be `Send` but not `Sync`.
pub trait DisplaySurface: Send {
    /// Replace the displayed text
    fn set_text(&mut self, text: &str);
}

impl DisplaySurface for Box<dyn DisplaySurface> {
    fn set_text(&mut self, text: &str) {
        self.as_mut().set_text(text)
    }
}
