//! Display surface infrastructure module

mod terminal;

pub use terminal::TerminalDisplay;
