//! QuickTranslate - single-shot text translation
//!
//! This crate takes a piece of text offered by a host, sends it to a remote
//! translation service, and writes one human-readable result to a display
//! surface.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Language codes, request building, response interpretation, outcomes
//! - **Application**: The translation pipeline, presentation context, and port traits
//! - **Infrastructure**: Adapter implementations (HTTP client, attachments, terminal, config)
//! - **CLI**: Command-line host, argument parsing, and logging setup

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
