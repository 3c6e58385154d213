//! Domain error types

use thiserror::Error;

/// Error when parsing a language code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid language code: \"{input}\". Expected a two-letter code (e.g., es, fr, de)")]
pub struct InvalidLanguageError {
    pub input: String,
}

/// Error when building a translation request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Source text is empty")]
    EmptySourceText,

    #[error("Unsupported target language: \"{0}\"")]
    UnsupportedLanguage(String),

    #[error("Malformed request URL: {0}")]
    MalformedUrl(String),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
