//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::translation::{LanguageCode, LanguageTable};

/// QuickTranslate - translate a piece of text with a remote translation service
#[derive(Parser, Debug)]
#[command(name = "quick-translate")]
#[command(version)]
#[command(about = "Single-shot text translation using a remote translation service")]
#[command(long_about = None)]
pub struct Cli {
    /// Files to translate ('-' reads stdin). The first plain-text input wins
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Text to translate (checked before files)
    #[arg(short = 't', long, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Target language code (e.g., es)
    #[arg(short = 'l', long, value_name = "CODE")]
    pub target: Option<String>,

    /// Translation endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Show a message when there is nothing to translate
    #[arg(long)]
    pub report_empty: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed translate options (one-shot mode)
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub texts: Vec<String>,
    pub files: Vec<PathBuf>,
    pub api_key: Option<String>,
    pub endpoint: String,
    pub target: LanguageCode,
    pub languages: LanguageTable,
    pub report_empty: bool,
}

/// Valid scalar config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["api_key", "endpoint", "target", "report_empty"];

/// Prefix of per-language label keys (e.g. `languages.fr`)
pub const LANGUAGES_KEY_PREFIX: &str = "languages.";

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    if let Some(code) = key.strip_prefix(LANGUAGES_KEY_PREFIX) {
        return code.parse::<LanguageCode>().is_ok();
    }
    VALID_CONFIG_KEYS.contains(&key)
}
