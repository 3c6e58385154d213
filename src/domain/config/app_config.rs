//! Application configuration value object

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::{ConfigError, InvalidLanguageError};
use crate::domain::translation::{
    LanguageCode, LanguageTable, DEFAULT_ENDPOINT, DEFAULT_TARGET, DEFAULT_TARGET_LABEL,
};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub target: Option<String>,
    pub report_empty: Option<bool>,
    pub languages: Option<BTreeMap<String, String>>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            endpoint: Some(DEFAULT_ENDPOINT.to_string()),
            target: Some(DEFAULT_TARGET.to_string()),
            report_empty: Some(false),
            languages: Some(BTreeMap::from([(
                DEFAULT_TARGET.to_string(),
                DEFAULT_TARGET_LABEL.to_string(),
            )])),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    /// Language tables are merged entry by entry.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            endpoint: other.endpoint.or(self.endpoint),
            target: other.target.or(self.target),
            report_empty: other.report_empty.or(self.report_empty),
            languages: Self::merge_languages(self.languages, other.languages),
        }
    }

    fn merge_languages(
        base: Option<BTreeMap<String, String>>,
        other: Option<BTreeMap<String, String>>,
    ) -> Option<BTreeMap<String, String>> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(mut b), Some(o)) => {
                b.extend(o);
                Some(b)
            }
        }
    }

    /// Get endpoint, or the default service endpoint if not set
    pub fn endpoint_or_default(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Get target language as parsed code
    pub fn target_code(&self) -> Result<LanguageCode, InvalidLanguageError> {
        match self.target.as_deref() {
            Some(target) => target.parse(),
            None => Ok(LanguageCode::default()),
        }
    }

    /// Get report_empty setting, or false if not set
    pub fn report_empty_or_default(&self) -> bool {
        self.report_empty.unwrap_or(false)
    }

    /// Build the language lookup table, or the default table if none is configured
    pub fn language_table(&self) -> Result<LanguageTable, ConfigError> {
        match self.languages.as_ref() {
            Some(languages) if !languages.is_empty() => LanguageTable::from_entries(languages)
                .map_err(|e| ConfigError::ValidationError {
                    key: format!("languages.{}", e.input),
                    message: e.to_string(),
                }),
            _ => Ok(LanguageTable::default()),
        }
    }
}
