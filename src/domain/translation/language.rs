//! Target language value objects

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidLanguageError;

/// Default target language code
pub const DEFAULT_TARGET: &str = "es";

/// Label used for the default target language
pub const DEFAULT_TARGET_LABEL: &str = "Spanish";

/// Two-letter lowercase language code (e.g. "es").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self(DEFAULT_TARGET.to_string())
    }
}

impl FromStr for LanguageCode {
    type Err = InvalidLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        if code.len() == 2 && code.chars().all(|c| c.is_ascii_lowercase()) {
            Ok(Self(code))
        } else {
            Err(InvalidLanguageError { input: s.to_string() })
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lookup of supported target languages, code to display label.
///
/// Loaded from configuration so new languages need no pipeline changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    labels: BTreeMap<LanguageCode, String>,
}

impl LanguageTable {
    /// Build a table from raw `code -> label` pairs.
    ///
    /// Fails on the first entry whose code is not a valid language code.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, InvalidLanguageError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut labels = BTreeMap::new();
        for (code, label) in entries {
            labels.insert(code.as_ref().parse::<LanguageCode>()?, label.into());
        }
        Ok(Self { labels })
    }

    /// Display label for a code, if supported
    pub fn label(&self, code: &LanguageCode) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    /// Whether the code is in the table
    pub fn supports(&self, code: &LanguageCode) -> bool {
        self.labels.contains_key(code)
    }

    /// Iterate over supported codes in order
    pub fn codes(&self) -> impl Iterator<Item = &LanguageCode> {
        self.labels.keys()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        let mut labels = BTreeMap::new();
        labels.insert(LanguageCode::default(), DEFAULT_TARGET_LABEL.to_string());
        Self { labels }
    }
}
