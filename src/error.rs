//! Error types for content lookups.

use thiserror::Error;

/// Errors returned by the content layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The requested code is not one of the configured languages.
    #[error("Unknown language code: '{code}'")]
    UnknownLanguage { code: String },
}

impl ContentError {
    pub fn unknown_language(code: impl Into<String>) -> Self {
        Self::UnknownLanguage { code: code.into() }
    }
}
