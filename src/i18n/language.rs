//! Language type: Validated language handle.
//!
//! A `Language` can only be built for a code present in the registry, so
//! every accessor on it is infallible.

use crate::error::ContentError;
use crate::i18n::{LanguageConfig, LanguageRegistry, LocalizedContent};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "hi")
    code: &'static str,
}

/// Normalize a raw language tag to the form used by the registry.
///
/// Trims whitespace, lowercases, treats `_` as `-` and keeps the primary
/// subtag, so `" en-US "` and `"hi_IN"` become `"en"` and `"hi"`.
pub fn normalize_code(code: &str) -> String {
    code.trim()
        .to_ascii_lowercase()
        .replace('_', "-")
        .split('-')
        .next()
        .unwrap_or_default()
        .to_string()
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const HINDI: Language = Language { code: "hi" };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - A language tag (e.g., "en", "HI", "hi-IN"), normalized
    ///   first with [`normalize_code`]
    ///
    /// # Returns
    /// * `Ok(Language)` if the normalized code is registered
    /// * `Err(ContentError::UnknownLanguage)` carrying the raw code otherwise
    pub fn from_code(code: &str) -> Result<Language, ContentError> {
        let normalized = normalize_code(code);

        LanguageRegistry::get()
            .get_by_code(&normalized)
            .map(|config| Language {
                code: config.code, // Use the static str from the registry
            })
            .ok_or_else(|| ContentError::unknown_language(code))
    }

    /// Get the default (fallback) language.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// Language built through `from_code`, `default_language` or a constant.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language (e.g., "Hindi").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "हिन्दी").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the fallback language.
    ///
    /// # Returns
    /// `true` for exactly one registered language (English).
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// Get the content block registered for this language.
    ///
    /// # Returns
    /// The static `LocalizedContent`, whose `language_code` equals
    /// [`Language::code`].
    pub fn content(&self) -> &'static LocalizedContent {
        self.config().content
    }

    /// Guidelines text for this language, verbatim.
    pub fn guidelines(&self) -> &'static str {
        self.content().guidelines
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
