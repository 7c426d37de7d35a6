//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is built once on first access (`OnceLock`) from the static
//! content tables and is never mutated afterwards.

use crate::i18n::content::{LocalizedContent, ENGLISH_CONTENT, HINDI_CONTENT};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "hi")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Hindi")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "हिन्दी")
    pub native_name: &'static str,

    /// Whether this is the fallback language (exactly one should be true)
    pub is_default: bool,

    /// Guidelines served for this language
    pub content: &'static LocalizedContent,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Arguments
    /// * `code` - An already normalized ISO 639-1 code (e.g., "en", "hi");
    ///   see [`crate::i18n::normalize_code`]
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language is registered
    /// * `None` otherwise, including for region tags like "hi-IN"
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages.
    ///
    /// # Returns
    /// A vector of references to every `LanguageConfig`, in registration
    /// order (default language first).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get all language codes in registration order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.languages.iter().map(|lang| lang.code).collect()
    }

    /// Get the default (fallback) language configuration.
    ///
    /// # Panics
    /// Panics if the static table defines zero or several default languages.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Number of registered languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Check if no language is registered
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Built-in languages: English (default) and Hindi.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            content: &ENGLISH_CONTENT,
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिन्दी",
            is_default: false,
            content: &HINDI_CONTENT,
        },
    ]
}
