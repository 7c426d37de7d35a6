//! Localized content store: read-only access to guidelines by language code.

use crate::error::ContentError;
use crate::i18n::{Language, LanguageRegistry, LookupMetrics};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// What to do when a requested language code is not configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Fail with `ContentError::UnknownLanguage`
    Strict,
    /// Serve the default language and mark the result as a fallback
    #[default]
    DefaultLanguage,
}

impl FromStr for FallbackPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "default" | "default_language" => Ok(Self::DefaultLanguage),
            other => anyhow::bail!(
                "Invalid fallback policy: '{}'. Expected 'strict' or 'default'",
                other
            ),
        }
    }
}

/// Result of resolving a language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// Code as supplied by the caller
    pub requested: String,

    /// Language whose content was returned
    pub language: Language,

    /// Guidelines text, verbatim
    pub guidelines: &'static str,

    /// `true` when `language` is the default language standing in for an
    /// unknown code
    pub fell_back: bool,
}

/// Immutable mapping from language code to guidelines text.
pub struct LocalizedContentStore {
    registry: &'static LanguageRegistry,
    metrics: LookupMetrics,
}

static STORE: OnceLock<LocalizedContentStore> = OnceLock::new();

impl LocalizedContentStore {
    /// Create a store over the static registry with fresh metrics.
    pub fn new() -> Self {
        Self {
            registry: LanguageRegistry::get(),
            metrics: LookupMetrics::new(),
        }
    }

    /// Get the process-wide store, initializing it on first call.
    pub fn global() -> &'static LocalizedContentStore {
        STORE.get_or_init(LocalizedContentStore::new)
    }

    /// Return the guidelines text for a configured language.
    ///
    /// # Errors
    /// `ContentError::UnknownLanguage` when the code is not configured.
    pub fn get(&self, language_code: &str) -> Result<&'static str, ContentError> {
        self.lookup(language_code, FallbackPolicy::Strict)
            .map(|lookup| lookup.guidelines)
    }

    /// Resolve a language code under the given fallback policy.
    pub fn lookup(
        &self,
        language_code: &str,
        policy: FallbackPolicy,
    ) -> Result<Lookup, ContentError> {
        match Language::from_code(language_code) {
            Ok(language) => {
                self.metrics.record_hit();
                debug!("Content lookup for '{}' resolved to {}", language_code, language);
                Ok(Lookup {
                    requested: language_code.to_string(),
                    language,
                    guidelines: language.guidelines(),
                    fell_back: false,
                })
            }
            Err(err) => match policy {
                FallbackPolicy::Strict => {
                    self.metrics.record_unknown();
                    warn!("Rejected content lookup: {}", err);
                    Err(err)
                }
                FallbackPolicy::DefaultLanguage => {
                    let language = Language::default_language();
                    self.metrics.record_fallback();
                    warn!(
                        "Unknown language '{}', falling back to {}",
                        language_code, language
                    );
                    Ok(Lookup {
                        requested: language_code.to_string(),
                        language,
                        guidelines: language.guidelines(),
                        fell_back: true,
                    })
                }
            },
        }
    }

    /// Whether a code (after normalization) is configured.
    pub fn contains(&self, language_code: &str) -> bool {
        Language::from_code(language_code).is_ok()
    }

    /// All configured languages, in registry order.
    pub fn languages(&self) -> Vec<Language> {
        self.registry
            .codes()
            .into_iter()
            .filter_map(|code| Language::from_code(code).ok())
            .collect()
    }

    pub fn registry(&self) -> &'static LanguageRegistry {
        self.registry
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }
}

impl Default for LocalizedContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== get Tests ====================

    #[test]
    fn test_get_english_contains_first_guideline() {
        let store = LocalizedContentStore::new();
        let text = store.get("en").expect("English should exist");
        assert!(text.contains("Breastfeed exclusively for the first 6 months."));
        assert!(text.starts_with("1. Breastfeed exclusively for the first 6 months."));
    }

    #[test]
    fn test_get_hindi_contains_vaccination_phrase() {
        let store = LocalizedContentStore::new();
        let text = store.get("hi").expect("Hindi should exist");
        assert!(text.contains("टीकाकरण शेड्यूल का पालन करें"));
    }

    #[test]
    fn test_get_every_language_is_non_empty() {
        let store = LocalizedContentStore::new();
        for language in store.languages() {
            let text = store.get(language.code()).expect("configured language");
            assert!(!text.trim().is_empty(), "{} is empty", language);
        }
    }

    #[test]
    fn test_get_unknown_language() {
        let store = LocalizedContentStore::new();
        let err = store.get("xx").unwrap_err();
        assert_eq!(err, ContentError::unknown_language("xx"));
    }

    #[test]
    fn test_get_is_idempotent() {
        let store = LocalizedContentStore::new();
        let first = store.get("hi").expect("Hindi should exist");
        let second = store.get("hi").expect("Hindi should exist");
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_get_normalizes_code() {
        let store = LocalizedContentStore::new();
        assert_eq!(store.get("EN-us").unwrap(), store.get("en").unwrap());
    }

    // ==================== lookup Tests ====================

    #[test]
    fn test_lookup_known_language_does_not_fall_back() {
        let store = LocalizedContentStore::new();
        let lookup = store
            .lookup("hi", FallbackPolicy::DefaultLanguage)
            .expect("should resolve");

        assert_eq!(lookup.language, Language::HINDI);
        assert!(!lookup.fell_back);
        assert_eq!(lookup.requested, "hi");
    }

    #[test]
    fn test_lookup_unknown_with_default_policy_falls_back_to_english() {
        let store = LocalizedContentStore::new();
        let lookup = store
            .lookup("xx", FallbackPolicy::DefaultLanguage)
            .expect("should fall back");

        assert_eq!(lookup.language, Language::ENGLISH);
        assert!(lookup.fell_back);
        assert_eq!(lookup.requested, "xx");
        assert_eq!(lookup.guidelines, Language::ENGLISH.guidelines());
    }

    #[test]
    fn test_lookup_unknown_with_strict_policy_fails() {
        let store = LocalizedContentStore::new();
        assert!(store.lookup("xx", FallbackPolicy::Strict).is_err());
    }

    // ==================== Metrics Tests ====================

    #[test]
    fn test_lookups_are_counted() {
        let store = LocalizedContentStore::new();
        store.get("en").unwrap();
        store.get("xx").unwrap_err();
        store.lookup("zz", FallbackPolicy::DefaultLanguage).unwrap();

        let report = store.metrics().report();
        assert_eq!(report.hits, 1);
        assert_eq!(report.unknown, 1);
        assert_eq!(report.fallbacks, 1);
        assert_eq!(report.lookups, 3);
    }

    #[test]
    fn test_contains_does_not_touch_metrics() {
        let store = LocalizedContentStore::new();
        assert!(store.contains("hi"));
        assert!(!store.contains("xx"));
        assert_eq!(store.metrics().report().lookups, 0);
    }

    // ==================== Concurrency Tests ====================

    const THREADS: usize = 8;
    const ROUNDS: usize = 50;

    #[test]
    fn test_global_store_is_shared_across_threads() {
        let store = LocalizedContentStore::global();
        let hits_before = store.metrics().hits();

        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                std::thread::spawn(move || {
                    let store = LocalizedContentStore::global();
                    let code = if i % 2 == 0 { "en" } else { "hi" };
                    let texts: Vec<&'static str> =
                        (0..ROUNDS).map(|_| store.get(code).unwrap()).collect();
                    (code, store as *const LocalizedContentStore as usize, texts)
                })
            })
            .collect();

        for handle in handles {
            let (code, address, texts) = handle.join().expect("thread panicked");
            assert_eq!(address, store as *const LocalizedContentStore as usize);

            let expected = Language::from_code(code).unwrap().guidelines();
            for text in texts {
                assert!(std::ptr::eq(text, expected));
            }
        }

        // Other tests share the global counters, so only a lower bound holds
        assert!(store.metrics().hits() - hits_before >= THREADS * ROUNDS);
    }

    #[test]
    fn test_concurrent_lookups_are_all_counted() {
        let store = LocalizedContentStore::new();

        std::thread::scope(|scope| {
            for i in 0..THREADS {
                let store = &store;
                scope.spawn(move || {
                    for _ in 0..ROUNDS {
                        if i % 2 == 0 {
                            store.get("hi").unwrap();
                        } else {
                            store.lookup("xx", FallbackPolicy::DefaultLanguage).unwrap();
                        }
                    }
                });
            }
        });

        let report = store.metrics().report();
        assert_eq!(report.lookups, THREADS * ROUNDS);
        assert_eq!(report.hits, THREADS / 2 * ROUNDS);
        assert_eq!(report.fallbacks, THREADS / 2 * ROUNDS);
        assert_eq!(report.unknown, 0);
    }

    // ==================== Language Set Tests ====================

    #[test]
    fn test_languages_are_stable() {
        let first: Vec<_> = LocalizedContentStore::new()
            .languages()
            .iter()
            .map(Language::code)
            .collect();
        let second: Vec<_> = LocalizedContentStore::new()
            .languages()
            .iter()
            .map(Language::code)
            .collect();

        assert_eq!(first, vec!["en", "hi"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_global_returns_singleton() {
        assert!(std::ptr::eq(
            LocalizedContentStore::global(),
            LocalizedContentStore::global()
        ));
    }

    // ==================== FallbackPolicy Tests ====================

    #[test]
    fn test_policy_from_str() {
        assert_eq!("strict".parse::<FallbackPolicy>().unwrap(), FallbackPolicy::Strict);
        assert_eq!(
            "Default".parse::<FallbackPolicy>().unwrap(),
            FallbackPolicy::DefaultLanguage
        );
        assert!("lenient".parse::<FallbackPolicy>().is_err());
    }

    #[test]
    fn test_policy_default_is_fallback() {
        assert_eq!(FallbackPolicy::default(), FallbackPolicy::DefaultLanguage);
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_unknown_codes_never_yield_empty_text(code in "[a-z]{3,8}") {
            let store = LocalizedContentStore::new();
            match store.lookup(&code, FallbackPolicy::DefaultLanguage) {
                Ok(lookup) => prop_assert!(!lookup.guidelines.is_empty()),
                Err(err) => prop_assert!(false, "fallback policy returned {}", err),
            }
            // Three-letter-plus codes are never registered
            prop_assert!(store.get(&code).is_err());
        }

        #[test]
        fn prop_get_is_idempotent(code in prop::sample::select(vec!["en", "hi", "EN", "hi-IN", "en_GB"])) {
            let store = LocalizedContentStore::new();
            prop_assert_eq!(store.get(code), store.get(code));
        }
    }
}
