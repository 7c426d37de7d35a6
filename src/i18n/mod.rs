//! Localized content module.
//!
//! All language metadata and guideline text lives here. Content is compiled
//! into the binary, registered once on first access and never mutated.
//!
//! # Architecture
//!
//! - `content`: The static guideline blocks, one per language
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `language`: Validated `Language` handle with code normalization
//! - `store`: `LocalizedContentStore`, the read-only lookup with fallback policy
//! - `validator`: Structural checks run at startup
//! - `metrics`: Lookup counters
//!
//! # Example
//!
//! ```rust
//! use carenest_guidelines::i18n::LocalizedContentStore;
//!
//! let store = LocalizedContentStore::global();
//! let text = store.get("hi").unwrap();
//! assert!(text.contains("टीकाकरण शेड्यूल का पालन करें"));
//! assert!(store.get("xx").is_err());
//! ```

mod content;
mod language;
mod metrics;
mod registry;
mod store;
mod validator;

pub use content::{LocalizedContent, ENGLISH_CONTENT, HINDI_CONTENT};
pub use language::{normalize_code, Language};
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use store::{FallbackPolicy, LocalizedContentStore, Lookup};
pub use validator::{ContentValidator, ValidationReport};
