//! Content validation module.
//!
//! Checks that each guidelines block is well-formed before the service starts
//! answering lookups: non-empty, correctly encoded, numbered consecutively and
//! with balanced emphasis markers.

use crate::i18n::{LanguageRegistry, LocalizedContent};
use crate::markup::{guideline_items, numbered_lines};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a content block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the content unfit to serve
    pub errors: Vec<String>,

    /// Non-critical issues worth logging
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if any error was recorded
    ///
    /// # Returns
    /// `true` when the content must not be served
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if any warning was recorded
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for localized content blocks.
pub struct ContentValidator;

static EMPHASIS_SPAN_REGEX: OnceLock<Regex> = OnceLock::new();

impl ContentValidator {
    /// Validate a single content block on its own.
    ///
    /// # Arguments
    /// * `content` - The block to check
    ///
    /// # Returns
    /// A report with errors for empty text, replacement characters, unbalanced
    /// `**` markers, item markers without text and non-consecutive numbering.
    /// A block with no numbered items only gets a warning.
    pub fn validate(content: &LocalizedContent) -> ValidationReport {
        let mut report = ValidationReport::new();
        let text = content.guidelines;
        let code = content.language_code;

        if text.trim().is_empty() {
            report
                .errors
                .push(format!("Guidelines for '{}' are empty", code));
            return report;
        }

        if text.contains('\u{FFFD}') {
            report.errors.push(format!(
                "Guidelines for '{}' contain replacement characters (corrupted encoding)",
                code
            ));
        }

        let markers = text.matches("**").count();
        if markers % 2 != 0 {
            report.errors.push(format!(
                "Guidelines for '{}' have unbalanced emphasis markers ({} '**')",
                code, markers
            ));
        }

        let lines = numbered_lines(text);
        for (number, _) in lines.iter().filter(|(_, item)| item.is_empty()) {
            report.errors.push(format!(
                "Guidelines for '{}' have an empty item numbered {}",
                code, number
            ));
        }

        let numbers: Vec<u32> = lines.iter().map(|(number, _)| *number).collect();
        if numbers.is_empty() {
            report
                .warnings
                .push(format!("Guidelines for '{}' have no numbered items", code));
        } else if let Some((position, found)) = numbers
            .iter()
            .enumerate()
            .find(|(i, n)| **n != *i as u32 + 1)
        {
            report.errors.push(format!(
                "Guidelines for '{}' are not numbered consecutively: item {} is numbered {}",
                code,
                position + 1,
                found
            ));
        }

        report
    }

    /// Validate a translated block against the default-language block.
    ///
    /// Runs [`ContentValidator::validate`] on `content`, then adds warnings
    /// when the number of items or emphasis spans differs from `canonical`.
    ///
    /// # Arguments
    /// * `canonical` - Block in the default language
    /// * `content` - Translated block to check
    pub fn validate_against(
        canonical: &LocalizedContent,
        content: &LocalizedContent,
    ) -> ValidationReport {
        let mut report = Self::validate(content);

        let canonical_items = guideline_items(canonical.guidelines).len();
        let items = guideline_items(content.guidelines).len();
        if canonical_items != items {
            report.warnings.push(format!(
                "Item count mismatch: '{}' has {}, '{}' has {}",
                canonical.language_code, canonical_items, content.language_code, items
            ));
        }

        let canonical_spans = Self::count_emphasis_spans(canonical.guidelines);
        let spans = Self::count_emphasis_spans(content.guidelines);
        if canonical_spans != spans {
            report.warnings.push(format!(
                "Emphasis count mismatch: '{}' has {}, '{}' has {}",
                canonical.language_code, canonical_spans, content.language_code, spans
            ));
        }

        report
    }

    /// Validate every language in the registry against the default language.
    ///
    /// # Returns
    /// One `(code, report)` pair per language, in registry order
    pub fn validate_registry(
        registry: &LanguageRegistry,
    ) -> Vec<(&'static str, ValidationReport)> {
        let canonical = registry.default_language().content;

        registry
            .list_all()
            .into_iter()
            .map(|lang| {
                let report = if lang.is_default {
                    Self::validate(lang.content)
                } else {
                    Self::validate_against(canonical, lang.content)
                };
                (lang.code, report)
            })
            .collect()
    }

    /// Count complete `**...**` spans
    fn count_emphasis_spans(text: &str) -> usize {
        let regex = EMPHASIS_SPAN_REGEX.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

        regex.find_iter(text).count()
    }
}
