//! Helpers for presenting guidelines text.
//!
//! Content is authored with `**emphasis**` markers and one numbered guideline
//! per line. Clients that cannot render markdown can ask for plain text, and
//! clients that build their own list view can ask for parsed items.

use anyhow::bail;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static EMPHASIS_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMBERED_LINE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Output format for guidelines text.
///
/// Parsed from user input only through `FromStr`, which accepts aliases and
/// any letter case. Serialized in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Stored text, emphasis markers included
    #[default]
    Markdown,
    /// Emphasis markers removed
    Plain,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Plain => "plain",
        }
    }

    /// Render guidelines text in this format.
    pub fn render(&self, text: &str) -> String {
        match self {
            Self::Markdown => text.to_string(),
            Self::Plain => strip_emphasis(text),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "plain" | "text" => Ok(Self::Plain),
            other => bail!("Unknown output format: '{}'", other),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single numbered guideline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidelineItem {
    pub number: u32,
    pub text: String,
}

/// Remove `**` emphasis markers, keeping the emphasized text.
pub fn strip_emphasis(text: &str) -> String {
    let regex = EMPHASIS_REGEX.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

    regex.replace_all(text, "$1").into_owned()
}

/// Find every line that starts with an item marker (`N.`).
///
/// # Returns
/// `(number, text)` pairs in order of appearance. `text` is trimmed and may
/// be empty when a line carries a marker but no guideline, e.g. `"2."`.
/// A number glued to more digits (`"1.5 kg"`) is not a marker.
pub fn numbered_lines(text: &str) -> Vec<(u32, &str)> {
    let regex = NUMBERED_LINE_REGEX
        .get_or_init(|| Regex::new(r"^\s*(\d+)\.(?:\s+(.*?))?\s*$").unwrap());

    text.lines()
        .filter_map(|line| {
            let cap = regex.captures(line)?;
            let number = cap.get(1)?.as_str().parse().ok()?;
            let item = cap.get(2).map_or("", |m| m.as_str());
            Some((number, item))
        })
        .collect()
}

/// Parse `N. text` lines into guideline items, in order of appearance.
///
/// Lines without a leading number, and markers with no text, are skipped.
/// Item text is returned as stored (markers included).
pub fn guideline_items(text: &str) -> Vec<GuidelineItem> {
    numbered_lines(text)
        .into_iter()
        .filter(|(_, item)| !item.is_empty())
        .map(|(number, item)| GuidelineItem {
            number,
            text: item.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{ENGLISH_CONTENT, HINDI_CONTENT};

    // ==================== strip_emphasis Tests ====================

    #[test]
    fn test_strip_emphasis_removes_markers() {
        assert_eq!(
            strip_emphasis("Seek help **immediately** if needed"),
            "Seek help immediately if needed"
        );
    }

    #[test]
    fn test_strip_emphasis_multiple_spans() {
        assert_eq!(strip_emphasis("**a** and **b**"), "a and b");
    }

    #[test]
    fn test_strip_emphasis_plain_text_unchanged() {
        let text = "1. Breastfeed exclusively for the first 6 months.";
        assert_eq!(strip_emphasis(text), text);
    }

    #[test]
    fn test_strip_emphasis_preserves_devanagari() {
        let plain = strip_emphasis(HINDI_CONTENT.guidelines);
        assert!(plain.contains("टीकाकरण शेड्यूल का पालन करें"));
        assert!(!plain.contains("**"));
    }

    #[test]
    fn test_strip_emphasis_keeps_line_breaks() {
        let plain = strip_emphasis(ENGLISH_CONTENT.guidelines);
        assert_eq!(plain.lines().count(), ENGLISH_CONTENT.guidelines.lines().count());
    }

    #[test]
    fn test_strip_emphasis_leaves_lone_marker() {
        assert_eq!(strip_emphasis("**unterminated"), "**unterminated");
    }

    // ==================== guideline_items Tests ====================

    #[test]
    fn test_guideline_items_english() {
        let items = guideline_items(ENGLISH_CONTENT.guidelines);
        assert_eq!(items.len(), 10);
        assert_eq!(
            items[0],
            GuidelineItem {
                number: 1,
                text: "Breastfeed exclusively for the first 6 months.".to_string()
            }
        );
        assert_eq!(items[9].number, 10);
    }

    #[test]
    fn test_guideline_items_hindi() {
        let items = guideline_items(HINDI_CONTENT.guidelines);
        assert_eq!(items.len(), 10);
        assert!(items[1].text.contains("टीकाकरण शेड्यूल का पालन करें"));
    }

    #[test]
    fn test_guideline_items_skips_unnumbered_lines() {
        let items = guideline_items("Intro\n1. First\n\n2. Second  ");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].text, "Second");
    }

    #[test]
    fn test_guideline_items_skips_marker_without_text() {
        let items = guideline_items("1. a\n2.\n3. c");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].number, 3);
    }

    // ==================== numbered_lines Tests ====================

    #[test]
    fn test_numbered_lines_keeps_empty_items() {
        let lines = numbered_lines("1. a\n2.\n3.   \n4. d");
        assert_eq!(lines, vec![(1, "a"), (2, ""), (3, ""), (4, "d")]);
    }

    #[test]
    fn test_numbered_lines_ignores_decimals_and_inline_numbers() {
        let lines = numbered_lines("1.5 kg at birth\n1. Wait 6. months");
        assert_eq!(lines, vec![(1, "Wait 6. months")]);
    }

    #[test]
    fn test_guideline_items_empty_text() {
        assert!(guideline_items("").is_empty());
    }

    // ==================== OutputFormat Tests ====================

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert_eq!("MD".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_render() {
        let text = "2. Follow the **schedule**";
        assert_eq!(OutputFormat::Markdown.render(text), text);
        assert_eq!(OutputFormat::Plain.render(text), "2. Follow the schedule");
    }

    #[test]
    fn test_output_format_from_str_aliases_and_case() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert_eq!("PLAIN".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert_eq!(" Markdown ".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_output_format_serializes_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Plain).expect("Should serialize");
        assert_eq!(json, "\"plain\"");
    }

    #[test]
    fn test_output_format_display_round_trips_through_from_str() {
        for format in [OutputFormat::Markdown, OutputFormat::Plain] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_output_format_default_is_markdown() {
        assert_eq!(OutputFormat::default(), OutputFormat::Markdown);
    }
}
