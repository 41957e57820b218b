//! Styled-run source boundary
//!
//! The contract with container-format extractors: an ordered sequence of
//! [`Paragraph`]s, each an ordered sequence of atomic [`Run`]s, in the
//! document's visual reading order. A run carries its text, five style
//! flags, an optional ordinal-list identifier (the container maintains the
//! numbering externally instead of writing the digit into the text), and a
//! line-break marker for manual breaks inside one paragraph.
//!
//! Two adapters ship with the library. The JSON adapter deserializes the
//! boundary representation itself; the plain-text adapter turns each input
//! line into one unstyled paragraph. Extraction from real container formats
//! (word-processing packages, HTML DOM) is a separate collaborator's job.

use serde::{Deserialize, Serialize};

use crate::packet::style::StyleSet;

/// One atomic styled run supplied by the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub subscript: bool,
    #[serde(default)]
    pub superscript: bool,
    /// Identifier of the externally maintained numbering list this run's
    /// paragraph belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<u64>,
    /// Marks a manual line break; the run's text is ignored.
    #[serde(default)]
    pub line_break: bool,
}

impl Run {
    /// An unstyled text run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            underline: false,
            subscript: false,
            superscript: false,
            list_id: None,
            line_break: false,
        }
    }

    /// A manual line-break marker.
    pub fn break_marker() -> Self {
        Self {
            line_break: true,
            ..Self::plain("")
        }
    }

    /// The run's style flags as a [`StyleSet`].
    pub fn styles(&self) -> StyleSet {
        StyleSet {
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            subscript: self.subscript,
            superscript: self.superscript,
        }
    }
}

/// One source paragraph: an ordered sequence of runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// A paragraph holding a single unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![Run::plain(text)])
    }

    /// A paragraph with no runs (a blank document line).
    pub fn blank() -> Self {
        Self::default()
    }
}

/// Deserialize a JSON array of paragraphs, the boundary representation
/// itself.
pub fn paragraphs_from_json(input: &str) -> Result<Vec<Paragraph>, serde_json::Error> {
    serde_json::from_str(input)
}

/// Build paragraphs from plain text: each line becomes one unstyled
/// single-run paragraph, empty lines become blank paragraphs.
pub fn paragraphs_from_text(input: &str) -> Vec<Paragraph> {
    input
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                Paragraph::blank()
            } else {
                Paragraph::plain(line)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let paragraphs = vec![
            Paragraph::plain("1. A question"),
            Paragraph::new(vec![Run {
                bold: true,
                ..Run::plain("ANSWER: bold answer")
            }]),
        ];
        let json = serde_json::to_string(&paragraphs).unwrap();
        assert_eq!(paragraphs_from_json(&json).unwrap(), paragraphs);
    }

    #[test]
    fn test_json_defaults_missing_flags() {
        let json = r#"[{"runs": [{"text": "1. A question"}]}]"#;
        let paragraphs = paragraphs_from_json(json).unwrap();
        assert_eq!(paragraphs[0].runs[0].text, "1. A question");
        assert!(!paragraphs[0].runs[0].bold);
        assert_eq!(paragraphs[0].runs[0].list_id, None);
    }

    #[test]
    fn test_text_adapter_preserves_blank_lines() {
        let paragraphs = paragraphs_from_text("1. q\n\nANSWER: a");
        assert_eq!(paragraphs.len(), 3);
        assert!(paragraphs[1].runs.is_empty());
    }
}
