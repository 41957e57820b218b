//! Classified line types
//!
//! A [`Line`] is one physical document line with its semantic role decided.
//! Classification happens once, at lexing time, and is immutable afterwards;
//! the parser only branches on [`LineKind`] and never re-inspects the text.

use std::fmt;

use crate::packet::style::StyledText;

/// The semantic role of a line. A closed set: the parser's branching over
/// these variants is exhaustive and compiler checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A numbered question line. Tiebreaker markers and externally numbered
    /// list items arrive here with their ordinal already resolved by the
    /// lexer.
    Question { number: u32 },

    /// An answer line; terminates a question or bonus-part prompt.
    Answer,

    /// A bonus-part line with its point value and optional difficulty
    /// letter.
    BonusPart { value: u32, difficulty: Option<char> },

    /// Free text: editor's notes, leadins, question bodies, metadata, or a
    /// blank line. Carries no structural role by itself.
    Unclassified,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::Question { .. } => "QUESTION_LINE",
            LineKind::Answer => "ANSWER_LINE",
            LineKind::BonusPart { .. } => "BONUS_PART_LINE",
            LineKind::Unclassified => "UNCLASSIFIED_LINE",
        };
        write!(f, "{}", name)
    }
}

/// One classified line: its role plus the styled text payload. For
/// question, answer, and bonus-part lines the payload has the matched
/// marker prefix already trimmed off.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub kind: LineKind,
    pub text: StyledText,
}

impl Line {
    pub fn new(kind: LineKind, text: StyledText) -> Self {
        Self { kind, text }
    }

    /// An empty unclassified line, emitted for blank paragraphs so parser
    /// diagnostics keep the document's physical line numbering.
    pub fn blank() -> Self {
        Self::new(LineKind::Unclassified, StyledText::new())
    }

    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Unclassified && self.text.is_empty()
    }

    /// The question ordinal, if this is a question line.
    pub fn question_number(&self) -> Option<u32> {
        match self.kind {
            LineKind::Question { number } => Some(number),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_empty_unclassified() {
        let line = Line::blank();
        assert!(line.is_blank());
        assert_eq!(line.kind, LineKind::Unclassified);
        assert!(line.text.is_empty());
    }

    #[test]
    fn test_question_number_accessor() {
        let line = Line::new(LineKind::Question { number: 7 }, StyledText::from("body"));
        assert_eq!(line.question_number(), Some(7));
        assert_eq!(Line::blank().question_number(), None);
    }

    #[test]
    fn test_kind_display_names() {
        assert_eq!(LineKind::Answer.to_string(), "ANSWER_LINE");
        assert_eq!(
            LineKind::Question { number: 1 }.to_string(),
            "QUESTION_LINE"
        );
    }
}
