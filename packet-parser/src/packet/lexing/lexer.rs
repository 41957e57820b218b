//! Run-to-line lexer
//!
//! Walks the source paragraphs in order and emits one [`Line`] per physical
//! document line. A paragraph yields several physical lines when it contains
//! manual break runs; a paragraph with no runs yields one blank line, so the
//! emitted sequence numbers exactly like the original document and parser
//! diagnostics can cite physical line numbers.
//!
//! The lexer resolves the two numbering signals the stateless classifier
//! cannot: tiebreaker markers (which inherit the running question counter)
//! and ordinal-list identifiers (container-maintained numbering with no
//! digit in the text). A change of list identifier is the only reset signal
//! for the counter; a genuinely new list reusing the same identifier is not
//! detectable from local information and continues the running count.

use crate::packet::classify::{self, Classification};
use crate::packet::lexing::line::{Line, LineKind};
use crate::packet::source::{Paragraph, Run};
use crate::packet::style::{StyledSegment, StyledText};

/// Lex the paragraphs of one packet into its classified line sequence.
pub fn lex(paragraphs: &[Paragraph]) -> Vec<Line> {
    Lexer::new().run(paragraphs)
}

struct Lexer {
    next_number: u32,
    last_list_id: Option<u64>,
}

impl Lexer {
    fn new() -> Self {
        Self {
            next_number: 1,
            last_list_id: None,
        }
    }

    fn run(mut self, paragraphs: &[Paragraph]) -> Vec<Line> {
        let mut lines = Vec::new();
        for paragraph in paragraphs {
            if paragraph.runs.is_empty() {
                lines.push(Line::blank());
                continue;
            }
            for physical in split_physical_lines(&paragraph.runs) {
                lines.push(self.lex_line(physical));
            }
        }
        lines
    }

    fn lex_line(&mut self, runs: &[Run]) -> Line {
        if let Some(list_id) = runs.iter().find_map(|run| run.list_id) {
            if self.last_list_id != Some(list_id) {
                self.next_number = 1;
                self.last_list_id = Some(list_id);
            }
        }
        let has_list_id = runs.iter().any(|run| run.list_id.is_some());

        let text = merge_runs(runs);
        let plain = text.plain_text();

        match classify::classify(&plain) {
            Classification::Question(m) => {
                let number = match m.number {
                    Some(number) => {
                        self.next_number = number.saturating_add(1);
                        number
                    }
                    // tiebreaker marker: inherit the running counter
                    None => self.take_next_number(),
                };
                Line::new(LineKind::Question { number }, text.trim_prefix(m.prefix_len))
            }
            _ if has_list_id => {
                // externally numbered list item with no textual digit
                let number = self.take_next_number();
                Line::new(LineKind::Question { number }, text)
            }
            Classification::Answer(prefix_len) => {
                Line::new(LineKind::Answer, text.trim_prefix(prefix_len))
            }
            Classification::BonusPart(m) => Line::new(
                LineKind::BonusPart {
                    value: m.value,
                    difficulty: m.difficulty,
                },
                text.trim_prefix(m.prefix_len),
            ),
            Classification::Unclassified => Line::new(LineKind::Unclassified, text),
        }
    }

    fn take_next_number(&mut self) -> u32 {
        let number = self.next_number;
        self.next_number = self.next_number.saturating_add(1);
        number
    }
}

/// Split a paragraph's runs into physical lines at manual break markers.
fn split_physical_lines(runs: &[Run]) -> impl Iterator<Item = &[Run]> {
    runs.split(|run| run.line_break)
}

/// Merge adjacent runs with identical style flags into segments, preserving
/// run order.
fn merge_runs(runs: &[Run]) -> StyledText {
    let mut text = StyledText::new();
    let mut pending: Option<StyledSegment> = None;
    for run in runs {
        if run.text.is_empty() {
            continue;
        }
        let styles = run.styles();
        match pending.as_mut() {
            Some(segment) if segment.styles == styles => segment.text.push_str(&run.text),
            _ => {
                if let Some(segment) = pending.take() {
                    text.push_segment(segment);
                }
                pending = Some(StyledSegment::new(run.text.clone(), styles));
            }
        }
    }
    if let Some(segment) = pending {
        text.push_segment(segment);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(text: &str, list_id: u64) -> Paragraph {
        Paragraph::new(vec![Run {
            list_id: Some(list_id),
            ..Run::plain(text)
        }])
    }

    #[test]
    fn test_explicit_ordinal_sets_counter() {
        let lines = lex(&[
            Paragraph::plain("4. A question"),
            Paragraph::plain("TB. Another question"),
        ]);
        assert_eq!(lines[0].question_number(), Some(4));
        // the tiebreaker inherits ordinal 5 from the explicit 4
        assert_eq!(lines[1].question_number(), Some(5));
    }

    #[test]
    fn test_consecutive_tiebreakers_get_consecutive_numbers() {
        let lines = lex(&[
            Paragraph::plain("TB. First"),
            Paragraph::plain("TB. Second"),
        ]);
        assert_eq!(lines[0].question_number(), Some(1));
        assert_eq!(lines[1].question_number(), Some(2));
    }

    #[test]
    fn test_question_prefix_is_trimmed() {
        let lines = lex(&[Paragraph::plain("1. This author wrote")]);
        assert_eq!(lines[0].text.plain_text(), "This author wrote");
    }

    #[test]
    fn test_list_items_number_without_textual_digit() {
        let lines = lex(&[
            numbered("First question", 3),
            numbered("Second question", 3),
        ]);
        assert_eq!(lines[0].question_number(), Some(1));
        assert_eq!(lines[1].question_number(), Some(2));
        assert_eq!(lines[0].text.plain_text(), "First question");
    }

    #[test]
    fn test_list_id_change_resets_counter() {
        let lines = lex(&[
            numbered("Tossup one", 3),
            numbered("Tossup two", 3),
            numbered("Bonus one", 8),
        ]);
        assert_eq!(lines[2].question_number(), Some(1));
    }

    #[test]
    fn test_textual_digit_wins_over_list_numbering() {
        let lines = lex(&[numbered("9. Jumped ahead", 3), numbered("Next item", 3)]);
        assert_eq!(lines[0].question_number(), Some(9));
        assert_eq!(lines[1].question_number(), Some(10));
    }

    #[test]
    fn test_answer_and_bonus_part_lines() {
        let lines = lex(&[
            Paragraph::plain("ANSWER: Paris"),
            Paragraph::plain("[10e] Name this city"),
        ]);
        assert_eq!(lines[0].kind, LineKind::Answer);
        assert_eq!(lines[0].text.plain_text(), "Paris");
        assert_eq!(
            lines[1].kind,
            LineKind::BonusPart {
                value: 10,
                difficulty: Some('e'),
            }
        );
        assert_eq!(lines[1].text.plain_text(), "Name this city");
    }

    #[test]
    fn test_blank_paragraphs_keep_line_numbering() {
        let lines = lex(&[
            Paragraph::plain("1. q"),
            Paragraph::blank(),
            Paragraph::plain("ANSWER: a"),
        ]);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_blank());
    }

    #[test]
    fn test_break_runs_split_physical_lines() {
        let paragraph = Paragraph::new(vec![
            Run::plain("1. Question text"),
            Run::break_marker(),
            Run::plain("ANSWER: split"),
        ]);
        let lines = lex(&[paragraph]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].question_number(), Some(1));
        assert_eq!(lines[1].kind, LineKind::Answer);
    }

    #[test]
    fn test_adjacent_identical_styles_merge() {
        let paragraph = Paragraph::new(vec![
            Run {
                bold: true,
                ..Run::plain("bold ")
            },
            Run {
                bold: true,
                ..Run::plain("still bold")
            },
            Run::plain(" plain"),
        ]);
        let lines = lex(&[paragraph]);
        assert_eq!(lines[0].text.segments().len(), 2);
        assert_eq!(lines[0].text.plain_text(), "bold still bold plain");
    }
}
