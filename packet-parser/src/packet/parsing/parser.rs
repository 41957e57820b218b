//! Packet parser
//!
//! State machine over the classified line sequence:
//!
//!     ExpectTossups -> ExpectBonusesOrDone -> Done
//!
//! The tossup section runs while each sought question ordinal strictly
//! exceeds the previous one; the first non-increasing ordinal is the
//! tossup/bonus section boundary and is left unconsumed for bonus parsing.
//! Question prompts and bonus leadins accumulate the ordinal line's own
//! trimmed remainder plus the following lines up to their terminator (an
//! answer line for prompts, a bonus-part line for leadins). Reaching a
//! section boundary is ordinary control flow, never an error; structural
//! failures abort the whole packet.

use crate::packet::ast::{Bonus, BonusPart, Packet, Question, Tossup};
use crate::packet::lexing::{Line, LineKind};
use crate::packet::parsing::cursor::LineCursor;
use crate::packet::parsing::error::{ParseError, ParseResult, Unit};
use crate::packet::style::{StyledSegment, StyledText};

/// Parse a classified line sequence into a packet.
pub fn parse(lines: &[Line]) -> ParseResult<Packet> {
    if lines.is_empty() {
        return Err(ParseError::EmptyPacket);
    }
    let mut cursor = LineCursor::new(lines);
    let tossups = parse_tossups(&mut cursor)?;
    let bonuses = parse_bonuses(&mut cursor)?;
    Ok(Packet::new(tossups, bonuses))
}

/// Advance to the next question line without consuming it.
///
/// Lines of any other kind before it are skipped; they belong to no unit.
fn seek_question<'a>(cursor: &mut LineCursor<'a>) -> Option<(u32, &'a Line)> {
    loop {
        let line = cursor.peek()?;
        if let Some(number) = line.question_number() {
            return Some((number, line));
        }
        cursor.advance();
    }
}

fn parse_tossups(cursor: &mut LineCursor) -> ParseResult<Vec<Tossup>> {
    let mut tossups = Vec::new();
    let mut previous: Option<u32> = None;

    while let Some((number, first)) = seek_question(cursor) {
        if previous.is_some_and(|prev| number <= prev) {
            // section boundary: this ordinal restarts the numbering, so it
            // opens the bonus section; leave it for bonus parsing
            break;
        }
        cursor.advance();
        let question = parse_question(cursor, Unit::Tossup(number), &first.text)?;
        tossups.push(Tossup::new(number, question));
        previous = Some(number);
    }

    if tossups.is_empty() {
        let (line, snippet) = cursor.stall_context();
        return Err(ParseError::NoTossups { line, snippet });
    }
    Ok(tossups)
}

fn parse_bonuses(cursor: &mut LineCursor) -> ParseResult<Option<Vec<Bonus>>> {
    let mut bonuses = Vec::new();
    while let Some((number, first)) = seek_question(cursor) {
        cursor.advance();
        bonuses.push(parse_bonus(cursor, number, &first.text)?);
    }
    // no ordinal line remained: the packet simply has no bonus section
    if bonuses.is_empty() {
        Ok(None)
    } else {
        Ok(Some(bonuses))
    }
}

/// Parse one prompt/answer pair: accumulate lines into the prompt until the
/// first answer line, whose own text becomes the answer.
fn parse_question(
    cursor: &mut LineCursor,
    unit: Unit,
    opening: &StyledText,
) -> ParseResult<Question> {
    let mut prompt = Accumulator::new();
    prompt.push(opening);
    loop {
        match cursor.peek() {
            None => {
                let (line, snippet) = cursor.stall_context();
                return Err(ParseError::MissingAnswer {
                    unit,
                    line,
                    snippet,
                });
            }
            Some(line) if line.kind == LineKind::Answer => {
                cursor.advance();
                return Ok(Question::new(prompt.finish(), line.text.clone()));
            }
            Some(line) => {
                prompt.push(&line.text);
                cursor.advance();
            }
        }
    }
}

/// Parse one bonus: leadin accumulation up to the first part line, then one
/// prompt/answer pair per part line. A bonus that never reaches a part line
/// is a structural failure.
fn parse_bonus(cursor: &mut LineCursor, number: u32, opening: &StyledText) -> ParseResult<Bonus> {
    let mut leadin = Accumulator::new();
    leadin.push(opening);
    loop {
        match cursor.peek() {
            None => {
                let (line, snippet) = cursor.stall_context();
                return Err(ParseError::MissingParts {
                    bonus: number,
                    line,
                    snippet,
                });
            }
            Some(line) if matches!(line.kind, LineKind::BonusPart { .. }) => break,
            Some(line) => {
                leadin.push(&line.text);
                cursor.advance();
            }
        }
    }

    let mut parts = Vec::new();
    while let Some(line) = cursor.peek() {
        let LineKind::BonusPart { value, difficulty } = line.kind else {
            break;
        };
        cursor.advance();
        let question = parse_question(cursor, Unit::Bonus(number), &line.text)?;
        parts.push(BonusPart::new(question, value, difficulty));
    }

    debug_assert!(!parts.is_empty());
    Ok(Bonus::new(number, leadin.finish(), parts))
}

/// Multi-line accumulation: joins non-empty chunks with a single unstyled
/// space so prompts wrapped across physical lines read as prose.
struct Accumulator {
    text: StyledText,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            text: StyledText::new(),
        }
    }

    fn push(&mut self, chunk: &StyledText) {
        if chunk.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push_segment(StyledSegment::plain(" "));
        }
        self.text.append(chunk.clone());
    }

    fn finish(self) -> StyledText {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::lexing::lex;
    use crate::packet::source::Paragraph;

    fn parse_text_lines(lines: &[&str]) -> ParseResult<Packet> {
        let paragraphs: Vec<Paragraph> = lines
            .iter()
            .map(|line| {
                if line.trim().is_empty() {
                    Paragraph::blank()
                } else {
                    Paragraph::plain(*line)
                }
            })
            .collect();
        parse(&lex(&paragraphs))
    }

    #[test]
    fn test_single_tossup() {
        let packet = parse_text_lines(&["1. Name this city.", "ANSWER: Paris"]).unwrap();
        assert_eq!(packet.tossups.len(), 1);
        assert_eq!(packet.tossups[0].number, 1);
        assert_eq!(
            packet.tossups[0].question.prompt.plain_text(),
            "Name this city."
        );
        assert_eq!(packet.tossups[0].question.answer.plain_text(), "Paris");
        assert!(packet.bonuses.is_none());
    }

    #[test]
    fn test_multi_line_prompt_joins_with_space() {
        let packet = parse_text_lines(&[
            "1. This question continues",
            "onto a second line.",
            "ANSWER: wrapped",
        ])
        .unwrap();
        assert_eq!(
            packet.tossups[0].question.prompt.plain_text(),
            "This question continues onto a second line."
        );
    }

    #[test]
    fn test_blank_lines_are_absorbed() {
        let packet = parse_text_lines(&["1. A question", "", "ANSWER: fine"]).unwrap();
        assert_eq!(packet.tossups[0].question.prompt.plain_text(), "A question");
    }

    #[test]
    fn test_section_boundary_on_non_increasing_ordinal() {
        let packet = parse_text_lines(&[
            "1. A tossup",
            "ANSWER: first",
            "1. A bonus leadin",
            "[10] A part",
            "ANSWER: second",
        ])
        .unwrap();
        assert_eq!(packet.tossups.len(), 1);
        let bonuses = packet.bonuses.unwrap();
        assert_eq!(bonuses.len(), 1);
        assert_eq!(bonuses[0].number, 1);
        assert_eq!(bonuses[0].leadin.plain_text(), "A bonus leadin");
        assert_eq!(bonuses[0].parts.len(), 1);
        assert_eq!(bonuses[0].parts[0].value, 10);
        assert_eq!(bonuses[0].parts[0].question.answer.plain_text(), "second");
    }

    #[test]
    fn test_bonus_with_multiple_parts() {
        let packet = parse_text_lines(&[
            "1. t",
            "ANSWER: a",
            "1. leadin",
            "[10] part one",
            "ANSWER: one",
            "[10] part two",
            "ANSWER: two",
            "[10] part three",
            "ANSWER: three",
        ])
        .unwrap();
        let bonuses = packet.bonuses.unwrap();
        assert_eq!(bonuses[0].parts.len(), 3);
        assert_eq!(bonuses[0].parts[2].question.prompt.plain_text(), "part three");
    }

    #[test]
    fn test_leading_free_text_is_skipped() {
        let packet = parse_text_lines(&[
            "Packet by the editors",
            "",
            "1. A question",
            "ANSWER: fine",
        ])
        .unwrap();
        assert_eq!(packet.tossups.len(), 1);
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(parse(&[]), Err(ParseError::EmptyPacket));
    }

    #[test]
    fn test_no_question_lines_fails() {
        let error = parse_text_lines(&["just some notes", "more notes"]).unwrap_err();
        assert!(matches!(error, ParseError::NoTossups { .. }));
    }

    #[test]
    fn test_missing_answer_cites_last_line() {
        let error =
            parse_text_lines(&["1. A question with", "no answer line"]).unwrap_err();
        match error {
            ParseError::MissingAnswer {
                unit,
                line,
                snippet,
            } => {
                assert_eq!(unit, Unit::Tossup(1));
                assert_eq!(line, 2);
                assert_eq!(snippet, "no answer line");
            }
            other => panic!("expected MissingAnswer, got {:?}", other),
        }
    }

    #[test]
    fn test_bonus_without_parts_fails() {
        let error = parse_text_lines(&[
            "1. t",
            "ANSWER: a",
            "1. a leadin that never finds parts",
        ])
        .unwrap_err();
        match error {
            ParseError::MissingParts { bonus, line, .. } => {
                assert_eq!(bonus, 1);
                assert_eq!(line, 3);
            }
            other => panic!("expected MissingParts, got {:?}", other),
        }
    }

    #[test]
    fn test_bonus_part_missing_answer_fails() {
        let error = parse_text_lines(&[
            "1. t",
            "ANSWER: a",
            "1. leadin",
            "[10] a part with no answer",
        ])
        .unwrap_err();
        assert!(matches!(
            error,
            ParseError::MissingAnswer {
                unit: Unit::Bonus(1),
                ..
            }
        ));
    }

    #[test]
    fn test_tossups_continue_while_ordinals_increase() {
        let packet = parse_text_lines(&[
            "1. one",
            "ANSWER: a",
            "2. two",
            "ANSWER: b",
            "5. numbering may skip ahead",
            "ANSWER: c",
        ])
        .unwrap();
        assert_eq!(packet.tossups.len(), 3);
        assert_eq!(packet.tossups[2].number, 5);
        assert!(packet.bonuses.is_none());
    }

    #[test]
    fn test_trailing_metadata_after_answer_is_ignored() {
        let packet = parse_text_lines(&[
            "1. q",
            "ANSWER: a",
            "<Science - Physics>",
            "2. r",
            "ANSWER: b",
        ])
        .unwrap();
        assert_eq!(packet.tossups.len(), 2);
    }
}
