//! Line classification
//!
//! Stateless pattern matchers that decide which semantic role, if any, a
//! candidate line plays in a packet. Each matcher is a deterministic
//! leading-anchor regex over the line's unformatted text and reports the
//! matched prefix length (consumed by `StyledText::trim_prefix`) along with
//! any captured value.
//!
//! # Match priority
//!
//! A line can hold at most one role. [`classify`] tries the matchers in a
//! fixed order:
//!
//! 1. question ordinal — `1.`, `12.`, `TB.`, `tiebreaker.`
//! 2. answer — `ANSWER:`, `ANS.`
//! 3. bonus part — `[10]`, `[10e]`, `[m]`
//!
//! so `1. [10] text` is a numbered question, never a bonus part. Trailing
//! metadata tags (`<Science - Physics>`) are recognized separately by
//! [`metadata_tags`]; they are not a structural line role.

use once_cell::sync::Lazy;
use regex::Regex;

/// Point value assigned to a bonus part whose bracket carries only a
/// difficulty letter.
pub const DEFAULT_BONUS_VALUE: u32 = 10;

/// Leading question ordinal: an integer or a tiebreaker marker, followed by
/// a period. Tiebreaker markers carry no explicit number; the lexer resolves
/// them against its running question counter.
static QUESTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(?:(?P<number>\d+)|tb|tie(?:breaker)?)\s*\.\s*").unwrap());

/// Leading answer marker: `ANSWER` or `ANS`, then `:` or `.`.
static ANSWER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*ans(?:wer)?\s*[:.]\s*").unwrap());

/// Leading bracketed bonus-part marker: digits with an optional difficulty
/// letter, or a difficulty letter alone. Anything else between the brackets
/// is not a bonus part.
static BONUS_PART_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*\[\s*(?:(?P<value>\d+)\s*(?P<difficulty>[emh])?|(?P<lone>[emh]))\s*\]\s*")
        .unwrap()
});

/// A full-line angle-bracketed metadata tag, e.g. `<Literature, British>`.
static METADATA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*<(?P<tags>[^>]*)>\s*$").unwrap());

/// A successful question-ordinal match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionMatch {
    /// Explicit ordinal, or `None` for a tiebreaker marker.
    pub number: Option<u32>,
    /// Byte length of the matched prefix.
    pub prefix_len: usize,
}

/// A successful bonus-part match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusPartMatch {
    pub value: u32,
    /// Single easy/medium/hard letter, lowercased.
    pub difficulty: Option<char>,
    /// Byte length of the matched prefix.
    pub prefix_len: usize,
}

/// The role a line's text matched, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Question(QuestionMatch),
    /// Answer marker; the payload is the matched prefix length.
    Answer(usize),
    BonusPart(BonusPartMatch),
    Unclassified,
}

/// Match a leading question ordinal.
pub fn match_question(text: &str) -> Option<QuestionMatch> {
    let captures = QUESTION_PATTERN.captures(text)?;
    let number = match captures.name("number") {
        Some(digits) => Some(digits.as_str().parse().ok()?),
        None => None,
    };
    Some(QuestionMatch {
        number,
        prefix_len: captures.get(0).unwrap().end(),
    })
}

/// Match a leading answer marker, returning the matched prefix length.
pub fn match_answer(text: &str) -> Option<usize> {
    ANSWER_PATTERN.find(text).map(|m| m.end())
}

/// Match a leading bracketed bonus-part marker.
pub fn match_bonus_part(text: &str) -> Option<BonusPartMatch> {
    let captures = BONUS_PART_PATTERN.captures(text)?;
    let prefix_len = captures.get(0).unwrap().end();
    if let Some(value) = captures.name("value") {
        let difficulty = captures
            .name("difficulty")
            .and_then(|d| d.as_str().to_ascii_lowercase().chars().next());
        Some(BonusPartMatch {
            value: value.as_str().parse().ok()?,
            difficulty,
            prefix_len,
        })
    } else {
        let lone = captures.name("lone").unwrap();
        Some(BonusPartMatch {
            value: DEFAULT_BONUS_VALUE,
            difficulty: lone.as_str().to_ascii_lowercase().chars().next(),
            prefix_len,
        })
    }
}

/// Match a full-line metadata tag, returning the comma-separated tag values.
///
/// Metadata lines carry no structural role; the lexer may use this to
/// exclude category annotations from question text.
pub fn metadata_tags(text: &str) -> Option<Vec<String>> {
    let captures = METADATA_PATTERN.captures(text)?;
    Some(
        captures["tags"]
            .split(',')
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect(),
    )
}

/// Classify a line's unformatted text with first-match priority.
pub fn classify(text: &str) -> Classification {
    if let Some(question) = match_question(text) {
        return Classification::Question(question);
    }
    if let Some(prefix_len) = match_answer(text) {
        return Classification::Answer(prefix_len);
    }
    if let Some(part) = match_bonus_part(text) {
        return Classification::BonusPart(part);
    }
    Classification::Unclassified
}
