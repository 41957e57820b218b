//! Packet AST
//!
//! The validated output of a parse: a non-empty ordered list of tossups,
//! optionally followed by a bonus section. All nodes are constructed once by
//! the parser from validated inputs and are immutable thereafter; the root
//! [`Packet`] owns the whole tree and output compilers only read it.

use crate::packet::style::StyledText;

/// Root node: the parsed packet.
#[derive(Debug, Clone, PartialEq)]
pub struct Packet {
    /// At least one tossup, in document order.
    pub tossups: Vec<Tossup>,
    /// `None` when the document has no bonus section at all, as opposed to
    /// an empty one.
    pub bonuses: Option<Vec<Bonus>>,
}

impl Packet {
    pub fn new(tossups: Vec<Tossup>, bonuses: Option<Vec<Bonus>>) -> Self {
        Self { tossups, bonuses }
    }
}

/// A single question with one answer, identified by its ordinal.
#[derive(Debug, Clone, PartialEq)]
pub struct Tossup {
    pub number: u32,
    pub question: Question,
}

impl Tossup {
    pub fn new(number: u32, question: Question) -> Self {
        Self { number, question }
    }
}

/// A multi-part question set sharing one leadin.
#[derive(Debug, Clone, PartialEq)]
pub struct Bonus {
    pub number: u32,
    pub leadin: StyledText,
    /// At least one part, in document order.
    pub parts: Vec<BonusPart>,
}

impl Bonus {
    pub fn new(number: u32, leadin: StyledText, parts: Vec<BonusPart>) -> Self {
        Self {
            number,
            leadin,
            parts,
        }
    }
}

/// One part of a bonus: its prompt/answer pair and point value.
#[derive(Debug, Clone, PartialEq)]
pub struct BonusPart {
    pub question: Question,
    pub value: u32,
    pub difficulty: Option<char>,
}

impl BonusPart {
    pub fn new(question: Question, value: u32, difficulty: Option<char>) -> Self {
        Self {
            question,
            value,
            difficulty,
        }
    }
}

/// A prompt with its answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub prompt: StyledText,
    pub answer: StyledText,
}

impl Question {
    pub fn new(prompt: StyledText, answer: StyledText) -> Self {
        Self { prompt, answer }
    }
}
