//! Parse error types
//!
//! Structural failures are fatal to the whole packet: there is no partial
//! success and no recovery past them. Each error value carries everything
//! the diagnostics surface needs — the unit being parsed, the 1-based line
//! number where the search stalled, and a short snippet of that line — and
//! renders it as a single human-readable message.

use std::fmt;

/// The packet unit a failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Tossup(u32),
    Bonus(u32),
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Tossup(number) => write!(f, "tossup #{}", number),
            Unit::Bonus(number) => write!(f, "bonus #{}", number),
        }
    }
}

/// Errors that can occur while parsing a classified line sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The line sequence was empty.
    EmptyPacket,

    /// No numbered question line was found anywhere in the input.
    NoTossups { line: usize, snippet: String },

    /// A question or bonus-part prompt reached the end of the input without
    /// finding its answer line.
    MissingAnswer {
        unit: Unit,
        line: usize,
        snippet: String,
    },

    /// A bonus leadin reached the end of the input without finding a single
    /// recognized part.
    MissingParts {
        bonus: u32,
        line: usize,
        snippet: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyPacket => write!(f, "cannot parse an empty packet"),
            ParseError::NoTossups { line, snippet } => write!(
                f,
                "no tossups found: expected a numbered question line (line {}: \"{}\")",
                line, snippet
            ),
            ParseError::MissingAnswer {
                unit,
                line,
                snippet,
            } => write!(
                f,
                "{} has no answer line before the end of the packet (line {}: \"{}\")",
                unit, line, snippet
            ),
            ParseError::MissingParts {
                bonus,
                line,
                snippet,
            } => write!(
                f,
                "bonus #{} has no recognized parts (line {}: \"{}\")",
                bonus, line, snippet
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Type alias for parser results.
pub type ParseResult<T> = Result<T, ParseError>;
