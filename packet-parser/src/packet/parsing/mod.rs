//! Parsing: classified lines to packet AST
//!
//! A single-pass state machine over the classified line sequence. The only
//! mutable state is a forward-only [`cursor::LineCursor`] owned by one parse
//! call; there is no global or static parsing state, so independent packets
//! may be parsed concurrently.
//!
//! All structural failures are fatal to the whole packet and surface as one
//! [`error::ParseError`] value naming the unit being parsed, the 1-based
//! physical line number where the search stalled, and a short snippet of
//! that line. Lines matching no known role are not errors; they are
//! absorbed into the surrounding accumulation.

pub mod cursor;
pub mod error;
pub mod parser;

pub use error::{ParseError, ParseResult};
pub use parser::parse;
