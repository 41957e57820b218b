//! Lexing: styled runs to classified lines
//!
//! Consumes the run-source boundary representation and produces the ordered
//! sequence of classified, styled [`Line`]s the parser operates on. The
//! lexer owns the two pieces of numbering state the classifier cannot see:
//! the running question counter (for tiebreakers and externally numbered
//! list items) and the last seen ordinal-list identifier.

pub mod lexer;
pub mod line;

pub use lexer::lex;
pub use line::{Line, LineKind};
