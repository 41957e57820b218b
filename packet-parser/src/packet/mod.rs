//! Main module for packet library functionality

pub mod ast;
pub mod classify;
pub mod lexing;
pub mod parsing;
pub mod source;
pub mod style;

use crate::packet::ast::Packet;
use crate::packet::parsing::ParseResult;
use crate::packet::source::Paragraph;

/// Parse a run source end to end: lex the paragraphs into classified lines,
/// then parse the line sequence into a packet.
///
/// This is the main entry point for callers that hold the boundary
/// representation directly (the CLI, the compilers' tests). Callers that need
/// the intermediate line sequence, e.g. for diagnostics tooling, can run
/// [`lexing::lex`] and [`parsing::parse`] themselves.
pub fn parse_paragraphs(paragraphs: &[Paragraph]) -> ParseResult<Packet> {
    let lines = lexing::lex(paragraphs);
    parsing::parse(&lines)
}
