//! # packet-parser
//!
//! A parser for quiz bowl packets.
//!
//! The crate turns a styled-run source (an ordered sequence of paragraphs of
//! styled text runs, as produced by a document-container extractor) into a
//! validated packet AST of tossups and bonuses. The pipeline is strictly
//! one-way:
//!
//!     styled runs -> lexer -> classified lines -> parser -> Packet
//!
//! Each stage is a pure, synchronous transformation; callers may parse any
//! number of packets in parallel as long as each parse owns its own line
//! sequence. Output compilers (JSON, HTML) live in the `packet-babel` crate
//! and only read the AST.

pub mod packet;
