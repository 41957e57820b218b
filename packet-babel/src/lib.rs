//! Output compilers for parsed packets
//!
//! This crate turns the immutable `Packet` AST produced by `packet-parser`
//! into output documents. It is a pure library: it powers the CLI but is
//! shell agnostic — no printing, no environment access.
//!
//! Compiler-specific capabilities are implemented with the [`Compiler`]
//! trait; each output format lives under `formats/<format>` with its own
//! serializer module. Compilers only read the AST; styled fields are
//! rendered through the model's own markup and plain-text serializers, so
//! this crate never inspects segments directly.
//!
//! The file structure:
//!
//!     ├── error.rs
//!     ├── format.rs               # Compiler trait and format selection
//!     ├── formats
//!     │   ├── json                # Packet -> JSON document
//!     │   └── html                # Packet -> standalone HTML document
//!     └── lib.rs

pub mod error;
pub mod format;
pub mod formats;

pub use error::FormatError;
pub use format::{compiler_for, Compiler};
