//! Compiler trait and format selection
//!
//! A uniform interface over the output formats: each compiler reads a
//! `Packet` and produces one output document as a string.

use packet_parser::packet::ast::Packet;

use crate::error::FormatError;
use crate::formats::html::HtmlCompiler;
use crate::formats::json::JsonCompiler;

/// An output format compiler.
///
/// Implementors read the AST only; they must not mutate it (the AST is
/// immutable by construction, so the signature enforces this).
pub trait Compiler {
    /// The name of this format (e.g. "json", "html").
    fn name(&self) -> &str;

    /// Compile a packet into this format's output document.
    fn compile(&self, packet: &Packet) -> Result<String, FormatError>;
}

/// Look up a compiler by format name.
pub fn compiler_for(name: &str) -> Result<Box<dyn Compiler>, FormatError> {
    match name {
        "json" => Ok(Box::new(JsonCompiler)),
        "html" => Ok(Box::new(HtmlCompiler)),
        other => Err(FormatError::UnknownFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_formats_resolve() {
        assert_eq!(compiler_for("json").unwrap().name(), "json");
        assert_eq!(compiler_for("html").unwrap().name(), "html");
    }

    #[test]
    fn test_unknown_format_is_an_error() {
        assert!(matches!(
            compiler_for("pdf"),
            Err(FormatError::UnknownFormat(_))
        ));
    }
}
