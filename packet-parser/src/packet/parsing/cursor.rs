//! Forward-only line cursor
//!
//! Owns the parser's position in the classified line sequence and the
//! 1-based line counting used for diagnostics. One cursor belongs to exactly
//! one parse call and is never shared.

use crate::packet::lexing::Line;

/// Length in characters of the diagnostic snippet taken from a line.
const SNIPPET_LEN: usize = 40;

/// A forward-only cursor over a classified line sequence.
pub struct LineCursor<'a> {
    lines: &'a [Line],
    index: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [Line]) -> Self {
        Self { lines, index: 0 }
    }

    /// The line under the cursor, without consuming it.
    pub fn peek(&self) -> Option<&'a Line> {
        self.lines.get(self.index)
    }

    /// Consume and return the line under the cursor.
    pub fn advance(&mut self) -> Option<&'a Line> {
        let line = self.lines.get(self.index)?;
        self.index += 1;
        Some(line)
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.lines.len()
    }

    /// 1-based number of the line under the cursor; when the input is
    /// exhausted, the number of the last line (the last known position).
    pub fn line_number(&self) -> usize {
        self.index.min(self.lines.len().saturating_sub(1)) + 1
    }

    /// Diagnostic context for a stalled search: the last-known line number
    /// and a truncated snippet of that line's unformatted text.
    pub fn stall_context(&self) -> (usize, String) {
        let number = self.line_number();
        let snippet = self
            .lines
            .get(number.saturating_sub(1))
            .map(|line| snippet(&line.text.plain_text()))
            .unwrap_or_default();
        (number, snippet)
    }
}

/// First `SNIPPET_LEN` characters of a line's text.
pub fn snippet(text: &str) -> String {
    if text.chars().count() <= SNIPPET_LEN {
        text.to_string()
    } else {
        let cut: String = text.chars().take(SNIPPET_LEN).collect();
        format!("{}...", cut.trim_end())
    }
}
