//! Nested-markup serialization for styled text
//!
//! Serializes a [`StyledText`] to a string with inline style tags. The tag
//! ordering is driven by a single style table: styles open in table order
//! (bold, underline, italic, subscript, superscript) and close from the
//! innermost open style outward, which keeps the output well nested even
//! when several styles toggle on the same segment boundary. Bold sits at the
//! top of the table, so it only ever closes when bold itself turns off.
//!
//! Escaping the text content is the output stage's concern, not the model's;
//! the serializer emits segment text verbatim.

use super::{Style, StyledText};

/// Style priority table: open tags are emitted in this order, close tags in
/// the reverse of the order they were opened.
const STYLE_TABLE: [(Style, &str, &str); 5] = [
    (Style::Bold, "<b>", "</b>"),
    (Style::Underline, "<u>", "</u>"),
    (Style::Italic, "<i>", "</i>"),
    (Style::Subscript, "<sub>", "</sub>"),
    (Style::Superscript, "<sup>", "</sup>"),
];

fn close_tag(style: Style) -> &'static str {
    STYLE_TABLE
        .iter()
        .find(|(s, _, _)| *s == style)
        .map(|(_, _, close)| *close)
        .unwrap_or("")
}

impl StyledText {
    /// Serialize to a string with nested style tags.
    ///
    /// Maintains a stack of currently open styles. Before each segment, every
    /// open style the segment no longer needs is closed; because closing must
    /// proceed from the innermost tag, any style opened after it is closed
    /// too and reopened afterwards if still required. At end of input the
    /// remaining stack closes in reverse open order.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(self.len());
        let mut open: Vec<Style> = Vec::new();

        for segment in self.segments() {
            if segment.text.is_empty() {
                continue;
            }

            // Close from the outermost no-longer-needed style inward.
            if let Some(outermost) = open.iter().position(|s| !segment.styles.has(*s)) {
                for style in open.drain(outermost..).rev() {
                    out.push_str(close_tag(style));
                }
            }

            // Open newly required styles in table order.
            for (style, open_tag, _) in STYLE_TABLE {
                if segment.styles.has(style) && !open.contains(&style) {
                    out.push_str(open_tag);
                    open.push(style);
                }
            }

            out.push_str(&segment.text);
        }

        for style in open.into_iter().rev() {
            out.push_str(close_tag(style));
        }
        out
    }
}
