//! Styled-text model
//!
//! Shared immutable representation of text with per-range style attributes.
//! A [`StyledText`] is an ordered sequence of [`StyledSegment`]s, each a run
//! of text with five independent boolean style flags. Both the lexer (which
//! builds styled lines from source runs) and the output compilers (which
//! serialize them back to nested markup) operate on this model.
//!
//! Adjacent segments with identical styles are NOT coalesced: each segment
//! may originate from a distinct source run, and merging is the lexer's
//! decision, not the model's.

pub mod markup;

use std::fmt;

/// One of the five inline styles a segment can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Underline,
    Italic,
    Subscript,
    Superscript,
}

/// The set of styles applied to a segment.
///
/// Flags are independent; any combination is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleSet {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub subscript: bool,
    pub superscript: bool,
}

impl StyleSet {
    /// A set with no styles applied.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Whether the given style is present in this set.
    pub fn has(&self, style: Style) -> bool {
        match style {
            Style::Bold => self.bold,
            Style::Underline => self.underline,
            Style::Italic => self.italic,
            Style::Subscript => self.subscript,
            Style::Superscript => self.superscript,
        }
    }
}

/// An immutable run of text with one set of style flags.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSegment {
    pub text: String,
    pub styles: StyleSet,
}

impl StyledSegment {
    pub fn new(text: impl Into<String>, styles: StyleSet) -> Self {
        Self {
            text: text.into(),
            styles,
        }
    }

    /// A segment with no styles applied.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, StyleSet::plain())
    }
}

/// An ordered, immutable sequence of styled segments representing one
/// contiguous logical text span.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledText {
    segments: Vec<StyledSegment>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<StyledSegment>) -> Self {
        let mut text = Self::new();
        for segment in segments {
            text.push_segment(segment);
        }
        text
    }

    /// Append a segment, dropping empty-text segments so that only splitting
    /// artifacts can ever introduce them.
    pub fn push_segment(&mut self, segment: StyledSegment) {
        if !segment.text.is_empty() {
            self.segments.push(segment);
        }
    }

    /// Append all segments of `other`, preserving order.
    pub fn append(&mut self, other: StyledText) {
        for segment in other.segments {
            self.push_segment(segment);
        }
    }

    pub fn segments(&self) -> &[StyledSegment] {
        &self.segments
    }

    /// Total text length in bytes.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.text.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Concatenation of segment texts without any markup.
    ///
    /// Used for classification and for sanitized output fields.
    pub fn plain_text(&self) -> String {
        let mut out = String::with_capacity(self.len());
        for segment in &self.segments {
            out.push_str(&segment.text);
        }
        out
    }

    /// Return a new `StyledText` with the first `offset` bytes removed.
    ///
    /// The segment straddling the boundary is split; the retained suffix
    /// keeps its style flags. An offset at or past the end yields an empty
    /// `StyledText`. Offsets normally come from a classifier match against
    /// [`plain_text`](Self::plain_text) of the same text and therefore land
    /// on character boundaries; an offset inside a multi-byte character is
    /// snapped forward to the next boundary rather than panicking.
    pub fn trim_prefix(&self, offset: usize) -> StyledText {
        let mut remaining = offset;
        let mut out = StyledText::new();
        for segment in &self.segments {
            if remaining == 0 {
                out.push_segment(segment.clone());
            } else if remaining >= segment.text.len() {
                remaining -= segment.text.len();
            } else {
                let mut cut = remaining;
                while !segment.text.is_char_boundary(cut) {
                    cut += 1;
                }
                out.push_segment(StyledSegment::new(&segment.text[cut..], segment.styles));
                remaining = 0;
            }
        }
        out
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plain_text())
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        let mut styled = StyledText::new();
        styled.push_segment(StyledSegment::plain(text));
        styled
    }
}
