//! Text fragments and the buffer that joins them into page text.
//!
//! [`TextBuffer`] records the byte span each fragment occupies so matches
//! found in the joined text can be mapped back onto fragments.

use std::ops::Range;

use crate::geometry::Ctm;

/// One positioned run of horizontally laid-out glyphs at a fixed font and size.
///
/// Fragments are produced by the text-extraction collaborator and are
/// read-only to the rest of the crate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextFragment {
    /// The text content of this run.
    pub text: String,
    /// Left edge of the run (baseline origin), in page space.
    pub x: f64,
    /// Baseline of the run, in page space.
    pub y: f64,
    pub width: f64,
    /// Glyph height, used as the font size proxy.
    pub height: f64,
    /// Opaque font identifier assigned by the collaborator.
    pub font_id: String,
    /// Whether the run is the last one on its line.
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_line_break_after: bool,
    /// Text rendering matrix `[a, b, c, d, e, f]` of the run.
    #[cfg_attr(feature = "serde", serde(default = "identity_transform"))]
    pub transform: [f64; 6],
}

#[cfg(feature = "serde")]
fn identity_transform() -> [f64; 6] {
    Ctm::identity().to_array()
}

impl TextFragment {
    /// Create an upright fragment whose transform is a pure translation to `(x, y)`.
    pub fn new(text: impl Into<String>, x: f64, y: f64, height: f64, font_id: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            width: 0.0,
            transform: [height, 0.0, 0.0, height, x, y],
            text,
            x,
            y,
            height,
            font_id: font_id.into(),
            has_line_break_after: false,
        }
    }

    /// Builder: mark the fragment as ending its line.
    pub fn with_line_break(mut self) -> Self {
        self.has_line_break_after = true;
        self
    }

    /// Builder: set the text rendering matrix.
    pub fn with_transform(mut self, transform: [f64; 6]) -> Self {
        self.transform = transform;
        self
    }

    /// Whether the run is laid out horizontally (no rotation or skew beyond `tolerance`).
    pub fn is_horizontal(&self, tolerance: f64) -> bool {
        Ctm::from_array(self.transform).is_axis_aligned(tolerance)
    }
}

/// How the end of a line is represented when fragments are concatenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineBreak {
    /// A single space separates lines (default).
    #[default]
    Space,
    /// A newline separates lines.
    Newline,
}

impl LineBreak {
    fn as_char(self) -> char {
        match self {
            LineBreak::Space => ' ',
            LineBreak::Newline => '\n',
        }
    }
}

/// A running text buffer built from consecutive fragments.
///
/// Each appended fragment records the byte range it occupies, so spans found
/// in the buffer can be mapped back to the fragment that produced them.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    spans: Vec<Range<usize>>,
    line_break: LineBreak,
}

impl TextBuffer {
    pub fn new(line_break: LineBreak) -> Self {
        Self {
            text: String::new(),
            spans: Vec::new(),
            line_break,
        }
    }

    /// Append a fragment and return the byte range its text occupies.
    ///
    /// When the fragment ends a line, a trailing hyphen is dropped (the word
    /// continues on the next line) and nothing is inserted; otherwise the line
    /// break separator is appended after the fragment. The returned range
    /// never covers the separator or a dropped hyphen.
    pub fn push(&mut self, fragment: &TextFragment) -> Range<usize> {
        let start = self.text.len();
        self.text.push_str(&fragment.text);
        let mut end = self.text.len();

        if fragment.has_line_break_after {
            if self.text[start..].ends_with('-') {
                self.text.pop();
                end -= 1;
            } else {
                self.text.push(self.line_break.as_char());
            }
        }

        self.spans.push(start..end);
        start..end
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte ranges of every pushed fragment, in push order.
    pub fn spans(&self) -> &[Range<usize>] {
        &self.spans
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Collapse every run of whitespace to a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
