//! Inline citation matching.
//!
//! Finds bracketed citation groups such as `[2, 5]` in a page's text and
//! maps each keyword back onto the fragment(s) it was drawn from.

use std::ops::Range;
use std::sync::LazyLock;

use alexandria_core::{ExtractOptions, TextBuffer, TextFragment};
use regex::Regex;

/// A `[...]` group without nested brackets.
static GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]").expect("valid citation group regex"));

/// One citation keyword's span inside a single fragment's text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CitationSpan {
    /// Byte offset of the span start within the fragment text.
    pub start: usize,
    /// Exclusive byte offset of the span end within the fragment text.
    pub end: usize,
    /// The full citation keyword, even when the span covers only part of it.
    pub key: String,
}

/// All citation spans that fall inside one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FragmentCitations {
    /// Index into the page's fragment list as delivered by the source.
    pub fragment_index: usize,
    pub spans: Vec<CitationSpan>,
}

/// A citation keyword located in the page text.
struct Keyword<'t> {
    key: &'t str,
    range: Range<usize>,
}

/// Split every bracket group's content on commas into trimmed keywords.
fn keywords(text: &str) -> Vec<Keyword<'_>> {
    let mut found = Vec::new();
    for caps in GROUP_RE.captures_iter(text) {
        let Some(inner) = caps.get(1) else { continue };
        let mut offset = inner.start();
        for piece in inner.as_str().split(',') {
            let lead = piece.len() - piece.trim_start().len();
            let key = piece.trim();
            if !key.is_empty() {
                let start = offset + lead;
                found.push(Keyword {
                    key,
                    range: start..start + key.len(),
                });
            }
            offset += piece.len() + 1;
        }
    }
    found
}

/// Find every citation keyword on a page.
///
/// Horizontal fragments are concatenated the same way section text is; each
/// keyword found inside a `[...]` group is intersected with the byte range of
/// every fragment it overlaps. Fragments without citations are skipped, so
/// results are in fragment order and each fragment appears at most once.
pub fn match_citations(fragments: &[TextFragment], options: &ExtractOptions) -> Vec<FragmentCitations> {
    let mut buffer = TextBuffer::new(options.line_break);
    let mut indices = Vec::new();
    for (index, fragment) in fragments.iter().enumerate() {
        if fragment.is_horizontal(options.horizontal_tolerance) {
            buffer.push(fragment);
            indices.push(index);
        }
    }

    let mut per_fragment: Vec<Vec<CitationSpan>> = vec![Vec::new(); indices.len()];
    for keyword in keywords(buffer.text()) {
        for (slot, span) in buffer.spans().iter().enumerate() {
            let start = keyword.range.start.max(span.start);
            let end = keyword.range.end.min(span.end);
            if start < end {
                per_fragment[slot].push(CitationSpan {
                    start: start - span.start,
                    end: end - span.start,
                    key: keyword.key.to_string(),
                });
            }
        }
    }

    indices
        .into_iter()
        .zip(per_fragment)
        .filter(|(_, spans)| !spans.is_empty())
        .map(|(fragment_index, spans)| FragmentCitations {
            fragment_index,
            spans,
        })
        .collect()
}
