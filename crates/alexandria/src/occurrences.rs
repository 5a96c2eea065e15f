//! Streaming search for arbitrary text across fragment boundaries.
//!
//! The page text is never materialized: the target is matched character by
//! character while walking the fragments, and a run that spills over a
//! fragment boundary carries the matched parts of each fragment with it.

use alexandria_core::TextFragment;

/// Part of a match lying inside one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occurrence {
    /// Index into the page's fragment list as delivered by the source.
    pub fragment_index: usize,
    /// Byte offset of the matched part within the fragment text.
    pub start: usize,
    /// Exclusive end byte offset within the fragment text.
    pub end: usize,
}

/// Match state independent of fragment storage.
#[derive(Debug, Clone)]
struct Matcher {
    target: Vec<char>,
    cursor: usize,
    run: Vec<Occurrence>,
    run_start: Option<usize>,
}

impl Matcher {
    fn new(target: &str) -> Self {
        Self {
            target: target.chars().collect(),
            cursor: 0,
            run: Vec::new(),
            run_start: None,
        }
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.run.clear();
        self.run_start = None;
    }

    fn complete(&mut self) -> Option<Vec<Occurrence>> {
        self.cursor = 0;
        self.run_start = None;
        Some(std::mem::take(&mut self.run))
    }

    /// Called when a fragment begins. While a run is in progress, one literal
    /// space in the target may be satisfied by the boundary itself, unless the
    /// new fragment carries its own leading whitespace. Empty fragments do
    /// not form a boundary of their own.
    fn boundary(&mut self, next_text: &str) -> Option<Vec<Occurrence>> {
        if self.cursor > 0
            && !next_text.is_empty()
            && self.target.get(self.cursor) == Some(&' ')
            && !next_text.starts_with(char::is_whitespace)
        {
            self.cursor += 1;
            if self.cursor == self.target.len() {
                return self.complete();
            }
        }
        None
    }

    fn step(&mut self, fragment_index: usize, offset: usize, ch: char) -> Option<Vec<Occurrence>> {
        if self.target.get(self.cursor) != Some(&ch) {
            self.reset();
            if self.target.first() != Some(&ch) {
                return None;
            }
        }
        let start = *self.run_start.get_or_insert(offset);
        self.cursor += 1;
        if self.cursor == self.target.len() {
            self.run.push(Occurrence {
                fragment_index,
                start,
                end: offset + ch.len_utf8(),
            });
            return self.complete();
        }
        None
    }

    /// Called when a fragment ends with the run still open.
    fn end_fragment(&mut self, fragment_index: usize, len: usize) {
        if let Some(start) = self.run_start.take() {
            self.run.push(Occurrence {
                fragment_index,
                start,
                end: len,
            });
        }
    }
}

/// Lazy sequence of matches of a target string on one page.
///
/// Each item is one complete match: the fragment-local pieces it spans, in
/// order. Matches never overlap. Non-horizontal fragments are skipped, as
/// they are for every other text operation. A new iterator re-reads the
/// fragments from the start, so repeated searches give identical results.
#[derive(Debug, Clone)]
pub struct Occurrences<F> {
    fragments: F,
    tolerance: f64,
    fragment: usize,
    offset: usize,
    entered: bool,
    matcher: Matcher,
}

impl<F: AsRef<[TextFragment]>> Occurrences<F> {
    pub fn new(fragments: F, target: &str, tolerance: f64) -> Self {
        Self {
            fragments,
            tolerance,
            fragment: 0,
            offset: 0,
            entered: false,
            matcher: Matcher::new(target),
        }
    }
}

impl<F: AsRef<[TextFragment]>> Iterator for Occurrences<F> {
    type Item = Vec<Occurrence>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.matcher.target.is_empty() {
            return None;
        }
        let fragments = self.fragments.as_ref();

        while let Some(fragment) = fragments.get(self.fragment) {
            if !fragment.is_horizontal(self.tolerance) {
                self.fragment += 1;
                continue;
            }
            if !self.entered {
                self.entered = true;
                if let Some(found) = self.matcher.boundary(&fragment.text) {
                    return Some(found);
                }
            }
            while let Some(ch) = fragment.text[self.offset..].chars().next() {
                let offset = self.offset;
                self.offset += ch.len_utf8();
                if let Some(found) = self.matcher.step(self.fragment, offset, ch) {
                    return Some(found);
                }
            }
            self.matcher.end_fragment(self.fragment, fragment.text.len());
            self.fragment += 1;
            self.offset = 0;
            self.entered = false;
        }
        None
    }
}

/// Search `fragments` for `target`. An empty target matches nothing.
pub fn find_occurrences<'a>(
    fragments: &'a [TextFragment],
    target: &str,
    tolerance: f64,
) -> Occurrences<&'a [TextFragment]> {
    Occurrences::new(fragments, target, tolerance)
}
