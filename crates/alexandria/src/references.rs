//! Reference-list parsing.

use std::sync::LazyLock;

use alexandria_core::iterate_urls;
use indexmap::IndexMap;
use regex::Regex;

/// `[<digits>]` entry marker.
static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d+)\]").expect("valid reference key regex"));

/// Ordered mapping from citation key to reference body.
///
/// Keys keep the order in which they first appear in the reference list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct References {
    entries: IndexMap<String, String>,
}

impl References {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, body: impl Into<String>) {
        self.entries.insert(key.into(), body.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// URL-like tokens in the body of `key`.
    pub fn urls(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .map(|body| iterate_urls(body).map(|range| &body[range]).collect())
            .unwrap_or_default()
    }

    pub fn into_inner(self) -> IndexMap<String, String> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a References {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Parse reference-section text into a key/body mapping.
///
/// Every `[n]` marker opens an entry whose body runs to the next marker (or
/// the end of `text`), trimmed. Text before the first marker is ignored.
/// Keys need not be contiguous or sorted; a repeated key keeps the last body.
pub fn parse_references(text: &str) -> References {
    let mut references = References::new();
    let mut markers = KEY_RE.captures_iter(text).peekable();

    while let Some(caps) = markers.next() {
        let (Some(marker), Some(key)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let body_end = markers
            .peek()
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());
        references.insert(key.as_str(), text[marker.end()..body_end].trim());
    }

    references
}
