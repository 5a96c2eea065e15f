//! Pattern iteration over plain text.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:https?://)?[-a-z0-9@:%._+~#=]{1,256}\.[a-z0-9()]{1,6}\b[-a-z0-9()@:%_+.~#?&/=]*",
    )
    .expect("URL pattern is valid")
});

/// Byte range of every non-overlapping match of `re` in `text`, left to right.
pub fn iterate_pattern(re: &Regex, text: &str) -> impl Iterator<Item = Range<usize>> {
    re.find_iter(text).map(|m| m.range())
}

/// Byte range of every URL-like token in `text`.
///
/// Matches an optional `http(s)://` scheme, a host ending in a short dotted
/// suffix, and any path or query tail.
pub fn iterate_urls(text: &str) -> impl Iterator<Item = Range<usize>> {
    iterate_pattern(&URL_RE, text)
}
