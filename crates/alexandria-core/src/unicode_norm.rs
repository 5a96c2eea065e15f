//! Unicode normalization for fragment text.
//!
//! Different producers emit different Unicode representations for the same
//! visual text (composed vs. decomposed accents, ligature code points).
//! Normalizing before matching keeps titles, headings and citation keys
//! comparable across documents.

use unicode_normalization::UnicodeNormalization;

use crate::text::TextFragment;

/// Unicode normalization form to apply to fragment text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnicodeNorm {
    /// No normalization (default).
    #[default]
    None,
    /// Canonical Decomposition, followed by Canonical Composition (NFC).
    Nfc,
    /// Canonical Decomposition (NFD).
    Nfd,
    /// Compatibility Decomposition, followed by Canonical Composition (NFKC).
    Nfkc,
    /// Compatibility Decomposition (NFKD).
    Nfkd,
}

impl UnicodeNorm {
    /// Apply this normalization form to the given string.
    pub fn normalize(&self, text: &str) -> String {
        match self {
            UnicodeNorm::None => text.to_string(),
            UnicodeNorm::Nfc => text.nfc().collect(),
            UnicodeNorm::Nfd => text.nfd().collect(),
            UnicodeNorm::Nfkc => text.nfkc().collect(),
            UnicodeNorm::Nfkd => text.nfkd().collect(),
        }
    }
}

/// Normalize the text of every fragment in place.
pub fn normalize_fragments(fragments: &mut [TextFragment], norm: UnicodeNorm) {
    if norm == UnicodeNorm::None {
        return;
    }
    for fragment in fragments {
        fragment.text = norm.normalize(&fragment.text);
    }
}
