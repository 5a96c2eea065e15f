//! alexandria-core: collaborator-independent data types and algorithms.
//!
//! This crate provides the foundational types (`Rect`, `Ctm`, `TextFragment`,
//! `TextBuffer`) and text utilities used by alexandria. It knows nothing
//! about where fragments or operators come from.

pub mod error;
pub mod geometry;
pub mod pattern;
pub mod text;
pub mod unicode_norm;

pub use error::{ExtractError, ExtractOptions};
pub use geometry::{Ctm, Point, Rect, push_merged};
pub use pattern::{iterate_pattern, iterate_urls};
pub use text::{LineBreak, TextBuffer, TextFragment, normalize_whitespace};
pub use unicode_norm::{UnicodeNorm, normalize_fragments};
