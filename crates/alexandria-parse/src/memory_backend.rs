//! In-memory [`DocumentSource`] implementation.
//!
//! Holds the collaborator's per-page output directly: fragments, operators,
//! page size and a font table. With the `serde` feature the whole document
//! round-trips through JSON, which is how the CLI consumes dumps produced by
//! a renderer.

use std::collections::BTreeMap;

use alexandria_core::{ExtractError, TextFragment};
use thiserror::Error;

use crate::operator::OperatorRecord;
use crate::source::{DocumentSource, PageDimensions};

/// Error type for the in-memory source.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// Requested page does not exist.
    #[error("page {page} not found (document has {page_count} pages)")]
    PageNotFound { page: usize, page_count: usize },

    /// Font id is not in the page's font table.
    #[error("font {font_id:?} not found on page {page}")]
    FontNotFound { page: usize, font_id: String },

    /// A JSON dump could not be decoded.
    #[cfg(feature = "serde")]
    #[error("invalid document dump: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<MemoryError> for ExtractError {
    fn from(err: MemoryError) -> Self {
        ExtractError::Source(err.to_string())
    }
}

/// One page of collaborator output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryPage {
    pub width: f64,
    pub height: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fragments: Vec<TextFragment>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub operators: Vec<OperatorRecord>,
    /// Font id to descriptor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fonts: BTreeMap<String, String>,
}

impl MemoryPage {
    /// An empty page of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fragments: Vec::new(),
            operators: Vec::new(),
            fonts: BTreeMap::new(),
        }
    }

    /// US Letter, the most common size for papers in the wild.
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    pub fn with_fragment(mut self, fragment: TextFragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    pub fn with_fragments(mut self, fragments: impl IntoIterator<Item = TextFragment>) -> Self {
        self.fragments.extend(fragments);
        self
    }

    pub fn with_operators(mut self, operators: impl IntoIterator<Item = OperatorRecord>) -> Self {
        self.operators.extend(operators);
        self
    }

    pub fn with_font(mut self, font_id: impl Into<String>, descriptor: impl Into<String>) -> Self {
        self.fonts.insert(font_id.into(), descriptor.into());
        self
    }
}

/// A whole document held in memory.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryDocument {
    pub pages: Vec<MemoryPage>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: MemoryPage) -> Self {
        self.pages.push(page);
        self
    }

    /// Decode a JSON dump.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::Json`] if the input is not a valid dump.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, MemoryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a JSON dump from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::Json`] if the input is not a valid dump or
    /// cannot be read.
    #[cfg(feature = "serde")]
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, MemoryError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Encode as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::Json`] if serialization fails.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, MemoryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn page(&self, page: usize) -> Result<&MemoryPage, MemoryError> {
        page.checked_sub(1)
            .and_then(|index| self.pages.get(index))
            .ok_or(MemoryError::PageNotFound {
                page,
                page_count: self.pages.len(),
            })
    }
}

impl DocumentSource for MemoryDocument {
    type Error = MemoryError;

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn text_fragments(&self, page: usize) -> Result<Vec<TextFragment>, Self::Error> {
        Ok(self.page(page)?.fragments.clone())
    }

    fn operator_stream(&self, page: usize) -> Result<Vec<OperatorRecord>, Self::Error> {
        Ok(self.page(page)?.operators.clone())
    }

    fn page_dimensions(&self, page: usize) -> Result<PageDimensions, Self::Error> {
        let p = self.page(page)?;
        Ok(PageDimensions {
            width: p.width,
            height: p.height,
        })
    }

    fn font_descriptor(&self, page: usize, font_id: &str) -> Result<String, Self::Error> {
        self.page(page)?
            .fonts
            .get(font_id)
            .cloned()
            .ok_or_else(|| MemoryError::FontNotFound {
                page,
                font_id: font_id.to_string(),
            })
    }
}
