//! Collaborator trait for page data.
//!
//! Defines the [`DocumentSource`] trait that abstracts the rendering library
//! producing text fragments and operator streams. Extraction logic is
//! written against this trait so any renderer (or a serialized dump of one)
//! can drive it.

use alexandria_core::{ExtractError, TextFragment};

use crate::operator::OperatorRecord;

/// Width and height of a page, in page-space units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageDimensions {
    pub width: f64,
    pub height: f64,
}

/// Trait abstracting the page-data collaborator.
///
/// Page numbers are 1-based. Callers validate the range against
/// [`page_count`](DocumentSource::page_count) before calling the other
/// methods, but implementations must still fail cleanly on a bad page.
///
/// Failures are propagated as-is by the extraction layer and never retried;
/// retry policy belongs to the implementation.
///
/// # Usage
///
/// ```ignore
/// let fragments = source.text_fragments(1)?;
/// let operators = source.operator_stream(1)?;
/// let figures = FigureInterpreter::run(&operators)?;
/// ```
pub trait DocumentSource {
    /// Source-specific error type, convertible to [`ExtractError`].
    type Error: std::error::Error + Into<ExtractError>;

    /// Return the number of pages in the document.
    fn page_count(&self) -> usize;

    /// Positioned text runs of a page, in content order.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be fetched.
    fn text_fragments(&self, page: usize) -> Result<Vec<TextFragment>, Self::Error>;

    /// The page's flattened drawing operators.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be fetched.
    fn operator_stream(&self, page: usize) -> Result<Vec<OperatorRecord>, Self::Error>;

    /// Size of the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be fetched.
    fn page_dimensions(&self, page: usize) -> Result<PageDimensions, Self::Error>;

    /// Human-readable descriptor (typically the font name) for a font id
    /// referenced by fragments on `page`.
    ///
    /// # Errors
    ///
    /// Returns an error if the page or font cannot be resolved.
    fn font_descriptor(&self, page: usize, font_id: &str) -> Result<String, Self::Error>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    type Error = S::Error;

    fn page_count(&self) -> usize {
        (**self).page_count()
    }

    fn text_fragments(&self, page: usize) -> Result<Vec<TextFragment>, Self::Error> {
        (**self).text_fragments(page)
    }

    fn operator_stream(&self, page: usize) -> Result<Vec<OperatorRecord>, Self::Error> {
        (**self).operator_stream(page)
    }

    fn page_dimensions(&self, page: usize) -> Result<PageDimensions, Self::Error> {
        (**self).page_dimensions(page)
    }

    fn font_descriptor(&self, page: usize, font_id: &str) -> Result<String, Self::Error> {
        (**self).font_descriptor(page, font_id)
    }
}
