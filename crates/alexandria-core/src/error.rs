//! Error and option types for alexandria.
//!
//! Provides [`ExtractError`] for fatal errors that abort a computation and
//! [`ExtractOptions`] for tuning the layout heuristics. Structural absence
//! (no title, no reference section, no resolvable citation) is never an
//! error; it is reported through empty or `None` results.

use std::fmt;

use crate::text::LineBreak;
use crate::unicode_norm::UnicodeNorm;

/// Fatal error types for structure extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// The collaborator failed to deliver page data. Never retried here.
    Source(String),
    /// The operator stream violated the interpreter's input contract.
    Interpreter(String),
    /// A 1-based page number outside the document.
    PageOutOfRange {
        /// The requested page.
        page: usize,
        /// Number of pages in the document.
        page_count: usize,
    },
    /// Any other error not covered by specific variants.
    Other(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Source(msg) => write!(f, "source error: {msg}"),
            ExtractError::Interpreter(msg) => write!(f, "interpreter error: {msg}"),
            ExtractError::PageOutOfRange { page, page_count } => {
                write!(f, "page {page} out of range (document has {page_count} pages)")
            }
            ExtractError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Source(err.to_string())
    }
}

/// Options controlling the layout heuristics.
///
/// All defaults match typical single- and two-column academic papers.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractOptions {
    /// Largest rotation/skew component a fragment may have and still count
    /// as horizontal text (default: 1e-6).
    pub horizontal_tolerance: f64,
    /// Tolerance for comparing glyph heights and baselines (default: 1e-3).
    pub height_tolerance: f64,
    /// Number of leading pages evaluated for the title (default: 2).
    pub title_pages: usize,
    /// Minimum character count for a fragment to be a title candidate
    /// (default: 2, rejecting drop caps).
    pub min_title_fragment_chars: usize,
    /// Lower-case keywords that identify the heading font (default:
    /// abstract, introduction, background, references, bibliography).
    pub heading_keywords: Vec<String>,
    /// Lower-case headings that open the reference section (default:
    /// references, bibliography).
    pub reference_headings: Vec<String>,
    /// Separator inserted after a fragment that ends a line (default: space).
    pub line_break: LineBreak,
    /// Unicode normalization applied to fragment text on load (default: none).
    pub unicode_norm: UnicodeNorm,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            horizontal_tolerance: 1e-6,
            height_tolerance: 1e-3,
            title_pages: 2,
            min_title_fragment_chars: 2,
            heading_keywords: ["abstract", "introduction", "background", "references", "bibliography"]
                .into_iter()
                .map(String::from)
                .collect(),
            reference_headings: ["references", "bibliography"]
                .into_iter()
                .map(String::from)
                .collect(),
            line_break: LineBreak::Space,
            unicode_norm: UnicodeNorm::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_error_display() {
        assert_eq!(
            ExtractError::Source("page 3 unavailable".to_string()).to_string(),
            "source error: page 3 unavailable"
        );
        assert_eq!(
            ExtractError::Interpreter("constructPath".to_string()).to_string(),
            "interpreter error: constructPath"
        );
        assert_eq!(
            ExtractError::PageOutOfRange { page: 9, page_count: 4 }.to_string(),
            "page 9 out of range (document has 4 pages)"
        );
        assert_eq!(ExtractError::Other("x".to_string()).to_string(), "x");
    }

    #[test]
    fn extract_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing dump");
        let err: ExtractError = io.into();
        assert!(matches!(err, ExtractError::Source(_)));
        assert!(err.to_string().contains("missing dump"));
    }

    #[test]
    fn extract_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ExtractError::Other("boxed".to_string()));
        assert_eq!(err.to_string(), "boxed");
    }

    #[test]
    fn extract_options_defaults() {
        let opts = ExtractOptions::default();
        assert_eq!(opts.title_pages, 2);
        assert_eq!(opts.min_title_fragment_chars, 2);
        assert_eq!(opts.heading_keywords.len(), 5);
        assert!(opts.heading_keywords.iter().any(|k| k == "bibliography"));
        assert_eq!(opts.reference_headings, vec!["references", "bibliography"]);
        assert_eq!(opts.line_break, LineBreak::Space);
        assert_eq!(opts.unicode_norm, UnicodeNorm::None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn extract_options_partial_json() {
        let opts: ExtractOptions = serde_json::from_str(r#"{"title_pages": 1}"#).unwrap();
        assert_eq!(opts.title_pages, 1);
        assert_eq!(opts.reference_headings.len(), 2);
    }
}
