//! alexandria: recover the structure of rendered academic papers.
//!
//! Given the positioned text runs and drawing operators a renderer produces
//! for each page, this crate finds the paper's title, its sections and
//! reference list, the inline citations that point into that list, arbitrary
//! text occurrences, and the bounding boxes of vector and raster figures.
//!
//! # Architecture
//!
//! - **alexandria-core**: collaborator-independent data types and text utilities
//! - **alexandria-parse**: operator interpretation and the [`DocumentSource`] trait
//! - **alexandria** (this crate): [`AcademicDocument`] and the layout heuristics
//!
//! # Example
//!
//! ```ignore
//! use alexandria::{AcademicDocument, MemoryDocument};
//!
//! let source = MemoryDocument::from_json(&std::fs::read_to_string("paper.json")?)?;
//! let doc = AcademicDocument::new(source);
//! println!("{}", doc.load_title()?);
//! if let Some(references) = doc.load_references()? {
//!     for (key, body) in references.iter() {
//!         println!("[{key}] {body}");
//!     }
//! }
//! ```

pub mod citations;
mod document;
pub mod occurrences;
pub mod references;
pub mod sections;
pub mod title;

pub use alexandria_core::{
    Ctm, ExtractError, ExtractOptions, LineBreak, Point, Rect, TextBuffer, TextFragment,
    UnicodeNorm, iterate_pattern, iterate_urls, normalize_whitespace,
};
pub use alexandria_parse::{
    DocumentSource, FigureInterpreter, Figures, InterpreterError, MemoryDocument, MemoryError,
    MemoryPage, Opcode, OperatorRecord, PageDimensions, flatten_construct_path, iterate_figures,
};
pub use citations::{CitationSpan, FragmentCitations, match_citations};
pub use document::AcademicDocument;
pub use occurrences::{Occurrence, Occurrences, find_occurrences};
pub use references::{References, parse_references};
pub use sections::{extract_reference_section, extract_section, select_heading_font};
pub use title::{TitleCandidate, detect_page_title, detect_title};
