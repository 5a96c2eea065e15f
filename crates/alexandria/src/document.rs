//! Top-level document type for structure extraction.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use alexandria_core::{ExtractError, ExtractOptions, TextFragment, normalize_fragments};
use alexandria_parse::{DocumentSource, Figures, PageDimensions, iterate_figures};
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::citations::{FragmentCitations, match_citations};
use crate::occurrences::Occurrences;
use crate::references::{References, parse_references};
use crate::sections::{extract_reference_section, extract_section};
use crate::title::detect_title;

/// An academic paper opened for structure extraction.
///
/// Wraps a [`DocumentSource`] and derives title, sections, references,
/// citations, occurrences and figures from its pages. Title and references
/// are computed at most once per document, even when requested from several
/// threads at the same time; later callers wait for the first computation
/// and share its result. A failed computation is not cached.
///
/// # Example
///
/// ```ignore
/// let doc = AcademicDocument::new(source);
/// println!("{}", doc.load_title()?);
/// for figure in doc.iterate_figures(3)? {
///     println!("{figure:?}");
/// }
/// ```
pub struct AcademicDocument<S: DocumentSource> {
    source: S,
    options: ExtractOptions,
    title: OnceCell<String>,
    references: OnceCell<Option<References>>,
    /// Font descriptors by font id, one cell per id.
    fonts: Mutex<HashMap<String, Arc<OnceCell<String>>>>,
}

fn source_error<E: Into<ExtractError>>(err: E) -> ExtractError {
    err.into()
}

impl<S: DocumentSource> AcademicDocument<S> {
    /// Wrap a source with default options.
    pub fn new(source: S) -> Self {
        Self::with_options(source, ExtractOptions::default())
    }

    pub fn with_options(source: S, options: ExtractOptions) -> Self {
        Self {
            source,
            options,
            title: OnceCell::new(),
            references: OnceCell::new(),
            fonts: Mutex::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Return the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.source.page_count()
    }

    fn check_page(&self, page: usize) -> Result<(), ExtractError> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            return Err(ExtractError::PageOutOfRange { page, page_count });
        }
        Ok(())
    }

    /// Fetch a page's fragments, normalized per the options.
    fn load_fragments(&self, page: usize) -> Result<Vec<TextFragment>, ExtractError> {
        self.check_page(page)?;
        let mut fragments = self.source.text_fragments(page).map_err(source_error)?;
        normalize_fragments(&mut fragments, self.options.unicode_norm);
        debug!(page, fragments = fragments.len(), "page text loaded");
        Ok(fragments)
    }

    /// Horizontal fragments of every page, in page order.
    ///
    /// Any page failing to load fails the whole call.
    fn load_document_text(&self) -> Result<Vec<TextFragment>, ExtractError> {
        let mut all = Vec::new();
        for page in 1..=self.page_count() {
            all.extend(
                self.load_fragments(page)?
                    .into_iter()
                    .filter(|f| f.is_horizontal(self.options.horizontal_tolerance)),
            );
        }
        Ok(all)
    }

    /// The document title; empty if no page has a title candidate.
    ///
    /// # Errors
    ///
    /// Propagates a failure to load any of the leading pages.
    pub fn load_title(&self) -> Result<&str, ExtractError> {
        self.title
            .get_or_try_init(|| {
                let pages = self.options.title_pages.min(self.page_count());
                let fragments = (1..=pages)
                    .map(|page| self.load_fragments(page))
                    .collect::<Result<Vec<_>, _>>()?;
                let title = detect_title(&fragments, &self.options);
                debug!(%title, pages, "title detected");
                Ok::<_, ExtractError>(title)
            })
            .map(String::as_str)
    }

    /// Text of the section whose heading contains `name`, or `None` if there
    /// is no such heading.
    ///
    /// # Errors
    ///
    /// Propagates a failure to load any page.
    pub fn load_section(&self, name: &str) -> Result<Option<String>, ExtractError> {
        let fragments = self.load_document_text()?;
        Ok(extract_section(&fragments, name, &self.options))
    }

    /// Text from the reference heading to the end of the document.
    ///
    /// # Errors
    ///
    /// Propagates a failure to load any page.
    pub fn load_references_section(&self) -> Result<Option<String>, ExtractError> {
        let fragments = self.load_document_text()?;
        Ok(extract_reference_section(&fragments, &self.options))
    }

    /// The parsed reference list, or `None` when the document has no
    /// reference section.
    ///
    /// # Errors
    ///
    /// Propagates a failure to load any page.
    pub fn load_references(&self) -> Result<Option<&References>, ExtractError> {
        self.references
            .get_or_try_init(|| {
                let references = self.load_references_section()?.map(|text| parse_references(&text));
                debug!(
                    entries = references.as_ref().map_or(0, References::len),
                    "references parsed"
                );
                Ok::<_, ExtractError>(references)
            })
            .map(Option::as_ref)
    }

    /// Citations on `page` that resolve against the reference list.
    ///
    /// Keywords with no matching reference are dropped, and a document without
    /// a reference section yields nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::PageOutOfRange`] for a bad page, or propagates a
    /// page load failure.
    pub fn iterate_citations(
        &self,
        page: usize,
    ) -> Result<impl Iterator<Item = FragmentCitations>, ExtractError> {
        self.check_page(page)?;
        let Some(references) = self.load_references()? else {
            return Ok(Vec::new().into_iter());
        };
        let fragments = self.load_fragments(page)?;

        let resolved: Vec<_> = match_citations(&fragments, &self.options)
            .into_iter()
            .filter_map(|mut found| {
                found.spans.retain(|span| references.contains_key(&span.key));
                (!found.spans.is_empty()).then_some(found)
            })
            .collect();
        debug!(page, fragments = resolved.len(), "citations matched");
        Ok(resolved.into_iter())
    }

    /// Every occurrence of `text` on `page`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::PageOutOfRange`] for a bad page, or propagates a
    /// page load failure.
    pub fn iterate_occurrences(
        &self,
        page: usize,
        text: &str,
    ) -> Result<Occurrences<Vec<TextFragment>>, ExtractError> {
        let fragments = self.load_fragments(page)?;
        Ok(Occurrences::new(
            fragments,
            text,
            self.options.horizontal_tolerance,
        ))
    }

    /// Bounding boxes of the figures drawn on `page`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::PageOutOfRange`] for a bad page,
    /// [`ExtractError::Interpreter`] for a malformed operator stream, or
    /// propagates a page load failure.
    pub fn iterate_figures(&self, page: usize) -> Result<Figures, ExtractError> {
        self.check_page(page)?;
        let operators = self.source.operator_stream(page).map_err(source_error)?;
        let figures = iterate_figures(&operators)?;
        debug!(page, operators = operators.len(), figures = figures.len(), "figures located");
        Ok(figures)
    }

    /// Size of `page`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::PageOutOfRange`] for a bad page, or propagates
    /// the source's failure.
    pub fn page_dimensions(&self, page: usize) -> Result<PageDimensions, ExtractError> {
        self.check_page(page)?;
        self.source.page_dimensions(page).map_err(source_error)
    }

    /// Human-readable descriptor for `font_id`.
    ///
    /// The source is queried once per distinct font id for the lifetime of
    /// the document; `page` only says where to look the first time.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::PageOutOfRange`] for a bad page, or propagates
    /// the source's failure (which is not cached).
    pub fn resolve_font(&self, page: usize, font_id: &str) -> Result<String, ExtractError> {
        self.check_page(page)?;
        let cell = {
            let mut fonts = self.fonts.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(fonts.entry(font_id.to_string()).or_default())
        };
        cell.get_or_try_init(|| {
            debug!(page, font_id, "resolving font descriptor");
            self.source.font_descriptor(page, font_id).map_err(source_error)
        })
        .cloned()
    }
}

impl<S: DocumentSource + std::fmt::Debug> std::fmt::Debug for AcademicDocument<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcademicDocument")
            .field("source", &self.source)
            .field("options", &self.options)
            .field("title", &self.title.get())
            .finish_non_exhaustive()
    }
}
