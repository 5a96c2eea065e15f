//! Shared fixtures for integration tests.
//!
//! Builds a small two-page paper as an in-memory source, plus wrappers that
//! count or fail collaborator calls.

#![allow(dead_code)]

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use alexandria::{
    DocumentSource, ExtractError, MemoryDocument, MemoryError, MemoryPage, Opcode, OperatorRecord,
    PageDimensions, TextFragment,
};

pub fn line(text: &str, y: f64, height: f64, font: &str) -> TextFragment {
    TextFragment::new(text, 72.0, y, height, font).with_line_break()
}

pub fn run(text: &str, y: f64, height: f64, font: &str) -> TextFragment {
    TextFragment::new(text, 72.0, y, height, font)
}

/// Two pages: title, abstract, introduction and a figure on page 1;
/// background and the reference list on page 2.
pub fn paper() -> MemoryDocument {
    let page1 = MemoryPage::letter()
        .with_fragments([
            line("Learning to", 720.0, 14.0, "TitleF"),
            line("Rank Papers", 700.0, 14.0, "TitleF"),
            line("Jane Doe", 680.0, 10.0, "Roman"),
            line("Abstract", 650.0, 12.0, "Heading"),
            line("Ranking has been studied", 630.0, 10.0, "Roman"),
            run("as shown in [2, 5] and ", 615.0, 10.0, "Roman"),
            line("[9].", 615.0, 10.0, "Roman"),
            line("1 Introduction", 590.0, 12.0, "Heading"),
            line("Papers are every-", 570.0, 10.0, "Roman"),
            line("where.", 555.0, 10.0, "Roman"),
        ])
        .with_operators([
            OperatorRecord::rectangle(100.0, 100.0, 200.0, 150.0),
            OperatorRecord::op(Opcode::Fill),
            OperatorRecord::op(Opcode::EndPath),
            OperatorRecord::move_to(150.0, 120.0),
            OperatorRecord::line_to(350.0, 300.0),
            OperatorRecord::op(Opcode::Stroke),
            OperatorRecord::op(Opcode::EndPath),
            OperatorRecord::op(Opcode::Save),
            OperatorRecord::transform(50.0, 0.0, 0.0, 40.0, 400.0, 500.0),
            OperatorRecord::op(Opcode::PaintImageXObject),
            OperatorRecord::op(Opcode::Restore),
        ])
        .with_font("TitleF", "Times-Bold")
        .with_font("Roman", "Times-Roman")
        .with_font("Heading", "Helvetica-Bold");

    let page2 = MemoryPage::letter()
        .with_fragments([
            line("2 Background", 720.0, 12.0, "Heading"),
            run("Prior work [2] used trans", 700.0, 10.0, "Roman"),
            line("formers for ranking.", 700.0, 10.0, "Roman"),
            line("References", 650.0, 12.0, "Heading"),
            line(
                "[2] A. Alpha. Ranking. https://example.org/rank 2020.",
                630.0,
                10.0,
                "Roman",
            ),
            line("[5] B. Beta. Papers. 2021.", 615.0, 10.0, "Roman"),
        ])
        .with_operators([
            OperatorRecord::move_to(0.0, 0.0),
            OperatorRecord::new(Opcode::ConstructPath, vec![19.0, 0.0, 0.0, 5.0, 5.0]),
        ])
        .with_font("Roman", "Times-Roman")
        .with_font("Heading", "Helvetica-Bold");

    MemoryDocument::new().with_page(page1).with_page(page2)
}

/// A paper with no reference section.
pub fn paper_without_references() -> MemoryDocument {
    MemoryDocument::new().with_page(MemoryPage::letter().with_fragments([
        line("A Note", 720.0, 14.0, "TitleF"),
        line("Introduction", 690.0, 12.0, "Heading"),
        line("As argued in [1].", 670.0, 10.0, "Roman"),
    ]))
}

/// Counts collaborator calls and slows page fetches down so concurrent
/// callers overlap.
#[derive(Debug)]
pub struct CountingSource {
    pub inner: MemoryDocument,
    pub fragment_calls: AtomicUsize,
    pub font_calls: AtomicUsize,
    pub delay: Duration,
}

impl CountingSource {
    pub fn new(inner: MemoryDocument) -> Self {
        Self {
            inner,
            fragment_calls: AtomicUsize::new(0),
            font_calls: AtomicUsize::new(0),
            delay: Duration::from_millis(20),
        }
    }

    pub fn fragment_calls(&self) -> usize {
        self.fragment_calls.load(Ordering::SeqCst)
    }

    pub fn font_calls(&self) -> usize {
        self.font_calls.load(Ordering::SeqCst)
    }
}

impl DocumentSource for CountingSource {
    type Error = MemoryError;

    fn page_count(&self) -> usize {
        self.inner.page_count()
    }

    fn text_fragments(&self, page: usize) -> Result<Vec<TextFragment>, Self::Error> {
        self.fragment_calls.fetch_add(1, Ordering::SeqCst);
        thread::sleep(self.delay);
        self.inner.text_fragments(page)
    }

    fn operator_stream(&self, page: usize) -> Result<Vec<OperatorRecord>, Self::Error> {
        self.inner.operator_stream(page)
    }

    fn page_dimensions(&self, page: usize) -> Result<PageDimensions, Self::Error> {
        self.inner.page_dimensions(page)
    }

    fn font_descriptor(&self, page: usize, font_id: &str) -> Result<String, Self::Error> {
        self.font_calls.fetch_add(1, Ordering::SeqCst);
        thread::sleep(self.delay);
        self.inner.font_descriptor(page, font_id)
    }
}

/// Upstream failure injected by [`FailingSource`].
#[derive(Debug)]
pub struct Unavailable(pub usize);

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {} unavailable", self.0)
    }
}

impl std::error::Error for Unavailable {}

impl From<Unavailable> for ExtractError {
    fn from(err: Unavailable) -> Self {
        ExtractError::Source(err.to_string())
    }
}

/// Fails every fetch of one page; the first `failures` attempts only, if set.
#[derive(Debug)]
pub struct FailingSource {
    pub inner: MemoryDocument,
    pub failing_page: usize,
    pub remaining_failures: AtomicUsize,
}

impl FailingSource {
    pub fn new(inner: MemoryDocument, failing_page: usize) -> Self {
        Self::with_failures(inner, failing_page, usize::MAX)
    }

    pub fn with_failures(inner: MemoryDocument, failing_page: usize, failures: usize) -> Self {
        Self {
            inner,
            failing_page,
            remaining_failures: AtomicUsize::new(failures),
        }
    }

    fn check(&self, page: usize) -> Result<(), Unavailable> {
        if page == self.failing_page
            && self
                .remaining_failures
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
        {
            return Err(Unavailable(page));
        }
        Ok(())
    }
}

impl DocumentSource for FailingSource {
    type Error = Unavailable;

    fn page_count(&self) -> usize {
        self.inner.page_count()
    }

    fn text_fragments(&self, page: usize) -> Result<Vec<TextFragment>, Self::Error> {
        self.check(page)?;
        Ok(self.inner.text_fragments(page).unwrap_or_default())
    }

    fn operator_stream(&self, page: usize) -> Result<Vec<OperatorRecord>, Self::Error> {
        self.check(page)?;
        Ok(self.inner.operator_stream(page).unwrap_or_default())
    }

    fn page_dimensions(&self, page: usize) -> Result<PageDimensions, Self::Error> {
        self.check(page)?;
        self.inner.page_dimensions(page).map_err(|_| Unavailable(page))
    }

    fn font_descriptor(&self, page: usize, font_id: &str) -> Result<String, Self::Error> {
        self.check(page)?;
        self.inner
            .font_descriptor(page, font_id)
            .map_err(|_| Unavailable(page))
    }
}
