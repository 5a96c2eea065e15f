use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use alexandria::{AcademicDocument, ExtractError, ExtractOptions, MemoryDocument};
use serde_json::Value;

use crate::page_range::parse_page_range;

pub type Document = AcademicDocument<MemoryDocument>;

/// Load a page dump with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is missing
/// or is not a valid dump.
pub fn open_document(file: &Path, options: ExtractOptions) -> Result<Document, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let reader = File::open(file).map(BufReader::new).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })?;
    let source = MemoryDocument::from_reader(reader).map_err(|e| {
        eprintln!("Error: failed to load {}: {e}", file.display());
        1
    })?;
    tracing::debug!(pages = source.pages.len(), file = %file.display(), "document loaded");

    Ok(AcademicDocument::with_options(source, options))
}

/// Resolve an optional page range string into 1-based page numbers.
///
/// If `pages` is `None`, returns every page.
pub fn resolve_pages(pages: Option<&str>, page_count: usize) -> Result<Vec<usize>, i32> {
    match pages {
        Some(range) => parse_page_range(range, page_count).map_err(|e| {
            eprintln!("Error: {e}");
            1
        }),
        None => Ok((1..=page_count).collect()),
    }
}

/// Print an extraction failure and map it to exit code 1.
pub fn extract_failed(context: &str) -> impl Fn(ExtractError) -> i32 + '_ {
    move |e| {
        eprintln!("Error {context}: {e}");
        1
    }
}

/// Print a JSON value on one line.
pub fn print_json(value: &Value) -> Result<(), i32> {
    let json = serde_json::to_string(value).map_err(|e| {
        eprintln!("Error: failed to encode JSON: {e}");
        1
    })?;
    println!("{json}");
    Ok(())
}
