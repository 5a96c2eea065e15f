use std::path::Path;

use alexandria::ExtractOptions;

use crate::cli::OutputFormat;
use crate::shared::{extract_failed, open_document, print_json, resolve_pages};

pub fn run(
    file: &Path,
    text: &str,
    pages: Option<&str>,
    format: OutputFormat,
    options: ExtractOptions,
) -> Result<(), i32> {
    let doc = open_document(file, options)?;
    let pages = resolve_pages(pages, doc.page_count())?;

    if format == OutputFormat::Text {
        println!("page\tmatch\tfragment\tstart\tend");
    }
    let mut all = Vec::new();

    for page in pages {
        let occurrences = doc
            .iterate_occurrences(page, text)
            .map_err(extract_failed("searching"))?;
        for (n, parts) in occurrences.enumerate() {
            match format {
                OutputFormat::Text => {
                    for part in &parts {
                        println!(
                            "{page}\t{}\t{}\t{}\t{}",
                            n + 1,
                            part.fragment_index,
                            part.start,
                            part.end
                        );
                    }
                }
                OutputFormat::Json => all.push(serde_json::json!({
                    "page": page,
                    "parts": parts,
                })),
            }
        }
    }

    match format {
        OutputFormat::Text => Ok(()),
        OutputFormat::Json => print_json(&serde_json::Value::Array(all)),
    }
}
