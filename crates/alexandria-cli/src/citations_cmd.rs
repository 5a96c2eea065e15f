use std::path::Path;

use alexandria::ExtractOptions;

use crate::cli::OutputFormat;
use crate::shared::{extract_failed, open_document, print_json, resolve_pages};

pub fn run(
    file: &Path,
    pages: Option<&str>,
    format: OutputFormat,
    options: ExtractOptions,
) -> Result<(), i32> {
    let doc = open_document(file, options)?;
    let pages = resolve_pages(pages, doc.page_count())?;

    if format == OutputFormat::Text {
        println!("page\tfragment\tstart\tend\tkey");
    }
    let mut all = Vec::new();

    for page in pages {
        let citations = doc
            .iterate_citations(page)
            .map_err(extract_failed("matching citations"))?;
        for found in citations {
            match format {
                OutputFormat::Text => {
                    for span in &found.spans {
                        println!(
                            "{page}\t{}\t{}\t{}\t{}",
                            found.fragment_index, span.start, span.end, span.key
                        );
                    }
                }
                OutputFormat::Json => all.push(serde_json::json!({
                    "page": page,
                    "fragment_index": found.fragment_index,
                    "spans": found.spans,
                })),
            }
        }
    }

    match format {
        OutputFormat::Text => Ok(()),
        OutputFormat::Json => print_json(&serde_json::Value::Array(all)),
    }
}
