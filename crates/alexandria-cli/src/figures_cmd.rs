use std::path::Path;

use alexandria::{ExtractOptions, Rect};

use crate::cli::OutputFormat;
use crate::shared::{extract_failed, open_document, print_json, resolve_pages};

fn rect_to_json(page: usize, r: &Rect) -> serde_json::Value {
    serde_json::json!({
        "page": page,
        "x1": r.x1,
        "y1": r.y1,
        "x2": r.x2,
        "y2": r.y2,
    })
}

pub fn run(
    file: &Path,
    pages: Option<&str>,
    format: OutputFormat,
    options: ExtractOptions,
) -> Result<(), i32> {
    let doc = open_document(file, options)?;
    let pages = resolve_pages(pages, doc.page_count())?;

    if format == OutputFormat::Text {
        println!("page\tx1\ty1\tx2\ty2");
    }
    let mut all = Vec::new();

    for page in pages {
        let figures = doc
            .iterate_figures(page)
            .map_err(extract_failed(&format!("interpreting page {page}")))?;
        for r in figures {
            match format {
                OutputFormat::Text => println!(
                    "{page}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
                    r.x1, r.y1, r.x2, r.y2
                ),
                OutputFormat::Json => all.push(rect_to_json(page, &r)),
            }
        }
    }

    match format {
        OutputFormat::Text => Ok(()),
        OutputFormat::Json => print_json(&serde_json::Value::Array(all)),
    }
}
