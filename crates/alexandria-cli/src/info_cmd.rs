use std::path::Path;

use alexandria::{DocumentSource, ExtractOptions};

use crate::cli::OutputFormat;
use crate::shared::{Document, extract_failed, open_document, print_json, resolve_pages};

/// Font ids in first-use order, resolved to their descriptor names.
fn page_fonts(doc: &Document, page: usize) -> Result<Vec<(String, String)>, i32> {
    let fragments = doc.source().text_fragments(page).map_err(|e| {
        eprintln!("Error reading page {page}: {e}");
        1
    })?;

    let mut fonts: Vec<(String, String)> = Vec::new();
    for fragment in &fragments {
        if fonts.iter().any(|(id, _)| *id == fragment.font_id) {
            continue;
        }
        let name = doc
            .resolve_font(page, &fragment.font_id)
            .map_err(extract_failed("resolving font"))?;
        fonts.push((fragment.font_id.clone(), name));
    }
    Ok(fonts)
}

pub fn run(
    file: &Path,
    pages: Option<&str>,
    format: OutputFormat,
    options: ExtractOptions,
) -> Result<(), i32> {
    let doc = open_document(file, options)?;
    let page_count = doc.page_count();
    let pages = resolve_pages(pages, page_count)?;

    match format {
        OutputFormat::Text => {
            println!("File: {}", file.display());
            println!("Pages: {page_count}");
            println!();
            for page in pages {
                let dims = doc
                    .page_dimensions(page)
                    .map_err(extract_failed("reading page size"))?;
                println!("Page {page}: {:.2} x {:.2}", dims.width, dims.height);
                for (id, name) in page_fonts(&doc, page)? {
                    println!("  {id}\t{name}");
                }
            }
            Ok(())
        }
        OutputFormat::Json => {
            let mut entries = Vec::new();
            for page in pages {
                let dims = doc
                    .page_dimensions(page)
                    .map_err(extract_failed("reading page size"))?;
                let fonts: Vec<_> = page_fonts(&doc, page)?
                    .into_iter()
                    .map(|(id, name)| serde_json::json!({ "id": id, "name": name }))
                    .collect();
                entries.push(serde_json::json!({
                    "page": page,
                    "width": dims.width,
                    "height": dims.height,
                    "fonts": fonts,
                }));
            }
            print_json(&serde_json::json!({
                "page_count": page_count,
                "pages": entries,
            }))
        }
    }
}
