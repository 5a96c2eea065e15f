use std::path::Path;

use alexandria::ExtractOptions;

use crate::cli::OutputFormat;
use crate::shared::{extract_failed, open_document, print_json};

pub fn run(file: &Path, format: OutputFormat, options: ExtractOptions) -> Result<(), i32> {
    let doc = open_document(file, options)?;
    let title = doc.load_title().map_err(extract_failed("detecting title"))?;

    match format {
        OutputFormat::Text => {
            println!("{title}");
            Ok(())
        }
        OutputFormat::Json => print_json(&serde_json::json!({ "title": title })),
    }
}
