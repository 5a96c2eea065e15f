use std::path::Path;

use alexandria::ExtractOptions;

use crate::cli::OutputFormat;
use crate::shared::{extract_failed, open_document, print_json};

pub fn run(file: &Path, name: &str, format: OutputFormat, options: ExtractOptions) -> Result<(), i32> {
    let doc = open_document(file, options)?;
    let section = doc
        .load_section(name)
        .map_err(extract_failed("locating section"))?;

    match (format, section) {
        (OutputFormat::Text, Some(text)) => {
            println!("{text}");
            Ok(())
        }
        (OutputFormat::Text, None) => {
            eprintln!("No section headed '{name}' found");
            Err(2)
        }
        (OutputFormat::Json, text) => print_json(&serde_json::json!({
            "name": name,
            "text": text,
        })),
    }
}
