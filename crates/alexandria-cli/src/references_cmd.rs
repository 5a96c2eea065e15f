use std::path::Path;

use alexandria::ExtractOptions;

use crate::cli::OutputFormat;
use crate::shared::{extract_failed, open_document, print_json};

pub fn run(file: &Path, urls: bool, format: OutputFormat, options: ExtractOptions) -> Result<(), i32> {
    let doc = open_document(file, options)?;
    let references = doc
        .load_references()
        .map_err(extract_failed("parsing references"))?;

    let Some(references) = references else {
        return match format {
            OutputFormat::Text => {
                eprintln!("No reference section found");
                Ok(())
            }
            OutputFormat::Json => print_json(&serde_json::json!([])),
        };
    };

    match format {
        OutputFormat::Text => {
            for (key, body) in references.iter() {
                println!("[{key}]\t{body}");
                if urls {
                    for url in references.urls(key) {
                        println!("\t{url}");
                    }
                }
            }
            Ok(())
        }
        OutputFormat::Json => {
            let entries: Vec<_> = references
                .iter()
                .map(|(key, body)| {
                    let mut entry = serde_json::json!({ "key": key, "body": body });
                    if urls {
                        entry["urls"] = serde_json::json!(references.urls(key));
                    }
                    entry
                })
                .collect();
            print_json(&serde_json::Value::Array(entries))
        }
    }
}
