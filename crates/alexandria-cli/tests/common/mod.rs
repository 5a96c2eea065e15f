//! Page dumps written to temp files for CLI tests.

#![allow(dead_code)]

use std::io::Write;

use alexandria::{MemoryDocument, MemoryPage, Opcode, OperatorRecord, TextFragment};
use assert_cmd::Command;
use tempfile::NamedTempFile;

pub fn cmd() -> Command {
    Command::cargo_bin("alexandria").unwrap()
}

fn line(text: &str, y: f64, height: f64, font: &str) -> TextFragment {
    TextFragment::new(text, 72.0, y, height, font).with_line_break()
}

/// Two-page paper: title, abstract with citations and a figure on page 1,
/// the reference list on page 2.
pub fn paper() -> MemoryDocument {
    let page1 = MemoryPage::letter()
        .with_fragments([
            line("Learning to", 720.0, 14.0, "TitleF"),
            line("Rank Papers", 700.0, 14.0, "TitleF"),
            line("Jane Doe", 680.0, 10.0, "Roman"),
            line("Abstract", 650.0, 12.0, "Heading"),
            TextFragment::new("as shown in [2, 5] and ", 72.0, 630.0, 10.0, "Roman"),
            line("[9].", 630.0, 10.0, "Roman"),
            line("1 Introduction", 590.0, 12.0, "Heading"),
            line("Papers are every-", 570.0, 10.0, "Roman"),
            line("where.", 555.0, 10.0, "Roman"),
        ])
        .with_operators([
            OperatorRecord::rectangle(100.0, 100.0, 200.0, 150.0),
            OperatorRecord::op(Opcode::Fill),
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

pub fn write_dump(doc: &MemoryDocument) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(doc.to_json().unwrap().as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn paper_dump() -> NamedTempFile {
    write_dump(&paper())
}
