//! Heading-font selection and section extraction.
//!
//! Section headings are recognized by font, not by position: the font whose
//! text mentions the usual section keywords most often is taken to be the
//! heading font, and a section runs from its heading to the next heading in
//! that font.

use alexandria_core::{ExtractOptions, TextBuffer, TextFragment, normalize_whitespace};
use indexmap::IndexMap;
use tracing::debug;

/// Pick the font used for section headings.
///
/// For every font, the case-folded text of all its fragments is searched for
/// `keywords` and each occurrence counts once. The highest-scoring font wins;
/// ties go to the font seen first. Returns `None` if no keyword occurs at
/// all. `keywords` are expected in lower case.
pub fn select_heading_font<'a>(fragments: &'a [TextFragment], keywords: &[String]) -> Option<&'a str> {
    let mut by_font: IndexMap<&str, String> = IndexMap::new();
    for fragment in fragments.iter().filter(|f| !f.text.is_empty()) {
        by_font
            .entry(fragment.font_id.as_str())
            .or_default()
            .push_str(&fragment.text.to_lowercase());
    }

    let mut best: Option<(&str, usize)> = None;
    for (font_id, text) in &by_font {
        let score: usize = keywords.iter().map(|kw| text.matches(kw.as_str()).count()).sum();
        if score > 0 && best.is_none_or(|(_, top)| score > top) {
            best = Some((*font_id, score));
        }
    }

    if let Some((font_id, score)) = best {
        debug!(font_id, score, "heading font selected");
    }
    best.map(|(font_id, _)| font_id)
}

fn contains_any(text: &str, needles: &[String]) -> bool {
    let text = text.to_lowercase();
    needles.iter().any(|needle| text.contains(needle.as_str()))
}

/// Concatenate fragments into normalized section text.
fn section_text(fragments: &[TextFragment], options: &ExtractOptions) -> String {
    let mut buffer = TextBuffer::new(options.line_break);
    for fragment in fragments {
        buffer.push(fragment);
    }
    normalize_whitespace(buffer.text())
}

/// Locate the section headed `name`.
///
/// `fragments` is the document's horizontal text in reading order. The
/// section starts at the first heading-font fragment containing `name`
/// (case-insensitively) and ends before the next heading-font fragment
/// containing any heading keyword, or at the end of the document. The
/// heading itself is part of the returned text.
pub fn extract_section(
    fragments: &[TextFragment],
    name: &str,
    options: &ExtractOptions,
) -> Option<String> {
    let heading_font = select_heading_font(fragments, &options.heading_keywords)?;
    let name = [name.to_lowercase()];
    let is_heading = |f: &TextFragment| f.font_id == heading_font;

    let start = fragments
        .iter()
        .position(|f| is_heading(f) && contains_any(&f.text, &name))?;
    let end = fragments[start + 1..]
        .iter()
        .position(|f| is_heading(f) && contains_any(&f.text, &options.heading_keywords))
        .map_or(fragments.len(), |offset| start + 1 + offset);

    Some(section_text(&fragments[start..end], options))
}

/// Locate the reference section.
///
/// Starts at the first heading-font fragment containing one of
/// `options.reference_headings` and always runs to the end of the document.
pub fn extract_reference_section(
    fragments: &[TextFragment],
    options: &ExtractOptions,
) -> Option<String> {
    let heading_font = select_heading_font(fragments, &options.heading_keywords)?;
    let start = fragments.iter().position(|f| {
        f.font_id == heading_font && contains_any(&f.text, &options.reference_headings)
    })?;
    debug!(fragment = start, "reference section located");
    Some(section_text(&fragments[start..], options))
}
