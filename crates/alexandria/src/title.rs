//! Title detection.
//!
//! The title is taken to be the text set in the largest glyphs on the first
//! pages. Each page is evaluated on its own and the page with the taller
//! winning line supplies the title.

use alexandria_core::{ExtractOptions, TextFragment, normalize_whitespace};

/// A physical line: consecutive fragments sharing a baseline.
#[derive(Debug, Clone, PartialEq)]
struct Line {
    text: String,
    /// Tallest candidate fragment on the line.
    height: f64,
    /// Font of that fragment.
    font_id: String,
}

/// The best title line(s) found on one page.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleCandidate {
    /// Whitespace-normalized title text.
    pub text: String,
    /// Glyph height of the title lines.
    pub height: f64,
}

/// Group horizontal fragments into baseline-sharing lines.
///
/// Only lines holding at least one candidate fragment (one with at least
/// `min_title_fragment_chars` characters) are returned.
fn group_lines(fragments: &[TextFragment], options: &ExtractOptions) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut text = String::new();
    let mut best: Option<(f64, &str)> = None;
    let mut baseline: Option<f64> = None;

    let mut flush = |text: &mut String, best: &mut Option<(f64, &str)>| {
        if let Some((height, font_id)) = best.take() {
            lines.push(Line {
                text: std::mem::take(text),
                height,
                font_id: font_id.to_string(),
            });
        }
        text.clear();
    };

    for fragment in fragments
        .iter()
        .filter(|f| f.is_horizontal(options.horizontal_tolerance))
    {
        let same_line = baseline.is_some_and(|y| (y - fragment.y).abs() <= options.height_tolerance);
        if !same_line {
            flush(&mut text, &mut best);
            baseline = Some(fragment.y);
        }

        text.push_str(&fragment.text);
        if fragment.text.chars().count() >= options.min_title_fragment_chars
            && best.is_none_or(|(height, _)| fragment.height > height)
        {
            best = Some((fragment.height, &fragment.font_id));
        }
    }
    flush(&mut text, &mut best);

    lines
}

/// Find the title on a single page.
///
/// Returns `None` when the page has no candidate fragment.
pub fn detect_page_title(
    fragments: &[TextFragment],
    options: &ExtractOptions,
) -> Option<TitleCandidate> {
    let lines = group_lines(fragments, options);
    let winner = lines
        .iter()
        .reduce(|best, line| if line.height > best.height { line } else { best })?;

    let text = lines
        .iter()
        .filter(|line| {
            (line.height - winner.height).abs() <= options.height_tolerance
                && line.font_id == winner.font_id
        })
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    Some(TitleCandidate {
        text: normalize_whitespace(&text),
        height: winner.height,
    })
}

/// Pick the document title from the leading pages' fragments.
///
/// Each entry of `pages` is one page's fragments in content order. The page
/// whose title line is tallest wins; on a tie the earlier page is kept.
/// Returns an empty string when no page has a candidate.
pub fn detect_title<P: AsRef<[TextFragment]>>(pages: &[P], options: &ExtractOptions) -> String {
    pages
        .iter()
        .filter_map(|page| detect_page_title(page.as_ref(), options))
        .reduce(|best, candidate| {
            if candidate.height > best.height {
                candidate
            } else {
                best
            }
        })
        .map(|candidate| candidate.text)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, y: f64, height: f64, font: &str) -> TextFragment {
        TextFragment::new(text, 72.0, y, height, font)
    }

    fn opts() -> ExtractOptions {
        ExtractOptions::default()
    }

    #[test]
    fn picks_tallest_line() {
        let page = vec![
            frag("Attention Is All", 700.0, 17.0, "Bold"),
            frag("You Need", 680.0, 17.0, "Bold"),
            frag("Ashish Vaswani", 640.0, 11.0, "Roman"),
        ];
        let candidate = detect_page_title(&page, &opts()).unwrap();
        assert_eq!(candidate.text, "Attention Is All You Need");
        assert_eq!(candidate.height, 17.0);
    }

    #[test]
    fn equal_height_other_font_excluded() {
        let page = vec![
            frag("Real Title", 700.0, 14.0, "Bold"),
            frag("Running Header", 760.0, 14.0, "Italic"),
        ];
        assert_eq!(detect_page_title(&page, &opts()).unwrap().text, "Real Title");
    }

    #[test]
    fn drop_cap_is_not_a_candidate() {
        let page = vec![
            frag("T", 500.0, 40.0, "Deco"),
            frag("his paper studies", 500.0, 10.0, "Roman"),
            frag("Graph Methods", 700.0, 16.0, "Bold"),
        ];
        assert_eq!(detect_page_title(&page, &opts()).unwrap().text, "Graph Methods");
    }

    #[test]
    fn baseline_fragments_join_into_one_line() {
        let page = vec![
            frag("Deep ", 700.0, 16.0, "Bold"),
            frag("A", 700.0, 16.0, "Bold"),
            frag(" Survey", 700.0, 16.0, "Bold"),
        ];
        assert_eq!(detect_page_title(&page, &opts()).unwrap().text, "Deep A Survey");
    }

    #[test]
    fn rotated_text_is_ignored() {
        let page = vec![
            frag("arXiv:1706.03762v7", 300.0, 20.0, "Times").with_transform([
                0.0, 20.0, -20.0, 0.0, 30.0, 300.0,
            ]),
            frag("Real Title", 700.0, 14.0, "Bold"),
        ];
        assert_eq!(detect_page_title(&page, &opts()).unwrap().text, "Real Title");
    }

    #[test]
    fn empty_page_has_no_candidate() {
        assert_eq!(detect_page_title(&[], &opts()), None);
        let empty: Vec<Vec<TextFragment>> = vec![vec![], vec![]];
        assert_eq!(detect_title(&empty, &opts()), "");
    }

    #[test]
    fn taller_page_wins() {
        let pages = vec![
            vec![
                frag("Main", 700.0, 14.0, "Bold"),
                frag("Title", 680.0, 14.0, "Bold"),
                frag("body text", 600.0, 10.0, "Roman"),
            ],
            vec![frag("Section Heading", 700.0, 10.0, "Bold")],
        ];
        assert_eq!(detect_title(&pages, &opts()), "Main Title");

        let reversed = vec![pages[1].clone(), pages[0].clone()];
        assert_eq!(detect_title(&reversed, &opts()), "Main Title");
    }

    #[test]
    fn page_tie_keeps_earlier_page() {
        let pages = vec![
            vec![frag("First", 700.0, 12.0, "Bold")],
            vec![frag("Second", 700.0, 12.0, "Bold")],
        ];
        assert_eq!(detect_title(&pages, &opts()), "First");
    }
}
