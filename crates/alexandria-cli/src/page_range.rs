/// Parse a page range string like "1,3-5" into a sorted list of page numbers.
///
/// Pages are 1-based on both sides. Returns an error for page 0, pages past
/// the end, reversed ranges and malformed input.
pub fn parse_page_range(input: &str, page_count: usize) -> Result<Vec<usize>, String> {
    let parse = |s: &str| -> Result<usize, String> {
        let page: usize = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid page number: '{}'", s.trim()))?;
        if page == 0 {
            return Err("page 0 is invalid (pages start at 1)".to_string());
        }
        if page > page_count {
            return Err(format!(
                "page {page} exceeds document page count ({page_count})"
            ));
        }
        Ok(page)
    };

    let mut pages = Vec::new();
    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once('-') {
            Some((start, end)) => {
                let (start, end) = (parse(start)?, parse(end)?);
                if start > end {
                    return Err(format!("reversed page range: '{part}'"));
                }
                pages.extend(start..=end);
            }
            None => pages.push(parse(part)?),
        }
    }

    pages.sort_unstable();
    pages.dedup();
    Ok(pages)
}
