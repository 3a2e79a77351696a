//! YAML frontmatter boundary detection.
//!
//! Frontmatter must open on the very first line with `---` and close with the
//! next `---` or `...` line. Nothing inside it is ever treated as a heading or
//! a marker, so `# comment` lines in YAML stay inert.

const OPEN: &str = "---";
const CLOSE_DOTS: &str = "...";

/// Find the 0-based line index of the frontmatter's closing delimiter.
///
/// Returns `None` when the document has no frontmatter, including when the
/// opening `---` is never closed: an unclosed block is scanned as ordinary
/// content rather than swallowing the rest of the document.
///
/// # Examples
///
/// ```
/// # use mdtoc::parser::frontmatter::find_frontmatter_end;
/// let lines = ["---", "title: Test", "---", "# Title"];
/// assert_eq!(find_frontmatter_end(&lines), Some(2));
/// assert_eq!(find_frontmatter_end(&["# Title"]), None);
/// ```
pub fn find_frontmatter_end(lines: &[&str]) -> Option<usize> {
    let first = lines.first()?;
    if first.trim() != OPEN {
        return None;
    }

    lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| {
            let trimmed = line.trim();
            trimmed == OPEN || trimmed == CLOSE_DOTS
        })
        .map(|(i, _)| i)
}

/// First line index that heading and marker scans should look at.
pub fn scan_start(lines: &[&str]) -> usize {
    find_frontmatter_end(lines).map_or(0, |end| end + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::utils::split_lines;

    fn end_of(content: &str) -> Option<usize> {
        find_frontmatter_end(&split_lines(content))
    }

    #[test]
    fn test_no_frontmatter() {
        assert_eq!(end_of("# Title\nContent"), None);
        assert_eq!(end_of(""), None);
    }

    #[test]
    fn test_dash_and_dot_closers() {
        assert_eq!(end_of("---\ntitle: Test\n---\n# Title"), Some(2));
        assert_eq!(end_of("---\ntitle: Test\n...\n# Title"), Some(2));
    }

    #[test]
    fn test_yaml_comment_inside_frontmatter() {
        assert_eq!(
            end_of("---\n# This is a YAML comment\ntitle: Test\n---\n# Real Title"),
            Some(3)
        );
        assert_eq!(
            end_of("---\n# https://vitepress.dev/reference/default-theme-home-page\nlayout: home\n---\n# Real Title"),
            Some(3)
        );
    }

    #[test]
    fn test_unclosed_frontmatter_fails_open() {
        assert_eq!(end_of("---\ntitle: Test\n# Not closed"), None);
        assert_eq!(scan_start(&split_lines("---\ntitle: Test\n# Not closed")), 0);
    }

    #[test]
    fn test_dashes_not_on_first_line() {
        assert_eq!(end_of("Some text\n---\ntitle: Test\n---"), None);
    }

    #[test]
    fn test_trimmed_delimiters() {
        assert_eq!(end_of("---  \ntitle: x\n  ---"), Some(2));
    }

    #[test]
    fn test_scan_start() {
        assert_eq!(scan_start(&split_lines("---\na: 1\n---\n# T")), 3);
        assert_eq!(scan_start(&split_lines("# T")), 0);
    }
}
