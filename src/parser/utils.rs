//! Utility functions for markdown scanning.
//!
//! Line-level helpers shared by the heading parser and the marker handler.

/// Split a document into lines on `\n`.
///
/// Empty input yields a single empty line, and a trailing newline yields a
/// trailing empty line, so `split_lines(s).join("\n") == s` always holds.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// Count the lines of a document, not counting the empty remainder after a
/// trailing newline.
///
/// # Examples
///
/// ```
/// # use mdtoc::parser::utils::count_lines;
/// assert_eq!(count_lines(""), 0);
/// assert_eq!(count_lines("line1\n"), 1);
/// assert_eq!(count_lines("line1\nline2"), 2);
/// ```
pub fn count_lines(content: &str) -> usize {
    if content.is_empty() {
        return 0;
    }
    let newlines = content.matches('\n').count();
    if content.ends_with('\n') {
        newlines
    } else {
        newlines + 1
    }
}

/// Index one past the last real line of split output: the empty tail left
/// by a trailing newline does not count.
pub fn body_end(lines: &[&str]) -> usize {
    match lines.last() {
        Some(&"") => lines.len() - 1,
        _ => lines.len(),
    }
}

/// Number of blank lines starting at `start`, stopping at [`body_end`].
pub fn blank_run(lines: &[&str], start: usize) -> usize {
    lines
        .get(start..body_end(lines))
        .map_or(0, |rest| rest.iter().take_while(|line| is_blank(line)).count())
}

/// Whether a trimmed line opens or closes a fenced code block.
pub fn is_fence(trimmed: &str) -> bool {
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Whether a line holds nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Strip inline markdown formatting (bold, italic, code, strikethrough) from text.
///
/// Anchors are derived from rendered heading text, so `## **Bold** Section`
/// must slug the same way as `## Bold Section`.
///
/// Handles: `**bold**`, `__bold__`, `*italic*`, `_italic_` (with snake_case protection),
/// `` `code` ``, and `~~strikethrough~~`.
///
/// # Examples
///
/// ```
/// # use mdtoc::parser::utils::strip_markdown_inline;
/// assert_eq!(strip_markdown_inline("**bold** text"), "bold text");
/// assert_eq!(strip_markdown_inline("`code` here"), "code here");
/// assert_eq!(strip_markdown_inline("snake_case_var"), "snake_case_var");
/// ```
pub fn strip_markdown_inline(text: &str) -> String {
    use regex::Regex;
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        vec![
            (Regex::new(r"~~(.+?)~~").unwrap(), "$1"),
            (Regex::new(r"\*\*(.+?)\*\*").unwrap(), "$1"),
            (Regex::new(r"__(.+?)__").unwrap(), "$1"),
            (Regex::new(r"`([^`]+)`").unwrap(), "$1"),
            (Regex::new(r"\*(.+?)\*").unwrap(), "$1"),
            (
                Regex::new(r"(^|[^a-zA-Z0-9])_([^_]+)_([^a-zA-Z0-9]|$)").unwrap(),
                "$1$2$3",
            ),
        ]
    });

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        result = pattern.replace_all(&result, *replacement).to_string();
    }
    result
}

/// Extract the heading level from a line of markdown text.
///
/// Returns `Some(level)` if the trimmed line starts with 1-6 `#`s followed by
/// a space, a tab, or the end of the line, and `None` otherwise.
///
/// # Examples
///
/// ```
/// # use mdtoc::parser::utils::get_heading_level;
/// assert_eq!(get_heading_level("# Title"), Some(1));
/// assert_eq!(get_heading_level("## Section"), Some(2));
/// assert_eq!(get_heading_level("###"), Some(3));
/// assert_eq!(get_heading_level("not a heading"), None);
/// assert_eq!(get_heading_level("#NoSpace"), None);
/// ```
pub fn get_heading_level(line: &str) -> Option<usize> {
    let trimmed = line.trim();
    let level = trimmed.bytes().take_while(|&b| b == b'#').count();

    if level == 0 || level > 6 {
        return None;
    }

    match trimmed.as_bytes().get(level) {
        None | Some(b' ') | Some(b'\t') => Some(level),
        _ => None,
    }
}

/// Extract the text of an ATX heading line whose level is already known.
///
/// Surrounding whitespace and an optional closing `#` sequence are removed:
/// `## Title ##` yields `Title`.
pub fn heading_text(line: &str, level: usize) -> String {
    let rest = line.trim()[level..].trim();

    let without_closing = rest.trim_end_matches('#');
    if without_closing.len() == rest.len() {
        return rest.to_string();
    }
    if without_closing.is_empty() {
        return String::new();
    }
    if without_closing.ends_with([' ', '\t']) {
        return without_closing.trim_end().to_string();
    }
    rest.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("line1"), 1);
        assert_eq!(count_lines("line1\n"), 1);
        assert_eq!(count_lines("line1\nline2"), 2);
        assert_eq!(count_lines("line1\nline2\n"), 2);
        assert_eq!(count_lines("line1\nline2\nline3"), 3);
    }

    #[test]
    fn test_split_lines_round_trips() {
        for content in ["", "a", "a\n", "a\n\nb", "\n\n"] {
            assert_eq!(split_lines(content).join("\n"), content);
        }
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_is_fence() {
        assert!(is_fence("```"));
        assert!(is_fence("```rust"));
        assert!(is_fence("~~~"));
        assert!(!is_fence("``inline``"));
        assert!(!is_fence("text ```"));
    }

    #[test]
    fn test_strip_markdown_inline() {
        assert_eq!(strip_markdown_inline("**bold**"), "bold");
        assert_eq!(strip_markdown_inline("__bold__"), "bold");
        assert_eq!(strip_markdown_inline("*italic*"), "italic");
        assert_eq!(strip_markdown_inline("_italic_"), "italic");
        assert_eq!(strip_markdown_inline("`code`"), "code");
        assert_eq!(strip_markdown_inline("~~strikethrough~~"), "strikethrough");
        assert_eq!(
            strip_markdown_inline("**bold** and *italic*"),
            "bold and italic"
        );
        assert_eq!(strip_markdown_inline("snake_case_var"), "snake_case_var");
        assert_eq!(strip_markdown_inline("plain text"), "plain text");
    }

    #[test]
    fn test_get_heading_level() {
        assert_eq!(get_heading_level("# Title"), Some(1));
        assert_eq!(get_heading_level("## Section"), Some(2));
        assert_eq!(get_heading_level("### Subsection"), Some(3));
        assert_eq!(get_heading_level("#### Level 4"), Some(4));
        assert_eq!(get_heading_level("##### Level 5"), Some(5));
        assert_eq!(get_heading_level("###### Level 6"), Some(6));
        assert_eq!(get_heading_level("##\tTabbed"), Some(2));
        assert_eq!(get_heading_level("#"), Some(1));

        // Invalid cases
        assert_eq!(get_heading_level("not a heading"), None);
        assert_eq!(get_heading_level("#NoSpace"), None);
        assert_eq!(get_heading_level("####### Too many"), None);
        assert_eq!(get_heading_level(""), None);
        assert_eq!(get_heading_level("  ## Indented"), Some(2)); // Trimmed
    }

    #[test]
    fn test_heading_text() {
        assert_eq!(heading_text("# Title", 1), "Title");
        assert_eq!(heading_text("##   Spaced   ", 2), "Spaced");
        assert_eq!(heading_text("## Closed ##", 2), "Closed");
        assert_eq!(heading_text("## C# language", 2), "C# language");
        assert_eq!(heading_text("# Issue #", 1), "Issue");
        assert_eq!(heading_text("#", 1), "");
        assert_eq!(heading_text("# ###", 1), "");
    }

    #[test]
    fn test_body_end() {
        assert_eq!(body_end(&split_lines("")), 0);
        assert_eq!(body_end(&split_lines("a\nb")), 2);
        assert_eq!(body_end(&split_lines("a\nb\n")), 2);
        assert_eq!(body_end(&split_lines("a\n\n")), 2);
    }

    #[test]
    fn test_blank_run() {
        let lines = split_lines("a\n\n  \nb\n\n");
        assert_eq!(blank_run(&lines, 1), 2);
        assert_eq!(blank_run(&lines, 0), 0);
        // the empty tail after the final newline is not a blank line
        assert_eq!(blank_run(&lines, 4), 1);
        assert_eq!(blank_run(&lines, 9), 0);
    }
}
