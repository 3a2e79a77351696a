//! Markdown heading extraction.
//!
//! This module scans documents line by line for ATX headings, skipping YAML
//! frontmatter and fenced code blocks, and computes each heading's anchor and
//! the line range its content covers.
//!
//! Only heading lines, fences, and frontmatter delimiters are recognised;
//! everything else is opaque text.

pub mod anchor;
pub mod frontmatter;
pub mod utils;

use crate::config::Options;
use anchor::AnchorRegistry;
use serde::{Deserialize, Serialize};

/// A heading found in a markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-6).
    pub level: usize,
    /// Heading text without the `#` markers.
    pub text: String,
    /// Fragment identifier, unique within the document.
    pub anchor_link: String,
    /// 1-based source line of the heading.
    pub line: usize,
    /// Last line of the heading's content: one before the next heading of the
    /// same or a higher level, or the document's last line.
    pub end_line: usize,
}

impl Heading {
    /// Move both line references by `offset` lines; negative moves up.
    pub fn shifted(&self, offset: isize) -> Self {
        Self {
            line: self.line.saturating_add_signed(offset),
            end_line: self.end_line.saturating_add_signed(offset),
            ..self.clone()
        }
    }
}

/// A heading line located by the raw scan, before anchors and ranges exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawHeading {
    /// 0-based line index.
    pub index: usize,
    pub level: usize,
    pub text: String,
}

/// Scan lines for ATX headings outside frontmatter and fenced code.
pub(crate) fn scan_headings(lines: &[&str]) -> Vec<RawHeading> {
    let start = frontmatter::scan_start(lines);
    let mut in_fence = false;
    let mut headings = Vec::new();

    for (index, line) in lines.iter().enumerate().skip(start) {
        let trimmed = line.trim();

        if utils::is_fence(trimmed) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        if let Some(level) = utils::get_heading_level(trimmed) {
            headings.push(RawHeading {
                index,
                level,
                text: utils::heading_text(trimmed, level),
            });
        }
    }

    headings
}

/// Heading parser applying a level range to its output.
#[derive(Debug, Clone)]
pub struct Parser {
    min_level: usize,
    max_level: usize,
}

impl Parser {
    pub fn new(options: &Options) -> Self {
        Self {
            min_level: options.min_level,
            max_level: options.max_level,
        }
    }

    /// Parse headings within the configured level range.
    ///
    /// Ranges and anchors are computed over every heading first, so an
    /// excluded heading still ends the range of the heading containing it and
    /// still takes part in anchor de-duplication.
    pub fn parse(&self, content: &str) -> Vec<Heading> {
        self.parse_all_headers(content)
            .into_iter()
            .filter(|h| self.includes(h.level))
            .collect()
    }

    /// Parse every heading regardless of the level range.
    pub fn parse_all_headers(&self, content: &str) -> Vec<Heading> {
        parse_markdown(content)
    }

    /// Whether a heading level falls inside this parser's range.
    pub fn includes(&self, level: usize) -> bool {
        (self.min_level..=self.max_level).contains(&level)
    }
}

/// Parse markdown content and extract every heading with anchors and ranges.
///
/// # Example
///
/// ```
/// use mdtoc::parse_markdown;
///
/// let headings = parse_markdown("# Title\n## Section\ntext\n");
/// assert_eq!(headings.len(), 2);
/// assert_eq!(headings[1].anchor_link, "section");
/// assert_eq!((headings[0].line, headings[0].end_line), (1, 3));
/// ```
pub fn parse_markdown(content: &str) -> Vec<Heading> {
    let lines = utils::split_lines(content);
    let last_line = utils::count_lines(content);
    let mut anchors = AnchorRegistry::new();

    let mut headings: Vec<Heading> = scan_headings(&lines)
        .into_iter()
        .map(|raw| Heading {
            level: raw.level,
            anchor_link: anchors.anchor_for(&utils::strip_markdown_inline(&raw.text)),
            text: raw.text,
            line: raw.index + 1,
            end_line: last_line,
        })
        .collect();

    // Close every open heading whose level is not deeper than the new one.
    let mut open: Vec<usize> = Vec::new();
    for i in 0..headings.len() {
        let (level, line) = (headings[i].level, headings[i].line);
        while let Some(&top) = open.last() {
            if headings[top].level < level {
                break;
            }
            headings[top].end_line = line - 1;
            open.pop();
        }
        open.push(i);
    }

    tracing::debug!(count = headings.len(), "parsed headings");
    headings
}
