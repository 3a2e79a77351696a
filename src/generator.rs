//! Rendering headings as a nested markdown list.
//!
//! Nesting is relative to the shallowest heading in the slice being rendered,
//! so a TOC built from `##` headings starts flush left.

use crate::config::Options;
use crate::parser::Heading;
use crate::section::Section;

const BULLET_INDENT: &str = "  ";
const ORDERED_INDENT: &str = "   ";

/// Renders heading sequences into TOC text.
#[derive(Debug, Clone)]
pub struct Generator {
    ordered: bool,
    line_number: bool,
    min_level: usize,
    max_level: usize,
}

impl Generator {
    pub fn new(options: &Options) -> Self {
        Self {
            ordered: options.ordered,
            line_number: options.line_number,
            min_level: options.min_level,
            max_level: options.max_level,
        }
    }

    /// The same generator with line-number suffixes turned off.
    ///
    /// Entries are one line each either way, so this renders a TOC with the
    /// same line count as `self` without needing final line positions.
    pub fn without_line_numbers(&self) -> Self {
        Self {
            line_number: false,
            ..self.clone()
        }
    }

    /// Render headings as one list item per heading, joined by newlines.
    pub fn generate(&self, headings: &[Heading]) -> String {
        let Some(base) = headings.iter().map(|h| h.level).min() else {
            return String::new();
        };

        let indent_unit = if self.ordered {
            ORDERED_INDENT
        } else {
            BULLET_INDENT
        };
        let mut counters: Vec<usize> = Vec::new();
        let mut items = Vec::with_capacity(headings.len());

        for heading in headings {
            let depth = heading.level - base;
            let bullet = if self.ordered {
                counters.truncate(depth + 1);
                counters.resize(depth + 1, 0);
                counters[depth] += 1;
                format!("{}.", counters[depth])
            } else {
                "-".to_string()
            };

            let mut item = format!(
                "{}{} [{}](#{})",
                indent_unit.repeat(depth),
                bullet,
                heading.text,
                heading.anchor_link
            );
            if self.line_number {
                item.push_str(&line_suffix(heading));
            }
            items.push(item);
        }

        items.join("\n")
    }

    /// Render a section's sub-headings within the level range.
    ///
    /// The section title itself is never listed. Returns empty text when no
    /// sub-heading qualifies; callers omit the section's block in that case.
    pub fn generate_section(&self, section: &Section) -> String {
        let headings: Vec<Heading> = section
            .sub_headers
            .iter()
            .filter(|h| (self.min_level..=self.max_level).contains(&h.level))
            .cloned()
            .collect();
        self.generate(&headings)
    }
}

fn line_suffix(heading: &Heading) -> String {
    if heading.line == heading.end_line {
        format!(" `L{}`", heading.line)
    } else {
        format!(" `L{}-L{}`", heading.line, heading.end_line)
    }
}
