//! Locating and rewriting the `<!--TOC-->` marker lines in raw documents.
//!
//! A single scan classifies the document by how many marker lines it holds
//! outside frontmatter ([`MarkerState`]); every insertion and repair operation
//! dispatches on that state. Heading semantics never enter here beyond
//! finding where a fresh block should go.
//!
//! All line indices in this module are 0-based.

mod clean;
mod insert;

pub use clean::TocBlockInfo;
pub use insert::SectionToc;

use crate::config::resolve_marker;
use crate::parser::{frontmatter, scan_headings, utils};

/// Marker occurrences in a document, classified by count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerState {
    /// No marker line.
    None,
    /// One marker: an insertion point without a closing partner.
    Single(usize),
    /// Exactly two markers forming the canonical pair.
    Paired { start: usize, end: usize },
    /// More than two markers; the first two are canonical.
    Excess {
        start: usize,
        end: usize,
        extra: Vec<usize>,
    },
}

impl MarkerState {
    fn from_positions(positions: &[usize]) -> Self {
        match positions {
            [] => MarkerState::None,
            [line] => MarkerState::Single(*line),
            [start, end] => MarkerState::Paired {
                start: *start,
                end: *end,
            },
            [start, end, extra @ ..] => MarkerState::Excess {
                start: *start,
                end: *end,
                extra: extra.to_vec(),
            },
        }
    }

    /// Total number of marker lines.
    pub fn count(&self) -> usize {
        match self {
            MarkerState::None => 0,
            MarkerState::Single(_) => 1,
            MarkerState::Paired { .. } => 2,
            MarkerState::Excess { extra, .. } => 2 + extra.len(),
        }
    }
}

/// The first two marker lines of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TocMarker {
    pub start_line: Option<usize>,
    pub end_line: Option<usize>,
}

impl TocMarker {
    /// Whether at least one marker exists.
    pub fn found(&self) -> bool {
        self.start_line.is_some()
    }
}

/// Outcome of checking that markers pair up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerValidation {
    pub valid: bool,
    pub count: usize,
    pub message: Option<String>,
}

/// Finds, inserts, replaces, and repairs marker blocks.
#[derive(Debug, Clone)]
pub struct MarkerHandler {
    marker: String,
}

impl MarkerHandler {
    /// Create a handler for `marker`; an empty marker means the default one.
    pub fn new(marker: &str) -> Self {
        Self {
            marker: resolve_marker(marker).to_string(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    fn is_marker(&self, line: &str) -> bool {
        line.trim() == self.marker
    }

    fn marker_positions(&self, lines: &[&str]) -> Vec<usize> {
        let start = frontmatter::scan_start(lines);
        lines
            .iter()
            .enumerate()
            .skip(start)
            .filter(|(_, line)| self.is_marker(line))
            .map(|(i, _)| i)
            .collect()
    }

    /// Every marker line outside frontmatter, in document order.
    pub fn find_all_markers(&self, content: &str) -> Vec<usize> {
        self.marker_positions(&utils::split_lines(content))
    }

    /// Classify the document by its marker lines.
    pub fn scan(&self, content: &str) -> MarkerState {
        let state = MarkerState::from_positions(&self.find_all_markers(content));
        tracing::debug!(count = state.count(), "scanned TOC markers");
        state
    }

    /// The first two marker lines; any further markers are ignored.
    pub fn find_markers(&self, content: &str) -> TocMarker {
        match self.scan(content) {
            MarkerState::None => TocMarker::default(),
            MarkerState::Single(line) => TocMarker {
                start_line: Some(line),
                end_line: None,
            },
            MarkerState::Paired { start, end } | MarkerState::Excess { start, end, .. } => {
                TocMarker {
                    start_line: Some(start),
                    end_line: Some(end),
                }
            }
        }
    }

    /// Whether the document holds at least one marker.
    pub fn has_marker(&self, content: &str) -> bool {
        self.find_markers(content).found()
    }

    /// Report whether markers pair up. Zero or any even count is valid.
    pub fn validate_markers(&self, content: &str) -> MarkerValidation {
        let count = self.find_all_markers(content).len();
        if count % 2 == 0 {
            return MarkerValidation {
                valid: true,
                count,
                message: None,
            };
        }
        MarkerValidation {
            valid: false,
            count,
            message: Some(format!(
                "document has an odd number of TOC markers ({})",
                count
            )),
        }
    }

    /// Delete the last marker when the total count is odd.
    ///
    /// Returns the repaired content and how many markers were removed.
    pub fn cleanup_orphan_markers(&self, content: &str) -> (String, usize) {
        let lines = utils::split_lines(content);
        let positions = self.marker_positions(&lines);

        let orphan = match positions.last() {
            Some(&last) if positions.len() % 2 == 1 => last,
            _ => return (content.to_string(), 0),
        };

        tracing::warn!(line = orphan + 1, "removing orphan TOC marker");
        let kept: Vec<&str> = lines
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != orphan)
            .map(|(_, line)| *line)
            .collect();
        (kept.join("\n"), 1)
    }

    /// Text between the canonical marker pair without its surrounding blank
    /// lines, or empty text when fewer than two markers exist.
    ///
    /// Indentation of the first entry is kept, since a TOC can open with a
    /// nested item.
    pub fn extract_existing_toc(&self, content: &str) -> String {
        let lines = utils::split_lines(content);
        let between = match self.find_markers(content) {
            TocMarker {
                start_line: Some(start),
                end_line: Some(end),
            } => &lines[start + 1..end],
            _ => return String::new(),
        };

        let first = between.iter().position(|line| !utils::is_blank(line));
        let last = between.iter().rposition(|line| !utils::is_blank(line));
        match (first, last) {
            (Some(first), Some(last)) => between[first..=last].join("\n").trim_end().to_string(),
            _ => String::new(),
        }
    }

    /// Line of the first heading outside frontmatter and fenced code.
    pub fn find_first_heading(&self, content: &str) -> Option<usize> {
        scan_headings(&utils::split_lines(content))
            .first()
            .map(|h| h.index)
    }

    /// Lines of every level-1 heading outside frontmatter and fenced code.
    pub fn find_h1_lines(&self, content: &str) -> Vec<usize> {
        scan_headings(&utils::split_lines(content))
            .into_iter()
            .filter(|h| h.level == 1)
            .map(|h| h.index)
            .collect()
    }
}
