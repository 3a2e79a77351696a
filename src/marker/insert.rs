//! Writing TOC text into documents at marker positions.

use super::{MarkerHandler, MarkerState};
use crate::parser::{frontmatter, utils};
use std::collections::HashMap;

/// TOC text destined for the block after one level-1 heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionToc {
    /// 0-based line of the level-1 heading in the document being written.
    pub h1_line: usize,
    /// Rendered TOC; empty text means the section gets no block.
    pub toc: String,
}

impl MarkerHandler {
    /// Insert or replace the TOC at the existing markers.
    ///
    /// - no marker: content is returned unchanged;
    /// - one marker: the TOC and a closing marker are added after it;
    /// - two or more: everything between the first two markers is replaced,
    ///   and blank lines right after the closing marker are absorbed so a
    ///   second run returns its input unchanged. Markers past the second are
    ///   left alone (see [`MarkerHandler::insert_toc_with_cleanup`]).
    pub fn insert_toc(&self, content: &str, toc: &str) -> String {
        let lines = utils::split_lines(content);
        match self.scan(content) {
            MarkerState::None => content.to_string(),
            MarkerState::Single(line) => self.close_single_marker(&lines, line, toc),
            MarkerState::Paired { start, end } | MarkerState::Excess { start, end, .. } => {
                self.replace_between(&lines, start, end, toc)
            }
        }
    }

    /// Like [`MarkerHandler::insert_toc`], but repairs documents with more
    /// than two markers.
    ///
    /// The first two markers stay as the canonical pair. Every later marker
    /// is deleted, along with the content between consecutive later markers,
    /// so exactly two markers remain.
    pub fn insert_toc_with_cleanup(&self, content: &str, toc: &str) -> String {
        let lines = utils::split_lines(content);
        match self.scan(content) {
            MarkerState::None => content.to_string(),
            MarkerState::Single(line) => self.close_single_marker(&lines, line, toc),
            MarkerState::Paired { start, end } => self.replace_between(&lines, start, end, toc),
            MarkerState::Excess { start, end, extra } => {
                tracing::warn!(
                    count = extra.len() + 2,
                    "collapsing extra TOC markers onto the first pair"
                );
                remove_extra_markers(&lines, start, end, &extra, toc)
            }
        }
    }

    /// Insert a fresh `marker / TOC / marker` block after the first heading.
    ///
    /// Without any heading the block goes at the top of the document, below
    /// the frontmatter when there is one.
    pub fn insert_toc_after_first_heading(&self, content: &str, toc: &str) -> String {
        let lines = utils::split_lines(content);
        let marker = self.marker.as_str();

        let mut result: Vec<&str> = Vec::with_capacity(lines.len() + 6);
        match self.find_first_heading(content) {
            Some(heading) => {
                result.extend_from_slice(&lines[..=heading]);
                result.extend(["", marker, "", toc, "", marker]);
                result.extend_from_slice(&lines[heading + 1..]);
            }
            None => {
                let start = frontmatter::scan_start(&lines);
                result.extend_from_slice(&lines[..start]);
                result.extend([marker, "", toc, "", marker, ""]);
                result.extend_from_slice(&lines[start..]);
            }
        }

        result.join("\n")
    }

    /// Insert one block after each level-1 heading that has TOC text.
    ///
    /// Blank lines directly after such a heading are replaced by the block,
    /// which brings its own blank lines on both sides.
    pub fn insert_section_tocs(&self, content: &str, section_tocs: &[SectionToc]) -> String {
        let by_line: HashMap<usize, &str> = section_tocs
            .iter()
            .filter(|st| !st.toc.is_empty())
            .map(|st| (st.h1_line, st.toc.as_str()))
            .collect();
        if by_line.is_empty() {
            return content.to_string();
        }

        let lines = utils::split_lines(content);
        let marker = self.marker.as_str();
        let mut result: Vec<&str> = Vec::with_capacity(lines.len() + 7 * by_line.len());
        let mut i = 0;

        while i < lines.len() {
            result.push(lines[i]);
            if let Some(&toc) = by_line.get(&i) {
                result.extend(["", marker, "", toc, "", marker, ""]);
                i += utils::blank_run(&lines, i + 1);
            }
            i += 1;
        }

        result.join("\n")
    }

    /// Replace all section blocks: existing paired blocks are removed with
    /// [`MarkerHandler::clean_toc_blocks`], then fresh ones are inserted.
    ///
    /// `section_tocs` must address headings by their lines in the cleaned
    /// document, which is what the offset reconciler produces.
    pub fn update_section_tocs(&self, content: &str, section_tocs: &[SectionToc]) -> String {
        let (cleaned, removed) = self.clean_toc_blocks(content);
        tracing::debug!(removed = removed.len(), "replacing section TOC blocks");
        self.insert_section_tocs(&cleaned, section_tocs)
    }

    fn close_single_marker(&self, lines: &[&str], marker_line: usize, toc: &str) -> String {
        let mut result: Vec<&str> = Vec::with_capacity(lines.len() + 4);
        result.extend_from_slice(&lines[..=marker_line]);
        result.extend(["", toc, "", self.marker.as_str()]);
        result.extend_from_slice(&lines[marker_line + 1..]);
        result.join("\n")
    }

    fn replace_between(&self, lines: &[&str], start: usize, end: usize, toc: &str) -> String {
        let mut result: Vec<&str> = Vec::with_capacity(lines.len());
        result.extend_from_slice(&lines[..=start]);
        result.extend(["", toc, ""]);
        result.push(lines[end]);

        let blanks = utils::blank_run(lines, end + 1);
        result.extend_from_slice(&lines[end + 1 + blanks..]);

        result.join("\n")
    }
}

fn remove_extra_markers(
    lines: &[&str],
    start: usize,
    end: usize,
    extra: &[usize],
    toc: &str,
) -> String {
    let mut result: Vec<&str> = Vec::with_capacity(lines.len());
    result.extend_from_slice(&lines[..=start]);
    result.extend(["", toc, ""]);
    result.push(lines[end]);

    let mut next_extra = 0;
    let mut skip_until: Option<usize> = None;

    for (i, line) in lines.iter().enumerate().skip(end + 1) {
        if extra.get(next_extra) == Some(&i) {
            if let Some(&following) = extra.get(next_extra + 1) {
                skip_until = Some(following);
            }
            next_extra += 1;
            continue;
        }

        match skip_until {
            Some(until) if i <= until => continue,
            _ => skip_until = None,
        }

        result.push(line);
    }

    result.join("\n")
}
