//! Removal of paired TOC blocks.

use super::MarkerHandler;
use crate::parser::utils;
use std::collections::BTreeSet;

/// Position of a removed block in the original document, 0-based and
/// inclusive of both marker lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocBlockInfo {
    pub start_line: usize,
    pub end_line: usize,
}

impl MarkerHandler {
    /// Markers paired in document order: 1st with 2nd, 3rd with 4th, and so
    /// on. A trailing unpaired marker is not part of any block.
    fn paired_blocks(&self, lines: &[&str]) -> Vec<TocBlockInfo> {
        self.marker_positions(lines)
            .chunks_exact(2)
            .map(|pair| TocBlockInfo {
                start_line: pair[0],
                end_line: pair[1],
            })
            .collect()
    }

    /// Remove every paired TOC block, returning the cleaned content and the
    /// removed blocks.
    ///
    /// Besides the block itself, one blank line before the opening marker
    /// is removed. After the closing marker a single blank line is removed;
    /// a longer blank run is shortened to one line. Feeding the result back
    /// through [`MarkerHandler::insert_section_tocs`] reproduces the same
    /// block layout.
    pub fn clean_toc_blocks(&self, content: &str) -> (String, Vec<TocBlockInfo>) {
        let lines = utils::split_lines(content);
        let blocks = self.paired_blocks(&lines);
        if blocks.is_empty() {
            return (content.to_string(), blocks);
        }

        let mut deleted: BTreeSet<usize> = BTreeSet::new();
        for block in &blocks {
            deleted.extend(block.start_line..=block.end_line);

            if block.start_line > 0 && utils::is_blank(lines[block.start_line - 1]) {
                deleted.insert(block.start_line - 1);
            }

            let after = block.end_line + 1;
            match utils::blank_run(&lines, after) {
                0 => {}
                1 => {
                    deleted.insert(after);
                }
                n => deleted.extend(after + 1..after + n),
            }
        }

        let cleaned: Vec<&str> = lines
            .iter()
            .enumerate()
            .filter(|(i, _)| !deleted.contains(i))
            .map(|(_, line)| *line)
            .collect();

        (cleaned.join("\n"), blocks)
    }
}
