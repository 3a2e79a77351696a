//! Line-offset reconciliation for section mode.
//!
//! Each section block pushes every later line of the document down, and a
//! section TOC with line numbers must point at positions in the final
//! document. The offsets are worked out from the clean document up front so
//! one rendering pass produces correct numbers.

use crate::generator::Generator;
use crate::marker::SectionToc;
use crate::parser::{parse_markdown, utils};
use crate::section::{Section, split_sections};

/// Lines a section block occupies: blank, marker, blank, the TOC, blank,
/// marker, blank. Empty TOC text produces no block.
pub fn calc_toc_block_lines(toc: &str) -> usize {
    if toc.is_empty() {
        0
    } else {
        6 + toc.split('\n').count()
    }
}

/// Section TOCs rendered against the document's current line positions.
pub fn generate_section_tocs(generator: &Generator, content: &str) -> Vec<SectionToc> {
    split_sections(&parse_markdown(content))
        .iter()
        .filter_map(|section| {
            let toc = generator.generate_section(section);
            (!toc.is_empty()).then(|| SectionToc {
                h1_line: section.title.line - 1,
                toc,
            })
        })
        .collect()
}

/// Section TOCs whose line references are valid once every block has been
/// inserted into `clean_content`.
///
/// `clean_content` must carry no section blocks. Every TOC is measured with
/// line numbers off first; the running offset then accumulates the net
/// lines each earlier block adds, and each section's sub-headings are shifted
/// by that offset plus their own block before the final render. Blank lines
/// directly under the level-1 heading are replaced by the block, so the
/// offset can shrink as well as grow.
///
/// The returned `h1_line`s address `clean_content`, ready for
/// [`MarkerHandler::insert_section_tocs`](crate::MarkerHandler::insert_section_tocs).
pub fn generate_section_tocs_with_offset(
    generator: &Generator,
    clean_content: &str,
) -> Vec<SectionToc> {
    let lines = utils::split_lines(clean_content);
    let sections = split_sections(&parse_markdown(clean_content));
    let measure = generator.without_line_numbers();

    let tocs: Vec<SectionToc> = sections
        .iter()
        .filter_map(|section| {
            let draft = measure.generate_section(section);
            (!draft.is_empty()).then_some((section, draft))
        })
        .scan(0isize, |offset, (section, draft)| {
            let h1_line = section.title.line - 1;
            let absorbed = utils::blank_run(&lines, h1_line + 1) as isize;
            *offset += calc_toc_block_lines(&draft) as isize - absorbed;

            let shifted = Section {
                title: section.title.clone(),
                sub_headers: section
                    .sub_headers
                    .iter()
                    .map(|h| h.shifted(*offset))
                    .collect(),
            };

            Some(SectionToc {
                h1_line,
                toc: generator.generate_section(&shifted),
            })
        })
        .collect();

    tracing::debug!(
        sections = sections.len(),
        blocks = tocs.len(),
        "reconciled section offsets"
    );
    tocs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_MARKER, Options};
    use crate::marker::MarkerHandler;

    fn generator(line_number: bool) -> Generator {
        Generator::new(&Options {
            line_number,
            max_level: 6,
            ..Options::default()
        })
    }

    #[test]
    fn test_calc_toc_block_lines() {
        assert_eq!(calc_toc_block_lines(""), 0);
        assert_eq!(calc_toc_block_lines("- [A](#a)"), 7);
        assert_eq!(calc_toc_block_lines("- [A](#a)\n- [B](#b)\n- [C](#c)"), 9);
    }

    #[test]
    fn test_generate_section_tocs_skips_empty_sections() {
        let content = "# Chapter 1\n## Section 1.1\n# Chapter 2\ntext";
        let tocs = generate_section_tocs(&generator(false), content);
        assert_eq!(
            tocs,
            vec![SectionToc {
                h1_line: 0,
                toc: "- [Section 1.1](#section-11)".to_string(),
            }]
        );
    }

    #[test]
    fn test_offsets_with_blank_after_heading() {
        let clean = "# Chapter 1\n\n## Section 1.1\n\n# Chapter 2\n\n## Section 2.1\ntext";
        let tocs = generate_section_tocs_with_offset(&generator(true), clean);

        assert_eq!(tocs.len(), 2);
        assert_eq!(tocs[0].h1_line, 0);
        assert_eq!(tocs[0].toc, "- [Section 1.1](#section-11) `L9-L10`");
        assert_eq!(tocs[1].h1_line, 4);
        assert_eq!(tocs[1].toc, "- [Section 2.1](#section-21) `L19-L20`");
    }

    #[test]
    fn test_offsets_without_blank_after_heading() {
        let tocs = generate_section_tocs_with_offset(&generator(true), "# A\n## B");
        assert_eq!(tocs[0].toc, "- [B](#b) `L9`");
    }

    #[test]
    fn test_offsets_with_long_blank_run() {
        let g = generator(true);
        let tocs = generate_section_tocs_with_offset(&g, "# A\n\n\n## B\ntext\n");
        assert_eq!(tocs[0].toc, "- [B](#b) `L9-L10`");

        // more blank lines than the block adds moves headings up
        let tocs = generate_section_tocs_with_offset(&g, "# A\n\n\n\n\n\n\n\n\n\n## B");
        assert_eq!(tocs[0].toc, "- [B](#b) `L9`");
    }

    #[test]
    fn test_offsets_match_final_document() {
        let clean = "# One\n\nIntro\n\n## Alpha\n\n### Deep\n\n## Beta\n# Two\n## Gamma\n\nbody\n# Three\n";
        let g = generator(true);
        let handler = MarkerHandler::new(DEFAULT_MARKER);

        let tocs = generate_section_tocs_with_offset(&g, clean);
        let document = handler.insert_section_tocs(clean, &tocs);

        let expected: Vec<String> = split_sections(&parse_markdown(&document))
            .iter()
            .map(|section| g.generate_section(section))
            .filter(|toc| !toc.is_empty())
            .collect();
        let rendered: Vec<String> = tocs.into_iter().map(|st| st.toc).collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_offsets_without_line_numbers_are_plain() {
        let clean = "# A\n\n## B\n# C\n## D";
        let plain = generate_section_tocs_with_offset(&generator(false), clean);
        let direct = generate_section_tocs(&generator(false), clean);
        assert_eq!(plain, direct);
    }
}
