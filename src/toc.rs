//! The `Toc` facade tying parsing, rendering, and marker handling together.
//!
//! All operations take and return in-memory document text; reading and
//! writing files is left to the caller.

use crate::config::Options;
use crate::error::ConfigResult;
use crate::generator::Generator;
use crate::marker::{MarkerHandler, SectionToc};
use crate::offset;
use crate::parser::{Heading, Parser};
use crate::section::split_sections;

/// TOC generator and updater for one set of options.
///
/// # Example
///
/// ```
/// use mdtoc::{Options, Toc};
///
/// let toc = Toc::new(Options::default()).unwrap();
/// let updated = toc.update_content("# Title\n\n## Usage\n");
/// assert!(updated.contains("- [Usage](#usage)"));
/// assert!(!toc.check_diff(&updated));
/// ```
#[derive(Debug, Clone)]
pub struct Toc {
    options: Options,
    parser: Parser,
    generator: Generator,
    marker: MarkerHandler,
}

impl Toc {
    /// Build a facade, rejecting malformed level ranges before any scan.
    pub fn new(options: Options) -> ConfigResult<Self> {
        options.validate()?;
        Ok(Self {
            parser: Parser::new(&options),
            generator: Generator::new(&options),
            marker: MarkerHandler::new(options.marker()),
            options,
        })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn marker_handler(&self) -> &MarkerHandler {
        &self.marker
    }

    /// Headings within the configured level range.
    pub fn headings(&self, content: &str) -> Vec<Heading> {
        self.parser.parse(content)
    }

    /// Render the whole-document TOC against the current line positions.
    pub fn generate_from_content(&self, content: &str) -> String {
        self.generator.generate(&self.parser.parse(content))
    }

    /// Per-section TOCs against the current line positions.
    pub fn generate_section_tocs(&self, content: &str) -> Vec<SectionToc> {
        offset::generate_section_tocs(&self.generator, content)
    }

    /// Per-section TOCs with line references valid after insertion into
    /// `clean_content`.
    pub fn generate_section_tocs_with_offset(&self, clean_content: &str) -> Vec<SectionToc> {
        offset::generate_section_tocs_with_offset(&self.generator, clean_content)
    }

    /// Section TOCs for display, each under a `### <title>` line.
    pub fn generate_section_tocs_preview(&self, content: &str) -> String {
        split_sections(&self.parser.parse_all_headers(content))
            .iter()
            .filter_map(|section| {
                let toc = self.generator.generate_section(section);
                (!toc.is_empty()).then(|| format!("### {}\n\n{}", section.title.text, toc))
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// The document with its TOC brought up to date.
    pub fn update_content(&self, content: &str) -> String {
        if self.options.section_toc {
            self.update_sections(content)
        } else {
            self.update_document(content)
        }
    }

    /// Whether [`Toc::update_content`] would change the TOC.
    ///
    /// Section mode compares the whole regenerated document. Otherwise only
    /// the TOC text between the markers is compared, so whitespace
    /// normalisation around the markers never counts as stale.
    pub fn check_diff(&self, content: &str) -> bool {
        if self.options.section_toc {
            self.update_sections(content) != content
        } else {
            self.render_toc(content) != self.marker.extract_existing_toc(content)
        }
    }

    pub fn has_marker(&self, content: &str) -> bool {
        self.marker.has_marker(content)
    }

    fn update_document(&self, content: &str) -> String {
        let toc = self.render_toc(content);
        if toc.is_empty() && !self.marker.has_marker(content) {
            tracing::debug!("no headings in range and no marker, leaving document as is");
            return content.to_string();
        }
        self.apply_toc(content, &toc)
    }

    /// Write `toc` into the document, then pass the result through the
    /// pair replacement once more so it is already in the shape later runs
    /// leave untouched.
    fn apply_toc(&self, content: &str, toc: &str) -> String {
        let inserted = if self.marker.has_marker(content) {
            self.marker.insert_toc_with_cleanup(content, toc)
        } else {
            self.marker.insert_toc_after_first_heading(content, toc)
        };
        self.marker.insert_toc(&inserted, toc)
    }

    /// The TOC as it should read once applied to `content`.
    ///
    /// Applying a TOC can move headings, so with line numbers on the TOC is
    /// first applied without them to a draft, and the numbered TOC is then
    /// rendered from the draft. Both renders have one line per heading, so
    /// the draft's positions are the final ones.
    fn render_toc(&self, content: &str) -> String {
        if !self.options.line_number {
            return self.generate_from_content(content);
        }

        let headings = self.parser.parse(content);
        let plain = self.generator.without_line_numbers().generate(&headings);
        if plain.is_empty() {
            return plain;
        }
        let draft = self.apply_toc(content, &plain);
        self.generate_from_content(&draft)
    }

    fn update_sections(&self, content: &str) -> String {
        let validation = self.marker.validate_markers(content);
        let repaired = if validation.valid {
            content.to_string()
        } else {
            tracing::warn!(count = validation.count, "repairing unpaired TOC marker");
            self.marker.cleanup_orphan_markers(content).0
        };

        let (clean, _) = self.marker.clean_toc_blocks(&repaired);
        let tocs = self.generate_section_tocs_with_offset(&clean);
        self.marker.update_section_tocs(&clean, &tocs)
    }
}
