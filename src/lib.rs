//! # mdtoc
//!
//! A markdown table-of-contents library that keeps a TOC block inside a
//! document in sync with the document's headings.
//!
//! This library scans documents for headings, builds GitHub-compatible anchor
//! links, renders nested TOC lists, and writes them between marker lines. It
//! operates on in-memory text only; reading and writing files is left to the
//! caller.
//!
//! ## Features
//!
//! - Heading scan that skips YAML frontmatter and fenced code blocks
//! - Unique anchors for repeated heading text (`setup`, `setup-1`, ...)
//! - Bulleted or numbered TOCs, optionally with source line ranges
//! - Section mode: one TOC under every level-1 heading
//! - Repair of unpaired or surplus marker lines
//!
//! ## Example
//!
//! ```rust
//! use mdtoc::{Options, Toc};
//!
//! let markdown = r#"# Guide
//!
//! <!--TOC-->
//! <!--TOC-->
//!
//! ### Install
//! ### Usage
//! "#;
//!
//! let toc = Toc::new(Options::default()).unwrap();
//! assert!(toc.check_diff(markdown));
//!
//! let updated = toc.update_content(markdown);
//! assert!(updated.contains("  - [Install](#install)"));
//! assert!(!toc.check_diff(&updated));
//! ```

/// Configuration module for TOC options.
///
/// Provides option defaults, validation, and the user config file.
pub mod config;

/// Error types for option validation.
pub mod error;

/// TOC rendering from heading sequences.
pub mod generator;

/// Marker discovery, TOC insertion, and block cleanup.
pub mod marker;

/// Line-offset reconciliation for section TOCs.
pub mod offset;

/// Parser module for markdown documents.
///
/// Provides heading extraction with anchors and line ranges.
pub mod parser;

/// Grouping of headings into level-1 sections.
pub mod section;

/// High-level facade combining parsing, rendering, and marker handling.
pub mod toc;

// Re-export commonly used types for convenience
pub use config::{Config, DEFAULT_MARKER, Options};
pub use error::{ConfigError, ConfigResult};
pub use generator::Generator;
pub use marker::{MarkerHandler, MarkerState, MarkerValidation, SectionToc, TocBlockInfo, TocMarker};
pub use offset::calc_toc_block_lines;
pub use parser::{Heading, Parser, parse_markdown};
pub use section::{Section, split_sections};
pub use toc::Toc;
