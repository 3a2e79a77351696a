use clap::{Parser, ValueEnum};
use mdtoc::Options;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdtoc")]
#[command(version)]
#[command(about = "Generate and maintain a table of contents in markdown files")]
#[command(
    long_about = "mdtoc - Keeps a markdown table of contents in sync with the document's headings.\n\n\
    Without flags the TOC is printed. With --in-place it is written between the\n\
    <!--TOC--> markers, or after the first heading when the file has none yet.\n\
    Defaults can be set in the [toc] table of the config file.\n\n\
    Examples:\n  \
    mdtoc README.md               # Print the TOC\n  \
    mdtoc -i README.md            # Update the TOC in the file\n  \
    mdtoc -s -n -i book.md        # One TOC per chapter, with line numbers\n  \
    mdtoc -d README.md            # Exit 1 when the TOC is stale"
)]
pub struct Cli {
    /// Markdown file to process
    pub file: PathBuf,

    /// Shallowest heading level to include (1-6)
    #[arg(short = 'm', long = "min-level", value_name = "LEVEL")]
    pub min_level: Option<usize>,

    /// Deepest heading level to include (1-6)
    #[arg(short = 'M', long = "max-level", value_name = "LEVEL")]
    pub max_level: Option<usize>,

    /// Number entries (1. 2. 3.) instead of bullets
    #[arg(short = 'o', long = "ordered")]
    pub ordered: bool,

    /// Append each heading's line range to its entry
    ///
    /// Entries end with `L<start>-L<end>`, pointing at the lines the section
    /// covers once the TOC has been written.
    #[arg(short = 'n', long = "line-number")]
    pub line_number: bool,

    /// Section mode: one TOC under every level-1 heading
    ///
    /// Each TOC lists only the headings of its own chapter.
    #[arg(short = 's', long = "section")]
    pub section: bool,

    /// Marker line delimiting the TOC block
    #[arg(long = "marker", value_name = "TEXT")]
    pub marker: Option<String>,

    /// Write the updated TOC back into the file
    #[arg(short = 'i', long = "in-place", conflicts_with_all = ["diff", "validate"])]
    pub in_place: bool,

    /// Check whether the TOC is up to date; exits with 1 when it is not
    #[arg(short = 'd', long = "diff", conflicts_with = "validate")]
    pub diff: bool,

    /// Check that TOC markers pair up; exits with 1 when they do not
    #[arg(long = "validate")]
    pub validate: bool,

    /// Output format when printing
    ///
    ///   plain - The rendered TOC (default)
    ///   json  - The headings in range as a JSON array
    #[arg(short = 'f', long = "format", default_value = "plain")]
    pub format: OutputFormat,

    /// Log scan and update details to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Layer command-line flags over the config file's options.
    pub fn apply_to(&self, options: &mut Options) {
        if let Some(level) = self.min_level {
            options.min_level = level;
        }
        if let Some(level) = self.max_level {
            options.max_level = level;
        }
        if let Some(ref marker) = self.marker {
            options.marker = marker.clone();
        }
        options.ordered |= self.ordered;
        options.line_number |= self.line_number;
        options.section_toc |= self.section;
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Rendered TOC text
    Plain,
    /// JSON output
    Json,
}
