//! # mdtoc
//!
//! Generate and maintain a table of contents inside markdown files.
//!
//! ## Usage
//!
//! Print the TOC:
//! ```sh
//! mdtoc README.md
//! ```
//!
//! Update the TOC in place:
//! ```sh
//! mdtoc -i README.md
//! ```
//!
//! Fail a CI step when the TOC is stale:
//! ```sh
//! mdtoc -d README.md
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, OutputFormat};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use mdtoc::{Config, Toc};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    init_logging(args.verbose);

    // Priority: CLI args > config file > defaults
    let mut options = Config::load().toc;
    args.apply_to(&mut options);

    let toc = Toc::new(options).wrap_err("Invalid TOC options")?;

    let content = fs::read_to_string(&args.file)
        .wrap_err_with(|| format!("Failed to read {}", args.file.display()))?;

    if args.validate {
        validate(&toc, &content);
    } else if args.diff {
        check(&toc, &content, &args.file);
    } else if args.in_place {
        let updated = toc.update_content(&content);
        if updated == content {
            tracing::debug!(file = %args.file.display(), "TOC already up to date");
        } else {
            write_atomic(&args.file, &updated)?;
        }
    } else {
        print_toc(&toc, &content, &args.format)?;
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_toc(toc: &Toc, content: &str, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            let rendered = if toc.options().section_toc {
                toc.generate_section_tocs_preview(content)
            } else {
                toc.generate_from_content(content)
            };
            println!("{}", rendered);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&toc.headings(content))?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn check(toc: &Toc, content: &str, path: &Path) {
    if toc.check_diff(content) {
        println!("{}: TOC is out of date", path.display());
        process::exit(1);
    }
    println!("{}: TOC is up to date", path.display());
}

fn validate(toc: &Toc, content: &str) {
    let validation = toc.marker_handler().validate_markers(content);
    match validation.message {
        Some(ref message) => println!("{} (markers: {})", message, validation.count),
        None => println!("markers: {}", validation.count),
    }
    if !validation.valid {
        process::exit(1);
    }
}

/// Atomic write: write to a temp file beside the target, then rename over it.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        Some(_) => Path::new("."),
        None => return Err(eyre!("Cannot determine parent directory of {}", path.display())),
    };

    let mut temp_file = tempfile::NamedTempFile::new_in(parent_dir)
        .wrap_err("Failed to create temp file")?;
    temp_file
        .write_all(content.as_bytes())
        .wrap_err("Failed to write temp file")?;
    temp_file.flush().wrap_err("Failed to flush temp file")?;

    // Same filesystem, so the rename is atomic
    temp_file
        .persist(path)
        .wrap_err_with(|| format!("Failed to save {}", path.display()))?;

    tracing::debug!(file = %path.display(), "wrote updated TOC");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "# Old\n").unwrap();

        write_atomic(&path, "# New\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# New\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
