use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Marker line delimiting a generated TOC block.
pub const DEFAULT_MARKER: &str = "<!--TOC-->";

/// Shallowest heading level included by default.
pub const DEFAULT_MIN_LEVEL: usize = 1;

/// Deepest heading level included by default.
pub const DEFAULT_MAX_LEVEL: usize = 3;

/// Persistent user defaults, read from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toc: Options,
}

/// TOC generation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Shallowest heading level to include (1-6)
    #[serde(default = "default_min_level")]
    pub min_level: usize,

    /// Deepest heading level to include (1-6)
    #[serde(default = "default_max_level")]
    pub max_level: usize,

    /// Render `1.`, `2.`, ... instead of bullets
    #[serde(default)]
    pub ordered: bool,

    /// Append each heading's source line range to its entry
    #[serde(default)]
    pub line_number: bool,

    /// One TOC per level-1 heading instead of one for the whole document
    #[serde(default)]
    pub section_toc: bool,

    /// Marker line; empty means [`DEFAULT_MARKER`]
    #[serde(default = "default_marker")]
    pub marker: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_level: default_min_level(),
            max_level: default_max_level(),
            ordered: false,
            line_number: false,
            section_toc: false,
            marker: default_marker(),
        }
    }
}

fn default_min_level() -> usize {
    DEFAULT_MIN_LEVEL
}

fn default_max_level() -> usize {
    DEFAULT_MAX_LEVEL
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Options {
    /// Check the level range before any document is scanned.
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [("min-level", self.min_level), ("max-level", self.max_level)] {
            if !(1..=6).contains(&value) {
                return Err(ConfigError::LevelOutOfRange { name, value });
            }
        }
        if self.min_level > self.max_level {
            return Err(ConfigError::InvertedRange {
                min: self.min_level,
                max: self.max_level,
            });
        }
        Ok(())
    }

    /// The marker line to scan for, falling back to the default when empty.
    pub fn marker(&self) -> &str {
        resolve_marker(&self.marker)
    }
}

/// Trim a configured marker, mapping an empty one to [`DEFAULT_MARKER`].
///
/// Marker lines are compared trimmed, so the marker itself is too.
pub fn resolve_marker(marker: &str) -> &str {
    match marker.trim() {
        "" => DEFAULT_MARKER,
        trimmed => trimmed,
    }
}

impl Config {
    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/mdtoc/config.toml
    /// - Linux: ~/.config/mdtoc/config.toml
    /// - Windows: %APPDATA%/mdtoc/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mdtoc").join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| {
                let contents = fs::read_to_string(&path).ok()?;
                match toml::from_str(&contents) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), "ignoring invalid config: {}", e);
                        None
                    }
                }
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.min_level, 1);
        assert_eq!(options.max_level, 3);
        assert_eq!(options.marker(), "<!--TOC-->");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_out_of_range() {
        let options = Options {
            min_level: 0,
            ..Options::default()
        };
        assert_eq!(
            options.validate(),
            Err(ConfigError::LevelOutOfRange {
                name: "min-level",
                value: 0
            })
        );

        let options = Options {
            max_level: 7,
            ..Options::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ConfigError::LevelOutOfRange {
                name: "max-level",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_inverted_range() {
        let options = Options {
            min_level: 4,
            max_level: 2,
            ..Options::default()
        };
        assert_eq!(
            options.validate(),
            Err(ConfigError::InvertedRange { min: 4, max: 2 })
        );
    }

    #[test]
    fn test_empty_marker_uses_default() {
        let options = Options {
            marker: String::new(),
            ..Options::default()
        };
        assert_eq!(options.marker(), DEFAULT_MARKER);
        assert_eq!(resolve_marker("<!-- TABLE OF CONTENTS -->"), "<!-- TABLE OF CONTENTS -->");
    }

    #[test]
    fn test_marker_is_trimmed() {
        let options = Options {
            marker: "  <!-- toc -->\t".to_string(),
            ..Options::default()
        };
        assert_eq!(options.marker(), "<!-- toc -->");
        assert_eq!(resolve_marker("   "), DEFAULT_MARKER);
    }

    #[test]
    fn test_partial_config_file() {
        let config: Config = toml::from_str("[toc]\nmax_level = 2\nordered = true\n").unwrap();
        assert_eq!(config.toc.min_level, 1);
        assert_eq!(config.toc.max_level, 2);
        assert!(config.toc.ordered);
        assert_eq!(config.toc.marker, DEFAULT_MARKER);

        let empty: Config = toml::from_str("").unwrap();
        assert_eq!(empty.toc, Options::default());
    }
}
