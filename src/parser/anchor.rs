//! GitHub-compatible anchor generation.
//!
//! Slugs keep Unicode letters and digits so headings in non-Latin scripts
//! still get usable fragments (`## 章节1` links to `#章节1`).

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Generate a URL-fragment slug from heading text.
///
/// Lowercases the text, drops everything that is not a word character, a
/// hyphen, or a space, then turns each space into a hyphen. Runs of spaces are
/// not collapsed, matching GitHub.
///
/// # Examples
///
/// ```
/// use mdtoc::parser::anchor::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Subsection 1.1"), "subsection-11");
/// assert_eq!(slugify("章节1"), "章节1");
/// ```
pub fn slugify(text: &str) -> String {
    static STRIP: OnceLock<Regex> = OnceLock::new();
    let strip = STRIP.get_or_init(|| Regex::new(r"[^\w\- ]").unwrap());

    let lowered = text.to_lowercase();
    strip.replace_all(&lowered, "").replace(' ', "-")
}

/// Tracks slugs already handed out in one document.
///
/// A repeated slug gets `-N` appended, where `N` counts the earlier
/// collisions on that exact slug: `section`, `section-1`, `section-2`.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    seen: HashMap<String, usize>,
}

impl AnchorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug `text` and resolve it against every anchor issued so far.
    pub fn anchor_for(&mut self, text: &str) -> String {
        let slug = slugify(text);
        match self.seen.get_mut(&slug) {
            Some(collisions) => {
                *collisions += 1;
                format!("{}-{}", slug, collisions)
            }
            None => {
                self.seen.insert(slug.clone(), 0);
                slug
            }
        }
    }
}
