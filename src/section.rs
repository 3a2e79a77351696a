//! Per-chapter grouping of headings for section mode.
//!
//! Every level-1 heading opens a section that owns the deeper headings up to
//! the next level-1 heading. Headings before the first level-1 heading belong
//! to no section.

use crate::parser::Heading;

/// A level-1 heading and the headings nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The level-1 heading opening the section.
    pub title: Heading,
    /// Deeper headings in document order.
    pub sub_headers: Vec<Heading>,
}

/// Group a flat heading sequence into sections.
pub fn split_sections(headings: &[Heading]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for heading in headings {
        if heading.level == 1 {
            sections.push(Section {
                title: heading.clone(),
                sub_headers: Vec::new(),
            });
        } else if let Some(current) = sections.last_mut() {
            current.sub_headers.push(heading.clone());
        }
    }

    sections
}
