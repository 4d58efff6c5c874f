//! Section folder browser: program → year level → section → event.

use crate::models::event::Event;
use crate::models::section::Section;

/// What the current folder level lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderLevel<'a> {
    Programs(Vec<&'a str>),
    Years {
        program: &'a str,
        years: Vec<&'a str>,
    },
    Sections {
        program: &'a str,
        year: &'a str,
        sections: Vec<&'a Section>,
    },
    /// Leaf: the caller lists events for the chosen section.
    Events {
        program: &'a str,
        year: &'a str,
        section: &'a str,
    },
}

/// Breadcrumb of the folder browser. At most three entries deep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavPath {
    parts: Vec<String>,
}

impl NavPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.parts.len()
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Descend one level. Ignored once a section has been chosen.
    pub fn push(&mut self, value: &str) -> bool {
        if self.parts.len() >= 3 {
            return false;
        }
        self.parts.push(value.to_string());
        true
    }

    /// Go back one level. Returns the popped entry.
    pub fn back(&mut self) -> Option<String> {
        self.parts.pop()
    }

    pub fn breadcrumb(&self) -> String {
        if self.parts.is_empty() {
            return "Sections".to_string();
        }
        format!("Sections > {}", self.parts.join(" > "))
    }

    /// List the folders at the current level over the cached sections.
    pub fn level<'a>(&'a self, sections: &'a [Section]) -> FolderLevel<'a> {
        match self.parts.as_slice() {
            [] => FolderLevel::Programs(unique_sorted(sections.iter().map(|s| s.program.as_str()))),
            [program] => FolderLevel::Years {
                program: program.as_str(),
                years: unique_sorted(
                    sections
                        .iter()
                        .filter(|s| &s.program == program)
                        .map(|s| s.year_level.as_str()),
                ),
            },
            [program, year] => FolderLevel::Sections {
                program: program.as_str(),
                year: year.as_str(),
                sections: sections
                    .iter()
                    .filter(|s| &s.program == program && &s.year_level == year)
                    .collect(),
            },
            [program, year, section, ..] => FolderLevel::Events {
                program: program.as_str(),
                year: year.as_str(),
                section: section.as_str(),
            },
        }
    }
}

fn unique_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = values.collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Events listed at the leaf, newest first.
pub fn events_newest_first(events: &[Event]) -> Vec<&Event> {
    let mut out: Vec<&Event> = events.iter().collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}
