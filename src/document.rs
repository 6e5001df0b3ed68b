//! Document model and section index.
//!
//! A [`Document`] owns the ordered line sequence produced by the parser and
//! answers the section-scoped queries the editor needs: which line holds a
//! given setting, where new settings should be spliced into a section, and
//! whether a section has an explicit header. Rendering concatenates the
//! lines back into text; with no edits applied the output is byte-identical
//! to the input.
//!
//! Section membership is resolved totally: every line belongs to the section
//! named by the nearest preceding header, and lines before the first header
//! belong to the implicit [`MAIN_SECTION`]. A section name may have several
//! non-contiguous instances; queries that insert always target the last one.

use crate::parser::{Line, parse_lines};

/// Name of the implicit section that holds lines preceding the first header.
pub const MAIN_SECTION: &str = "main";

/// Where a new setting line should be spliced into a section instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Insert at the very top of the document.
    Start,
    /// Insert immediately after the line at this index.
    After(usize),
}

/// An ordered sequence of classified lines plus the document's newline
/// convention.
///
/// The sequence is the sole state of an editing session. Existing lines are
/// never reordered; edits either rewrite one line's value in place or splice
/// new lines in between existing ones.
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<Line>,
    newline: String,
}

impl Document {
    /// Parse `text` into a document.
    pub fn parse(text: &str) -> Self {
        let newline = match text.find('\n') {
            Some(i) if text[..i].ends_with('\r') => "\r\n",
            _ => "\n",
        };

        Self {
            lines: parse_lines(text),
            newline: newline.to_string(),
        }
    }

    /// The classified lines in document order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The terminator used for synthetic lines: `\r\n` when the first line
    /// of the original text ends that way, `\n` otherwise.
    pub fn newline(&self) -> &str {
        &self.newline
    }

    /// Find the first setting line, in document order, whose trimmed key is
    /// `key` and whose enclosing section instance is named `section`.
    pub fn find_setting(&self, section: &str, key: &str) -> Option<usize> {
        let mut current = MAIN_SECTION;

        for (index, line) in self.lines.iter().enumerate() {
            match line {
                Line::SectionHeader { name, .. } => current = name,
                Line::Setting { key: line_key, .. } => {
                    if current == section && line_key == key {
                        return Some(index);
                    }
                }
                Line::Comment { .. } | Line::Blank { .. } | Line::Other { .. } => {}
            }
        }

        None
    }

    /// Whether a `[section]` header line exists anywhere in the document.
    pub fn has_explicit_header(&self, section: &str) -> bool {
        self.lines.iter().any(
            |line| matches!(line, Line::SectionHeader { name, .. } if name == section),
        )
    }

    /// Locate the insertion anchor inside the last instance of `section`:
    /// its last setting line, or its header line when the instance holds no
    /// settings. Trailing blanks and comments stay attached to whatever
    /// follows them, so new settings land before them.
    ///
    /// For [`MAIN_SECTION`] with no explicit header the instance is the
    /// implicit leading run, and [`Anchor::Start`] is returned when that run
    /// holds no settings. Returns `None` only for a named section with no
    /// instance at all.
    pub fn last_line_of_last_instance(&self, section: &str) -> Option<Anchor> {
        let implicit_main = section == MAIN_SECTION;
        let mut anchor = implicit_main.then_some(Anchor::Start);
        let mut in_section = implicit_main;

        for (index, line) in self.lines.iter().enumerate() {
            match line {
                Line::SectionHeader { name, .. } => {
                    in_section = name == section;
                    if in_section {
                        anchor = Some(Anchor::After(index));
                    }
                }
                Line::Setting { .. } => {
                    if in_section {
                        anchor = Some(Anchor::After(index));
                    }
                }
                Line::Comment { .. } | Line::Blank { .. } | Line::Other { .. } => {}
            }
        }

        anchor
    }

    /// Replace the value of the setting line at `index`, leaving its prefix
    /// and terminator untouched. Non-setting lines are left alone.
    pub(crate) fn replace_value(&mut self, index: usize, new_value: &str) {
        if let Some(Line::Setting { value, .. }) = self.lines.get_mut(index) {
            *value = new_value.to_string();
        }
    }

    /// Splice a line in at `index`; following lines shift down by one.
    pub(crate) fn insert(&mut self, index: usize, line: Line) {
        self.lines.insert(index, line);
    }

    /// Append a line at the end of the document.
    pub(crate) fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Build a `[name]` header line using the document's newline convention.
    pub(crate) fn synthetic_header(&self, name: &str) -> Line {
        Line::SectionHeader {
            raw: format!("[{name}]{}", self.newline),
            name: name.to_string(),
        }
    }

    /// Build a `key = value` line using the document's newline convention.
    pub(crate) fn synthetic_setting(&self, key: &str, value: &str) -> Line {
        Line::Setting {
            key: key.trim().to_string(),
            prefix: format!("{key} = "),
            value: value.to_string(),
            terminator: self.newline.clone(),
        }
    }

    /// Concatenate every line back into document text.
    ///
    /// Each line contributes its own raw text. A line that was the
    /// unterminated final line of the input gains a terminator if lines have
    /// been spliced in after it; the current final line stays as-is.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for (index, line) in self.lines.iter().enumerate() {
            line.write_into(&mut out);
            if index + 1 < self.lines.len() && !out.ends_with('\n') {
                out.push('\n');
            }
        }

        out
    }
}
