//! Editing sessions over a parsed document.
//!
//! An [`Editor`] accumulates `set` calls against the in-memory line sequence
//! and renders the final text exactly once. The open/committed state machine
//! is enforced by ownership: [`Editor::commit`] consumes the editor, so no
//! further edits can follow it.
//!
//! The session entry points [`Editor::update`] and [`Editor::update_file`]
//! guarantee the backing source is rewritten only after the caller's edit
//! closure succeeds; if the closure returns an error, nothing is written.

use crate::document::{Anchor, Document, MAIN_SECTION};
use crate::error::{IniError, IniResult};
use crate::source::TextSource;
use std::fs;
use std::path::Path;

/// An open editing session over one document.
///
/// # Examples
///
/// ```
/// use inifile::Editor;
///
/// let mut editor = Editor::parse("[section]\nname = original value\n");
/// editor.set("section", "name", "changed value");
/// assert_eq!(editor.commit(), "[section]\nname = changed value\n");
/// ```
pub struct Editor {
    doc: Document,
}

impl Editor {
    /// Start a session by parsing the document text.
    pub fn parse(text: &str) -> Self {
        Self {
            doc: Document::parse(text),
        }
    }

    /// Set `key` to `value` within `section`.
    ///
    /// An existing setting is updated in place, keeping its original
    /// indentation, key spelling, and separator. A missing setting is
    /// inserted into the last instance of the section; a missing section is
    /// appended at the end of the document. Absence is never an error.
    ///
    /// Targeting [`MAIN_SECTION`](crate::MAIN_SECTION) when the document has
    /// no explicit `[main]` header first materializes one at the top of the
    /// document, above the implicit main lines.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        if section == MAIN_SECTION && !self.doc.has_explicit_header(MAIN_SECTION) {
            let header = self.doc.synthetic_header(MAIN_SECTION);
            self.doc.insert(0, header);
        }

        if let Some(index) = self.doc.find_setting(section, key) {
            self.doc.replace_value(index, value);
        } else if let Some(anchor) = self.doc.last_line_of_last_instance(section) {
            let line = self.doc.synthetic_setting(key, value);
            match anchor {
                Anchor::Start => self.doc.insert(0, line),
                Anchor::After(index) => self.doc.insert(index + 1, line),
            }
        } else {
            let header = self.doc.synthetic_header(section);
            let line = self.doc.synthetic_setting(key, value);
            self.doc.push(header);
            self.doc.push(line);
        }
    }

    /// The document being edited.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Render the final text and close the session.
    pub fn commit(self) -> String {
        self.doc.render()
    }

    /// Run an editing session against a [`TextSource`].
    ///
    /// The source is read once, the closure applies its edits, and the
    /// rendered text replaces the source content in a single write. If the
    /// closure returns an error the source is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use inifile::Editor;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut config = String::from("[server]\nport = 8080\n");
    ///
    /// Editor::update(&mut config, |editor| {
    ///     editor.set("server", "port", "9090");
    ///     Ok(())
    /// })?;
    ///
    /// assert_eq!(config, "[server]\nport = 9090\n");
    /// # Ok(())
    /// # }
    /// ```
    pub fn update<S, F>(source: &mut S, edit: F) -> IniResult<()>
    where
        S: TextSource + ?Sized,
        F: FnOnce(&mut Editor) -> IniResult<()>,
    {
        let text = source.read_text()?;
        let mut editor = Editor::parse(&text);
        edit(&mut editor)?;
        source.replace_text(&editor.commit())
    }

    /// Run an editing session against a file on disk.
    pub fn update_file<P, F>(path: P, edit: F) -> IniResult<()>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut Editor) -> IniResult<()>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|err| IniError::io(path.display().to_string(), err.to_string()))?;

        let mut editor = Editor::parse(&text);
        edit(&mut editor)?;

        fs::write(path, editor.commit())
            .map_err(|err| IniError::io(path.display().to_string(), err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_existing_value_in_place() {
        let mut editor = Editor::parse("[section]\nname = original value\n");
        editor.set("section", "name", "changed value");
        assert_eq!(editor.commit(), "[section]\nname = changed value\n");
    }

    #[test]
    fn test_append_section_to_empty_document() {
        let mut editor = Editor::parse("");
        editor.set("the_section", "name", "value");
        assert_eq!(editor.commit(), "[the_section]\nname = value\n");
    }

    #[test]
    fn test_add_setting_to_existing_section() {
        let mut editor = Editor::parse("[section]\nname = original value\n");
        editor.set("section", "updated", "new");
        assert_eq!(
            editor.commit(),
            "[section]\nname = original value\nupdated = new\n"
        );
    }

    #[test]
    fn test_materialize_main_for_new_setting() {
        let mut editor = Editor::parse("");
        editor.set("main", "name", "value");
        assert_eq!(editor.commit(), "[main]\nname = value\n");
    }

    #[test]
    fn test_materialize_main_above_existing_setting() {
        let mut editor = Editor::parse("name = original\n");
        editor.set("main", "name", "changed");
        assert_eq!(editor.commit(), "[main]\nname = changed\n");
    }

    #[test]
    fn test_main_with_explicit_header_gets_no_second_header() {
        let mut editor = Editor::parse("[main]\nname = original\n");
        editor.set("main", "other", "x");
        assert_eq!(editor.commit(), "[main]\nname = original\nother = x\n");
    }

    #[test]
    fn test_synthetic_lines_follow_crlf_convention() {
        let mut editor = Editor::parse("[section]\r\nname = value\r\n");
        editor.set("section", "added", "x");
        editor.set("fresh", "key", "y");
        assert_eq!(
            editor.commit(),
            "[section]\r\nname = value\r\nadded = x\r\n[fresh]\r\nkey = y\r\n"
        );
    }

    #[test]
    fn test_update_writes_source_once_edits_succeed() {
        let mut source = String::from("[s]\na = 1\n");
        Editor::update(&mut source, |editor| {
            editor.set("s", "a", "2");
            editor.set("s", "b", "3");
            Ok(())
        })
        .unwrap();
        assert_eq!(source, "[s]\na = 2\nb = 3\n");
    }

    #[test]
    fn test_update_leaves_source_untouched_on_error() {
        let mut source = String::from("[s]\na = 1\n");
        let result = Editor::update(&mut source, |editor| {
            editor.set("s", "a", "2");
            Err(IniError::custom("caller bailed out"))
        });

        assert!(result.is_err());
        assert_eq!(source, "[s]\na = 1\n");
    }
}
