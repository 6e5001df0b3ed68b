//! Backing text sources for editing sessions.
//!
//! An editing session reads the full current content of its source once at
//! start and replaces it wholly at commit; there is no partial or streaming
//! I/O. Atomic-replace semantics (write to a temporary file, then rename)
//! and locking are the caller's concern.

use crate::error::IniResult;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};

/// A mutable text-bearing resource that a session can read and rewrite.
pub trait TextSource {
    /// Read the entire current content.
    fn read_text(&mut self) -> IniResult<String>;

    /// Replace the entire content in one operation.
    fn replace_text(&mut self, text: &str) -> IniResult<()>;
}

/// In-memory buffer, handy for tests and string-based callers.
impl TextSource for String {
    fn read_text(&mut self) -> IniResult<String> {
        Ok(self.clone())
    }

    fn replace_text(&mut self, text: &str) -> IniResult<()> {
        self.clear();
        self.push_str(text);
        Ok(())
    }
}

/// A file opened for both reading and writing. Content is read from the
/// start of the file and the file is truncated before the rewrite.
impl TextSource for File {
    fn read_text(&mut self) -> IniResult<String> {
        self.seek(SeekFrom::Start(0))?;
        let mut text = String::new();
        self.read_to_string(&mut text)?;
        Ok(text)
    }

    fn replace_text(&mut self, text: &str) -> IniResult<()> {
        self.seek(SeekFrom::Start(0))?;
        self.set_len(0)?;
        self.write_all(text.as_bytes())?;
        self.flush()?;
        Ok(())
    }
}
