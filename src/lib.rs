//! # inifile
//!
//! A structure-preserving editor for INI-style configuration files.
//!
//! Given an existing document (sections, settings, comments, blank lines,
//! arbitrary whitespace), the editor applies a batch of "set key in section"
//! operations and re-serializes the document byte-for-byte identical to the
//! original except for the minimal edits required. Updated values keep their
//! surrounding formatting, new values are inserted at a deterministic
//! location, and every comment, blank line, and unrelated setting is
//! reproduced verbatim.
//!
//! ## Features
//!
//! - **Lossless round trip**: a session with no edits renders the input
//!   unchanged, whatever the input looks like
//! - **In-place value edits**: indentation, key spelling, and separator
//!   spacing of an updated line are preserved exactly
//! - **Deterministic insertion**: new settings land after the last setting
//!   of the section's last instance; new sections are appended at the end
//! - **Implicit `main` section**: lines before the first header belong to
//!   `main`, and a `[main]` header is materialized when `main` is written to
//! - **Malformed input tolerance**: lines that are not comments, headers, or
//!   settings pass through verbatim and are invisible to edits
//! - **Unicode throughout**: section names, keys, and values are handled as
//!   code points, never split mid-character
//! - **One-shot commit**: the backing source is rewritten once, only after
//!   the whole edit block succeeds
//!
//! ## Example
//!
//! ```rust
//! use inifile::Editor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = String::from(
//!     "# deployment settings\n\
//!      [server]\n\
//!      port = 8080\n\
//!      host = localhost\n",
//! );
//!
//! Editor::update(&mut config, |editor| {
//!     editor.set("server", "port", "9090");
//!     editor.set("client", "retries", "3");
//!     Ok(())
//! })?;
//!
//! assert_eq!(
//!     config,
//!     "# deployment settings\n\
//!      [server]\n\
//!      port = 9090\n\
//!      host = localhost\n\
//!      [client]\n\
//!      retries = 3\n",
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Editing files
//!
//! [`Editor::update_file`] runs the same session against a path, and the
//! [`TextSource`] trait lets callers supply their own backing resource (an
//! open [`std::fs::File`] and `String` are supported out of the box).
//! Locking and atomic-rename mechanics are deliberately left to the caller:
//! the crate's contract is "build the full text, then perform one write".

// Module declarations
mod document;
mod editor;
mod error;
mod parser;
mod source;

// Public API exports
pub use document::{Anchor, Document, MAIN_SECTION};
pub use editor::Editor;
pub use error::{IniError, IniResult};
pub use parser::{Line, parse_lines};
pub use source::TextSource;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
