//! Line-oriented parser for INI-style documents.
//!
//! The parser never rejects input: every line of the source text maps to
//! exactly one [`Line`], and lines the grammar does not recognize become
//! [`Line::Other`] and are reproduced verbatim. That total mapping is what
//! makes the parse/render round trip lossless.
//!
//! The main items are:
//! - [`Line`] - A single classified line retaining its original text
//! - [`parse_lines`] - Split a document into its ordered line sequence

use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "ini.pest"]
struct LineClassifier;

/// A single line of an INI-style document.
///
/// Every variant retains enough of the original text to reproduce the line
/// byte-for-byte. Terminators (`\n` or `\r\n`) travel with the line they
/// close; the final line of a document may carry none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A line whose first non-whitespace character is `#`.
    Comment { raw: String },

    /// An empty or all-whitespace line.
    Blank { raw: String },

    /// A `[name]` header line. `name` is the raw text between the brackets,
    /// not trimmed.
    SectionHeader { raw: String, name: String },

    /// A `key = value` line, split so the value can be replaced without
    /// disturbing the surrounding formatting.
    Setting {
        /// Trimmed key used for lookups. The raw spelling lives in `prefix`.
        key: String,
        /// Verbatim text from line start through the whitespace run that
        /// follows `=`.
        prefix: String,
        /// Remainder of the line, terminator excluded.
        value: String,
        /// `"\n"`, `"\r\n"`, or empty for an unterminated final line.
        terminator: String,
    },

    /// Anything else (stray brackets, text without `=`, ...). Reproduced
    /// verbatim and never targeted by an edit.
    Other { raw: String },
}

impl Line {
    /// Append this line's current text, terminator included, to `out`.
    pub(crate) fn write_into(&self, out: &mut String) {
        match self {
            Line::Comment { raw }
            | Line::Blank { raw }
            | Line::SectionHeader { raw, .. }
            | Line::Other { raw } => out.push_str(raw),
            Line::Setting {
                prefix,
                value,
                terminator,
                ..
            } => {
                out.push_str(prefix);
                out.push_str(value);
                out.push_str(terminator);
            }
        }
    }
}

/// Split `text` into lines, terminators retained, and classify each one.
///
/// Operates on Unicode code points throughout; multi-byte section names,
/// keys, and values are never split.
pub fn parse_lines(text: &str) -> Vec<Line> {
    text.split_inclusive('\n')
        .map(|raw| {
            let (content, terminator) = split_terminator(raw);
            classify(content, terminator)
        })
        .collect()
}

fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(content) = raw.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = raw.strip_suffix('\n') {
        (content, "\n")
    } else {
        (raw, "")
    }
}

fn classify(content: &str, terminator: &str) -> Line {
    let raw = || format!("{content}{terminator}");

    let Ok(mut pairs) = LineClassifier::parse(Rule::line, content) else {
        return Line::Other { raw: raw() };
    };
    let Some(pair) = pairs.next() else {
        return Line::Other { raw: raw() };
    };

    match pair.as_rule() {
        Rule::comment => Line::Comment { raw: raw() },

        Rule::blank => Line::Blank { raw: raw() },

        Rule::section_header => {
            let name = pair
                .into_inner()
                .find(|inner| inner.as_rule() == Rule::header_name)
                .map(|inner| inner.as_str().to_string())
                .unwrap_or_default();
            Line::SectionHeader { raw: raw(), name }
        }

        Rule::setting => {
            let mut key = String::new();
            let mut prefix = String::new();
            let mut value = String::new();

            for inner in pair.into_inner() {
                match inner.as_rule() {
                    Rule::prefix => {
                        prefix = inner.as_str().to_string();
                        if let Some(key_pair) = inner
                            .into_inner()
                            .find(|nested| nested.as_rule() == Rule::key)
                        {
                            key = key_pair.as_str().to_string();
                        }
                    }
                    Rule::value => value = inner.as_str().to_string(),
                    _ => {}
                }
            }

            Line::Setting {
                key,
                prefix,
                value,
                terminator: terminator.to_string(),
            }
        }

        // EOI, or any rule the grammar grows later
        _ => Line::Other { raw: raw() },
    }
}
