//! Line-oriented parsing of BibTeX text into records.
//!
//! The input this parser targets is hand-curated, irregular bibliographic
//! exports, preprocessed so that every `field = {value}` pair fits on one
//! physical line. That assumption keeps the grammar line-oriented: no
//! nested braces, no multi-line values, no `@string` macros. Anything the
//! patterns do not recognize is skipped rather than reported, because
//! strictness would reject otherwise-useful data.
//!
//! Parsing runs a three-state machine over lines:
//!
//! - `Seeking` — discard lines until an entry header
//!   `@genre{key,` is found
//! - `InEntry` — collect `field = {value}` lines until a line holding only
//!   the closing brace
//! - `Done` — ignore the rest
//!
//! # Examples
//!
//! ```
//! use bibrec::parser::parse_one;
//!
//! let record = parse_one("@book{knuth84,\n  author = {Donald E. Knuth},\n}\n").unwrap();
//! assert_eq!(record.id, "knuth84");
//! assert_eq!(record.get_all("author"), vec!["Donald E. Knuth"]);
//! ```

use crate::entry_type::Genre;
use crate::record::Record;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `@genre{key,` — opens an entry; the key runs up to the first comma.
    static ref ENTRY_HEADER: Regex =
        Regex::new(r"^@(?P<genre>[a-zA-Z_]+)\s*\{\s*(?P<key>[^,]*)\s*,").unwrap();

    /// `field = {value...` or `field = "value...` — the opening delimiter
    /// determines the closing delimiter required later on the same line.
    static ref FIELD_LINE: Regex =
        Regex::new(r#"^\s*(?P<field>[a-zA-Z_]+)\s*=\s*(?P<delim>[{"])(?P<value>.+)"#).unwrap();

    /// A line holding only the entry's closing brace.
    static ref ENTRY_END: Regex = Regex::new(r"^\s*\}\s*$").unwrap();
}

/// Parser states. One entry is consumed per run; lines after the entry's
/// closing brace are ignored.
enum ParseState {
    Seeking,
    InEntry,
    Done,
}

/// Parse a single BibTeX entry out of `text`.
///
/// Lines before the entry header are treated as preamble and discarded.
/// Within the entry, a field is stored only if its value closes with the
/// matching delimiter on the same line; unclosed values and unrecognized
/// lines are dropped silently. Returns `None` when no entry header occurs
/// anywhere in the input.
#[must_use]
pub fn parse_one(text: &str) -> Option<Record> {
    let mut state = ParseState::Seeking;
    let mut record = None;

    for line in text.lines() {
        match state {
            ParseState::Seeking => {
                if let Some(caps) = ENTRY_HEADER.captures(line) {
                    let genre = caps["genre"].to_lowercase();
                    let key = caps["key"].trim();
                    record = Some(Record::new(Genre::from_name(&genre), key));
                    state = ParseState::InEntry;
                }
            }
            ParseState::InEntry => {
                if let Some(caps) = FIELD_LINE.captures(line) {
                    let closing = if &caps["delim"] == "{" { '}' } else { '"' };
                    if let Some(value) = close_value(caps["value"].trim(), closing) {
                        if let Some(record) = record.as_mut() {
                            record.set(&caps["field"], value);
                        }
                    } else {
                        // Multi-line values are out of contract, not an error.
                        log::debug!(
                            "dropping field '{}': value does not close on its line",
                            &caps["field"]
                        );
                    }
                } else if ENTRY_END.is_match(line) {
                    state = ParseState::Done;
                }
                // Any other line is tolerated and ignored.
            }
            ParseState::Done => break,
        }
    }

    record
}

/// Strip an optional trailing comma, then require and remove the closing
/// delimiter. Returns the trimmed inner value, or `None` if the value does
/// not close on this line.
fn close_value(value: &str, closing: char) -> Option<&str> {
    let value = match value.strip_suffix(',') {
        Some(stripped) => stripped.trim_end(),
        None => value,
    };
    value.strip_suffix(closing).map(str::trim_end)
}

/// Parse every BibTeX entry in `text`, in order of appearance.
///
/// The input is split at each `@`; the chunk before the first `@` is
/// preamble and dropped. Every remaining chunk is handed to [`parse_one`],
/// so chunks that never form an entry header contribute no record, and the
/// result may hold fewer records than the input has `@` characters.
#[must_use]
pub fn parse_many(text: &str) -> Vec<Record> {
    let mut boundaries: Vec<usize> = memchr::memchr_iter(b'@', text.as_bytes()).collect();
    boundaries.push(text.len());

    let mut records = Vec::new();
    for window in boundaries.windows(2) {
        let chunk = &text[window[0]..window[1]];
        match parse_one(chunk) {
            Some(record) => records.push(record),
            None => log::debug!("skipping @-chunk with no entry header"),
        }
    }
    records
}
