//! An ordered collection of BibTeX records with id-based lookup.
//!
//! A [`Database`] is constructed once from a multi-entry text blob and is
//! read-only afterwards. Records keep their file order and duplicates by
//! citation id are permitted; the id index is built lazily on the first
//! id lookup and maps each id to its **last** occurrence.
//!
//! # Examples
//!
//! ```
//! use bibrec::Database;
//!
//! let db = Database::from_text("@book{a,\n  year = {1990}\n}\n");
//! assert_eq!(db.len(), 1);
//! assert_eq!(db.get(0).unwrap().id, "a");
//! assert_eq!(db.get_by_id("a").unwrap().get_joined("year").unwrap(), "1990");
//! ```

use crate::error::{BibError, Result};
use crate::parser;
use crate::record::Record;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// An ordered collection of [`Record`]s parsed from BibTeX text.
#[derive(Debug, Clone, Default)]
pub struct Database {
    records: Vec<Record>,
    // id -> position of the id's last occurrence; computed once, lazily.
    // OnceLock keeps concurrent first lookups from racing on the build.
    keymap: OnceLock<HashMap<String, usize>>,
}

impl Database {
    /// Build a database from already-parsed records.
    #[must_use]
    pub fn from_records(records: Vec<Record>) -> Self {
        Database {
            records,
            keymap: OnceLock::new(),
        }
    }

    /// Parse a multi-entry text blob into a database.
    ///
    /// Chunks of the input that do not form a BibTeX entry are skipped, so
    /// the database may hold fewer records than the input has `@` signs.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_records(parser::parse_many(text))
    }

    /// Build a database from an optional text source.
    ///
    /// An absent or empty source yields an empty database rather than an
    /// error; bibliographies are routinely optional in the data sets this
    /// library serves.
    #[must_use]
    pub fn from_source(source: Option<&str>) -> Self {
        match source {
            Some(text) if !text.is_empty() => Self::from_text(text),
            _ => Self::from_records(Vec::new()),
        }
    }

    /// Number of records, counting duplicate ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the database holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in file order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Access a record by position.
    ///
    /// Positional access is unaffected by duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Record> {
        self.records
            .get(index)
            .ok_or(BibError::IndexOutOfRange(index))
    }

    /// Access a record by citation id.
    ///
    /// When several records share an id, the **last** one wins; earlier
    /// occurrences stay reachable by position.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::KeyNotFound`] if no record has the id.
    pub fn get_by_id(&self, id: &str) -> Result<&Record> {
        self.keymap()
            .get(id)
            .and_then(|&index| self.records.get(index))
            .ok_or_else(|| BibError::KeyNotFound(id.to_string()))
    }

    /// The id index, built on first use by one scan over the records.
    fn keymap(&self) -> &HashMap<String, usize> {
        self.keymap.get_or_init(|| {
            log::debug!("building keymap over {} records", self.records.len());
            let mut keymap = HashMap::with_capacity(self.records.len());
            for (index, record) in self.records.iter().enumerate() {
                keymap.insert(record.id.clone(), index);
            }
            keymap
        })
    }

    /// Serialize every record to canonical BibTeX, separated by blank lines.
    ///
    /// An empty database serializes to an empty string.
    #[must_use]
    pub fn to_bibtex(&self) -> String {
        self.records
            .iter()
            .map(Record::to_bibtex)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Database {
    /// Displays the database as canonical BibTeX, same as [`Database::to_bibtex`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bibtex())
    }
}
