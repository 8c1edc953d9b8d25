//! BibTeX record structure and operations.
//!
//! This module provides the core types for working with BibTeX records:
//! - [`Record`] — an ordered collection of named fields with a genre and a
//!   citation id
//! - [`FieldValue`] — a field's stored shape, either a single string or an
//!   ordered list of parts
//!
//! BibTeX itself only has single string values per field. To overcome that
//! limitation, a field may be stored multi-valued; the two shapes are kept
//! distinct and exposed through two accessor families:
//!
//! - [`Record::get_joined`] — the separator-joined string view
//! - [`Record::get_all`] — the normalized list view (a stored single value
//!   is split on the field's separator to recover its logical parts)
//! - [`Record::get_raw`] — exactly the stored shape
//!
//! Fields are stored in insertion order using `IndexMap`, preserving the
//! order in which fields appear in the source text. This ensures round-trip
//! fidelity when serializing records back to BibTeX.
//!
//! # Examples
//!
//! ```
//! use bibrec::{EntryType, Record};
//!
//! let mut record = Record::new(EntryType::Article, "doe2001");
//! record.set("author", vec!["Jane Doe".to_string(), "Max Muster".to_string()]);
//! record.set("year", "2001");
//!
//! assert_eq!(record.get_joined("author").unwrap(), "Jane Doe and Max Muster");
//! assert_eq!(record.get_all("author"), vec!["Jane Doe", "Max Muster"]);
//! ```

use crate::entry_type::Genre;
use crate::error::{BibError, Result};
use crate::fields::separator;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// A field's stored value: one string, or an ordered list of parts.
///
/// The shape is decided when the value is assigned and preserved exactly;
/// accessors normalize on the way out rather than coercing on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single string, as produced by the parser.
    Single(String),
    /// An ordered list of parts, e.g. one part per author.
    Multi(SmallVec<[String; 2]>),
}

impl FieldValue {
    /// Whether the value holds nothing: an empty string or an empty list.
    ///
    /// A `Multi` whose parts are all empty strings is not considered empty
    /// here; emptiness of parts is handled by the accessors, which filter
    /// them out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Single(value) => value.is_empty(),
            FieldValue::Multi(parts) => parts.is_empty(),
        }
    }

    /// The separator-joined string form of this value for the given field.
    ///
    /// A single value joins to itself; multi parts are filtered for
    /// emptiness and concatenated with the field's separator.
    #[must_use]
    pub fn joined(&self, field: &str) -> String {
        match self {
            FieldValue::Single(value) => value.clone(),
            FieldValue::Multi(parts) => parts
                .iter()
                .filter(|part| !part.is_empty())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(separator(field)),
        }
    }

    /// The normalized list form of this value for the given field.
    ///
    /// A single value is split on the field's separator to recover its
    /// logical parts; empty parts are filtered in both shapes.
    #[must_use]
    pub fn parts(&self, field: &str) -> Vec<String> {
        match self {
            FieldValue::Single(value) => value
                .split(separator(field))
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
            FieldValue::Multi(parts) => parts
                .iter()
                .filter(|part| !part.is_empty())
                .cloned()
                .collect(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Single(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(parts: Vec<String>) -> Self {
        FieldValue::Multi(SmallVec::from_vec(parts))
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(parts: Vec<&str>) -> Self {
        FieldValue::Multi(parts.iter().map(|part| (*part).to_string()).collect())
    }
}

/// A BibTeX record: a genre, a citation id, and ordered named fields.
///
/// Field names are unique within a record; assigning to an existing name
/// overwrites its value in place, keeping the original position. Iteration
/// order is insertion order and is exactly the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The entry type, catalogued or raw.
    pub genre: Genre,
    /// The citation key identifying this record.
    pub id: String,
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Create an empty record with the given genre and citation id.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibrec::{EntryType, Record};
    ///
    /// let record = Record::new(EntryType::Book, "knuth84");
    /// assert!(record.is_empty());
    /// ```
    #[must_use]
    pub fn new(genre: impl Into<Genre>, id: impl Into<String>) -> Self {
        Record {
            genre: genre.into(),
            id: id.into(),
            fields: IndexMap::new(),
        }
    }

    /// Insert or overwrite a field.
    ///
    /// Overwriting keeps the field's original insertion position. The value
    /// may be anything convertible to a [`FieldValue`]: `&str`, `String`,
    /// `Vec<String>`, `Vec<&str>`, or an explicit `FieldValue`.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Whether the record carries the given field.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// The separator-joined string view of a field.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::FieldNotFound`] if the record does not carry the
    /// field. Use [`get_all`](Self::get_all) or [`get_raw`](Self::get_raw)
    /// for lenient access.
    pub fn get_joined(&self, field: &str) -> Result<String> {
        self.fields
            .get(field)
            .map(|value| value.joined(field))
            .ok_or_else(|| BibError::FieldNotFound(field.to_string()))
    }

    /// The stored value exactly as assigned, or `None` if absent.
    #[must_use]
    pub fn get_raw(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// The normalized list view of a field; empty if absent.
    ///
    /// A stored single value is split on the field's separator to recover
    /// its logical parts, so `get_all` yields a list regardless of shape.
    /// Note that a genuinely single value containing the separator
    /// substring cannot be told apart from a joined list; that ambiguity is
    /// part of the format.
    #[must_use]
    pub fn get_all(&self, field: &str) -> Vec<String> {
        self.fields
            .get(field)
            .map(|value| value.parts(field))
            .unwrap_or_default()
    }

    /// The joined view of a field, filtered for emptiness.
    fn nonempty(&self, field: &str) -> Option<String> {
        self.fields.get(field).and_then(|value| {
            let joined = value.joined(field);
            if joined.is_empty() {
                None
            } else {
                Some(joined)
            }
        })
    }

    /// Serialize the record to canonical BibTeX text.
    ///
    /// Field names are padded with spaces to the width of the longest field
    /// name present, aligning the `=` signs; values are the joined-view
    /// strings wrapped in `{}` with no escaping; fields appear in insertion
    /// order; the final field line has no trailing comma. Output ends with
    /// a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibrec::{EntryType, Record};
    ///
    /// let mut record = Record::new(EntryType::Book, "knuth84");
    /// record.set("author", "Donald E. Knuth");
    /// record.set("year", "1984");
    ///
    /// assert_eq!(
    ///     record.to_bibtex(),
    ///     "@book{knuth84,\n  author = {Donald E. Knuth},\n  year   = {1984}\n}\n"
    /// );
    /// ```
    #[must_use]
    pub fn to_bibtex(&self) -> String {
        let width = self.fields.keys().map(String::len).max().unwrap_or(0);
        let body = self
            .fields
            .iter()
            .map(|(name, value)| {
                format!("  {name:<width$} = {{{value}}}", value = value.joined(name))
            })
            .collect::<Vec<_>>()
            .join(",\n");
        format!("@{genre}{{{id},\n{body}\n}}\n", genre = self.genre, id = self.id)
    }

    /// Render a best-effort human-readable citation.
    ///
    /// This is not a round-trip format and no bibliography style; it
    /// composes the fields commonly wanted in a one-line citation. Absent
    /// fields (including fields whose joined view is empty) contribute
    /// nothing, so this is total over any record.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibrec::{EntryType, Record};
    ///
    /// let mut record = Record::new(EntryType::Misc, "smith2000");
    /// record.set("author", "Smith");
    /// record.set("year", "2000");
    ///
    /// assert_eq!(record.citation_text(), "Smith (2000).");
    /// ```
    #[must_use]
    pub fn citation_text(&self) -> String {
        let author = self
            .nonempty("author")
            .unwrap_or_else(|| "Anonymous".to_string());
        let year = self.nonempty("year").unwrap_or_else(|| "s.a.".to_string());
        let mut segments = vec![format!("{author} ({year})")];

        if let Some(title) = self.nonempty("title") {
            segments.push(format!("\"{title}\""));
        }
        if let Some(editor) = self.nonempty("editor") {
            segments.push(format!("in {editor} (ed)"));
        }
        if let Some(booktitle) = self.nonempty("booktitle") {
            segments.push(booktitle);
        }
        for field in ["school", "journal", "volume"] {
            if let Some(value) = self.nonempty(field) {
                segments.push(value);
            }
        }
        if let Some(issue) = self.nonempty("issue") {
            segments.push(format!("({issue})"));
        }
        if let Some(pages) = self.nonempty("pages") {
            if let Some(last) = segments.last_mut() {
                last.push('.');
            }
            segments.push(format!("pp. {pages}"));
        }
        if let Some(publisher) = self.nonempty("publisher") {
            if let Some(last) = segments.last_mut() {
                last.push('.');
            }
            // A missing address still keeps the ": " prefix.
            let address = self.nonempty("address").unwrap_or_default();
            segments.push(format!("{address}: {publisher}"));
        }
        if let Some(last) = segments.last_mut() {
            last.push('.');
        }
        segments.join(" ")
    }
}

impl fmt::Display for Record {
    /// Displays the record as canonical BibTeX, same as [`Record::to_bibtex`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bibtex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry_type::EntryType;

    fn sample_record() -> Record {
        let mut record = Record::new(EntryType::Article, "doe2001");
        record.set("author", vec!["Jane Doe", "Max Muster"]);
        record.set("title", "On Things");
        record.set("year", "2001");
        record
    }

    #[test]
    fn test_set_and_get_joined() {
        let record = sample_record();
        assert_eq!(
            record.get_joined("author").unwrap(),
            "Jane Doe and Max Muster"
        );
        assert_eq!(record.get_joined("title").unwrap(), "On Things");
    }

    #[test]
    fn test_get_joined_missing_field_fails() {
        let record = sample_record();
        let err = record.get_joined("publisher").unwrap_err();
        assert!(matches!(err, BibError::FieldNotFound(ref field) if field == "publisher"));
    }

    #[test]
    fn test_get_all_splits_single_values() {
        let mut record = Record::new(EntryType::Misc, "x");
        record.set("editor", "a and b");
        record.set("keywords", "syntax; semantics");

        assert_eq!(record.get_all("editor"), vec!["a", "b"]);
        assert_eq!(record.get_all("keywords"), vec!["syntax", "semantics"]);
        assert!(record.get_all("absent").is_empty());
    }

    #[test]
    fn test_get_all_filters_empty_parts() {
        let mut record = Record::new(EntryType::Misc, "x");
        record.set("author", vec!["Alice", "", "Bob"]);
        assert_eq!(record.get_all("author"), vec!["Alice", "Bob"]);
        assert_eq!(record.get_joined("author").unwrap(), "Alice and Bob");
    }

    #[test]
    fn test_get_raw_preserves_shape() {
        let record = sample_record();
        assert!(matches!(
            record.get_raw("title"),
            Some(FieldValue::Single(_))
        ));
        assert!(matches!(record.get_raw("author"), Some(FieldValue::Multi(_))));
        assert!(record.get_raw("absent").is_none());
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut record = sample_record();
        record.set("author", "Someone Else");

        let names: Vec<&str> = record.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["author", "title", "year"]);
        assert_eq!(record.get_joined("author").unwrap(), "Someone Else");
    }

    #[test]
    fn test_to_bibtex_alignment_and_order() {
        let record = sample_record();
        assert_eq!(
            record.to_bibtex(),
            "@article{doe2001,\n  \
             author = {Jane Doe and Max Muster},\n  \
             title  = {On Things},\n  \
             year   = {2001}\n}\n"
        );
    }

    #[test]
    fn test_to_bibtex_empty_record() {
        let record = Record::new(EntryType::Misc, "empty");
        assert_eq!(record.to_bibtex(), "@misc{empty,\n\n}\n");
    }

    #[test]
    fn test_to_bibtex_raw_genre() {
        let record = Record::new("webpage", "w1");
        assert!(record.to_bibtex().starts_with("@webpage{w1,"));
    }

    #[test]
    fn test_display_matches_to_bibtex() {
        let record = sample_record();
        assert_eq!(record.to_string(), record.to_bibtex());
    }

    #[test]
    fn test_citation_text_minimal() {
        let mut record = Record::new(EntryType::Misc, "x");
        record.set("author", "Smith");
        record.set("year", "2000");
        assert_eq!(record.citation_text(), "Smith (2000).");
    }

    #[test]
    fn test_citation_text_defaults() {
        let record = Record::new(EntryType::Misc, "x");
        assert_eq!(record.citation_text(), "Anonymous (s.a.).");
    }

    #[test]
    fn test_citation_text_article() {
        let mut record = Record::new(EntryType::Article, "x");
        record.set("author", "Doe");
        record.set("year", "1999");
        record.set("title", "A Title");
        record.set("journal", "Language");
        record.set("issue", "3");
        record.set("pages", "1-10");
        assert_eq!(
            record.citation_text(),
            "Doe (1999) \"A Title\" Language (3). pp. 1-10."
        );
    }

    #[test]
    fn test_citation_text_book_with_publisher() {
        let mut record = Record::new(EntryType::Book, "x");
        record.set("author", "Doe");
        record.set("year", "1999");
        record.set("title", "A Book");
        record.set("publisher", "Mouton");
        record.set("address", "Berlin");
        assert_eq!(
            record.citation_text(),
            "Doe (1999) \"A Book\". Berlin: Mouton."
        );
    }

    #[test]
    fn test_citation_text_publisher_without_address() {
        let mut record = Record::new(EntryType::Book, "x");
        record.set("author", "Doe");
        record.set("publisher", "Mouton");
        assert_eq!(record.citation_text(), "Doe (s.a.). : Mouton.");
    }

    #[test]
    fn test_empty_single_value_joins_to_empty() {
        let mut record = Record::new(EntryType::Misc, "x");
        record.set("note", "");
        assert_eq!(record.get_joined("note").unwrap(), "");
        assert!(record.get_all("note").is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
