//! The BibTeX entry type catalogue.
//!
//! BibTeX defines a fixed set of fourteen entry types ("genres"), each with
//! conventional required and optional fields. The catalogue here is purely
//! descriptive: nothing in the core checks a record's fields against its
//! genre. The [`FieldSpec`] table exists for callers that opt into
//! validation via [`crate::validation::RecordValidator`].
//!
//! Hand-curated input regularly carries genres outside the catalogue, so a
//! record's genre is a [`Genre`]: either a known [`EntryType`] or the raw
//! string found in the source text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fourteen standard BibTeX entry types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// An article from a journal or magazine.
    Article,
    /// A book with an explicit publisher.
    Book,
    /// A printed and bound work without a named publisher.
    Booklet,
    /// The same as `InProceedings`, included for Scribe compatibility.
    Conference,
    /// A part of a book, usually untitled; a chapter or a page range.
    InBook,
    /// A part of a book having its own title.
    InCollection,
    /// An article in a conference proceedings.
    InProceedings,
    /// Technical documentation.
    Manual,
    /// A Master's thesis.
    MastersThesis,
    /// For use when nothing else fits.
    Misc,
    /// A Ph.D. thesis.
    PhdThesis,
    /// The proceedings of a conference.
    Proceedings,
    /// A report published by a school or other institution.
    TechReport,
    /// A document with an author and title, but not formally published.
    Unpublished,
}

/// Conventional required and optional fields for an entry type.
///
/// A `required` entry may name alternatives separated by `/`, e.g.
/// `"author/editor"`: any one of the alternatives satisfies the
/// requirement. The table is documentation; only
/// [`crate::validation::RecordValidator`] consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Fields the entry type conventionally requires.
    pub required: &'static [&'static str],
    /// Fields the entry type conventionally allows.
    pub optional: &'static [&'static str],
}

impl EntryType {
    /// All entry types, in catalogue order.
    pub const ALL: [EntryType; 14] = [
        EntryType::Article,
        EntryType::Book,
        EntryType::Booklet,
        EntryType::Conference,
        EntryType::InBook,
        EntryType::InCollection,
        EntryType::InProceedings,
        EntryType::Manual,
        EntryType::MastersThesis,
        EntryType::Misc,
        EntryType::PhdThesis,
        EntryType::Proceedings,
        EntryType::TechReport,
        EntryType::Unpublished,
    ];

    /// Parse an entry type name, case-insensitively.
    ///
    /// Returns `None` for names outside the catalogue; callers that must
    /// keep such genres use [`Genre::from_name`] instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibrec::EntryType;
    ///
    /// assert_eq!(EntryType::parse("Book"), Some(EntryType::Book));
    /// assert_eq!(EntryType::parse("webpage"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "article" => Some(EntryType::Article),
            "book" => Some(EntryType::Book),
            "booklet" => Some(EntryType::Booklet),
            "conference" => Some(EntryType::Conference),
            "inbook" => Some(EntryType::InBook),
            "incollection" => Some(EntryType::InCollection),
            "inproceedings" => Some(EntryType::InProceedings),
            "manual" => Some(EntryType::Manual),
            "mastersthesis" => Some(EntryType::MastersThesis),
            "misc" => Some(EntryType::Misc),
            "phdthesis" => Some(EntryType::PhdThesis),
            "proceedings" => Some(EntryType::Proceedings),
            "techreport" => Some(EntryType::TechReport),
            "unpublished" => Some(EntryType::Unpublished),
            _ => None,
        }
    }

    /// The canonical lowercase name, as written in BibTeX source.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Article => "article",
            EntryType::Book => "book",
            EntryType::Booklet => "booklet",
            EntryType::Conference => "conference",
            EntryType::InBook => "inbook",
            EntryType::InCollection => "incollection",
            EntryType::InProceedings => "inproceedings",
            EntryType::Manual => "manual",
            EntryType::MastersThesis => "mastersthesis",
            EntryType::Misc => "misc",
            EntryType::PhdThesis => "phdthesis",
            EntryType::Proceedings => "proceedings",
            EntryType::TechReport => "techreport",
            EntryType::Unpublished => "unpublished",
        }
    }

    /// The conventional required/optional field table for this entry type.
    #[must_use]
    pub fn field_spec(self) -> FieldSpec {
        match self {
            EntryType::Article => FieldSpec {
                required: &["author", "title", "journal", "year"],
                optional: &["volume", "number", "pages", "month", "note", "key"],
            },
            EntryType::Book => FieldSpec {
                required: &["author/editor", "title", "publisher", "year"],
                optional: &[
                    "volume/number",
                    "series",
                    "address",
                    "edition",
                    "month",
                    "note",
                    "key",
                ],
            },
            EntryType::Booklet => FieldSpec {
                required: &["title"],
                optional: &[
                    "author",
                    "howpublished",
                    "address",
                    "month",
                    "year",
                    "note",
                    "key",
                ],
            },
            // Scribe compatibility alias
            EntryType::Conference | EntryType::InProceedings => FieldSpec {
                required: &["author", "title", "booktitle", "year"],
                optional: &[
                    "editor",
                    "volume/number",
                    "series",
                    "pages",
                    "address",
                    "month",
                    "organization",
                    "publisher",
                    "note",
                    "key",
                ],
            },
            EntryType::InBook => FieldSpec {
                required: &[
                    "author/editor",
                    "title",
                    "chapter/pages",
                    "publisher",
                    "year",
                ],
                optional: &[
                    "volume/number",
                    "series",
                    "type",
                    "address",
                    "edition",
                    "month",
                    "note",
                    "key",
                ],
            },
            EntryType::InCollection => FieldSpec {
                required: &["author", "title", "booktitle", "publisher", "year"],
                optional: &[
                    "editor",
                    "volume/number",
                    "series",
                    "type",
                    "chapter",
                    "pages",
                    "address",
                    "edition",
                    "month",
                    "note",
                    "key",
                ],
            },
            EntryType::Manual => FieldSpec {
                required: &["title"],
                optional: &[
                    "author",
                    "organization",
                    "address",
                    "edition",
                    "month",
                    "year",
                    "note",
                    "key",
                ],
            },
            EntryType::MastersThesis | EntryType::PhdThesis => FieldSpec {
                required: &["author", "title", "school", "year"],
                optional: &["type", "address", "month", "note", "key"],
            },
            EntryType::Misc => FieldSpec {
                required: &[],
                optional: &[
                    "author",
                    "title",
                    "howpublished",
                    "month",
                    "year",
                    "note",
                    "key",
                ],
            },
            EntryType::Proceedings => FieldSpec {
                required: &["title", "year"],
                optional: &[
                    "editor",
                    "volume/number",
                    "series",
                    "address",
                    "month",
                    "publisher",
                    "organization",
                    "note",
                    "key",
                ],
            },
            EntryType::TechReport => FieldSpec {
                required: &["author", "title", "institution", "year"],
                optional: &["type", "number", "address", "month", "note", "key"],
            },
            EntryType::Unpublished => FieldSpec {
                required: &["author", "title", "note"],
                optional: &["month", "year", "key"],
            },
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record's genre: a catalogued [`EntryType`] or a raw string.
///
/// Hand-exported bibliographies contain entry types outside the standard
/// catalogue (`@webpage`, `@mvbook`, ...). Those are preserved verbatim
/// rather than rejected or coerced, so a round trip through the serializer
/// reproduces them exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Genre {
    /// One of the fourteen standard entry types.
    Known(EntryType),
    /// An entry type outside the catalogue, kept as found.
    Raw(String),
}

impl Genre {
    /// Build a genre from an entry type name, falling back to raw storage
    /// for names outside the catalogue.
    ///
    /// The name is kept as given; the parser lowercases genres before
    /// calling this.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match EntryType::parse(name) {
            Some(entry_type) => Genre::Known(entry_type),
            None => Genre::Raw(name.to_string()),
        }
    }

    /// The genre name as written in BibTeX source.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Genre::Known(entry_type) => entry_type.as_str(),
            Genre::Raw(name) => name,
        }
    }

    /// The catalogued entry type, if this genre has one.
    #[must_use]
    pub fn entry_type(&self) -> Option<EntryType> {
        match self {
            Genre::Known(entry_type) => Some(*entry_type),
            Genre::Raw(_) => None,
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<EntryType> for Genre {
    fn from(entry_type: EntryType) -> Self {
        Genre::Known(entry_type)
    }
}

impl From<&str> for Genre {
    fn from(name: &str) -> Self {
        Genre::from_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(EntryType::parse("article"), Some(EntryType::Article));
        assert_eq!(EntryType::parse("ARTICLE"), Some(EntryType::Article));
        assert_eq!(EntryType::parse("PhdThesis"), Some(EntryType::PhdThesis));
        assert_eq!(EntryType::parse("webpage"), None);
    }

    #[test]
    fn test_parse_round_trips_canonical_names() {
        for entry_type in EntryType::ALL {
            assert_eq!(EntryType::parse(entry_type.as_str()), Some(entry_type));
        }
    }

    #[test]
    fn test_conference_shares_inproceedings_conventions() {
        // Scribe compatibility: its own variant, same field conventions.
        assert_ne!(EntryType::Conference, EntryType::InProceedings);
        assert_eq!(
            EntryType::Conference.field_spec(),
            EntryType::InProceedings.field_spec()
        );
    }

    #[test]
    fn test_misc_requires_nothing() {
        assert!(EntryType::Misc.field_spec().required.is_empty());
    }

    #[test]
    fn test_genre_from_name() {
        assert_eq!(Genre::from_name("book"), Genre::Known(EntryType::Book));
        assert_eq!(Genre::from_name("webpage"), Genre::Raw("webpage".to_string()));
        assert_eq!(Genre::from_name("webpage").name(), "webpage");
        assert_eq!(Genre::from_name("book").to_string(), "book");
    }

    #[test]
    fn test_genre_serde_shape() {
        let known = serde_json::to_string(&Genre::Known(EntryType::Book)).unwrap();
        let raw = serde_json::to_string(&Genre::Raw("webpage".to_string())).unwrap();
        assert_eq!(known, "\"book\"");
        assert_eq!(raw, "\"webpage\"");

        let back: Genre = serde_json::from_str("\"book\"").unwrap();
        assert_eq!(back, Genre::Known(EntryType::Book));
    }
}
