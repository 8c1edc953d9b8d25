//! Known BibTeX field names and field-specific join semantics.
//!
//! BibTeX has a conventional closed set of field names. The list here is used
//! by the object mapping boundary ([`crate::source`]) to decide which
//! attributes of an external object become record fields; the parser itself
//! accepts any field name it finds in the input.

/// The conventional BibTeX field names, in alphabetical order.
pub const FIELDS: [&str; 26] = [
    "address",
    "annote",
    "author",
    "booktitle",
    "chapter",
    "crossref",
    "edition",
    "editor",
    "eprint",
    "howpublished",
    "institution",
    "journal",
    "key",
    "month",
    "note",
    "number",
    "organization",
    "pages",
    "publisher",
    "school",
    "series",
    "title",
    "type",
    "url",
    "volume",
    "year",
];

/// Separator joining multiple names in `author` and `editor` fields.
pub const NAME_SEPARATOR: &str = " and ";

/// Separator joining multiple values in every other field.
pub const VALUE_SEPARATOR: &str = "; ";

/// The separator used to join (and split) multi-valued fields.
///
/// `author` and `editor` use the BibTeX name-list separator `" and "`;
/// every other field uses `"; "`.
///
/// # Examples
///
/// ```
/// use bibrec::fields::separator;
///
/// assert_eq!(separator("author"), " and ");
/// assert_eq!(separator("keywords"), "; ");
/// ```
#[must_use]
pub fn separator(field: &str) -> &'static str {
    match field {
        "author" | "editor" => NAME_SEPARATOR,
        _ => VALUE_SEPARATOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_for_names() {
        assert_eq!(separator("author"), " and ");
        assert_eq!(separator("editor"), " and ");
    }

    #[test]
    fn test_separator_default() {
        assert_eq!(separator("year"), "; ");
        assert_eq!(separator("not-a-bibtex-field"), "; ");
    }

    #[test]
    fn test_known_fields_are_sorted_and_unique() {
        let mut sorted = FIELDS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, FIELDS.to_vec());
    }
}
