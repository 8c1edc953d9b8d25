//! Mapping external objects into records.
//!
//! Resource objects from a backing store (an ORM layer, a spreadsheet row)
//! carry bibliographic attributes under the conventional BibTeX field
//! names. This module is the single coupling point between such objects
//! and the record model: the store itself is out of scope, so the object
//! enters as a [`RecordObject`] capability, and [`Record::from_object`]
//! does the mapping.

use crate::entry_type::Genre;
use crate::fields::FIELDS;
use crate::record::{FieldValue, Record};
use std::collections::BTreeMap;

/// An external object exposing bibliographic attributes.
///
/// Implementors answer [`field`](Self::field) for each of the conventional
/// field names in [`crate::fields::FIELDS`]; names the object has no data
/// for return `None`.
pub trait RecordObject {
    /// The object's BibTeX entry type.
    fn bibtex_type(&self) -> Genre;

    /// The object's identifier, used as the citation key.
    fn id(&self) -> String;

    /// A prose description, used as the `title` fallback.
    fn description(&self) -> Option<String>;

    /// The value of the named bibliographic attribute, if any.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

impl Record {
    /// Build a record from an external object plus overrides.
    ///
    /// Each known field name with a non-empty value on the object becomes
    /// a record field; `overrides` are applied on top and may introduce
    /// names outside the conventional list. If nothing set a `title`, the
    /// object's description fills in. Fields end up in lexicographic
    /// order, unlike parsed records, which keep file order.
    pub fn from_object(
        obj: &dyn RecordObject,
        overrides: impl IntoIterator<Item = (String, FieldValue)>,
    ) -> Record {
        let mut data: BTreeMap<String, FieldValue> = BTreeMap::new();
        for field in FIELDS {
            if let Some(value) = obj.field(field) {
                if !value.is_empty() {
                    data.insert(field.to_string(), value);
                }
            }
        }
        for (field, value) in overrides {
            data.insert(field, value);
        }
        if !data.contains_key("title") {
            if let Some(description) = obj.description() {
                if !description.is_empty() {
                    data.insert("title".to_string(), FieldValue::from(description));
                }
            }
        }

        let mut record = Record::new(obj.bibtex_type(), obj.id());
        for (field, value) in data {
            record.set(field, value);
        }
        record
    }
}
