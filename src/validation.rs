//! Opt-in validation of records against entry type conventions.
//!
//! The core is deliberately permissive: a parsed record is never checked
//! against its genre's required fields, because hand-curated exports are
//! full of incomplete entries that are still worth keeping. Callers that
//! do want the check (import pipelines, editors) use [`RecordValidator`]
//! explicitly.

use crate::entry_type::Genre;
use crate::error::{BibError, Result};
use crate::record::Record;

/// Validator checking records against their entry type's [`FieldSpec`].
///
/// [`FieldSpec`]: crate::entry_type::FieldSpec
#[derive(Debug)]
pub struct RecordValidator;

impl RecordValidator {
    /// The required field groups the record does not satisfy.
    ///
    /// A group naming alternatives (`"author/editor"`) is satisfied by any
    /// one of them; a field counts as present when it has a non-empty
    /// value. Records with a genre outside the catalogue have no
    /// conventions and nothing is required of them.
    #[must_use]
    pub fn missing_required(record: &Record) -> Vec<&'static str> {
        let spec = match &record.genre {
            Genre::Known(entry_type) => entry_type.field_spec(),
            Genre::Raw(_) => return Vec::new(),
        };
        spec.required
            .iter()
            .copied()
            .filter(|group| {
                !group
                    .split('/')
                    .any(|alternative| !record.get_all(alternative).is_empty())
            })
            .collect()
    }

    /// Check a record against its entry type conventions.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::MissingFields`] naming the unsatisfied groups.
    pub fn validate(record: &Record) -> Result<()> {
        let missing = Self::missing_required(record);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(BibError::MissingFields(format!(
                "{}: {}",
                record.id,
                missing.join(", ")
            )))
        }
    }
}
