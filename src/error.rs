//! Error types for BibTeX operations.
//!
//! This module provides the [`BibError`] type for all bibrec library operations
//! and the [`Result`] convenience type.
//!
//! Parser-level malformations are deliberately *not* represented here: the
//! parser tolerates irregular, hand-exported input by skipping what it cannot
//! read. Errors are reserved for strict accessors, collection lookups, the
//! external converter, and opt-in validation.

use thiserror::Error;

/// Error type for all bibrec library operations.
#[derive(Error, Debug)]
pub enum BibError {
    /// Strict field access on a field the record does not carry.
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// Database lookup by citation id found no matching record.
    #[error("No record with id: {0}")]
    KeyNotFound(String),

    /// Database lookup by position was out of bounds.
    #[error("Record index out of range: {0}")]
    IndexOutOfRange(usize),

    /// The external format converter failed.
    #[error("Conversion error: {0}")]
    ConversionError(String),

    /// A record is missing fields its entry type requires (opt-in validation).
    #[error("Missing required fields: {0}")]
    MissingFields(String),
}

/// Convenience type alias for [`std::result::Result`] with [`BibError`].
pub type Result<T> = std::result::Result<T, BibError>;
