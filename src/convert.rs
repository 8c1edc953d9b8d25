//! External format conversion capability and format dispatch.
//!
//! Converting BibTeX to other bibliographic formats (EndNote, RIS, MODS) is
//! the job of an external converter, typically a process wrapper around a
//! conversion toolchain. The core stays free of process, file, and network
//! I/O, so the converter enters as an injected capability object
//! implementing [`Converter`]; it is never resolved through global state.
//!
//! A converter call is synchronous, fallible, and potentially slow. Callers
//! needing non-blocking behavior are responsible for offloading the call
//! themselves.
//!
//! # Examples
//!
//! ```
//! use bibrec::{Converter, Record, EntryType, Result};
//!
//! /// A converter that wraps its input, for illustration.
//! #[derive(Debug)]
//! struct Upcaser;
//!
//! impl Converter for Upcaser {
//!     fn convert(&self, text: &str, _from: &str, _to: Option<&str>) -> Result<String> {
//!         Ok(text.to_uppercase())
//!     }
//! }
//!
//! let record = Record::new(EntryType::Misc, "x");
//! let out = record.format("ris", &Upcaser).unwrap();
//! assert!(out.starts_with("@MISC{X,"));
//! ```

use crate::database::Database;
use crate::error::Result;
use crate::record::Record;

/// The source format label handed to converters for BibTeX text.
pub const BIBTEX_FORMAT: &str = "bib";

/// Capability for converting bibliographic text between formats.
///
/// Implementations signal failure with
/// [`BibError::ConversionError`](crate::BibError::ConversionError); a
/// failed conversion must never be masked as empty output.
pub trait Converter: std::fmt::Debug {
    /// Convert `text` from `from_format` to `to_format`.
    ///
    /// `to_format` is `None` when the caller relies on the converter's
    /// default target mapping (the MODS path does this).
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails.
    fn convert(&self, text: &str, from_format: &str, to_format: Option<&str>) -> Result<String>;
}

/// Shared format dispatch over serialized BibTeX text.
///
/// `"en"` and `"ris"` name their converter targets explicitly; `"mods"`
/// relies on the converter's default target. Every other kind, including
/// `"bib"`, is the canonical serialization itself.
fn dispatch(bibtex: String, kind: &str, converter: &dyn Converter) -> Result<String> {
    match kind {
        "en" => converter.convert(&bibtex, BIBTEX_FORMAT, Some("end")),
        "ris" => converter.convert(&bibtex, BIBTEX_FORMAT, Some("ris")),
        "mods" => converter.convert(&bibtex, BIBTEX_FORMAT, None),
        _ => Ok(bibtex),
    }
}

impl Record {
    /// Render this record in the requested format.
    ///
    /// `"text"` renders the human citation ([`Record::citation_text`]);
    /// `"en"`, `"ris"` and `"mods"` go through the converter; anything
    /// else, including `"bib"`, yields [`Record::to_bibtex`].
    ///
    /// # Errors
    ///
    /// Propagates the converter's error for the converter-backed kinds.
    pub fn format(&self, kind: &str, converter: &dyn Converter) -> Result<String> {
        if kind == "text" {
            return Ok(self.citation_text());
        }
        dispatch(self.to_bibtex(), kind, converter)
    }
}

impl Database {
    /// Render the whole database in the requested format.
    ///
    /// `"en"`, `"ris"` and `"mods"` go through the converter; anything
    /// else yields [`Database::to_bibtex`]. Databases have no citation
    /// text form.
    ///
    /// # Errors
    ///
    /// Propagates the converter's error for the converter-backed kinds.
    pub fn format(&self, kind: &str, converter: &dyn Converter) -> Result<String> {
        dispatch(self.to_bibtex(), kind, converter)
    }
}
