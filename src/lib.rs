#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # bibrec: BibTeX records for Rust
//!
//! A library for parsing hand-curated BibTeX text into structured records,
//! holding collections of records with stable identity, and serializing
//! them back to canonical BibTeX or handing them to an external format
//! converter.
//!
//! ## Quick Start
//!
//! ### Parsing records
//!
//! ```
//! use bibrec::Database;
//!
//! let db = Database::from_text(
//!     "@book{knuth84,\n  author = {Donald E. Knuth},\n  year = {1984}\n}\n",
//! );
//! assert_eq!(db.len(), 1);
//!
//! let record = db.get_by_id("knuth84")?;
//! assert_eq!(record.get_joined("author")?, "Donald E. Knuth");
//! # Ok::<(), bibrec::BibError>(())
//! ```
//!
//! ### Creating and serializing records
//!
//! ```
//! use bibrec::{EntryType, Record};
//!
//! let mut record = Record::new(EntryType::Article, "doe2001");
//! record.set("author", vec!["Jane Doe".to_string(), "Max Muster".to_string()]);
//! record.set("year", "2001");
//!
//! assert!(record.to_bibtex().contains("author = {Jane Doe and Max Muster}"));
//! ```
//!
//! ## Modules
//!
//! - [`record`] — Core record structures (`Record`, `FieldValue`)
//! - [`parser`] — Line-oriented parsing of BibTeX text
//! - [`database`] — Ordered record collections with id lookup
//! - [`entry_type`] — The entry type catalogue (`EntryType`, `Genre`)
//! - [`fields`] — Known field names and join separators
//! - [`convert`] — External converter capability and format dispatch
//! - [`source`] — Mapping external objects into records
//! - [`validation`] — Opt-in required-field checks
//! - [`error`] — Error types and result type
//!
//! ## Design
//!
//! The parser targets irregular, hand-exported bibliographies where every
//! field fits on one line: malformed pieces are skipped, never fatal.
//! Records preserve field order and multiplicity losslessly, so parsing
//! and serializing round-trip. Conversion to other bibliographic formats
//! (EndNote, RIS, MODS) is delegated to an injected [`Converter`]
//! capability; the library itself performs no process, file, or network
//! I/O.

pub mod convert;
pub mod database;
pub mod entry_type;
pub mod error;
pub mod fields;
pub mod parser;
/// Core record structures (`Record`, `FieldValue`)
pub mod record;
pub mod source;
pub mod validation;

pub use convert::{Converter, BIBTEX_FORMAT};
pub use database::Database;
pub use entry_type::{EntryType, FieldSpec, Genre};
pub use error::{BibError, Result};
pub use parser::{parse_many, parse_one};
pub use record::{FieldValue, Record};
pub use source::RecordObject;
pub use validation::RecordValidator;
