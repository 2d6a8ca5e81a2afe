//! notelist-core: Domain types and request validation for the notelist service
//!
//! This crate defines:
//! - The external (wire) note shape with camelCase JSON fields
//! - The strict write-input shapes (`NoteDraft`, `NoteUpdate`) that
//!   require exactly the declared field set, nothing more or less
//! - The sort-key and direction whitelists used to build ORDER BY
//!   clauses without ever interpolating caller input
//! - List identifier validation
//!
//! Everything here is pure: no I/O, no database types.

pub mod sort;
pub mod types;

pub use sort::{SortDirection, SortKey};
pub use types::{Note, NoteDraft, NoteUpdate, list_id_is_valid};
