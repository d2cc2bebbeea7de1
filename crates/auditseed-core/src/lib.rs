//! Core contracts for auditseed.
//!
//! This crate defines the declarative column model consumed by the
//! augmentation engine, plus validation helpers and the shared error type.

pub mod column;
pub mod error;
pub mod validation;

pub use column::{ColumnSpec, FieldType, ValidationRules};
pub use error::{Error, Result};
pub use validation::validate_columns;

/// Delimiter used by seed-data load files.
pub const CELL_DELIMITER: &str = ";";
