//! Seed-data augmentation engine for auditseed.
//!
//! This crate consumes column specs + a `;`-delimited load file to append
//! deterministic, constraint-satisfying fake values to every data row.

pub mod constraints;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod table;

pub use engine::{AugmentEngine, AugmentIssue, AugmentOptions, AugmentReport, DEFAULT_SEED};
pub use errors::AugmentError;
pub use table::{RowOutcome, SeedTable};
