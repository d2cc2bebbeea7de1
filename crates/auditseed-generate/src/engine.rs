use std::collections::BTreeMap;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use auditseed_core::{ColumnSpec, FieldType, validate_columns};

use crate::constraints::{CellOutcome, CompiledColumn};
use crate::errors::AugmentError;
use crate::generators::generate_value;
use crate::table::{RowOutcome, SeedTable};

/// Fixed default seed so repeated runs produce identical seed files.
pub const DEFAULT_SEED: u64 = 42;

/// Options for the augmentation engine.
#[derive(Debug, Clone)]
pub struct AugmentOptions {
    /// Seed for the run-scoped RNG.
    pub seed: u64,
    /// Instant that "recent" dates and datetimes are generated behind.
    pub reference: NaiveDateTime,
}

impl Default for AugmentOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            reference: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap_or_default()
                .and_hms_opt(0, 0, 0)
                .unwrap_or_default(),
        }
    }
}

/// Structured augmentation issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AugmentIssue {
    pub level: String,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

/// Report for an augmentation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AugmentReport {
    pub rows_processed: u64,
    pub rows_augmented: u64,
    pub rows_discarded: u64,
    pub columns_added: u64,
    pub warnings_by_code: BTreeMap<String, u64>,
    pub warnings: Vec<AugmentIssue>,
}

impl AugmentReport {
    pub fn record_warning(&mut self, issue: AugmentIssue) {
        *self.warnings_by_code.entry(issue.code.clone()).or_insert(0) += 1;
        self.warnings.push(issue);
    }
}

/// Entry point for augmenting a seed-data load file with new columns.
#[derive(Debug, Clone, Default)]
pub struct AugmentEngine {
    options: AugmentOptions,
}

impl AugmentEngine {
    pub fn new(options: AugmentOptions) -> Self {
        Self { options }
    }

    /// Read the seed file, augment it, and overwrite it in place.
    ///
    /// Read and write failures are fatal and not retried; validation issues
    /// inside the table resolve locally via row discard and surface in the
    /// report.
    pub fn run(&self, path: &Path, columns: &[ColumnSpec]) -> Result<AugmentReport, AugmentError> {
        let text = std::fs::read_to_string(path)?;
        let (output, report) = self.augment(&text, columns)?;
        std::fs::write(path, output)?;
        Ok(report)
    }

    /// Augment seed-file text in memory.
    ///
    /// The header row gains one cell per column spec, in order; every data
    /// row gains one generated, constraint-checked cell per column spec. A
    /// rejected row serializes as an empty line.
    pub fn augment(
        &self,
        text: &str,
        columns: &[ColumnSpec],
    ) -> Result<(String, AugmentReport), AugmentError> {
        validate_columns(columns)?;
        let compiled = columns
            .iter()
            .map(CompiledColumn::compile)
            .collect::<Result<Vec<_>, _>>()?;

        let mut table = SeedTable::parse(text);
        let mut report = AugmentReport::default();
        let mut rng = ChaCha8Rng::seed_from_u64(self.options.seed);

        info!(
            seed = self.options.seed,
            columns = columns.len(),
            data_rows = table.data_row_count(),
            "augmentation started"
        );

        if let Some(header) = table.rows.first_mut() {
            for column in &compiled {
                header.push(column.spec.database_column.clone());
                report.columns_added += 1;
            }
        }

        for row_index in 1..table.rows.len() {
            report.rows_processed += 1;
            let outcome = augment_row(
                &table.rows[row_index],
                &compiled,
                self.options.reference,
                row_index,
                &mut rng,
                &mut report,
            );
            match outcome {
                RowOutcome::Keep(cells) => {
                    table.rows[row_index] = cells;
                    report.rows_augmented += 1;
                }
                RowOutcome::Discard => {
                    table.rows[row_index] = Vec::new();
                    report.rows_discarded += 1;
                }
            }
        }

        info!(
            rows_augmented = report.rows_augmented,
            rows_discarded = report.rows_discarded,
            "augmentation finished"
        );

        Ok((table.serialize(), report))
    }
}

fn augment_row(
    row: &[String],
    columns: &[CompiledColumn],
    reference: NaiveDateTime,
    row_index: usize,
    rng: &mut ChaCha8Rng,
    report: &mut AugmentReport,
) -> RowOutcome {
    let mut cells = row.to_vec();

    for column in columns {
        let field_type = column.spec.field_type();
        if field_type == FieldType::Unknown {
            warn!(
                row = row_index,
                column = %column.spec.database_column,
                field_type = %column.spec.field_type,
                "no generation rule for field type"
            );
            report.record_warning(AugmentIssue {
                level: "warning".to_string(),
                code: "unrecognized_field_type".to_string(),
                message: format!(
                    "no generation rule for field type '{}'",
                    column.spec.field_type
                ),
                row: Some(row_index as u64),
                column: Some(column.spec.database_column.clone()),
            });
        }

        let raw = generate_value(&field_type, &column.spec.validate_rules, reference, rng);
        match column.enforce(raw.render(), rng) {
            CellOutcome::Value(value) => cells.push(value),
            CellOutcome::Reject => {
                warn!(
                    row = row_index,
                    column = %column.spec.database_column,
                    "required value unsatisfiable, discarding row"
                );
                report.record_warning(AugmentIssue {
                    level: "warning".to_string(),
                    code: "required_row_discarded".to_string(),
                    message: format!(
                        "required column '{}' produced no satisfiable value",
                        column.spec.database_column
                    ),
                    row: Some(row_index as u64),
                    column: Some(column.spec.database_column.clone()),
                });
                return RowOutcome::Discard;
            }
        }
    }

    RowOutcome::Keep(cells)
}
