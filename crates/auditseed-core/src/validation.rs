use std::collections::BTreeSet;

use crate::column::ColumnSpec;
use crate::error::{Error, Result};

/// Validate internal consistency of a column spec list.
///
/// This checks:
/// - non-empty column names
/// - duplicate column names
/// - numeric bounds ordering (`minValue <= maxValue`)
///
/// A `maxLength` smaller than `minLength` is deliberately legal: truncation
/// runs before padding, so the padded minimum wins.
pub fn validate_columns(columns: &[ColumnSpec]) -> Result<()> {
    let mut names = BTreeSet::new();

    for column in columns {
        if column.database_column.is_empty() {
            return Err(Error::InvalidColumn(
                "databaseColumn must not be empty".to_string(),
            ));
        }

        if !names.insert(column.database_column.as_str()) {
            return Err(Error::InvalidColumn(format!(
                "duplicate column name: {}",
                column.database_column
            )));
        }

        if let (Some(min), Some(max)) = (
            column.validate_rules.min_value,
            column.validate_rules.max_value,
        ) {
            if min > max {
                return Err(Error::InvalidColumn(format!(
                    "{}: minValue must be <= maxValue",
                    column.database_column
                )));
            }
        }
    }

    Ok(())
}
