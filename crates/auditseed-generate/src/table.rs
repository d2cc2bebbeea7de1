use auditseed_core::CELL_DELIMITER;

/// Parsed seed-data load file.
///
/// Row 0 is the header. Parsing stops at the first empty line: that line and
/// everything after it is kept verbatim in `tail` and written back
/// unchanged, which also preserves a trailing newline byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedTable {
    pub rows: Vec<Vec<String>>,
    pub tail: Vec<String>,
}

/// Result of augmenting one data row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Keep(Vec<String>),
    /// An unsatisfiable required column collapses the whole row; it
    /// serializes as an empty line.
    Discard,
}

impl SeedTable {
    pub fn parse(text: &str) -> SeedTable {
        let mut rows = Vec::new();
        let mut tail = Vec::new();
        let mut lines = text.split('\n');

        for line in lines.by_ref() {
            if line.is_empty() {
                tail.push(String::new());
                break;
            }
            rows.push(
                line.split(CELL_DELIMITER)
                    .map(str::to_string)
                    .collect::<Vec<_>>(),
            );
        }
        tail.extend(lines.map(str::to_string));

        SeedTable { rows, tail }
    }

    pub fn serialize(&self) -> String {
        let mut lines: Vec<String> = self
            .rows
            .iter()
            .map(|row| row.join(CELL_DELIMITER))
            .collect();
        lines.extend(self.tail.iter().cloned());
        lines.join("\n")
    }

    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}
