use std::fs;

use auditseed_core::{ColumnSpec, ValidationRules};
use auditseed_generate::{AugmentEngine, AugmentOptions};

fn varchar_created_by() -> ColumnSpec {
    ColumnSpec {
        database_column: "created_by".to_string(),
        field_type: "varchar".to_string(),
        validate_rules: ValidationRules {
            required: true,
            max_length: Some(50),
            ..Default::default()
        },
    }
}

fn column(name: &str, field_type: &str, rules: ValidationRules) -> ColumnSpec {
    ColumnSpec {
        database_column: name.to_string(),
        field_type: field_type.to_string(),
        validate_rules: rules,
    }
}

#[test]
fn appends_header_and_word_cells() {
    let engine = AugmentEngine::default();
    let (output, report) = engine
        .augment("id;name\n1;Alice\n2;Bob\n", &[varchar_created_by()])
        .expect("augment");

    let lines: Vec<&str> = output.split('\n').collect();
    assert_eq!(lines[0], "id;name;created_by");
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], "");

    for line in &lines[1..3] {
        let cells: Vec<&str> = line.split(';').collect();
        assert_eq!(cells.len(), 3);
        assert!(!cells[2].is_empty());
        assert!(cells[2].len() <= 50);
    }

    assert_eq!(report.columns_added, 1);
    assert_eq!(report.rows_processed, 2);
    assert_eq!(report.rows_augmented, 2);
    assert_eq!(report.rows_discarded, 0);
    assert!(report.warnings.is_empty());
}

#[test]
fn header_gains_one_cell_per_column() {
    let columns = vec![
        column("a", "integer", ValidationRules::default()),
        column("b", "boolean", ValidationRules::default()),
        column("c", "uuid", ValidationRules::default()),
    ];
    let engine = AugmentEngine::default();
    let (output, _) = engine.augment("id\n", &columns).expect("augment");
    assert_eq!(output, "id;a;b;c\n");
}

#[test]
fn boolean_cell_is_literal_true_or_false() {
    let engine = AugmentEngine::default();
    let (output, _) = engine
        .augment(
            "id\n1\n",
            &[column("flag", "boolean", ValidationRules::default())],
        )
        .expect("augment");

    let cell = output
        .split('\n')
        .nth(1)
        .and_then(|line| line.split(';').nth(1))
        .expect("generated cell");
    assert!(cell == "true" || cell == "false");
}

#[test]
fn header_only_file_gains_no_data_rows() {
    let engine = AugmentEngine::default();
    let (output, report) = engine
        .augment("id;name\n", &[varchar_created_by()])
        .expect("augment");
    assert_eq!(output, "id;name;created_by\n");
    assert_eq!(report.rows_processed, 0);
}

#[test]
fn unsatisfiable_required_pattern_collapses_rows() {
    // no 2-character string matches a 3-digit pattern
    let spec = column(
        "code",
        "varchar",
        ValidationRules {
            required: true,
            pattern: Some("^\\d{3}$".to_string()),
            max_length: Some(2),
            ..Default::default()
        },
    );
    let engine = AugmentEngine::default();
    let (output, report) = engine
        .augment("id;name\n1;Alice\n2;Bob\n", &[spec])
        .expect("augment");

    assert_eq!(output, "id;name;code\n\n\n");
    assert_eq!(report.rows_discarded, 2);
    assert_eq!(report.rows_augmented, 0);
    assert_eq!(
        report.warnings_by_code.get("required_row_discarded"),
        Some(&2)
    );
}

#[test]
fn pattern_without_length_conflict_satisfies_itself() {
    let spec = column(
        "code",
        "varchar",
        ValidationRules {
            required: true,
            pattern: Some("^[A-Z]{2}-\\d{4}$".to_string()),
            ..Default::default()
        },
    );
    let engine = AugmentEngine::default();
    let (output, report) = engine
        .augment("id\n1\n2\n3\n", &[spec])
        .expect("augment");

    assert_eq!(report.rows_discarded, 0);
    let verifier = regex::Regex::new("^[A-Z]{2}-\\d{4}$").unwrap();
    for line in output.split('\n').skip(1).filter(|line| !line.is_empty()) {
        let cell = line.split(';').nth(1).expect("generated cell");
        assert!(verifier.is_match(cell), "cell {cell:?} should match pattern");
    }
}

#[test]
fn unknown_field_type_appends_empty_cell_and_warns() {
    let spec = column("payload", "blob", ValidationRules::default());
    let engine = AugmentEngine::default();
    let (output, report) = engine.augment("id\n1\n", &[spec]).expect("augment");

    assert_eq!(output, "id;payload\n1;\n");
    assert_eq!(
        report.warnings_by_code.get("unrecognized_field_type"),
        Some(&1)
    );
}

#[test]
fn numeric_bounds_are_respected() {
    let spec = column(
        "amount",
        "integer",
        ValidationRules {
            min_value: Some(100.0),
            max_value: Some(200.0),
            ..Default::default()
        },
    );
    let engine = AugmentEngine::default();
    let rows: String = (1..=50).map(|n| format!("{n}\n")).collect();
    let (output, _) = engine
        .augment(&format!("id\n{rows}"), &[spec])
        .expect("augment");

    for line in output.split('\n').skip(1).filter(|line| !line.is_empty()) {
        let cell = line.split(';').nth(1).expect("generated cell");
        let value: i64 = cell.parse().expect("integer cell");
        assert!((100..=200).contains(&value));
    }
}

#[test]
fn min_length_pads_final_value() {
    let spec = column(
        "code",
        "varchar",
        ValidationRules {
            min_length: Some(30),
            ..Default::default()
        },
    );
    let engine = AugmentEngine::default();
    let (output, _) = engine.augment("id\n1\n", &[spec]).expect("augment");
    let cell = output
        .split('\n')
        .nth(1)
        .and_then(|line| line.split(';').nth(1))
        .expect("generated cell");
    assert!(cell.len() >= 30);
    assert!(cell.ends_with('X'));
}

#[test]
fn identically_seeded_runs_are_byte_identical() {
    let columns = vec![
        varchar_created_by(),
        column("flag", "boolean", ValidationRules::default()),
        column("when", "datetime", ValidationRules::default()),
        column("ref", "uuid", ValidationRules::default()),
    ];
    let input = "id;name\n1;Alice\n2;Bob\n3;Carol\n";

    let (first, _) = AugmentEngine::default()
        .augment(input, &columns)
        .expect("first run");
    let (second, _) = AugmentEngine::default()
        .augment(input, &columns)
        .expect("second run");
    assert_eq!(first, second);

    let mut options = AugmentOptions::default();
    options.seed = 7;
    let (other_seed, _) = AugmentEngine::new(options)
        .augment(input, &columns)
        .expect("reseeded run");
    assert_ne!(first, other_seed);
}

#[test]
fn content_after_blank_line_is_preserved_verbatim() {
    let input = "id;name\n1;Alice\n\n2;Bob\n";
    let engine = AugmentEngine::default();
    let (output, report) = engine.augment(input, &[varchar_created_by()]).expect("augment");

    let lines: Vec<&str> = output.split('\n').collect();
    assert_eq!(lines[0], "id;name;created_by");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "2;Bob");
    assert_eq!(report.rows_processed, 1);
}

#[test]
fn run_overwrites_file_in_place() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("entity.csv");
    fs::write(&path, "id;name\n1;Alice\n2;Bob\n").expect("write seed file");

    let engine = AugmentEngine::default();
    let report = engine.run(&path, &[varchar_created_by()]).expect("run");
    assert_eq!(report.rows_augmented, 2);

    let written = fs::read_to_string(&path).expect("read back");
    assert!(written.starts_with("id;name;created_by\n"));
    assert!(written.ends_with('\n'));

    let (expected, _) = AugmentEngine::default()
        .augment("id;name\n1;Alice\n2;Bob\n", &[varchar_created_by()])
        .expect("in-memory run");
    assert_eq!(written, expected);
}

#[test]
fn missing_file_is_fatal_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.csv");
    let engine = AugmentEngine::default();
    let err = engine.run(&path, &[varchar_created_by()]).unwrap_err();
    assert!(matches!(err, auditseed_generate::AugmentError::Io(_)));
}

#[test]
fn duplicate_columns_are_rejected_before_any_work() {
    let engine = AugmentEngine::default();
    let err = engine
        .augment("id\n1\n", &[varchar_created_by(), varchar_created_by()])
        .unwrap_err();
    assert!(matches!(err, auditseed_generate::AugmentError::Spec(_)));
}
