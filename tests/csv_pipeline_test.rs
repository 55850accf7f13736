//! End-to-end pipeline tests: read → anonymize → write → re-read

use secrecy::SecretString;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use veil::anonymization::PseudonymEngine;
use veil::domain::VeilError;
use veil::io;

const SAMPLE: &str = "\
first_name,last_name,address,date_of_birth
David,Jone,1 George st Sydney NSW 2112,05/09/1991
John,Lee,\"32 Charles Road, Kingsford, NSW, 2008\",23/11/1980
";

fn run_pipeline(secret: &str, input: &Path, output: &Path) {
    let mut records = io::csv::read_records(input).unwrap();
    let engine = PseudonymEngine::new(SecretString::new(secret.to_string()));
    engine.anonymize_records(&mut records).unwrap();
    io::csv::write_records(&records, output).unwrap();
}

#[test]
fn pipeline_is_idempotent_across_runs() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.csv");
    let first_output = dir.path().join("out_1.csv");
    let second_output = dir.path().join("out_2.csv");
    fs::write(&input, SAMPLE).unwrap();

    run_pipeline("A!Ob3#", &input, &first_output);
    run_pipeline("A!Ob3#", &input, &second_output);

    assert_eq!(
        fs::read_to_string(&first_output).unwrap(),
        fs::read_to_string(&second_output).unwrap()
    );
}

#[test]
fn pipeline_preserves_shape_and_passthrough_column() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, SAMPLE).unwrap();

    run_pipeline("A!Ob3#", &input, &output);

    let original = io::csv::read_records(&input).unwrap();
    let anonymized = io::csv::read_records(&output).unwrap();

    assert_eq!(anonymized.row_count(), original.row_count());
    assert_eq!(anonymized.columns(), original.columns());
    assert_eq!(anonymized.value(0, 3), Some("05/09/1991"));
    assert_eq!(anonymized.value(1, 3), Some("23/11/1980"));
}

#[test]
fn anonymized_output_contains_no_multiline_fields() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, SAMPLE).unwrap();

    run_pipeline("A!Ob3#", &input, &output);

    let anonymized = io::csv::read_records(&output).unwrap();
    let address = anonymized.column_index("address").unwrap();
    for row in 0..anonymized.row_count() {
        assert!(!anonymized.value(row, address).unwrap().contains('\n'));
    }
}

#[test]
fn different_secrets_produce_different_outputs() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.csv");
    let out_a = dir.path().join("out_a.csv");
    let out_b = dir.path().join("out_b.csv");
    fs::write(&input, SAMPLE).unwrap();

    run_pipeline("secret-one", &input, &out_a);
    run_pipeline("secret-two", &input, &out_b);

    assert_ne!(
        fs::read_to_string(&out_a).unwrap(),
        fs::read_to_string(&out_b).unwrap()
    );
}

#[test]
fn synthetic_input_feeds_the_pipeline() {
    let dir = TempDir::new().unwrap();
    let input = io::synth::generate_source_csv(dir.path(), 50).unwrap();
    let output = dir.path().join("out.csv");

    run_pipeline("A!Ob3#", &input, &output);

    let anonymized = io::csv::read_records(&output).unwrap();
    assert_eq!(anonymized.row_count(), 50);
}

#[test]
fn missing_required_column_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "first_name,last_name,dob\nDavid,Jone,05/09/1991\n").unwrap();

    let err = io::csv::read_records(&input).unwrap_err();
    assert!(matches!(err, VeilError::MissingColumn(_)));
    assert!(!output.exists());
}
