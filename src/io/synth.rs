//! Synthetic demo-input generation
//!
//! When the tool is invoked without an input file it fabricates one:
//! a CSV of faker-generated names, single-line addresses, and
//! `DD/MM/YYYY` dates of birth. Generation is intentionally
//! non-deterministic; only the pseudonymization step is seeded.

use crate::anonymization::{FakerCorpus, FieldCategory, ValueCorpus};
use crate::domain::{RecordSet, Result};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

/// Generate a demo input CSV under `dir` and return its path
///
/// The filename carries a timestamp (`input_<yymmdd_HHMMSS>.csv`) so
/// repeated runs don't clobber each other.
pub fn generate_source_csv(dir: &Path, record_count: usize) -> Result<PathBuf> {
    let filename = format!(
        "input_{}.csv",
        chrono::Local::now().format("%y%m%d_%H%M%S")
    );
    let path = dir.join(filename);

    let records = synthetic_records(record_count)?;
    super::csv::write_records(&records, &path)?;

    tracing::info!(path = %path.display(), rows = record_count, "Generated demo input");
    Ok(path)
}

/// Build `record_count` synthetic rows in the recognized column layout
pub fn synthetic_records(record_count: usize) -> Result<RecordSet> {
    let corpus = FakerCorpus::new();
    let mut rng = StdRng::from_entropy();

    let rows = (0..record_count)
        .map(|_| {
            vec![
                corpus.draw(FieldCategory::FirstName, &mut rng),
                corpus.draw(FieldCategory::LastName, &mut rng),
                corpus
                    .draw(FieldCategory::Address, &mut rng)
                    .replace(['\n', '\r'], " "),
                random_date_of_birth(&mut rng),
            ]
        })
        .collect();

    RecordSet::new(
        vec![
            "first_name".to_string(),
            "last_name".to_string(),
            "address".to_string(),
            "date_of_birth".to_string(),
        ],
        rows,
    )
}

/// Random date of birth formatted `DD/MM/YYYY`
fn random_date_of_birth(rng: &mut StdRng) -> String {
    let year = rng.gen_range(1940..=2005);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
    date.format("%d/%m/%Y").to_string()
}
