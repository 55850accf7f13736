//! # Veil - deterministic CSV pseudonymization
//!
//! Veil replaces the personally identifying columns of a CSV file
//! (`first_name`, `last_name`, `address`) with plausible synthetic
//! values while leaving every other column (`date_of_birth` included)
//! untouched. The replacement for a value is a pure function of a
//! run secret and the normalized original, so repeated exports of the
//! same underlying entity stay joinable across anonymized datasets.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`anonymization`] - Seeding scheme, value generator, and the
//!   record-set transform (the core of the tool)
//! - [`domain`] - Record model and error types
//! - [`io`] - CSV reading/writing and demo-input generation
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use secrecy::SecretString;
//! use veil::anonymization::PseudonymEngine;
//!
//! fn main() -> veil::domain::Result<()> {
//!     let mut records = veil::io::csv::read_records(Path::new("patients.csv"))?;
//!
//!     let engine = PseudonymEngine::new(SecretString::new("A!Ob3#".to_string()));
//!     engine.anonymize_records(&mut records)?;
//!
//!     veil::io::csv::write_records(&records, Path::new("out_patients.csv"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **Idempotency**: the same `(secret, value)` pair always produces
//!   the same output, within and across runs, for a fixed corpus.
//! - **Normalization invariance**: values differing only in case or
//!   surrounding whitespace map to the same replacement (documented
//!   behavior of the seed contract, see [`anonymization::seed`]).
//! - **Shape preservation**: row count, row order, and the column set
//!   survive the transform unchanged.
//!
//! Veil is not a formal privacy mechanism: it offers no differential
//! privacy or k-anonymity, and anyone holding the secret can rebuild
//! the mapping for a known original value.

pub mod anonymization;
pub mod cli;
pub mod domain;
pub mod io;
pub mod logging;
