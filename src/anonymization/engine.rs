//! Main pseudonymization engine
//!
//! This module provides the [`PseudonymEngine`] that composes the seed
//! builder and the deterministic value generator into per-field
//! anonymizers, and applies them column-wise over a [`RecordSet`].
//!
//! # Examples
//!
//! ```
//! use secrecy::SecretString;
//! use veil::anonymization::PseudonymEngine;
//!
//! let engine = PseudonymEngine::new(SecretString::new("A!Ob3#".to_string()));
//!
//! let once = engine.anonymize_first_name("David");
//! let twice = engine.anonymize_first_name("  DAVID ");
//! assert_eq!(once, twice);
//! ```

use crate::anonymization::corpus::{FieldCategory, ValueCorpus};
use crate::anonymization::generator::ValueGenerator;
use crate::anonymization::seed::build_seed;
use crate::domain::{
    RecordSet, Result, COLUMN_ADDRESS, COLUMN_FIRST_NAME, COLUMN_LAST_NAME,
};
use secrecy::SecretString;

/// Deterministic pseudonymization engine
///
/// Holds the run secret and a [`ValueGenerator`]. Every `anonymize_*`
/// call is a pure function of `(secret, original)`: the same pair
/// always yields the same replacement, within and across runs, for as
/// long as the corpus is unchanged. There is no persisted mapping —
/// replacements are recomputed on every call.
///
/// # Thread Safety
///
/// The engine takes `&self` everywhere and owns no mutable state, so it
/// can be shared across threads without synchronization.
pub struct PseudonymEngine {
    secret: SecretString,
    generator: ValueGenerator,
}

impl PseudonymEngine {
    /// Create an engine over the default faker-backed corpus
    pub fn new(secret: SecretString) -> Self {
        Self {
            secret,
            generator: ValueGenerator::new(),
        }
    }

    /// Create an engine over a caller-supplied corpus
    pub fn with_corpus(secret: SecretString, corpus: Box<dyn ValueCorpus>) -> Self {
        Self {
            secret,
            generator: ValueGenerator::with_corpus(corpus),
        }
    }

    /// Replace a first name with its deterministic pseudonym
    pub fn anonymize_first_name(&self, original: &str) -> String {
        self.generate(FieldCategory::FirstName, original)
    }

    /// Replace a last name with its deterministic pseudonym
    pub fn anonymize_last_name(&self, original: &str) -> String {
        self.generate(FieldCategory::LastName, original)
    }

    /// Replace an address with its deterministic pseudonym
    ///
    /// Generated addresses can span multiple lines; embedded line
    /// breaks are flattened to single spaces so the value fits one
    /// delimited-text field.
    pub fn anonymize_address(&self, original: &str) -> String {
        flatten_lines(&self.generate(FieldCategory::Address, original))
    }

    /// Anonymize the PII columns of a record set in place
    ///
    /// Rewrites `first_name`, `last_name`, and `address` in every row
    /// and leaves all other columns (including `date_of_birth`)
    /// untouched. Row order, row count, and the column set are
    /// preserved. Fails before touching any row if a required column
    /// is missing; there is no partial-failure mode.
    pub fn anonymize_records(&self, records: &mut RecordSet) -> Result<()> {
        let first_name = records.require_column(COLUMN_FIRST_NAME)?;
        let last_name = records.require_column(COLUMN_LAST_NAME)?;
        let address = records.require_column(COLUMN_ADDRESS)?;

        tracing::debug!(rows = records.row_count(), "Anonymizing record set");

        records.rewrite_column(first_name, |v| self.anonymize_first_name(v))?;
        records.rewrite_column(last_name, |v| self.anonymize_last_name(v))?;
        records.rewrite_column(address, |v| self.anonymize_address(v))?;

        Ok(())
    }

    fn generate(&self, category: FieldCategory, original: &str) -> String {
        self.generator
            .generate(category, &build_seed(&self.secret, original))
    }
}

/// Collapse embedded line breaks into single spaces
fn flatten_lines(value: &str) -> String {
    value
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}
