//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Veil using clap.
//!
//! Accepted invocations:
//! - `veil <secret> <input> <output>` — anonymize `input` into `output`
//! - `veil <secret>` — generate a demo input file, derive the output
//!   path by prefixing the input filename with `out_`
//! - `veil` — additionally generate a random secret
//!
//! Giving an input without an output is a usage error.

use crate::anonymization::PseudonymEngine;
use crate::domain::VeilError;
use crate::io;
use clap::Parser;
use rand::Rng;
use secrecy::SecretString;
use std::path::{Path, PathBuf};

/// Usage text shown on argument and input-format errors
pub const USAGE: &str = "\
Usage: veil [SECRET] [INPUT] [OUTPUT]

  SECRET         secret used to derive pseudonym seeds; a random one is
                 generated when omitted
  INPUT, OUTPUT  input and output CSV paths, both or neither; when omitted
                 a demo input is generated and the output path is derived
                 by prefixing the input filename with 'out_'

The input CSV must carry the columns first_name, last_name, address and
date_of_birth (header names are case- and whitespace-insensitive).";

/// Characters a generated secret is drawn from (letters, digits, punctuation)
const SECRET_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789\
      !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Length of a generated secret
const SECRET_LEN: usize = 5;

/// Default number of rows in a generated demo input
const DEFAULT_RECORD_COUNT: usize = 1000;

/// Veil - deterministic CSV pseudonymization
#[derive(Parser, Debug)]
#[command(name = "veil")]
#[command(version, about, long_about = None)]
#[command(after_help = USAGE)]
pub struct Cli {
    /// Secret used to derive pseudonym seeds (generated when omitted)
    pub secret: Option<String>,

    /// Input CSV path (a demo file is generated when omitted)
    pub input: Option<PathBuf>,

    /// Output CSV path (required when INPUT is given)
    pub output: Option<PathBuf>,

    /// Rows to generate when synthesizing a demo input
    #[arg(long, default_value_t = DEFAULT_RECORD_COUNT)]
    pub records: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", env = "VEIL_LOG_LEVEL")]
    pub log_level: String,
}

impl Cli {
    /// Execute the anonymization run, returning the process exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        if self.input.is_some() && self.output.is_none() {
            eprintln!("Error: {}", VeilError::Usage("INPUT given without OUTPUT".to_string()));
            eprintln!("{USAGE}");
            return Ok(2);
        }

        let secret = match &self.secret {
            Some(secret) => secret.clone(),
            None => {
                let secret = random_secret(SECRET_LEN);
                println!("Generated secret: {secret}");
                secret
            }
        };

        let (input, output) = match (&self.input, &self.output) {
            (Some(input), Some(output)) => (input.clone(), output.clone()),
            _ => {
                let input = io::synth::generate_source_csv(Path::new("."), self.records)?;
                println!("Generated input: {}", input.display());
                let output = derive_output_path(&input);
                (input, output)
            }
        };

        let mut records = match io::csv::read_records(&input) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(error = %e, path = %input.display(), "Failed to read input");
                eprintln!("Error: {e}");
                eprintln!("{USAGE}");
                return Ok(1);
            }
        };

        let engine = PseudonymEngine::new(SecretString::new(secret));
        engine.anonymize_records(&mut records)?;
        io::csv::write_records(&records, &output)?;

        println!(
            "Anonymized {} records -> {}",
            records.row_count(),
            output.display()
        );
        Ok(0)
    }
}

/// Derive the output path by prefixing the input filename with `out_`
fn derive_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("out_{name}"))
}

/// Random secret drawn from letters, digits, and punctuation
fn random_secret(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| SECRET_CHARSET[rng.gen_range(0..SECRET_CHARSET.len())] as char)
        .collect()
}
