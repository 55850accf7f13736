//! Pseudonymization module for Veil
//!
//! This module implements the deterministic seeding and value-generation
//! scheme that maps `(secret, original value)` to a plausible but
//! unrelated replacement value.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Seed building**: `secret ++ uppercase(trim(original))`, a
//!   versioned public contract ([`seed`])
//! - **Generation**: seed string → SHA-256 → seeded rng → one corpus
//!   draw ([`generator`])
//! - **Corpus**: injectable source of locale-appropriate synthetic
//!   values ([`corpus`])
//! - **Engine**: per-field anonymizers and the column-wise record-set
//!   transform ([`engine`])
//!
//! # Usage
//!
//! ```
//! use secrecy::SecretString;
//! use veil::anonymization::PseudonymEngine;
//!
//! let engine = PseudonymEngine::new(SecretString::new("A!Ob3#".to_string()));
//! let pseudonym = engine.anonymize_last_name("Jone");
//! assert_eq!(pseudonym, engine.anonymize_last_name(" JONE "));
//! ```

pub mod corpus;
pub mod engine;
pub mod generator;
pub mod seed;

// Re-export main types
pub use corpus::{FakerCorpus, FieldCategory, ValueCorpus};
pub use engine::PseudonymEngine;
pub use generator::ValueGenerator;
