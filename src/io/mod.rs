//! Tabular I/O
//!
//! External collaborators of the pseudonymization core: CSV reading
//! and writing ([`csv`]) and synthetic demo-input generation
//! ([`synth`]). All file access is local; failures abort the run.

pub mod csv;
pub mod synth;
