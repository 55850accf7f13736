//! Domain models and types for Veil.
//!
//! The domain layer provides:
//! - **Tabular model** ([`RecordSet`]) with normalized column names
//! - **Error types** ([`VeilError`]) and the [`Result`] alias
//! - **Column constants** for the recognized input columns
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, VeilError>`]:
//!
//! ```rust
//! use std::path::Path;
//! use veil::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let records = veil::io::csv::read_records(Path::new("input.csv"))?;
//!     println!("{} rows", records.row_count());
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod record;

// Re-export commonly used types for convenience
pub use errors::{Result, VeilError};
pub use record::{
    RecordSet, COLUMN_ADDRESS, COLUMN_DATE_OF_BIRTH, COLUMN_FIRST_NAME, COLUMN_LAST_NAME,
    REQUIRED_COLUMNS,
};
