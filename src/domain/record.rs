//! Tabular record model
//!
//! A [`RecordSet`] is the in-memory representation of a delimited file:
//! an ordered list of column names plus an ordered list of rows. Column
//! names are normalized (trimmed, lowercased) at construction so lookups
//! are robust to header formatting noise in source files.

use super::errors::{Result, VeilError};

/// Recognized column: given name
pub const COLUMN_FIRST_NAME: &str = "first_name";
/// Recognized column: family name
pub const COLUMN_LAST_NAME: &str = "last_name";
/// Recognized column: street address
pub const COLUMN_ADDRESS: &str = "address";
/// Recognized column: date of birth (passed through unchanged)
pub const COLUMN_DATE_OF_BIRTH: &str = "date_of_birth";

/// Columns every input file must carry
pub const REQUIRED_COLUMNS: [&str; 4] = [
    COLUMN_FIRST_NAME,
    COLUMN_LAST_NAME,
    COLUMN_ADDRESS,
    COLUMN_DATE_OF_BIRTH,
];

/// An ordered set of tabular records
///
/// Row order, row count, and the column set are preserved through every
/// transformation applied to the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RecordSet {
    /// Create a record set from raw column names and rows
    ///
    /// Column names are trimmed and lowercased. Every row must have
    /// exactly one value per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let columns: Vec<String> = columns
            .into_iter()
            .map(|c| c.trim().to_lowercase())
            .collect();

        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(VeilError::InputFormat(format!(
                    "row {} has {} fields, expected {}",
                    i + 1,
                    row.len(),
                    columns.len()
                )));
            }
        }

        Ok(Self { columns, rows })
    }

    /// Normalized column names, in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, in file order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of a column by normalized name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Index of a column that must exist
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| VeilError::MissingColumn(name.to_string()))
    }

    /// Value at (row, column), if in bounds
    pub fn value(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Rewrite one column across every row
    ///
    /// Applies `f` to the current value and stores the result. Row
    /// order and count are untouched.
    pub fn rewrite_column<F>(&mut self, column: usize, mut f: F) -> Result<()>
    where
        F: FnMut(&str) -> String,
    {
        if column >= self.columns.len() {
            return Err(VeilError::Value(format!(
                "column index {column} out of bounds"
            )));
        }
        for row in &mut self.rows {
            row[column] = f(&row[column]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecordSet {
        RecordSet::new(
            vec![
                " First_Name ".to_string(),
                "LAST_NAME".to_string(),
                "address".to_string(),
                "date_of_birth".to_string(),
            ],
            vec![vec![
                "David".to_string(),
                "Jone".to_string(),
                "1 George st Sydney NSW 2112".to_string(),
                "05/09/1991".to_string(),
            ]],
        )
        .unwrap()
    }

    #[test]
    fn test_column_names_normalized() {
        let rs = sample();
        assert_eq!(
            rs.columns(),
            &["first_name", "last_name", "address", "date_of_birth"]
        );
    }

    #[test]
    fn test_column_lookup() {
        let rs = sample();
        assert_eq!(rs.column_index(COLUMN_ADDRESS), Some(2));
        assert!(rs.column_index("phone").is_none());
        assert!(rs.require_column(COLUMN_FIRST_NAME).is_ok());
        assert!(matches!(
            rs.require_column("phone"),
            Err(VeilError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let result = RecordSet::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec!["only one".to_string()]],
        );
        assert!(matches!(result, Err(VeilError::InputFormat(_))));
    }

    #[test]
    fn test_rewrite_column() {
        let mut rs = sample();
        rs.rewrite_column(0, |v| v.to_uppercase()).unwrap();
        assert_eq!(rs.value(0, 0), Some("DAVID"));
        assert_eq!(rs.value(0, 3), Some("05/09/1991"));
        assert_eq!(rs.row_count(), 1);
    }

    #[test]
    fn test_rewrite_column_out_of_bounds() {
        let mut rs = sample();
        assert!(rs.rewrite_column(9, |v| v.to_string()).is_err());
    }
}
