//! Sales reader trait and common types
//!
//! The `SalesReader` trait is the seam between a raw source and the
//! cleaning stage. `load` picks the reader for a path.

use crate::schema::DataSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during I/O operations
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Invalid record at line {line}: {message}")]
    InvalidRecord { line: u64, message: String },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Write failed: {0}")]
    Write(String),
}

impl IoError {
    /// True for errors caused by the file's content rather than its access
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            IoError::MissingColumns(_) | IoError::InvalidRecord { .. } | IoError::InvalidFormat(_)
        )
    }
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// One row of the raw sales export, before cleaning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSale {
    pub id: i64,
    pub date: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub sqft_living: f64,
    pub sqft_lot: f64,
    pub floors: f64,
    pub waterfront: i32,
    pub view: i32,
    pub condition: i32,
    pub grade: i32,
    pub sqft_above: f64,
    pub sqft_basement: f64,
    pub yr_built: i32,
    pub yr_renovated: i32,
    pub zipcode: u32,
    pub lat: f64,
    pub long: f64,
}

/// The raw table as loaded, in file order
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Columns found in the header
    pub schema: DataSchema,

    /// Decoded rows
    pub rows: Vec<RawSale>,
}

impl RawTable {
    pub fn new(schema: DataSchema, rows: Vec<RawSale>) -> Self {
        Self { schema, rows }
    }

    /// Build a table from rows alone, using the raw sales schema
    pub fn from_rows(rows: Vec<RawSale>) -> Self {
        let mut schema = DataSchema::raw_sales();
        schema.num_records = rows.len();
        Self { schema, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Trait for reading raw sales from a source
pub trait SalesReader {
    /// Schema observed in the source (header columns, record count)
    fn read_schema(&self) -> IoResult<DataSchema>;

    /// Decode every row
    fn read_all(&self) -> IoResult<RawTable>;

    /// Get the format name
    fn format_name(&self) -> &'static str;
}

/// Load a delimited sales file into memory
///
/// The delimiter is picked from the extension (`.tsv` is tab separated,
/// anything else is treated as comma separated).
pub fn load(path: impl AsRef<Path>) -> IoResult<RawTable> {
    let path = path.as_ref();
    let delimiter = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    };

    let reader = crate::csv_reader::CsvReader::open_with_delimiter(path, delimiter)?;
    let table = reader.read_all()?;
    tracing::debug!(
        path = %path.display(),
        format = reader.format_name(),
        rows = table.len(),
        "loaded raw sales"
    );
    Ok(table)
}
