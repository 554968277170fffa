//! CSV file reader for raw sales

use crate::reader::{IoError, IoResult, RawSale, RawTable, SalesReader};
use crate::schema::{ColumnDescriptor, ColumnType, DataSchema};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// CSV file reader
pub struct CsvReader {
    path: PathBuf,
    delimiter: u8,
}

impl CsvReader {
    /// Open a comma separated file
    pub fn open(path: impl AsRef<Path>) -> IoResult<Self> {
        Self::open_with_delimiter(path, b',')
    }

    /// Open a delimited file
    pub fn open_with_delimiter(path: impl AsRef<Path>, delimiter: u8) -> IoResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }

        // Surface permission problems here rather than on first read
        File::open(path).map_err(|e| IoError::OpenFailed(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            path: path.to_path_buf(),
            delimiter,
        })
    }

    fn csv_reader(&self) -> IoResult<csv::Reader<BufReader<File>>> {
        let file = File::open(&self.path)
            .map_err(|e| IoError::OpenFailed(format!("{}: {}", self.path.display(), e)))?;
        Ok(reader_for(BufReader::new(file), self.delimiter))
    }
}

impl SalesReader for CsvReader {
    fn read_schema(&self) -> IoResult<DataSchema> {
        let mut reader = self.csv_reader()?;
        let schema = header_schema(&mut reader)?;
        let num_records = reader.records().count();
        Ok(DataSchema {
            num_records,
            ..schema
        })
    }

    fn read_all(&self) -> IoResult<RawTable> {
        let mut reader = self.csv_reader()?;
        read_sales(&mut reader)
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}

/// Decode raw sales from any byte source
///
/// Used directly by tests and by callers holding data in memory.
pub fn read_from<R: Read>(source: R, delimiter: u8) -> IoResult<RawTable> {
    let mut reader = reader_for(source, delimiter);
    read_sales(&mut reader)
}

fn reader_for<R: Read>(source: R, delimiter: u8) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source)
}

fn read_sales<R: Read>(reader: &mut csv::Reader<R>) -> IoResult<RawTable> {
    let mut schema = header_schema(reader)?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawSale>() {
        let row = result.map_err(record_error)?;
        rows.push(row);
    }

    schema.num_records = rows.len();
    schema
        .metadata
        .insert("format".to_string(), "CSV".to_string());

    Ok(RawTable::new(schema, rows))
}

/// Validate the header against the raw schema and describe what was found
fn header_schema<R: Read>(reader: &mut csv::Reader<R>) -> IoResult<DataSchema> {
    let headers = reader
        .headers()
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?
        .clone();

    let required = DataSchema::raw_sales();
    let missing = required.missing_from(headers.iter());
    if !missing.is_empty() {
        return Err(IoError::MissingColumns(missing));
    }

    let columns = headers
        .iter()
        .map(|name| {
            required
                .column(name)
                .cloned()
                .unwrap_or_else(|| ColumnDescriptor::new(name, ColumnType::Unknown))
        })
        .collect();

    Ok(DataSchema::new(columns, 0))
}

fn record_error(err: csv::Error) -> IoError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    IoError::InvalidRecord {
        line,
        message: err.to_string(),
    }
}
