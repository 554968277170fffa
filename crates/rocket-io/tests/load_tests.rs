//! Loader integration tests

mod common;

use common::fixtures::sales_file;
use rocket_io::{load, CsvReader, IoError, SalesReader};

#[test]
fn test_load_reads_every_row() {
    let file = sales_file(
        ".csv",
        &[
            "7129300520,2014-10-13,221900.0,3,1,1180,5650,1,0,0,3,7,1180,0,1955,0,98178,47.5112,-122.257,1340,5650",
            "6414100192,2014-12-09,538000.0,3,2.25,2570,7242,2,0,0,3,7,2170,400,1951,1991,98125,47.721,-122.319,1690,7639",
        ],
    );

    let table = load(file.path()).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[1].bathrooms, 2.25);
    assert_eq!(table.rows[1].yr_renovated, 1991);
    assert_eq!(table.schema.num_columns(), 21);
}

#[test]
fn test_load_missing_file() {
    let err = load("/definitely/not/here/kc_house_data.csv").unwrap_err();
    assert!(matches!(err, IoError::FileNotFound(_)));
    assert!(!err.is_parse_error());
}

#[test]
fn test_load_tab_separated() {
    let file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
    let header = common::fixtures::HEADER.replace(',', "\t");
    let row = "1,2014-05-02,100000,2,1.5,1000,2000,1,0,0,3,7,1000,0,1990,0,98001,47.3,-122.2,1500,2000"
        .replace(',', "\t");
    std::fs::write(file.path(), format!("{header}\n{row}\n")).unwrap();

    let table = load(file.path()).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0].zipcode, 98001);
}

#[test]
fn test_schema_counts_records_without_decoding() {
    let file = sales_file(
        ".csv",
        &["1,2014-05-02,100000,2,1.5,1000,2000,1,0,0,3,7,1000,0,1990,0,98001,47.3,-122.2,1500,2000"],
    );

    let reader = CsvReader::open(file.path()).unwrap();
    let schema = reader.read_schema().unwrap();

    assert_eq!(schema.num_records, 1);
    assert_eq!(reader.format_name(), "CSV");
}
