//! rocket-io - Data I/O for house sales datasets
//!
//! This crate reads the raw King County style sales export and writes
//! tabular results back out:
//!
//! - **Schema**: the required raw columns, their types and units
//! - **CSV reader**: header validation plus typed row decoding
//! - **CSV writer**: header + rows for any `Serialize` row type
//!
//! # Design
//!
//! The loader performs no validation beyond what parsing does natively.
//! Cleaning and feature derivation live in `rocket-core`.

pub mod csv_reader;
pub mod reader;
pub mod schema;
pub mod writer;

pub use csv_reader::CsvReader;
pub use reader::*;
pub use schema::*;
pub use writer::write_csv;
