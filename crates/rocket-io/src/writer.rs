//! CSV output for derived tables

use crate::reader::{IoError, IoResult};
use serde::Serialize;
use std::io::Write;

/// Write rows as CSV with a header taken from the row type's field order
///
/// Returns the number of rows written.
pub fn write_csv<W, T>(writer: W, rows: &[T]) -> IoResult<usize>
where
    W: Write,
    T: Serialize,
{
    let mut out = csv::Writer::from_writer(writer);
    for row in rows {
        out.serialize(row)
            .map_err(|e| IoError::Write(e.to_string()))?;
    }
    out.flush().map_err(|e| IoError::Write(e.to_string()))?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        id: i64,
        label: &'static str,
        value: f64,
    }

    #[test]
    fn test_header_follows_field_order() {
        let rows = vec![
            Row {
                id: 2,
                label: "no view",
                value: 1.5,
            },
            Row {
                id: 1,
                label: "good",
                value: 2.0,
            },
        ];
        let mut buf = Vec::new();
        let written = write_csv(&mut buf, &rows).unwrap();

        assert_eq!(written, 2);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "id,label,value\n2,no view,1.5\n1,good,2.0\n");
    }
}
