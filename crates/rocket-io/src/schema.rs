//! Raw sales schema and column descriptors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Schema describing the structure of a loaded dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSchema {
    /// Column descriptors, in file order
    pub columns: Vec<ColumnDescriptor>,

    /// Number of records
    pub num_records: usize,

    /// Additional metadata
    pub metadata: HashMap<String, String>,
}

impl DataSchema {
    /// Create a new schema
    pub fn new(columns: Vec<ColumnDescriptor>, num_records: usize) -> Self {
        Self {
            columns,
            num_records,
            metadata: HashMap::new(),
        }
    }

    /// The schema every raw sales file must satisfy
    pub fn raw_sales() -> Self {
        Self::new(raw_columns(), 0)
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Names of columns in `self` that are absent from `headers`
    pub fn missing_from<'a, I>(&self, headers: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let present: Vec<&str> = headers.into_iter().collect();
        self.columns
            .iter()
            .filter(|c| !present.contains(&c.name.as_str()))
            .map(|c| c.name.clone())
            .collect()
    }
}

/// Descriptor for a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// Data type
    pub dtype: ColumnType,

    /// Physical units (if known)
    pub unit: Option<String>,

    /// Description
    pub description: Option<String>,
}

impl ColumnDescriptor {
    /// Create a new column descriptor
    pub fn new(name: impl Into<String>, dtype: ColumnType) -> Self {
        Self {
            name: name.into(),
            dtype,
            unit: None,
            description: None,
        }
    }

    /// Set the unit
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

/// Column data type as declared by the raw schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Decimal,
    /// Ordinal or flag code that is recoded into a category downstream
    Code,
    /// Calendar date kept as text until cleaning
    Date,
    /// Any column outside the raw schema
    Unknown,
}

fn raw_columns() -> Vec<ColumnDescriptor> {
    use ColumnType::*;

    vec![
        ColumnDescriptor::new("id", Integer).with_description("Sale identifier, may repeat"),
        ColumnDescriptor::new("date", Date).with_description("Date of the sale, YYYY-MM-DD"),
        ColumnDescriptor::new("price", Decimal).with_unit("USD"),
        ColumnDescriptor::new("bedrooms", Integer),
        ColumnDescriptor::new("bathrooms", Decimal)
            .with_description("Fractional part flags a half bathroom"),
        ColumnDescriptor::new("sqft_living", Decimal).with_unit("sqft"),
        ColumnDescriptor::new("sqft_lot", Decimal).with_unit("sqft"),
        ColumnDescriptor::new("floors", Decimal),
        ColumnDescriptor::new("waterfront", Code).with_description("0/1 flag"),
        ColumnDescriptor::new("view", Code).with_description("0-4 index"),
        ColumnDescriptor::new("condition", Code).with_description("1-5 index"),
        ColumnDescriptor::new("grade", Code).with_description("1-13 index"),
        ColumnDescriptor::new("sqft_above", Decimal).with_unit("sqft"),
        ColumnDescriptor::new("sqft_basement", Decimal).with_unit("sqft"),
        ColumnDescriptor::new("yr_built", Integer),
        ColumnDescriptor::new("yr_renovated", Integer).with_description("0 when never renovated"),
        ColumnDescriptor::new("zipcode", Integer),
        ColumnDescriptor::new("lat", Decimal).with_unit("deg"),
        ColumnDescriptor::new("long", Decimal).with_unit("deg"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_schema_lookup() {
        let schema = DataSchema::raw_sales();

        assert_eq!(schema.num_columns(), 19);
        assert_eq!(schema.column("id").map(|c| c.dtype), Some(ColumnType::Integer));
        assert_eq!(schema.column("price").and_then(|c| c.unit.as_deref()), Some("USD"));
        assert!(schema.column("sqft_living15").is_none());
    }

    #[test]
    fn test_missing_from_reports_every_absent_column() {
        let schema = DataSchema::new(
            vec![
                ColumnDescriptor::new("id", ColumnType::Integer),
                ColumnDescriptor::new("date", ColumnType::Date),
                ColumnDescriptor::new("price", ColumnType::Decimal),
            ],
            0,
        );

        let missing = schema.missing_from(["price", "extra"]);
        assert_eq!(missing, vec!["id".to_string(), "date".to_string()]);
    }
}
