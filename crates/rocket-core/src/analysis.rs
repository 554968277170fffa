//! Exploratory statistics over the enriched table
//!
//! Frequency distributions, categorical descriptions and the Pearson
//! correlation matrix behind the dashboard's analysis tab.

use std::fmt;

use rocket_stats::{round_to, CorrelationMatrix, FrequencyTable};
use serde::{Deserialize, Serialize};

use crate::error::FeatureResult;
use crate::record::{Column, Property, PropertyTable};

/// Attributes with a meaningful frequency distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Bedrooms,
    CompleteBathrooms,
    Floors,
    YrBuilt,
    /// Renovated properties only
    YrRenovated,
    LastMaintenance,
    View,
    Condition,
    Grade,
    Season,
    Waterfront,
    HalfBathroom,
}

impl Attribute {
    /// Categorical attributes, as described by [`describe_categories`]
    pub const CATEGORICAL: [Attribute; 6] = [
        Attribute::Waterfront,
        Attribute::View,
        Attribute::Condition,
        Attribute::Grade,
        Attribute::Season,
        Attribute::HalfBathroom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Bedrooms => "bedrooms",
            Attribute::CompleteBathrooms => "complete_bathrooms",
            Attribute::Floors => "floors",
            Attribute::YrBuilt => "yr_built",
            Attribute::YrRenovated => "yr_renovated",
            Attribute::LastMaintenance => "last_maintenance",
            Attribute::View => "view",
            Attribute::Condition => "condition",
            Attribute::Grade => "grade",
            Attribute::Season => "season",
            Attribute::Waterfront => "waterfront",
            Attribute::HalfBathroom => "half_bathroom",
        }
    }

    /// Derived column the attribute reads, if any
    fn column(&self) -> Option<Column> {
        match self {
            Attribute::Bedrooms
            | Attribute::Floors
            | Attribute::YrBuilt
            | Attribute::YrRenovated => None,
            Attribute::CompleteBathrooms => Some(Column::CompleteBathrooms),
            Attribute::LastMaintenance => Some(Column::LastMaintenance),
            Attribute::View => Some(Column::View),
            Attribute::Condition => Some(Column::Condition),
            Attribute::Grade => Some(Column::Grade),
            Attribute::Season => Some(Column::Season),
            Attribute::Waterfront => Some(Column::Waterfront),
            Attribute::HalfBathroom => Some(Column::HalfBathroom),
        }
    }

    fn level(&self, p: &Property) -> FeatureResult<Option<Level>> {
        let f = &p.features;
        let level = match self {
            Attribute::Bedrooms => Level::Count(i64::from(p.bedrooms)),
            Attribute::CompleteBathrooms => Level::Count(i64::from(
                p.need(f.complete_bathrooms, Column::CompleteBathrooms)?,
            )),
            Attribute::Floors => Level::Tenths((p.floors * 10.0).round() as i64),
            Attribute::YrBuilt => Level::Count(i64::from(p.yr_built)),
            Attribute::YrRenovated if p.yr_renovated == 0 => return Ok(None),
            Attribute::YrRenovated => Level::Count(i64::from(p.yr_renovated)),
            Attribute::LastMaintenance => Level::Count(i64::from(
                p.need(f.last_maintenance, Column::LastMaintenance)?,
            )),
            Attribute::View => {
                let v = p.need(f.view, Column::View)?;
                Level::label(v as u8, v.as_str())
            }
            Attribute::Condition => {
                let v = p.need(f.condition, Column::Condition)?;
                Level::label(v as u8, v.as_str())
            }
            Attribute::Grade => {
                let v = p.need(f.grade, Column::Grade)?;
                Level::label(v as u8, v.as_str())
            }
            Attribute::Season => {
                let v = p.need(f.season, Column::Season)?;
                Level::label(v as u8, v.as_str())
            }
            Attribute::Waterfront => {
                let v = p.need(f.waterfront, Column::Waterfront)?;
                Level::label(v as u8, v.as_str())
            }
            Attribute::HalfBathroom => {
                let v = p.need(f.half_bathroom, Column::HalfBathroom)?;
                Level::label(v as u8, v.as_str())
            }
        };
        Ok(Some(level))
    }
}

/// One distinct value of an attribute
///
/// Labels order by their ordinal rank, not alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Level {
    Count(i64),
    /// Fractional counts such as floors, in tenths
    Tenths(i64),
    Label { rank: u8, text: &'static str },
}

impl Level {
    fn label(rank: u8, text: &'static str) -> Self {
        Level::Label { rank, text }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Count(n) => write!(f, "{n}"),
            Level::Tenths(n) => write!(f, "{:.1}", *n as f64 / 10.0),
            Level::Label { text, .. } => f.write_str(text),
        }
    }
}

/// Value counts of `attribute` over the table
pub fn frequency(table: &PropertyTable, attribute: Attribute) -> FeatureResult<FrequencyTable<Level>> {
    if let Some(column) = attribute.column() {
        table.require("frequency", &[column])?;
    }

    let mut counts = FrequencyTable::new();
    for p in table {
        if let Some(level) = attribute.level(p)? {
            counts.add(level);
        }
    }
    Ok(counts)
}

/// Count, distinct values, most frequent value and its count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDescription {
    pub column: &'static str,
    pub count: usize,
    pub unique: usize,
    pub top: Option<String>,
    pub freq: usize,
}

/// Describe every categorical attribute
pub fn describe_categories(table: &PropertyTable) -> FeatureResult<Vec<CategoryDescription>> {
    Attribute::CATEGORICAL
        .iter()
        .map(|&attribute| {
            let counts = frequency(table, attribute)?;
            let (top, freq) = match counts.mode() {
                Some((level, freq)) => (Some(level.to_string()), freq),
                None => (None, 0),
            };
            Ok(CategoryDescription {
                column: attribute.name(),
                count: counts.total(),
                unique: counts.unique(),
                top,
                freq,
            })
        })
        .collect()
}

/// Numeric columns entering the correlation matrix, in display order
pub const CORRELATION_COLUMNS: [&str; 10] = [
    "sqft_living",
    "sqft_lot",
    "sqft_basement",
    "bedrooms",
    "complete_bathrooms",
    "floors",
    "yr_renovated",
    "yr_built",
    "last_maintenance",
    "price",
];

/// Pearson correlations between the numeric columns, rounded to 2 places
pub fn correlation_matrix(table: &PropertyTable) -> FeatureResult<CorrelationMatrix> {
    table.require(
        "correlation",
        &[Column::CompleteBathrooms, Column::LastMaintenance],
    )?;

    let mut series: Vec<(String, Vec<f64>)> = CORRELATION_COLUMNS
        .iter()
        .map(|name| (name.to_string(), Vec::with_capacity(table.len())))
        .collect();

    for p in table {
        let values = [
            p.sqft_living,
            p.sqft_lot,
            p.sqft_basement,
            f64::from(p.bedrooms),
            f64::from(p.need(p.features.complete_bathrooms, Column::CompleteBathrooms)?),
            p.floors,
            f64::from(p.yr_renovated),
            f64::from(p.yr_built),
            f64::from(p.need(p.features.last_maintenance, Column::LastMaintenance)?),
            p.price,
        ];
        for (column, value) in series.iter_mut().zip(values) {
            column.1.push(value);
        }
    }

    Ok(CorrelationMatrix::compute(&series).map(|r| round_to(r, 2)))
}
