//! Property records and the in-memory table
//!
//! A `Property` holds the cleaned raw attributes of one sale plus a
//! `Features` block of derived attributes. Derived attributes start as
//! `None` and are filled by the transform that provides them; the table
//! tracks which derived `Column`s are present.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::{Condition, Grade, Season, ViewQuality, Waterfront, YesNo};
use crate::error::{FeatureError, FeatureResult};

/// Derived columns a transform can provide or require
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Waterfront,
    View,
    Condition,
    Grade,
    Season,
    CompleteBathrooms,
    HalfBathroom,
    LastMaintenance,
    PriceSqft,
    RegionalCondition,
    RegionalPriceSqft,
    ExpectedPrice,
    Profit,
    Buy,
}

impl Column {
    pub fn name(&self) -> &'static str {
        match self {
            Column::Waterfront => "waterfront",
            Column::View => "view",
            Column::Condition => "condition",
            Column::Grade => "grade",
            Column::Season => "season",
            Column::CompleteBathrooms => "complete_bathrooms",
            Column::HalfBathroom => "half_bathroom",
            Column::LastMaintenance => "last_maintenance",
            Column::PriceSqft => "price_sqft",
            Column::RegionalCondition => "regional_condition",
            Column::RegionalPriceSqft => "regional_price_sqft",
            Column::ExpectedPrice => "expected_price",
            Column::Profit => "profit",
            Column::Buy => "buy",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derived attributes of a property
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Features {
    pub waterfront: Option<Waterfront>,
    pub view: Option<ViewQuality>,
    pub condition: Option<Condition>,
    pub grade: Option<Grade>,
    pub season: Option<Season>,
    pub complete_bathrooms: Option<u32>,
    pub half_bathroom: Option<YesNo>,
    pub last_maintenance: Option<i32>,
    pub price_sqft: Option<f64>,
    pub regional_condition: Option<f64>,
    pub regional_price_sqft: Option<f64>,
    pub expected_price: Option<f64>,
    pub profit: Option<f64>,
    pub buy: Option<YesNo>,
}

/// One historical sale after cleaning
///
/// `waterfront`, `view`, `condition` and `grade` keep their raw numeric
/// codes; labels live in `features`. The buy decision compares against
/// the `condition` code.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: i64,
    pub date: NaiveDate,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub floors: f64,
    pub sqft_living: f64,
    pub sqft_lot: f64,
    pub sqft_above: f64,
    pub sqft_basement: f64,
    pub waterfront: i32,
    pub view: i32,
    pub condition: i32,
    pub grade: i32,
    pub yr_built: i32,
    pub yr_renovated: i32,
    pub zipcode: u32,
    pub lat: f64,
    pub long: f64,
    pub features: Features,
}

impl Property {
    /// Read a derived value, failing if it has not been computed
    pub fn need<T: Copy>(&self, value: Option<T>, column: Column) -> FeatureResult<T> {
        value.ok_or(FeatureError::MissingValue {
            id: self.id,
            column,
        })
    }
}

/// The in-memory dataset threaded through the pipeline
///
/// Transforms take the table by value and hand back a new one, so no
/// stage observes a half-updated table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyTable {
    records: Vec<Property>,
    columns: BTreeSet<Column>,
}

impl PropertyTable {
    /// A table of cleaned records with no derived columns
    pub fn new(records: Vec<Property>) -> Self {
        Self {
            records,
            columns: BTreeSet::new(),
        }
    }

    /// A table whose records already carry the given derived columns
    pub fn from_parts(records: Vec<Property>, columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            records,
            columns: columns.into_iter().collect(),
        }
    }

    pub fn records(&self) -> &[Property] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<Property> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn columns(&self) -> &BTreeSet<Column> {
        &self.columns
    }

    pub fn has(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// Fail unless every column in `required` is present
    pub fn require(&self, stage: &'static str, required: &[Column]) -> FeatureResult<()> {
        match required.iter().find(|c| !self.has(**c)) {
            Some(&column) => Err(FeatureError::MissingColumn { stage, column }),
            None => Ok(()),
        }
    }

    /// Update every record and mark `provided` as present
    pub fn map_records<F>(mut self, provided: &[Column], mut f: F) -> Self
    where
        F: FnMut(&mut Property),
    {
        self.records.iter_mut().for_each(&mut f);
        self.columns.extend(provided.iter().copied());
        self
    }

    /// Fallible variant of [`map_records`](Self::map_records)
    pub fn try_map_records<F>(mut self, provided: &[Column], mut f: F) -> FeatureResult<Self>
    where
        F: FnMut(&mut Property) -> FeatureResult<()>,
    {
        for record in &mut self.records {
            f(record)?;
        }
        self.columns.extend(provided.iter().copied());
        Ok(self)
    }

    /// Keep only records matching `keep`; row numbering restarts at zero
    pub fn retain<F>(mut self, keep: F) -> Self
    where
        F: FnMut(&Property) -> bool,
    {
        self.records.retain(keep);
        self
    }

    pub fn get(&self, id: i64) -> Option<&Property> {
        self.records.iter().find(|p| p.id == id)
    }
}

impl<'a> IntoIterator for &'a PropertyTable {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
