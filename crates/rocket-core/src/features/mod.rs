//! Feature engine: composable transforms over the property table
//!
//! Every transform implements [`Feature`]. It declares the derived columns
//! it reads (`requires`) and adds (`provides`), and maps a table to a new
//! table. [`Pipeline`](crate::pipeline::Pipeline) uses the declarations to
//! order the transforms.
//!
//! # Transforms
//!
//! - [`WaterfrontLabel`], [`ViewLabel`], [`ConditionLabel`], [`GradeLabel`]: code recoders
//! - [`SeasonOfSale`]: season of the sale date
//! - [`BathroomSplit`]: complete/half bathrooms, drops homes without a full bathroom
//! - [`LastMaintenance`]: latest of build or renovation year
//! - [`PricePerArea`]: price per living square foot
//! - [`RegionalAggregates`]: zipcode means of condition and price per area
//! - [`ExpectedProfit`]: expected price at the regional rate and the implied profit

pub mod bathrooms;
pub mod maintenance;
pub mod price;
pub mod recode;
pub mod regional;
pub mod season;

pub use bathrooms::{split_bathrooms, BathroomSplit};
pub use maintenance::{last_maintenance, LastMaintenance};
pub use price::{price_per_area, PricePerArea};
pub use recode::{ConditionLabel, GradeLabel, ViewLabel, WaterfrontLabel};
pub use regional::{ExpectedProfit, RegionalAggregates};
pub use season::{season, SeasonOfSale};

use crate::error::FeatureResult;
use crate::record::{Column, PropertyTable};

/// A pure table transform
pub trait Feature {
    /// Stable name used in logs and errors
    fn name(&self) -> &'static str;

    /// Derived columns that must be present before this runs
    fn requires(&self) -> &'static [Column] {
        &[]
    }

    /// Derived columns this adds or overwrites
    fn provides(&self) -> &'static [Column];

    /// Produce the transformed table
    fn apply(&self, table: PropertyTable) -> FeatureResult<PropertyTable>;
}

#[cfg(test)]
pub(crate) mod testing {
    use chrono::NaiveDate;

    use crate::record::{Features, Property};

    /// A plain cleaned property for transform tests
    pub fn property(id: i64) -> Property {
        Property {
            id,
            date: NaiveDate::from_ymd_opt(2014, 5, 2).unwrap(),
            price: 300_000.0,
            bedrooms: 3,
            bathrooms: 2.0,
            floors: 1.0,
            sqft_living: 1500.0,
            sqft_lot: 4000.0,
            sqft_above: 1500.0,
            sqft_basement: 0.0,
            waterfront: 0,
            view: 0,
            condition: 3,
            grade: 7,
            yr_built: 1985,
            yr_renovated: 0,
            zipcode: 98001,
            lat: 47.3,
            long: -122.2,
            features: Features::default(),
        }
    }
}
