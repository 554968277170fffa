//! Price per living area

use rocket_stats::round_to;

use super::Feature;
use crate::config::ZeroAreaPolicy;
use crate::error::{FeatureError, FeatureResult};
use crate::record::{Column, PropertyTable};

/// `price / sqft_living` rounded to cents
///
/// A non-positive living area is a [`FeatureError::Division`]. So is a
/// non-positive price, which the buy rule later divides by.
pub fn price_per_area(id: i64, price: f64, sqft_living: f64) -> FeatureResult<f64> {
    if sqft_living.is_nan() || sqft_living <= 0.0 {
        return Err(FeatureError::Division {
            id,
            field: "sqft_living",
        });
    }
    if price.is_nan() || price <= 0.0 {
        return Err(FeatureError::Division { id, field: "price" });
    }
    Ok(round_to(price / sqft_living, 2))
}

/// Adds `price_sqft`
#[derive(Debug, Clone, Copy, Default)]
pub struct PricePerArea {
    /// Handling of records with no living area
    pub zero_area: ZeroAreaPolicy,
}

impl PricePerArea {
    pub fn new(zero_area: ZeroAreaPolicy) -> Self {
        Self { zero_area }
    }
}

impl Feature for PricePerArea {
    fn name(&self) -> &'static str {
        "price_sqft"
    }

    fn provides(&self) -> &'static [Column] {
        &[Column::PriceSqft]
    }

    fn apply(&self, table: PropertyTable) -> FeatureResult<PropertyTable> {
        let mut dropped = Vec::new();
        let table = table.try_map_records(self.provides(), |p| {
            match price_per_area(p.id, p.price, p.sqft_living) {
                Ok(value) => p.features.price_sqft = Some(value),
                Err(err) if self.zero_area == ZeroAreaPolicy::Drop => {
                    tracing::warn!(error = %err, "dropping property without a price per area");
                    dropped.push(p.id);
                    p.features.price_sqft = None;
                }
                Err(err) => return Err(err),
            }
            Ok(())
        })?;

        if dropped.is_empty() {
            return Ok(table);
        }
        Ok(table.retain(|p| p.features.price_sqft.is_some()))
    }
}
