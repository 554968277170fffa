//! Bathroom decomposition
//!
//! The raw count encodes half bathrooms (toilet, no shower) in its
//! fractional part: 2.25 is two complete bathrooms plus a half bathroom.

use super::Feature;
use crate::category::YesNo;
use crate::error::FeatureResult;
use crate::record::{Column, PropertyTable};

/// Split a raw count into complete bathrooms and the half-bathroom flag
pub fn split_bathrooms(raw: f64) -> (u32, YesNo) {
    if !raw.is_finite() || raw < 1.0 {
        return (0, YesNo::from(raw.is_finite() && raw.fract() != 0.0));
    }
    (raw.trunc() as u32, YesNo::from(raw.fract() != 0.0))
}

/// Adds `complete_bathrooms` and `half_bathroom`
///
/// Homes without a complete bathroom are not purchase candidates and are
/// removed from the table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BathroomSplit;

impl Feature for BathroomSplit {
    fn name(&self) -> &'static str {
        "bathrooms"
    }

    fn provides(&self) -> &'static [Column] {
        &[Column::CompleteBathrooms, Column::HalfBathroom]
    }

    fn apply(&self, table: PropertyTable) -> FeatureResult<PropertyTable> {
        let before = table.len();
        let table = table
            .map_records(self.provides(), |p| {
                let (complete, half) = split_bathrooms(p.bathrooms);
                p.features.complete_bathrooms = Some(complete);
                p.features.half_bathroom = Some(half);
            })
            .retain(|p| p.features.complete_bathrooms.unwrap_or(0) > 0);

        tracing::debug!(
            dropped = before - table.len(),
            "removed homes without a complete bathroom"
        );
        Ok(table)
    }
}
