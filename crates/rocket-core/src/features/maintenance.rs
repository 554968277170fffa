//! Last maintenance year

use super::Feature;
use crate::error::FeatureResult;
use crate::record::{Column, PropertyTable};

/// Renovation year, or the build year when never renovated (`0`)
pub fn last_maintenance(yr_built: i32, yr_renovated: i32) -> i32 {
    if yr_renovated == 0 {
        yr_built
    } else {
        yr_renovated
    }
}

/// Adds `last_maintenance`
#[derive(Debug, Clone, Copy, Default)]
pub struct LastMaintenance;

impl Feature for LastMaintenance {
    fn name(&self) -> &'static str {
        "last_maintenance"
    }

    fn provides(&self) -> &'static [Column] {
        &[Column::LastMaintenance]
    }

    fn apply(&self, table: PropertyTable) -> FeatureResult<PropertyTable> {
        Ok(table.map_records(self.provides(), |p| {
            p.features.last_maintenance = Some(last_maintenance(p.yr_built, p.yr_renovated));
        }))
    }
}
