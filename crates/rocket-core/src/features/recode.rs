//! Categorical recoders for raw code columns

use super::Feature;
use crate::category::{Condition, Grade, ViewQuality, Waterfront};
use crate::error::FeatureResult;
use crate::record::{Column, PropertyTable};

/// `waterfront` 0/1 → no/yes
#[derive(Debug, Clone, Copy, Default)]
pub struct WaterfrontLabel;

impl Feature for WaterfrontLabel {
    fn name(&self) -> &'static str {
        "waterfront"
    }

    fn provides(&self) -> &'static [Column] {
        &[Column::Waterfront]
    }

    fn apply(&self, table: PropertyTable) -> FeatureResult<PropertyTable> {
        Ok(table.map_records(self.provides(), |p| {
            p.features.waterfront = Some(Waterfront::from_code(p.waterfront));
        }))
    }
}

/// `view` 0-4 → no view … excelent
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewLabel;

impl Feature for ViewLabel {
    fn name(&self) -> &'static str {
        "view"
    }

    fn provides(&self) -> &'static [Column] {
        &[Column::View]
    }

    fn apply(&self, table: PropertyTable) -> FeatureResult<PropertyTable> {
        Ok(table.map_records(self.provides(), |p| {
            p.features.view = Some(ViewQuality::from_code(p.view));
        }))
    }
}

/// `condition` 1-5 → bad … excelent
///
/// The numeric code stays on the record, so ordering relative to the
/// buy decision does not matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionLabel;

impl Feature for ConditionLabel {
    fn name(&self) -> &'static str {
        "condition"
    }

    fn provides(&self) -> &'static [Column] {
        &[Column::Condition]
    }

    fn apply(&self, table: PropertyTable) -> FeatureResult<PropertyTable> {
        Ok(table.map_records(self.provides(), |p| {
            p.features.condition = Some(Condition::from_code(p.condition));
        }))
    }
}

/// `grade` 1-13 → poor … excelent, `na` above 13
#[derive(Debug, Clone, Copy, Default)]
pub struct GradeLabel;

impl Feature for GradeLabel {
    fn name(&self) -> &'static str {
        "grade"
    }

    fn provides(&self) -> &'static [Column] {
        &[Column::Grade]
    }

    fn apply(&self, table: PropertyTable) -> FeatureResult<PropertyTable> {
        Ok(table.map_records(self.provides(), |p| {
            p.features.grade = Some(Grade::from_code(p.grade));
        }))
    }
}
