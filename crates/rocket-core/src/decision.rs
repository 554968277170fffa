//! Buy decision
//!
//! A property is recommended when it is cheaper per square foot than its
//! zipcode, in better condition than its zipcode, and its expected price
//! clears the configured margin over the asking price.

use crate::category::YesNo;
use crate::config::DecisionConfig;
use crate::error::{FeatureError, FeatureResult};
use crate::features::Feature;
use crate::record::{Column, Property, PropertyTable};

/// Thresholds for the buy rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionRule {
    /// `expected_price / price` must exceed this
    pub margin_ratio: f64,
}

impl Default for DecisionRule {
    fn default() -> Self {
        Self { margin_ratio: 1.6 }
    }
}

impl From<&DecisionConfig> for DecisionRule {
    fn from(config: &DecisionConfig) -> Self {
        Self {
            margin_ratio: config.margin_ratio,
        }
    }
}

/// Classify one property
///
/// Reads the numeric `condition` code, never its label.
pub fn decide(property: &Property, rule: &DecisionRule) -> FeatureResult<YesNo> {
    let price_sqft = property.need(property.features.price_sqft, Column::PriceSqft)?;
    let regional_price_sqft = property.need(
        property.features.regional_price_sqft,
        Column::RegionalPriceSqft,
    )?;
    let regional_condition = property.need(
        property.features.regional_condition,
        Column::RegionalCondition,
    )?;
    let expected_price = property.need(property.features.expected_price, Column::ExpectedPrice)?;

    if property.price.is_nan() || property.price <= 0.0 {
        return Err(FeatureError::Division {
            id: property.id,
            field: "price",
        });
    }

    let below_market = price_sqft < regional_price_sqft;
    let above_regional_condition = regional_condition < f64::from(property.condition);
    let clears_margin = expected_price / property.price > rule.margin_ratio;

    Ok(YesNo::from(
        below_market && above_regional_condition && clears_margin,
    ))
}

/// Adds `buy`
#[derive(Debug, Clone, Copy, Default)]
pub struct BuyDecision {
    pub rule: DecisionRule,
}

impl BuyDecision {
    pub fn new(rule: DecisionRule) -> Self {
        Self { rule }
    }
}

impl Feature for BuyDecision {
    fn name(&self) -> &'static str {
        "buy"
    }

    fn requires(&self) -> &'static [Column] {
        &[
            Column::PriceSqft,
            Column::RegionalPriceSqft,
            Column::RegionalCondition,
            Column::ExpectedPrice,
        ]
    }

    fn provides(&self) -> &'static [Column] {
        &[Column::Buy]
    }

    fn apply(&self, table: PropertyTable) -> FeatureResult<PropertyTable> {
        table.require(self.name(), self.requires())?;

        let table = table.try_map_records(self.provides(), |p| {
            p.features.buy = Some(decide(p, &self.rule)?);
            Ok(())
        })?;

        let recommended = table
            .iter()
            .filter(|p| p.features.buy == Some(YesNo::Yes))
            .count();
        tracing::debug!(
            recommended,
            total = table.len(),
            margin_ratio = self.rule.margin_ratio,
            "classified properties"
        );
        Ok(table)
    }
}
