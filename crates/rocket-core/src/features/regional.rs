//! Regional aggregates and expected profit
//!
//! Aggregates are zipcode means over the whole table as it reaches this
//! stage, broadcast back onto every member record.

use rocket_stats::{group_means, round_to};

use super::Feature;
use crate::error::FeatureResult;
use crate::record::{Column, PropertyTable};

/// Adds `regional_condition` and `regional_price_sqft`
///
/// `regional_condition` averages the numeric condition code (1-5).
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionalAggregates;

impl Feature for RegionalAggregates {
    fn name(&self) -> &'static str {
        "regional"
    }

    fn requires(&self) -> &'static [Column] {
        &[Column::PriceSqft]
    }

    fn provides(&self) -> &'static [Column] {
        &[Column::RegionalCondition, Column::RegionalPriceSqft]
    }

    fn apply(&self, table: PropertyTable) -> FeatureResult<PropertyTable> {
        table.require(self.name(), self.requires())?;

        let condition = group_means(table.iter().map(|p| (p.zipcode, f64::from(p.condition))));
        let price_sqft = table
            .iter()
            .map(|p| Ok((p.zipcode, p.need(p.features.price_sqft, Column::PriceSqft)?)))
            .collect::<FeatureResult<Vec<_>>>()?;
        let price_sqft = group_means(price_sqft);

        tracing::debug!(zipcodes = condition.len(), "computed regional aggregates");

        Ok(table.map_records(self.provides(), |p| {
            p.features.regional_condition = condition.get(&p.zipcode).copied();
            p.features.regional_price_sqft = price_sqft.get(&p.zipcode).copied();
        }))
    }
}

/// Adds `expected_price` and `profit`
///
/// `expected_price` prices the living area at the regional rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectedProfit;

impl Feature for ExpectedProfit {
    fn name(&self) -> &'static str {
        "expected_profit"
    }

    fn requires(&self) -> &'static [Column] {
        &[Column::RegionalPriceSqft]
    }

    fn provides(&self) -> &'static [Column] {
        &[Column::ExpectedPrice, Column::Profit]
    }

    fn apply(&self, table: PropertyTable) -> FeatureResult<PropertyTable> {
        table.require(self.name(), self.requires())?;

        table.try_map_records(self.provides(), |p| {
            let rate = p.need(p.features.regional_price_sqft, Column::RegionalPriceSqft)?;
            let expected = round_to(rate * p.sqft_living, 2);
            p.features.expected_price = Some(expected);
            p.features.profit = Some(round_to(expected - p.price, 2));
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeatureError;
    use crate::features::testing::property;

    fn priced(id: i64, zipcode: u32, condition: i32, price_sqft: f64) -> crate::record::Property {
        let mut p = property(id);
        p.zipcode = zipcode;
        p.condition = condition;
        p.features.price_sqft = Some(price_sqft);
        p
    }

    #[test]
    fn test_regional_means_are_broadcast() {
        let table = PropertyTable::from_parts(
            vec![
                priced(1, 98001, 3, 100.0),
                priced(2, 98001, 4, 200.0),
                priced(3, 98001, 5, 300.0),
                priced(4, 98002, 2, 150.0),
            ],
            [Column::PriceSqft],
        );

        let table = RegionalAggregates.apply(table).unwrap();

        for p in table.iter().take(3) {
            assert_eq!(p.features.regional_condition, Some(4.0));
            assert_eq!(p.features.regional_price_sqft, Some(200.0));
        }
        let single = &table.records()[3];
        assert_eq!(single.features.regional_condition, Some(2.0));
        assert_eq!(single.features.regional_price_sqft, Some(150.0));
    }

    #[test]
    fn test_requires_price_per_area() {
        let err = RegionalAggregates
            .apply(PropertyTable::new(vec![property(1)]))
            .unwrap_err();
        assert_eq!(
            err,
            FeatureError::MissingColumn {
                stage: "regional",
                column: Column::PriceSqft
            }
        );
    }

    #[test]
    fn test_expected_price_and_profit() {
        let mut p = property(1);
        p.price = 100_000.0;
        p.sqft_living = 1000.0;
        p.features.regional_price_sqft = Some(180.123);
        let table = PropertyTable::from_parts(vec![p], [Column::RegionalPriceSqft]);

        let table = ExpectedProfit.apply(table).unwrap();

        let f = &table.records()[0].features;
        assert_eq!(f.expected_price, Some(180_123.0));
        assert_eq!(f.profit, Some(80_123.0));
        assert!(table.has(Column::Profit));
    }
}
