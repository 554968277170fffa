//! Recommendation view
//!
//! The projection the rendering layer consumes. `Recommendation`'s field
//! order is the published column order; CSV and JSON output follow it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::{Condition, Grade, Season, ViewQuality, Waterfront, YesNo};
use crate::error::FeatureResult;
use crate::record::{Column, Property, PropertyTable};

/// One recommended purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: i64,
    pub date: NaiveDate,
    pub season: Season,
    pub price: f64,
    pub expected_price: f64,
    pub profit: f64,
    pub price_sqft: f64,
    pub regional_price_sqft: f64,
    pub complete_bathrooms: u32,
    pub half_bathroom: YesNo,
    pub bedrooms: u32,
    pub floors: f64,
    pub sqft_living: f64,
    pub sqft_above: f64,
    pub sqft_basement: f64,
    pub sqft_lot: f64,
    pub view: ViewQuality,
    pub condition: Condition,
    pub grade: Grade,
    pub waterfront: Waterfront,
    pub yr_built: i32,
    pub yr_renovated: i32,
    pub last_maintenance: i32,
    pub zipcode: u32,
    pub lat: f64,
    pub long: f64,
}

/// Column names in output order
pub const RECOMMENDATION_COLUMNS: [&str; 26] = [
    "id",
    "date",
    "season",
    "price",
    "expected_price",
    "profit",
    "price_sqft",
    "regional_price_sqft",
    "complete_bathrooms",
    "half_bathroom",
    "bedrooms",
    "floors",
    "sqft_living",
    "sqft_above",
    "sqft_basement",
    "sqft_lot",
    "view",
    "condition",
    "grade",
    "waterfront",
    "yr_built",
    "yr_renovated",
    "last_maintenance",
    "zipcode",
    "lat",
    "long",
];

impl Recommendation {
    /// Project a fully featured property
    pub fn from_property(p: &Property) -> FeatureResult<Self> {
        let f = &p.features;
        Ok(Self {
            id: p.id,
            date: p.date,
            season: p.need(f.season, Column::Season)?,
            price: p.price,
            expected_price: p.need(f.expected_price, Column::ExpectedPrice)?,
            profit: p.need(f.profit, Column::Profit)?,
            price_sqft: p.need(f.price_sqft, Column::PriceSqft)?,
            regional_price_sqft: p.need(f.regional_price_sqft, Column::RegionalPriceSqft)?,
            complete_bathrooms: p.need(f.complete_bathrooms, Column::CompleteBathrooms)?,
            half_bathroom: p.need(f.half_bathroom, Column::HalfBathroom)?,
            bedrooms: p.bedrooms,
            floors: p.floors,
            sqft_living: p.sqft_living,
            sqft_above: p.sqft_above,
            sqft_basement: p.sqft_basement,
            sqft_lot: p.sqft_lot,
            view: p.need(f.view, Column::View)?,
            condition: p.need(f.condition, Column::Condition)?,
            grade: p.need(f.grade, Column::Grade)?,
            waterfront: p.need(f.waterfront, Column::Waterfront)?,
            yr_built: p.yr_built,
            yr_renovated: p.yr_renovated,
            last_maintenance: p.need(f.last_maintenance, Column::LastMaintenance)?,
            zipcode: p.zipcode,
            lat: p.lat,
            long: p.long,
        })
    }
}

/// Properties flagged for purchase, excluding any in bad condition
///
/// Reads the table without consuming it; the result is numbered from zero.
pub fn project_recommendations(table: &PropertyTable) -> FeatureResult<Vec<Recommendation>> {
    table.require("recommendations", &[Column::Buy, Column::Condition])?;

    table
        .iter()
        .filter(|p| p.features.buy == Some(YesNo::Yes))
        .filter(|p| p.features.condition != Some(Condition::Bad))
        .map(Recommendation::from_property)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeatureError;
    use crate::features::testing::property;

    const ALL_COLUMNS: [Column; 14] = [
        Column::Waterfront,
        Column::View,
        Column::Condition,
        Column::Grade,
        Column::Season,
        Column::CompleteBathrooms,
        Column::HalfBathroom,
        Column::LastMaintenance,
        Column::PriceSqft,
        Column::RegionalCondition,
        Column::RegionalPriceSqft,
        Column::ExpectedPrice,
        Column::Profit,
        Column::Buy,
    ];

    fn featured(id: i64, buy: YesNo, condition: Condition) -> Property {
        let mut p = property(id);
        p.features = crate::record::Features {
            waterfront: Some(Waterfront::No),
            view: Some(ViewQuality::NoView),
            condition: Some(condition),
            grade: Some(Grade::Average),
            season: Some(Season::Spring),
            complete_bathrooms: Some(2),
            half_bathroom: Some(YesNo::No),
            last_maintenance: Some(1985),
            price_sqft: Some(200.0),
            regional_condition: Some(3.0),
            regional_price_sqft: Some(350.0),
            expected_price: Some(525_000.0),
            profit: Some(225_000.0),
            buy: Some(buy),
        };
        p
    }

    #[test]
    fn test_bad_condition_never_recommended() {
        let table = PropertyTable::from_parts(
            vec![
                featured(1, YesNo::Yes, Condition::Good),
                featured(2, YesNo::Yes, Condition::Bad),
                featured(3, YesNo::No, Condition::Excelent),
            ],
            ALL_COLUMNS,
        );

        let recs = project_recommendations(&table).unwrap();

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id, 1);
        assert_eq!(recs[0].expected_price, 525_000.0);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_requires_buy_column() {
        let table = PropertyTable::new(vec![property(1)]);
        assert_eq!(
            project_recommendations(&table),
            Err(FeatureError::MissingColumn {
                stage: "recommendations",
                column: Column::Buy
            })
        );
    }

    #[test]
    fn test_csv_header_matches_column_order() {
        let table = PropertyTable::from_parts(
            vec![featured(1, YesNo::Yes, Condition::Good)],
            ALL_COLUMNS,
        );
        let recs = project_recommendations(&table).unwrap();

        let mut buf = Vec::new();
        rocket_io::write_csv(&mut buf, &recs).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next().unwrap(), RECOMMENDATION_COLUMNS.join(","));
        let row = lines.next().unwrap();
        assert!(row.starts_with("1,2014-05-02,spring,300000.0,525000.0,"));
        assert!(row.contains(",no view,good,average,no,"));
    }
}
