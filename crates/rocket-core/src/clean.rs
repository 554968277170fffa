//! Cleaning: raw sales to a deduplicated property table

use std::collections::HashSet;

use chrono::NaiveDate;
use rocket_io::{RawSale, RawTable};
use rocket_stats::round_to;

use crate::config::CleaningConfig;
use crate::error::CleanError;
use crate::record::{Features, Property, PropertyTable};

/// Parse dates, then [`normalize`]
///
/// Fails on the first row whose date does not match the configured format.
pub fn clean(raw: RawTable, config: &CleaningConfig) -> Result<PropertyTable, CleanError> {
    let loaded = raw.len();
    let records = raw
        .rows
        .into_iter()
        .map(|row| parse_row(row, &config.date_format))
        .collect::<Result<Vec<_>, _>>()?;

    let table = normalize(PropertyTable::new(records), config);
    tracing::debug!(
        loaded,
        kept = table.len(),
        duplicates = loaded - table.len(),
        "cleaned sales"
    );
    Ok(table)
}

/// Sort by date, drop repeated ids, round floors and fix known typos
///
/// Duplicates keep their earliest-dated occurrence; ties on date keep
/// file order. Applying this twice changes nothing.
pub fn normalize(table: PropertyTable, config: &CleaningConfig) -> PropertyTable {
    let columns = table.columns().clone();
    let mut records = table.into_records();

    records.sort_by_key(|p| p.date);

    let mut seen = HashSet::with_capacity(records.len());
    records.retain(|p| seen.insert(p.id));

    for record in &mut records {
        record.floors = round_to(record.floors, config.floors_precision);
        if let Some(fix) = config
            .bedroom_corrections
            .iter()
            .find(|c| c.from == record.bedrooms)
        {
            record.bedrooms = fix.to;
        }
    }

    PropertyTable::from_parts(records, columns)
}

fn parse_row(row: RawSale, date_format: &str) -> Result<Property, CleanError> {
    let date = NaiveDate::parse_from_str(&row.date, date_format).map_err(|_| {
        CleanError::InvalidDate {
            id: row.id,
            value: row.date.clone(),
            format: date_format.to_string(),
        }
    })?;

    Ok(Property {
        id: row.id,
        date,
        price: row.price,
        bedrooms: row.bedrooms,
        bathrooms: row.bathrooms,
        floors: row.floors,
        sqft_living: row.sqft_living,
        sqft_lot: row.sqft_lot,
        sqft_above: row.sqft_above,
        sqft_basement: row.sqft_basement,
        waterfront: row.waterfront,
        view: row.view,
        condition: row.condition,
        grade: row.grade,
        yr_built: row.yr_built,
        yr_renovated: row.yr_renovated,
        zipcode: row.zipcode,
        lat: row.lat,
        long: row.long,
        features: Features::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BedroomCorrection;
    use proptest::prelude::*;

    fn raw(id: i64, date: &str) -> RawSale {
        RawSale {
            id,
            date: date.to_string(),
            price: 400_000.0,
            bedrooms: 3,
            bathrooms: 2.0,
            sqft_living: 2000.0,
            sqft_lot: 5000.0,
            floors: 1.0,
            waterfront: 0,
            view: 0,
            condition: 3,
            grade: 7,
            sqft_above: 2000.0,
            sqft_basement: 0.0,
            yr_built: 1990,
            yr_renovated: 0,
            zipcode: 98001,
            lat: 47.3,
            long: -122.2,
        }
    }

    #[test]
    fn test_duplicates_keep_earliest_sale() {
        let mut late = raw(7, "2015-03-01");
        late.price = 999_000.0;
        let table = RawTable::from_rows(vec![late, raw(8, "2014-06-01"), raw(7, "2014-09-15")]);

        let cleaned = clean(table, &CleaningConfig::default()).unwrap();

        assert_eq!(cleaned.len(), 2);
        let ids: Vec<i64> = cleaned.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![8, 7]);
        let kept = cleaned.get(7).unwrap();
        assert_eq!(kept.date, NaiveDate::from_ymd_opt(2014, 9, 15).unwrap());
        assert_eq!(kept.price, 400_000.0);
    }

    #[test]
    fn test_bedroom_typo_is_persisted() {
        let mut typo = raw(1, "2014-06-24");
        typo.bedrooms = 33;
        let cleaned = clean(RawTable::from_rows(vec![typo]), &CleaningConfig::default()).unwrap();

        assert_eq!(cleaned.records()[0].bedrooms, 3);
    }

    #[test]
    fn test_custom_corrections_replace_default() {
        let config = CleaningConfig {
            bedroom_corrections: vec![BedroomCorrection { from: 11, to: 1 }],
            ..CleaningConfig::default()
        };
        let mut a = raw(1, "2014-06-24");
        a.bedrooms = 33;
        let mut b = raw(2, "2014-06-25");
        b.bedrooms = 11;

        let cleaned = clean(RawTable::from_rows(vec![a, b]), &config).unwrap();
        assert_eq!(cleaned.get(1).unwrap().bedrooms, 33);
        assert_eq!(cleaned.get(2).unwrap().bedrooms, 1);
    }

    #[test]
    fn test_floors_rounded() {
        let mut row = raw(1, "2014-06-24");
        row.floors = 1.4999;
        let cleaned = clean(RawTable::from_rows(vec![row]), &CleaningConfig::default()).unwrap();
        assert_eq!(cleaned.records()[0].floors, 1.5);
    }

    #[test]
    fn test_bad_date_rejected() {
        let err = clean(
            RawTable::from_rows(vec![raw(42, "20141013T000000")]),
            &CleaningConfig::default(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            CleanError::InvalidDate {
                id: 42,
                value: "20141013T000000".to_string(),
                format: "%Y-%m-%d".to_string(),
            }
        );
    }

    #[test]
    fn test_configurable_date_format() {
        let config = CleaningConfig {
            date_format: "%Y%m%dT%H%M%S".to_string(),
            ..CleaningConfig::default()
        };
        let cleaned = clean(RawTable::from_rows(vec![raw(1, "20141013T000000")]), &config).unwrap();
        assert_eq!(
            cleaned.records()[0].date,
            NaiveDate::from_ymd_opt(2014, 10, 13).unwrap()
        );
    }

    proptest! {
        #[test]
        fn test_clean_is_idempotent(
            rows in prop::collection::vec((0i64..20, 1u32..28, 1u32..13, 0u32..40, 0.0f64..4.0), 0..40)
        ) {
            let raws: Vec<RawSale> = rows
                .iter()
                .map(|(id, day, month, bedrooms, floors)| {
                    let mut r = raw(*id, &format!("2014-{:02}-{:02}", month, day));
                    r.bedrooms = *bedrooms;
                    r.floors = *floors;
                    r
                })
                .collect();
            let config = CleaningConfig::default();

            let once = clean(RawTable::from_rows(raws), &config).unwrap();
            let twice = normalize(once.clone(), &config);
            prop_assert_eq!(&once, &twice);

            let mut ids: Vec<i64> = once.iter().map(|p| p.id).collect();
            let total = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), total);
        }
    }
}
