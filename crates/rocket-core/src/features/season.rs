//! Season of sale
//!
//! Seasons change on fixed days: spring on March 21st, summer on June
//! 21st, fall on September 23rd and winter on December 21st. The change
//! day belongs to the new season.

use chrono::{Datelike, NaiveDate};

use super::Feature;
use crate::category::Season;
use crate::error::FeatureResult;
use crate::record::{Column, PropertyTable};

/// Per month: season before the change day, first day of the next season,
/// season from that day on. Months without a change use day 32.
const MONTHS: [(Season, u32, Season); 12] = [
    (Season::Winter, 32, Season::Winter),
    (Season::Winter, 32, Season::Winter),
    (Season::Winter, 21, Season::Spring),
    (Season::Spring, 32, Season::Spring),
    (Season::Spring, 32, Season::Spring),
    (Season::Spring, 21, Season::Summer),
    (Season::Summer, 32, Season::Summer),
    (Season::Summer, 32, Season::Summer),
    (Season::Summer, 23, Season::Fall),
    (Season::Fall, 32, Season::Fall),
    (Season::Fall, 32, Season::Fall),
    (Season::Fall, 21, Season::Winter),
];

/// Season for a month (1-12) and day of month (1-31)
///
/// Returns `None` only for out-of-range inputs; day 31 is accepted for
/// every month.
pub fn season(month: u32, day: u32) -> Option<Season> {
    if !(1..=31).contains(&day) {
        return None;
    }
    let (before, change_day, after) = *MONTHS.get(month.checked_sub(1)? as usize)?;
    Some(if day < change_day { before } else { after })
}

fn season_of(date: NaiveDate) -> Season {
    let (before, change_day, after) = MONTHS[date.month0() as usize];
    if date.day() < change_day {
        before
    } else {
        after
    }
}

/// Adds `season` from the sale date
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonOfSale;

impl Feature for SeasonOfSale {
    fn name(&self) -> &'static str {
        "season"
    }

    fn provides(&self) -> &'static [Column] {
        &[Column::Season]
    }

    fn apply(&self, table: PropertyTable) -> FeatureResult<PropertyTable> {
        Ok(table.map_records(self.provides(), |p| {
            p.features.season = Some(season_of(p.date));
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::testing::property;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(3, 20, Season::Winter)]
    #[case(3, 21, Season::Spring)]
    #[case(6, 20, Season::Spring)]
    #[case(6, 21, Season::Summer)]
    #[case(9, 22, Season::Summer)]
    #[case(9, 23, Season::Fall)]
    #[case(12, 20, Season::Fall)]
    #[case(12, 21, Season::Winter)]
    #[case(1, 1, Season::Winter)]
    #[case(2, 29, Season::Winter)]
    #[case(4, 30, Season::Spring)]
    #[case(8, 31, Season::Summer)]
    #[case(11, 15, Season::Fall)]
    #[case(12, 31, Season::Winter)]
    fn test_season_boundaries(#[case] month: u32, #[case] day: u32, #[case] expected: Season) {
        assert_eq!(season(month, day), Some(expected));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(season(0, 10), None);
        assert_eq!(season(13, 10), None);
        assert_eq!(season(5, 0), None);
        assert_eq!(season(5, 32), None);
    }

    #[test]
    fn test_every_month_day_has_a_season() {
        for month in 1..=12 {
            for day in 1..=31 {
                assert!(season(month, day).is_some(), "{month}/{day}");
            }
        }
    }

    #[test]
    fn test_feature_uses_sale_date() {
        let mut summer = property(1);
        summer.date = NaiveDate::from_ymd_opt(2014, 9, 22).unwrap();
        let mut fall = property(2);
        fall.date = NaiveDate::from_ymd_opt(2014, 9, 23).unwrap();

        let table = SeasonOfSale
            .apply(PropertyTable::new(vec![summer, fall]))
            .unwrap();

        assert!(table.has(Column::Season));
        assert_eq!(table.records()[0].features.season, Some(Season::Summer));
        assert_eq!(table.records()[1].features.season, Some(Season::Fall));
    }

    proptest! {
        #[test]
        fn test_date_and_pair_agree(days in 0i64..3650) {
            let date = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap() + chrono::Duration::days(days);
            prop_assert_eq!(Some(season_of(date)), season(date.month(), date.day()));
        }
    }
}
