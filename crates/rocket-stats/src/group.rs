//! Grouped aggregation
//!
//! `group_means` is the split-apply-combine step behind regional
//! aggregates: values are bucketed by key and each bucket is reduced to
//! its arithmetic mean.

use std::collections::BTreeMap;

/// Running sum and count for one group
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    pub fn push(&mut self, value: f64) {
        if value.is_finite() {
            self.sum += value;
            self.count += 1;
        }
    }

    /// Mean of pushed values, `None` if nothing finite was pushed
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Mean value per key
///
/// Keys whose values are all non-finite are omitted.
pub fn group_means<K, I>(pairs: I) -> BTreeMap<K, f64>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut groups: BTreeMap<K, MeanAccumulator> = BTreeMap::new();
    for (key, value) in pairs {
        groups.entry(key).or_default().push(value);
    }

    groups
        .into_iter()
        .filter_map(|(key, acc)| acc.mean().map(|m| (key, m)))
        .collect()
}
