//! Frequency tables for categorical and count-like columns

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value counts, ordered by value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable<K: Ord> {
    counts: BTreeMap<K, usize>,
    total: usize,
}

impl<K: Ord> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<K: Ord> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: K) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of observations
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct values
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, value: &K) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Most frequent value; ties go to the smallest value
    pub fn mode(&self) -> Option<(&K, usize)> {
        self.counts
            .iter()
            .fold(None, |best: Option<(&K, usize)>, (k, &c)| match best {
                Some((_, bc)) if bc >= c => best,
                _ => Some((k, c)),
            })
    }

    /// `(value, count)` pairs in value order
    pub fn entries(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }
}

impl<K: Ord> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for value in iter {
            table.add(value);
        }
        table
    }
}
