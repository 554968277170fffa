//! Summary statistics for numeric columns
//!
//! Provides common statistical summaries:
//! - Sum, mean, min, max
//! - Median and standard deviation
//! - Fixed-decimal rounding used for currency and ratios

use serde::{Deserialize, Serialize};

/// Round `value` to `decimals` places, exact halves to the even neighbour
///
/// The scaled value is rounded, so 100.005 (stored as a hair below) still
/// scales to the tie 10000.5 and rounds to 100.0.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Summary statistics for a numeric dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of finite values
    pub count: usize,
    /// Number of missing/NaN values
    pub missing: usize,
    /// Sum of finite values
    pub sum: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Mean (average)
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Median (50th percentile)
    pub median: f64,
}

impl SummaryStats {
    /// Compute summary statistics from data
    pub fn from_data(data: &[f64]) -> Self {
        let mut finite: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        let missing = data.len() - finite.len();

        if finite.is_empty() {
            return Self::empty(missing);
        }

        let count = finite.len();
        let sum: f64 = finite.iter().sum();
        let mean = sum / count as f64;
        let variance = finite.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        finite.sort_by(|a, b| a.total_cmp(b));
        let median = if count % 2 == 0 {
            (finite[count / 2 - 1] + finite[count / 2]) / 2.0
        } else {
            finite[count / 2]
        };

        Self {
            count,
            missing,
            sum,
            min: finite[0],
            max: finite[count - 1],
            mean,
            std_dev: variance.sqrt(),
            median,
        }
    }

    /// Statistics of an empty dataset: zero sum, NaN everywhere else
    fn empty(missing: usize) -> Self {
        Self {
            count: 0,
            missing,
            sum: 0.0,
            min: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            std_dev: f64::NAN,
            median: f64::NAN,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
