//! Pearson correlation
//!
//! Coefficients are undefined (NaN) for fewer than two paired values or
//! when either side has zero variance.

use serde::{Deserialize, Serialize};

/// Pearson product-moment correlation of two equally long series
///
/// Pairs where either value is non-finite are dropped first.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() {
        return None;
    }

    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .map(|(&a, &b)| (a, b))
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Symmetric matrix of pairwise Pearson coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Series names, in row/column order
    pub labels: Vec<String>,
    /// Row-major coefficients; NaN where undefined
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlate every pair of named series
    pub fn compute(series: &[(String, Vec<f64>)]) -> Self {
        let n = series.len();
        let mut values = vec![vec![f64::NAN; n]; n];

        for i in 0..n {
            for j in i..n {
                let r = pearson(&series[i].1, &series[j].1).unwrap_or(f64::NAN);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Self {
            labels: series.iter().map(|(name, _)| name.clone()).collect(),
            values,
        }
    }

    /// Coefficient for a pair of labels
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        Some(self.values[i][j])
    }

    /// Apply `f` to every coefficient (e.g. rounding for display)
    pub fn map(mut self, f: impl Fn(f64) -> f64) -> Self {
        for row in &mut self.values {
            for v in row.iter_mut() {
                *v = f(*v);
            }
        }
        self
    }
}
