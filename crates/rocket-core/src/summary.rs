//! Portfolio summary metrics
//!
//! Headline numbers for the recommendation set, computed only from the
//! pipeline's two output tables.

use rocket_stats::{round_to, SummaryStats};
use serde::{Deserialize, Serialize};

use crate::record::PropertyTable;
use crate::view::Recommendation;

/// Headline metrics for a recommendation set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Properties after cleaning and feature filters
    pub total_houses: usize,
    /// Recommended purchases
    pub houses_to_buy: usize,
    /// `houses_to_buy` as a percentage of `total_houses`
    pub percent_to_buy: f64,
    /// Sum of asking prices of the recommendations
    pub invested: f64,
    /// Sum of expected prices minus `invested`
    pub expected_profit: f64,
    /// Mean expected price over mean price, as a percentage gain
    pub average_margin_percent: f64,
}

impl PortfolioSummary {
    pub fn compute(properties: &PropertyTable, recommendations: &[Recommendation]) -> Self {
        let total_houses = properties.len();
        let houses_to_buy = recommendations.len();

        let prices: Vec<f64> = recommendations.iter().map(|r| r.price).collect();
        let expected: Vec<f64> = recommendations.iter().map(|r| r.expected_price).collect();
        let prices = SummaryStats::from_data(&prices);
        let expected = SummaryStats::from_data(&expected);

        let percent_to_buy = if total_houses == 0 {
            0.0
        } else {
            round_to(houses_to_buy as f64 / total_houses as f64 * 100.0, 2)
        };

        let average_margin_percent = if prices.is_empty() || prices.mean == 0.0 {
            0.0
        } else {
            round_to((expected.mean / prices.mean - 1.0) * 100.0, 2)
        };

        Self {
            total_houses,
            houses_to_buy,
            percent_to_buy,
            invested: round_to(prices.sum, 2),
            expected_profit: round_to(expected.sum - prices.sum, 2),
            average_margin_percent,
        }
    }

    /// `invested` in millions, as shown on metric cards
    pub fn invested_millions(&self) -> f64 {
        round_to(self.invested / 1_000_000.0, 2)
    }

    /// `expected_profit` in millions
    pub fn expected_profit_millions(&self) -> f64 {
        round_to(self.expected_profit / 1_000_000.0, 2)
    }
}
