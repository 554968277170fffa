//! rocket-core - Purchase recommendations for house sales
//!
//! This crate turns a raw sales export into an enriched property table
//! and a list of recommended purchases.
//!
//! # Key Components
//!
//! - **Cleaning**: date parsing, deduplication by id, floor rounding, typo fixes
//! - **Features**: composable transforms that declare the columns they need and add
//! - **Pipeline**: orders the transforms by their declarations and runs them
//! - **Decision**: the buy rule over price per area, condition and expected margin
//! - **View**: the recommendation projection in its published column order
//! - **Summary / Analysis**: headline metrics and exploratory statistics
//!
//! # Data Flow
//!
//! ```text
//! load -> clean -> features -> decision -> view
//! ```
//!
//! Every stage takes a table by value and returns a new one; nothing is
//! mutated in place once handed on.

pub mod analysis;
pub mod category;
pub mod clean;
pub mod config;
pub mod decision;
pub mod error;
pub mod features;
pub mod pipeline;
pub mod record;
pub mod summary;
pub mod view;

pub use analysis::{
    correlation_matrix, describe_categories, frequency, Attribute, CategoryDescription, Level,
};
pub use category::{Condition, Grade, Season, ViewQuality, Waterfront, YesNo};
pub use clean::{clean, normalize};
pub use config::{EstateConfig, ZeroAreaPolicy};
pub use decision::{decide, BuyDecision, DecisionRule};
pub use error::{
    CleanError, ConfigError, EstateError, EstateResult, FeatureError, FeatureResult,
    PipelineError,
};
pub use features::Feature;
pub use pipeline::{process, run, Pipeline, PipelineOutput};
pub use record::{Column, Features, Property, PropertyTable};
pub use summary::PortfolioSummary;
pub use view::{project_recommendations, Recommendation, RECOMMENDATION_COLUMNS};
