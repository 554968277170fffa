//! rocket-stats - Statistical functions for the sales pipeline
//!
//! This crate provides the small numeric toolkit the pipeline and its
//! consumers rely on:
//!
//! - **Summary**: count, sum, mean, median, spread, plus decimal rounding
//! - **Group**: per-key means, used for regional aggregates
//! - **Correlation**: Pearson coefficients and correlation matrices
//! - **Frequency**: value counts and mode for categorical columns
//!
//! Non-finite inputs are skipped rather than propagated.

pub mod correlation;
pub mod frequency;
pub mod group;
pub mod summary;

pub use correlation::*;
pub use frequency::*;
pub use group::*;
pub use summary::*;
