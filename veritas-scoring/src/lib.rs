//! Final trust-score computation from weighted signals and strategy
//! overrides.

pub mod scorer;

pub use scorer::TrustScorer;
