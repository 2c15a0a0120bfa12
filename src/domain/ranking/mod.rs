//! Ranking Module - Multi-criteria decision analysis methods.
//!
//! This module contains the decision matrix data structure and the four
//! ranking methods that score it.
//!
//! # Components
//!
//! - `DecisionMatrix` - Items x criteria score table with a validating builder
//! - `WeightedSum` - Additive scoring over (possibly inverted) criteria
//! - `PolygonArea` - Triangle-fan area scoring over criterion pairs
//! - `GaussianWeighted` - Dispersion-weighted scoring (normalized Gaussian factor)
//! - `PairwiseAhp` - Classic AHP with pairwise-comparison consistency checking
//! - `RankingResult` - Scored items with a descending `ranking()` view
//!
//! # Design Philosophy
//!
//! All scoring is pure and synchronous. Methods own their constructor-time
//! configuration, work on private copies of the matrix, and never mutate
//! caller data. Degenerate numeric input (zero-sum columns, reciprocals of
//! zero) propagates as NaN or infinity rather than being clamped.

mod ahp;
mod decision_matrix;
mod gaussian;
mod method;
mod polygon_area;
mod result;
mod weighted_sum;

// Re-export all public types
pub use ahp::{ConsistencyReport, ConsistencyValidator, CriteriaWeightMatrix, PairwiseAhp};
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use gaussian::GaussianWeighted;
pub use method::{InversionRule, RankingMethod};
pub use polygon_area::PolygonArea;
pub use result::{RankingResult, ScoredItem};
pub use weighted_sum::WeightedSum;
