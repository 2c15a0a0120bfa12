//! Ranking method contract shared by all four scoring algorithms.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::RankingError;

use super::{DecisionMatrix, RankingResult};

/// How an inverted ("lower is better") criterion is transformed so that
/// higher always means better before scoring.
///
/// The additive methods complement values in [0, 1]; the pairwise AHP
/// method takes reciprocals of strictly positive values. The two rules are
/// intentionally not unified: switching a method to the other rule changes
/// its observable ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InversionRule {
    /// `value -> 1 - value`, valid for inputs in [0, 1].
    Complement,
    /// `value -> 1 / value`, valid for strictly positive inputs.
    Reciprocal,
}

impl InversionRule {
    /// Applies the transform to a single value.
    ///
    /// A reciprocal of zero propagates as infinity per IEEE 754.
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            InversionRule::Complement => 1.0 - value,
            InversionRule::Reciprocal => 1.0 / value,
        }
    }
}

/// A multi-criteria ranking method.
///
/// Implementations score a decision matrix into one scalar per item,
/// in item order. Scoring never mutates the matrix and may be repeated
/// any number of times.
pub trait RankingMethod {
    /// Short machine name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Scores every item of the matrix.
    fn calculate(&self, matrix: &DecisionMatrix) -> Result<RankingResult, RankingError>;
}
