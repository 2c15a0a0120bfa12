//! Weighted Sum - Additive scoring over (possibly inverted) criteria.

use crate::domain::foundation::RankingError;

use super::method::{InversionRule, RankingMethod};
use super::{DecisionMatrix, RankingResult};

/// The traditional additive method.
///
/// Score(item) = sum of the item's values over the configured criteria,
/// with inverted criteria complemented (`1 - value`). No normalization
/// beyond inversion: inputs are assumed to be comparably scaled, typically
/// in [0, 1].
#[derive(Debug, Clone)]
pub struct WeightedSum {
    criteria: Vec<String>,
    inverted: Vec<String>,
}

impl WeightedSum {
    /// Creates a method over the named criteria with nothing inverted.
    pub fn new(criteria: Vec<impl Into<String>>) -> Self {
        Self::with_inverted(criteria, Vec::<String>::new())
    }

    /// Creates a method with a subset of criteria marked "lower is better".
    pub fn with_inverted(
        criteria: Vec<impl Into<String>>,
        inverted: Vec<impl Into<String>>,
    ) -> Self {
        Self {
            criteria: criteria.into_iter().map(|s| s.into()).collect(),
            inverted: inverted.into_iter().map(|s| s.into()).collect(),
        }
    }

    /// Returns the configured criteria.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }
}

impl RankingMethod for WeightedSum {
    fn name(&self) -> &'static str {
        "weighted_sum"
    }

    fn calculate(&self, matrix: &DecisionMatrix) -> Result<RankingResult, RankingError> {
        tracing::debug!(
            "Scoring {} items over {} criteria with {}",
            matrix.item_count(),
            self.criteria.len(),
            self.name()
        );
        let rows = matrix.prepared(&self.criteria, &self.inverted, InversionRule::Complement)?;
        let scores = rows.iter().map(|row| row.iter().sum()).collect();
        Ok(RankingResult::from_scores(matrix.items(), scores))
    }
}
