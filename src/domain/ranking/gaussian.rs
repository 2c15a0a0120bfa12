//! Gaussian Weighted - Dispersion-weighted scoring via the normalized
//! Gaussian factor.

use crate::domain::foundation::RankingError;

use super::method::{InversionRule, RankingMethod};
use super::{DecisionMatrix, RankingResult};

/// The Gaussian-factor weighting method.
///
/// Scoring steps, in order: complement inversion, column normalization by
/// column sums, then each column is weighted by its normalized Gaussian
/// factor. The factor is the column's coefficient of variation (sample
/// standard deviation over mean of the normalized column), re-normalized
/// so the factors sum to 1 across criteria. Criteria whose values spread
/// more between items therefore influence the score more.
///
/// Degenerate inputs are not guarded: a zero-sum column or a single-row
/// matrix (sample deviation of one observation) propagates NaN.
#[derive(Debug, Clone)]
pub struct GaussianWeighted {
    criteria: Vec<String>,
    inverted: Vec<String>,
}

impl GaussianWeighted {
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

    /// Divides every column by its column sum.
    fn normalize_columns(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
        let columns = rows.first().map_or(0, Vec::len);
        let sums: Vec<f64> = (0..columns)
            .map(|c| rows.iter().map(|row| row[c]).sum())
            .collect();
        rows.iter()
            .map(|row| row.iter().zip(&sums).map(|(v, sum)| v / sum).collect())
            .collect()
    }

    /// Normalized Gaussian factor per column of an already column-normalized
    /// matrix. Factors sum to 1.
    fn gaussian_factors(normalized: &[Vec<f64>]) -> Vec<f64> {
        let items = normalized.len();
        let columns = normalized.first().map_or(0, Vec::len);
        let factors: Vec<f64> = (0..columns)
            .map(|c| {
                let mean = normalized.iter().map(|row| row[c]).sum::<f64>() / items as f64;
                let variance = normalized
                    .iter()
                    .map(|row| (row[c] - mean).powi(2))
                    .sum::<f64>()
                    / (items as f64 - 1.0);
                variance.sqrt() / mean
            })
            .collect();
        let total: f64 = factors.iter().sum();
        factors.into_iter().map(|f| f / total).collect()
    }
}

impl RankingMethod for GaussianWeighted {
    fn name(&self) -> &'static str {
        "gaussian_weighted"
    }

    fn calculate(&self, matrix: &DecisionMatrix) -> Result<RankingResult, RankingError> {
        tracing::debug!(
            "Scoring {} items over {} criteria with {}",
            matrix.item_count(),
            self.criteria.len(),
            self.name()
        );
        let rows = matrix.prepared(&self.criteria, &self.inverted, InversionRule::Complement)?;
        let normalized = Self::normalize_columns(&rows);
        let ngf = Self::gaussian_factors(&normalized);
        let scores = normalized
            .iter()
            .map(|row| row.iter().zip(&ngf).map(|(v, w)| v * w).sum())
            .collect();
        Ok(RankingResult::from_scores(matrix.items(), scores))
    }
}
