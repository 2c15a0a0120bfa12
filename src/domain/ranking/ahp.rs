//! Pairwise AHP - Analytic Hierarchy Process with consistency checking.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{RankingError, ValidationError};

use super::method::{InversionRule, RankingMethod};
use super::{DecisionMatrix, RankingResult};

/// Random Index per criteria count, after Wharton (1980).
///
/// The expected consistency index of a randomly generated pairwise
/// comparison matrix of the given size, used to normalize a matrix's
/// consistency index into the consistency ratio.
static RANDOM_INDEX: Lazy<HashMap<usize, f64>> = Lazy::new(|| {
    HashMap::from([
        (3, 0.58),
        (4, 0.90),
        (5, 1.12),
        (6, 1.24),
        (7, 1.32),
        (8, 1.41),
        (9, 1.45),
        (10, 1.49),
        (11, 1.51),
    ])
});

fn random_index(criteria_count: usize) -> Option<f64> {
    RANDOM_INDEX.get(&criteria_count).copied()
}

/// Square pairwise-comparison matrix over a criteria set.
///
/// Cell (i, j) holds the relative importance of criterion i versus
/// criterion j as a positive real. The diagonal is conventionally 1 but is
/// not separately enforced. Rows and columns share the criteria order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaWeightMatrix {
    criteria: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl CriteriaWeightMatrix {
    /// Builds a weight matrix from criteria names and comparison rows.
    ///
    /// The matrix must be square over the criteria set and every weight
    /// must be a positive, finite real.
    pub fn from_rows(
        criteria: Vec<impl Into<String>>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, ValidationError> {
        let criteria: Vec<String> = criteria.into_iter().map(|s| s.into()).collect();
        if criteria.is_empty() {
            return Err(ValidationError::EmptyCriteria {
                matrix: "criteria weights".to_string(),
            });
        }
        let mut seen = std::collections::HashSet::new();
        for criterion in &criteria {
            if !seen.insert(criterion.as_str()) {
                return Err(ValidationError::DuplicateCriterion {
                    criterion: criterion.clone(),
                });
            }
        }
        if rows.len() != criteria.len() {
            return Err(ValidationError::RowCountMismatch {
                criteria: criteria.len(),
                rows: rows.len(),
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != criteria.len() {
                return Err(ValidationError::RowLengthMismatch {
                    row: i,
                    criteria: criteria.len(),
                    cells: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ValidationError::NonPositiveWeight {
                        row: i,
                        column: j,
                        value,
                    });
                }
            }
        }
        Ok(Self { criteria, rows })
    }

    /// Returns the criteria labeling rows and columns.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Returns the matrix dimension.
    pub fn size(&self) -> usize {
        self.criteria.len()
    }

    /// Gets a comparison weight by row and column index.
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

/// Outcome of a consistency check over a pairwise weight matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// Relative importance per criterion, in criteria order.
    pub priority_vector: Vec<f64>,
    /// Mean of the per-row principal eigenvalue estimates.
    pub max_lambda: f64,
    /// `(max_lambda - n) / (n - 1)`.
    pub consistency_index: f64,
    /// Consistency index over the random index for this size.
    pub consistency_ratio: f64,
}

/// Consistency check over pairwise comparison weights.
///
/// Derives the priority vector and validates that the comparisons are
/// logically consistent enough to trust.
pub struct ConsistencyValidator;

impl ConsistencyValidator {
    /// Checks a weight matrix against a consistency-ratio threshold.
    ///
    /// # Algorithm
    /// Column-normalize the weights; each criterion's priority is the mean
    /// of its normalized row. Each row's lambda is its priority-weighted
    /// sum divided by its priority; the consistency index derives from the
    /// mean lambda and is normalized by the random index for this size.
    ///
    /// # Errors
    /// - `UnsupportedCriteriaCount` when the size has no random index
    ///   entry (supported sizes are 3 to 11).
    /// - `Inconsistent` when the computed ratio exceeds the threshold;
    ///   the error carries both for diagnostics.
    pub fn check(
        weights: &CriteriaWeightMatrix,
        threshold: f64,
    ) -> Result<ConsistencyReport, RankingError> {
        let n = weights.size();
        let ri = random_index(n).ok_or(RankingError::UnsupportedCriteriaCount { count: n })?;
        let rows = weights.rows();

        let column_sums: Vec<f64> = (0..n).map(|j| rows.iter().map(|row| row[j]).sum()).collect();
        let priority_vector: Vec<f64> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&column_sums)
                    .map(|(value, sum)| value / sum)
                    .sum::<f64>()
                    / n as f64
            })
            .collect();

        let lambdas: Vec<f64> = rows
            .iter()
            .zip(&priority_vector)
            .map(|(row, priority)| {
                let weighted_sum: f64 = row
                    .iter()
                    .zip(&priority_vector)
                    .map(|(value, p)| value * p)
                    .sum();
                weighted_sum / priority
            })
            .collect();
        let max_lambda = lambdas.iter().sum::<f64>() / lambdas.len() as f64;
        let consistency_index = (max_lambda - n as f64) / (n as f64 - 1.0);
        let consistency_ratio = consistency_index / ri;

        tracing::debug!(
            "Consistency check over {} criteria: ratio {:.4}, threshold {:.2}",
            n,
            consistency_ratio,
            threshold
        );

        if consistency_ratio > threshold {
            return Err(RankingError::Inconsistent {
                ratio: consistency_ratio,
                threshold,
            });
        }

        Ok(ConsistencyReport {
            priority_vector,
            max_lambda,
            consistency_index,
            consistency_ratio,
        })
    }
}

/// The classic AHP method over pairwise-compared criteria.
///
/// Construction runs the consistency check and fails fast: an instance
/// only exists once its weight matrix passed the threshold, and the
/// derived priority vector is immutable afterward. Scoring normalizes the
/// decision matrix column-wise and weights each column by its priority.
/// Inverted criteria take reciprocals, so their values must be strictly
/// positive.
#[derive(Debug, Clone)]
pub struct PairwiseAhp {
    criteria: Vec<String>,
    inverted: Vec<String>,
    cr_threshold: f64,
    priority_vector: Vec<f64>,
    consistency_ratio: f64,
}

impl PairwiseAhp {
    /// Default consistency-ratio threshold.
    pub const DEFAULT_CR_THRESHOLD: f64 = 0.10;

    /// Creates an AHP method with the default threshold.
    pub fn new(
        weights: &CriteriaWeightMatrix,
        inverted: Vec<impl Into<String>>,
    ) -> Result<Self, RankingError> {
        Self::with_threshold(weights, inverted, Self::DEFAULT_CR_THRESHOLD)
    }

    /// Creates an AHP method with a caller-chosen threshold.
    pub fn with_threshold(
        weights: &CriteriaWeightMatrix,
        inverted: Vec<impl Into<String>>,
        cr_threshold: f64,
    ) -> Result<Self, RankingError> {
        let report = ConsistencyValidator::check(weights, cr_threshold)?;
        Ok(Self {
            criteria: weights.criteria().to_vec(),
            inverted: inverted.into_iter().map(|s| s.into()).collect(),
            cr_threshold,
            priority_vector: report.priority_vector,
            consistency_ratio: report.consistency_ratio,
        })
    }

    /// Returns the criteria in priority-vector order.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Returns the derived priority weight per criterion.
    pub fn priority_vector(&self) -> &[f64] {
        &self.priority_vector
    }

    /// Returns the consistency ratio computed at construction.
    pub fn consistency_ratio(&self) -> f64 {
        self.consistency_ratio
    }

    /// Returns the threshold the weights were validated against.
    pub fn cr_threshold(&self) -> f64 {
        self.cr_threshold
    }
}

impl RankingMethod for PairwiseAhp {
    fn name(&self) -> &'static str {
        "pairwise_ahp"
    }

    fn calculate(&self, matrix: &DecisionMatrix) -> Result<RankingResult, RankingError> {
        tracing::debug!(
            "Scoring {} items over {} criteria with {}",
            matrix.item_count(),
            self.criteria.len(),
            self.name()
        );
        let rows = matrix.prepared(&self.criteria, &self.inverted, InversionRule::Reciprocal)?;

        let column_sums: Vec<f64> = (0..self.criteria.len())
            .map(|j| rows.iter().map(|row| row[j]).sum())
            .collect();
        let scores = rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&column_sums)
                    .zip(&self.priority_vector)
                    .map(|((value, sum), priority)| value / sum * priority)
                    .sum()
            })
            .collect();

        Ok(RankingResult::from_scores(matrix.items(), scores))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ratios of the true priority vector [0.6, 0.3, 0.1].
    fn consistent_weights() -> CriteriaWeightMatrix {
        CriteriaWeightMatrix::from_rows(
            vec!["accuracy", "cost", "time"],
            vec![
                vec![1.0, 2.0, 6.0],
                vec![0.5, 1.0, 3.0],
                vec![1.0 / 6.0, 1.0 / 3.0, 1.0],
            ],
        )
        .unwrap()
    }

    /// Cyclic preferences: accuracy > cost > time > accuracy.
    fn intransitive_weights() -> CriteriaWeightMatrix {
        CriteriaWeightMatrix::from_rows(
            vec!["accuracy", "cost", "time"],
            vec![
                vec![1.0, 3.0, 1.0 / 3.0],
                vec![1.0 / 3.0, 1.0, 3.0],
                vec![3.0, 1.0 / 3.0, 1.0],
            ],
        )
        .unwrap()
    }

    fn positive_matrix() -> DecisionMatrix {
        DecisionMatrix::builder()
            .items(vec!["A", "B"])
            .criteria(vec!["accuracy", "cost", "time"])
            .value("A", "accuracy", 0.8)
            .value("A", "cost", 0.5)
            .value("A", "time", 0.1)
            .value("B", "accuracy", 0.2)
            .value("B", "cost", 0.5)
            .value("B", "time", 0.9)
            .build()
            .unwrap()
    }

    // Random Index table

    #[test]
    fn random_index_covers_three_to_eleven() {
        assert_eq!(random_index(3), Some(0.58));
        assert_eq!(random_index(7), Some(1.32));
        assert_eq!(random_index(11), Some(1.51));
    }

    #[test]
    fn random_index_is_absent_outside_the_table() {
        assert_eq!(random_index(2), None);
        assert_eq!(random_index(12), None);
    }

    // CriteriaWeightMatrix validation

    #[test]
    fn from_rows_rejects_row_count_mismatch() {
        let result = CriteriaWeightMatrix::from_rows(
            vec!["a", "b", "c"],
            vec![vec![1.0, 2.0, 3.0], vec![0.5, 1.0, 2.0]],
        );
        assert!(matches!(
            result,
            Err(ValidationError::RowCountMismatch { criteria: 3, rows: 2 })
        ));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let result = CriteriaWeightMatrix::from_rows(
            vec!["a", "b"],
            vec![vec![1.0, 2.0], vec![0.5]],
        );
        assert!(matches!(
            result,
            Err(ValidationError::RowLengthMismatch { row: 1, .. })
        ));
    }

    #[test]
    fn from_rows_rejects_non_positive_weights() {
        let result = CriteriaWeightMatrix::from_rows(
            vec!["a", "b"],
            vec![vec![1.0, 0.0], vec![2.0, 1.0]],
        );
        assert!(matches!(
            result,
            Err(ValidationError::NonPositiveWeight { row: 0, column: 1, .. })
        ));
    }

    #[test]
    fn from_rows_rejects_duplicate_criteria() {
        let result = CriteriaWeightMatrix::from_rows(
            vec!["a", "a"],
            vec![vec![1.0, 1.0], vec![1.0, 1.0]],
        );
        assert!(matches!(
            result,
            Err(ValidationError::DuplicateCriterion { .. })
        ));
    }

    #[test]
    fn weight_matrix_value_accessor_works() {
        let weights = consistent_weights();
        assert_eq!(weights.size(), 3);
        assert_eq!(weights.value(0, 2), Some(6.0));
        assert_eq!(weights.value(3, 0), None);
    }

    // Consistency check

    #[test]
    fn perfectly_consistent_weights_have_zero_ratio() {
        let report = ConsistencyValidator::check(&consistent_weights(), 0.10).unwrap();
        assert!(report.consistency_ratio.abs() < 1e-12);
        assert!((report.max_lambda - 3.0).abs() < 1e-12);
        assert!((report.priority_vector[0] - 0.6).abs() < 1e-12);
        assert!((report.priority_vector[1] - 0.3).abs() < 1e-12);
        assert!((report.priority_vector[2] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn intransitive_weights_fail_with_computed_ratio() {
        // CI = (13/3 - 3) / 2 = 2/3, CR = (2/3) / 0.58
        let result = ConsistencyValidator::check(&intransitive_weights(), 0.10);
        match result {
            Err(RankingError::Inconsistent { ratio, threshold }) => {
                assert!((ratio - (2.0 / 3.0) / 0.58).abs() < 1e-9);
                assert!((threshold - 0.10).abs() < f64::EPSILON);
            }
            other => panic!("Expected Inconsistent error, got {:?}", other),
        }
    }

    #[test]
    fn two_criteria_have_no_random_index() {
        let weights =
            CriteriaWeightMatrix::from_rows(vec!["a", "b"], vec![vec![1.0, 2.0], vec![0.5, 1.0]])
                .unwrap();
        assert!(matches!(
            ConsistencyValidator::check(&weights, 0.10),
            Err(RankingError::UnsupportedCriteriaCount { count: 2 })
        ));
    }

    #[test]
    fn twelve_criteria_have_no_random_index() {
        let criteria: Vec<String> = (0..12).map(|i| format!("c{}", i)).collect();
        let rows = vec![vec![1.0; 12]; 12];
        let weights = CriteriaWeightMatrix::from_rows(criteria, rows).unwrap();
        assert!(matches!(
            ConsistencyValidator::check(&weights, 0.10),
            Err(RankingError::UnsupportedCriteriaCount { count: 12 })
        ));
    }

    // PairwiseAhp construction

    #[test]
    fn construction_succeeds_for_consistent_weights() {
        let ahp = PairwiseAhp::new(&consistent_weights(), Vec::<String>::new()).unwrap();
        assert!(ahp.consistency_ratio().abs() < 1e-12);
        assert_eq!(ahp.criteria(), ["accuracy", "cost", "time"]);
        let pv = ahp.priority_vector();
        assert!((pv[0] - 0.6).abs() < 1e-12);
        assert!((pv[1] - 0.3).abs() < 1e-12);
        assert!((pv[2] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn construction_fails_fast_for_intransitive_weights() {
        let result = PairwiseAhp::new(&intransitive_weights(), Vec::<String>::new());
        assert!(matches!(result, Err(RankingError::Inconsistent { .. })));
    }

    #[test]
    fn relaxed_threshold_admits_intransitive_weights() {
        let ahp =
            PairwiseAhp::with_threshold(&intransitive_weights(), Vec::<String>::new(), 1.2)
                .unwrap();
        assert!((ahp.consistency_ratio() - (2.0 / 3.0) / 0.58).abs() < 1e-9);
        assert!((ahp.cr_threshold() - 1.2).abs() < f64::EPSILON);
    }

    // Scoring

    #[test]
    fn scores_weight_normalized_columns_by_priority() {
        // Column sums are all 1.0, so scores read straight off the
        // priority vector: A = 0.8*0.6 + 0.5*0.3 + 0.1*0.1 = 0.64.
        let ahp = PairwiseAhp::new(&consistent_weights(), Vec::<String>::new()).unwrap();
        let scores = ahp.calculate(&positive_matrix()).unwrap().scores();
        assert!((scores[0] - 0.64).abs() < 1e-12);
        assert!((scores[1] - 0.36).abs() < 1e-12);
    }

    #[test]
    fn scores_sum_to_one() {
        let ahp = PairwiseAhp::new(&consistent_weights(), Vec::<String>::new()).unwrap();
        let total: f64 = ahp.calculate(&positive_matrix()).unwrap().scores().iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn inverted_criterion_takes_reciprocals() {
        // time inverted: A 0.1 -> 10, B 0.9 -> 10/9; normalized time
        // column becomes [0.9, 0.1].
        let ahp = PairwiseAhp::new(&consistent_weights(), vec!["time"]).unwrap();
        let scores = ahp.calculate(&positive_matrix()).unwrap().scores();
        let expected_a = 0.8 * 0.6 + 0.5 * 0.3 + 0.9 * 0.1;
        let expected_b = 0.2 * 0.6 + 0.5 * 0.3 + 0.1 * 0.1;
        assert!((scores[0] - expected_a).abs() < 1e-9);
        assert!((scores[1] - expected_b).abs() < 1e-9);
    }

    #[test]
    fn missing_decision_column_is_rejected() {
        let matrix = DecisionMatrix::builder()
            .items(vec!["A"])
            .criteria(vec!["accuracy", "cost"])
            .value("A", "accuracy", 0.8)
            .value("A", "cost", 0.5)
            .build()
            .unwrap();
        let ahp = PairwiseAhp::new(&consistent_weights(), Vec::<String>::new()).unwrap();
        assert!(matches!(
            ahp.calculate(&matrix),
            Err(RankingError::InvalidCriterion { criterion }) if criterion == "time"
        ));
    }

    #[test]
    fn scoring_is_repeatable_after_one_check() {
        let ahp = PairwiseAhp::new(&consistent_weights(), Vec::<String>::new()).unwrap();
        let matrix = positive_matrix();
        assert_eq!(
            ahp.calculate(&matrix).unwrap(),
            ahp.calculate(&matrix).unwrap()
        );
    }

    #[test]
    fn consistency_report_round_trips_through_json() {
        let report = ConsistencyValidator::check(&consistent_weights(), 0.10).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let back: ConsistencyReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
