//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur while constructing decision data objects.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Matrix '{matrix}' has no items")]
    EmptyItems { matrix: String },

    #[error("Matrix '{matrix}' has no criteria")]
    EmptyCriteria { matrix: String },

    #[error("Duplicate item identifier '{item}'")]
    DuplicateItem { item: String },

    #[error("Duplicate criterion name '{criterion}'")]
    DuplicateCriterion { criterion: String },

    #[error("Missing value for item '{item}', criterion '{criterion}'")]
    MissingValue { item: String, criterion: String },

    #[error("Value for item '{item}', criterion '{criterion}' is not finite")]
    NonFiniteValue { item: String, criterion: String },

    #[error("Weight matrix for {criteria} criteria has {rows} rows")]
    RowCountMismatch { criteria: usize, rows: usize },

    #[error("Weight matrix row {row} has {cells} cells, expected {criteria}")]
    RowLengthMismatch {
        row: usize,
        criteria: usize,
        cells: usize,
    },

    #[error("Weight at row {row}, column {column} must be positive, got {value}")]
    NonPositiveWeight {
        row: usize,
        column: usize,
        value: f64,
    },
}

impl ValidationError {
    /// Creates a missing value validation error.
    pub fn missing_value(item: impl Into<String>, criterion: impl Into<String>) -> Self {
        ValidationError::MissingValue {
            item: item.into(),
            criterion: criterion.into(),
        }
    }

    /// Creates a non-finite value validation error.
    pub fn non_finite_value(item: impl Into<String>, criterion: impl Into<String>) -> Self {
        ValidationError::NonFiniteValue {
            item: item.into(),
            criterion: criterion.into(),
        }
    }
}

/// Errors raised by ranking method construction and scoring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    /// A criterion named by the method is not a column of the matrix.
    #[error("Criterion '{criterion}' is not a column of the decision matrix")]
    InvalidCriterion { criterion: String },

    /// The criteria count has no random-index entry.
    #[error("No random index for {count} criteria (supported range is 3 to 11)")]
    UnsupportedCriteriaCount { count: usize },

    /// The pairwise weight matrix failed the consistency check.
    #[error("Consistency ratio {ratio:.4} exceeds the threshold {threshold:.2}")]
    Inconsistent { ratio: f64, threshold: f64 },
}

impl RankingError {
    /// Creates an invalid criterion error.
    pub fn invalid_criterion(criterion: impl Into<String>) -> Self {
        RankingError::InvalidCriterion {
            criterion: criterion.into(),
        }
    }
}
