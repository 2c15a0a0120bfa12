//! Decision Matrix - Core data structure scored by every ranking method.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::foundation::{RankingError, ValidationError};

use super::method::InversionRule;

/// Items x criteria score table.
///
/// Rows are item identifiers, columns are criterion names, cells are real
/// scores. Three of the four ranking methods expect values in [0, 1]; the
/// pairwise AHP method expects strictly positive values. Constructed once
/// through the builder and read-only afterward: methods that invert
/// criteria work on a private copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    /// Ordered list of item identifiers.
    item_ids: Vec<String>,
    /// Ordered list of criterion names.
    criteria: Vec<String>,
    /// Cell data keyed by "item_id:criterion".
    cells: HashMap<String, f64>,
}

impl DecisionMatrix {
    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Returns the ordered item identifiers.
    pub fn items(&self) -> &[String] {
        &self.item_ids
    }

    /// Returns the ordered criterion names.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Returns the number of items.
    pub fn item_count(&self) -> usize {
        self.item_ids.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Returns true if the named criterion is a column of this matrix.
    pub fn has_criterion(&self, criterion: &str) -> bool {
        self.criteria.iter().any(|c| c == criterion)
    }

    /// Gets a cell value by item identifier and criterion name.
    pub fn value(&self, item_id: &str, criterion: &str) -> Option<f64> {
        self.cells.get(&Self::cell_key(item_id, criterion)).copied()
    }

    /// Returns a criterion column in item order, or None for an unknown
    /// criterion.
    pub fn column(&self, criterion: &str) -> Option<Vec<f64>> {
        if !self.has_criterion(criterion) {
            return None;
        }
        Some(
            self.item_ids
                .iter()
                .map(|item| self.value(item, criterion).unwrap_or(f64::NAN))
                .collect(),
        )
    }

    /// Produces the private working copy every ranking method scores.
    ///
    /// Rows follow item order, columns follow the `criteria` argument, and
    /// inverted columns are transformed by `rule`. The caller's matrix is
    /// never touched. Fails when a requested criterion is not a column of
    /// this matrix or an inverted name is not in the requested criteria.
    pub(crate) fn prepared(
        &self,
        criteria: &[String],
        inverted: &[String],
        rule: InversionRule,
    ) -> Result<Vec<Vec<f64>>, RankingError> {
        for criterion in criteria {
            if !self.has_criterion(criterion) {
                return Err(RankingError::invalid_criterion(criterion));
            }
        }
        for criterion in inverted {
            if !criteria.contains(criterion) {
                return Err(RankingError::invalid_criterion(criterion));
            }
        }

        let inverted: HashSet<&str> = inverted.iter().map(String::as_str).collect();
        let rows = self
            .item_ids
            .iter()
            .map(|item| {
                criteria
                    .iter()
                    .map(|criterion| {
                        let value = self.value(item, criterion).unwrap_or(f64::NAN);
                        if inverted.contains(criterion.as_str()) {
                            rule.apply(value)
                        } else {
                            value
                        }
                    })
                    .collect()
            })
            .collect();

        Ok(rows)
    }

    /// Generates the cell key from item identifier and criterion name.
    fn cell_key(item_id: &str, criterion: &str) -> String {
        format!("{}:{}", item_id, criterion)
    }
}

/// Builder for constructing validated DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    item_ids: Vec<String>,
    criteria: Vec<String>,
    cells: HashMap<String, f64>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the item identifiers.
    pub fn items(mut self, ids: Vec<impl Into<String>>) -> Self {
        self.item_ids = ids.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets the criterion names.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criteria = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets a cell value.
    pub fn value(
        mut self,
        item_id: impl Into<String>,
        criterion: impl Into<String>,
        value: f64,
    ) -> Self {
        let key = DecisionMatrix::cell_key(&item_id.into(), &criterion.into());
        self.cells.insert(key, value);
        self
    }

    /// Builds the decision matrix.
    ///
    /// Every declared (item, criterion) cell must be present and finite;
    /// identifiers and criterion names must be unique and non-empty sets.
    pub fn build(self) -> Result<DecisionMatrix, ValidationError> {
        if self.item_ids.is_empty() {
            return Err(ValidationError::EmptyItems {
                matrix: "decision".to_string(),
            });
        }
        if self.criteria.is_empty() {
            return Err(ValidationError::EmptyCriteria {
                matrix: "decision".to_string(),
            });
        }

        let mut seen_items = HashSet::new();
        for item in &self.item_ids {
            if !seen_items.insert(item.as_str()) {
                return Err(ValidationError::DuplicateItem { item: item.clone() });
            }
        }
        let mut seen_criteria = HashSet::new();
        for criterion in &self.criteria {
            if !seen_criteria.insert(criterion.as_str()) {
                return Err(ValidationError::DuplicateCriterion {
                    criterion: criterion.clone(),
                });
            }
        }

        for item in &self.item_ids {
            for criterion in &self.criteria {
                let key = DecisionMatrix::cell_key(item, criterion);
                match self.cells.get(&key) {
                    None => return Err(ValidationError::missing_value(item, criterion)),
                    Some(value) if !value.is_finite() => {
                        return Err(ValidationError::non_finite_value(item, criterion))
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(DecisionMatrix {
            item_ids: self.item_ids,
            criteria: self.criteria,
            cells: self.cells,
        })
    }
}
