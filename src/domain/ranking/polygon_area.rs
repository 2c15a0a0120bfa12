//! Polygon Area - Triangle-fan area scoring over criterion pairs.

use std::f64::consts::PI;

use crate::domain::foundation::RankingError;

use super::method::{InversionRule, RankingMethod};
use super::{DecisionMatrix, RankingResult};

/// The multi-criteria polygon method.
///
/// An item's (possibly complement-inverted) criterion values are treated as
/// edge lengths of a fan of triangles sharing a 120 degree apex. The score
/// is the summed area over every unordered pair of values:
/// `a * b * sin(2*pi/3) / 2`. Area grows superlinearly when many values
/// are simultaneously large, which rewards balanced items more than the
/// purely additive sum does. A single criterion has no pairs and scores 0.
#[derive(Debug, Clone)]
pub struct PolygonArea {
    criteria: Vec<String>,
    inverted: Vec<String>,
}

impl PolygonArea {
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

    /// Summed triangle area over every unordered pair of values.
    fn fan_area(values: &[f64]) -> f64 {
        let apex = (2.0 * PI / 3.0).sin() / 2.0;
        let mut area = 0.0;
        for (i, a) in values.iter().enumerate() {
            for b in &values[i + 1..] {
                area += a * b * apex;
            }
        }
        area
    }
}

impl RankingMethod for PolygonArea {
    fn name(&self) -> &'static str {
        "polygon_area"
    }

    fn calculate(&self, matrix: &DecisionMatrix) -> Result<RankingResult, RankingError> {
        tracing::debug!(
            "Scoring {} items over {} criteria with {}",
            matrix.item_count(),
            self.criteria.len(),
            self.name()
        );
        let rows = matrix.prepared(&self.criteria, &self.inverted, InversionRule::Complement)?;
        let scores = rows.iter().map(|row| Self::fan_area(row)).collect();
        Ok(RankingResult::from_scores(matrix.items(), scores))
    }
}
