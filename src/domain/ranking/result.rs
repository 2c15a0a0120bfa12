//! Ranking Result - Scored items and their descending ranking view.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One item with its computed score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub item: String,
    pub score: f64,
}

impl ScoredItem {
    /// Creates a new scored item.
    pub fn new(item: impl Into<String>, score: f64) -> Self {
        Self {
            item: item.into(),
            score,
        }
    }
}

impl fmt::Display for ScoredItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item, self.score)
    }
}

/// Scores for every item of a decision matrix, in matrix item order.
///
/// The stored order is the input row order; `ranking()` derives the
/// descending view on demand without mutating the stored entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    entries: Vec<ScoredItem>,
}

impl RankingResult {
    /// Creates a result from (item, score) pairs in input row order.
    pub fn new(entries: Vec<ScoredItem>) -> Self {
        Self { entries }
    }

    /// Creates a result by zipping item identifiers with scores.
    pub fn from_scores(items: &[String], scores: Vec<f64>) -> Self {
        Self {
            entries: items
                .iter()
                .zip(scores)
                .map(|(item, score)| ScoredItem::new(item.clone(), score))
                .collect(),
        }
    }

    /// Returns the scored items in input row order.
    pub fn entries(&self) -> &[ScoredItem] {
        &self.entries
    }

    /// Returns the scores alone, in input row order.
    pub fn scores(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.score).collect()
    }

    /// Returns the number of scored items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no items were scored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a fresh view sorted descending by score.
    ///
    /// The sort is stable: items with equal scores keep their input row
    /// order. NaN scores compare as equal to everything, so their placement
    /// carries no meaning. Internal storage is not touched, so repeated
    /// calls yield identical output.
    pub fn ranking(&self) -> Vec<ScoredItem> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked
    }

    /// Returns the top-ranked item, if any.
    pub fn best(&self) -> Option<&ScoredItem> {
        let mut best: Option<&ScoredItem> = None;
        for entry in &self.entries {
            match best {
                Some(current) if entry.score > current.score => best = Some(entry),
                None => best = Some(entry),
                _ => {}
            }
        }
        best
    }
}
