use serde::{Deserialize, Serialize};

use crate::error::{KnnError, Result};

/// Label the reference classifier favours on split votes
pub const DEFAULT_PREFERRED_LABEL: &str = "exon";

/// How a split vote between equally common labels is settled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Pick this label whenever it is among the tied labels, otherwise fall
    /// back to the label first voted for
    Prefer(String),
    /// Pick the tied label whose first vote came from the nearest neighbor
    FirstSeen,
}

impl Default for TieBreak {
    fn default() -> Self {
        TieBreak::Prefer(DEFAULT_PREFERRED_LABEL.to_string())
    }
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TieBreak::Prefer(label) => write!(f, "prefer {}", label),
            TieBreak::FirstSeen => write!(f, "first-seen"),
        }
    }
}

/// How pairwise similarities are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Scoring {
    /// Build a union vocabulary and dense feature vectors for every pair
    #[default]
    PerPair,
    /// Count k-mers once per sequence and take sparse dot products
    Sparse,
}

/// Settings for one classification run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Number of neighbors taking part in the vote
    pub neighbors: usize,
    pub tie_break: TieBreak,
    pub scoring: Scoring,
}

impl ClassifierConfig {
    pub fn new(neighbors: usize) -> Self {
        ClassifierConfig {
            neighbors,
            tie_break: TieBreak::default(),
            scoring: Scoring::default(),
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Check the neighbor count against a training set of `train_len` sequences
    pub fn validate(&self, train_len: usize) -> Result<()> {
        if self.neighbors == 0 {
            return Err(KnnError::DegenerateConfig(
                "neighbor count must be positive".to_string(),
            ));
        }
        if self.neighbors > train_len {
            return Err(KnnError::DegenerateConfig(format!(
                "neighbor count {} exceeds training set size {}",
                self.neighbors, train_len
            )));
        }
        Ok(())
    }
}

/// Outcome of a classification run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    pub correct: usize,
    pub total: usize,
    /// Fraction of test sequences whose prediction matches their label
    pub accuracy: f64,
}
