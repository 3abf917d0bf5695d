pub(crate) mod types;
pub(crate) mod vote;
pub(crate) mod knn;

pub use types::{ClassifierConfig, RunSummary, Scoring, TieBreak, DEFAULT_PREFERRED_LABEL};
pub use vote::{majority_vote, rank_neighbors};
pub use knn::{accuracy, KnnClassifier};
