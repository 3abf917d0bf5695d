use log::{debug, info};

use super::types::{ClassifierConfig, RunSummary, Scoring};
use super::vote::{majority_vote, rank_neighbors};
use crate::error::{KnnError, Result};
use crate::kmer::{KmerCounts, SpectrumKernel};
use crate::sequence::{Neighbor, Sequence};

/// K-nearest-neighbor classifier over spectrum kernel similarities.
///
/// Owns its training and test sets for the duration of a run. Each test
/// sequence is scored against every training sequence, its closest
/// neighbors vote on a label and the prediction is written back onto it.
pub struct KnnClassifier {
    train: Vec<Sequence>,
    test: Vec<Sequence>,
    kernel: SpectrumKernel,
    config: ClassifierConfig,
}

impl KnnClassifier {
    pub fn new(
        train: Vec<Sequence>,
        test: Vec<Sequence>,
        kernel: SpectrumKernel,
        config: ClassifierConfig,
    ) -> Result<Self> {
        if train.is_empty() {
            return Err(KnnError::EmptyInput("training set has no sequences".to_string()));
        }
        config.validate(train.len())?;

        Ok(KnnClassifier {
            train,
            test,
            kernel,
            config,
        })
    }

    pub fn train(&self) -> &[Sequence] {
        &self.train
    }

    pub fn test(&self) -> &[Sequence] {
        &self.test
    }

    pub fn kernel(&self) -> &SpectrumKernel {
        &self.kernel
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Build k-mers for every training and test sequence
    pub fn prepare(&mut self) -> Result<()> {
        let size = self.kernel.size();
        for seq in self.train.iter_mut().chain(self.test.iter_mut()) {
            seq.build_kmers(size)?;
        }
        Ok(())
    }

    /// Classify every test sequence and score the predictions
    pub fn run(&mut self) -> Result<RunSummary> {
        if self.test.is_empty() {
            return Err(KnnError::EmptyInput("test set has no sequences".to_string()));
        }
        info!(
            "Classifying {} sequences against {} training sequences (k-mer size {}, {} neighbors, {:?} scoring, tie-break: {})",
            self.test.len(),
            self.train.len(),
            self.kernel.size(),
            self.config.neighbors,
            self.config.scoring,
            self.config.tie_break,
        );

        self.prepare()?;

        let train_counts: Option<Vec<KmerCounts>> = match self.config.scoring {
            Scoring::PerPair => None,
            Scoring::Sparse => Some(
                self.train
                    .iter()
                    .map(|seq| KmerCounts::from_kmers(seq.kmers()))
                    .collect(),
            ),
        };

        for query in self.test.iter_mut() {
            query.clear_results();

            let scored = match &train_counts {
                None => score_per_pair(&self.kernel, query, &mut self.train)?,
                Some(counts) => score_sparse(&self.kernel, query, counts),
            };
            let nearest = rank_neighbors(&scored, self.config.neighbors);

            let labels = nearest.iter().map(|n| self.train[n.index].id());
            let label = majority_vote(labels, &self.config.tie_break)
                .ok_or_else(|| KnnError::EmptyInput("no neighbors to vote".to_string()))?;

            debug!(
                "Predicted {} (actual {}) from neighbors {:?}",
                label,
                query.id(),
                nearest
            );
            query.set_neighbors(nearest);
            query.set_prediction(label);
        }

        let summary = summarize(&self.test)?;
        info!(
            "Classified {}/{} correctly, accuracy {:.3}",
            summary.correct, summary.total, summary.accuracy
        );
        Ok(summary)
    }

    /// Run the classifier and return only its accuracy
    pub fn accuracy(&mut self) -> Result<f64> {
        Ok(self.run()?.accuracy)
    }
}

/// Fraction of `sequences` whose prediction matches their label
pub fn accuracy(sequences: &[Sequence]) -> Result<f64> {
    Ok(summarize(sequences)?.accuracy)
}

fn summarize(sequences: &[Sequence]) -> Result<RunSummary> {
    if sequences.is_empty() {
        return Err(KnnError::EmptyInput("no sequences to evaluate".to_string()));
    }
    let total = sequences.len();
    let correct = sequences.iter().filter(|seq| seq.is_correct()).count();
    Ok(RunSummary {
        correct,
        total,
        accuracy: correct as f64 / total as f64,
    })
}

fn score_per_pair(
    kernel: &SpectrumKernel,
    query: &mut Sequence,
    train: &mut [Sequence],
) -> Result<Vec<Neighbor>> {
    train
        .iter_mut()
        .enumerate()
        .map(|(index, other)| {
            let score = kernel.similarity(query, other)?;
            Ok(Neighbor { index, score })
        })
        .collect()
}

fn score_sparse(kernel: &SpectrumKernel, query: &Sequence, train: &[KmerCounts]) -> Vec<Neighbor> {
    let counts = KmerCounts::from_kmers(query.kmers());
    train
        .iter()
        .enumerate()
        .map(|(index, other)| Neighbor {
            index,
            score: kernel.sparse_similarity(&counts, other),
        })
        .collect()
}
