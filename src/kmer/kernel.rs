use fxhash::FxHashSet;
use log::debug;

use super::counter::KmerCounts;
use super::types::Kmer;
use crate::error::{KnnError, Result};
use crate::sequence::Sequence;

/// Spectrum kernel: similarity of two sequences is the dot product of their
/// k-mer count vectors over a shared vocabulary.
///
/// The kernel carries no per-call state and can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrumKernel {
    size: usize,
}

impl SpectrumKernel {
    /// Create a kernel over k-mers of length `size`
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(KnnError::InvalidInput("k-mer size must be positive".to_string()));
        }
        Ok(SpectrumKernel { size })
    }

    /// Get the k-mer size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distinct k-mers appearing in either collection.
    ///
    /// The order of the result is arbitrary but fixed for the returned value;
    /// feature vectors compared against each other must share it.
    pub fn vocabulary_union(&self, kmers1: &[Kmer], kmers2: &[Kmer]) -> Vec<Kmer> {
        let mut seen: FxHashSet<&Kmer> = FxHashSet::default();
        kmers1
            .iter()
            .chain(kmers2)
            .filter(|kmer| seen.insert(*kmer))
            .cloned()
            .collect()
    }

    /// Count each vocabulary k-mer in `sequence` and store the vector on it
    pub fn feature_vector<'a>(&self, sequence: &'a mut Sequence, vocabulary: &[Kmer]) -> &'a [usize] {
        let features: Vec<usize> = vocabulary
            .iter()
            .map(|word| sequence.kmers().iter().filter(|kmer| *kmer == word).count())
            .collect();
        sequence.set_features(features);
        sequence.features()
    }

    pub fn dot_product(&self, v1: &[usize], v2: &[usize]) -> Result<usize> {
        if v1.len() != v2.len() {
            return Err(KnnError::DimensionMismatch {
                left: v1.len(),
                right: v2.len(),
            });
        }
        Ok(v1.iter().zip(v2).map(|(a, b)| a * b).sum())
    }

    /// Score two sequences by building their union vocabulary and dense
    /// feature vectors. Both sequences keep the vectors afterwards.
    pub fn similarity(&self, query: &mut Sequence, other: &mut Sequence) -> Result<usize> {
        let vocabulary = self.vocabulary_union(query.kmers(), other.kmers());
        self.feature_vector(query, &vocabulary);
        self.feature_vector(other, &vocabulary);
        let score = self.dot_product(query.features(), other.features())?;
        debug!(
            "Vocabulary of {} k-mers, similarity {}",
            vocabulary.len(),
            score
        );
        Ok(score)
    }

    /// Same score as [`similarity`](Self::similarity), from precomputed histograms
    pub fn sparse_similarity(&self, query: &KmerCounts, other: &KmerCounts) -> usize {
        query.dot(other)
    }
}
