//! Spectrum kernel k-nearest-neighbor classification of short sequences.
//!
//! Sequences are broken into k-mers, compared pairwise through the dot
//! product of their k-mer count vectors and labelled by a vote among the
//! most similar training sequences.

pub mod classify;
pub mod error;
pub mod io;
pub mod kmer;
pub mod sequence;
pub mod sweep;

pub use classify::{ClassifierConfig, KnnClassifier, RunSummary, Scoring, TieBreak};
pub use error::{KnnError, Result};
pub use kmer::{Kmer, KmerCounts, SpectrumKernel};
pub use sequence::{Neighbor, Representation, Sequence};
