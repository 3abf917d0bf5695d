use crate::error::{KnnError, Result};
use crate::kmer::Kmer;

/// Similarity of a query sequence to one training sequence.
///
/// `index` points into the training set the query was scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub index: usize,
    pub score: usize,
}

/// How a sequence is rendered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    String,
    List,
    Kmers,
}

/// A labelled sequence together with the state derived from it during a
/// classification run.
#[derive(Debug, Clone)]
pub struct Sequence {
    seq: String,
    length: usize,
    bases: Vec<char>,
    id: String,
    predicted: Option<String>,
    kmers: Vec<Kmer>,
    features: Vec<usize>,
    neighbors: Vec<Neighbor>,
}

impl Sequence {
    pub fn new(seq: impl Into<String>, id: impl Into<String>) -> Self {
        let seq = seq.into();
        let bases: Vec<char> = seq.chars().collect();
        Sequence {
            length: bases.len(),
            seq,
            bases,
            id: id.into(),
            predicted: None,
            kmers: Vec::new(),
            features: Vec::new(),
            neighbors: Vec::new(),
        }
    }

    /// Slide a window of `size` over the raw sequence, replacing any
    /// previously built k-mers. Sequences shorter than `size` get none.
    pub fn build_kmers(&mut self, size: usize) -> Result<()> {
        if size == 0 {
            return Err(KnnError::InvalidInput("k-mer size must be positive".to_string()));
        }
        if size > self.length {
            self.kmers.clear();
            return Ok(());
        }
        let chars: Vec<char> = self.seq.chars().collect();
        self.kmers = chars.windows(size).map(Kmer::new).collect();
        Ok(())
    }

    pub fn get_base(&self, pos: usize) -> Result<char> {
        if pos >= self.length {
            return Err(KnnError::OutOfRange {
                pos,
                length: self.length,
            });
        }
        if self.seq.is_ascii() {
            Ok(self.seq.as_bytes()[pos] as char)
        } else {
            self.seq.chars().nth(pos).ok_or(KnnError::OutOfRange {
                pos,
                length: self.length,
            })
        }
    }

    /// Number of characters in the raw sequence
    pub fn get_length(&self) -> usize {
        self.length
    }

    /// Re-derive the character list from the raw sequence
    pub fn to_list(&mut self) {
        self.bases = self.seq.chars().collect();
    }

    /// Reverse the character list in place. The raw sequence is untouched.
    pub fn reverse(&mut self) {
        self.bases.reverse();
    }

    pub fn render(&self, rep: Representation) -> String {
        match rep {
            Representation::String => self.seq.clone(),
            Representation::List => self
                .bases
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            Representation::Kmers => self
                .kmers
                .iter()
                .map(Kmer::sequence)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    pub fn seq(&self) -> &str {
        &self.seq
    }

    pub fn bases(&self) -> &[char] {
        &self.bases
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn predicted(&self) -> Option<&str> {
        self.predicted.as_deref()
    }

    pub fn kmers(&self) -> &[Kmer] {
        &self.kmers
    }

    pub fn features(&self) -> &[usize] {
        &self.features
    }

    /// Nearest training sequences from the last run, most similar first
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    pub fn is_correct(&self) -> bool {
        self.predicted.as_deref() == Some(self.id.as_str())
    }

    pub(crate) fn set_features(&mut self, features: Vec<usize>) {
        self.features = features;
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: Vec<Neighbor>) {
        self.neighbors = neighbors;
    }

    pub(crate) fn set_prediction(&mut self, label: String) {
        self.predicted = Some(label);
    }

    /// Drop the state left behind by a previous classification run
    pub(crate) fn clear_results(&mut self) {
        self.predicted = None;
        self.features.clear();
        self.neighbors.clear();
    }
}
