use std::fmt;

/// A contiguous substring of fixed length taken from a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kmer {
    sequence: String,
}

impl Kmer {
    pub fn new(sequence: &[char]) -> Self {
        Kmer {
            sequence: sequence.iter().collect(),
        }
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Number of characters in the k-mer
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl From<&str> for Kmer {
    fn from(sequence: &str) -> Self {
        Kmer {
            sequence: sequence.to_string(),
        }
    }
}

impl fmt::Display for Kmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sequence)
    }
}
