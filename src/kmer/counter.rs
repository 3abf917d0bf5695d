use fxhash::FxHashMap;

use super::types::Kmer;

/// Sparse k-mer histogram of a single sequence.
///
/// Scoring two histograms against each other gives the same value as the
/// dense feature vectors built over their vocabulary union, without
/// materialising the union.
#[derive(Debug, Clone, Default)]
pub struct KmerCounts {
    counts: FxHashMap<Kmer, usize>,
}

impl KmerCounts {
    /// Count every k-mer in `kmers`
    pub fn from_kmers(kmers: &[Kmer]) -> Self {
        let mut counts = FxHashMap::default();
        for kmer in kmers {
            counts
                .entry(kmer.clone())
                .and_modify(|count| *count += 1)
                .or_insert(1);
        }
        KmerCounts { counts }
    }

    /// Occurrences of `kmer`, zero when absent
    pub fn count(&self, kmer: &Kmer) -> usize {
        self.counts.get(kmer).copied().unwrap_or(0)
    }

    /// Get the number of unique k-mers
    pub fn unique_kmers(&self) -> usize {
        self.counts.len()
    }

    /// Get the total number of k-mers (including duplicates)
    pub fn total_kmers(&self) -> usize {
        self.counts.values().sum()
    }

    /// Inner product of two histograms over their shared k-mers
    pub fn dot(&self, other: &KmerCounts) -> usize {
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .map(|(kmer, count)| count * large.count(kmer))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kmers(items: &[&str]) -> Vec<Kmer> {
        items.iter().map(|s| Kmer::from(*s)).collect()
    }

    #[test]
    fn test_basic_counting() {
        let counts = KmerCounts::from_kmers(&kmers(&["ATG", "TGA", "GAT", "ATG"]));
        assert_eq!(counts.count(&Kmer::from("ATG")), 2);
        assert_eq!(counts.count(&Kmer::from("TGA")), 1);
        assert_eq!(counts.count(&Kmer::from("CCC")), 0);
        assert_eq!(counts.unique_kmers(), 3);
        assert_eq!(counts.total_kmers(), 4);
    }

    #[test]
    fn test_empty_counts() {
        let counts = KmerCounts::from_kmers(&[]);
        assert_eq!(counts.unique_kmers(), 0);
        assert_eq!(counts.total_kmers(), 0);
        assert_eq!(counts.dot(&counts), 0);
    }

    #[test]
    fn test_sparse_dot() {
        let a = KmerCounts::from_kmers(&kmers(&["AT", "TC", "CG", "AT"]));
        let b = KmerCounts::from_kmers(&kmers(&["CG", "GA", "AT"]));
        // AT: 2*1, CG: 1*1
        assert_eq!(a.dot(&b), 3);
        assert_eq!(b.dot(&a), 3);
        // 2*2 + 1 + 1
        assert_eq!(a.dot(&a), 6);
    }
}
