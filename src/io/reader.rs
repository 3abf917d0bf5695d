use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use needletail::parse_fastx_file;
use log::{info, warn};

use crate::kmer::Kmer;
use crate::sequence::Sequence;

/// A FASTA file of labelled sequences.
///
/// The label of a record is the header text after its first `=`
/// (`>seq1 class=exon` is labelled `exon`), or the whole header when it
/// has none.
pub struct FastaFile {
    path: PathBuf,
}

impl FastaFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FastaFile {
            path: path.as_ref().to_owned(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record of the file, in file order
    pub fn sequences(&self) -> Result<Vec<Sequence>> {
        info!("Processing file: {}", self.path.display());

        let size = std::fs::metadata(&self.path)
            .with_context(|| format!("Failed to open file: {}", self.path.display()))?
            .len();
        if size == 0 {
            warn!("{} is empty", self.path.display());
            return Ok(Vec::new());
        }

        let mut reader = parse_fastx_file(&self.path)
            .with_context(|| format!("Failed to open file: {}", self.path.display()))?;

        let mut sequences = Vec::new();
        let mut num_non_acgt = 0;

        while let Some(record) = reader.next() {
            let record = record.with_context(|| {
                format!("Failed to parse sequence record in {}", self.path.display())
            })?;

            let seq = String::from_utf8_lossy(&record.seq()).into_owned();
            let header = String::from_utf8_lossy(record.id());
            let label = parse_label(&header);

            if seq.bytes().any(|b| !matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T')) {
                num_non_acgt += 1;
            }

            sequences.push(Sequence::new(seq, label));
        }

        info!("Processed {} sequences from {}", sequences.len(), self.path.display());
        if num_non_acgt > 0 {
            warn!("{} sequences contain characters other than A, C, G and T", num_non_acgt);
        }

        Ok(sequences)
    }

    /// Every distinct k-mer of length `size` across all records, sorted
    pub fn distinct_kmers(&self, size: usize) -> Result<Vec<Kmer>> {
        let mut vocabulary = BTreeSet::new();
        for mut seq in self.sequences()? {
            seq.build_kmers(size)?;
            vocabulary.extend(seq.kmers().iter().cloned());
        }
        Ok(vocabulary.into_iter().collect())
    }
}

fn parse_label(header: &str) -> String {
    let header = header.trim_end();
    match header.find('=') {
        Some(idx) => header[idx + 1..].to_string(),
        None => header.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_process_labelled_fasta() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("test.fasta");
        let mut file = File::create(&file_path)?;

        // wrapped sequence lines are joined
        writeln!(file, ">seq1 class=exon\nACGT\nTTGA\n>seq2 class=intron\nGTCA")?;

        let sequences = FastaFile::new(&file_path).sequences()?;

        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].seq(), "ACGTTTGA");
        assert_eq!(sequences[0].id(), "exon");
        assert_eq!(sequences[1].seq(), "GTCA");
        assert_eq!(sequences[1].id(), "intron");

        Ok(())
    }

    #[test]
    fn test_non_acgt_sequences_kept() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("test.fasta");
        let mut file = File::create(&file_path)?;
        writeln!(file, ">a=exon\nACGT\n>b=intron\nNNNN\n>c=exon\nGTCA")?;

        let sequences = FastaFile::new(&file_path).sequences()?;
        assert_eq!(sequences.len(), 3);
        assert_eq!(sequences[1].seq(), "NNNN");

        Ok(())
    }

    #[test]
    fn test_empty_file() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("empty.fasta");
        File::create(&file_path)?;

        assert!(FastaFile::new(&file_path).sequences()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = FastaFile::new(dir.path().join("missing.fasta")).sequences();
        assert!(result.is_err());
    }

    #[test]
    fn test_distinct_kmers() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("test.fasta");
        let mut file = File::create(&file_path)?;
        writeln!(file, ">a=exon\nACGA\n>b=intron\nCGAC\n>c=exon\nA")?;

        let kmers: Vec<String> = FastaFile::new(&file_path)
            .distinct_kmers(2)?
            .iter()
            .map(|kmer| kmer.to_string())
            .collect();
        assert_eq!(kmers, vec!["AC", "CG", "GA"]);

        assert!(FastaFile::new(&file_path).distinct_kmers(0).is_err());
        Ok(())
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(parse_label("seq1 class=exon"), "exon");
        assert_eq!(parse_label("seq1 a=b=c"), "b=c");
        assert_eq!(parse_label("intron "), "intron");
    }
}
