use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use log::info;

use crate::classify::{ClassifierConfig, KnnClassifier, Scoring, TieBreak};
use crate::io::{AccuracyReport, FastaFile, ReportFormat, ReportWriter};
use crate::kmer::SpectrumKernel;
use crate::sequence::Sequence;

/// Every combination of training file, k-mer size and neighbor count,
/// classified against one test file.
#[derive(Debug, Clone)]
pub struct Sweep {
    pub train: Vec<PathBuf>,
    pub test: PathBuf,
    pub kmer_sizes: Vec<usize>,
    pub neighbors: Vec<usize>,
    pub tie_break: TieBreak,
    pub scoring: Scoring,
}

impl Sweep {
    /// Run every combination, training file outermost and neighbor count
    /// innermost. Stops at the first failing combination.
    pub fn run(&self) -> Result<Vec<AccuracyReport>> {
        let test = read_sequences(&self.test)?;

        let mut reports = Vec::new();
        for train_path in &self.train {
            let train = read_sequences(train_path)?;
            for &kmer_size in &self.kmer_sizes {
                for &neighbors in &self.neighbors {
                    info!(
                        "Running {} with k-mer size {} and {} neighbors",
                        train_path.display(),
                        kmer_size,
                        neighbors
                    );
                    let config = ClassifierConfig::new(neighbors)
                        .with_tie_break(self.tie_break.clone())
                        .with_scoring(self.scoring);
                    let report = run_configuration(train.clone(), test.clone(), kmer_size, config)
                        .with_context(|| format!("Sweep failed on {}", train_path.display()))?;
                    reports.push(report);
                }
            }
        }
        Ok(reports)
    }

    /// Run the sweep and replace `output` with its report.
    ///
    /// The file is only touched once every combination has succeeded.
    pub fn write<P: AsRef<Path>>(&self, output: P, format: ReportFormat) -> Result<usize> {
        let reports = self.run()?;

        let mut writer = ReportWriter::create(output.as_ref(), format)?;
        for report in &reports {
            writer.write(report)?;
        }
        info!("Wrote {} results to {}", reports.len(), output.as_ref().display());
        Ok(reports.len())
    }
}

pub fn read_sequences(path: &Path) -> Result<Vec<Sequence>> {
    FastaFile::new(path)
        .sequences()
        .with_context(|| format!("Failed to read sequences from {}", path.display()))
}

/// Classify `test` against `train` with one parameter combination
pub fn run_configuration(
    train: Vec<Sequence>,
    test: Vec<Sequence>,
    kmer_size: usize,
    config: ClassifierConfig,
) -> Result<AccuracyReport> {
    let train_len = train.len();
    let neighbors = config.neighbors;

    let kernel = SpectrumKernel::new(kmer_size)?;
    let mut knn = KnnClassifier::new(train, test, kernel, config)?;
    let accuracy = knn.accuracy().with_context(|| {
        format!("Classification failed for k-mer size {} with {} neighbors", kmer_size, neighbors)
    })?;

    Ok(AccuracyReport::new(train_len, kmer_size, neighbors, accuracy))
}
