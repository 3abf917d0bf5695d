use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

const TSV_HEADER: &str = "SampleSize\tKmerSize\tNeighbors\tAccuracy";

/// Accuracy of one (training set, k-mer size, neighbor count) configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracyReport {
    /// Training sequences per class, assuming two balanced classes
    pub sample_size: usize,
    pub kmer_size: usize,
    pub neighbors: usize,
    /// Accuracy rounded to three decimals
    pub accuracy: f64,
}

impl AccuracyReport {
    pub fn new(train_len: usize, kmer_size: usize, neighbors: usize, accuracy: f64) -> Self {
        AccuracyReport {
            sample_size: train_len / 2,
            kmer_size,
            neighbors,
            accuracy: (accuracy * 1000.0).round() / 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Tsv,
    /// One JSON object per line
    Json,
}

/// Writes accuracy reports as a table or as JSON lines
pub struct ReportWriter {
    writer: Box<dyn Write>,
    format: ReportFormat,
}

impl ReportWriter {
    /// Replace `path` with a fresh report
    pub fn create<P: AsRef<Path>>(path: P, format: ReportFormat) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create report: {}", path.display()))?;
        info!("Writing report to {}", path.display());
        Self::with_header(Box::new(file), format)
    }

    /// Append to `path`, starting a new report if it does not exist yet
    pub fn append<P: AsRef<Path>>(path: P, format: ReportFormat) -> Result<Self> {
        let path = path.as_ref();
        let is_new = std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open report: {}", path.display()))?;

        if is_new {
            Self::with_header(Box::new(file), format)
        } else {
            Ok(ReportWriter {
                writer: Box::new(file),
                format,
            })
        }
    }

    pub fn stdout(format: ReportFormat) -> Result<Self> {
        Self::with_header(Box::new(std::io::stdout()), format)
    }

    fn with_header(mut writer: Box<dyn Write>, format: ReportFormat) -> Result<Self> {
        if format == ReportFormat::Tsv {
            writeln!(writer, "{}", TSV_HEADER)?;
        }
        Ok(ReportWriter { writer, format })
    }

    pub fn write(&mut self, report: &AccuracyReport) -> Result<()> {
        match self.format {
            ReportFormat::Tsv => writeln!(
                self.writer,
                "{}\t{}\t{}\t{:.3}",
                report.sample_size, report.kmer_size, report.neighbors, report.accuracy
            )?,
            ReportFormat::Json => {
                serde_json::to_writer(&mut self.writer, report)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_report_rounding() {
        let report = AccuracyReport::new(20, 4, 3, 2.0 / 3.0);
        assert_eq!(report.sample_size, 10);
        assert_eq!(report.accuracy, 0.667);
    }

    #[test]
    fn test_tsv_create_and_append() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("knn.txt");

        let mut writer = ReportWriter::create(&path, ReportFormat::Tsv)?;
        writer.write(&AccuracyReport::new(10, 2, 1, 0.75))?;
        drop(writer);

        let mut writer = ReportWriter::append(&path, ReportFormat::Tsv)?;
        writer.write(&AccuracyReport::new(30, 4, 3, 1.0))?;
        drop(writer);

        let contents = std::fs::read_to_string(&path)?;
        assert_eq!(
            contents,
            "SampleSize\tKmerSize\tNeighbors\tAccuracy\n5\t2\t1\t0.750\n15\t4\t3\t1.000\n"
        );
        Ok(())
    }

    #[test]
    fn test_append_starts_new_report() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("knn.txt");

        let mut writer = ReportWriter::append(&path, ReportFormat::Tsv)?;
        writer.write(&AccuracyReport::new(4, 3, 1, 0.5))?;
        drop(writer);

        let contents = std::fs::read_to_string(&path)?;
        assert_eq!(contents, "SampleSize\tKmerSize\tNeighbors\tAccuracy\n2\t3\t1\t0.500\n");
        Ok(())
    }

    #[test]
    fn test_json_lines() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("knn.jsonl");

        let mut writer = ReportWriter::create(&path, ReportFormat::Json)?;
        writer.write(&AccuracyReport::new(10, 2, 1, 0.25))?;
        drop(writer);

        let contents = std::fs::read_to_string(&path)?;
        let value: serde_json::Value = serde_json::from_str(contents.trim())?;
        assert_eq!(value["sample_size"], 5);
        assert_eq!(value["kmer_size"], 2);
        assert_eq!(value["neighbors"], 1);
        assert_eq!(value["accuracy"], 0.25);
        Ok(())
    }
}
