use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use spectrum_knn::io::ReportFormat;
use spectrum_knn::{Representation, TieBreak};

#[derive(Parser, Debug)]
#[command(author, version, about = "Spectrum kernel KNN sequence classifier")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to log file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a test set against a training set
    Classify(ClassifyCommand),

    /// Run every combination of training set, k-mer size and neighbor count
    Sweep(SweepCommand),

    /// Print the sequences of a FASTA file
    Inspect(InspectCommand),

    /// List the distinct k-mers of a FASTA file
    Kmers(KmersCommand),
}

/// Options shared by every classification run
#[derive(Args, Debug)]
pub struct VoteOptions {
    /// Label favoured on tied votes
    #[arg(long, default_value = "exon")]
    pub tie_break: String,

    /// Settle tied votes by the nearest neighbor instead of a favoured label
    #[arg(long, conflicts_with = "tie_break")]
    pub first_seen: bool,

    /// Score pairs from sparse k-mer counts instead of per-pair feature vectors
    #[arg(long)]
    pub sparse: bool,

    /// Report format
    #[arg(short = 'f', long, value_enum, default_value = "tsv")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ClassifyCommand {
    /// Labelled training FASTA file
    #[arg(long)]
    pub train: PathBuf,

    /// Labelled test FASTA file
    #[arg(long)]
    pub test: PathBuf,

    /// K-mer size to use
    #[arg(short, long, default_value = "4")]
    pub kmer_size: usize,

    /// Number of neighbors voting on each prediction
    #[arg(short, long, default_value = "3")]
    pub neighbors: usize,

    /// Report file to append to (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub vote: VoteOptions,
}

#[derive(Parser, Debug)]
pub struct SweepCommand {
    /// Labelled training FASTA files
    #[arg(long, required = true, num_args = 1..)]
    pub train: Vec<PathBuf>,

    /// Labelled test FASTA file
    #[arg(long)]
    pub test: PathBuf,

    /// K-mer sizes to try
    #[arg(short, long, value_delimiter = ',', default_value = "2,4,6,8")]
    pub kmer_sizes: Vec<usize>,

    /// Neighbor counts to try
    #[arg(short, long, value_delimiter = ',', default_value = "1,3,5,7")]
    pub neighbors: Vec<usize>,

    /// Report file, replaced if it exists
    #[arg(short, long)]
    pub output: PathBuf,

    #[command(flatten)]
    pub vote: VoteOptions,
}

#[derive(Parser, Debug)]
pub struct InspectCommand {
    /// FASTA file to print
    pub input: PathBuf,

    /// How each sequence is printed
    #[arg(short = 'f', long, value_enum, default_value = "string")]
    pub format: InspectFormat,

    /// K-mer size used by the kmers format
    #[arg(short, long, default_value = "4")]
    pub kmer_size: usize,
}

#[derive(Parser, Debug)]
pub struct KmersCommand {
    /// FASTA file to read
    pub input: PathBuf,

    /// K-mer size to use
    #[arg(short, long)]
    pub kmer_size: usize,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum OutputFormat {
    Tsv,
    Json,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum InspectFormat {
    String,
    List,
    Kmers,
}

impl VoteOptions {
    pub fn tie_break(&self) -> TieBreak {
        if self.first_seen {
            TieBreak::FirstSeen
        } else {
            TieBreak::Prefer(self.tie_break.clone())
        }
    }
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Tsv => Self::Tsv,
            OutputFormat::Json => Self::Json,
        }
    }
}

impl From<InspectFormat> for Representation {
    fn from(format: InspectFormat) -> Self {
        match format {
            InspectFormat::String => Self::String,
            InspectFormat::List => Self::List,
            InspectFormat::Kmers => Self::Kmers,
        }
    }
}
