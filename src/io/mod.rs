pub(crate) mod reader;
pub(crate) mod writer;

pub use reader::FastaFile;
pub use writer::{AccuracyReport, ReportFormat, ReportWriter};
