pub(crate) mod types;
pub(crate) mod counter;
pub(crate) mod kernel;

pub use types::Kmer;
pub use counter::KmerCounts;
pub use kernel::SpectrumKernel;
