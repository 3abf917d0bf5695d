pub(crate) mod types;

pub use types::{Neighbor, Representation, Sequence};
