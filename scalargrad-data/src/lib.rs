//! Sample streams for circuit training loops: datasets of scalar
//! `(input, target)` pairs and samplers producing the index order in which a
//! loop visits them.

pub mod datasets;
pub mod samplers;

// Re-export main components
pub use datasets::{linear_pairs, Dataset, PairDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
