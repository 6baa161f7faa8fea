pub mod pair_dataset;
pub mod synthetic;
pub mod traits;

pub use pair_dataset::PairDataset;
pub use synthetic::linear_pairs;
pub use traits::Dataset;
