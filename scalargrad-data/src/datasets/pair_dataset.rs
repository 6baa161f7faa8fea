// scalargrad-data/src/datasets/pair_dataset.rs

use super::traits::Dataset;
use scalargrad_core::ScalarGradError;
use std::path::Path;

/// An in-memory dataset of `(input, target)` scalar pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairDataset {
    pairs: Vec<(f64, f64)>,
}

impl PairDataset {
    /// Creates a new `PairDataset` from a vector of pairs.
    pub fn new(pairs: Vec<(f64, f64)>) -> Self {
        Self { pairs }
    }

    /// Loads pairs from a text file with one whitespace-separated
    /// `input target` pair per line. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarGradError::DataLoad`] when the file cannot be read or
    /// a non-blank line does not hold exactly two floats; the message names
    /// the offending line.
    pub fn from_text_file(path: impl AsRef<Path>) -> Result<Self, ScalarGradError> {
        let path = path.as_ref();
        let load_err = |message: String| ScalarGradError::DataLoad {
            path: path.display().to_string(),
            message,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
        let mut pairs = Vec::new();
        for (line_no, line) in contents.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            if fields.len() != 2 {
                return Err(load_err(format!(
                    "line {}: expected 2 columns, found {}",
                    line_no + 1,
                    fields.len()
                )));
            }
            let input: f64 = fields[0].parse().map_err(|_| {
                load_err(format!("line {}: invalid float {:?}", line_no + 1, fields[0]))
            })?;
            let target: f64 = fields[1].parse().map_err(|_| {
                load_err(format!("line {}: invalid float {:?}", line_no + 1, fields[1]))
            })?;
            pairs.push((input, target));
        }
        Ok(Self { pairs })
    }
}

impl Dataset for PairDataset {
    type Item = (f64, f64);

    /// Returns the pair at the given index (copied out; pairs are plain
    /// scalars).
    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError> {
        self.pairs
            .get(index)
            .copied()
            .ok_or(ScalarGradError::IndexOutOfBounds {
                index,
                len: self.pairs.len(),
            })
    }

    fn len(&self) -> usize {
        self.pairs.len()
    }
}

#[cfg(test)]
#[path = "pair_dataset_test.rs"]
mod tests;
