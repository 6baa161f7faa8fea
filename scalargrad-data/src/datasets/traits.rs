// scalargrad-data/src/datasets/traits.rs

use scalargrad_core::ScalarGradError;

/// Represents a dataset that can be iterated over and accessed by index.
///
/// A dataset is a collection of samples; for scalar regression and
/// classification these are usually `(input, target)` pairs.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarGradError::IndexOutOfBounds`] if `index` is not below
    /// [`len`](Dataset::len).
    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
