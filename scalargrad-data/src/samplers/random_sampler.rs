// scalargrad-data/src/samplers/random_sampler.rs

use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A sampler that randomly samples indices from a dataset.
///
/// With replacement it draws `num_samples` independent indices, the usual
/// choice for long stochastic training loops (one random sample per
/// iteration). Without replacement it yields a shuffled permutation.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    seed: Option<u64>,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The total number of samples to draw. If `None`, it
    ///   defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            seed: None,
        }
    }

    /// Fixes the RNG seed so every call to [`iter`](Sampler::iter) replays
    /// the same index sequence. Without a seed, each call draws fresh
    /// entropy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }

        let mut rng = self.rng();
        let actual_num_samples = self.num_samples.unwrap_or(dataset_len);

        if self.replacement {
            let indices: Vec<usize> = (0..actual_num_samples)
                .map(|_| rng.gen_range(0..dataset_len))
                .collect();
            Box::new(indices.into_iter())
        } else {
            if actual_num_samples > dataset_len {
                eprintln!(
                    "Warning: RandomSampler: num_samples ({}) > dataset_len ({}) without replacement. Returning empty iterator.",
                    actual_num_samples, dataset_len
                );
                return Box::new(std::iter::empty());
            }
            let mut indices: Vec<usize> = (0..dataset_len).collect();
            indices.shuffle(&mut rng);
            let selected_indices = indices
                .into_iter()
                .take(actual_num_samples)
                .collect::<Vec<_>>();
            Box::new(selected_indices.into_iter())
        }
    }

    fn len(&self, dataset_len: usize) -> usize {
        self.num_samples.unwrap_or(dataset_len)
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
