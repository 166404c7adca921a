use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{ClusteringError, Result};
use crate::point::Point;

/// Picks the initial centroids by sampling dataset elements without replacement.
pub struct CentroidSeeder {
    pub num_clusters: usize,
}

impl CentroidSeeder {
    pub fn new(num_clusters: usize) -> Self {
        Self { num_clusters }
    }

    /// Returns `num_clusters` points drawn uniformly at random from `data`.
    ///
    /// The sampled elements are distinct, but two of them may still share
    /// coordinates if the dataset itself contains duplicates.
    pub fn seed<R: Rng + ?Sized>(&self, data: &[Point], rng: &mut R) -> Result<Vec<Point>> {
        if self.num_clusters < 1 || self.num_clusters > data.len() {
            return Err(ClusteringError::InvalidClusterCount {
                requested: self.num_clusters,
                available: data.len(),
            });
        }

        let seeds = data
            .choose_multiple(rng, self.num_clusters)
            .copied()
            .collect::<Vec<Point>>();
        debug!("Sampled {} seeds from {} points", seeds.len(), data.len());
        Ok(seeds)
    }
}
