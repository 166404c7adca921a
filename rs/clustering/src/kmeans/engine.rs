use log::debug;
use rand::Rng;

use crate::distance::l2::L2DistanceCalculator;
use crate::error::Result;
use crate::kmeans::assigner::Assigner;
use crate::kmeans::cluster::{Cluster, ClusterSummary};
use crate::kmeans::seeder::CentroidSeeder;
use crate::point::Point;
use crate::DistanceCalculator;

/// Single-pass clustering around randomly sampled seeds.
///
/// Each run samples `num_clusters` points from the dataset and assigns every point
/// to its closest seed. Centroids are never recomputed and points are never
/// reassigned, so given the same seeds the partition is fully deterministic.
pub struct ClusteringEngine<D: DistanceCalculator = L2DistanceCalculator> {
    pub num_clusters: usize,
    distance_calculator: D,
}

#[derive(Debug)]
pub struct ClusteringResult {
    pub seeds: Vec<Point>,
    pub clusters: Vec<Cluster>,
}

impl ClusteringEngine<L2DistanceCalculator> {
    pub fn new(num_clusters: usize) -> Self {
        Self::with_distance_calculator(num_clusters, L2DistanceCalculator::new())
    }
}

impl<D: DistanceCalculator> ClusteringEngine<D> {
    pub fn with_distance_calculator(num_clusters: usize, distance_calculator: D) -> Self {
        Self {
            num_clusters,
            distance_calculator,
        }
    }

    pub fn fit(&self, data: &[Point]) -> Result<ClusteringResult> {
        self.fit_with_rng(data, &mut rand::thread_rng())
    }

    pub fn fit_with_rng<R: Rng + ?Sized>(
        &self,
        data: &[Point],
        rng: &mut R,
    ) -> Result<ClusteringResult> {
        let seeds = CentroidSeeder::new(self.num_clusters).seed(data, rng)?;
        debug!("Seeded {} clusters", seeds.len());

        let clusters = self.fit_with_seeds(data, seeds.clone());
        Ok(ClusteringResult { seeds, clusters })
    }

    /// Partitions `data` around an already chosen seed set.
    pub fn fit_with_seeds(&self, data: &[Point], seeds: Vec<Point>) -> Vec<Cluster> {
        let clusters = Assigner::new(&seeds, &self.distance_calculator).assign(data);
        debug!(
            "Assigned {} points to {} clusters, sizes {:?}",
            data.len(),
            clusters.len(),
            clusters.iter().map(Cluster::len).collect::<Vec<_>>()
        );
        clusters
    }
}

impl ClusteringResult {
    pub fn num_clusters(&self) -> usize {
        self.clusters.len()
    }

    pub fn summary(&self, index: usize) -> Option<Result<ClusterSummary>> {
        self.clusters.get(index).map(Cluster::summary)
    }

    /// One summary per cluster, in cluster order.
    pub fn summaries(&self) -> Vec<Result<ClusterSummary>> {
        self.clusters.iter().map(Cluster::summary).collect()
    }
}
