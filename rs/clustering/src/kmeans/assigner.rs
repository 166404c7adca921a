use crate::kmeans::cluster::Cluster;
use crate::point::Point;
use crate::DistanceCalculator;

/// Partitions points by their closest seed.
pub struct Assigner<'a, D: DistanceCalculator> {
    seeds: &'a [Point],
    distance_calculator: &'a D,
}

impl<'a, D: DistanceCalculator> Assigner<'a, D> {
    pub fn new(seeds: &'a [Point], distance_calculator: &'a D) -> Self {
        Self {
            seeds,
            distance_calculator,
        }
    }

    /// Index of the seed closest to `point`. On ties the lowest index wins.
    pub fn closest_seed(&self, point: &Point) -> usize {
        let mut min_distance = f64::MAX;
        let mut label = 0;
        for (seed_id, seed) in self.seeds.iter().enumerate() {
            let distance = self.distance_calculator.calculate(seed, point);
            if distance < min_distance {
                min_distance = distance;
                label = seed_id;
            }
        }
        label
    }

    /// Builds one cluster per seed, in seed order. Points keep their dataset order
    /// inside each cluster.
    pub fn assign(&self, data: &[Point]) -> Vec<Cluster> {
        let mut clusters = self
            .seeds
            .iter()
            .enumerate()
            .map(|(index, seed)| Cluster::new(index, *seed))
            .collect::<Vec<Cluster>>();

        for point in data {
            clusters[self.closest_seed(point)].push(*point);
        }
        clusters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::l2::L2DistanceCalculator;

    #[test]
    fn test_closest_seed() {
        let seeds = vec![
            Point::new(0.0, 0.0),
            Point::new(40.0, 40.0),
            Point::new(90.0, 90.0),
        ];
        let distance_calculator = L2DistanceCalculator::new();
        let assigner = Assigner::new(&seeds, &distance_calculator);

        assert_eq!(assigner.closest_seed(&Point::new(1.0, 1.0)), 0);
        assert_eq!(assigner.closest_seed(&Point::new(42.0, 41.0)), 1);
        assert_eq!(assigner.closest_seed(&Point::new(91.0, 92.0)), 2);
    }

    #[test]
    fn test_closest_seed_tie_goes_to_lowest_index() {
        // (5, 0) is exactly 5 away from all three seeds
        let seeds = vec![
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
        ];
        let distance_calculator = L2DistanceCalculator::new();
        let assigner = Assigner::new(&seeds, &distance_calculator);

        assert_eq!(assigner.closest_seed(&Point::new(5.0, 0.0)), 0);

        let reversed = vec![seeds[2], seeds[1], seeds[0]];
        let assigner = Assigner::new(&reversed, &distance_calculator);
        assert_eq!(assigner.closest_seed(&Point::new(5.0, 0.0)), 0);
    }

    #[test]
    fn test_assign_preserves_dataset_order() {
        let data = vec![
            Point::new(0.0, 0.0),
            Point::new(40.0, 40.0),
            Point::new(2.0, 2.0),
            Point::new(41.0, 41.0),
            Point::new(1.0, 1.0),
        ];
        let seeds = vec![data[1], data[0]];
        let distance_calculator = L2DistanceCalculator::new();
        let clusters = Assigner::new(&seeds, &distance_calculator).assign(&data);

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].index(), 0);
        assert_eq!(clusters[0].seed(), &data[1]);
        assert_eq!(clusters[0].points(), &[data[1], data[3]]);
        assert_eq!(clusters[1].points(), &[data[0], data[2], data[4]]);
    }

    #[test]
    fn test_assign_seed_attracting_nothing() {
        let data = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        // The second seed is not part of the data and sits far away
        let seeds = vec![Point::new(0.5, 0.0), Point::new(100.0, 100.0)];
        let distance_calculator = L2DistanceCalculator::new();
        let clusters = Assigner::new(&seeds, &distance_calculator).assign(&data);

        assert_eq!(clusters[0].len(), 2);
        assert!(clusters[1].is_empty());
    }
}
