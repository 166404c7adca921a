use std::fmt;

use serde::Serialize;

use crate::error::{ClusteringError, Result};
use crate::point::Point;

/// Points assigned to one seed, in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    index: usize,
    seed: Point,
    points: Vec<Point>,
}

impl Cluster {
    pub fn new(index: usize, seed: Point) -> Self {
        Self {
            index,
            seed,
            points: vec![],
        }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn seed(&self) -> &Point {
        &self.seed
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    /// Mean of each coordinate over the cluster's points.
    pub fn summary(&self) -> Result<ClusterSummary> {
        ClusterSummary::from_points(self.index, &self.points)
    }
}

/// Per-cluster means. Values are kept at full precision, `Display` rounds to two
/// decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClusterSummary {
    pub mean_x: f64,
    pub mean_y: f64,
}

impl ClusterSummary {
    /// `index` only identifies the cluster in the error when `points` is empty.
    pub fn from_points(index: usize, points: &[Point]) -> Result<Self> {
        if points.is_empty() {
            return Err(ClusteringError::EmptyCluster { index });
        }

        let (sum_x, sum_y) = points
            .iter()
            .fold((0.0, 0.0), |(sum_x, sum_y), p| (sum_x + p.x, sum_y + p.y));
        let count = points.len() as f64;
        Ok(Self {
            mean_x: sum_x / count,
            mean_y: sum_y / count,
        })
    }

    /// Rounds half to even, the same rule `Display` applies.
    pub fn rounded(&self, decimals: i32) -> Self {
        let factor = 10f64.powi(decimals);
        Self {
            mean_x: (self.mean_x * factor).round_ties_even() / factor,
            mean_y: (self.mean_y * factor).round_ties_even() / factor,
        }
    }
}

impl fmt::Display for ClusterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.mean_x, self.mean_y)
    }
}
