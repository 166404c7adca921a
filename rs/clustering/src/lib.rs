pub mod distance;
pub mod error;
pub mod kmeans;
pub mod point;
pub mod test_utils;

pub use error::{ClusteringError, Result};
pub use point::Point;

pub trait DistanceCalculator {
    fn calculate(&self, a: &Point, b: &Point) -> f64;
}
