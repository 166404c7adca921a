use crate::point::Point;
use crate::DistanceCalculator;

#[derive(Debug, Clone, Copy, Default)]
pub struct L2DistanceCalculator {}

impl L2DistanceCalculator {
    pub fn new() -> Self {
        Self {}
    }

    pub fn calculate_squared(&self, a: &Point, b: &Point) -> f64 {
        (b.x - a.x).powi(2) + (b.y - a.y).powi(2)
    }
}

impl DistanceCalculator for L2DistanceCalculator {
    /// Compute Euclidean distance between two points
    fn calculate(&self, a: &Point, b: &Point) -> f64 {
        self.calculate_squared(a, b).sqrt()
    }
}
