use rand::Rng;

use crate::point::Point;

// Generate random points roughly in the range of real birthrate / life expectancy data
pub fn generate_random_points<R: Rng + ?Sized>(rng: &mut R, num_points: usize) -> Vec<Point> {
    let mut points = vec![];
    for _ in 0..num_points {
        points.push(Point::new(
            rng.gen_range(5.0..55.0),
            rng.gen_range(30.0..85.0),
        ));
    }
    points
}
