use geo::{Centroid, Distance, Euclidean, MultiPoint, Point};

/// arithmetic mean of a set of points.
///
/// # Returns
///
/// * the centroid, or None when there are no points
pub fn mean_point(points: Vec<Point<f64>>) -> Option<Point<f64>> {
    MultiPoint::from(points).centroid()
}

/// straight-line distance in raw coordinate units. lat/lon pairs are treated
/// as planar coordinates, which is good enough for ranking places within a
/// single city.
pub fn planar_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    Euclidean.distance(a, b)
}

/// planar distance between two optional points, infinite when either side is
/// missing.
pub fn planar_distance_or_inf(a: Option<Point<f64>>, b: Option<Point<f64>>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => planar_distance(a, b),
        _ => f64::INFINITY,
    }
}
