use super::Point2;

/// Returns the Euclidean distance between `a` and `b`.
#[must_use]
pub fn euclidean(a: &Point2, b: &Point2) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Returns the point halfway between `a` and `b`.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    nalgebra::center(a, b)
}
