use super::Edge;
use crate::math::distance_2d::euclidean;
use crate::math::Point2;

/// Enumerates every unordered pair `(i, j)` with `i < j`, weighted by distance.
///
/// Edges come out in enumeration order: `(0,1), (0,2), ..., (1,2), ...`.
#[must_use]
pub fn complete_edges(points: &[Point2]) -> Vec<Edge> {
    let n = points.len();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push(Edge::new(i, j, euclidean(&points[i], &points[j])));
        }
    }
    edges
}
