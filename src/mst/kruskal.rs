use tracing::debug;

use super::{complete_edges, DisjointSetForest, SpanningTree};
use crate::selection::PointSet;

/// Computes the Euclidean minimum spanning tree of a point set with Kruskal's algorithm.
///
/// Edges of equal weight are taken in `(a, b)` lexicographic order, so the
/// resulting tree is fully determined by the input points.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl Kruskal {
    /// Creates a new `Kruskal` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation on `points`.
    ///
    /// Zero or one point yields an empty tree. Otherwise the tree has
    /// `points.len() - 1` edges, in the order they were accepted.
    #[must_use]
    pub fn execute(&self, points: &PointSet) -> SpanningTree {
        let n = points.len();
        let mut edges = complete_edges(points.as_slice());
        edges.sort_by(|l, r| {
            l.weight
                .total_cmp(&r.weight)
                .then(l.a.cmp(&r.a))
                .then(l.b.cmp(&r.b))
        });

        let mut forest = DisjointSetForest::new(n);
        let mut tree = SpanningTree {
            edges: Vec::with_capacity(n.saturating_sub(1)),
        };
        for edge in edges {
            // A spanning tree over n points has exactly n - 1 edges.
            if tree.len() + 1 >= n {
                break;
            }
            if forest.find(edge.a) != forest.find(edge.b) {
                debug!(a = edge.a, b = edge.b, weight = edge.weight, "accepted edge");
                forest.union(edge.a, edge.b);
                tree.edges.push(edge);
            }
        }
        tree
    }
}
