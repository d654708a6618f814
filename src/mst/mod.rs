mod algorithm;
mod complete;
mod kruskal;
mod union_find;

pub use algorithm::{compute_with, Algorithm};
pub use complete::complete_edges;
pub use kruskal::Kruskal;
pub use union_find::DisjointSetForest;

/// An undirected weighted edge between two points of a `PointSet`.
///
/// `a < b` always holds; `weight` is the Euclidean distance between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub weight: f64,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub fn new(a: usize, b: usize, weight: f64) -> Self {
        Self { a, b, weight }
    }
}

/// Edges of a minimum spanning tree, in the order they were accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
}

impl SpanningTree {
    /// Sum of all edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` if the tree contains an edge between `a` and `b` (either order).
    #[must_use]
    pub fn connects(&self, a: usize, b: usize) -> bool {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        self.edges.iter().any(|e| e.a == lo && e.b == hi)
    }
}
