/// Disjoint-set forest with union by rank.
///
/// Roots are their own parent. `find` walks to the root without path
/// compression, so a tree's shape depends only on the sequence of unions.
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSetForest {
    /// Creates `n` singleton sets, each of rank 0.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the root of the set containing `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not an element of the forest.
    #[must_use]
    pub fn find(&self, mut i: usize) -> usize {
        while self.parent[i] != i {
            i = self.parent[i];
        }
        i
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// The lower-rank root goes under the higher-rank root. On equal rank,
    /// `y`'s root goes under `x`'s root and `x`'s root gains one rank.
    /// Returns `false` if both were already in the same set.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not an element of the forest.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }

        match self.rank[x_root].cmp(&self.rank[y_root]) {
            std::cmp::Ordering::Less => self.parent[x_root] = y_root,
            std::cmp::Ordering::Greater => self.parent[y_root] = x_root,
            std::cmp::Ordering::Equal => {
                self.parent[y_root] = x_root;
                self.rank[x_root] += 1;
            }
        }
        true
    }

    /// Returns the parent of `i`, or `None` if `i` is out of range.
    #[must_use]
    pub fn parent(&self, i: usize) -> Option<usize> {
        self.parent.get(i).copied()
    }

    /// Returns the rank of `i`, or `None` if `i` is out of range.
    #[must_use]
    pub fn rank(&self, i: usize) -> Option<u32> {
        self.rank.get(i).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
