//! Union-find (disjoint set union) state backing the Kruskal engine.
//!
//! One [`DisjointSets`] value is allocated per spanning-forest computation
//! and discarded with it. `find` performs full two-pass path compression;
//! `union` is rank-based with an asymmetric equal-rank tie-break that the
//! engine relies on for reproducible forests.

#[derive(Clone, Debug)]
pub(super) struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSets {
    pub(super) fn new(vertex_count: usize) -> Self {
        Self {
            parent: (0..vertex_count).collect(),
            rank: vec![0; vertex_count],
        }
    }

    /// Returns the representative of `vertex`, compressing the visited path.
    pub(super) fn find(&mut self, mut vertex: usize) -> usize {
        let mut root = vertex;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[vertex] != vertex {
            let parent = self.parent[vertex];
            self.parent[vertex] = root;
            vertex = parent;
        }

        root
    }

    /// Merges the trees rooted at `first` and `second`.
    ///
    /// Both arguments must be distinct roots returned by [`Self::find`]. The
    /// lower-rank root is attached beneath the higher-rank root; on equal
    /// rank `second` goes beneath `first` and `first`'s rank grows. Forests
    /// built from equal-weight edges observably depend on this exact
    /// tie-break, so it must not change.
    pub(super) fn union(&mut self, mut first: usize, mut second: usize) {
        debug_assert!(self.parent[first] == first, "first must be a root");
        debug_assert!(self.parent[second] == second, "second must be a root");
        debug_assert!(first != second, "roots must be distinct");

        let first_rank = self.rank[first];
        let second_rank = self.rank[second];
        if first_rank < second_rank {
            std::mem::swap(&mut first, &mut second);
        }
        self.parent[second] = first;
        if first_rank == second_rank {
            self.rank[first] = first_rank.saturating_add(1);
        }
    }
}
