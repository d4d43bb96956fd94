//! Traits that represent an abstract adjacency structure upon which the
//! statistic and the sampler operate.

use crate::Permutation;

/// A square, indexable grid of nonnegative edge weights over the vertex set
/// `0..dim()`.
///
/// Implementations only need to support an elementwise product and a
/// simultaneous row/column reindexing; everything else has a default.
/// Constructors in this crate never store diagonal entries.
pub trait Adjacency: Sized {
    /// Number of vertices.
    fn dim(&self) -> usize;

    /// Weight at row `i`, column `j`. Zero if there is no edge.
    fn entry(&self, i: usize, j: usize) -> u32;

    /// Sum of all entries.
    fn total(&self) -> u64;

    /// Per-vertex sum of the outgoing weights (the degree sequence).
    fn row_sums(&self) -> Vec<u64>;

    fn is_symmetric(&self) -> bool;

    /// Sum over all positions of the elementwise product.
    ///
    /// NOTE: Both sides MUST have the same dimension. Use
    /// [`edge_overlap`](crate::edge_overlap) for a checked version.
    fn overlap(&self, other: &Self) -> u64;

    /// Reorders rows and columns by the same permutation: entry `(i, j)` of
    /// the result is entry `(p(i), p(j))` of `self`.
    fn permuted(&self, p: &Permutation) -> Self;

    /// Equivalent to `self.overlap(&other.permuted(p))`. Implementations may
    /// override this to avoid materializing the permuted copy.
    fn overlap_permuted(&self, other: &Self, p: &Permutation) -> u64 {
        self.overlap(&other.permuted(p))
    }

    /// Number of edges. For symmetric structures every undirected edge
    /// occupies two positions and is counted once.
    fn edge_count(&self) -> u64 {
        if self.is_symmetric() {
            self.total() / 2
        } else {
            self.total()
        }
    }
}
