use crate::{Adjacency, Error, Permutation, Result};

pub(crate) fn check_shape<A: Adjacency>(a: &A, b: &A) -> Result<()> {
    if a.dim() != b.dim() {
        return Err(Error::ShapeMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }
    Ok(())
}

/// Number of positions `(i, j)` that carry an edge in both `a` and `b`
/// (weighted: the sum of the elementwise product).
///
/// For symmetric 0/1 matrices every shared undirected edge contributes 2.
/// The value is symmetric in its arguments.
pub fn edge_overlap<A: Adjacency>(a: &A, b: &A) -> Result<u64> {
    check_shape(a, b)?;
    Ok(a.overlap(b))
}

/// Overlap between `a` and `b` relabeled by `p`, without requiring the
/// caller to materialize the permuted copy.
pub fn edge_overlap_permuted<A: Adjacency>(a: &A, b: &A, p: &Permutation) -> Result<u64> {
    check_shape(a, b)?;
    if p.len() != b.dim() {
        return Err(Error::ShapeMismatch {
            left: b.dim(),
            right: p.len(),
        });
    }
    Ok(a.overlap_permuted(b, p))
}
