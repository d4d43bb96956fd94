use crate::{Adjacency, Error, Permutation, Result, SparseAdjacency};
use ndarray::{Array2, Axis, Zip};
use tracing::debug;

/// Adjacency structure backed by a dense `n x n` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseAdjacency {
    matrix: Array2<u32>,
}

impl DenseAdjacency {
    pub fn zeros(n: usize) -> DenseAdjacency {
        DenseAdjacency {
            matrix: Array2::zeros((n, n)),
        }
    }

    /// Wraps a square array. Diagonal entries (self-loops) are dropped.
    pub fn from_array(mut matrix: Array2<u32>) -> Result<DenseAdjacency> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(Error::NotSquare { rows, cols });
        }
        let self_loops = matrix.diag().iter().filter(|&&w| w != 0).count();
        if self_loops > 0 {
            debug!(self_loops, "dropping diagonal entries");
            matrix.diag_mut().fill(0);
        }
        Ok(DenseAdjacency { matrix })
    }

    pub fn from_rows(rows: &[Vec<u32>]) -> Result<DenseAdjacency> {
        let n = rows.len();
        let mut flat = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(Error::NotSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
            flat.extend_from_slice(row);
        }
        let matrix = Array2::from_shape_vec((n, n), flat).map_err(|_| Error::NotSquare {
            rows: n,
            cols: n,
        })?;
        DenseAdjacency::from_array(matrix)
    }

    /// Builds a 0/1 matrix from an edge list. With `undirected` set, every
    /// edge is stored at both `(i, j)` and `(j, i)`. Duplicates collapse and
    /// self-loops are skipped.
    pub fn from_edges(n: usize, edges: &[(usize, usize)], undirected: bool) -> Result<DenseAdjacency> {
        let mut matrix = Array2::zeros((n, n));
        for &(i, j) in edges {
            for &index in &[i, j] {
                if index >= n {
                    return Err(Error::VertexOutOfRange { index, n });
                }
            }
            if i == j {
                continue;
            }
            matrix[(i, j)] = 1;
            if undirected {
                matrix[(j, i)] = 1;
            }
        }
        Ok(DenseAdjacency { matrix })
    }

    pub fn matrix(&self) -> &Array2<u32> {
        &self.matrix
    }

    pub fn into_inner(self) -> Array2<u32> {
        self.matrix
    }
}

impl Adjacency for DenseAdjacency {
    #[inline]
    fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    #[inline]
    fn entry(&self, i: usize, j: usize) -> u32 {
        self.matrix[(i, j)]
    }

    fn total(&self) -> u64 {
        self.matrix.iter().map(|&w| u64::from(w)).sum()
    }

    fn row_sums(&self) -> Vec<u64> {
        self.matrix
            .outer_iter()
            .map(|row| row.iter().map(|&w| u64::from(w)).sum())
            .collect()
    }

    fn is_symmetric(&self) -> bool {
        self.matrix == self.matrix.t()
    }

    fn overlap(&self, other: &Self) -> u64 {
        Zip::from(&self.matrix)
            .and(&other.matrix)
            .fold(0u64, |acc, &x, &y| acc + u64::from(x) * u64::from(y))
    }

    fn permuted(&self, p: &Permutation) -> Self {
        let idx = p.as_slice();
        DenseAdjacency {
            matrix: self.matrix.select(Axis(0), idx).select(Axis(1), idx),
        }
    }

    fn overlap_permuted(&self, other: &Self, p: &Permutation) -> u64 {
        let idx = p.as_slice();
        let mut acc = 0u64;
        for (i, row) in self.matrix.outer_iter().enumerate() {
            let other_row = other.matrix.row(idx[i]);
            for (j, &w) in row.iter().enumerate() {
                if w != 0 {
                    acc += u64::from(w) * u64::from(other_row[idx[j]]);
                }
            }
        }
        acc
    }
}

impl From<&SparseAdjacency> for DenseAdjacency {
    fn from(sparse: &SparseAdjacency) -> DenseAdjacency {
        let mut matrix = Array2::zeros((sparse.dim(), sparse.dim()));
        for (i, j, w) in sparse.iter() {
            matrix[(i, j)] = w;
        }
        DenseAdjacency { matrix }
    }
}
