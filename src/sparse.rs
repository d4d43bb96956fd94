use crate::{Adjacency, DenseAdjacency, Error, Permutation, Result};
use std::collections::BTreeMap;

/// Adjacency structure that only stores nonzero positions.
///
/// Vertex indices are stored as `u32`. Our graphs never exceed 4 billion nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseAdjacency {
    n: usize,
    entries: BTreeMap<(u32, u32), u32>,
}

impl SparseAdjacency {
    pub fn new(n: usize) -> Result<SparseAdjacency> {
        if n > u32::max_value() as usize {
            return Err(Error::TooManyVertices { n });
        }
        Ok(SparseAdjacency {
            n,
            entries: BTreeMap::new(),
        })
    }

    /// Builds a 0/1 structure from an edge list, see [`DenseAdjacency::from_edges`].
    pub fn from_edges(n: usize, edges: &[(usize, usize)], undirected: bool) -> Result<SparseAdjacency> {
        let mut m = SparseAdjacency::new(n)?;
        for &(i, j) in edges {
            m.set(i, j, 1)?;
            if undirected {
                m.set(j, i, 1)?;
            }
        }
        Ok(m)
    }

    /// Sets the weight at `(i, j)`. Zero removes the entry; diagonal positions
    /// are ignored.
    pub fn set(&mut self, i: usize, j: usize, weight: u32) -> Result<()> {
        for &index in &[i, j] {
            if index >= self.n {
                return Err(Error::VertexOutOfRange { index, n: self.n });
            }
        }
        if i == j {
            return Ok(());
        }
        let key = (i as u32, j as u32);
        if weight == 0 {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, weight);
        }
        Ok(())
    }

    /// Number of stored (nonzero) positions.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.entries
            .iter()
            .map(|(&(i, j), &w)| (i as usize, j as usize, w))
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> u32 {
        self.entries
            .get(&(i as u32, j as u32))
            .copied()
            .unwrap_or(0)
    }
}

impl Adjacency for SparseAdjacency {
    #[inline]
    fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    fn entry(&self, i: usize, j: usize) -> u32 {
        self.get(i, j)
    }

    fn total(&self) -> u64 {
        self.entries.values().map(|&w| u64::from(w)).sum()
    }

    fn row_sums(&self) -> Vec<u64> {
        let mut sums = vec![0u64; self.n];
        for (&(i, _), &w) in &self.entries {
            sums[i as usize] += u64::from(w);
        }
        sums
    }

    fn is_symmetric(&self) -> bool {
        self.entries
            .iter()
            .all(|(&(i, j), &w)| self.entries.get(&(j, i)) == Some(&w))
    }

    fn overlap(&self, other: &Self) -> u64 {
        let (small, large) = if self.entries.len() <= other.entries.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .entries
            .iter()
            .filter_map(|(key, &w)| large.entries.get(key).map(|&v| u64::from(w) * u64::from(v)))
            .sum()
    }

    fn permuted(&self, p: &Permutation) -> Self {
        // (r, c) in the input lands on (p^-1(r), p^-1(c)) in the output.
        let inv = p.inverse();
        let entries = self
            .entries
            .iter()
            .map(|(&(r, c), &w)| {
                (
                    (inv.apply(r as usize) as u32, inv.apply(c as usize) as u32),
                    w,
                )
            })
            .collect();
        SparseAdjacency { n: self.n, entries }
    }

    fn overlap_permuted(&self, other: &Self, p: &Permutation) -> u64 {
        self.entries
            .iter()
            .map(|(&(i, j), &w)| {
                u64::from(w) * u64::from(other.get(p.apply(i as usize), p.apply(j as usize)))
            })
            .sum()
    }
}

impl From<&DenseAdjacency> for SparseAdjacency {
    fn from(dense: &DenseAdjacency) -> SparseAdjacency {
        // A dense matrix with more than u32::MAX rows cannot be allocated.
        let mut entries = BTreeMap::new();
        for ((i, j), &w) in dense.matrix().indexed_iter() {
            if w != 0 && i != j {
                entries.insert((i as u32, j as u32), w);
            }
        }
        SparseAdjacency {
            n: dense.dim(),
            entries,
        }
    }
}
