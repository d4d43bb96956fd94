//! Vertex relabelings.

use crate::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// A bijection on `0..n`.
///
/// Applied to an adjacency matrix, row `i` column `j` of the result is row
/// `p(i)` column `p(j)` of the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    mapping: Vec<usize>,
}

impl Permutation {
    pub fn identity(n: usize) -> Permutation {
        Permutation {
            mapping: (0..n).collect(),
        }
    }

    /// Draws a permutation uniformly at random from the symmetric group on `n`
    /// elements. The identity is a valid outcome.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Permutation {
        let mut mapping: Vec<usize> = (0..n).collect();
        mapping.shuffle(rng);
        Permutation { mapping }
    }

    pub fn try_from_vec(mapping: Vec<usize>) -> Result<Permutation> {
        let n = mapping.len();
        let mut seen = vec![false; n];
        for &target in &mapping {
            if target >= n {
                return Err(Error::InvalidPermutation(format!(
                    "index {} out of range for length {}",
                    target, n
                )));
            }
            if seen[target] {
                return Err(Error::InvalidPermutation(format!(
                    "index {} appears twice",
                    target
                )));
            }
            seen[target] = true;
        }
        Ok(Permutation { mapping })
    }

    pub fn inverse(&self) -> Permutation {
        let mut inverse = vec![0; self.mapping.len()];
        for (i, &target) in self.mapping.iter().enumerate() {
            inverse[target] = i;
        }
        Permutation { mapping: inverse }
    }

    #[inline]
    pub fn apply(&self, i: usize) -> usize {
        self.mapping[i]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    pub fn is_identity(&self) -> bool {
        self.mapping.iter().enumerate().all(|(i, &target)| i == target)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.mapping
    }
}
