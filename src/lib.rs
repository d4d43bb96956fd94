//! A Monte Carlo permutation test for edge overlap between two graphs defined
//! on the same vertex set.
//!
//! The statistic counts the matrix positions that carry an edge in both
//! adjacency structures. Its null distribution is sampled by relabeling the
//! vertices of one graph uniformly at random, and the observed value is
//! ranked against it as an empirical one-sided p-value. The analytic mean of
//! the null distribution, `4 q1 q2 / (n (n - 1))`, is reported alongside as a
//! sanity check.
//!
//! ```no_run
//! use edge_overlap::{permutation_test, DenseAdjacency, MonteCarloConfig};
//!
//! let a = DenseAdjacency::from_edges(4, &[(0, 1), (1, 2), (2, 3)], true).unwrap();
//! let b = DenseAdjacency::from_edges(4, &[(0, 1), (1, 2), (0, 3)], true).unwrap();
//! let test = permutation_test(&a, &b, &MonteCarloConfig::new(10_000).with_seed(7)).unwrap();
//! println!("{}", test);
//! ```

mod adjacency;
mod dense;
mod error;
pub mod graph;
mod metrics;
mod permutation;
mod report;
mod sampler;
mod sparse;
mod statistic;

pub use {
    adjacency::*, dense::*, error::*, metrics::*, permutation::*, report::*, sampler::*,
    sparse::*, statistic::*,
};
