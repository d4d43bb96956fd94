//! Monte Carlo sampling of the overlap statistic under random relabeling.
//!
//! Every trial draws a fresh uniformly random permutation, relabels the
//! second graph with it and measures the overlap against the fixed reference.
//!
//! ## Randomness
//!
//! The generator is always passed in explicitly. [`MonteCarloConfig::run`]
//! splits the trials into shards, each with its own `ChaCha8Rng` stream
//! derived from the run seed, so shards never share generator state and the
//! result for a given seed and shard count does not depend on scheduling.
//!
//! ## Feature gating
//!
//! Shards run on the rayon pool with the `parallel` feature and sequentially
//! without it. Both produce the same sample set.

use crate::statistic::check_shape;
use crate::{Adjacency, Error, Permutation, Result, SampleSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

pub const DEFAULT_TRIALS: usize = 100_000;

/// Shard count is part of what makes a seeded run reproducible, so it does
/// not follow the number of cores.
pub const DEFAULT_SHARDS: usize = 16;

fn run_trials<A: Adjacency, R: Rng + ?Sized>(
    reference: &A,
    other: &A,
    trials: usize,
    rng: &mut R,
) -> Vec<u64> {
    let n = other.dim();
    (0..trials)
        .map(|_| {
            let p = Permutation::random(n, rng);
            reference.overlap_permuted(other, &p)
        })
        .collect()
}

fn validate<A: Adjacency>(reference: &A, other: &A, trials: usize) -> Result<()> {
    if trials == 0 {
        return Err(Error::InvalidTrialCount(trials));
    }
    check_shape(reference, other)?;
    if reference.dim() <= 1 {
        warn!(
            n = reference.dim(),
            "fewer than two vertices, every relabeling is the identity"
        );
    }
    Ok(())
}

/// Runs `trials` permutation trials on a single generator and returns the
/// overlap of `reference` with each randomly relabeled copy of `other`.
pub fn monte_carlo<A: Adjacency, R: Rng + ?Sized>(
    reference: &A,
    other: &A,
    trials: usize,
    rng: &mut R,
) -> Result<SampleSet> {
    validate(reference, other, trials)?;
    SampleSet::new(run_trials(reference, other, trials, rng))
}

/// Parameters of a sharded Monte Carlo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonteCarloConfig {
    pub trials: usize,
    /// When `None`, a seed is drawn from the thread generator and logged.
    pub seed: Option<u64>,
    pub shards: usize,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        MonteCarloConfig {
            trials: DEFAULT_TRIALS,
            seed: None,
            shards: DEFAULT_SHARDS,
        }
    }
}

impl MonteCarloConfig {
    pub fn new(trials: usize) -> MonteCarloConfig {
        MonteCarloConfig {
            trials,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_shards(mut self, shards: usize) -> Self {
        self.shards = shards;
        self
    }

    pub fn run<A: Adjacency + Sync>(&self, reference: &A, other: &A) -> Result<SampleSet> {
        validate(reference, other, self.trials)?;

        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let shards = self.shards.max(1).min(self.trials);
        info!(
            trials = self.trials,
            shards,
            seed,
            n = reference.dim(),
            "sampling permutation null distribution"
        );

        let shard_sizes: Vec<usize> = (0..shards)
            .map(|k| self.trials / shards + usize::from(k < self.trials % shards))
            .collect();

        let run_shard = |(k, size): (usize, usize)| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(k as u64);
            run_trials(reference, other, size, &mut rng)
        };

        #[cfg(feature = "parallel")]
        let parts: Vec<Vec<u64>> = shard_sizes
            .into_par_iter()
            .enumerate()
            .map(run_shard)
            .collect();
        #[cfg(not(feature = "parallel"))]
        let parts: Vec<Vec<u64>> = shard_sizes.into_iter().enumerate().map(run_shard).collect();

        let samples = SampleSet::new(parts.concat())?;
        debug!(
            mean = samples.mean(),
            min = samples.min(),
            max = samples.max(),
            "sampling finished"
        );
        Ok(samples)
    }
}
