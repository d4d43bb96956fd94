use crate::{
    edge_overlap, expected_position_overlap, Adjacency, Error, MonteCarloConfig, Result, SampleSet,
};
use approx::relative_eq;
use closed01::Closed01;
use std::fmt;
use tracing::info;

/// Outcome of a permutation test between a reference graph and another graph
/// on the same vertex set.
#[derive(Debug, Clone)]
pub struct PermutationTest {
    pub num_vertices: usize,
    pub reference_edges: u64,
    pub other_edges: u64,
    /// Overlap under the given alignment.
    pub observed: u64,
    pub samples: SampleSet,
    pub p_value: Closed01<f64>,
    /// Analytic mean of the null distribution, from the entry totals of both
    /// matrices so that directed input is covered too.
    pub expected: f64,
}

impl PermutationTest {
    pub fn sample_mean(&self) -> f64 {
        self.samples.mean()
    }

    /// Whether the sample mean and the analytic expectation agree within
    /// `max_relative`. A disagreement points at a broken sampler, not at a
    /// property of the graphs.
    pub fn mean_agrees_with_expected(&self, max_relative: f64) -> bool {
        relative_eq!(
            self.sample_mean(),
            self.expected,
            epsilon = f64::EPSILON,
            max_relative = max_relative
        )
    }
}

impl fmt::Display for PermutationTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "reference graph: {} vertices, {} edges",
            self.num_vertices, self.reference_edges
        )?;
        writeln!(
            f,
            "other graph:     {} vertices, {} edges",
            self.num_vertices, self.other_edges
        )?;
        writeln!(f, "similarity measure: {}", self.observed)?;
        writeln!(
            f,
            "p-value: {} ({} trials)",
            self.p_value.get(),
            self.samples.len()
        )?;
        writeln!(f, "expected value: {:.4}", self.expected)?;
        write!(f, "sample mean: {:.4}", self.sample_mean())
    }
}

/// Tests whether `reference` and `other` share more edges than a uniformly
/// random relabeling of `other` would.
pub fn permutation_test<A: Adjacency + Sync>(
    reference: &A,
    other: &A,
    config: &MonteCarloConfig,
) -> Result<PermutationTest> {
    if config.trials == 0 {
        return Err(Error::InvalidTrialCount(config.trials));
    }
    let observed = edge_overlap(reference, other)?;
    let n = reference.dim();
    if n <= 1 {
        return Err(Error::DegenerateInput { n });
    }
    let reference_edges = reference.edge_count();
    let other_edges = other.edge_count();
    let expected = expected_position_overlap(reference.total(), other.total(), n)?;

    let samples = config.run(reference, other)?;
    let p_value = samples.p_value(observed);
    info!(
        n,
        observed,
        p_value = p_value.get(),
        expected,
        "permutation test finished"
    );

    Ok(PermutationTest {
        num_vertices: n,
        reference_edges,
        other_edges,
        observed,
        samples,
        p_value,
        expected,
    })
}
