use thiserror::Error;

/// Errors reported by the overlap statistic, the sampler and the graph builders.
///
/// All of them are deterministic given the same inputs. Nothing in this crate
/// retries or recovers from them locally.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The two adjacency structures do not share the same dimension.
    #[error("shape mismatch: {left}x{left} vs {right}x{right}")]
    ShapeMismatch { left: usize, right: usize },

    /// A matrix handed to a constructor is not square.
    #[error("adjacency matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// An edge refers to a vertex outside `0..n`.
    #[error("vertex {index} out of range for {n} vertices")]
    VertexOutOfRange { index: usize, n: usize },

    /// Vertex indices are stored as `u32`.
    #[error("{n} vertices exceed the supported maximum")]
    TooManyVertices { n: usize },

    /// The number of Monte Carlo trials must be positive.
    #[error("invalid trial count: {0}")]
    InvalidTrialCount(usize),

    /// With one vertex or less there is nothing to permute or compare.
    #[error("degenerate input: {n} vertices")]
    DegenerateInput { n: usize },

    /// A vector that was supposed to be a permutation is not a bijection on `0..n`.
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),

    #[error("invalid histogram bin count: {0}")]
    InvalidBinCount(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
