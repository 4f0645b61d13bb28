//! Error type shared by generation, verification and argument parsing.

/// Failures of a benchmark run. Traversal itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BfsError {
    /// Node count outside `1..=MAX_NODES`. Raised before any allocation.
    #[error("invalid node count {node_count}: expected a value in 1..={max}")]
    InvalidInput { node_count: i64, max: u64 },

    /// The self-check for the canonical node count did not match.
    #[error("the total cost obtained for '{node_count}' nodes is '{total}' while the expected cost is '{expected}'")]
    VerificationFailure {
        node_count: usize,
        total: u64,
        expected: u64,
    },

    /// BFS and the reference Dijkstra disagree on a node.
    #[error("cross-check failed at node {node}: bfs cost {bfs}, reference cost {reference}")]
    CrossCheckMismatch { node: usize, bfs: u32, reference: u32 },

    /// Storage for the graph or traversal arrays could not be reserved.
    #[error("out of memory allocating {bytes} bytes for {node_count} nodes")]
    ResourceExhaustion { node_count: usize, bytes: usize },

    /// Malformed command-line argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, BfsError>;
