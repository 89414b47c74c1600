use crate::node::{Node, NumNodes};

/// Errors reported by graph operations and the edge-list parser.
///
/// Every fallible operation validates its arguments up front, so an `Err`
/// never leaves a graph in a partially updated state.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A node id argument is not below the current number of nodes.
    #[error("node {node} is out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: Node, num_nodes: NumNodes },

    /// A self-loop was requested.
    #[error("self-loops are not allowed (node {0})")]
    SelfLoop(Node),

    /// An edge-list line does not start with two parsable node ids.
    #[error("line {line}: expected two non-negative integers")]
    Parse { line: usize },

    /// The input source could not be opened or read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
