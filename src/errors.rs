use thiserror::Error;

use crate::graph::NodeId;


/// Errors raised while building or querying a graph
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Node id does not belong to the graph
    #[error("node {0} does not exist in the graph")]
    UnknownNode(NodeId),
    /// Connection costs must be finite and non-negative
    #[error("invalid connection cost {0}, costs must be finite and non-negative")]
    InvalidCost(f64),
    #[error("spatial index error: {0}")]
    SpatialIndex(String),
}

/// Errors raised by a path finder
///
/// An unreachable goal is not an error, it is reported through
/// [`PathResult`](crate::PathResult) with `success == false`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathFinderError {
    /// Start, end or an edge target is outside the finder's node set
    #[error("node {0} is not part of the search set")]
    NotInSearchSet(NodeId),
    /// Predecessor links did not lead back to the start
    #[error("predecessor chain ending at node {0} is broken")]
    BrokenPredecessorChain(NodeId),
    #[error(transparent)]
    Graph(#[from] GraphError),
}


impl From<kdtree::ErrorKind> for GraphError {
    fn from(error: kdtree::ErrorKind) -> Self {
        GraphError::SpatialIndex(error.to_string())
    }
}
