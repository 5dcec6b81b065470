pub mod dijkstra;
pub mod a_star;
mod config;
mod search;
mod shortest_path;

pub use config::SearchConfig;

use crate::errors::PathFinderError;
use crate::graph::NodeId;


/// Outcome of a search
/// success: nodes is the path from start to end inclusive
/// failure: nodes is every node never visited, in participating node order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    pub success: bool,
    pub nodes: Vec<NodeId>,
}

impl PathResult {

    pub(crate) fn found(path: Vec<NodeId>) -> Self {
        Self { success: true, nodes: path }
    }

    pub(crate) fn not_found(nodes: Vec<NodeId>) -> Self {
        Self { success: false, nodes }
    }

    /// The path, if the search succeeded
    pub fn path(&self) -> Option<&[NodeId]> {
        self.success.then_some(self.nodes.as_slice())
    }

    /// Nodes the search never reached, if it failed
    /// Useful candidates for retrying from a different start
    pub fn unreached(&self) -> Option<&[NodeId]> {
        (!self.success).then_some(self.nodes.as_slice())
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}


/// Common interface of the path finders
pub trait PathFinder {
    /// Find the cheapest path from `start` to `end`
    /// Errors only when a node is outside the finder's node set
    fn find_shortest_path(&self, start: NodeId, end: NodeId) -> Result<PathResult, PathFinderError>;
}
