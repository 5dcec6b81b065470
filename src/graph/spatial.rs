use std::fmt;

use kdtree::KdTree;
use kdtree::distance::squared_euclidean as kt_squared_euclidean;

use crate::errors::GraphError;
use crate::geometry::Position;
use super::{Graph, NodeId};


/// k-d tree over node positions
/// Snaps arbitrary coordinates to graph nodes, for example to pick another
/// start node after a failed search
pub struct SpatialIndex {
    tree: KdTree<f64, NodeId, [f64; 2]>, // position -> node id
    len: usize,
}

impl SpatialIndex {

    /// Index every node of `graph`
    /// Fails on non-finite node coordinates
    pub fn build(graph: &Graph) -> Result<Self, GraphError> {
        let mut tree = KdTree::new(2);
        for (id, node) in graph.nodes() {
            tree.add(node.position().to_array(), id)?;
        }
        Ok(Self { tree, len: graph.len() })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Closest node to `position`, None for an empty index
    pub fn nearest(&self, position: &Position) -> Result<Option<NodeId>, GraphError> {
        if self.is_empty() {
            return Ok(None);
        }
        let closest = self.tree.nearest(&position.to_array(), 1, &kt_squared_euclidean)?;
        Ok(closest.first().map(|&(_, &id)| id))
    }

    /// Every node within `radius` of `position`, closest first
    /// Distances are Euclidean, not squared
    pub fn within(&self, position: &Position, radius: f64) -> Result<Vec<(f64, NodeId)>, GraphError> {
        if self.is_empty() {
            return Ok(Vec::new());
        }

        // tree uses squared euclidean distances, so we need to square the radius
        let found = self.tree.within(&position.to_array(), radius.powi(2), &kt_squared_euclidean)?;
        let mut nodes: Vec<(f64, NodeId)> = found.into_iter()
            .map(|(squared, &id)| (squared.sqrt(), id))
            .collect();
        nodes.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        Ok(nodes)
    }
}

impl fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpatialIndex").field("len", &self.len).finish()
    }
}
