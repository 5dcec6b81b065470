//! Arena backed graph of spatial nodes
//!
//! Nodes are owned by a [`Graph`] and addressed by [`NodeId`]. Search code
//! keys all of its bookkeeping by `NodeId`, so two nodes sharing a position
//! stay distinct during a search. `Node` itself compares and hashes by
//! position, which only matters for position based lookups such as
//! [`Graph::find_by_position`].

mod spatial;

pub use spatial::SpatialIndex;

use std::{fmt, hash::{Hash, Hasher}};

use crate::errors::GraphError;
use crate::geometry::Position;


/// Index of a node inside its graph
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}


/// Directed, weighted link to another node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    target: NodeId,
    cost: f64,
}

impl Connection {

    /// Costs must be finite and non-negative
    pub fn new(target: NodeId, cost: f64) -> Result<Self, GraphError> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::InvalidCost(cost));
        }
        Ok(Self { target, cost })
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}


/// Graph vertex: a position plus its outgoing connections in insertion order
#[derive(Clone, Debug)]
pub struct Node {
    position: Position,
    connections: Vec<Connection>,
}

impl Node {

    pub fn new(position: Position) -> Self {
        Self { position, connections: Vec::new() }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Append an outgoing connection
    /// The target is not checked here, see [`Graph::connect`]
    pub fn add_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    pub fn distance_to(&self, other: &Node) -> f64 {
        self.position.distance_to(&other.position)
    }
}

// Nodes at the same coordinates are equal
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}
impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.position.fmt(f)
    }
}


/// Owner of every node and connection
/// Searches only ever borrow it immutably
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity) }
    }

    /// Add a node at `position` and return its id
    pub fn add_node(&mut self, position: Position) -> NodeId {
        self.nodes.push(Node::new(position));
        NodeId(self.nodes.len() - 1)
    }

    /// Add a directed connection `from -> to`
    pub fn connect(&mut self, from: NodeId, to: NodeId, cost: f64) -> Result<(), GraphError> {
        self.node(to)?;
        let connection = Connection::new(to, cost)?;
        self.node_mut(from)?.add_connection(connection);
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.nodes.get(id.0).ok_or(GraphError::UnknownNode(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, GraphError> {
        self.nodes.get_mut(id.0).ok_or(GraphError::UnknownNode(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node, in insertion order, sitting exactly at `position`
    /// When several nodes share a position the later ones are never returned
    pub fn find_by_position(&self, position: &Position) -> Option<NodeId> {
        self.nodes.iter().position(|node| node.position == *position).map(NodeId)
    }

    /// Total cost of walking `path`, taking the cheapest connection for each hop
    /// Returns None for an empty path, an unknown node or a hop without a connection
    pub fn path_cost(&self, path: &[NodeId]) -> Option<f64> {
        if !self.contains(*path.first()?) {
            return None;
        }

        let mut total = 0.0;
        for hop in path.windows(2) {
            let node = self.nodes.get(hop[0].0)?;
            let cost = node.connections.iter()
                .filter(|c| c.target == hop[1])
                .map(|c| c.cost)
                .min_by(f64::total_cmp)?;
            total += cost;
        }

        Some(total)
    }
}
