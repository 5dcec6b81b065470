use crate::errors::{GraphError, PathFinderError};
use crate::geometry::Position;
use crate::graph::{Graph, Node, NodeId};
use super::search::{SearchSet, SearchState, Strategy, search};
use super::{PathFinder, PathResult, SearchConfig};


/// Frontier ordered by accumulated cost plus straight line distance to the goal
struct Heuristic {
    goal: Position,
}

impl Strategy for Heuristic {
    const NAME: &'static str = "a*";

    fn seed(&self, start: &mut SearchState, start_node: &Node) -> f64 {
        start.local = 0.0;
        start.estimate = start_node.position().distance_to(&self.goal);
        start.estimate
    }

    fn settled_cost(&self, _popped: f64, state: &SearchState) -> f64 {
        state.local
    }

    fn priority(&self, local: f64, node: &Node) -> f64 {
        local + node.position().distance_to(&self.goal)
    }
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The heuristic is the Euclidean distance to the goal, so results are only
/// guaranteed optimal when no connection costs less than the straight line
/// between its endpoints.
///
/// By default the frontier is drained completely before success is decided,
/// even after the goal has been expanded. When no path exists every node
/// reachable from the start is expanded before the search gives up, which is
/// also what Dijkstra does. Use [`SearchConfig::EARLY_EXIT`] to stop at the goal.
#[derive(Clone, Debug)]
pub struct AStar<'g> {
    set: SearchSet<'g>,
    config: SearchConfig,
}

impl<'g> AStar<'g> {

    /// Search over every node of `graph`
    pub fn new(graph: &'g Graph) -> Self {
        Self { set: SearchSet::full(graph), config: SearchConfig::EXHAUSTIVE }
    }

    /// Search over `nodes` only
    pub fn with_nodes<I>(graph: &'g Graph, nodes: I) -> Result<Self, GraphError>
    where 
        I: IntoIterator<Item = NodeId>,
    {
        Ok(Self { set: SearchSet::subset(graph, nodes)?, config: SearchConfig::EXHAUSTIVE })
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn find_shortest_path(&self, start: NodeId, end: NodeId) -> Result<PathResult, PathFinderError> {
        self.set.check_endpoints(start, end)?;
        let goal = self.set.graph().node(end)?.position();
        search(&self.set, &Heuristic { goal }, self.config, start, end)
    }
}

impl PathFinder for AStar<'_> {
    fn find_shortest_path(&self, start: NodeId, end: NodeId) -> Result<PathResult, PathFinderError> {
        AStar::find_shortest_path(self, start, end)
    }
}
