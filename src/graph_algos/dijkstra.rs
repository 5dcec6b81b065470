use crate::errors::{GraphError, PathFinderError};
use crate::graph::{Graph, Node, NodeId};
use super::search::{SearchSet, SearchState, Strategy, search};
use super::{PathFinder, PathResult, SearchConfig};


/// Uniform cost search, frontier ordered by accumulated cost only
struct UniformCost;

impl Strategy for UniformCost {
    const NAME: &'static str = "dijkstra";

    // The start keeps an infinite recorded distance, only its frontier entry carries 0
    fn seed(&self, _start: &mut SearchState, _start_node: &Node) -> f64 {
        0.0
    }

    fn settled_cost(&self, popped: f64, _state: &SearchState) -> f64 {
        popped
    }

    fn priority(&self, local: f64, _node: &Node) -> f64 {
        local
    }
}


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Stops as soon as the goal is taken off the frontier unless configured otherwise
#[derive(Clone, Debug)]
pub struct Dijkstra<'g> {
    set: SearchSet<'g>,
    config: SearchConfig,
}

impl<'g> Dijkstra<'g> {

    /// Search over every node of `graph`
    pub fn new(graph: &'g Graph) -> Self {
        Self { set: SearchSet::full(graph), config: SearchConfig::EARLY_EXIT }
    }

    /// Search over `nodes` only
    /// Reaching a connection that leaves this set is an error
    pub fn with_nodes<I>(graph: &'g Graph, nodes: I) -> Result<Self, GraphError>
    where 
        I: IntoIterator<Item = NodeId>,
    {
        Ok(Self { set: SearchSet::subset(graph, nodes)?, config: SearchConfig::EARLY_EXIT })
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// From start node, expand the cheapest frontier node until end is settled
    pub fn find_shortest_path(&self, start: NodeId, end: NodeId) -> Result<PathResult, PathFinderError> {
        search(&self.set, &UniformCost, self.config, start, end)
    }
}

impl PathFinder for Dijkstra<'_> {
    fn find_shortest_path(&self, start: NodeId, end: NodeId) -> Result<PathResult, PathFinderError> {
        Dijkstra::find_shortest_path(self, start, end)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;

    // Helper to build a graph from positions and (from, to, cost) edges
    fn create_test_graph(positions: &[(f64, f64)], edges: &[(usize, usize, f64)]) -> (Graph, Vec<NodeId>) {
        let mut graph = Graph::new();
        let ids: Vec<_> = positions.iter().map(|&p| graph.add_node(p.into())).collect();
        for &(from, to, cost) in edges {
            graph.connect(ids[from], ids[to], cost).unwrap();
        }
        (graph, ids)
    }

    #[test]
    fn test_dijkstra_single_node() {
        let (graph, ids) = create_test_graph(&[(10.0, 10.0)], &[]);
        let finder = Dijkstra::new(&graph);

        let result = finder.find_shortest_path(ids[0], ids[0]).unwrap();

        assert!(result.success);
        assert_eq!(result.nodes, vec![ids[0]]);
    }

    #[test]
    fn test_dijkstra_two_nodes() {
        let (graph, ids) = create_test_graph(&[(10.0, 10.0), (20.0, 20.0)], &[(0, 1, 10.0)]);
        let finder = Dijkstra::new(&graph);

        let result = finder.find_shortest_path(ids[0], ids[1]).unwrap();

        assert!(result.success);
        assert_eq!(result.nodes, vec![ids[0], ids[1]]);
    }

    #[test]
    fn test_dijkstra_three_node_chain() {
        let (graph, ids) = create_test_graph(
            &[(10.0, 10.0), (20.0, 20.0), (30.0, 30.0)],
            &[(0, 1, 10.0), (1, 2, 10.0)],
        );
        let finder = Dijkstra::new(&graph);

        let result = finder.find_shortest_path(ids[0], ids[2]).unwrap();

        assert_eq!(result.nodes, vec![ids[0], ids[1], ids[2]]);
    }

    #[test]
    fn test_dijkstra_prefers_cheaper_direct_edge() {
        let (graph, ids) = create_test_graph(
            &[(10.0, 10.0), (20.0, 20.0), (30.0, 30.0)],
            &[(0, 1, 10.0), (0, 2, 5.0)],
        );
        let finder = Dijkstra::new(&graph);

        let result = finder.find_shortest_path(ids[0], ids[2]).unwrap();

        assert_eq!(result.nodes, vec![ids[0], ids[2]]);
    }

    #[test]
    fn test_dijkstra_cheaper_path_found_later_wins() {
        // A -> D is discovered first but A -> B -> C -> D is cheaper
        let (graph, ids) = create_test_graph(
            &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
            &[(0, 3, 10.0), (0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)],
        );
        let finder = Dijkstra::new(&graph);

        let result = finder.find_shortest_path(ids[0], ids[3]).unwrap();

        assert_eq!(result.nodes, vec![ids[0], ids[1], ids[2], ids[3]]);
        assert_eq!(graph.path_cost(&result.nodes), Some(3.0));
    }

    #[test]
    fn test_dijkstra_four_nodes_with_dead_end() {
        let (graph, ids) = create_test_graph(
            &[(10.0, 10.0), (20.0, 20.0), (30.0, 30.0), (40.0, 40.0)],
            &[(0, 1, 10.0), (0, 2, 10.0), (2, 3, 10.0)],
        );
        let finder = Dijkstra::new(&graph);

        let result = finder.find_shortest_path(ids[0], ids[3]).unwrap();

        assert_eq!(result.nodes, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn test_dijkstra_handles_unreachable_goal() {
        let (graph, ids) = create_test_graph(
            &[(10.0, 10.0), (20.0, 20.0), (30.0, 30.0), (40.0, 40.0), (50.0, 50.0)],
            &[(0, 1, 10.0), (0, 2, 10.0), (2, 3, 10.0)],
        );
        let finder = Dijkstra::new(&graph);

        let result = finder.find_shortest_path(ids[0], ids[4]).unwrap();

        assert!(!result.success);
        assert_eq!(result.nodes, vec![ids[4]]);
    }

    #[test]
    fn test_dijkstra_unreached_island() {
        let (graph, ids) = create_test_graph(
            &[(10.0, 10.0), (20.0, 20.0), (30.0, 30.0), (40.0, 40.0), (50.0, 50.0), (60.0, 60.0)],
            &[(0, 1, 10.0), (0, 2, 10.0), (2, 3, 10.0), (4, 5, 10.0)],
        );
        let finder = Dijkstra::new(&graph);

        let result = finder.find_shortest_path(ids[0], ids[5]).unwrap();

        assert!(!result.success);
        assert_eq!(result.unreached(), Some(&[ids[4], ids[5]][..]));
    }

    #[test]
    fn test_dijkstra_with_cycle() {
        // A -> B -> C -> A, C -> D
        let (graph, ids) = create_test_graph(
            &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (2.0, 2.0)],
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (2, 3, 2.0)],
        );
        let finder = Dijkstra::new(&graph);

        let result = finder.find_shortest_path(ids[0], ids[3]).unwrap();

        assert_eq!(result.nodes, vec![ids[0], ids[1], ids[2], ids[3]]);
        assert_eq!(graph.path_cost(&result.nodes), Some(4.0));
    }

    #[test]
    fn test_dijkstra_repeated_calls_are_identical() {
        let (graph, ids) = create_test_graph(
            &[(10.0, 10.0), (20.0, 20.0), (30.0, 30.0), (40.0, 40.0)],
            &[(0, 1, 10.0), (0, 2, 10.0), (2, 3, 10.0), (1, 3, 30.0)],
        );
        let finder = Dijkstra::new(&graph);

        let first = finder.find_shortest_path(ids[0], ids[3]).unwrap();
        for _ in 0..5 {
            assert_eq!(finder.find_shortest_path(ids[0], ids[3]).unwrap(), first);
        }
    }

    #[test]
    fn test_dijkstra_exhaustive_matches_early_exit() {
        let (graph, ids) = create_test_graph(
            &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (9.0, 9.0)],
            &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0), (2, 3, 1.0), (3, 4, 1.0)],
        );
        let early = Dijkstra::new(&graph);
        let exhaustive = Dijkstra::new(&graph).with_config(SearchConfig::EXHAUSTIVE);

        assert_eq!(early.config(), SearchConfig::EARLY_EXIT);
        assert_eq!(
            early.find_shortest_path(ids[0], ids[3]).unwrap(),
            exhaustive.find_shortest_path(ids[0], ids[3]).unwrap(),
        );
    }

    #[test]
    fn test_dijkstra_duplicate_positions_stay_distinct() {
        // two nodes share a position but only one leads to the goal
        let (graph, ids) = create_test_graph(
            &[(0.0, 0.0), (5.0, 5.0), (5.0, 5.0), (10.0, 10.0)],
            &[(0, 1, 1.0), (0, 2, 2.0), (2, 3, 1.0)],
        );
        let finder = Dijkstra::new(&graph);

        let result = finder.find_shortest_path(ids[0], ids[3]).unwrap();

        assert_eq!(result.nodes, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn test_dijkstra_rejects_nodes_outside_set() {
        let (graph, ids) = create_test_graph(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)], &[(0, 1, 1.0)]);
        let finder = Dijkstra::with_nodes(&graph, [ids[0], ids[1]]).unwrap();

        assert_eq!(
            finder.find_shortest_path(ids[2], ids[0]),
            Err(PathFinderError::NotInSearchSet(ids[2]))
        );
        assert_eq!(
            finder.find_shortest_path(ids[0], NodeId(99)),
            Err(PathFinderError::NotInSearchSet(NodeId(99)))
        );
        assert!(finder.find_shortest_path(ids[0], ids[1]).unwrap().success);
        assert!(Dijkstra::with_nodes(&graph, [NodeId(3)]).is_err());
    }

    #[test]
    fn test_dijkstra_unreached_follows_subset_order() {
        let (graph, ids) = create_test_graph(
            &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
            &[(0, 1, 1.0)],
        );
        let finder = Dijkstra::with_nodes(&graph, [ids[3], ids[1], ids[0], ids[2]]).unwrap();

        let result = finder.find_shortest_path(ids[0], ids[2]).unwrap();

        assert!(!result.success);
        assert_eq!(result.nodes, vec![ids[3], ids[2]]);
    }
}
