//! Shortest paths over weighted, directed graphs of spatial nodes.
//!
//! Two interchangeable finders share one frontier expansion loop:
//! [`Dijkstra`] orders the frontier by accumulated cost, [`AStar`] adds the
//! straight line distance to the goal.
//!
//! ```
//! use navgraph::{AStar, Dijkstra, Graph, PathFinder, Position};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node(Position::new(10.0, 10.0));
//! let b = graph.add_node(Position::new(20.0, 20.0));
//! let c = graph.add_node(Position::new(30.0, 30.0));
//! let d = graph.add_node(Position::new(40.0, 40.0));
//! graph.connect(a, b, 10.0)?;
//! graph.connect(a, c, 10.0)?;
//! graph.connect(c, d, 10.0)?;
//!
//! let result = Dijkstra::new(&graph).find_shortest_path(a, d)?;
//! assert!(result.success);
//! assert_eq!(result.nodes, vec![a, c, d]);
//!
//! let finder: Box<dyn PathFinder + '_> = Box::new(AStar::new(&graph));
//! assert_eq!(finder.find_shortest_path(a, d)?, result);
//! # Ok::<(), navgraph::PathFinderError>(())
//! ```
//!
//! Searches never mutate the graph. Each call builds its own bookkeeping, so
//! one graph can serve many concurrent searches.

mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;

pub use errors::{GraphError, PathFinderError};
pub use geometry::Position;
pub use graph::{Connection, Graph, Node, NodeId, SpatialIndex};
pub use graph_algos::{PathFinder, PathResult, SearchConfig};
pub use graph_algos::{a_star::AStar, dijkstra::Dijkstra};
