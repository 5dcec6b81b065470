use std::{cmp::Ordering, collections::BinaryHeap};

use log::{debug, trace};

use crate::collections::{FxIndexMap, fx_index_map};
use crate::errors::{GraphError, PathFinderError};
use crate::graph::{Graph, Node, NodeId};
use super::shortest_path::{shortest_path, unreached_nodes};
use super::{PathResult, SearchConfig};


/// Per node bookkeeping for one search call
/// Lives outside the graph so concurrent searches never share state
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SearchState {
    pub local: f64, // best known cost from the start
    pub estimate: f64, // frontier priority of the freshest entry for this node
    pub previous: Option<usize>, // overlay index of the predecessor
    pub visited: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            local: f64::INFINITY,
            estimate: f64::INFINITY,
            previous: None,
            visited: false,
        }
    }
}

/// Overlay of search states in participating node order
pub(crate) type SearchOverlay = FxIndexMap<NodeId, SearchState>;


/// What differs between the two finders
pub(crate) trait Strategy {
    /// Name used in log output
    const NAME: &'static str;

    /// Prepare the start node's state and return its frontier priority
    fn seed(&self, start: &mut SearchState, start_node: &Node) -> f64;

    /// Accumulated cost of a node just taken off the frontier
    fn settled_cost(&self, popped: f64, state: &SearchState) -> f64;

    /// Frontier priority for a node reached with accumulated cost `local`
    fn priority(&self, local: f64, node: &Node) -> f64;
}


/// The nodes a finder searches over
#[derive(Clone, Debug)]
pub(crate) struct SearchSet<'g> {
    graph: &'g Graph,
    members: Vec<NodeId>,
}

impl<'g> SearchSet<'g> {

    pub fn full(graph: &'g Graph) -> Self {
        Self { graph, members: graph.ids().collect() }
    }

    /// Restrict to `nodes`, keeping first occurrence order
    pub fn subset<I>(graph: &'g Graph, nodes: I) -> Result<Self, GraphError>
    where 
        I: IntoIterator<Item = NodeId>,
    {
        let mut seen: FxIndexMap<NodeId, ()> = fx_index_map(graph.len());
        for id in nodes {
            if !graph.contains(id) {
                return Err(GraphError::UnknownNode(id));
            }
            seen.insert(id, ());
        }
        Ok(Self { graph, members: seen.into_keys().collect() })
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Start first, then end, the same order `search` reports them in
    pub fn check_endpoints(&self, start: NodeId, end: NodeId) -> Result<(), PathFinderError> {
        for id in [start, end] {
            if !self.members.contains(&id) {
                return Err(PathFinderError::NotInSearchSet(id));
            }
        }
        Ok(())
    }

    /// Fresh overlay, every node unvisited at infinite distance
    fn overlay(&self) -> SearchOverlay {
        let mut overlay = fx_index_map(self.members.len());
        overlay.extend(self.members.iter().map(|&id| (id, SearchState::default())));
        overlay
    }
}


/// Frontier entry
/// Only the overlay index and priority are needed for ordering
#[derive(Debug)]
struct FrontierEntry {
    index: usize,
    priority: f64,
}

// BinaryHeap is a max heap, reverse to pop the lowest priority first
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.total_cmp(&self.priority)
    }
}
impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for FrontierEntry {}


/// Shared frontier expansion loop
/// Returns the path on success or the unvisited nodes on failure
pub(crate) fn search<S: Strategy>(
    set: &SearchSet<'_>,
    strategy: &S,
    config: SearchConfig,
    start: NodeId,
    end: NodeId,
) -> Result<PathResult, PathFinderError> {

    let graph = set.graph();
    let mut overlay = set.overlay();

    let start_index = overlay.get_index_of(&start).ok_or(PathFinderError::NotInSearchSet(start))?;
    let end_index = overlay.get_index_of(&end).ok_or(PathFinderError::NotInSearchSet(end))?;

    debug!("{} search {start} -> {end} over {} nodes", S::NAME, set.len());

    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let seed = strategy.seed(&mut overlay[start_index], graph.node(start)?);
    frontier.push(FrontierEntry { index: start_index, priority: seed });

    let mut expanded = 0usize;
    let mut reached_goal = false;

    while let Some(FrontierEntry { index, priority }) = frontier.pop() {

        let Some((&id, state)) = overlay.get_index_mut(index) else {
            continue;
        };
        state.visited = true;

        // A cheaper entry for this node was already expanded
        if priority > state.estimate {
            trace!("skip stale {id} at {priority}");
            continue;
        }

        let current = strategy.settled_cost(priority, state);
        expanded += 1;
        trace!("expand {id} cost {current} priority {priority}");

        if config.stop_at_goal && index == end_index {
            reached_goal = true;
            break;
        }

        for connection in graph.node(id)?.connections() {
            let target = connection.target();
            let (target_index, _, target_state) = overlay.get_full_mut(&target)
                .ok_or(PathFinderError::NotInSearchSet(target))?;

            if target_state.visited {
                continue;
            }

            let local = current + connection.cost();
            if !(local < target_state.local) {
                continue;
            }

            let estimate = strategy.priority(local, graph.node(target)?);
            target_state.local = local;
            target_state.estimate = estimate;
            target_state.previous = Some(index);
            trace!("relax {target} via {id} cost {local} priority {estimate}");

            frontier.push(FrontierEntry { index: target_index, priority: estimate });
        }
    }

    let success = reached_goal || overlay[end_index].visited;
    let result = if success {
        PathResult::found(shortest_path(&overlay, end_index)?)
    } else {
        PathResult::not_found(unreached_nodes(&overlay))
    };

    debug!(
        "{} search {start} -> {end} {} after {expanded} expansions, {} nodes returned",
        S::NAME,
        if success { "succeeded" } else { "failed" },
        result.nodes.len(),
    );

    Ok(result)
}
