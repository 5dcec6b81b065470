use crate::errors::PathFinderError;
use crate::graph::NodeId;
use super::search::SearchOverlay;

/// Construct the path from the start node to the goal node
/// Walks predecessor links back from `goal_index` until a node without one
/// overlay: SearchOverlay - per node state of a finished search
/// goal_index: usize - index of the goal node in the overlay
pub(crate) fn shortest_path(overlay: &SearchOverlay, goal_index: usize) -> Result<Vec<NodeId>, PathFinderError> {

    let mut path = Vec::new();
    let mut current = Some(goal_index);

    // Trace back from goal to start
    while let Some(index) = current {
        let Some((&id, state)) = overlay.get_index(index) else {
            return Err(broken(overlay, goal_index));
        };

        // a chain longer than the overlay must contain a cycle
        if path.len() == overlay.len() {
            return Err(PathFinderError::BrokenPredecessorChain(id));
        }

        path.push(id);
        current = state.previous;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    if path.is_empty() {
        return Err(broken(overlay, goal_index));
    }

    Ok(path)
}

/// Nodes never marked visited, in participating node order
pub(crate) fn unreached_nodes(overlay: &SearchOverlay) -> Vec<NodeId> {
    overlay.iter()
        .filter(|(_, state)| !state.visited)
        .map(|(&id, _)| id)
        .collect()
}

fn broken(overlay: &SearchOverlay, goal_index: usize) -> PathFinderError {
    let goal = overlay.get_index(goal_index).map_or(NodeId(goal_index), |(&id, _)| id);
    PathFinderError::BrokenPredecessorChain(goal)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::fx_index_map;
    use crate::graph_algos::search::SearchState;

    fn state(previous: Option<usize>, visited: bool) -> SearchState {
        SearchState { previous, visited, ..SearchState::default() }
    }

    #[test]
    fn test_path_reconstruction() {
        // Overlay built by hand: A -> C -> D, B hangs off A
        let mut overlay: SearchOverlay = fx_index_map(4);
        let a = overlay.insert_full(NodeId(10), state(None, true)).0;
        let b = overlay.insert_full(NodeId(11), state(Some(a), true)).0;
        let c = overlay.insert_full(NodeId(12), state(Some(a), true)).0;
        let d = overlay.insert_full(NodeId(13), state(Some(c), true)).0;

        assert_eq!(shortest_path(&overlay, d).unwrap(), vec![NodeId(10), NodeId(12), NodeId(13)]);
        assert_eq!(shortest_path(&overlay, b).unwrap(), vec![NodeId(10), NodeId(11)]);
        assert_eq!(shortest_path(&overlay, a).unwrap(), vec![NodeId(10)]);
    }

    #[test]
    fn test_cycle_is_reported_instead_of_looping() {
        let mut overlay: SearchOverlay = fx_index_map(2);
        overlay.insert(NodeId(0), state(Some(1), true));
        overlay.insert(NodeId(1), state(Some(0), true));

        assert!(matches!(
            shortest_path(&overlay, 0),
            Err(PathFinderError::BrokenPredecessorChain(_))
        ));
        assert_eq!(
            shortest_path(&overlay, 5),
            Err(PathFinderError::BrokenPredecessorChain(NodeId(5)))
        );
    }

    #[test]
    fn test_unreached_keeps_overlay_order() {
        let mut overlay: SearchOverlay = fx_index_map(4);
        overlay.insert(NodeId(3), state(None, false));
        overlay.insert(NodeId(0), state(None, true));
        overlay.insert(NodeId(2), state(None, false));
        overlay.insert(NodeId(1), state(Some(1), true));

        assert_eq!(unreached_nodes(&overlay), vec![NodeId(3), NodeId(2)]);
    }
}
