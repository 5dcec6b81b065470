/// Options for a single path finder
///
/// ```
/// # use navgraph::SearchConfig;
/// assert_eq!(SearchConfig { stop_at_goal: true }, SearchConfig::EARLY_EXIT);
/// assert_eq!(SearchConfig { stop_at_goal: false }, SearchConfig::EXHAUSTIVE);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// `true`: the search returns as soon as the goal is taken off the frontier.
    ///
    /// `false`: the frontier is drained completely and success is read from the
    /// goal's visited flag afterwards. Every reachable node ends up visited, so a
    /// failed search reports only truly unreachable nodes either way, but a
    /// successful one may do a lot more work.
    pub stop_at_goal: bool,
}

impl SearchConfig {
    /// Default for [`Dijkstra`](crate::Dijkstra)
    pub const EARLY_EXIT: SearchConfig = SearchConfig { stop_at_goal: true };
    /// Default for [`AStar`](crate::AStar)
    pub const EXHAUSTIVE: SearchConfig = SearchConfig { stop_at_goal: false };
}
