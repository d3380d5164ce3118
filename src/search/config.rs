/// Options for configuring a search on a [`Graph`](crate::Graph)
///
/// Default options:
/// ```
/// # use route_planner::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         use_heuristic: true,
///         size_hint: None,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// `true` (default): the frontier is ordered by the Cost so far plus the straight-line
    /// distance to the goal (A*).
    ///
    /// `false`: the frontier is ordered by the Cost so far only (Dijkstra).
    ///
    /// A* expands fewer Nodes, but only returns the cheapest Path if no Edge weight is smaller
    /// than the straight-line distance between its endpoints. See
    /// [`Graph::inadmissible_edges`](crate::Graph::inadmissible_edges).
    pub use_heuristic: bool,
    /// The number of Nodes the search is expected to visit, used to pre-allocate the search
    /// state.
    ///
    /// `None` (default): use the number of Nodes in the Graph.
    pub size_hint: Option<usize>,
}

impl SearchConfig {
    /// A* guided by the straight-line distance to the goal
    ///
    /// Values:
    /// ```
    /// # use route_planner::SearchConfig;
    /// assert_eq!(SearchConfig::A_STAR, SearchConfig::default());
    /// ```
    pub const A_STAR: SearchConfig = SearchConfig {
        use_heuristic: true,
        size_hint: None,
    };
    /// Dijkstra's Algorithm, for Graphs whose weights are unrelated to their geometry
    ///
    /// Values:
    /// ```
    /// # use route_planner::SearchConfig;
    /// assert_eq!(
    ///     SearchConfig {
    ///         use_heuristic: false,
    ///         size_hint: None,
    ///     },
    ///     SearchConfig::DIJKSTRA
    /// );
    /// ```
    pub const DIJKSTRA: SearchConfig = SearchConfig {
        use_heuristic: false,
        size_hint: None,
    };

    /// Creates the default config with a specific `size_hint`
    pub fn with_size_hint(size_hint: usize) -> SearchConfig {
        SearchConfig {
            size_hint: Some(size_hint),
            ..Default::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::A_STAR
    }
}
