use super::{HeuristicElement, SearchConfig};
use crate::{
    node_id::{node_id_map_with_cap, NodeIDMap},
    Cost, Graph, NodeID, Path, SearchOutcome, UnknownNodeError,
};

use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// The lifecycle of a [`RouteSearch`]
///
/// `Unstarted -> Expanding -> (Found | Exhausted)`. `Found` and `Exhausted` are final.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// [`RouteSearch::step`] has not been called yet
    Unstarted,
    /// The frontier still has entries to expand
    Expanding,
    /// The goal was reached
    Found,
    /// The frontier ran empty without reaching the goal
    Exhausted,
}

impl SearchState {
    /// `true` for `Found` and `Exhausted`
    pub fn is_finished(self) -> bool {
        matches!(self, SearchState::Found | SearchState::Exhausted)
    }
}

/// A single A* search from one Node to another, which can be advanced one step at a time.
///
/// The search owns all of its state (best known Costs, predecessors and the frontier) and only
/// borrows the [`Graph`], so any number of searches can run on the same Graph at once.
///
/// Most callers want [`Graph::find_path`] instead. Stepping manually is useful to visualize
/// how the search explores the Graph.
///
/// ## Examples
/// ```
/// use route_planner::{prelude::*, search::{RouteSearch, SearchState}};
///
/// let graph = Graph::from_parts(
///     [("A", (0.0, 0.0)), ("B", (5.0, 0.0)), ("C", (10.0, 0.0))],
///     [("A", "B", 5.0), ("B", "C", 5.0), ("A", "C", 20.0)],
/// )?;
///
/// let mut search = RouteSearch::new(&graph, "A", "C", SearchConfig::default())?;
/// assert_eq!(search.state(), SearchState::Unstarted);
///
/// while !search.step().is_finished() {
///     // draw search.visited() here
/// }
///
/// assert_eq!(search.state(), SearchState::Found);
/// let path = search.outcome().and_then(SearchOutcome::into_path).unwrap();
/// assert_eq!(path.nodes(), &["A", "B", "C"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct RouteSearch<'g> {
    graph: &'g Graph,
    start: NodeID,
    goal: NodeID,
    use_heuristic: bool,
    visited: NodeIDMap<(Cost, NodeID)>,
    next: BinaryHeap<HeuristicElement<NodeID>>,
    state: SearchState,
}

impl<'g> RouteSearch<'g> {
    /// Prepares a search from `start` to `goal`.
    ///
    /// Fails if either Node does not exist in the Graph.
    pub fn new(
        graph: &'g Graph,
        start: &str,
        goal: &str,
        config: SearchConfig,
    ) -> Result<RouteSearch<'g>, UnknownNodeError> {
        let start = graph.id(start)?;
        let goal = graph.id(goal)?;
        // a search never visits more Nodes than the Graph has
        let size_hint = config.size_hint.map_or(graph.len(), |hint| hint.min(graph.len()));
        Ok(RouteSearch {
            graph,
            start,
            goal,
            use_heuristic: config.use_heuristic,
            visited: node_id_map_with_cap(size_hint),
            next: BinaryHeap::with_capacity(size_hint / 2),
            state: SearchState::Unstarted,
        })
    }

    /// The current state of the search
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The name of the start Node
    pub fn start(&self) -> &'g str {
        self.name(self.start)
    }

    /// The name of the goal Node
    pub fn goal(&self) -> &'g str {
        self.name(self.goal)
    }

    /// Number of entries waiting in the frontier, including stale ones
    pub fn frontier_len(&self) -> usize {
        self.next.len()
    }

    /// All Nodes discovered so far with the best Cost known to reach them from the start
    pub fn visited(&self) -> impl Iterator<Item = (&'g str, Cost)> + '_ {
        self.visited
            .iter()
            .map(|(&id, &(cost, _))| (self.name(id), cost))
    }

    /// Advances the search by expanding the next frontier entry and returns the new state.
    ///
    /// The first call only initializes the search. Calling this on a finished search does
    /// nothing.
    pub fn step(&mut self) -> SearchState {
        match self.state {
            SearchState::Unstarted => {
                self.visited.insert(self.start, (0.0, self.start));
                if self.start == self.goal {
                    self.state = SearchState::Found;
                } else {
                    self.next.push(HeuristicElement::new(self.start, 0.0, 0.0));
                    self.state = SearchState::Expanding;
                }
            }
            SearchState::Expanding => self.expand(),
            SearchState::Found | SearchState::Exhausted => {}
        }
        self.state
    }

    /// Steps until the search is finished and returns the result.
    pub fn run(mut self) -> SearchOutcome<&'g str> {
        while !self.step().is_finished() {}
        self.outcome().unwrap_or(SearchOutcome::NoPathFound)
    }

    /// The result of the search, or `None` while it is not finished.
    pub fn outcome(&self) -> Option<SearchOutcome<&'g str>> {
        match self.state {
            SearchState::Unstarted | SearchState::Expanding => None,
            SearchState::Exhausted => Some(SearchOutcome::NoPathFound),
            SearchState::Found => Some(SearchOutcome::Found(self.reconstruct())),
        }
    }

    fn expand(&mut self) {
        let graph = self.graph;

        // stale entries are dropped without counting as a step
        while let Some(HeuristicElement(current_id, current_cost, _)) = self.next.pop() {
            match current_cost.cmp(&OrderedFloat(self.visited[&current_id].0)) {
                Ordering::Greater => continue,
                Ordering::Equal => {}
                Ordering::Less => unreachable!("frontier entry is cheaper than its best known cost"),
            }
            if current_id == self.goal {
                self.state = SearchState::Found;
                return;
            }
            let current_cost = current_cost.into_inner();

            #[cfg(feature = "log")]
            log::trace!("expanding {} at cost {}", self.name(current_id), current_cost);

            for (&other_id, &weight) in graph.node(current_id).edges.iter() {
                let other_cost = current_cost + weight;

                let mut needs_visit = true;
                if let Some((prev_cost, prev_id)) = self.visited.get_mut(&other_id) {
                    if *prev_cost > other_cost {
                        *prev_cost = other_cost;
                        *prev_id = current_id;
                    } else {
                        needs_visit = false;
                    }
                } else {
                    self.visited.insert(other_id, (other_cost, current_id));
                }

                if needs_visit {
                    let heuristic = self.heuristic(other_id);
                    self.next.push(HeuristicElement::new(
                        other_id,
                        other_cost,
                        other_cost + heuristic,
                    ));
                }
            }
            return;
        }
        self.state = SearchState::Exhausted;
    }

    fn heuristic(&self, id: NodeID) -> Cost {
        if self.use_heuristic {
            self.graph.distance(id, self.goal)
        } else {
            0.0
        }
    }

    fn reconstruct(&self) -> Path<&'g str> {
        let steps = {
            let mut steps = vec![];
            let mut current = self.goal;

            while current != self.start {
                steps.push(self.name(current));
                let (_, prev) = self.visited[&current];
                current = prev;
            }
            steps.push(self.name(self.start));
            steps.reverse();
            steps
        };

        Path::new(steps, self.visited[&self.goal].0)
    }

    fn name(&self, id: NodeID) -> &'g str {
        let graph: &'g Graph = self.graph;
        graph.node(id).name.as_str()
    }
}

/// Searches `graph` for the cheapest Path from `start` to `goal` using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Runs a [`RouteSearch`] to completion. See [`Graph::find_path`] for examples.
///
/// ## Returns
/// - `Err` if `start` or `goal` is not a Node of the Graph
/// - `Ok(SearchOutcome::NoPathFound)` if the goal is unreachable
/// - `Ok(SearchOutcome::Found(path))` otherwise. The first Node in the Path is always `start`,
///   the last is always `goal`
pub fn a_star_search<'g>(
    graph: &'g Graph,
    start: &str,
    goal: &str,
    config: SearchConfig,
) -> Result<SearchOutcome<&'g str>, UnknownNodeError> {
    #[cfg(feature = "log")]
    let timer = std::time::Instant::now();

    let outcome = RouteSearch::new(graph, start, goal, config)?.run();

    #[cfg(feature = "log")]
    {
        match &outcome {
            SearchOutcome::Found(path) => log::debug!(
                "found path {} -> {} with cost {} over {} nodes in {:?}",
                start,
                goal,
                path.cost(),
                path.len(),
                timer.elapsed()
            ),
            SearchOutcome::NoPathFound => {
                log::debug!("no path {} -> {} after {:?}", start, goal, timer.elapsed())
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Graph {
        Graph::from_parts(
            [
                ("A", (0.0, 0.0)),
                ("B", (5.0, 0.0)),
                ("C", (10.0, 0.0)),
                ("D", (0.0, 10.0)),
            ],
            [("A", "B", 5.0), ("B", "C", 5.0), ("A", "C", 20.0)],
        )
        .unwrap()
    }

    fn found(outcome: SearchOutcome<&str>) -> (Vec<&str>, Cost) {
        let path = outcome.into_path().expect("no path found");
        let cost = path.cost();
        (path.into_nodes(), cost)
    }

    #[test]
    fn prefers_cheaper_detour() {
        let graph = abc();
        let outcome = a_star_search(&graph, "A", "C", SearchConfig::default()).unwrap();
        assert_eq!(found(outcome), (vec!["A", "B", "C"], 10.0));
    }

    #[test]
    fn start_is_goal() {
        let graph = abc();
        let outcome = a_star_search(&graph, "A", "A", SearchConfig::default()).unwrap();
        assert_eq!(found(outcome), (vec!["A"], 0.0));

        let outcome = a_star_search(&graph, "D", "D", SearchConfig::default()).unwrap();
        assert_eq!(found(outcome), (vec!["D"], 0.0));
    }

    #[test]
    fn unreachable_goal() {
        let graph = abc();
        assert_eq!(
            a_star_search(&graph, "A", "D", SearchConfig::default()),
            Ok(SearchOutcome::NoPathFound)
        );
        assert_eq!(
            a_star_search(&graph, "D", "C", SearchConfig::default()),
            Ok(SearchOutcome::NoPathFound)
        );
    }

    #[test]
    fn unknown_nodes() {
        let graph = abc();
        let err = UnknownNodeError("X".into());
        assert_eq!(
            a_star_search(&graph, "X", "A", SearchConfig::default()),
            Err(err.clone())
        );
        assert_eq!(
            a_star_search(&graph, "A", "X", SearchConfig::default()),
            Err(err.clone())
        );
        assert_eq!(
            a_star_search(&graph, "X", "X", SearchConfig::default()),
            Err(err)
        );
    }

    #[test]
    fn stale_entries_are_skipped() {
        // B is first reached directly for 10, then improved to 2 via A
        let graph = Graph::from_parts(
            [
                ("S", (0.0, 0.0)),
                ("A", (0.0, 0.0)),
                ("B", (0.0, 0.0)),
                ("G", (0.0, 0.0)),
            ],
            [("S", "A", 1.0), ("S", "B", 10.0), ("A", "B", 1.0), ("B", "G", 20.0)],
        )
        .unwrap();

        let mut search = RouteSearch::new(&graph, "S", "G", SearchConfig::default()).unwrap();
        assert_eq!(search.step(), SearchState::Expanding);
        assert_eq!(search.step(), SearchState::Expanding); // S
        assert_eq!(search.frontier_len(), 2);
        assert_eq!(search.step(), SearchState::Expanding); // A, pushes B again
        assert_eq!(search.frontier_len(), 2);
        assert_eq!(search.step(), SearchState::Expanding); // B at 2
        assert_eq!(search.frontier_len(), 2);
        assert_eq!(search.step(), SearchState::Found); // drops B at 10, then G
        assert_eq!(search.frontier_len(), 0);

        let (path, cost) = found(search.outcome().unwrap());
        assert_eq!(path, vec!["S", "A", "B", "G"]);
        assert_eq!(cost, 22.0);
    }

    #[test]
    fn exhausted_state_is_final() {
        let graph = abc();
        let mut search = RouteSearch::new(&graph, "C", "D", SearchConfig::default()).unwrap();
        assert_eq!(search.outcome(), None);

        while !search.step().is_finished() {}
        assert_eq!(search.state(), SearchState::Exhausted);
        assert_eq!(search.step(), SearchState::Exhausted);
        assert_eq!(search.outcome(), Some(SearchOutcome::NoPathFound));

        let mut visited: Vec<_> = search.visited().collect();
        visited.sort_by(|a, b| a.0.cmp(b.0));
        assert_eq!(visited, vec![("A", 10.0), ("B", 5.0), ("C", 0.0)]);
    }

    #[test]
    fn zero_weight_edges() {
        let graph = Graph::from_parts(
            [("A", (0.0, 0.0)), ("B", (0.0, 0.0)), ("C", (0.0, 0.0))],
            [("A", "B", 0.0), ("B", "C", 0.0), ("A", "C", 1.0)],
        )
        .unwrap();
        let outcome = a_star_search(&graph, "A", "C", SearchConfig::default()).unwrap();
        assert_eq!(found(outcome), (vec!["A", "B", "C"], 0.0));
    }

    #[test]
    fn dijkstra_ignores_geometry() {
        // the direct Edge is shorter than the distance between A and C
        let graph = Graph::from_parts(
            [("A", (0.0, 0.0)), ("B", (1.0, 100.0)), ("C", (100.0, 0.0))],
            [("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 50.0)],
        )
        .unwrap();
        assert_eq!(graph.inadmissible_edges().len(), 3);

        let outcome = a_star_search(&graph, "A", "C", SearchConfig::DIJKSTRA).unwrap();
        assert_eq!(found(outcome), (vec!["A", "B", "C"], 2.0));
    }

    #[test]
    fn size_hint() {
        let graph = abc();
        let outcome = a_star_search(&graph, "C", "A", SearchConfig::with_size_hint(1)).unwrap();
        assert_eq!(found(outcome), (vec!["C", "B", "A"], 10.0));

        let outcome = a_star_search(&graph, "A", "C", SearchConfig::with_size_hint(usize::MAX));
        assert_eq!(found(outcome.unwrap()), (vec!["A", "B", "C"], 10.0));
    }

    #[test]
    fn start_and_goal_names() {
        let graph = abc();
        let search = RouteSearch::new(&graph, "B", "D", SearchConfig::DIJKSTRA).unwrap();
        assert_eq!((search.start(), search.goal()), ("B", "D"));
    }
}
