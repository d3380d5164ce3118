//! The Graph Store: Node positions and the weighted Edges between them.

mod node;
pub(crate) use node::Node;

mod builder;
pub use builder::GraphBuilder;

use crate::{
    search::{a_star_search, SearchConfig},
    BuildError, Cost, NodeID, Point, SearchOutcome, UnknownNodeError,
};
use hashbrown::HashMap;

/// An immutable, undirected Graph with Nodes on a 2-D plane.
///
/// Nodes are identified by a unique name. Every Edge has a non-negative weight and is stored
/// in both directions, so `weight(a -> b) == weight(b -> a)` always holds.
///
/// A Graph is created with a [`GraphBuilder`] (or [`Graph::from_parts`]) and never changes
/// afterwards, which allows sharing it between several concurrent searches.
///
/// ## Heuristic
/// Searches are guided by the straight-line distance between a Node and the goal. That
/// estimate is only guaranteed to produce the cheapest Route if no Edge is cheaper than the
/// straight-line distance between its endpoints. This is not checked when the Graph is built.
/// Use [`inadmissible_edges`](Graph::inadmissible_edges) to find offending Edges and
/// [`SearchConfig::DIJKSTRA`] to search Graphs whose weights are unrelated to geometry.
#[derive(Clone, Debug)]
pub struct Graph {
    pub(crate) nodes: slab::Slab<Node>,
    pub(crate) ids: HashMap<String, NodeID>,
}

impl Graph {
    /// Creates a new [`GraphBuilder`]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Builds a Graph from a list of Nodes and a list of undirected Edges `(a, b, weight)`.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// use route_planner::Graph;
    ///
    /// let graph = Graph::from_parts(
    ///     [("A", (0.0, 0.0)), ("B", (5.0, 0.0)), ("C", (10.0, 0.0))],
    ///     [("A", "B", 5.0), ("B", "C", 5.0)],
    /// )?;
    ///
    /// assert_eq!(graph.straight_line_distance("A", "C")?, 10.0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_parts<'a>(
        nodes: impl IntoIterator<Item = (&'a str, Point)>,
        edges: impl IntoIterator<Item = (&'a str, &'a str, Cost)>,
    ) -> Result<Graph, BuildError> {
        let mut builder = GraphBuilder::new();
        for (name, pos) in nodes {
            builder.add_node(name, pos)?;
        }
        for (a, b, weight) in edges {
            builder.add_edge(a, b, weight)?;
        }
        Ok(builder.build())
    }

    /// Number of Nodes in the Graph
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the Graph has no Nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `true` if a Node called `name` exists
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Resolves a Node name to its [`NodeID`]
    pub fn id(&self, name: &str) -> Result<NodeID, UnknownNodeError> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| UnknownNodeError(name.to_owned()))
    }

    /// The name of the Node with the given [`NodeID`], if it exists
    pub fn name(&self, id: NodeID) -> Option<&str> {
        self.nodes.get(id).map(|node| node.name.as_str())
    }

    /// All Neighbors of a Node together with the weight of the connecting Edge.
    ///
    /// The Iterator is empty if the Node has no Edges.
    pub fn neighbors(&self, name: &str) -> Result<Neighbors<'_>, UnknownNodeError> {
        let id = self.id(name)?;
        Ok(Neighbors {
            graph: self,
            edges: self.nodes[id].edges.iter(),
        })
    }

    /// The position of a Node
    pub fn coordinate(&self, name: &str) -> Result<Point, UnknownNodeError> {
        Ok(self.nodes[self.id(name)?].pos)
    }

    /// The Euclidean distance between two Nodes.
    ///
    /// This is the Heuristic used by the search. See [Heuristic](#heuristic).
    pub fn straight_line_distance(&self, a: &str, b: &str) -> Result<Cost, UnknownNodeError> {
        let (a, b) = (self.id(a)?, self.id(b)?);
        Ok(self.distance(a, b))
    }

    pub(crate) fn distance(&self, a: NodeID, b: NodeID) -> Cost {
        self.nodes[a].distance_to(&self.nodes[b])
    }

    pub(crate) fn node(&self, id: NodeID) -> &Node {
        &self.nodes[id]
    }

    /// Iterates over all Nodes and their positions in the order they were added
    pub fn nodes(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.nodes.iter().map(|(_, node)| (node.name.as_str(), node.pos))
    }

    /// Iterates over all Edges. Every undirected Edge is returned exactly once.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Cost)> + '_ {
        self.nodes.iter().flat_map(move |(id, node)| {
            node.edges
                .iter()
                .filter(move |&(&other, _)| id <= other)
                .map(move |(&other, &weight)| {
                    (node.name.as_str(), self.nodes[other].name.as_str(), weight)
                })
        })
    }

    /// Finds the first Node whose position is at most `radius` away from `point` on both axes.
    ///
    /// ## Examples
    /// ```
    /// use route_planner::sample::pakistan_roads;
    ///
    /// let graph = pakistan_roads();
    /// assert_eq!(graph.node_at((305.0, 95.0), 10.0), Some("Islamabad"));
    /// assert_eq!(graph.node_at((500.0, 500.0), 10.0), None);
    /// ```
    pub fn node_at(&self, point: Point, radius: f64) -> Option<&str> {
        self.nodes()
            .find(|(_, (x, y))| (point.0 - x).abs() <= radius && (point.1 - y).abs() <= radius)
            .map(|(name, _)| name)
    }

    /// Returns every Edge whose weight is smaller than the straight-line distance between its
    /// endpoints, ordered by the [`NodeID`]s of the endpoints.
    ///
    /// If this is empty, the straight-line Heuristic never overestimates and the default
    /// search always returns the cheapest Route.
    pub fn inadmissible_edges(&self) -> Vec<(&str, &str)> {
        let check = |(_, &id): (&String, &NodeID)| {
            self.nodes[id]
                .edges
                .iter()
                .filter(|&(&other, &weight)| id < other && weight < self.distance(id, other))
                .map(|(&other, _)| (id, other))
                .collect::<Vec<_>>()
        };

        #[cfg(feature = "parallel")]
        let mut found: Vec<(NodeID, NodeID)> = {
            use rayon::prelude::*;
            self.ids.par_iter().flat_map_iter(check).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let mut found: Vec<(NodeID, NodeID)> = self.ids.iter().flat_map(check).collect();

        found.sort_unstable();
        found
            .into_iter()
            .map(|(a, b)| (self.nodes[a].name.as_str(), self.nodes[b].name.as_str()))
            .collect()
    }

    /// Calculates the cheapest Route from `start` to `goal` with the default [`SearchConfig`].
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// use route_planner::prelude::*;
    ///
    /// let graph = Graph::from_parts(
    ///     [("A", (0.0, 0.0)), ("B", (5.0, 0.0)), ("C", (10.0, 0.0)), ("D", (0.0, 9.0))],
    ///     [("A", "B", 5.0), ("B", "C", 5.0), ("A", "C", 20.0)],
    /// )?;
    ///
    /// let path = graph.find_path("A", "C")?.into_path().unwrap();
    /// assert_eq!(path.nodes(), &["A", "B", "C"]);
    /// assert_eq!(path.cost(), 10.0);
    ///
    /// assert_eq!(graph.find_path("A", "D")?, SearchOutcome::NoPathFound);
    /// assert!(graph.find_path("A", "Z").is_err());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn find_path(
        &self,
        start: &str,
        goal: &str,
    ) -> Result<SearchOutcome<&str>, UnknownNodeError> {
        self.find_path_with(start, goal, SearchConfig::default())
    }

    /// Calculates the cheapest Route from `start` to `goal` with a custom [`SearchConfig`].
    pub fn find_path_with(
        &self,
        start: &str,
        goal: &str,
        config: SearchConfig,
    ) -> Result<SearchOutcome<&str>, UnknownNodeError> {
        a_star_search(self, start, goal, config)
    }

    /// Runs one search per `(start, goal)` pair, one after the other.
    ///
    /// The results are in the same order as `queries`.
    pub fn find_paths<S: AsRef<str>>(
        &self,
        queries: &[(S, S)],
        config: SearchConfig,
    ) -> Vec<Result<SearchOutcome<&str>, UnknownNodeError>> {
        queries
            .iter()
            .map(|(start, goal)| self.find_path_with(start.as_ref(), goal.as_ref(), config))
            .collect()
    }

    /// Same as [`find_paths`](Graph::find_paths), but runs the searches on the rayon
    /// thread pool. Every search keeps its own state; only the Graph is shared.
    #[cfg(feature = "parallel")]
    pub fn find_paths_parallel<S: AsRef<str> + Sync>(
        &self,
        queries: &[(S, S)],
        config: SearchConfig,
    ) -> Vec<Result<SearchOutcome<&str>, UnknownNodeError>> {
        use rayon::prelude::*;

        queries
            .par_iter()
            .map(|(start, goal)| self.find_path_with(start.as_ref(), goal.as_ref(), config))
            .collect()
    }
}

/// Iterator over the Neighbors of a Node, returned by [`Graph::neighbors`].
///
/// Yields `(name, weight)` pairs in no particular order.
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    graph: &'a Graph,
    edges: hashbrown::hash_map::Iter<'a, NodeID, Cost>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = (&'a str, Cost);

    fn next(&mut self) -> Option<Self::Item> {
        self.edges
            .next()
            .map(|(&id, &weight)| (self.graph.nodes[id].name.as_str(), weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_parts(
            [
                ("A", (0.0, 0.0)),
                ("B", (3.0, 4.0)),
                ("C", (6.0, 0.0)),
                ("D", (50.0, 50.0)),
            ],
            [("A", "B", 5.0), ("B", "C", 5.0), ("A", "C", 20.0)],
        )
        .unwrap()
    }

    #[test]
    fn neighbors() {
        let graph = triangle();
        let mut neighbors: Vec<_> = graph.neighbors("A").unwrap().collect();
        neighbors.sort_by(|a, b| a.0.cmp(b.0));
        assert_eq!(neighbors, vec![("B", 5.0), ("C", 20.0)]);

        assert_eq!(graph.neighbors("A").unwrap().len(), 2);
        assert_eq!(graph.neighbors("D").unwrap().count(), 0);
        assert_eq!(
            graph.neighbors("X").err(),
            Some(UnknownNodeError("X".into()))
        );
    }

    #[test]
    fn geometry() {
        let graph = triangle();
        assert_eq!(graph.coordinate("B"), Ok((3.0, 4.0)));
        assert_eq!(graph.straight_line_distance("A", "B"), Ok(5.0));
        assert_eq!(graph.straight_line_distance("B", "A"), Ok(5.0));
        assert_eq!(graph.straight_line_distance("C", "C"), Ok(0.0));
        assert!(graph.coordinate("X").is_err());
        assert!(graph.straight_line_distance("A", "X").is_err());
        assert!(graph.straight_line_distance("X", "A").is_err());
    }

    #[test]
    fn ids_and_names() {
        let graph = triangle();
        assert_eq!(graph.len(), 4);
        assert!(graph.contains("C"));
        assert!(!graph.contains("c"));
        assert_eq!(graph.id("C"), Ok(2));
        assert_eq!(graph.name(2), Some("C"));
        assert_eq!(graph.name(4), None);
    }

    #[test]
    fn edges_once() {
        let graph = triangle();
        let mut edges: Vec<_> = graph.edges().collect();
        edges.sort_by(|a, b| a.2.total_cmp(&b.2).then(a.0.cmp(b.0)));
        assert_eq!(
            edges,
            vec![("A", "B", 5.0), ("B", "C", 5.0), ("A", "C", 20.0)]
        );
    }

    #[test]
    fn node_at() {
        let graph = triangle();
        assert_eq!(graph.node_at((1.0, -1.0), 1.0), Some("A"));
        assert_eq!(graph.node_at((45.0, 55.0), 5.0), Some("D"));
        assert_eq!(graph.node_at((45.0, 55.0), 4.9), None);
    }

    #[test]
    fn inadmissible() {
        let graph = triangle();
        assert!(graph.inadmissible_edges().is_empty());

        let graph = Graph::from_parts(
            [("A", (0.0, 0.0)), ("B", (10.0, 0.0)), ("C", (20.0, 0.0))],
            [("B", "A", 4.0), ("B", "C", 10.0), ("C", "A", 1.0)],
        )
        .unwrap();
        assert_eq!(graph.inadmissible_edges(), vec![("A", "B"), ("A", "C")]);
    }
}
