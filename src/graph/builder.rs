use super::{Graph, Node};
use crate::{BuildError, Cost, NodeID, Point, UnknownNodeError};

use hashbrown::HashMap;

/// Collects Nodes and Edges and turns them into an immutable [`Graph`].
///
/// Every Edge is stored in both directions, so the resulting Graph is always symmetric.
/// Adding the same Edge twice replaces the weight in both directions.
///
/// ## Examples
/// Basic usage:
/// ```
/// use route_planner::prelude::*;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_node("A", (0.0, 0.0))?;
/// builder.add_node("B", (3.0, 4.0))?;
/// builder.add_edge("A", "B", 5.0)?;
/// let graph = builder.build();
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.neighbors("B")?.collect::<Vec<_>>(), vec![("A", 5.0)]);
/// # Ok::<(), route_planner::BuildError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    nodes: slab::Slab<Node>,
    ids: HashMap<String, NodeID>,
}

impl GraphBuilder {
    /// Creates an empty GraphBuilder
    pub fn new() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Creates an empty GraphBuilder with room for `capacity` Nodes
    pub fn with_capacity(capacity: usize) -> GraphBuilder {
        GraphBuilder {
            nodes: slab::Slab::with_capacity(capacity),
            ids: HashMap::with_capacity(capacity),
        }
    }

    /// Adds a Node called `name` at `pos` and returns its [`NodeID`].
    ///
    /// Fails if the name is already taken or the coordinate is not finite.
    pub fn add_node(&mut self, name: impl Into<String>, pos: Point) -> Result<NodeID, BuildError> {
        let name = name.into();
        if !pos.0.is_finite() || !pos.1.is_finite() {
            return Err(BuildError::InvalidCoordinate {
                name,
                x: pos.0,
                y: pos.1,
            });
        }
        if self.ids.contains_key(&name) {
            return Err(BuildError::DuplicateNode(name));
        }
        let id = self.nodes.insert(Node::new(name.clone(), pos));
        self.ids.insert(name, id);
        Ok(id)
    }

    /// Connects the Nodes `a` and `b` with an undirected Edge of the given `weight`.
    ///
    /// Both Nodes must have been added before. The weight must be finite and not negative.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Cost) -> Result<&mut Self, BuildError> {
        let src = self.id(a)?;
        let target = self.id(b)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(BuildError::InvalidWeight {
                from: a.to_owned(),
                to: b.to_owned(),
                weight,
            });
        }
        self.nodes[src].edges.insert(target, weight);
        self.nodes[target].edges.insert(src, weight);
        Ok(self)
    }

    /// Number of Nodes added so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if no Nodes have been added yet
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finishes construction.
    pub fn build(self) -> Graph {
        #[cfg(feature = "log")]
        log::debug!(
            "built graph with {} nodes and {} edges",
            self.nodes.len(),
            self.nodes.iter().map(|(_, n)| n.edges.len()).sum::<usize>() / 2
        );
        Graph {
            nodes: self.nodes,
            ids: self.ids,
        }
    }

    fn id(&self, name: &str) -> Result<NodeID, UnknownNodeError> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| UnknownNodeError(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense() {
        let mut builder = GraphBuilder::new();
        assert_eq!(builder.add_node("A", (0.0, 0.0)), Ok(0));
        assert_eq!(builder.add_node("B", (1.0, 0.0)), Ok(1));
        assert_eq!(builder.add_node("C", (2.0, 0.0)), Ok(2));
        assert_eq!(builder.len(), 3);
    }

    #[test]
    fn duplicate_node() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A", (0.0, 0.0)).unwrap();
        assert_eq!(
            builder.add_node("A", (5.0, 5.0)),
            Err(BuildError::DuplicateNode("A".into()))
        );
    }

    #[test]
    fn rejects_invalid_input() {
        let mut builder = GraphBuilder::new();
        assert!(matches!(
            builder.add_node("NaN", (f64::NAN, 0.0)),
            Err(BuildError::InvalidCoordinate { .. })
        ));
        builder.add_node("A", (0.0, 0.0)).unwrap();
        builder.add_node("B", (1.0, 0.0)).unwrap();

        assert!(matches!(
            builder.add_edge("A", "B", -1.0),
            Err(BuildError::InvalidWeight { .. })
        ));
        assert!(matches!(
            builder.add_edge("A", "B", f64::INFINITY),
            Err(BuildError::InvalidWeight { .. })
        ));
        assert_eq!(
            builder.add_edge("A", "Z", 1.0).err(),
            Some(BuildError::UnknownNode(UnknownNodeError("Z".into())))
        );
    }

    #[test]
    fn edges_are_symmetric() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A", (0.0, 0.0)).unwrap();
        builder.add_node("B", (1.0, 0.0)).unwrap();
        builder.add_edge("A", "B", 4.0).unwrap();
        builder.add_edge("B", "A", 2.0).unwrap();

        let graph = builder.build();
        assert_eq!(graph.neighbors("A").unwrap().collect::<Vec<_>>(), vec![("B", 2.0)]);
        assert_eq!(graph.neighbors("B").unwrap().collect::<Vec<_>>(), vec![("A", 2.0)]);
    }
}
