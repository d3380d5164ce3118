use crate::Cost;
use thiserror::Error;

/// A Node was referenced by a name that does not exist in the [`Graph`](crate::Graph).
///
/// Contains the name that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("unknown node `{0}`")]
pub struct UnknownNodeError(pub String);

impl UnknownNodeError {
    /// the name that could not be resolved
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur while constructing a [`Graph`](crate::Graph) with a
/// [`GraphBuilder`](crate::GraphBuilder).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// Two Nodes were added with the same name
    #[error("node `{0}` was added more than once")]
    DuplicateNode(String),

    /// An Edge references a Node that was never added
    #[error(transparent)]
    UnknownNode(#[from] UnknownNodeError),

    /// An Edge weight was negative, infinite or NaN
    #[error("edge `{from}` - `{to}` has invalid weight {weight}")]
    InvalidWeight {
        /// one end of the Edge
        from: String,
        /// the other end of the Edge
        to: String,
        /// the rejected weight
        weight: Cost,
    },

    /// A Node coordinate was infinite or NaN
    #[error("node `{name}` has invalid coordinate ({x}, {y})")]
    InvalidCoordinate {
        /// the Node
        name: String,
        /// the rejected x coordinate
        x: f64,
        /// the rejected y coordinate
        y: f64,
    },
}
