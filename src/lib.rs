#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find the cheapest Route between two Nodes of a weighted Graph on a 2-D plane.
//!
//! ## Introduction
//! Every Node of the [`Graph`] has a unique name and a position, and Nodes are connected by
//! undirected Edges with a non-negative weight. Routes are searched with the
//! [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm): Dijkstra's Algorithm
//! guided by the straight-line distance from each Node to the goal, which lets the search
//! expand Nodes in the direction of the goal first.
//!
//! The straight-line distance only ever underestimates the remaining Cost if no Edge is
//! cheaper than the distance between its endpoints. That is the case for road maps where the
//! weights are lengths on the same scale as the positions. For other Graphs see
//! [`Graph::inadmissible_edges`] and [`SearchConfig::DIJKSTRA`].
//!
//! ## Examples
//! Creating the Graph:
//! ```
//! use route_planner::prelude::*;
//!
//! let mut builder = Graph::builder();
//! builder.add_node("A", (0.0, 0.0))?;
//! builder.add_node("B", (5.0, 0.0))?;
//! builder.add_node("C", (10.0, 0.0))?;
//! builder.add_node("D", (0.0, 10.0))?;
//!
//! builder.add_edge("A", "B", 5.0)?;
//! builder.add_edge("B", "C", 5.0)?;
//! builder.add_edge("A", "C", 20.0)?;
//!
//! let graph = builder.build();
//! # Ok::<(), BuildError>(())
//! ```
//! The Graph cannot be changed after it was built. It can however be shared between as many
//! searches (and threads) as needed.
//!
//! ### Pathfinding
//! Finding the Route between two Nodes:
//! ```
//! # use route_planner::prelude::*;
//! # let graph = Graph::from_parts(
//! #     [("A", (0.0, 0.0)), ("B", (5.0, 0.0)), ("C", (10.0, 0.0)), ("D", (0.0, 10.0))],
//! #     [("A", "B", 5.0), ("B", "C", 5.0), ("A", "C", 20.0)],
//! # ).unwrap();
//! let outcome = graph.find_path("A", "C")?;
//!
//! // the direct Edge is more expensive than the detour over B
//! let path = outcome.into_path().unwrap();
//! assert_eq!(path.nodes(), &["A", "B", "C"]);
//! assert_eq!(path.cost(), 10.0);
//!
//! // D has no Edges
//! assert_eq!(graph.find_path("A", "D")?, SearchOutcome::NoPathFound);
//!
//! // unknown names are an error
//! assert_eq!(graph.find_path("A", "Z"), Err(UnknownNodeError("Z".into())));
//! # Ok::<(), UnknownNodeError>(())
//! ```
//!
//! ### Configuration
//! [`Graph::find_path_with`] takes a [`SearchConfig`] to switch between A* and Dijkstra or to
//! pre-allocate the search state.
//! ```
//! # use route_planner::prelude::*;
//! # let graph = route_planner::sample::pakistan_roads();
//! let outcome = graph.find_path_with("Lahore", "Karachi", SearchConfig::DIJKSTRA)?;
//!
//! assert_eq!(outcome.path().map(Path::cost), Some(840.0));
//! # Ok::<(), UnknownNodeError>(())
//! ```
//!
//! ## Crate Features
//! - `parallel` (default): [`Graph::find_paths_parallel`] to run many searches on the rayon
//!   thread pool.
//! - `log`: trace every expansion and log the duration of each search through the
//!   [`log`](https://docs.rs/log) facade.

mod node_id;
pub use node_id::{NodeID, NodeIDHasher, NodeIDMap};

mod error;
pub use error::{BuildError, UnknownNodeError};

mod path;
pub use path::{Cost, Path, SearchOutcome};

mod graph;
pub use graph::{Graph, GraphBuilder, Neighbors};

pub mod search;
pub use search::SearchConfig;

pub mod sample;

/// A shorthand for positions on the plane
pub type Point = (f64, f64);

/// The most commonly used items of this crate
pub mod prelude {
    pub use crate::{
        BuildError, Cost, Graph, GraphBuilder, NodeID, Path, Point, SearchConfig, SearchOutcome,
        UnknownNodeError,
    };
}
