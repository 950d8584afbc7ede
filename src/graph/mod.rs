//! Vertices, the undirected graph holding them, and the traits algorithms are written against.
//!
//! # Handles and registration
//!
//! Vertices live in an arena owned by [Graph] and are addressed by [VertexId].
//! Creating a vertex only hands out a handle; it takes [GrowableGraph::add_vertex]
//! to register it as a member of the graph.
//! Edges may connect vertices before either of them is registered.
//!
//! # Adjacency
//!
//! Each edge is stored as a pair of reciprocal adjacency entries.
//! Neighbours always iterate in ascending handle order, i.e., in vertex creation order,
//! so traversals are reproducible.

mod vertex;
pub use self::vertex::*;
mod error;
pub use self::error::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;

pub mod undirected;
pub use self::undirected::Graph;

#[cfg(test)]
mod ops;
#[cfg(test)]
pub(crate) use self::ops::*;
