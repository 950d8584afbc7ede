//! An in-memory undirected graph and its traversal queries.
//!
//! Vertices are addressed by lightweight [graph::VertexId] handles, which are essentially `usize`.
//! Identity is by handle: two vertices holding equal values are still distinct vertices.
//!
//! ```
//! use undigraph::graph::*;
//! use undigraph::algorithm::*;
//!
//! let mut g = Graph::new();
//! let a = g.create_vertex("A");
//! let b = g.create_vertex("B");
//! let c = g.create_vertex("C");
//! g.add_vertices([a, b, c]).unwrap();
//! g.add_edge(&a, &b).unwrap();
//! g.add_edge(&b, &c).unwrap();
//!
//! assert_eq!(g.breadth_first_search(&a).unwrap(), vec![&"A", &"B", &"C"]);
//! assert_eq!(g.shortest_distance(&a, &c), Ok(2));
//! ```
pub mod algorithm;
pub mod graph;
