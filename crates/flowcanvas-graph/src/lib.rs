//! Flowcanvas Graph
//!
//! This crate provides the validated workflow graph used by the editor.
//! A [`Graph`] is an insertion-ordered collection of nodes and edges whose
//! structural invariants hold after every mutation:
//! - Node identifiers are unique, edge identifiers are unique
//! - Every edge references two nodes present in the graph
//! - Removing a node removes every edge incident to it in the same call
//!
//! Graphs read from JSON go through [`GraphDef`] and are validated on the way
//! in, so a graph with dangling edges can never be constructed.

mod edge;
mod error;
mod graph;
mod node;
mod starter;
mod topology;

pub use edge::Edge;
pub use error::GraphError;
pub use graph::{Graph, GraphDef};
pub use node::{Node, Position};
pub use starter::starter_graph;
pub use topology::Topology;
