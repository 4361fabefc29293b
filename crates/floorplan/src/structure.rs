//! Graph models consumed by the layout engines.
//!
//! - [`Graph`]: rooms with ordered outgoing adjacency edges, traversed by the
//!   grid engine.
//! - [`VectorGraph`]: a flat list of identifier pairs, consumed by the force
//!   engine.
//!
//! Both are built by callers (or by the plan parser) and only read by the
//! engines.

mod graph;
mod vector_graph;

pub use graph::{Edge, Graph, Vertex};
pub use vector_graph::{VectorEdge, VectorGraph};
