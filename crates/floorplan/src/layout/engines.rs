//! Layout engines
//!
//! - [`grid`]: breadth-first placement of rooms into fixed-size grid cells.
//! - [`force`]: force-directed simulation over an edge list.
//!
//! The engines are independent of each other. Each is configured once from
//! its section of [`LayoutConfig`](crate::config::LayoutConfig) and can be
//! reused for any number of graphs.

pub mod force;
pub mod grid;
