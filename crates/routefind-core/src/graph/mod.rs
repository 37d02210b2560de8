//! Weighted graph model and path-finding
//!
//! - `model`: immutable adjacency built from a flat edge list
//! - `algos`: shortest-path engine over a [`Graph`]
//! - `types`: node, edge and result types shared by both

pub mod algos;
pub mod model;
pub mod types;

pub use algos::shortest_path;
pub use model::{Graph, MAX_NODE_COUNT};
pub use types::{EdgeSpec, Hop, Neighbor, NodeId, PathResult, Weight};
