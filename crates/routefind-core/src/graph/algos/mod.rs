//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source, single-target least-cost route

pub mod dijkstra;

pub use dijkstra::shortest_path;
