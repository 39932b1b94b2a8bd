//! Graph algorithms over the adjacency matrix
//!
//! Both algorithms are read-only queries: they borrow the matrix and
//! return fresh result values, so repeated runs yield identical results.

pub mod bfs;
pub mod dijkstra;

pub use bfs::bfs;
pub use dijkstra::{shortest_paths, shortest_paths_scan};
