//! Graph representation and path-finding operations
//!
//! Provides the weighted adjacency matrix and the algorithms that query it:
//! - BFS traversal for visitation order
//! - Dijkstra shortest paths (heap and scan strategies)
//! - Matrix loader for the textual input format

pub mod algos;
pub mod load;
pub mod matrix;
pub mod types;

pub use algos::{bfs, shortest_paths, shortest_paths_scan};
pub use load::{parse_graph, read_graph};
pub use matrix::AdjacencyMatrix;
pub use types::{DistanceResult, TraversalResult, Weight, INFINITE};
