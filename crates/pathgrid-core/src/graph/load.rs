//! Adjacency-matrix file loader
//!
//! Input format: the first token is the vertex count, followed by
//! `count * count` integers in row-major order. Only positive values are
//! stored as edges; zero and negative cells mean "no edge". Tokens past
//! the declared matrix are ignored.

use std::fs;
use std::path::Path;

use crate::error::{PathgridError, Result};
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::types::Weight;

/// Read a graph from an adjacency-matrix file.
///
/// The file handle is scoped to this call; a failed open reports the
/// offending path.
#[tracing::instrument(fields(path = %path.display()))]
pub fn read_graph(path: &Path) -> Result<AdjacencyMatrix> {
    let content = fs::read_to_string(path).map_err(|source| PathgridError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    parse_graph(&content)
}

/// Parse a graph from adjacency-matrix text
pub fn parse_graph(input: &str) -> Result<AdjacencyMatrix> {
    let mut tokens = input.split_whitespace();

    let count_token = tokens.next().ok_or_else(|| PathgridError::InvalidMatrix {
        reason: "missing vertex count".to_string(),
    })?;
    let count: i64 = count_token
        .parse()
        .map_err(|_| PathgridError::InvalidMatrix {
            reason: format!("vertex count is not an integer: {}", count_token),
        })?;

    let mut graph = AdjacencyMatrix::with_vertices(count)?;
    let vertex_count = graph.vertex_count();

    for from in 0..vertex_count {
        for to in 0..vertex_count {
            let token = tokens.next().ok_or_else(|| PathgridError::InvalidMatrix {
                reason: format!(
                    "matrix truncated: expected {} weights, row {} ends early",
                    vertex_count * vertex_count,
                    from
                ),
            })?;
            let weight: Weight = token.parse().map_err(|_| PathgridError::InvalidMatrix {
                reason: format!("weight at ({}, {}) is not an integer: {}", from, to, token),
            })?;
            if weight > 0 {
                graph.set_edge(from, to, weight);
            }
        }
    }

    tracing::debug!(vertices = vertex_count, "graph_loaded");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = "4\n0 2 5 0\n0 0 1 0\n0 0 0 3\n0 0 0 0\n";

    #[test]
    fn test_parse_sample_graph() {
        let graph = parse_graph(SAMPLE).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_weight(0, 1), 2);
        assert_eq!(graph.edge_weight(0, 2), 5);
        assert_eq!(graph.edge_weight(1, 2), 1);
        assert_eq!(graph.edge_weight(2, 3), 3);
        assert_eq!(graph.edge_weight(3, 0), 0);
    }

    #[test]
    fn test_parse_ignores_zero_and_negative_weights() {
        let graph = parse_graph("2\n0 -4\n0 0\n").unwrap();
        assert_eq!(graph.edge_weight(0, 1), 0);
    }

    #[test]
    fn test_parse_single_vertex() {
        let graph = parse_graph("1\n0\n").unwrap();
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_parse_empty_input() {
        let err = parse_graph("").unwrap_err();
        assert!(matches!(err, PathgridError::InvalidMatrix { .. }));
    }

    #[test]
    fn test_parse_negative_count() {
        let err = parse_graph("-3\n").unwrap_err();
        assert!(matches!(err, PathgridError::InvalidSize { count: -3 }));
    }

    #[test]
    fn test_parse_non_numeric_count() {
        let err = parse_graph("four\n").unwrap_err();
        assert!(matches!(err, PathgridError::InvalidMatrix { .. }));
    }

    #[test]
    fn test_parse_truncated_matrix() {
        let err = parse_graph("3\n0 1 0\n0 0\n").unwrap_err();
        assert!(matches!(err, PathgridError::InvalidMatrix { .. }));
    }

    #[test]
    fn test_parse_non_numeric_weight() {
        let err = parse_graph("2\n0 x\n0 0\n").unwrap_err();
        assert!(matches!(err, PathgridError::InvalidMatrix { .. }));
    }

    #[test]
    fn test_parse_surplus_tokens_ignored() {
        let graph = parse_graph("1\n0\n99 99\n").unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_weight(0, 0), 0);
    }

    #[test]
    fn test_read_graph_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_graph(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, PathgridError::FileOpen { .. }));
    }

    #[test]
    fn test_read_graph_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, SAMPLE).unwrap();
        let graph = read_graph(&path).unwrap();
        assert_eq!(graph.vertex_count(), 4);
    }
}
