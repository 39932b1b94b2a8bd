use std::collections::VecDeque;

use crate::error::{PathgridError, Result};
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::types::TraversalResult;

/// Breadth-first traversal from `start`.
///
/// Candidate neighbors are found by scanning the full matrix row in
/// ascending index order, so ties between same-level vertices always
/// resolve to the lower index. The traversal order carries every vertex
/// reachable from `start` exactly once; unreachable vertices are absent.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bfs(graph: &AdjacencyMatrix, start: usize) -> Result<TraversalResult> {
    let vertex_count = graph.vertex_count();
    if start >= vertex_count {
        return Err(PathgridError::InvalidVertex {
            vertex: start as i64,
            vertex_count,
        });
    }

    let mut visited = vec![false; vertex_count];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);

        for neighbor in 0..vertex_count {
            if graph.edge_weight(current, neighbor) > 0 && !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs_complete");
    Ok(TraversalResult { start, order })
}
