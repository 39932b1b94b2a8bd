use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{PathgridError, Result};
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::types::{DistanceResult, Weight, INFINITE};

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    distance: Weight,
    vertex: usize,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Single-source shortest-path distances from `start`, priority-queue
/// strategy.
///
/// Only positive weights are traversed: a zero cell means "no edge", so a
/// zero-weight edge is never relaxed. Negative weights are unsupported;
/// with them present the two strategies in this module may disagree.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn shortest_paths(graph: &AdjacencyMatrix, start: usize) -> Result<DistanceResult> {
    let vertex_count = graph.vertex_count();
    if start >= vertex_count {
        return Err(PathgridError::InvalidVertex {
            vertex: start as i64,
            vertex_count,
        });
    }

    let mut distances = vec![INFINITE; vertex_count];
    let mut heap = BinaryHeap::new();

    distances[start] = 0;
    heap.push(Reverse(HeapEntry {
        distance: 0,
        vertex: start,
    }));

    while let Some(Reverse(HeapEntry { distance, vertex })) = heap.pop() {
        // Stale entry: a shorter path to this vertex was already settled
        if distance > distances[vertex] {
            continue;
        }

        for next in 0..vertex_count {
            let weight = graph.edge_weight(vertex, next);
            if weight <= 0 {
                continue;
            }
            let candidate = distance.saturating_add(weight);
            if candidate < distances[next] {
                distances[next] = candidate;
                heap.push(Reverse(HeapEntry {
                    distance: candidate,
                    vertex: next,
                }));
            }
        }
    }

    Ok(DistanceResult { start, distances })
}

/// Single-source shortest-path distances from `start`, O(V^2) selection
/// scan.
///
/// Repeatedly settles the unvisited vertex with the smallest finite
/// tentative distance and relaxes its outgoing row, stopping early once no
/// reachable vertex is left. Produces the same distances as
/// [`shortest_paths`] for graphs without negative weights.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn shortest_paths_scan(graph: &AdjacencyMatrix, start: usize) -> Result<DistanceResult> {
    let vertex_count = graph.vertex_count();
    if start >= vertex_count {
        return Err(PathgridError::InvalidVertex {
            vertex: start as i64,
            vertex_count,
        });
    }

    let mut distances = vec![INFINITE; vertex_count];
    let mut visited = vec![false; vertex_count];
    distances[start] = 0;

    for _ in 0..vertex_count {
        let Some(current) = nearest_unvisited(&distances, &visited) else {
            break;
        };
        visited[current] = true;

        for next in 0..vertex_count {
            let weight = graph.edge_weight(current, next);
            if weight > 0 {
                let candidate = distances[current].saturating_add(weight);
                if candidate < distances[next] {
                    distances[next] = candidate;
                }
            }
        }
    }

    Ok(DistanceResult { start, distances })
}

/// Unvisited vertex with the smallest finite tentative distance
fn nearest_unvisited(distances: &[Weight], visited: &[bool]) -> Option<usize> {
    let mut best = None;
    let mut best_distance = INFINITE;
    for (vertex, &distance) in distances.iter().enumerate() {
        if !visited[vertex] && distance < best_distance {
            best_distance = distance;
            best = Some(vertex);
        }
    }
    best
}
