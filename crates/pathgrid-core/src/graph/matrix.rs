use crate::error::{PathgridError, Result};
use crate::graph::types::Weight;

/// Weighted adjacency matrix over a fixed set of vertices.
///
/// Entry (i, j) is the weight of the directed edge i -> j, zero meaning
/// the edge is absent. Backed by a flat row-major buffer with row-stride
/// indexing. The store is immutable after load apart from [`set_edge`]
/// calls during construction.
///
/// [`set_edge`]: AdjacencyMatrix::set_edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    vertex_count: usize,
    weights: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Allocate a `count` x `count` matrix with every edge absent.
    ///
    /// Takes the raw signed integer from the input format so negative
    /// counts are rejected here, at construction, rather than at the
    /// parse site.
    pub fn with_vertices(count: i64) -> Result<Self> {
        let vertex_count =
            usize::try_from(count).map_err(|_| PathgridError::InvalidSize { count })?;
        let len = vertex_count
            .checked_mul(vertex_count)
            .ok_or(PathgridError::InvalidSize { count })?;
        Ok(AdjacencyMatrix {
            vertex_count,
            weights: vec![0; len],
        })
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Store the weight of the edge `from` -> `to`.
    ///
    /// Out-of-range endpoints are silently ignored and the matrix is left
    /// untouched. The weight sign is not validated.
    pub fn set_edge(&mut self, from: usize, to: usize, weight: Weight) {
        if from < self.vertex_count && to < self.vertex_count {
            self.weights[from * self.vertex_count + to] = weight;
        }
    }

    /// Stored weight of the edge `from` -> `to`, or zero when the edge is
    /// absent or either endpoint is out of range
    pub fn edge_weight(&self, from: usize, to: usize) -> Weight {
        if from < self.vertex_count && to < self.vertex_count {
            self.weights[from * self.vertex_count + to]
        } else {
            0
        }
    }

    /// Row slices in vertex order, for rendering
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        self.weights.chunks(self.vertex_count.max(1))
    }
}
