//! Output format handling for pathgrid
//!
//! Supports two output formats:
//! - human: readable console output
//! - json: stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PathgridError;
use crate::graph::matrix::AdjacencyMatrix;

/// Minimum matrix column width
pub const MIN_CELL_WIDTH: usize = 3;

/// Output format for pathgrid commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = PathgridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(PathgridError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render the adjacency matrix as a right-aligned fixed-width grid.
///
/// The column width is the widest cell in the matrix, floored at
/// `min_width`, so small graphs keep the familiar three-character layout
/// while larger weights stay aligned.
pub fn render_matrix(matrix: &AdjacencyMatrix, min_width: usize) -> String {
    let width = matrix
        .rows()
        .flatten()
        .map(|weight| weight.to_string().len())
        .max()
        .unwrap_or(0)
        .max(min_width);

    let mut out = String::new();
    for row in matrix.rows() {
        let cells: Vec<String> = row.iter().map(|w| format!("{:>1$}", w, width)).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}
