//! CLI commands for pathgrid

pub mod analyze;
pub mod bfs;
pub mod dispatch;
pub mod distances;
pub mod show;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::cli::Cli;
use pathgrid_core::config::AppConfig;
use pathgrid_core::error::{PathgridError, Result};
use pathgrid_core::format::OutputFormat;
use pathgrid_core::graph::{read_graph, AdjacencyMatrix};

/// Resolve the input path: CLI flag wins over config
pub fn input_path(cli: &Cli, config: &AppConfig) -> PathBuf {
    cli.input.clone().unwrap_or_else(|| config.input.clone())
}

/// Resolve the output format: CLI flag wins over config
pub fn output_format(cli: &Cli, config: &AppConfig) -> OutputFormat {
    cli.format.unwrap_or(config.format)
}

/// Load the adjacency matrix named by flags/config
pub fn load_graph(cli: &Cli, config: &AppConfig) -> Result<AdjacencyMatrix> {
    read_graph(&input_path(cli, config))
}

/// Resolve the start vertex: explicit argument, or one prompted line.
///
/// The prompt is written to stdout only in human format so JSON output
/// stays a single document. Exactly one line is read; there is no
/// re-prompt on bad input.
pub fn resolve_start(
    explicit: Option<usize>,
    format: OutputFormat,
    graph: &AdjacencyMatrix,
) -> Result<usize> {
    let vertex_count = graph.vertex_count();

    if let Some(start) = explicit {
        return check_start(start as i64, vertex_count);
    }

    if format == OutputFormat::Human {
        print!(
            "Enter start vertex (0-{}): ",
            vertex_count.saturating_sub(1)
        );
        io::stdout().flush()?;
    }

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let reply = line.trim();
    let vertex: i64 = reply.parse().map_err(|_| {
        PathgridError::UsageError(format!("start vertex is not an integer: {}", reply))
    })?;

    check_start(vertex, vertex_count)
}

fn check_start(vertex: i64, vertex_count: usize) -> Result<usize> {
    if vertex >= 0 && (vertex as usize) < vertex_count {
        Ok(vertex as usize)
    } else {
        Err(PathgridError::InvalidVertex {
            vertex,
            vertex_count,
        })
    }
}
