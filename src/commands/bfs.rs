//! `pathgrid bfs` command - breadth-first traversal order

use crate::cli::Cli;
use crate::commands;
use pathgrid_core::config::AppConfig;
use pathgrid_core::error::Result;
use pathgrid_core::format::OutputFormat;
use pathgrid_core::graph;

/// Execute the bfs command
pub fn execute(cli: &Cli, config: &AppConfig, start: Option<usize>) -> Result<()> {
    let graph_store = commands::load_graph(cli, config)?;
    let format = commands::output_format(cli, config);
    let start = commands::resolve_start(start, format, &graph_store)?;

    let result = graph::bfs(&graph_store, start)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            println!("BFS traversal order: {}", format_order(&result.order));
        }
    }

    Ok(())
}

/// Render the visitation order as space-separated indices
pub fn format_order(order: &[usize]) -> String {
    order
        .iter()
        .map(|vertex| vertex.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
