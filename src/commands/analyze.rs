//! Default command - the full load/print/query cycle
//!
//! Prints the matrix, prompts for a start vertex, then reports the BFS
//! order and the distance table in one pass.

use crate::cli::Cli;
use crate::commands;
use pathgrid_core::config::AppConfig;
use pathgrid_core::error::Result;
use pathgrid_core::format::{render_matrix, OutputFormat};
use pathgrid_core::graph;

/// Execute the full analysis cycle
pub fn execute(cli: &Cli, config: &AppConfig) -> Result<()> {
    let graph_store = commands::load_graph(cli, config)?;
    let format = commands::output_format(cli, config);

    if format == OutputFormat::Human {
        println!("Graph representation:");
        println!("Adjacency Matrix:");
        print!("{}", render_matrix(&graph_store, config.cell_width));
        println!();
    }

    let start = commands::resolve_start(None, format, &graph_store)?;

    let traversal = graph::bfs(&graph_store, start)?;
    let distances = graph::shortest_paths(&graph_store, start)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "vertex_count": graph_store.vertex_count(),
                "start": start,
                "bfs_order": traversal.order,
                "distances": commands::distances::json_distances(&distances),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!(
                "BFS traversal order: {}",
                commands::bfs::format_order(&traversal.order)
            );
            commands::distances::print_human(&distances);
        }
    }

    Ok(())
}
