//! `pathgrid show` command - print the adjacency matrix

use crate::cli::Cli;
use crate::commands;
use pathgrid_core::config::AppConfig;
use pathgrid_core::error::Result;
use pathgrid_core::format::{render_matrix, OutputFormat};

/// Execute the show command
pub fn execute(cli: &Cli, config: &AppConfig) -> Result<()> {
    let graph = commands::load_graph(cli, config)?;

    match commands::output_format(cli, config) {
        OutputFormat::Json => {
            let rows: Vec<&[_]> = graph.rows().collect();
            let output = serde_json::json!({
                "vertex_count": graph.vertex_count(),
                "matrix": rows,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Adjacency Matrix:");
            print!("{}", render_matrix(&graph, config.cell_width));
        }
    }

    Ok(())
}
