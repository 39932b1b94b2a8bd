//! `pathgrid distances` command - shortest-path distance table

use crate::cli::Cli;
use crate::commands;
use pathgrid_core::config::AppConfig;
use pathgrid_core::error::Result;
use pathgrid_core::format::OutputFormat;
use pathgrid_core::graph::{self, DistanceResult, Weight, INFINITE};

/// Execute the distances command
pub fn execute(cli: &Cli, config: &AppConfig, start: Option<usize>) -> Result<()> {
    let graph_store = commands::load_graph(cli, config)?;
    let format = commands::output_format(cli, config);
    let start = commands::resolve_start(start, format, &graph_store)?;

    let result = graph::shortest_paths(&graph_store, start)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": result.start,
                "distances": json_distances(&result),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print_human(&result),
    }

    Ok(())
}

/// One line per vertex; the unreachable sentinel renders as INF
pub fn print_human(result: &DistanceResult) {
    println!("Shortest distances from vertex {}:", result.start);
    for (vertex, &distance) in result.distances.iter().enumerate() {
        if distance == INFINITE {
            println!("Vertex {}: INF", vertex);
        } else {
            println!("Vertex {}: {}", vertex, distance);
        }
    }
}

/// Distances with the sentinel mapped to null for stable JSON
pub fn json_distances(result: &DistanceResult) -> Vec<Option<Weight>> {
    result
        .distances
        .iter()
        .map(|&distance| (distance != INFINITE).then_some(distance))
        .collect()
}
