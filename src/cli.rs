//! CLI argument parsing for pathgrid
//!
//! Uses clap for argument parsing.
//! Global flags: --input, --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use pathgrid_core::format::OutputFormat;

/// Pathgrid - adjacency-matrix graph analyzer
///
/// Without a subcommand, runs the full cycle: print the matrix, prompt for
/// a start vertex, then report the BFS order and shortest distances.
#[derive(Parser, Debug)]
#[command(name = "pathgrid")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Adjacency-matrix input file (defaults to input.txt, or pathgrid.toml)
    #[arg(long, short, global = true, env = "PATHGRID_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the adjacency matrix
    Show,

    /// Breadth-first traversal order from a start vertex
    Bfs {
        /// Start vertex (prompted for when omitted)
        start: Option<usize>,
    },

    /// Shortest-path distances from a start vertex
    Distances {
        /// Start vertex (prompted for when omitted)
        start: Option<usize>,
    },
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
