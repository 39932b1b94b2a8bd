//! Command dispatch logic for pathgrid
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use pathgrid_core::config::AppConfig;
use pathgrid_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = AppConfig::discover(&root)?;

    tracing::debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        None => commands::analyze::execute(cli, &config),

        Some(Commands::Show) => commands::show::execute(cli, &config),

        Some(Commands::Bfs { start: vertex }) => commands::bfs::execute(cli, &config, *vertex),

        Some(Commands::Distances { start: vertex }) => {
            commands::distances::execute(cli, &config, *vertex)
        }
    }
}
