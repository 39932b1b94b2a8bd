//! Run configuration for pathgrid
//!
//! Configuration is read from an optional `pathgrid.toml` in the working
//! directory. Defaults: `input.txt` as the input file, three-character
//! matrix cells, human output.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{OutputFormat, MIN_CELL_WIDTH};

/// Config file name searched in the working directory
pub const CONFIG_FILE: &str = "pathgrid.toml";

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input file holding the adjacency matrix
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Minimum matrix column width
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            input: default_input(),
            cell_width: default_cell_width(),
            format: OutputFormat::default(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("input.txt")
}

fn default_cell_width() -> usize {
    MIN_CELL_WIDTH
}

impl AppConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `pathgrid.toml` from `root` when present, defaults otherwise
    pub fn discover(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
