//! # Configuration
//!
//! Settings live in `config.json` inside the config directory: the `--config-dir` flag
//! (or `CLIENTBOOK_CONFIG_DIR`) when given, else the OS config dir for clientbook.
//! A missing file means defaults; a file that is present but malformed is an error.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `seed_sample_data` | `true` | Start each session with the sample clients |
//! | `confirm_delete` | `true` | Ask before deleting a client |
//! | `log_level` | unset | Log filter used when `RUST_LOG` and `--verbose` are absent |
//! | `line_width` | `100` | Width of the list view |
//!
//! Client records are never written here.

use crate::error::{ClientError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LINE_WIDTH: usize = 100;
const MIN_LINE_WIDTH: usize = 40;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientbookConfig {
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,

    #[serde(default = "default_true")]
    pub confirm_delete: bool,

    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_true() -> bool {
    true
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for ClientbookConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            confirm_delete: true,
            log_level: None,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl ClientbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ClientbookConfig = serde_json::from_str(&content)?;
        if config.line_width < MIN_LINE_WIDTH {
            return Err(ClientError::Config(format!(
                "line_width must be at least {} (got {})",
                MIN_LINE_WIDTH, config.line_width
            )));
        }
        Ok(config)
    }

    /// The OS-appropriate config directory, if the platform has one.
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "clientbook", "clientbook")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
