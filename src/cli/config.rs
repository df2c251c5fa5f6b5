use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::options::options_model::CollectOptions;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "collect-values",
    version,
    about = "Snapshot form control values from a UI tree as JSON"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: collect-values.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect control values from a JSON or YAML element tree
    Collect {
        /// Element tree to read (.json, .yaml or .yml)
        #[arg(long)]
        document: String,

        /// Id of a container element; repeat for several (default: document root)
        #[arg(long = "container")]
        containers: Vec<String>,

        /// YAML file with per-call collect options
        #[arg(long)]
        options: Option<String>,

        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,

        /// Write the document back out after trimming, to this path
        #[arg(long)]
        write_document: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `collect-values.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Installed as the process-wide collect options
    #[serde(default)]
    pub defaults: CollectOptions,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("collect-values.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => match serde_yaml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = config_path, error = %e, "ignoring malformed config file");
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}
