//! Command-line interface for Nova

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// Nova - dataset hosting client
#[derive(Parser)]
#[command(
    name = "nova",
    version,
    about = "Command-line client for the Nova dataset hosting service",
    long_about = "Nova creates, pushes, clones, searches, and lists datasets grouped in \
                  collections on a remote server, and manages global and per-directory \
                  configuration."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Get and set configuration values
    Config {
        /// Configuration key (section.key) to get/set
        key: Option<String>,

        /// Configuration value to set
        value: Option<String>,

        /// Operate on the global configuration file
        #[arg(short, long)]
        global: bool,

        /// List all configuration values
        #[arg(short, long)]
        list: bool,

        /// Unset a configuration value
        #[arg(long)]
        unset: bool,

        /// Show configuration file locations
        #[arg(long)]
        show_origin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a dataset on the remote service
    Create {
        /// Dataset identifier (collection/name)
        dataset: String,

        /// Dataset description
        #[arg(short, long)]
        description: Option<String>,

        /// Remote service base URL
        #[arg(long, env = "NOVA_REMOTE")]
        remote: Option<String>,

        /// Authentication token
        #[arg(long, env = "NOVA_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Link the current directory to a dataset
    Init {
        /// Dataset identifier (collection/name)
        dataset: String,

        /// Remote service base URL
        #[arg(long, env = "NOVA_REMOTE")]
        remote: Option<String>,

        /// Authentication token
        #[arg(long, env = "NOVA_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Pack the current directory and upload it
    Push {
        /// Dataset identifier (collection/name, default: from configuration)
        dataset: Option<String>,

        /// Remote service base URL
        #[arg(long, env = "NOVA_REMOTE")]
        remote: Option<String>,

        /// Authentication token
        #[arg(long, env = "NOVA_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Download a dataset snapshot into a directory
    Clone {
        /// Dataset identifier (collection/name)
        dataset: String,

        /// Destination directory (default: the dataset name)
        directory: Option<PathBuf>,

        /// Remote service base URL
        #[arg(long, env = "NOVA_REMOTE")]
        remote: Option<String>,

        /// Authentication token
        #[arg(long, env = "NOVA_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Search datasets across collections
    Search {
        /// Search query
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Remote service base URL
        #[arg(long, env = "NOVA_REMOTE")]
        remote: Option<String>,

        /// Authentication token
        #[arg(long, env = "NOVA_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// List your datasets
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Remote service base URL
        #[arg(long, env = "NOVA_REMOTE")]
        remote: Option<String>,

        /// Authentication token
        #[arg(long, env = "NOVA_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
