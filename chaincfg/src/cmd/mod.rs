//! CLI definitions and command implementations for chaincfg.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod init;
pub mod networks;
pub mod resolve;

/// chaincfg — multi-chain build configuration resolver.
#[derive(Debug, Parser)]
#[command(name = "chaincfg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a default TOML configuration file.
    Init {
        /// Output path for the configuration file.
        #[arg(short, long, default_value = "chaincfg.toml")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Resolve the build configuration and print it as JSON.
    Resolve {
        /// Path to the TOML configuration file.
        #[arg(short, long, env = "CHAINCFG_CONFIG", default_value = "chaincfg.toml")]
        config: PathBuf,

        /// Print the descriptor for a single chain instead of the full object.
        #[arg(short, long)]
        network: Option<String>,

        /// Emit compact JSON on one line.
        #[arg(long, default_value_t = false)]
        compact: bool,
    },

    /// List the supported chains and their numeric ids.
    Networks,
}
