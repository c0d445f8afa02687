//! chaincfg — multi-chain build configuration resolver.
//!
//! Resolves, for a multi-chain smart-contract build environment, the network
//! connection parameters and block-explorer verification credentials needed
//! to compile, test, and deploy across many EVM networks from one
//! declarative source.
//!
//! ```sh
//! chaincfg init               # Generate default chaincfg.toml
//! chaincfg resolve            # Print the composed configuration as JSON
//! chaincfg networks           # List supported chains
//! ```

mod chain;
mod cmd;
mod config;
mod env;
mod error;

use clap::Parser;
use cmd::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[allow(clippy::print_stderr)]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { output, force } => cmd::init::run(&output, force),
        Commands::Resolve {
            config,
            network,
            compact,
        } => cmd::resolve::run(&config, network.as_deref(), compact),
        Commands::Networks => cmd::networks::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
