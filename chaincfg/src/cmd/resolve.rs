//! `chaincfg resolve` command — print the resolved configuration as JSON.
//!
//! Loads `.env`, captures one environment snapshot, reads the declarative
//! TOML config, and emits the composed configuration object on stdout for
//! the host build tool to consume.

use std::path::Path;

use crate::chain::{Chain, resolve};
use crate::config::{compose, load_config};
use crate::env::{EnvSnapshot, load_dotenv};
use crate::error::Error;

/// Execute the `resolve` command.
///
/// With `--network`, prints the [`NetworkDescriptor`](crate::chain::NetworkDescriptor)
/// for that single chain; otherwise prints the full composed object
/// (`networks`, `verification`, `compiler`, `paths`).
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded, a chain name is
/// outside the registry, or JSON encoding fails.
#[allow(clippy::print_stdout)]
pub fn run(config_path: &Path, network: Option<&str>, compact: bool) -> Result<(), Error> {
    load_dotenv();
    let env = EnvSnapshot::from_process();

    let json = if let Some(name) = network {
        let chain: Chain = name.parse()?;
        encode(&resolve(chain, &env), compact)?
    } else {
        let config = load_config(config_path)?;
        encode(&compose(&config, &env)?, compact)?
    };

    println!("{json}");
    Ok(())
}

fn encode<T: serde::Serialize>(value: &T, compact: bool) -> Result<String, Error> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}
