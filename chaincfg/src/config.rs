//! Configuration loading, composition, and default template generation.
//!
//! This module provides:
//!
//! - [`Config`] — The declarative `chaincfg.toml` contents.
//! - [`load_config`] — Reads and parses a TOML configuration file.
//! - [`compose`] — Resolves the full [`BuildConfig`] for the host build tool.
//! - [`generate_default_config`] — Produces a commented TOML template.
//!
//! # Configuration File Format
//!
//! ```toml
//! networks = ["mainnet", "sepolia"]
//!
//! [compiler]
//! version = "0.8.25"
//!
//! [paths]
//! sources = "./contracts"
//! ```
//!
//! The `[compiler]` and `[paths]` tables are opaque: they are forwarded to
//! the host tool unchanged and never interpreted here.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chain::{Chain, NetworkDescriptor, resolve, verification_table};
use crate::env::EnvSnapshot;
use crate::error::Error;

/// Declarative configuration, as parsed from `chaincfg.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Chains composed into the `networks` output, by symbolic name.
    #[serde(default = "default_networks")]
    pub networks: Vec<String>,
    /// Opaque compiler settings, forwarded unchanged.
    #[serde(default)]
    pub compiler: toml::Table,
    /// Opaque directory layout, forwarded unchanged.
    #[serde(default)]
    pub paths: toml::Table,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            networks: default_networks(),
            compiler: toml::Table::new(),
            paths: toml::Table::new(),
        }
    }
}

/// Chains wired into the composed output when the config file does not say
/// otherwise. A subset of the registry: the remaining chains stay resolvable
/// by name without being part of every build.
fn default_networks() -> Vec<String> {
    [
        Chain::Mainnet,
        Chain::Sepolia,
        Chain::Arbitrum,
        Chain::ArbitrumSepolia,
        Chain::Avalanche,
        Chain::Fuji,
        Chain::Routescan,
        Chain::Bsc,
        Chain::Optimism,
        Chain::Polygon,
        Chain::Mumbai,
    ]
    .iter()
    .map(|chain| chain.name().to_owned())
    .collect()
}

/// Fully resolved configuration object handed to the host build tool.
#[derive(Debug, Clone, Serialize)]
pub struct BuildConfig {
    /// Chain name → resolved network descriptor.
    pub networks: BTreeMap<String, NetworkDescriptor>,
    /// Explorer identifier → verification API key.
    pub verification: BTreeMap<String, String>,
    /// Opaque compiler settings, passed through from [`Config`].
    pub compiler: toml::Table,
    /// Opaque directory layout, passed through from [`Config`].
    pub paths: toml::Table,
}

/// Load configuration from a TOML file at the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be resolved, read, or parsed.
pub fn load_config(path: &Path) -> Result<Config, Error> {
    let config_path = path.canonicalize().map_err(|e| {
        Error::config_with(format!("failed to resolve config path '{}'", path.display()), e)
    })?;
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config_with(
            format!("failed to read config file '{}'", config_path.display()),
            e,
        )
    })?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        Error::config_with(
            format!("failed to parse TOML config '{}'", config_path.display()),
            e,
        )
    })?;
    Ok(config)
}

/// Compose the [`BuildConfig`] from the declarative config and one
/// environment snapshot.
///
/// Missing endpoint or signer variables degrade to empty values inside each
/// descriptor; an unknown chain name in `networks` is a defect in the config
/// and aborts composition.
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `config.networks` names a chain
/// outside the registry.
pub fn compose(config: &Config, env: &EnvSnapshot) -> Result<BuildConfig, Error> {
    let mut networks = BTreeMap::new();
    for name in &config.networks {
        let chain: Chain = name.parse()?;
        networks.insert(name.clone(), resolve(chain, env));
    }
    tracing::debug!(networks = networks.len(), "composed build configuration");

    Ok(BuildConfig {
        networks,
        verification: verification_table(env),
        compiler: config.compiler.clone(),
        paths: config.paths.clone(),
    })
}

/// Generate a default TOML configuration template.
#[must_use]
pub fn generate_default_config() -> String {
    String::from(
        r#"# chaincfg — multi-chain build configuration
#
# Network endpoints and credentials are read from the environment (a .env
# file is honoured; DOTENV_CONFIG_PATH overrides its location). This file
# holds the static declarative input forwarded to the host build tool.

# Chains composed into the `networks` output. Every entry must name a chain
# from the built-in registry; `chaincfg networks` lists them.
networks = [
  "mainnet",
  "sepolia",
  "arbitrum",
  "arbitrumSepolia",
  "avalanche",
  "fuji",
  "routescan",
  "bsc",
  "optimism",
  "polygon",
  "mumbai",
]

# Compiler settings, forwarded unchanged.
[compiler]
version = "0.8.25"

[compiler.settings.metadata]
bytecodeHash = "none"

[compiler.settings.optimizer]
enabled = true
runs = 999999

# Directory layout, forwarded unchanged.
[paths]
artifacts = "./artifacts"
cache = "./cache"
sources = "./contracts"
tests = "./test"
"#,
    )
}
