//! Block-explorer verification credentials.
//!
//! Each supported explorer gets one API key entry, keyed by the identifier
//! the verification service expects (which does not always match the
//! symbolic chain name, e.g. `arbitrumOne`, `optimisticEthereum`). A network
//! and its testnet deliberately share one key variable.

use std::collections::BTreeMap;

use crate::env::EnvSnapshot;

/// Where a verification key comes from.
#[derive(Debug, Clone, Copy)]
enum KeySource {
    /// Read from an environment variable, empty string when unset.
    Env(&'static str),
    /// Fixed non-secret value for services that accept any key.
    Fixed(&'static str),
}

/// Explorer identifier → key source table.
const API_KEYS: &[(&str, KeySource)] = &[
    // Ethereum
    ("mainnet", KeySource::Env("ETHERSCAN_API_KEY")),
    ("sepolia", KeySource::Env("ETHERSCAN_API_KEY")),
    // Arbitrum
    ("arbitrumOne", KeySource::Env("ARBITRUM_API_KEY")),
    ("arbitrumSepolia", KeySource::Env("ARBITRUM_API_KEY")),
    // Avalanche — Routescan does not require a real key, any placeholder works.
    ("avalanche", KeySource::Env("SNOWTRACE_API_KEY")),
    ("avalancheFujiTestnet", KeySource::Env("SNOWTRACE_API_KEY")),
    ("routescan", KeySource::Fixed("routescan")),
    // BNB Smart Chain
    ("bsc", KeySource::Env("BSCSCAN_API_KEY")),
    // Polygon
    ("polygon", KeySource::Env("POLYGONSCAN_API_KEY")),
    ("polygonMumbai", KeySource::Env("POLYGONSCAN_API_KEY")),
    // Optimism
    ("optimisticEthereum", KeySource::Env("OPTIMISM_API_KEY")),
];

/// Build the explorer identifier → API key table from the environment.
#[must_use]
pub fn verification_table(env: &EnvSnapshot) -> BTreeMap<String, String> {
    API_KEYS
        .iter()
        .map(|&(name, source)| {
            let key = match source {
                KeySource::Env(var) => env.get_or_empty(var),
                KeySource::Fixed(value) => value,
            };
            (name.to_owned(), key.to_owned())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_entry_needs_no_environment() {
        let table = verification_table(&EnvSnapshot::default());
        assert_eq!(table.get("routescan").map(String::as_str), Some("routescan"));
    }

    #[test]
    fn unset_variables_default_to_empty_keys() {
        let table = verification_table(&EnvSnapshot::default());
        assert_eq!(table.get("mainnet").map(String::as_str), Some(""));
        assert_eq!(table.get("bsc").map(String::as_str), Some(""));
        assert_eq!(table.len(), API_KEYS.len());
    }

    #[test]
    fn related_networks_share_one_key_variable() {
        let env: EnvSnapshot = [
            ("ETHERSCAN_API_KEY", "etherscan-key"),
            ("SNOWTRACE_API_KEY", "snowtrace-key"),
            ("POLYGONSCAN_API_KEY", "polygonscan-key"),
        ]
        .into_iter()
        .collect();
        let table = verification_table(&env);
        assert_eq!(table["mainnet"], "etherscan-key");
        assert_eq!(table["sepolia"], "etherscan-key");
        assert_eq!(table["avalanche"], "snowtrace-key");
        assert_eq!(table["avalancheFujiTestnet"], "snowtrace-key");
        assert_eq!(table["polygon"], "polygonscan-key");
        assert_eq!(table["polygonMumbai"], "polygonscan-key");
    }
}
