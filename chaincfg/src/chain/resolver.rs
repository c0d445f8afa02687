//! Network descriptor resolution.
//!
//! Produces, per chain, the connection parameters the host build tool needs:
//! numeric chain id, RPC endpoint URL, and signer account list. Missing
//! environment variables never fail resolution; they degrade to empty values
//! and the failure (if any) surfaces at first use, e.g. a deploy-time RPC
//! call. Partial environments therefore stay usable for unrelated chains.

use serde::{Deserialize, Serialize};

use crate::chain::Chain;
use crate::env::EnvSnapshot;

/// Environment variable holding the global signer key, shared by every chain.
pub const SIGNER_ENV: &str = "PRIVATE_KEY";

/// Resolved connection parameters for one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDescriptor {
    /// Signer accounts: the global signer key if configured, else empty.
    pub accounts: Vec<String>,
    /// EIP-155 numeric chain id.
    pub chain_id: u64,
    /// RPC endpoint URL. Empty when the chain's endpoint variable is unset.
    pub url: String,
}

/// Resolve the descriptor for `chain` from the given environment snapshot.
#[must_use]
pub fn resolve(chain: Chain, env: &EnvSnapshot) -> NetworkDescriptor {
    let info = chain.info();

    let url = match info.rpc_env {
        Some(var) => {
            let url = env.get_or_empty(var);
            if url.is_empty() {
                tracing::debug!(chain = info.name, var, "rpc endpoint variable unset");
            }
            url.to_owned()
        }
        // No dedicated endpoint variable: fall back to the public gateway
        // template. The trailing project-key segment is left empty, so the
        // URL is a placeholder until a real endpoint is configured.
        None => format!("https://{}.infura.io/v3/", info.name),
    };

    NetworkDescriptor {
        accounts: signer_accounts(env),
        chain_id: info.id,
        url,
    }
}

/// Global signer account list: `[PRIVATE_KEY]` when set and non-empty,
/// otherwise empty. Identical for every chain.
fn signer_accounts(env: &EnvSnapshot) -> Vec<String> {
    match env.get(SIGNER_ENV) {
        Some(key) if !key.is_empty() => vec![key.to_owned()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
        pairs.iter().copied().collect()
    }

    #[test]
    fn configured_chain_with_signer() {
        let env = env(&[
            ("SEPOLIA_URL", "https://rpc.example/sepolia"),
            ("PRIVATE_KEY", "0xabc"),
        ]);
        let descriptor = resolve(Chain::Sepolia, &env);
        assert_eq!(descriptor.chain_id, 11_155_111);
        assert_eq!(descriptor.url, "https://rpc.example/sepolia");
        assert_eq!(descriptor.accounts, vec!["0xabc".to_owned()]);
    }

    #[test]
    fn bare_environment_degrades_to_empty_values() {
        let descriptor = resolve(Chain::Bsc, &EnvSnapshot::default());
        assert_eq!(descriptor.chain_id, 56);
        assert_eq!(descriptor.url, "");
        assert!(descriptor.accounts.is_empty());
    }

    #[test]
    fn chain_id_always_matches_registry() {
        let env = EnvSnapshot::default();
        for chain in Chain::all() {
            assert_eq!(resolve(chain, &env).chain_id, chain.id());
        }
    }

    #[test]
    fn signer_list_is_global_and_at_most_one_entry() {
        let with_key = env(&[("PRIVATE_KEY", "0xdeadbeef")]);
        for chain in Chain::all() {
            assert_eq!(resolve(chain, &with_key).accounts, vec!["0xdeadbeef".to_owned()]);
        }
        let without_key = env(&[("PRIVATE_KEY", "")]);
        for chain in Chain::all() {
            assert!(resolve(chain, &without_key).accounts.is_empty());
        }
    }

    #[test]
    fn unmapped_chain_falls_back_to_gateway_template() {
        let descriptor = resolve(Chain::Optimism, &EnvSnapshot::default());
        assert_eq!(descriptor.url, "https://optimism.infura.io/v3/");
        // The template uses the symbolic name verbatim, camelCase included.
        let descriptor = resolve(Chain::OptimismSepolia, &EnvSnapshot::default());
        assert_eq!(descriptor.url, "https://optimismSepolia.infura.io/v3/");
    }

    #[test]
    fn aliased_chains_share_endpoint_and_id() {
        let env = env(&[("AVAX_URL", "https://rpc.example/avax")]);
        let avalanche = resolve(Chain::Avalanche, &env);
        let routescan = resolve(Chain::Routescan, &env);
        assert_eq!(avalanche.chain_id, routescan.chain_id);
        assert_eq!(avalanche.url, routescan.url);
    }

    #[test]
    fn descriptor_serialises_with_camel_case_keys() {
        let descriptor = resolve(Chain::Mainnet, &env(&[("MAINNET_URL", "https://rpc.example")]));
        let json = serde_json::to_value(&descriptor).expect("serialise");
        assert_eq!(json["chainId"], 1);
        assert_eq!(json["url"], "https://rpc.example");
        assert!(json["accounts"].as_array().expect("array").is_empty());
    }
}
