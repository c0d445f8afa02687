//! The closed set of supported chains.
//!
//! One `const` table is the single source of truth for a chain's symbolic
//! name, its EIP-155 numeric id, and the environment variable holding its
//! RPC endpoint. Adding a network is a data change: append a variant and a
//! matching [`REGISTRY`] row.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Symbolic identifier for a supported network.
///
/// Variant order must match [`REGISTRY`] row order; `registry_alignment`
/// below enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Chain {
    /// Ethereum mainnet.
    Mainnet,
    /// Ethereum Sepolia testnet.
    Sepolia,
    /// Arbitrum One.
    Arbitrum,
    /// Arbitrum Sepolia testnet.
    ArbitrumSepolia,
    /// Avalanche C-Chain.
    Avalanche,
    /// Avalanche Fuji testnet.
    Fuji,
    /// Avalanche C-Chain via the Routescan explorer. Alias of [`Chain::Avalanche`]:
    /// same network, same endpoint, different verification service.
    Routescan,
    /// BNB Smart Chain.
    Bsc,
    /// BNB Smart Chain testnet.
    BscTestnet,
    /// OP Mainnet.
    Optimism,
    /// OP Sepolia testnet.
    OptimismSepolia,
    /// Polygon PoS.
    Polygon,
    /// Polygon Mumbai testnet.
    Mumbai,
    /// Base.
    Base,
    /// Base Sepolia testnet.
    BaseSepolia,
}

/// One registry row.
#[derive(Debug, Clone, Copy)]
pub struct ChainInfo {
    /// The chain this row describes.
    pub chain: Chain,
    /// Symbolic name, used as the key in composed output and on the CLI.
    pub name: &'static str,
    /// EIP-155 numeric chain id. Duplicates are valid only for deliberate
    /// aliases of the same underlying network.
    pub id: u64,
    /// Environment variable holding the RPC endpoint URL. Aliased chains
    /// intentionally share a variable. `None` means the chain has no
    /// dedicated endpoint and falls back to the public gateway template.
    pub rpc_env: Option<&'static str>,
}

/// Authoritative chain table.
pub const REGISTRY: &[ChainInfo] = &[
    // Ethereum
    ChainInfo { chain: Chain::Mainnet, name: "mainnet", id: 1, rpc_env: Some("MAINNET_URL") },
    ChainInfo { chain: Chain::Sepolia, name: "sepolia", id: 11_155_111, rpc_env: Some("SEPOLIA_URL") },
    // Arbitrum
    ChainInfo { chain: Chain::Arbitrum, name: "arbitrum", id: 42_161, rpc_env: Some("ARBITRUM_URL") },
    ChainInfo { chain: Chain::ArbitrumSepolia, name: "arbitrumSepolia", id: 421_614, rpc_env: Some("ARBITRUM_T_URL") },
    // Avalanche — routescan shares the Avalanche endpoint variable.
    ChainInfo { chain: Chain::Avalanche, name: "avalanche", id: 43_114, rpc_env: Some("AVAX_URL") },
    ChainInfo { chain: Chain::Fuji, name: "fuji", id: 43_113, rpc_env: Some("FUJI_URL") },
    ChainInfo { chain: Chain::Routescan, name: "routescan", id: 43_114, rpc_env: Some("AVAX_URL") },
    // BNB Smart Chain
    ChainInfo { chain: Chain::Bsc, name: "bsc", id: 56, rpc_env: Some("BSC_URL") },
    ChainInfo { chain: Chain::BscTestnet, name: "bscTestnet", id: 97, rpc_env: None },
    // Optimism
    ChainInfo { chain: Chain::Optimism, name: "optimism", id: 10, rpc_env: None },
    ChainInfo { chain: Chain::OptimismSepolia, name: "optimismSepolia", id: 11_155_420, rpc_env: None },
    // Polygon
    ChainInfo { chain: Chain::Polygon, name: "polygon", id: 137, rpc_env: Some("POLYGON") },
    ChainInfo { chain: Chain::Mumbai, name: "mumbai", id: 80_001, rpc_env: Some("MUMBAI") },
    // Base
    ChainInfo { chain: Chain::Base, name: "base", id: 8453, rpc_env: None },
    ChainInfo { chain: Chain::BaseSepolia, name: "baseSepolia", id: 84_532, rpc_env: None },
];

impl Chain {
    /// Registry row for this chain.
    #[must_use]
    pub const fn info(self) -> &'static ChainInfo {
        &REGISTRY[self as usize]
    }

    /// EIP-155 numeric chain id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.info().id
    }

    /// Symbolic name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.info().name
    }

    /// Iterate over every supported chain.
    pub fn all() -> impl Iterator<Item = Self> {
        REGISTRY.iter().map(|info| info.chain)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .find(|info| info.name == s)
            .map(|info| info.chain)
            .ok_or_else(|| Error::UnknownChain(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_alignment() {
        for (index, info) in REGISTRY.iter().enumerate() {
            assert_eq!(info.chain as usize, index, "row {} out of order", info.name);
        }
    }

    #[test]
    fn chain_ids_match_public_registry() {
        assert_eq!(Chain::Mainnet.id(), 1);
        assert_eq!(Chain::Sepolia.id(), 11_155_111);
        assert_eq!(Chain::Arbitrum.id(), 42_161);
        assert_eq!(Chain::ArbitrumSepolia.id(), 421_614);
        assert_eq!(Chain::Avalanche.id(), 43_114);
        assert_eq!(Chain::Fuji.id(), 43_113);
        assert_eq!(Chain::Bsc.id(), 56);
        assert_eq!(Chain::BscTestnet.id(), 97);
        assert_eq!(Chain::Optimism.id(), 10);
        assert_eq!(Chain::OptimismSepolia.id(), 11_155_420);
        assert_eq!(Chain::Polygon.id(), 137);
        assert_eq!(Chain::Mumbai.id(), 80_001);
        assert_eq!(Chain::Base.id(), 8453);
        assert_eq!(Chain::BaseSepolia.id(), 84_532);
    }

    #[test]
    fn routescan_is_an_avalanche_alias() {
        assert_eq!(Chain::Routescan.id(), Chain::Avalanche.id());
        assert_eq!(
            Chain::Routescan.info().rpc_env,
            Chain::Avalanche.info().rpc_env
        );
    }

    #[test]
    fn parse_round_trips_every_name() {
        for chain in Chain::all() {
            let parsed: Chain = chain.name().parse().expect("registry name must parse");
            assert_eq!(parsed, chain);
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!(matches!(
            "dogechain".parse::<Chain>(),
            Err(Error::UnknownChain(name)) if name == "dogechain"
        ));
        // Lookups are exact; no case folding.
        assert!("Mainnet".parse::<Chain>().is_err());
    }
}
