//! Process environment access.
//!
//! All secrets (RPC endpoints, signer key, explorer API keys) reach the
//! resolver through an [`EnvSnapshot`]: an immutable key-value map captured
//! once at startup. Resolution is then a pure function of the snapshot, so
//! tests build snapshots directly instead of mutating process state.

use std::collections::BTreeMap;

/// Immutable snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot(BTreeMap<String, String>);

impl EnvSnapshot {
    /// Capture the current process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self(std::env::vars().collect())
    }

    /// Look up a variable, `None` if unset.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Look up a variable, empty string if unset.
    #[must_use]
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Load `.env` into the process environment before the snapshot is captured.
///
/// `DOTENV_CONFIG_PATH` overrides the file location; a missing or malformed
/// file at the default location is ignored, while a failing explicit path is
/// surfaced as a warning. Parsing itself is entirely dotenvy's concern.
pub fn load_dotenv() {
    if let Ok(path) = std::env::var("DOTENV_CONFIG_PATH") {
        if let Err(e) = dotenvy::from_path(&path) {
            tracing::warn!("could not load env file '{path}': {e}");
        }
    } else {
        dotenvy::dotenv().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_lookup() {
        let env: EnvSnapshot = [("MAINNET_URL", "https://rpc.example")].into_iter().collect();
        assert_eq!(env.get("MAINNET_URL"), Some("https://rpc.example"));
        assert_eq!(env.get("SEPOLIA_URL"), None);
        assert_eq!(env.get_or_empty("SEPOLIA_URL"), "");
    }

    #[test]
    fn empty_snapshot() {
        let env = EnvSnapshot::default();
        assert_eq!(env.get("PRIVATE_KEY"), None);
    }
}
