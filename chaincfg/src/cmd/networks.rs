//! `chaincfg networks` command — list the supported chains.

use crate::chain::REGISTRY;
use crate::error::Error;

/// Execute the `networks` command.
///
/// Prints one line per registered chain: symbolic name, numeric id, and the
/// environment variable its RPC endpoint is read from (or the gateway
/// fallback marker).
///
/// # Errors
///
/// Infallible in practice; returns `Result` for uniformity with the other
/// commands.
#[allow(clippy::print_stdout)]
pub fn run() -> Result<(), Error> {
    for info in REGISTRY {
        let endpoint = info.rpc_env.unwrap_or("(public gateway fallback)");
        println!("{:<18} {:>10}  {endpoint}", info.name, info.id);
    }
    Ok(())
}
