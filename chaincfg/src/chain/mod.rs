//! Chain registry, network descriptor resolution, and verification credentials.
//!
//! - [`registry`] — The closed set of supported chains and their numeric ids.
//! - [`resolver`] — Per-chain [`NetworkDescriptor`] resolution from the environment.
//! - [`verify`] — Block-explorer API key table.

mod registry;
mod resolver;
mod verify;

pub use self::registry::*;
pub use self::resolver::*;
pub use self::verify::*;
