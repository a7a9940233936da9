//! Launcher version information.
//!
//! The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time, so `--version` and any
//! diagnostics agree on one string.

/// The launcher version string (for example, `0.1.0`).
pub const LAUNCHER_VERSION: &str = env!("CARGO_PKG_VERSION");
