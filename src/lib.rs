#![forbid(unsafe_code)]
//! Launch the prebuilt `compiletest` test runner against a local toolchain checkout.
//!
//! The launcher is a straight line: validate the environment ([`config`]), derive per-machine values by querying
//! `rustc` and FileCheck ([`probe`]), build the runner's argument list and environment ([`invocation`]), then run it
//! and exit with its status ([`exec`]). Fixed names, paths and the LLVM component catalog live in `launcher_core`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod invocation;
pub mod lookup;
pub mod probe;
pub mod version;

pub use config::LauncherConfig;
pub use error::{ConfigError, LaunchError, ProbeError};
pub use invocation::Invocation;
pub use probe::{ProcessProbe, ToolProbe, Toolchain};
