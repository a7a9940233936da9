//! Launcher configuration, captured once from the environment and validated eagerly.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use launcher_core::layout::{COMPILER_NAME, LOOKUP_PATH_VAR, TOOLCHAIN_ROOT_VAR};

use crate::error::ConfigError;
use crate::lookup;

/// Validated launcher inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Root of the toolchain checkout (`RUST_REPO`).
    pub toolchain_root: PathBuf,
    /// Compiler resolved on the lookup path.
    pub compiler: PathBuf,
    /// Lookup path used for the compiler and the optional tools.
    pub search_path: Option<OsString>,
}

impl LauncherConfig {
    /// Read and validate the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var_os(TOOLCHAIN_ROOT_VAR), env::var_os(LOOKUP_PATH_VAR))
    }

    /// Validate the configuration from explicit variable values.
    ///
    /// Checks run in order and stop at the first failure:
    /// 1. the toolchain root must be set and non-empty;
    /// 2. the compiler must resolve on `search_path`.
    pub fn from_vars(toolchain_root: Option<OsString>, search_path: Option<OsString>) -> Result<Self, ConfigError> {
        let toolchain_root = match toolchain_root {
            Some(root) if !root.is_empty() => PathBuf::from(root),
            _ => return Err(ConfigError::MissingToolchainRoot),
        };

        let compiler = lookup::find_executable(COMPILER_NAME, search_path.as_deref())
            .ok_or(ConfigError::CompilerNotFound)?;

        tracing::debug!(
            root = %toolchain_root.display(),
            compiler = %compiler.display(),
            "launcher configuration validated"
        );

        Ok(Self {
            toolchain_root,
            compiler,
            search_path,
        })
    }

    /// The lookup path as a borrowed value.
    pub fn search_path(&self) -> Option<&OsStr> {
        self.search_path.as_deref()
    }
}
