//! Error types for each launcher layer.
//!
//! - [`ConfigError`]: a precondition on the environment failed; nothing was spawned.
//! - [`ProbeError`]: a short-lived helper (`rustc -vV`, `FileCheck --version`) could not be queried.
//! - [`LaunchError`]: anything that stops the launch, wrapping the two above.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// A required piece of configuration is missing.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("RUST_REPO is unset or empty; point it at the root of a toolchain checkout")]
    #[diagnostic(
        code(launcher::config::missing_root),
        help("export RUST_REPO=/path/to/rust before running the launcher")
    )]
    MissingToolchainRoot,

    #[error("`rustc` was not found on PATH")]
    #[diagnostic(
        code(launcher::config::compiler_not_found),
        help("install a toolchain or add its bin directory to PATH")
    )]
    CompilerNotFound,
}

/// A helper tool could not be queried.
#[derive(Debug, Error, Diagnostic)]
pub enum ProbeError {
    #[error("failed to run {}: {source}", .program.display())]
    #[diagnostic(code(launcher::probe::spawn))]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} exited with {status}: {stderr}", .program.display())]
    #[diagnostic(code(launcher::probe::failed))]
    Failed {
        program: PathBuf,
        status: String,
        stderr: String,
    },
}

/// Errors that stop a launch.
#[derive(Debug, Error, Diagnostic)]
pub enum LaunchError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Probe(#[from] ProbeError),

    #[error("no `host:` line in the output of `{} -vV`", .compiler.display())]
    #[diagnostic(
        code(launcher::probe::host_triple),
        help("the compiler on PATH must support `-vV`")
    )]
    HostTriple { compiler: PathBuf },

    #[error("failed to start the test runner at {}: {source}", .program.display())]
    #[diagnostic(
        code(launcher::exec::spawn),
        help("build it first, e.g. `./x build src/tools/compiletest`")
    )]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to wait for the test runner: {0}")]
    #[diagnostic(code(launcher::exec::wait))]
    Wait(#[source] io::Error),
}

/// Result type for launcher operations.
pub type LaunchResult<T> = Result<T, LaunchError>;
