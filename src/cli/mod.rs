//! CLI module for the compiletest launcher
//!
//! ## Usage
//!
//! ```text
//! compiletest-launcher [--dry-run | --dry-run-json] [RUNNER_ARGS]...
//! ```
//!
//! Everything after the launcher's own flags is forwarded to the runner verbatim, after the constructed flags.
//! Use `--` to forward an argument that would otherwise be read as a launcher flag.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::ffi::OsString;
use std::fmt;
use std::io::{self, ErrorKind};
use std::process;

use clap::Parser;
use miette::Diagnostic;

use crate::config::LauncherConfig;
use crate::error::{ConfigError, LaunchError};
use crate::exec::ProcessExecutor;
use crate::probe::ProcessProbe;
use crate::version::LAUNCHER_VERSION;

use self::commands::OutputMode;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// The runner exists but could not be executed.
    pub const NOT_EXECUTABLE: ExitCode = ExitCode(126);
    /// The runner does not exist.
    pub const NOT_FOUND: ExitCode = ExitCode(127);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<LaunchError> for CliError {
    fn from(err: LaunchError) -> Self {
        // Mirror the codes a shell uses when it cannot run a command.
        let exit_code = match &err {
            LaunchError::Spawn { source, .. } if source.kind() == ErrorKind::NotFound => ExitCode::NOT_FOUND,
            LaunchError::Spawn { source, .. } if source.kind() == ErrorKind::PermissionDenied => {
                ExitCode::NOT_EXECUTABLE
            }
            _ => ExitCode::FAILURE,
        };
        Self::new(render_diagnostic(&err), exit_code)
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::from(LaunchError::from(err))
    }
}

/// Render an error with its diagnostic code and help text, one line each.
fn render_diagnostic(err: &LaunchError) -> String {
    let mut message = match err.code() {
        Some(code) => format!("error[{}]: {}", code, err),
        None => format!("error: {}", err),
    };
    if let Some(help) = err.help() {
        message.push_str(&format!("\n  help: {}", help));
    }
    message
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Launch the compiletest test runner against the toolchain checkout named by RUST_REPO
#[derive(Parser, Debug)]
#[command(name = "compiletest-launcher")]
#[command(version = LAUNCHER_VERSION)]
#[command(about = "Launch the compiletest test runner against a toolchain checkout", long_about = None)]
pub struct Cli {
    /// Print the runner command line instead of running it
    #[arg(long, conflicts_with = "dry_run_json")]
    pub dry_run: bool,

    /// Print the runner invocation as JSON instead of running it
    #[arg(long)]
    pub dry_run_json: bool,

    /// Arguments forwarded verbatim to the runner, after the constructed flags
    #[arg(value_name = "RUNNER_ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub passthrough: Vec<OsString>,
}

impl Cli {
    /// The output mode selected by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.dry_run_json {
            OutputMode::DryRunJson
        } else if self.dry_run {
            OutputMode::DryRun
        } else {
            OutputMode::Run
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => process::exit(exit_code.0),
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Validate the environment, then launch.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = LauncherConfig::from_env()?;
    let mode = cli.output_mode();
    let mut stdout = io::stdout().lock();
    commands::launch(
        &config,
        &ProcessProbe,
        &ProcessExecutor,
        mode,
        &cli.passthrough,
        &mut stdout,
    )
}

// ============================================================================
// Tests
// ============================================================================
