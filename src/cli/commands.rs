//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::ffi::OsString;
use std::io::Write;

use crate::config::LauncherConfig;
use crate::exec::Executor;
use crate::invocation::Invocation;
use crate::probe::{ToolProbe, Toolchain};

use super::{CliError, CliResult, ExitCode};

/// What to do with the constructed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Spawn the runner and exit with its status.
    Run,
    /// Print the shell form of the invocation.
    DryRun,
    /// Print the invocation as JSON.
    DryRunJson,
}

/// Derive the toolchain values, build the invocation, then run or print it.
///
/// `config` has already been validated, so by the time this runs both preconditions hold.
pub fn launch(
    config: &LauncherConfig,
    probe: &dyn ToolProbe,
    executor: &dyn Executor,
    mode: OutputMode,
    passthrough: &[OsString],
    out: &mut dyn Write,
) -> CliResult<ExitCode> {
    let toolchain = Toolchain::derive(config, probe)?;
    let invocation = Invocation::build(config, &toolchain, passthrough);

    match mode {
        OutputMode::Run => {
            let code = executor.execute(&invocation)?;
            Ok(ExitCode(code))
        }
        OutputMode::DryRun => {
            writeln!(out, "{}", invocation.render_shell())
                .map_err(|e| CliError::failure(format!("Error writing invocation: {}", e)))?;
            Ok(ExitCode::SUCCESS)
        }
        OutputMode::DryRunJson => {
            let json = serde_json::to_string_pretty(&invocation.to_json())
                .map_err(|e| CliError::failure(format!("Error serializing invocation: {}", e)))?;
            writeln!(out, "{}", json).map_err(|e| CliError::failure(format!("Error writing invocation: {}", e)))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
