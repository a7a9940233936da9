//! Run the constructed invocation and propagate its exit status.
//!
//! The runner is long-running and streams its own output, so it inherits stdio. The launcher waits for it and
//! reports the child's exit status as its own.

use std::process::{ExitStatus, Stdio};

use crate::error::{LaunchError, LaunchResult};
use crate::invocation::Invocation;

/// Execute an invocation and return the exit code the launcher should exit with.
pub trait Executor {
    fn execute(&self, invocation: &Invocation) -> LaunchResult<i32>;
}

/// Spawns the runner as a child process with inherited stdio and waits for it.
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn execute(&self, invocation: &Invocation) -> LaunchResult<i32> {
        tracing::info!(
            program = %invocation.program.display(),
            args = invocation.args.len(),
            "starting test runner"
        );

        let mut child = invocation
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        let status = child.wait().map_err(LaunchError::Wait)?;
        let code = exit_code(status);
        tracing::info!(%status, code, "test runner finished");
        Ok(code)
    }
}

/// Map a child's exit status to the launcher's exit code.
///
/// A normal exit passes its code through. On Unix, death by signal maps to `128 + signal`, matching what a shell
/// reports. Anything else maps to 1.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
