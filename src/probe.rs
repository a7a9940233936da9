//! Derive the per-machine values the runner needs by querying helper tools.
//!
//! ## ToolProbe Trait
//!
//! Helper invocations go through [`ToolProbe`] so the derivation can be exercised with captured sample outputs
//! instead of real binaries. [`ProcessProbe`] is the default and runs the helper synchronously.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread;

use launcher_core::extract;
use launcher_core::layout::{self, CHECKER_VERSION_FLAG, COMPILER_VERBOSE_VERSION_FLAG};
use launcher_core::runner::{OPTIONAL_TOOLS, OptionalToolId};

use crate::config::LauncherConfig;
use crate::error::{LaunchError, LaunchResult, ProbeError};
use crate::lookup;

/// Run a short-lived helper and capture its standard output.
pub trait ToolProbe {
    /// Run `program` with `args` and return its stdout (lossily decoded).
    fn capture(&self, program: &Path, args: &[&str]) -> Result<String, ProbeError>;
}

/// Runs helpers as child processes and waits for them.
pub struct ProcessProbe;

impl ToolProbe for ProcessProbe {
    fn capture(&self, program: &Path, args: &[&str]) -> Result<String, ProbeError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| ProbeError::Spawn {
                program: program.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProbeError::Failed {
                program: program.to_path_buf(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// An optional tool and where it was found (empty when absent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTool {
    pub id: OptionalToolId,
    pub path: PathBuf,
}

/// Everything derived from the machine and the checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Host triple reported by the compiler.
    pub host_triple: String,
    /// The prebuilt runner binary.
    pub test_runner: PathBuf,
    /// FileCheck from the checkout's LLVM.
    pub checker: PathBuf,
    /// FileCheck's LLVM version; empty if it could not be read.
    pub llvm_version: String,
    /// Optional tools, in invocation order.
    pub optional_tools: Vec<ResolvedTool>,
    /// Worker threads for the runner.
    pub test_threads: NonZeroUsize,
}

impl Toolchain {
    /// Query the helpers and compose every derived value.
    ///
    /// ## Errors
    ///
    /// - [`LaunchError::Probe`] if `rustc -vV` cannot run.
    /// - [`LaunchError::HostTriple`] if the compiler's report has no `host:` line.
    ///
    /// A FileCheck that cannot run or reports no version, and missing optional tools, are not errors.
    #[tracing::instrument(skip_all, fields(root = %config.toolchain_root.display()))]
    pub fn derive(config: &LauncherConfig, probe: &dyn ToolProbe) -> LaunchResult<Self> {
        let report = probe.capture(&config.compiler, &[COMPILER_VERBOSE_VERSION_FLAG])?;
        let host_triple = extract::host_triple(&report)
            .ok_or_else(|| LaunchError::HostTriple {
                compiler: config.compiler.clone(),
            })?
            .to_string();
        tracing::debug!(%host_triple, "derived host triple");

        let root = &config.toolchain_root;
        let test_runner = layout::test_runner_path(root, &host_triple);
        let checker = layout::checker_path(root, &host_triple);

        // The checker is not validated up front; a broken one leaves the version empty and the runner still starts.
        let llvm_version = match probe.capture(&checker, &[CHECKER_VERSION_FLAG]) {
            Ok(report) => match extract::llvm_version(&report) {
                Some(version) => version.to_string(),
                None => {
                    tracing::warn!(checker = %checker.display(), "FileCheck did not report an LLVM version");
                    String::new()
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "could not query FileCheck; passing an empty LLVM version");
                String::new()
            }
        };
        tracing::debug!(%llvm_version, "derived LLVM version");

        let optional_tools = OPTIONAL_TOOLS
            .iter()
            .map(|info| {
                let path = lookup::find_executable(info.program, config.search_path()).unwrap_or_else(|| {
                    tracing::debug!(
                        tool = info.program,
                        role = info.role,
                        flag = info.flag,
                        "optional tool not found on PATH"
                    );
                    PathBuf::new()
                });
                ResolvedTool { id: info.id, path }
            })
            .collect();

        let test_threads = available_threads();
        tracing::debug!(test_threads = test_threads.get(), "derived test thread count");

        Ok(Self {
            host_triple,
            test_runner,
            checker,
            llvm_version,
            optional_tools,
            test_threads,
        })
    }

    /// Directory containing FileCheck and the other LLVM tools.
    pub fn llvm_bin_dir(&self) -> &Path {
        self.checker.parent().unwrap_or(Path::new(""))
    }

    /// Resolved path of an optional tool (empty when absent).
    pub fn optional_tool(&self, id: OptionalToolId) -> &Path {
        self.optional_tools
            .iter()
            .find(|tool| tool.id == id)
            .map(|tool| tool.path.as_path())
            .unwrap_or(Path::new(""))
    }
}

/// Number of processing units available to this process, at least one.
pub fn available_threads() -> NonZeroUsize {
    thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::ffi::OsString;
    use std::fs;
    use std::io;

    const RUSTC_VV: &str = "rustc 1.84.0-nightly (b19329a37 2024-11-21)\nbinary: rustc\nhost: x86_64-unknown-linux-gnu\nrelease: 1.84.0-nightly\n";
    const FILECHECK_VERSION: &str = "LLVM (http://llvm.org/):\n  LLVM version 19.1.4\n  Optimized build.\n";

    /// Replays captured outputs keyed by program file name, recording every call.
    struct CannedProbe {
        outputs: HashMap<&'static str, &'static str>,
        calls: RefCell<Vec<(PathBuf, Vec<String>)>>,
    }

    impl CannedProbe {
        fn new(outputs: &[(&'static str, &'static str)]) -> Self {
            Self {
                outputs: outputs.iter().copied().collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ToolProbe for CannedProbe {
        fn capture(&self, program: &Path, args: &[&str]) -> Result<String, ProbeError> {
            self.calls
                .borrow_mut()
                .push((program.to_path_buf(), args.iter().map(|a| a.to_string()).collect()));
            let name = program.file_stem().and_then(|n| n.to_str()).unwrap_or("");
            match self.outputs.get(name) {
                Some(out) => Ok(out.to_string()),
                None => Err(ProbeError::Spawn {
                    program: program.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
                }),
            }
        }
    }

    fn config() -> (tempfile::TempDir, LauncherConfig) {
        let dir = tempfile::tempdir().unwrap();
        let rustc = dir.path().join(format!("rustc{}", std::env::consts::EXE_SUFFIX));
        fs::write(&rustc, "").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&rustc, fs::Permissions::from_mode(0o755)).unwrap();
        }
        let path: OsString = std::env::join_paths([dir.path()]).unwrap();
        let config = LauncherConfig::from_vars(Some("/src/rust".into()), Some(path)).unwrap();
        (dir, config)
    }

    #[test]
    fn test_derive_from_captured_outputs() {
        let (_dir, config) = config();
        let probe = CannedProbe::new(&[("rustc", RUSTC_VV), ("FileCheck", FILECHECK_VERSION)]);

        let toolchain = Toolchain::derive(&config, &probe).unwrap();

        assert_eq!(toolchain.host_triple, "x86_64-unknown-linux-gnu");
        assert_eq!(
            toolchain.test_runner,
            PathBuf::from("/src/rust/build/x86_64-unknown-linux-gnu/stage0-tools-bin/compiletest")
        );
        assert_eq!(
            toolchain.checker,
            PathBuf::from("/src/rust/build/x86_64-unknown-linux-gnu/ci-llvm/bin/FileCheck")
        );
        assert_eq!(
            toolchain.llvm_bin_dir(),
            Path::new("/src/rust/build/x86_64-unknown-linux-gnu/ci-llvm/bin")
        );
        assert_eq!(toolchain.llvm_version, "19.1.4");
        assert!(toolchain.test_threads.get() >= 1);
    }

    #[test]
    fn test_derive_queries_helpers_in_order() {
        let (_dir, config) = config();
        let probe = CannedProbe::new(&[("rustc", RUSTC_VV), ("FileCheck", FILECHECK_VERSION)]);

        Toolchain::derive(&config, &probe).unwrap();

        let calls = probe.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, config.compiler);
        assert_eq!(calls[0].1, vec!["-vV".to_string()]);
        assert!(calls[1].0.ends_with("ci-llvm/bin/FileCheck"));
        assert_eq!(calls[1].1, vec!["--version".to_string()]);
    }

    #[test]
    fn test_missing_optional_tools_resolve_empty() {
        let (_dir, config) = config();
        let probe = CannedProbe::new(&[("rustc", RUSTC_VV), ("FileCheck", FILECHECK_VERSION)]);

        let toolchain = Toolchain::derive(&config, &probe).unwrap();

        assert_eq!(toolchain.optional_tools.len(), OPTIONAL_TOOLS.len());
        for info in OPTIONAL_TOOLS {
            assert_eq!(toolchain.optional_tool(info.id), Path::new(""));
        }
    }

    #[test]
    fn test_missing_host_line_is_an_error() {
        let (_dir, config) = config();
        let probe = CannedProbe::new(&[("rustc", "rustc 1.84.0\n"), ("FileCheck", FILECHECK_VERSION)]);

        let err = Toolchain::derive(&config, &probe).unwrap_err();
        assert!(matches!(err, LaunchError::HostTriple { .. }));
    }

    #[test]
    fn test_missing_checker_degrades_to_empty_version() {
        let (_dir, config) = config();
        let probe = CannedProbe::new(&[("rustc", RUSTC_VV)]);

        let toolchain = Toolchain::derive(&config, &probe).unwrap();
        assert_eq!(toolchain.host_triple, "x86_64-unknown-linux-gnu");
        assert_eq!(toolchain.llvm_version, "");
        assert!(toolchain.checker.ends_with("ci-llvm/bin/FileCheck"));
        assert_eq!(probe.calls.borrow().len(), 2);
    }

    #[test]
    fn test_unparseable_checker_version_degrades_to_empty() {
        let (_dir, config) = config();
        let probe = CannedProbe::new(&[("rustc", RUSTC_VV), ("FileCheck", "FileCheck (custom build)\n")]);

        let toolchain = Toolchain::derive(&config, &probe).unwrap();
        assert_eq!(toolchain.llvm_version, "");
    }

    #[test]
    fn test_process_probe_reports_spawn_failure() {
        let err = ProcessProbe
            .capture(Path::new("/nonexistent/definitely/not/here"), &["--version"])
            .unwrap_err();
        assert!(matches!(err, ProbeError::Spawn { .. }));
    }
}
