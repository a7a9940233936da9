//! Fixed vocabulary of the test runner contract: environment names, static flag values and optional tools.
//!
//! The runner is an external binary. Its flag names and the environment it reads are a compatibility surface, so
//! every literal the launcher hands it that is not derived from the checkout lives here.

/// Variable removed from the runner's environment.
///
/// An outer `make` exports its jobserver through it; run-make tests would otherwise try to join that jobserver.
pub const EXCLUDED_ENV_VAR: &str = "MAKEFLAGS";

/// Unlocks nightly-only compiler flags on the compilers the runner spawns.
pub const BOOTSTRAP_ENV: &str = "RUSTC_BOOTSTRAP";
/// Version of the launcher/runner handshake.
pub const PROTOCOL_VERSION_ENV: &str = "COMPILETEST_PROTOCOL_VERSION";
/// Identifies who started the runner.
pub const TOOL_NAME_ENV: &str = "COMPILETEST_TOOL_NAME";
/// Worker thread count for the runner.
pub const TEST_THREADS_ENV: &str = "RUST_TEST_THREADS";
/// Scratch directory for the runner.
pub const TEST_TMPDIR_ENV: &str = "RUST_TEST_TMPDIR";
/// Host triple of the compiler under test.
pub const HOST_TRIPLE_ENV: &str = "CFG_COMPILER_HOST_TRIPLE";
/// Directory holding the LLVM tools.
pub const LLVM_BIN_DIR_ENV: &str = "LLVM_BIN_DIR";
/// Version of the LLVM tools.
pub const LLVM_VERSION_ENV: &str = "LLVM_VERSION";

pub const BOOTSTRAP_VALUE: &str = "1";
pub const PROTOCOL_VERSION: &str = "1";
pub const TOOL_NAME: &str = "compiletest-launcher";

/// Runner mode; matches the suite.
pub const MODE: &str = "ui";
/// Flags added to every host and target compilation.
pub const RUSTCFLAGS: &str = "-Crpath";
pub const ADB_PATH: &str = "adb";
pub const ADB_TEST_DIR: &str = "/data/local/tmp/work";
pub const CHANNEL: &str = "nightly";
pub const GIT_REPOSITORY: &str = "rust-lang/rust";
pub const NIGHTLY_BRANCH: &str = "master";
pub const GIT_MERGE_COMMIT_EMAIL: &str = "bors@rust-lang.org";

/// Valueless flags appended after all flag/value pairs.
pub const TRAILING_SWITCHES: &[&str] = &["--json", "--verbose"];

/// Stable identifier for an optional helper tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalToolId {
    Python,
    NodeJs,
    Npm,
    Gdb,
}

/// Metadata for an optional helper tool the runner may use.
#[derive(Debug, Clone, Copy)]
pub struct OptionalToolInfo {
    pub id: OptionalToolId,
    /// Executable name searched on the lookup path.
    pub program: &'static str,
    /// Runner flag that receives the resolved path.
    pub flag: &'static str,
    /// What the runner uses the tool for, reported when it is missing.
    pub role: &'static str,
}

/// Optional tools, in the order their flags appear in the invocation.
pub const OPTIONAL_TOOLS: &[OptionalToolInfo] = &[
    OptionalToolInfo {
        id: OptionalToolId::Python,
        program: "python3",
        flag: "--python",
        role: "scripting interpreter",
    },
    OptionalToolInfo {
        id: OptionalToolId::NodeJs,
        program: "node",
        flag: "--nodejs",
        role: "script runtime engine",
    },
    OptionalToolInfo {
        id: OptionalToolId::Npm,
        program: "npm",
        flag: "--npm",
        role: "package manager",
    },
    OptionalToolInfo {
        id: OptionalToolId::Gdb,
        program: "gdb",
        flag: "--gdb",
        role: "debugger",
    },
];
