//! Where things live inside a toolchain checkout.
//!
//! A checkout is the directory named by [`TOOLCHAIN_ROOT_VAR`]. Build artifacts sit under `build/<host triple>/`,
//! test sources under `tests/`. Every function here is a pure path join; nothing touches the filesystem.

use std::path::{Path, PathBuf};

/// Environment variable naming the toolchain checkout root.
pub const TOOLCHAIN_ROOT_VAR: &str = "RUST_REPO";

/// Environment variable holding the executable lookup path.
pub const LOOKUP_PATH_VAR: &str = "PATH";

/// Compiler resolved on the lookup path and queried for the host triple.
pub const COMPILER_NAME: &str = "rustc";

/// Flag asking the compiler for its verbose version report.
pub const COMPILER_VERBOSE_VERSION_FLAG: &str = "-vV";

/// Flag asking FileCheck for its version line.
pub const CHECKER_VERSION_FLAG: &str = "--version";

/// The test suite the launcher selects.
pub const SUITE: &str = "ui";

/// Stage whose sysroot the tests build against.
pub const STAGE: &str = "stage1";

/// The `build/<triple>` directory for a host.
pub fn build_dir(root: &Path, triple: &str) -> PathBuf {
    root.join("build").join(triple)
}

/// The prebuilt test runner binary.
pub fn test_runner_path(root: &Path, triple: &str) -> PathBuf {
    build_dir(root, triple).join("stage0-tools-bin").join("compiletest")
}

/// The FileCheck binary shipped with the CI LLVM download.
pub fn checker_path(root: &Path, triple: &str) -> PathBuf {
    build_dir(root, triple).join("ci-llvm").join("bin").join("FileCheck")
}

/// The sysroot the compiled tests link against.
pub fn sysroot(root: &Path, triple: &str) -> PathBuf {
    build_dir(root, triple).join(STAGE)
}

/// Libraries the compiler itself loads.
pub fn compile_lib_path(root: &Path, triple: &str) -> PathBuf {
    sysroot(root, triple).join("lib")
}

/// Libraries the compiled test programs load at runtime.
pub fn run_lib_path(root: &Path, triple: &str) -> PathBuf {
    compile_lib_path(root, triple).join("rustlib").join(triple).join("lib")
}

/// Source directory of the selected suite.
pub fn suite_source_root(root: &Path) -> PathBuf {
    root.join("tests").join(SUITE)
}

/// Output directory of the selected suite.
pub fn suite_build_root(root: &Path, triple: &str) -> PathBuf {
    build_dir(root, triple).join("test").join(SUITE)
}

/// The `minicore` auxiliary used by `no_core` tests.
pub fn minicore_path(root: &Path) -> PathBuf {
    root.join("tests").join("auxiliary").join("minicore.rs")
}

/// Scratch directory handed to the runner through `RUST_TEST_TMPDIR`.
pub fn test_tmpdir(root: &Path) -> PathBuf {
    root.join("build").join("tmp")
}

/// Stage identifier the runner uses to namespace its outputs.
pub fn stage_id(triple: &str) -> String {
    format!("{STAGE}-{triple}")
}
