//! Resolve bare executable names against a lookup path, the way a shell does.
//!
//! The search path is passed in explicitly (it is captured once into [`crate::config::LauncherConfig`]), so these
//! functions never read the process environment themselves.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Find the first executable named `name` in `search_path`.
///
/// Entries are tried in order; empty entries are skipped. The platform's executable suffix (`.exe` on Windows) is
/// appended to `name`. A candidate must be a regular file and, on Unix, carry at least one execute bit.
pub fn find_executable(name: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    let search_path = search_path?;
    let file_name = executable_file_name(name);
    env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(&file_name))
        .find(|candidate| is_executable(candidate))
}

/// `name` with the platform's executable suffix.
fn executable_file_name(name: &str) -> String {
    format!("{}{}", name, env::consts::EXE_SUFFIX)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false)
}
