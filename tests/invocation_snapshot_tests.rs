//! Snapshot tests for the rendered runner invocation
//!
//! These pin the exact dry-run output for a fixed checkout, so any change to the flag order, the environment
//! additions or the quoting shows up as a snapshot diff.

use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use compiletest_launcher::probe::ResolvedTool;
use compiletest_launcher::{Invocation, LauncherConfig, Toolchain};
use launcher_core::runner::OptionalToolId;

fn fixed_checkout() -> (LauncherConfig, Toolchain) {
    let config = LauncherConfig {
        toolchain_root: PathBuf::from("/src/rust"),
        compiler: PathBuf::from("/usr/bin/rustc"),
        search_path: None,
    };
    let toolchain = Toolchain {
        host_triple: "x86_64-unknown-linux-gnu".to_string(),
        test_runner: PathBuf::from("/src/rust/build/x86_64-unknown-linux-gnu/stage0-tools-bin/compiletest"),
        checker: PathBuf::from("/src/rust/build/x86_64-unknown-linux-gnu/ci-llvm/bin/FileCheck"),
        llvm_version: "19.1.4".to_string(),
        optional_tools: vec![
            ResolvedTool {
                id: OptionalToolId::Python,
                path: PathBuf::from("/usr/bin/python3"),
            },
            ResolvedTool {
                id: OptionalToolId::NodeJs,
                path: PathBuf::new(),
            },
            ResolvedTool {
                id: OptionalToolId::Npm,
                path: PathBuf::new(),
            },
            ResolvedTool {
                id: OptionalToolId::Gdb,
                path: PathBuf::from("/usr/bin/gdb"),
            },
        ],
        test_threads: NonZeroUsize::new(8).unwrap(),
    };
    (config, toolchain)
}

#[test]
fn test_full_invocation_shell() {
    let (config, toolchain) = fixed_checkout();
    let passthrough = vec![OsString::from("--pass"), OsString::from("check"), OsString::from("ui/abi")];
    let invocation = Invocation::build(&config, &toolchain, &passthrough);
    insta::assert_snapshot!("full_invocation_shell", invocation.render_shell());
}

#[test]
fn test_quoting_in_shell_rendering() {
    let invocation = Invocation {
        program: PathBuf::from("/opt/my checkout/compiletest"),
        env_remove: vec!["MAKEFLAGS"],
        env: vec![("LLVM_VERSION", OsString::new())],
        args: vec![
            OsString::from("--cflags"),
            OsString::from("-O2 -g"),
            OsString::from("--target-linker"),
            OsString::new(),
            OsString::from("--verbose"),
            OsString::from("it's"),
        ],
        paired_len: 4,
    };
    insta::assert_snapshot!("quoting_in_shell_rendering", invocation.render_shell());
}
