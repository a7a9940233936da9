//! Layering guardrails to keep `launcher_core` free of dependencies.
//!
//! The core crate holds names, paths and pure text extraction only. Process spawning, environment access and
//! rendering live in the launcher crate. This test scans `crates/launcher_core/Cargo.toml` and fails if its
//! `[dependencies]` table gains an entry, and checks that its sources never reach for process or environment APIs.

use std::fs;
use std::path::Path;

#[test]
fn core_has_no_dependencies() {
    let manifest = include_str!("../crates/launcher_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        panic!("launcher_core must not declare dependencies, found `{}`", line);
    }
}

#[test]
fn core_does_no_io() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("crates/launcher_core/src");
    for entry in fs::read_dir(&src).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        let text = fs::read_to_string(&path).unwrap();
        for forbidden in ["std::process", "std::env", "std::fs", "Command::new"] {
            assert!(
                !text.contains(forbidden),
                "{} uses `{}`; keep IO in the launcher crate",
                path.display(),
                forbidden
            );
        }
    }
}
