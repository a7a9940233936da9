//! Provide the pure pieces of the compiletest launcher: checkout layout, the runner's fixed vocabulary, the LLVM
//! component catalog, and text extraction for helper tool output.
//!
//! This crate is intentionally small and dependency-free so the launcher binary and its tests agree on one set of
//! names and paths.
//!
//! ## Notes
//!
//! - **No IO**: nothing here spawns processes, reads the environment, or touches the filesystem.
//! - Values that depend on a particular machine (resolved tool paths, thread counts) belong to the launcher crate.

pub mod components;
pub mod extract;
pub mod layout;
pub mod runner;
