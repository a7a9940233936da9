//! Construct the test runner invocation.
//!
//! [`Invocation::build`] is a pure function of the configuration, the derived toolchain values, and the passthrough
//! arguments. The same inputs always produce the same program, environment and argument list, in the same order,
//! so a dry run shows exactly what a real run would execute.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::Command;

use launcher_core::components::llvm_components_arg;
use launcher_core::layout;
use launcher_core::runner::{self, OPTIONAL_TOOLS};
use serde_json::{Value, json};

use crate::config::LauncherConfig;
use crate::probe::Toolchain;

/// A fully specified runner invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The runner binary.
    pub program: PathBuf,
    /// Variables removed from the inherited environment.
    pub env_remove: Vec<&'static str>,
    /// Variables added to the inherited environment, in a fixed order.
    pub env: Vec<(&'static str, OsString)>,
    /// Constructed flags followed by the passthrough arguments.
    pub args: Vec<OsString>,
    /// Length of the leading run of `args` made of flag/value pairs.
    pub paired_len: usize,
}

impl Invocation {
    /// Build the invocation.
    ///
    /// `passthrough` is appended after every constructed argument, unmodified and in order.
    pub fn build(config: &LauncherConfig, toolchain: &Toolchain, passthrough: &[OsString]) -> Self {
        let root = config.toolchain_root.as_path();
        let triple = toolchain.host_triple.as_str();

        let env = vec![
            (runner::BOOTSTRAP_ENV, OsString::from(runner::BOOTSTRAP_VALUE)),
            (runner::PROTOCOL_VERSION_ENV, OsString::from(runner::PROTOCOL_VERSION)),
            (runner::TOOL_NAME_ENV, OsString::from(runner::TOOL_NAME)),
            (runner::TEST_THREADS_ENV, OsString::from(toolchain.test_threads.to_string())),
            (runner::TEST_TMPDIR_ENV, layout::test_tmpdir(root).into_os_string()),
            (runner::HOST_TRIPLE_ENV, OsString::from(triple)),
            (runner::LLVM_BIN_DIR_ENV, toolchain.llvm_bin_dir().as_os_str().to_os_string()),
            (runner::LLVM_VERSION_ENV, OsString::from(&toolchain.llvm_version)),
        ];

        let mut args = ArgList::default();
        args.pair("--compile-lib-path", layout::compile_lib_path(root, triple));
        args.pair("--run-lib-path", layout::run_lib_path(root, triple));
        args.pair("--rustc-path", &config.compiler);
        args.pair("--src-root", root);
        args.pair("--src-test-suite-root", layout::suite_source_root(root));
        args.pair("--build-test-suite-root", layout::suite_build_root(root, triple));
        args.pair("--sysroot-base", layout::sysroot(root, triple));
        args.pair("--stage-id", layout::stage_id(triple));
        args.pair("--mode", runner::MODE);
        args.pair("--suite", layout::SUITE);
        args.pair("--target", triple);
        args.pair("--host", triple);
        args.pair("--llvm-filecheck", &toolchain.checker);
        args.pair("--llvm-bin-dir", toolchain.llvm_bin_dir());
        args.pair("--llvm-version", &toolchain.llvm_version);
        args.pair("--llvm-components", llvm_components_arg());
        for info in OPTIONAL_TOOLS {
            args.pair(info.flag, toolchain.optional_tool(info.id));
        }
        args.pair("--cc", "");
        args.pair("--cxx", "");
        args.pair("--cflags", "");
        args.pair("--cxxflags", "");
        args.pair("--host-rustcflags", runner::RUSTCFLAGS);
        args.pair("--target-rustcflags", runner::RUSTCFLAGS);
        args.pair("--target-linker", "");
        args.pair("--adb-path", runner::ADB_PATH);
        args.pair("--adb-test-dir", runner::ADB_TEST_DIR);
        args.pair("--android-cross-path", "");
        args.pair("--channel", runner::CHANNEL);
        args.pair("--git-repository", runner::GIT_REPOSITORY);
        args.pair("--nightly-branch", runner::NIGHTLY_BRANCH);
        args.pair("--git-merge-commit-email", runner::GIT_MERGE_COMMIT_EMAIL);
        args.pair("--minicore-path", layout::minicore_path(root));
        let paired_len = args.0.len();
        for switch in runner::TRAILING_SWITCHES {
            args.push(switch);
        }
        args.0.extend(passthrough.iter().cloned());

        Self {
            program: toolchain.test_runner.clone(),
            env_remove: vec![runner::EXCLUDED_ENV_VAR],
            env,
            args: args.0,
            paired_len,
        }
    }

    /// Create a [`Command`] that inherits the current environment minus [`Self::env_remove`], plus [`Self::env`].
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        for name in &self.env_remove {
            cmd.env_remove(name);
        }
        cmd.envs(self.env.iter().map(|(name, value)| (*name, value)));
        cmd.args(&self.args);
        cmd
    }

    /// Render as a POSIX shell command line (`env -u ... NAME=value ... program args...`).
    ///
    /// Each environment assignment, the program, and each flag/value pair gets its own continuation line.
    pub fn render_shell(&self) -> String {
        let mut head = vec!["env".to_string()];
        for name in &self.env_remove {
            head.push(format!("-u {}", name));
        }

        let mut lines = vec![head.join(" ")];
        for (name, value) in &self.env {
            lines.push(format!("{}={}", name, shell_quote(value)));
        }
        lines.push(shell_quote(self.program.as_os_str()));

        let (paired, rest) = self.args.split_at(self.paired_len.min(self.args.len()));
        for pair in paired.chunks(2) {
            let words: Vec<String> = pair.iter().map(|arg| shell_quote(arg)).collect();
            lines.push(words.join(" "));
        }
        lines.extend(rest.iter().map(|arg| shell_quote(arg)));

        lines.join(" \\\n  ")
    }

    /// Render as JSON for tooling.
    pub fn to_json(&self) -> Value {
        let env: Vec<Value> = self
            .env
            .iter()
            .map(|(name, value)| json!({ "name": name, "value": value.to_string_lossy() }))
            .collect();
        let args: Vec<String> = self.args.iter().map(|arg| arg.to_string_lossy().into_owned()).collect();

        json!({
            "program": self.program.to_string_lossy(),
            "env_remove": self.env_remove,
            "env": env,
            "args": args,
        })
    }
}

/// Accumulates flag/value pairs.
#[derive(Default)]
struct ArgList(Vec<OsString>);

impl ArgList {
    fn push(&mut self, arg: impl AsRef<OsStr>) {
        self.0.push(arg.as_ref().to_os_string());
    }

    fn pair(&mut self, flag: &str, value: impl AsRef<OsStr>) {
        self.push(flag);
        self.push(value);
    }
}

/// Quote a word for a POSIX shell. Words made only of safe characters are left bare.
///
/// `=` is not safe: after `env`, a bare `a=b` word would be read as another assignment.
pub fn shell_quote(word: &OsStr) -> String {
    let word = word.to_string_lossy();
    if word.is_empty() {
        return "''".to_string();
    }
    let safe = word
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':' | ',' | '+' | '@' | '%'));
    if safe {
        word.into_owned()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
