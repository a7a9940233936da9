//! Pull single values out of the loosely structured text that toolchain helpers print.
//!
//! Both helpers the launcher queries (`rustc -vV` and `FileCheck --version`) print a few human-oriented lines. The
//! launcher needs exactly one token or one trailing phrase from each, so these helpers stay deliberately narrow and
//! operate on captured text only.
//!
//! ## Notes
//!
//! - Inputs are whole outputs; callers never pre-split lines.
//! - Every helper returns a borrowed slice of the input, or `None` when the expected shape is missing.

/// Marker that starts the host line in `rustc -vV` output.
pub const HOST_MARKER: &str = "host:";

/// Phrase that precedes the version number in `FileCheck --version` output.
pub const LLVM_VERSION_PHRASE: &str = "LLVM version ";

/// Find the first line whose first whitespace-delimited token is `marker`, and return that line's last token.
///
/// ## Parameters
/// - `text`: the full captured output.
/// - `marker`: the exact first token to look for (e.g. `host:`).
///
/// ## Returns
/// - `Some(token)`: the last token of the first matching line.
/// - `None`: no line starts with `marker`, or the matching line carries nothing after it.
///
/// ## Examples
/// ```rust
/// use launcher_core::extract::last_token_of_marked_line;
///
/// let out = "rustc 1.80.0\nhost: x86_64-unknown-linux-gnu\nrelease: 1.80.0\n";
/// assert_eq!(last_token_of_marked_line(out, "host:"), Some("x86_64-unknown-linux-gnu"));
/// assert_eq!(last_token_of_marked_line(out, "commit-hash:"), None);
/// ```
pub fn last_token_of_marked_line<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        if tokens.next() == Some(marker) {
            return tokens.last();
        }
    }
    None
}

/// Find the first occurrence of `phrase` and return the rest of that line, with trailing whitespace removed.
///
/// ## Parameters
/// - `text`: the full captured output.
/// - `phrase`: the literal prefix to strip (including any trailing space).
///
/// ## Returns
/// - `Some(rest)`: everything after `phrase` up to the end of its line. May be empty.
/// - `None`: `phrase` does not occur in `text`.
///
/// ## Examples
/// ```rust
/// use launcher_core::extract::strip_prefix_phrase;
///
/// assert_eq!(strip_prefix_phrase("LLVM version 18.1.0", "LLVM version "), Some("18.1.0"));
/// assert_eq!(strip_prefix_phrase("no version here", "LLVM version "), None);
/// ```
pub fn strip_prefix_phrase<'a>(text: &'a str, phrase: &str) -> Option<&'a str> {
    let start = text.find(phrase)?;
    let rest = &text[start + phrase.len()..];
    let line = rest.lines().next().unwrap_or("");
    Some(line.trim_end())
}

/// Extract the host target triple from `rustc -vV` output.
pub fn host_triple(verbose_version: &str) -> Option<&str> {
    last_token_of_marked_line(verbose_version, HOST_MARKER)
}

/// Extract the LLVM version from `FileCheck --version` output.
pub fn llvm_version(version_output: &str) -> Option<&str> {
    strip_prefix_phrase(version_output, LLVM_VERSION_PHRASE)
}
