//! Utility helpers shared across integration tests.
#![allow(dead_code, reason = "each test crate uses a different subset")]

use assert_cmd::{Command, assert::Assert};

/// Build a newline-joined `String` from a list of line literals.
///
/// Keeps expected multi-line outputs readable without escape-heavy literals.
#[allow(unused_macros, reason = "not every test crate compares whole documents")]
macro_rules! lines_text {
    ($($line:expr),* $(,)?) => {
        [$($line),*].join("\n")
    };
}

/// Create a `termreflow` command isolated from the caller's terminal settings.
pub fn termreflow() -> Command {
    let mut cmd = Command::cargo_bin("termreflow").expect("failed to create termreflow command");
    cmd.env_remove("COLUMNS").env_remove("TERMREFLOW_WIDTH");
    cmd
}

/// Run the binary with `args`, feeding `stdin` to it.
pub fn run_cli_with_stdin(args: &[&str], stdin: &str) -> Assert {
    termreflow().args(args).write_stdin(stdin).assert()
}

/// Run the binary with `args` and empty standard input.
pub fn run_cli_with_args(args: &[&str]) -> std::process::Output {
    termreflow()
        .args(args)
        .write_stdin("")
        .output()
        .expect("failed to run termreflow")
}

/// Assert that every line of `text` fits in `width` code points.
pub fn assert_lines_fit(text: &str, width: usize) {
    for line in text.lines() {
        assert!(
            line.chars().count() <= width,
            "line exceeds {width} columns: {line:?}"
        );
    }
}
