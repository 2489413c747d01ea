//! Assertions over the captured output of an envseal run.

use std::process::Output;

/// Both streams, for failure messages.
fn dump(output: &Output) -> String {
    format!(
        "exit: {:?}\n--- stdout ---\n{}--- stderr ---\n{}",
        output.status.code(),
        stdout(output),
        stderr(output)
    )
}

/// Captured stdout, lossily decoded.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Captured stderr, lossily decoded.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// The run exited 0.
pub fn assert_success(output: &Output) {
    assert!(output.status.success(), "expected success\n{}", dump(output));
}

/// The run exited with 1, the code every envseal failure uses.
///
/// Clap usage errors exit 2 and are accepted too.
pub fn assert_failure(output: &Output) {
    assert!(
        matches!(output.status.code(), Some(1) | Some(2)),
        "expected failure\n{}",
        dump(output)
    );
}

pub fn assert_stdout_contains(output: &Output, needle: &str) {
    assert!(
        stdout(output).contains(needle),
        "stdout lacks {:?}\n{}",
        needle,
        dump(output)
    );
}

pub fn assert_stderr_contains(output: &Output, needle: &str) {
    assert!(
        stderr(output).contains(needle),
        "stderr lacks {:?}\n{}",
        needle,
        dump(output)
    );
}

pub fn assert_stdout_excludes(output: &Output, needle: &str) {
    assert!(
        !stdout(output).contains(needle),
        "stdout unexpectedly has {:?}\n{}",
        needle,
        dump(output)
    );
}
