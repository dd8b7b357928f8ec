// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::{ProcessBuilder, ProcessFlags};

#[tokio::test]
async fn test_capture_trims_trailing_whitespace() {
    // The child prints "X\n  "; capture mode must return exactly "X".
    #[cfg(windows)]
    let builder = ProcessBuilder::new("cmd").args(["/C", "echo X"]);

    #[cfg(not(windows))]
    let builder = ProcessBuilder::new("printf").arg("X\n  ");

    let output = builder
        .capture_output()
        .run()
        .await
        .expect("printf should succeed");

    assert!(output.success());
    assert_eq!(output.stdout_trimmed(), "X");
}

#[tokio::test]
async fn test_capture_multiline() {
    #[cfg(not(windows))]
    {
        let output = ProcessBuilder::new("printf")
            .arg("one\ntwo\n")
            .capture_output()
            .run()
            .await
            .expect("printf should succeed");
        assert_eq!(output.stdout_trimmed(), "one\ntwo");
    }
}

#[tokio::test]
async fn test_capture_returns_result_on_nonzero_exit() {
    // Capture mode hands the result back; the caller decides.
    #[cfg(windows)]
    let builder = ProcessBuilder::new("cmd").args(["/C", "echo oops& exit 3"]);

    #[cfg(not(windows))]
    let builder = ProcessBuilder::new("sh").args(["-c", "echo oops; exit 3"]);

    let output = builder
        .capture_output()
        .run()
        .await
        .expect("capture mode returns the output");
    assert_eq!(output.exit_code(), 3);
    assert!(!output.success());
    assert_eq!(output.stdout_trimmed(), "oops");
}

#[tokio::test]
async fn test_nonzero_exit_fails_by_default() {
    #[cfg(windows)]
    let builder = ProcessBuilder::new("cmd").args(["/C", "exit 3"]);

    #[cfg(not(windows))]
    let builder = ProcessBuilder::new("false");

    let result = builder.quiet().run().await;
    assert!(result.is_err(), "non-zero exit should be an error");
}

#[tokio::test]
async fn test_allow_failure_returns_output() {
    #[cfg(windows)]
    let builder = ProcessBuilder::new("cmd").args(["/C", "exit 3"]);

    #[cfg(not(windows))]
    let builder = ProcessBuilder::new("sh").args(["-c", "exit 3"]);

    let output = builder
        .flag(ProcessFlags::ALLOW_FAILURE)
        .quiet()
        .run()
        .await
        .expect("ALLOW_FAILURE should not fail the call");
    assert_eq!(output.exit_code(), 3);
    assert!(!output.success());
}

#[tokio::test]
async fn test_spawn_failure_is_reported() {
    let result = ProcessBuilder::new("/nonexistent/program/xyz")
        .quiet()
        .run()
        .await;
    assert!(result.is_err());
}

#[test]
fn test_executable_lookup_found() {
    // cargo is always available since tests run under cargo
    assert!(ProcessBuilder::exists("cargo"));

    let path = ProcessBuilder::find("cargo").expect("cargo should be found");
    assert!(path.exists());

    let builder = ProcessBuilder::which("cargo").expect("which should resolve cargo");
    assert!(builder.program().exists());
}

#[test]
fn test_executable_lookup_not_found() {
    let program = "nonexistent_program_12345";

    assert!(!ProcessBuilder::exists(program));
    assert!(ProcessBuilder::find(program).is_none());

    let err = ProcessBuilder::which(program).unwrap_err();
    assert!(err.to_string().contains(program), "error names the program");
}

#[test]
fn test_spawn_detached_does_not_block() {
    #[cfg(not(windows))]
    {
        ProcessBuilder::new("sleep")
            .arg("0.05")
            .spawn_detached()
            .expect("detached spawn should succeed");
    }
}
