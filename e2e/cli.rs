// e2e/cli.rs — CLI integration tests for the `fastlog2` binary, driven as a
// black box via std::process::Command and CARGO_BIN_EXE_fastlog2 (see the
// lookup helper below).

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn fastlog2_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_fastlog2") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("fastlog2");
    p
}

fn make_temp_input(dir: &TempDir, content: &[u8]) -> PathBuf {
    let path = dir.path().join("input.log");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn encode_then_decode_round_trips_via_printed_session_key() {
    let dir = TempDir::new().unwrap();
    let input = make_temp_input(&dir, b"line one\nline two\nline three\n".repeat(200).as_slice());
    let sealed = dir.path().join("sealed.fl2");
    let recovered = dir.path().join("recovered.log");

    let output = Command::new(fastlog2_bin())
        .args(["encode", input.to_str().unwrap(), sealed.to_str().unwrap()])
        .output()
        .expect("failed to run fastlog2 encode");
    assert!(output.status.success(), "encode should exit 0: {output:?}");
    assert!(sealed.exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let key_hex = stderr
        .lines()
        .find_map(|line| line.strip_prefix("session key: "))
        .expect("encode without --key-hex must print a session key line to stderr")
        .trim()
        .to_string();

    let status = Command::new(fastlog2_bin())
        .args([
            "decode",
            sealed.to_str().unwrap(),
            recovered.to_str().unwrap(),
            "--key-hex",
            &key_hex,
        ])
        .status()
        .expect("failed to run fastlog2 decode");
    assert!(status.success(), "decode should exit 0");

    assert_eq!(fs::read(&input).unwrap(), fs::read(&recovered).unwrap());
}

#[test]
fn decode_with_wrong_key_fails_with_nonzero_exit() {
    let dir = TempDir::new().unwrap();
    let input = make_temp_input(&dir, b"secret payload");
    let sealed = dir.path().join("sealed.fl2");
    let recovered = dir.path().join("recovered.log");

    let status = Command::new(fastlog2_bin())
        .args([
            "encode",
            input.to_str().unwrap(),
            sealed.to_str().unwrap(),
            "--key-hex",
            &"11".repeat(32),
        ])
        .status()
        .expect("failed to run fastlog2 encode");
    assert!(status.success());

    let status = Command::new(fastlog2_bin())
        .args([
            "decode",
            sealed.to_str().unwrap(),
            recovered.to_str().unwrap(),
            "--key-hex",
            &"22".repeat(32),
        ])
        .status()
        .expect("failed to run fastlog2 decode");
    assert!(!status.success(), "decode with the wrong key must fail");
    assert!(!recovered.exists());
}

#[test]
fn encode_accepts_an_explicit_bandit_mode_flag() {
    let dir = TempDir::new().unwrap();
    let input = make_temp_input(&dir, b"x".repeat(5000).as_slice());
    let sealed = dir.path().join("sealed.fl2");

    for mode in ["off", "one", "full"] {
        let status = Command::new(fastlog2_bin())
            .args([
                "encode",
                input.to_str().unwrap(),
                sealed.to_str().unwrap(),
                "--bandit",
                mode,
                "--key-hex",
                &"33".repeat(32),
            ])
            .status()
            .expect("failed to run fastlog2 encode");
        assert!(status.success(), "bandit mode {mode} should encode successfully");
    }
}

#[test]
fn bench_subcommand_reports_throughput_without_writing_a_sealed_file() {
    let dir = TempDir::new().unwrap();
    let input = make_temp_input(&dir, b"benchmark payload ".repeat(1000).as_slice());

    let output = Command::new(fastlog2_bin())
        .args(["bench", input.to_str().unwrap()])
        .output()
        .expect("failed to run fastlog2 bench");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MiB/s"), "bench output should report throughput: {stdout}");
}

#[test]
fn bench_subcommand_reports_per_block_stats_at_elevated_verbosity() {
    let dir = TempDir::new().unwrap();
    let input = make_temp_input(&dir, b"benchmark payload ".repeat(1000).as_slice());

    let output = Command::new(fastlog2_bin())
        .args(["-vv", "bench", input.to_str().unwrap()])
        .output()
        .expect("failed to run fastlog2 bench");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("block 0:") && stderr.contains("ratio"),
        "bench -vv should report per-block stats: {stderr}"
    );
}

#[test]
fn missing_input_file_fails_with_a_readable_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist.log");
    let sealed = dir.path().join("sealed.fl2");

    let output = Command::new(fastlog2_bin())
        .args(["encode", missing.to_str().unwrap(), sealed.to_str().unwrap()])
        .output()
        .expect("failed to run fastlog2 encode");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reading"), "error should mention the failing read: {stderr}");
}
