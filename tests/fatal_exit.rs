//! Exit status integration tests for fatal records.
//!
//! A fatal record terminates the process, so these tests re-run the current
//! test binary with `DUOLOG_FATAL_MODE` set. The child runs
//! [`fatal_child`], emits a fatal record and never returns; the parent checks
//! the exit status, the file contents and the captured standard output.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use duolog::{FATAL_EXIT_CODE, Fields, OutputConfig, Severity, Value, emit_fatal};
use test_support::{parse_record, read_lines, scratch_dir};

const MODE_VAR: &str = "DUOLOG_FATAL_MODE";
const PATH_VAR: &str = "DUOLOG_FATAL_PATH";
const UNREACHABLE_MARKER: &str = "after fatal";

// ============================================================================
// Test Infrastructure
// ============================================================================

/// Child entry point; inert unless launched by [`run_child`].
#[test]
fn fatal_child() {
    let (Ok(mode), Ok(path)) = (std::env::var(MODE_VAR), std::env::var(PATH_VAR)) else {
        return;
    };

    let config = match mode.as_str() {
        "both" => OutputConfig::both(),
        "colored" => OutputConfig::both().with_color(true),
        "fields" | "emit" => OutputConfig::file_only(),
        _ => OutputConfig::silent(),
    };
    let mut log = duolog::initialize(&path).expect("open log");

    if mode == "emit" {
        log.emit(config, Severity::Fatal, None, &[Value::from("disk "), Value::from("gone")]);
        println!("{UNREACHABLE_MARKER}");
        fs::write(&path, UNREACHABLE_MARKER).expect("write marker");
        return;
    }
    if mode == "fields" {
        let fields = Fields::new().with("code", 7);
        emit_fatal!(log, config, fields = &fields; "disk ", "gone");
    }
    emit_fatal!(log, config, "disk ", "gone");

    #[allow(unreachable_code)]
    {
        println!("{UNREACHABLE_MARKER}");
        fs::write(&path, UNREACHABLE_MARKER).expect("write marker");
    }
}

/// Re-runs this binary restricted to [`fatal_child`] in `mode`.
fn run_child(mode: &str, path: &Path) -> Output {
    let binary = std::env::current_exe().expect("locate test binary");
    Command::new(binary)
        .args(["fatal_child", "--exact", "--nocapture", "--test-threads=1"])
        .env(MODE_VAR, mode)
        .env(PATH_VAR, path)
        .output()
        .expect("spawn child test binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ============================================================================
// Fatal Termination
// ============================================================================

#[test]
fn fatal_writes_both_sinks_then_exits_with_status_one() {
    let dir = scratch_dir();
    let path = dir.path().join("fatal.log");

    let output = run_child("both", &path);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1, "{lines:?}");
    let record = parse_record(&lines[0]).expect("well formed");
    assert_eq!(record.tag, " [ ERRO ] ");
    assert_eq!(record.body, "disk gone");

    let stdout = stdout_of(&output);
    assert!(stdout.contains(&lines[0]), "{stdout}");
    assert!(!stdout.contains(UNREACHABLE_MARKER), "{stdout}");
}

#[test]
fn fatal_colors_terminal_in_red() {
    let dir = scratch_dir();
    let path = dir.path().join("colored.log");

    let output = run_child("colored", &path);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("\x1b[31;1m"), "{stdout:?}");
    assert!(stdout.contains("disk gone\x1b[0;0m\n"), "{stdout:?}");
    let text = fs::read_to_string(&path).expect("read");
    assert!(!duolog::contains_escape(&text));
}

#[test]
fn fatal_with_fields_stops_at_the_first_record() {
    let dir = scratch_dir();
    let path = dir.path().join("fields.log");

    let output = run_child("fields", &path);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1, "{lines:?}");
    let record = parse_record(&lines[0]).expect("well formed");
    assert_eq!(record.body, "disk gone [ (code: 7) ]");
}

#[test]
fn fatal_with_no_sinks_still_exits() {
    let dir = scratch_dir();
    let path = dir.path().join("silent.log");

    let output = run_child("silent", &path);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    assert_eq!(fs::read_to_string(&path).expect("read"), "");
    assert!(!stdout_of(&output).contains(UNREACHABLE_MARKER));
}

#[test]
fn emit_with_fatal_severity_exits_without_returning() {
    let dir = scratch_dir();
    let path = dir.path().join("emit.log");

    let output = run_child("emit", &path);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1, "{lines:?}");
    let record = parse_record(&lines[0]).expect("well formed");
    assert_eq!(record.tag, " [ ERRO ] ");
    assert_eq!(record.body, "disk gone");
    assert!(!stdout_of(&output).contains(UNREACHABLE_MARKER));
}
