//! End-to-end tests driving the unilog binary.
//!
//! Loggers write to the real standard streams and report construction failures there, so
//! these tests run the compiled binary and inspect its stdout, stderr and exit status.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const ERROR_START: &str = "[unilog] ERROR";
const WARNING_START: &str = "[unilog] WARNING";

/// Run the binary with `args`, isolated from the user's environment.
fn unilog(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_unilog"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", config_home)
        .output()
        .expect("Failed to run unilog")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("Temporary path is not UTF-8")
}

#[test]
fn default_level_logs_to_stdout_only() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let output = unilog(temp.path(), &["--log-level", "1", "log", "--caller", "tag", "hi"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "[tag] hi\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn warnings_and_errors_ignore_level_none() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let output = unilog(temp.path(), &["--log-level", "0", "log", "--caller", "tag", "hi"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");

    let output = unilog(temp.path(), &["--log-level", "0", "warn", "--caller", "tag", "careful"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[tag] WARNING - careful\n");

    let output = unilog(temp.path(), &["--log-level", "0", "error", "--caller", "tag", "boom"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "[tag] ERROR - boom\n");
}

#[test]
fn debug_levels_are_gated() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let output = unilog(
        temp.path(),
        &["--log-level", "2", "debug", "--caller", "tag", "--level", "0", "shown"],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[tag] shown\n");

    let output = unilog(
        temp.path(),
        &["--log-level", "2", "debug", "--caller", "tag", "--level", "1", "hidden"],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn debug_levels_outside_the_band_fail() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    for level in ["-1", "2"] {
        let output = unilog(
            temp.path(),
            &["--log-level", "3", "debug", "--caller", "tag", "--level", level, "msg"],
        );
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stdout(&output), "");
        assert!(stderr(&output).starts_with(ERROR_START));
    }
}

#[test]
fn invalid_level_is_reported() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    for level in ["-1", "4"] {
        let output = unilog(temp.path(), &["--log-level", level, "log", "--caller", "tag", "hi"]);
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stdout(&output), "");
        assert!(stderr(&output).starts_with(ERROR_START));
    }
}

#[test]
fn invalid_level_creates_no_file() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let log = temp.path().join("test.log");

    let output = unilog(
        temp.path(),
        &[
            "--log-level", "9",
            "--log-file", path_arg(&log),
            "--overwrite", "false",
            "log", "--caller", "tag", "hi",
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with(ERROR_START));
    assert!(!log.exists());
}

#[test]
fn empty_caller_is_reported() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let output = unilog(temp.path(), &["log", "--caller", "", "hi"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).starts_with(ERROR_START));
}

#[test]
fn file_logger_demo_keeps_order_and_duplicates_errors() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let log = temp.path().join("demo.log");

    let output = unilog(
        temp.path(),
        &[
            "--log-level", "3",
            "--log-file", path_arg(&log),
            "--overwrite", "false",
            "demo", "--caller", "Demo",
        ],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "[Demo] ERROR - Something is definitely wrong\n");
    assert_eq!(
        fs::read_to_string(&log).expect("Log file missing"),
        "[Demo] General message\n\
         [Demo] Debug message level 2\n\
         [Demo] Debug message level 3\n\
         [Demo] WARNING - Something is not quite right\n\
         [Demo] ERROR - Something is definitely wrong\n"
    );
}

#[test]
fn existing_file_is_kept_without_overwrite() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let log = temp.path().join("test.log");
    fs::write(&log, "[old] line\n").expect("Failed to write log");

    let output = unilog(
        temp.path(),
        &[
            "--log-file", path_arg(&log),
            "--overwrite", "false",
            "log", "--caller", "tag", "hi",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with(ERROR_START));
    assert_eq!(fs::read_to_string(&log).expect("Log file missing"), "[old] line\n");
}

#[test]
fn existing_file_is_replaced_with_overwrite() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let log = temp.path().join("test.log");
    fs::write(&log, "[old] line\n").expect("Failed to write log");

    let output = unilog(
        temp.path(),
        &[
            "--log-file", path_arg(&log),
            "--overwrite", "true",
            "warn", "--caller", "tag", "new",
        ],
    );

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with(WARNING_START));
    assert_eq!(out.lines().count(), 1);
    assert_eq!(
        fs::read_to_string(&log).expect("Log file missing"),
        "[tag] WARNING - new\n"
    );
}

#[test]
fn directory_is_a_path_conflict() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let output = unilog(
        temp.path(),
        &[
            "--log-file", path_arg(temp.path()),
            "--overwrite", "true",
            "log", "--caller", "tag", "hi",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with(ERROR_START));
    assert!(temp.path().is_dir());
}

#[test]
fn configuration_file_is_validated() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = temp.path().join("logger.json");

    for bad in [
        r#"[1]"#,
        r#"{}"#,
        r#"{"Level": 1.5}"#,
        r#"{"Level": 1, "Overwrite": true}"#,
        r#"{"Level": 1, "Filename": "x.log"}"#,
        r#"{"Level": 1, "Filename": 7, "Overwrite": true}"#,
        r#"{"Level": 1, "Filename": "x.log", "Overwrite": "yes"}"#,
        r#"not json"#,
    ] {
        fs::write(&config, bad).expect("Failed to write config");
        let output = unilog(
            temp.path(),
            &["--config", path_arg(&config), "log", "--caller", "tag", "hi"],
        );
        assert_eq!(output.status.code(), Some(1), "accepted {}", bad);
        assert_eq!(stdout(&output), "");
        assert!(stderr(&output).starts_with(ERROR_START));
    }
}

#[test]
fn configuration_file_selects_file_logger() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = temp.path().join("logger.json");
    let log = temp.path().join("test.log");
    let document = serde_json::json!({
        "Level": 1,
        "Filename": path_arg(&log),
        "Overwrite": false,
    });
    fs::write(&config, document.to_string()).expect("Failed to write config");

    let output = unilog(
        temp.path(),
        &["--config", path_arg(&config), "log", "--caller", "tag", "hi"],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert_eq!(fs::read_to_string(&log).expect("Log file missing"), "[tag] hi\n");
}

#[cfg(target_os = "linux")]
#[test]
fn saved_configuration_is_used_without_flags() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let dir = temp.path().join("unilog");
    fs::create_dir_all(&dir).expect("Failed to create config dir");
    fs::write(dir.join("logger.json"), r#"{"Level": 0}"#).expect("Failed to write config");

    let output = unilog(temp.path(), &["log", "--caller", "tag", "hi"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");

    fs::remove_file(dir.join("logger.json")).expect("Failed to remove config");
    let output = unilog(temp.path(), &["log", "--caller", "tag", "hi"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[tag] hi\n");
}

#[test]
fn levels_lists_every_level() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let output = unilog(temp.path(), &["levels"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 4);
    assert!(out.contains("warnings and errors only"));
}
