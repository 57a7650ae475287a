//! CLI integration tests
//!
//! These tests run the built `ganttgrid` binary against fixture configs and
//! verify the exit-code contract:
//!
//! | Exit Code | Meaning |
//! |-----------|---------|
//! | 0 | Success |
//! | non-zero | Read, parse, validation, or export failure |

use std::path::PathBuf;
use std::process::{Command, Output};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ganttgrid"))
        .env_remove("GANTTGRID_RASTERIZER")
        .args(args)
        .output()
        .expect("failed to execute ganttgrid")
}

fn run_on_fixture(subcommand: &str, fixture: &str, extra: &[&str]) -> Output {
    let path = fixtures_dir().join(fixture);
    let path = path.to_str().expect("fixture path is valid utf-8");
    let mut args = vec![subcommand, path];
    args.extend_from_slice(extra);
    run(&args)
}

// =============================================================================
// check
// =============================================================================

#[test]
fn check_valid_config_exits_zero() {
    let output = run_on_fixture("check", "release_plan.json", &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ok"));
    assert!(stdout.contains("6 weeks"));
    assert!(stdout.contains("3 swimlanes"));
    assert!(stdout.contains("4 tasks"));
}

#[test]
fn check_empty_title_fails() {
    let output = run_on_fixture("check", "empty_title.json", &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("title"));
}

#[test]
fn check_zero_weeks_fails() {
    let output = run_on_fixture("check", "zero_weeks.json", &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("weeks"));
}

#[test]
fn check_missing_swimlanes_fails() {
    let output = run_on_fixture("check", "no_swimlanes.json", &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("swimlanes"));
}

#[test]
fn check_missing_file_fails() {
    let output = run(&["check", "/nonexistent/chart.json"]);
    assert!(!output.status.success());
}

// =============================================================================
// render
// =============================================================================

#[test]
fn render_writes_markup_to_stdout() {
    let output = run_on_fixture("render", "release_plan.json", &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("gantt-chart-container"));
    assert!(stdout.contains(r#"<div class="gantt-title">Release Plan</div>"#));
    assert!(stdout.contains("W1"));
    assert!(stdout.contains("W6"));
    assert!(stdout.contains("grid-column: 1 / 3"));
    assert!(stdout.contains("#3498db"));
}

#[test]
fn render_writes_markup_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.html");

    let output = run_on_fixture(
        "render",
        "release_plan.json",
        &["--output", out.to_str().unwrap()],
    );
    assert!(output.status.success());

    let markup = std::fs::read_to_string(&out).unwrap();
    assert!(markup.contains("gantt-grid"));
    assert!(markup.contains("Backend"));
}

#[test]
fn render_honors_container_id() {
    let output = run_on_fixture(
        "render",
        "release_plan.json",
        &["--container-id", "planning-board"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"<div id="planning-board">"#));
}

#[test]
fn render_invalid_config_fails() {
    let output = run_on_fixture("render", "zero_weeks.json", &[]);
    assert!(!output.status.success());
}

// =============================================================================
// export
// =============================================================================

#[test]
fn export_without_rasterizer_reports_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.png");

    let output = run_on_fixture(
        "export",
        "release_plan.json",
        &["--output", out.to_str().unwrap()],
    );
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rasterization backend"));
    assert!(!out.exists());
}

#[cfg(unix)]
#[test]
fn export_with_command_rasterizer_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.png");

    let output = run_on_fixture(
        "export",
        "release_plan.json",
        &[
            "--output",
            out.to_str().unwrap(),
            "--rasterizer",
            "cat",
        ],
    );
    assert!(output.status.success());

    // `cat` echoes the markup back, so the "image" is the serialized chart
    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("gantt-grid"));
}

#[cfg(unix)]
#[test]
fn export_with_failing_rasterizer_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.png");

    let output = run_on_fixture(
        "export",
        "release_plan.json",
        &[
            "--output",
            out.to_str().unwrap(),
            "--rasterizer",
            "false",
        ],
    );
    assert!(!output.status.success());
    assert!(!out.exists());
}
