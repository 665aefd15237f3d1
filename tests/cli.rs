#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn agent_hooks(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("agent-hooks").unwrap();
    // HOME 重定向让度量文件落在临时目录里
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

// ---------------------------------------------------------------------------
// agent-hooks hook validate_file
// ---------------------------------------------------------------------------

#[test]
fn validate_file_reports_violations_but_exits_zero() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("app.js");
    std::fs::write(&file, "# TODO: fix this\nconsole.log('x');\n").unwrap();

    let payload = format!(
        r#"{{"tool_name": "Edit", "tool_input": {{"file_path": "{}"}}}}"#,
        file.display()
    );

    agent_hooks(&dir)
        .args(["hook", "validate_file"])
        .write_stdin(payload)
        .assert()
        .success()
        .stderr(predicate::str::contains("Code quality issues found"))
        .stderr(predicate::str::contains("Line 1:"))
        .stderr(predicate::str::contains("Line 2:"));
}

#[test]
fn validate_file_skips_non_code_extension_silently() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.md");
    std::fs::write(&file, "TODO: everything in here\n").unwrap();

    let payload = format!(
        r#"{{"tool_name": "Write", "tool_input": {{"file_path": "{}"}}}}"#,
        file.display()
    );

    agent_hooks(&dir)
        .args(["hook", "validate_file"])
        .write_stdin(payload)
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::is_empty());
}

#[test]
fn validate_file_passes_clean_code() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("lib.rs");
    std::fs::write(&file, "pub fn add(a: u32, b: u32) -> u32 { a + b }\n").unwrap();

    let payload = format!(
        r#"{{"tool_name": "Edit", "tool_input": {{"file_path": "{}"}}}}"#,
        file.display()
    );

    agent_hooks(&dir)
        .args(["hook", "validate_file"])
        .write_stdin(payload)
        .assert()
        .success()
        .stderr(predicate::str::contains("Code quality check passed"));
}

// ---------------------------------------------------------------------------
// agent-hooks hook validate_result
// ---------------------------------------------------------------------------

#[test]
fn validate_result_passes_good_backend_output() {
    let dir = TempDir::new().unwrap();
    let result = "Implemented the users API endpoint.\n".to_string()
        + &"- applied the database migration\n".repeat(6);

    let payload = serde_json::json!({
        "tool_name": "Task",
        "tool_input": {"subagent_type": "backend-database-engineer"},
        "tool_response": result,
    });

    agent_hooks(&dir)
        .args(["hook", "validate_result"])
        .write_stdin(payload.to_string())
        .assert()
        .success()
        .stderr(predicate::str::contains("Quality gates passed"));
}

#[test]
fn validate_result_flags_short_output_but_exits_zero() {
    let dir = TempDir::new().unwrap();
    let payload = serde_json::json!({
        "tool_name": "Task",
        "tool_input": {"subagent_type": "frontend-ui-specialist"},
        "tool_response": "ok",
    });

    agent_hooks(&dir)
        .args(["hook", "validate_result"])
        .write_stdin(payload.to_string())
        .assert()
        .success()
        .stderr(predicate::str::contains("Quality gate failed"));
}

// ---------------------------------------------------------------------------
// agent-hooks hook inject_context
// ---------------------------------------------------------------------------

#[test]
fn inject_context_writes_snapshot_to_stdout() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("src")).unwrap();
    std::fs::create_dir_all(dir.path().join("ai-docs")).unwrap();
    std::fs::write(dir.path().join("ai-docs/patterns.md"), "# p").unwrap();

    let payload = serde_json::json!({
        "tool_name": "Task",
        "tool_input": {"subagent_type": "code-quality-reviewer"},
    });

    agent_hooks(&dir)
        .args(["hook", "inject_context"])
        .write_stdin(payload.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("Code Quality Reviewer Context"))
        .stdout(predicate::str::contains(
            "**Focus:** testing, linting, quality gates",
        ))
        .stdout(predicate::str::contains("- patterns.md"))
        .stderr(predicate::str::contains("Basic context injected"));
}

// ---------------------------------------------------------------------------
// agent-hooks hook track_metrics
// ---------------------------------------------------------------------------

#[test]
fn track_metrics_persists_to_home_metrics_file() {
    let dir = TempDir::new().unwrap();
    let payload = serde_json::json!({
        "tool_name": "Task",
        "tool_input": {
            "subagent_type": "backend-database-engineer",
            "prompt": "fix the query planner",
        },
    });

    agent_hooks(&dir)
        .args(["hook", "track_metrics"])
        .write_stdin(payload.to_string())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Recording backend-database-engineer invocation",
        ))
        .stderr(predicate::str::contains("Agent calls: 1"));

    let metrics_file = dir.path().join(".claude/agent-metrics.json");
    assert!(metrics_file.exists());
    let content = std::fs::read_to_string(&metrics_file).unwrap();
    assert!(content.contains("backend-database-engineer"));
}

// ---------------------------------------------------------------------------
// Degraded inputs never fail the process
// ---------------------------------------------------------------------------

#[test]
fn unknown_hook_name_is_advisory() {
    let dir = TempDir::new().unwrap();

    agent_hooks(&dir)
        .args(["hook", "no_such_hook"])
        .write_stdin("{}")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown hook: no_such_hook"));
}

#[test]
fn empty_stdin_degrades_with_diagnostic() {
    let dir = TempDir::new().unwrap();

    agent_hooks(&dir)
        .args(["hook", "validate_result"])
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("empty hook payload"));
}

#[test]
fn malformed_stdin_degrades_with_diagnostic() {
    let dir = TempDir::new().unwrap();

    agent_hooks(&dir)
        .args(["hook", "validate_file"])
        .write_stdin("{this is not json")
        .assert()
        .success()
        .stderr(predicate::str::contains("malformed hook payload"));
}

// ---------------------------------------------------------------------------
// agent-hooks statusline
// ---------------------------------------------------------------------------

#[test]
fn statusline_outside_git_shows_model_only() {
    let dir = TempDir::new().unwrap();
    let payload = serde_json::json!({
        "model": {"display_name": "Claude"},
        "workspace": {"current_dir": dir.path().to_string_lossy()},
    });

    agent_hooks(&dir)
        .arg("statusline")
        .write_stdin(payload.to_string())
        .assert()
        .success()
        .stdout(predicate::eq("Claude\n"));
}

#[test]
fn statusline_tolerates_malformed_payload() {
    let dir = TempDir::new().unwrap();

    agent_hooks(&dir)
        .arg("statusline")
        .write_stdin("garbage")
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// agent-hooks patterns / root / doctor
// ---------------------------------------------------------------------------

#[test]
fn patterns_lists_builtin_tables() {
    let dir = TempDir::new().unwrap();

    agent_hooks(&dir)
        .arg("patterns")
        .assert()
        .success()
        .stdout(predicate::str::contains("file-content"))
        .stdout(predicate::str::contains("universal-result"))
        .stdout(predicate::str::contains("TODO marker"));
}

#[test]
fn root_falls_back_to_cwd() {
    let dir = TempDir::new().unwrap();

    let canonical = std::fs::canonicalize(dir.path()).unwrap();
    agent_hooks(&dir)
        .arg("root")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(canonical.to_string_lossy().to_string())
                .or(predicate::str::contains(dir.path().to_string_lossy().to_string())),
        );
}

#[test]
fn doctor_reports_environment() {
    let dir = TempDir::new().unwrap();

    agent_hooks(&dir)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Git binary"))
        .stdout(predicate::str::contains("Diagnostic complete"));
}
