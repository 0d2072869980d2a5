use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const PRD: &str = r#"{
    "product_name": "TaskHub",
    "objectives": ["Ship v1", "Reduce churn"],
    "functional_requirements": {
        "Auth": ["to sign in", "to reset my password"],
        "Billing": ["to pay by card", "to download invoices"]
    },
    "user_personas": ["Admin"]
}"#;

const ROSTER: &str = r#"[
    {"name": "Al", "role": "Backend", "skills": "auth password security"},
    {"name": "Bo", "role": "Payments", "skills": "billing invoices card"}
]"#;

const ENV_VARS: &[&str] = &[
    "PRDFLOW_MODE",
    "PRDFLOW_STRATEGY",
    "PRDFLOW_OPTIMIZER",
    "PRDFLOW_SCORER",
    "PRDFLOW_FILES_PRD",
    "PRDFLOW_FILES_ENGINEERS",
    "PRDFLOW_FILES_OUTPUT",
    "PRDFLOW_FILES_LOG",
];

/// Strip ANSI escape codes from a string.
fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            while let Some(&next) = chars.peek() {
                chars.next();
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

fn prdflow(dir: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_prdflow"));
    cmd.args(args).current_dir(dir);
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.output().expect("failed to run prdflow")
}

fn run_success(dir: &Path, args: &[&str]) -> String {
    let output = prdflow(dir, args);
    assert!(
        output.status.success(),
        "command failed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    strip_ansi(&String::from_utf8_lossy(&output.stdout))
}

fn run_failure(dir: &Path, args: &[&str]) -> String {
    let output = prdflow(dir, args);
    assert!(
        !output.status.success(),
        "command unexpectedly succeeded\nstdout:\n{}",
        String::from_utf8_lossy(&output.stdout)
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn setup_project(dir: &Path) {
    fs::write(dir.join("prd.json"), PRD).unwrap();
    fs::create_dir_all(dir.join("data")).unwrap();
    fs::write(dir.join("data/engineer_profile.json"), ROSTER).unwrap();
}

fn read_output(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn assigned_engineers(output: &Value) -> Vec<String> {
    output["assignments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| pair[1].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_basic_run_writes_output_json() {
    let temp = TempDir::new().unwrap();
    setup_project(temp.path());

    let stdout = run_success(temp.path(), &["run", "--prd-file", "prd.json"]);
    assert!(stdout.contains("Generated 2 epics and 4 user stories."));

    let output = read_output(&temp.path().join("output.json"));
    assert_eq!(output["epics"][0], "Epic: Auth");
    assert_eq!(output["epics"][1], "Epic: Billing");
    assert_eq!(
        output["user_stories"][0],
        "As a user, I want to sign in so that I can improve productivity."
    );
    assert_eq!(assigned_engineers(&output), vec!["Al", "Bo", "Al", "Bo"]);
    assert_eq!(output["assignments"][1][0], output["user_stories"][1]);

    let log = fs::read_to_string(temp.path().join("pipeline.log")).unwrap();
    assert!(log.contains("(basic mode)"));
    assert!(log.contains("Engineer Roles: Backend, Payments"));
}

#[test]
fn test_optimized_run_matches_skills() {
    let temp = TempDir::new().unwrap();
    setup_project(temp.path());

    run_success(
        temp.path(),
        &["--mode", "optimized", "--prd-file", "prd.json", "-o", "out/result.json"],
    );

    let output = read_output(&temp.path().join("out/result.json"));
    assert_eq!(assigned_engineers(&output), vec!["Al", "Al", "Bo", "Bo"]);
}

#[test]
fn test_config_file_selects_knapsack() {
    let temp = TempDir::new().unwrap();
    setup_project(temp.path());
    fs::write(
        temp.path().join("prdflow.toml"),
        "[pipeline]\noptimizer = \"knapsack\"\n\n[files]\nprd = \"prd.json\"\n",
    )
    .unwrap();

    let stdout = run_success(temp.path(), &[]);
    assert!(stdout.contains("Rebalance kept 2 of 4 stories."));

    let output = read_output(&temp.path().join("output.json"));
    assert_eq!(output["assignments"].as_array().unwrap().len(), 2);
}

#[test]
fn test_unknown_mode_fails() {
    let temp = TempDir::new().unwrap();
    setup_project(temp.path());

    let stderr = run_failure(temp.path(), &["--mode", "turbo", "--prd-file", "prd.json"]);
    assert!(stderr.contains("unknown mode: turbo"));
    assert!(!temp.path().join("output.json").exists());
}

#[test]
fn test_empty_roster_fails() {
    let temp = TempDir::new().unwrap();
    setup_project(temp.path());
    fs::write(temp.path().join("data/engineer_profile.json"), "[]").unwrap();

    let stderr = run_failure(temp.path(), &["run", "--prd-file", "prd.json"]);
    assert!(stderr.contains("configuration error"));
    assert!(!temp.path().join("output.json").exists());
}

#[test]
fn test_run_without_prd_fails() {
    let temp = TempDir::new().unwrap();
    setup_project(temp.path());

    let stderr = run_failure(temp.path(), &["run"]);
    assert!(stderr.contains("no PRD file given"));
}

#[test]
fn test_unknown_command_fails() {
    let temp = TempDir::new().unwrap();
    let stderr = run_failure(temp.path(), &["deploy"]);
    assert!(stderr.contains("unknown command: deploy"));
}

#[test]
fn test_engineers_lists_roster() {
    let temp = TempDir::new().unwrap();
    setup_project(temp.path());

    let stdout = run_success(temp.path(), &["engineers"]);
    assert!(stdout.contains("Al - Backend"));
    assert!(stdout.contains("Bo - Payments"));
    assert!(stdout.contains("Total: 2"));
}

#[test]
fn test_init_creates_files_and_respects_existing() {
    let temp = TempDir::new().unwrap();

    let stdout = run_success(temp.path(), &["init"]);
    assert!(stdout.contains("Created prdflow.toml"));
    assert!(temp.path().join("prdflow.toml").exists());
    assert!(temp.path().join("data/engineer_profile.json").exists());

    fs::write(temp.path().join("prdflow.toml"), "# mine\n").unwrap();
    let stdout = run_success(temp.path(), &["init"]);
    assert!(stdout.contains("File already exists: prdflow.toml"));
    assert_eq!(
        fs::read_to_string(temp.path().join("prdflow.toml")).unwrap(),
        "# mine\n"
    );

    run_success(temp.path(), &["init", "--force"]);
    let content = fs::read_to_string(temp.path().join("prdflow.toml")).unwrap();
    assert!(content.contains("[pipeline]"));

    let stdout = run_success(temp.path(), &["engineers"]);
    assert!(stdout.contains("Total: 3"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    let stdout = run_success(temp.path(), &["--version"]);
    assert!(stdout.starts_with("prdflow "));
}

#[test]
fn test_unwritable_log_warns_but_run_succeeds() {
    let temp = TempDir::new().unwrap();
    setup_project(temp.path());
    fs::create_dir_all(temp.path().join("logs")).unwrap();

    let output = prdflow(temp.path(), &["--prd-file", "prd.json", "--log-file", "logs"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning: failed to write log"));
    assert!(temp.path().join("output.json").exists());
}

#[test]
fn test_misspelled_flag_warns() {
    let temp = TempDir::new().unwrap();
    setup_project(temp.path());

    let output = prdflow(temp.path(), &["run", "--prd-file", "prd.json", "--verbose"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning: ignoring unknown flag: --verbose"));
}
