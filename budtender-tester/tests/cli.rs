use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "budtender-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_budtender-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    for key in ["guard", "catalog", "onboarding", "login", "notifications"] {
        assert!(content.contains(key), "missing {key} in {content}");
    }
}

#[test]
fn cli_runs_offline_guard_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_budtender-tester");
    let output_path = temp_path("guard");
    let output = Command::new(exe)
        .args(["--scenarios", "guard", "--report", "json", "--output"])
        .arg(&output_path)
        .env("BUDTENDER_API_URL", "http://127.0.0.1:9")
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Budtender Smoke Tester"));

    let content = std::fs::read_to_string(output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(report[0]["scenario_name"], "guard");
    assert_eq!(report[0]["passed"], true);
}

#[test]
fn cli_fails_when_backend_is_unreachable() {
    let exe = env!("CARGO_BIN_EXE_budtender-tester");
    let output_path = temp_path("catalog");
    let output = Command::new(exe)
        .args([
            "--base-url",
            "http://127.0.0.1:9",
            "--scenarios",
            "catalog",
            "--report",
            "markdown",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("❌ catalog"), "{content}");
}
