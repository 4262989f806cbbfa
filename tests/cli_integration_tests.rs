use std::process::Command;

fn fa2ms() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fa2ms"));
    command.env_remove("RUST_LOG").env_remove("FA2MS_LOG");
    command
}

#[test]
fn test_cli_help_command() {
    let output = fa2ms()
        .arg("--help")
        .output()
        .expect("Failed to execute fa2ms --help");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("asphalt binder and mixture aging"));
    assert!(stdout.contains("serve"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("show"));
    assert!(stdout.contains("options"));
}

#[test]
fn test_cli_list_json_with_filters() {
    let output = fa2ms()
        .args([
            "list",
            "--material-type",
            "Binder",
            "--status",
            "Standard",
            "--json",
        ])
        .output()
        .expect("Failed to execute fa2ms list");

    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<u64> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 5, 10, 18, 20, 28, 34]);
}

#[test]
fn test_cli_list_table_summary() {
    let output = fa2ms()
        .args(["list", "--climate-zone", "Hot"])
        .output()
        .expect("Failed to execute fa2ms list");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("35 of 42 methods (1 filters active)"));
}

#[test]
fn test_cli_show_command() {
    let output = fa2ms()
        .args(["show", "2"])
        .output()
        .expect("Failed to execute fa2ms show");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("#2 RTFOT"));
}

#[test]
fn test_cli_show_invalid_id() {
    let output = fa2ms()
        .args(["show", "abc"])
        .output()
        .expect("Failed to execute fa2ms show");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid method ID"));
}

#[test]
fn test_cli_show_unknown_id() {
    let output = fa2ms()
        .args(["show", "9999"])
        .output()
        .expect("Failed to execute fa2ms show");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Method not found"));
}

#[test]
fn test_cli_options_command() {
    let output = fa2ms()
        .arg("options")
        .output()
        .expect("Failed to execute fa2ms options");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Simulation Goal"));
    assert!(stdout.contains("Very High"));
}

#[test]
fn test_cli_bad_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "server: [not, a, map]\n").unwrap();

    let output = fa2ms()
        .arg("--config")
        .arg(&path)
        .arg("options")
        .output()
        .expect("Failed to execute fa2ms options");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to parse config file"));
}
