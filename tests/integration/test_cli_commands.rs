use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BIN: &str = "faprotax-runner";

fn cli(workdir: &Path) -> Command {
    let mut command = Command::cargo_bin(BIN).expect("binary should build");
    command
        .current_dir(workdir)
        .env_remove("FAPROTAX_CONFIG")
        .env_remove("FAPROTAX_DIR")
        .env_remove("FAPROTAX_PYTHON")
        .env_remove("RUST_LOG");
    command
}

fn fake_installation(root: &Path) -> std::path::PathBuf {
    let dir = root.join("FAPROTAX_1.2.12");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("collapse_table.py"), "").unwrap();
    fs::write(dir.join("FAPROTAX.txt"), "").unwrap();
    dir
}

#[test]
fn test_quick_without_configuration_prints_error_and_fails() {
    let temp_dir = TempDir::new().unwrap();

    cli(temp_dir.path())
        .args(["quick", "a.tsv", "b.tsv", "c.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: FAPROTAX_DIR is not configured"))
        .stderr(predicate::str::contains("faprotax.toml not found"));
}

#[test]
fn test_collapse_dry_run_prints_composed_command() {
    let temp_dir = TempDir::new().unwrap();
    let install = fake_installation(temp_dir.path());

    cli(temp_dir.path())
        .args(["collapse", "-i", "a.tsv", "-o", "b.tsv", "-r", "c.txt", "--dry-run"])
        .arg("--faprotax-dir")
        .arg(&install)
        .args(["--", "--row_names_are_in_column", "taxonomy"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" -X utf8 "))
        .stdout(predicate::str::contains(
            "-r c.txt -v --row_names_are_in_column taxonomy",
        ));
}

#[test]
fn test_collapse_missing_script_reports_probed_path() {
    let temp_dir = TempDir::new().unwrap();
    let empty = temp_dir.path().join("empty");
    fs::create_dir_all(&empty).unwrap();

    cli(temp_dir.path())
        .args(["collapse", "-i", "a.tsv", "-o", "b.tsv", "--faprotax-dir"])
        .arg(&empty)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DEP-001"))
        .stderr(predicate::str::contains("collapse_table.py"));
}

#[test]
fn test_collapse_rejects_unknown_normalization_mode() {
    let temp_dir = TempDir::new().unwrap();

    cli(temp_dir.path())
        .args([
            "collapse",
            "-i",
            "a.tsv",
            "-o",
            "b.tsv",
            "--normalize-collapsed",
            "rows",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("columns_after_collapsing"));
}

#[test]
fn test_check_uses_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let install = fake_installation(temp_dir.path());
    fs::write(
        temp_dir.path().join("faprotax.toml"),
        format!("[faprotax]\ndir = \"{}\"\n", install.display()),
    )
    .unwrap();

    cli(temp_dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("collapse_table.py"))
        .stdout(predicate::str::contains("FAPROTAX.txt"));
}

#[test]
fn test_init_writes_template_once() {
    let temp_dir = TempDir::new().unwrap();

    cli(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("FAPROTAX_DIR"));
    assert!(temp_dir.path().join("faprotax.toml").exists());

    cli(temp_dir.path())
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[cfg(unix)]
#[test]
fn test_collapse_json_reports_tool_exit_code() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let install = fake_installation(temp_dir.path());
    let interpreter = temp_dir.path().join("failing-python");
    fs::write(&interpreter, "#!/bin/sh\necho 'no such table' >&2\nexit 3\n").unwrap();
    fs::set_permissions(&interpreter, fs::Permissions::from_mode(0o755)).unwrap();

    let output = cli(temp_dir.path())
        .env("FAPROTAX_PYTHON", &interpreter)
        .args(["collapse", "-i", "a.tsv", "-o", "b.tsv", "--format", "json", "--faprotax-dir"])
        .arg(&install)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["exit_code"], 3);
    assert_eq!(result["success"], false);
    assert_eq!(result["stderr"], "no such table\n");
}

#[cfg(unix)]
#[test]
fn test_collapse_text_mode_echoes_command_and_success() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let install = fake_installation(temp_dir.path());
    let interpreter = temp_dir.path().join("fake-python");
    fs::write(&interpreter, "#!/bin/sh\necho 'Collapsed 12 records'\nexit 0\n").unwrap();
    fs::set_permissions(&interpreter, fs::Permissions::from_mode(0o755)).unwrap();

    cli(temp_dir.path())
        .env("FAPROTAX_PYTHON", &interpreter)
        .args(["collapse", "-i", "a.tsv", "-o", "b.tsv", "--faprotax-dir"])
        .arg(&install)
        .assert()
        .success()
        .stdout(predicate::str::contains("Running: "))
        .stdout(predicate::str::contains(" -X utf8 "))
        .stdout(predicate::str::contains("✓ Success: Created b.tsv"))
        .stdout(predicate::str::contains("Collapsed 12 records"))
        .stdout(predicate::function(|out: &str| {
            let running = out.find("Running: ");
            let created = out.find("✓ Success: Created b.tsv");
            let echoed = out.find("Collapsed 12 records");
            matches!((running, created, echoed), (Some(r), Some(c), Some(e)) if r < c && c < e)
        }));
}
