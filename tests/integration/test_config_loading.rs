use faprotax_runner::core::{ConfigLoader, ErrorCategory, FaprotaxRunner, RunnerConfig};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn clear_faprotax_env() {
    for v in &["FAPROTAX_CONFIG", "FAPROTAX_DIR", "FAPROTAX_PYTHON"] {
        env::remove_var(v);
    }
}

/// Config file -> runner, the path the CLI takes
#[test]
#[serial]
fn test_config_file_drives_runner_construction() {
    clear_faprotax_env();
    let temp_dir = TempDir::new().unwrap();
    let install = temp_dir.path().join("FAPROTAX_1.2.12");
    fs::create_dir_all(&install).unwrap();
    fs::write(install.join("collapse_table.py"), "").unwrap();

    let config_path = temp_dir.path().join("faprotax.toml");
    fs::write(
        &config_path,
        format!(
            "[faprotax]\ndir = \"{}\"\npython = \"python3\"\n",
            install.display()
        ),
    )
    .unwrap();

    let config = ConfigLoader::load(&config_path).unwrap();
    let runner = FaprotaxRunner::new(None, &config).unwrap();

    assert_eq!(runner.installation().base_dir(), install.as_path());
}

#[test]
#[serial]
fn test_absent_config_file_leaves_runner_unconfigured() {
    clear_faprotax_env();
    let temp_dir = TempDir::new().unwrap();

    let config = ConfigLoader::load(&temp_dir.path().join("faprotax.toml")).unwrap();
    assert_eq!(config, RunnerConfig::default());

    let err = FaprotaxRunner::new(None, &config).unwrap_err();
    assert_eq!(err.category, ErrorCategory::ConfigurationError);
}

#[test]
#[serial]
fn test_env_dir_stands_in_for_missing_file() {
    clear_faprotax_env();
    let temp_dir = TempDir::new().unwrap();
    env::set_var("FAPROTAX_DIR", temp_dir.path());

    let config = ConfigLoader::load(&temp_dir.path().join("faprotax.toml"));
    clear_faprotax_env();

    assert_eq!(
        config.unwrap().faprotax.dir,
        Some(PathBuf::from(temp_dir.path()))
    );
}

#[test]
#[serial]
fn test_empty_python_is_rejected() {
    clear_faprotax_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("faprotax.toml");
    fs::write(&config_path, "[faprotax]\npython = \"\"\n").unwrap();

    let err = ConfigLoader::load(&config_path).unwrap_err();
    assert_eq!(err.category, ErrorCategory::ValidationError);
}

#[test]
fn test_written_template_round_trips_through_loader() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("conf").join("faprotax.toml");

    ConfigLoader::write_template(&config_path).unwrap();
    let loaded = ConfigLoader::load_from_file(&config_path).unwrap().unwrap();

    assert_eq!(
        loaded.faprotax.dir,
        Some(PathBuf::from("/path/to/FAPROTAX_1.2.12"))
    );
}
