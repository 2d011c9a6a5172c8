use faprotax_runner::core::{
    ErrorCategory, ErrorSeverity, FaprotaxRunner, InstallationResolver, RunnerConfig,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_missing_entry_script_names_probed_path() {
    let dir = TempDir::new().unwrap();
    let probed = dir.path().join("collapse_table.py");

    let err = InstallationResolver::resolve(Some(dir.path()), None).unwrap_err();

    assert_eq!(err.category, ErrorCategory::MissingDependencyError);
    assert_eq!(err.code, "DEP-001");
    assert!(err.message.contains(&probed.display().to_string()));
    assert_eq!(
        err.context.get("probed_path"),
        Some(&probed.display().to_string())
    );
}

#[test]
fn test_no_directory_is_configuration_error_with_remediation() {
    let err = InstallationResolver::resolve(None, None).unwrap_err();

    assert_eq!(err.category, ErrorCategory::ConfigurationError);
    assert_eq!(err.severity(), ErrorSeverity::Fatal);
    assert_eq!(err.recovery_suggestions.len(), 2);
    assert!(err.recovery_suggestions[0].contains("--faprotax-dir"));
    assert!(err.recovery_suggestions[1].contains("faprotax.toml"));
}

#[test]
fn test_configured_directory_is_used_when_no_explicit_one() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("collapse_table.py"), "").unwrap();

    let installation = InstallationResolver::resolve(None, Some(dir.path())).unwrap();

    assert_eq!(installation.base_dir(), dir.path());
    assert_eq!(
        installation.entry_script(),
        dir.path().join("collapse_table.py")
    );
    assert_eq!(installation.database_file(), dir.path().join("FAPROTAX.txt"));
}

#[test]
fn test_missing_database_does_not_fail_resolution() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("collapse_table.py"), "").unwrap();

    let installation = InstallationResolver::resolve(Some(dir.path()), None).unwrap();
    assert!(!installation.database_file().exists());
}

#[test]
fn test_runner_construction_fails_without_configuration() {
    let err = FaprotaxRunner::new(None, &RunnerConfig::default()).unwrap_err();
    assert_eq!(err.category, ErrorCategory::ConfigurationError);
}

#[test]
fn test_runner_construction_fails_eagerly_on_missing_script() {
    let config = RunnerConfig::with_dir(Path::new("/definitely/not/a/faprotax/dir"));

    let err = FaprotaxRunner::new(None, &config).unwrap_err();

    assert_eq!(err.category, ErrorCategory::MissingDependencyError);
    assert!(err
        .message
        .contains("/definitely/not/a/faprotax/dir/collapse_table.py"));
}
