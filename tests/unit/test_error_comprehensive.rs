use faprotax_runner::core::{AppError, DefaultErrorReporter, ErrorCategory, ErrorReporter, ErrorSeverity};
use std::io;

#[test]
fn test_io_error_conversion() {
    let error: AppError = io::Error::new(io::ErrorKind::NotFound, "no such file").into();

    assert_eq!(error.category, ErrorCategory::IoError);
    assert_eq!(error.code, "IO_ERROR");
    assert!(error.source.is_some());
    assert!(!error.recovery_suggestions.is_empty());
}

#[test]
fn test_anyhow_error_conversion() {
    let error: AppError = anyhow::anyhow!("unexpected").into();

    assert_eq!(error.category, ErrorCategory::InternalError);
    assert_eq!(error.message, "unexpected");
}

#[test]
fn test_with_source_is_shown_in_display() {
    let source = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let error = AppError::with_source(
        ErrorCategory::ToolExecutionError,
        "could not start python3",
        Box::new(source),
    )
    .with_code("EXEC-001");

    let rendered = error.to_string();
    assert!(rendered.starts_with("[EXEC-001] ToolExecutionError: could not start python3"));
    assert!(rendered.contains("Caused by: denied"));
}

#[test]
fn test_severity_by_category() {
    let cases = [
        (ErrorCategory::ConfigurationError, ErrorSeverity::Fatal),
        (ErrorCategory::MissingDependencyError, ErrorSeverity::Fatal),
        (ErrorCategory::ToolExecutionError, ErrorSeverity::Error),
        (ErrorCategory::ValidationError, ErrorSeverity::Error),
    ];
    for (category, severity) in cases {
        assert_eq!(AppError::new(category, "x").severity(), severity);
    }
}

#[test]
fn test_app_error_is_send_sync_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<AppError>();

    let wrapped: anyhow::Error = AppError::new(ErrorCategory::ConfigurationError, "unset").into();
    assert!(wrapped.to_string().contains("ConfigurationError"));
}

#[test]
fn test_default_reporter_does_not_panic() {
    let reporter = DefaultErrorReporter::default();
    let error = AppError::new(ErrorCategory::ConfigurationError, "FAPROTAX_DIR is not configured")
        .with_recovery("set faprotax.dir");
    reporter.report_error(&error);
    reporter.report_warning("faprotax.toml not found.", Some("copy the template".to_string()));
}
