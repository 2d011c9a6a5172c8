use crate::{
    cli::args::{CheckArgs, CollapseArgs, InitArgs, OutputFormat, QuickArgs},
    core::{
        run_simple, AppError, CollapseRequest, ConfigLoader, ConsoleReporter, DefaultErrorReporter,
        ErrorReporter, FaprotaxRunner, ResultReporter, RunnerConfig, SilentReporter,
    },
    Result,
};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

/// Handles `faprotax-runner collapse`: the structured path, exiting with the tool's code.
pub fn collapse(config_path: &Path, args: CollapseArgs) -> Result<i32> {
    let runner = match load_config(config_path)
        .and_then(|config| FaprotaxRunner::new(args.faprotax_dir.as_deref(), &config))
    {
        Ok(runner) => runner,
        Err(error) => return Ok(report_failure(&error)),
    };

    let request = build_request(&args);

    if args.dry_run {
        println!("{}", runner.build_command(&request));
        return Ok(0);
    }

    let reporter: Arc<dyn ResultReporter> = match args.format {
        OutputFormat::Text => Arc::new(ConsoleReporter),
        OutputFormat::Json => Arc::new(SilentReporter),
    };

    let result = match runner.with_reporter(reporter).collapse_table(&request) {
        Ok(result) => result,
        Err(error) => return Ok(report_failure(&error)),
    };

    if args.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&result)
            .context("failed to serialize execution result")?;
        println!("{}", json);
    }

    Ok(process_exit_code(result.exit_code))
}

/// Handles `faprotax-runner quick`: the boolean convenience path.
pub fn quick(config_path: &Path, args: QuickArgs) -> Result<i32> {
    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(error) => {
            ConsoleReporter.report_error(&error);
            return Ok(1);
        }
    };

    let success = run_simple(
        &config,
        args.input_file,
        args.output_file,
        args.report_file,
    );
    Ok(if success { 0 } else { 1 })
}

/// Handles `faprotax-runner check`.
pub fn check(config_path: &Path, args: CheckArgs) -> Result<i32> {
    let runner = match load_config(config_path)
        .and_then(|config| FaprotaxRunner::new(args.faprotax_dir.as_deref(), &config))
    {
        Ok(runner) => runner,
        Err(error) => return Ok(report_failure(&error)),
    };

    let installation = runner.installation();
    println!("FAPROTAX directory: {}", installation.base_dir().display());
    println!("Entry script:       {}", installation.entry_script().display());
    let database = installation.database_file();
    if database.is_file() {
        println!("Group database:     {}", database.display());
    } else {
        println!("Group database:     {} (missing; pass -g to collapse)", database.display());
    }
    Ok(0)
}

/// Handles `faprotax-runner init` by writing the bundled config template.
pub fn init(config_path: &Path, args: InitArgs) -> Result<i32> {
    let path = args.path.as_deref().unwrap_or(config_path);
    if let Err(error) = ConfigLoader::write_template(path) {
        return Ok(report_failure(&error));
    }

    println!("Wrote {}", path.display());
    println!("Set faprotax.dir to your FAPROTAX installation, then run: faprotax-runner check");
    println!();
    println!("Environment overrides:");
    for line in ConfigLoader::env_var_documentation() {
        println!("  {}", line);
    }
    Ok(0)
}

fn load_config(config_path: &Path) -> std::result::Result<RunnerConfig, AppError> {
    ConfigLoader::load(config_path)
}

fn build_request(args: &CollapseArgs) -> CollapseRequest {
    let mut request = CollapseRequest::new(&args.input_table, &args.output_table)
        .with_group_leftovers_as(args.group_leftovers_as.clone())
        .with_normalize(args.normalize_collapsed)
        .with_column_names_in(args.column_names_are_in)
        .with_verbose(!args.quiet)
        .with_additional_args(args.additional_args.iter().cloned());
    request.output_report = args.output_report.clone();
    request.groups_file = args.groups_file.clone();
    request
}

fn report_failure(error: &AppError) -> i32 {
    tracing::debug!(code = %error.code, category = %error.category, "command failed");
    DefaultErrorReporter::new().report_error(error);
    1
}

/// Exit codes outside 1..=255 (signals, unknown) collapse to 1.
fn process_exit_code(code: i32) -> i32 {
    match code {
        0 => 0,
        1..=255 => code,
        _ => 1,
    }
}
