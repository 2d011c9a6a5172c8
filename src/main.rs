use clap::Parser;
use faprotax_runner::{cli, core::ConfigLoader, logging};

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let code = {
        let config_path = args.config.clone().unwrap_or_else(ConfigLoader::default_path);
        let _logging = match logging::init(Some(&config_path)) {
            Ok(guard) => {
                tracing::debug!(
                    console = ?guard.console_output(),
                    log_file = ?guard.log_file_path(),
                    "logging initialized"
                );
                Some(guard)
            }
            Err(err) => {
                eprintln!("[WARNING] logging disabled: {:#}", err);
                None
            }
        };
        cli::run(args)?
    };

    std::process::exit(code);
}
