// src/main.rs
mod app;
mod cli;
mod commands;
mod logging;
mod version;

use clap::Parser;
use cli::{Args, is_config_operation};
use ipfl_teletext::config::Config;
use ipfl_teletext::error::AppError;

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    commands::validate_args(&args)?;

    // Keep the guard alive until exit so buffered log lines reach the file
    let (log_file_path, _guard) = logging::setup_logging(&args)?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.version {
        return commands::handle_version_command();
    }

    if args.list_config {
        return commands::handle_list_config_command();
    }

    if is_config_operation(&args) {
        return commands::handle_config_update_command(&args);
    }

    // Load config first to fail early if there's an issue
    let config = Config::load()?;

    if args.once {
        return commands::handle_once_command(&args, &config);
    }

    app::run_interactive(&args, &config)
}
