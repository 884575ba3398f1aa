use crate::cli::Args;
use crate::commands::initial_state;
use ipfl_teletext::config::Config;
use ipfl_teletext::error::AppError;
use ipfl_teletext::ui::{self, InteractiveOptions};
use std::time::Duration;

/// Run the interactive application flow.
///
/// - Resolves the starting selection from arguments and config
/// - Runs the interactive UI, which owns raw mode and the alternate screen
pub fn run_interactive(args: &Args, config: &Config) -> Result<(), AppError> {
    let options = InteractiveOptions {
        initial_state: initial_state(args, config)?,
        plain: args.plain,
        seed: args.seed,
        refresh_interval: Duration::from_secs(config.refresh_interval_seconds),
        debug_mode: args.debug,
    };

    ui::run_interactive_ui(options)
}
