use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (print once and exit)
/// - config operations are requested
/// - --version flag is set
/// - --debug mode is enabled (logs are echoed to the terminal)
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once
        || is_config_operation(args)
        || args.version
        || args.debug
}

/// Whether the arguments ask to change or show the configuration
pub fn is_config_operation(args: &Args) -> bool {
    args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.new_default_section.is_some()
        || args.list_config
}

/// International Professional Football League (IPFL) Teletext Dashboard
///
/// A teletext-style terminal dashboard for the IPFL: season leaders, live
/// board, schedule, divisions, standings and team rosters. All statistics are
/// placeholder numbers drawn on every refresh.
///
/// In interactive mode (default):
/// - Use arrow keys (←/→) to navigate between pages
/// - Use Shift+←/→ to move between yesterday, today and tomorrow
/// - Use Tab or h/l/s/d/t/n to switch sections
/// - Use ↑/↓ to change division, 'g' to change group and 'b' to switch leader boards
/// - Press 1-4 to open a team roster and Esc to close it
/// - Press 'r' to draw fresh numbers
/// - Press 'q' to quit
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Print the page once and exit immediately. Useful for scripts.
    /// The output stays visible in terminal history.
    #[arg(short, long)]
    pub once: bool,

    /// Section to open: home, live, schedule, divisions, standings or news.
    /// Defaults to the configured section.
    #[arg(long, short = 's', help_heading = "Display Options")]
    pub section: Option<String>,

    /// Day for the schedule: yesterday, today or tomorrow (or -1, 0, 1).
    #[arg(long, help_heading = "Display Options", allow_hyphen_values = true)]
    pub day: Option<String>,

    /// Division to select: north, west, south or east (Russian names work too).
    #[arg(long, help_heading = "Display Options")]
    pub division: Option<String>,

    /// Group within the division: A or B.
    #[arg(long, help_heading = "Display Options")]
    pub group: Option<String>,

    /// Open the roster of a team, e.g. --team Bergen.
    #[arg(long, help_heading = "Display Options")]
    pub team: Option<String>,

    /// Plain output without colours.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Seed for the placeholder numbers. The same seed prints the same page.
    #[arg(long, help_heading = "Display Options")]
    pub seed: Option<u64>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Update the section opened by default.
    #[arg(long = "set-default-section", help_heading = "Configuration")]
    pub new_default_section: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode which doesn't clear the terminal before drawing the UI.
    /// Logs are shown in the terminal as well as written to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
