use crate::cli::Args;
use crate::version;
use crossterm::{execute, terminal::SetTitle};
use ipfl_teletext::config::Config;
use ipfl_teletext::constants::TERMINAL_TITLE;
use ipfl_teletext::dashboard::{DashboardState, RenderOptions, Section, build_page};
use ipfl_teletext::error::AppError;
use ipfl_teletext::league::{ClockTime, DateOffset, LEAGUE, make_rng};
use std::io::stdout;
use std::path::Path;

/// Validates command line argument combinations and values.
///
/// Section, day, division, group and team names are checked here so a typo
/// fails before the terminal is switched into raw mode.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file simultaneously",
        ));
    }

    if let Some(section) = &args.section {
        section.parse::<Section>()?;
    }
    if let Some(section) = &args.new_default_section {
        section.parse::<Section>()?;
    }
    if let Some(day) = &args.day {
        day.parse::<DateOffset>()?;
    }
    if let Some(division) = &args.division {
        LEAGUE.division(division)?;
    }
    if let Some(group) = &args.group {
        let division = args.division.as_deref().unwrap_or("north");
        LEAGUE.division(division)?.group(group)?;
    }
    if let Some(team) = &args.team {
        LEAGUE.canonical_team_name(team)?;
    }
    Ok(())
}

/// Resolves the dashboard selection the session starts with.
///
/// Command line selections win over the configured defaults. The configured
/// default division is only used when neither `--division` nor `--team` is
/// given.
pub fn initial_state(args: &Args, config: &Config) -> Result<DashboardState, AppError> {
    let section = match &args.section {
        Some(section) => section.parse()?,
        None => config.default_section,
    };
    let day = match &args.day {
        Some(day) => day.parse()?,
        None => DateOffset::Today,
    };
    let division = args
        .division
        .as_deref()
        .or_else(|| args.team.is_none().then_some(config.default_division.as_str()));

    DashboardState::from_selection(
        section,
        day,
        division,
        args.group.as_deref(),
        args.team.as_deref(),
    )
}

/// Handles the --version command.
pub fn handle_version_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    version::print_logo();
    version::print_version_info();

    Ok(())
}

/// Handles the --list-config command.
///
/// Displays current configuration settings with logo.
pub fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    version::print_logo();
    Config::display()?;

    Ok(())
}

/// Applies --set-log-file, --clear-log-file and --set-default-section to the
/// loaded configuration without saving it.
pub fn apply_config_updates(config: &mut Config, args: &Args) -> Result<(), AppError> {
    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }

    if let Some(section) = &args.new_default_section {
        config.default_section = section.parse()?;
    }

    config.validate()
}

/// Reads the config file at `path` as written by the user, applies the
/// requested updates and writes it back.
///
/// Environment overrides are not applied, so they never end up in the file.
/// A missing file starts from defaults; an unreadable one is an error and the
/// file is left untouched.
pub fn update_config_file(path: &str, args: &Args) -> Result<Config, AppError> {
    let mut config = if Path::new(path).exists() {
        Config::load_from_path(path)?
    } else {
        tracing::debug!("No config file at {path}, starting from defaults");
        Config::default()
    };

    apply_config_updates(&mut config, args)?;
    config.save_to_path(path)?;
    Ok(config)
}

/// Handles configuration update commands (--set-log-file, --clear-log-file,
/// --set-default-section) and saves the result.
pub fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_file(&Config::get_config_path(), args)?;

    if args.clear_log_file_path {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");

    Ok(())
}

/// Handles the --once command (quick view mode).
///
/// Builds the page for the requested selection once, prints it without
/// clearing the terminal and exits.
pub fn handle_once_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let state = initial_state(args, config)?;
    let mut rng = make_rng(args.seed);
    let now = ClockTime::now();

    let page = build_page(
        &state,
        now,
        &mut rng,
        RenderOptions {
            plain: args.plain,
            once: true,
        },
    )?;
    tracing::info!(
        "Printing page {} for section {} at {now}",
        page.page_number(),
        state.section()
    );

    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    page.render_buffered(&mut stdout())?;
    println!();

    Ok(())
}
