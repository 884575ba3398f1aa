//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers so the league logic, renderer and
//! interactive loop agree on them.

/// Last match minute that still counts as live. A match whose hour is the
/// current hour is live through minute 50 and finished from minute 51.
pub const LIVE_LAST_MINUTE: u8 = 50;

/// Highest placeholder goal count for one side (inclusive)
pub const MAX_PLACEHOLDER_GOALS: u8 = 3;

/// Default interval between automatic re-renders in interactive mode
pub const DEFAULT_REFRESH_INTERVAL_SECONDS: u64 = 60;

/// Lower and upper bounds accepted for the refresh interval
pub const MIN_REFRESH_INTERVAL_SECONDS: u64 = 5;
pub const MAX_REFRESH_INTERVAL_SECONDS: u64 = 3600;

/// Name of the default log file
pub const LOG_FILE_NAME: &str = "ipfl_teletext.log";

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "ipfl_teletext";

/// Terminal title shown while the app runs
pub const TERMINAL_TITLE: &str = "IPFL 100";

/// UI polling intervals in milliseconds
pub mod polling {
    /// Polling interval for active use (< 5 seconds idle)
    pub const ACTIVE_MS: u64 = 50;

    /// Polling interval for semi-active use (5-30 seconds idle)
    pub const SEMI_ACTIVE_MS: u64 = 200;

    /// Polling interval for idle use (> 30 seconds idle)
    pub const IDLE_MS: u64 = 500;

    /// Threshold for considering user as idle (seconds)
    pub const IDLE_THRESHOLD_SECONDS: u64 = 30;

    /// Threshold for considering user as semi-active (seconds)
    pub const SEMI_ACTIVE_THRESHOLD_SECONDS: u64 = 5;
}

/// Teletext page numbers per section
pub mod pages {
    pub const HOME: u16 = 100;
    pub const LIVE: u16 = 201;
    pub const SCHEDULE: u16 = 202;
    pub const DIVISIONS: u16 = 300;
    pub const STANDINGS: u16 = 301;
    pub const NEWS: u16 = 400;
    pub const ROSTER: u16 = 350;
}

/// UI layout constants
pub mod ui {
    /// Width used when rendering outside the alternate screen
    pub const DEFAULT_WIDTH: u16 = 80;

    /// Height used when the terminal size is unknown
    pub const DEFAULT_HEIGHT: u16 = 24;

    /// Width of the title block in the header line
    pub const TITLE_WIDTH: usize = 20;

    /// Width of a team name column
    pub const TEAM_NAME_WIDTH: usize = 14;

    /// Width of the pool label column ("Восток-B")
    pub const POOL_WIDTH: usize = 10;

    /// Lines reserved for header, subheader, spacer and footer
    pub const RESERVED_LINES: u16 = 5;

    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;
}

/// Roster generation
pub mod roster {
    pub const GOALKEEPERS: usize = 2;
    pub const DEFENDERS: usize = 5;
    pub const MIDFIELDERS: usize = 5;
    pub const FORWARDS: usize = 3;

    /// Total squad size shown in the roster popup
    pub const SIZE: usize = GOALKEEPERS + DEFENDERS + MIDFIELDERS + FORWARDS;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "IPFL_LOG_FILE";

    /// Environment variable for the section shown at start-up
    pub const DEFAULT_SECTION: &str = "IPFL_DEFAULT_SECTION";

    /// Environment variable for the refresh interval in seconds
    pub const REFRESH_INTERVAL: &str = "IPFL_REFRESH_INTERVAL";

    /// Default tracing filter directive
    pub const DEFAULT_LOG_DIRECTIVE: &str = "ipfl_teletext=info";
}
