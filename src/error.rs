use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Caller contract violations on the league logic
    #[error("Scheduled hour out of range (0-23): {hour}")]
    InvalidHour { hour: u8 },

    #[error("Minute out of range (0-59): {minute}")]
    InvalidMinute { minute: u8 },

    #[error("Date offset must be -1, 0 or 1, got {offset}")]
    InvalidDateOffset { offset: i8 },

    // Lookups against the static league catalog
    #[error("Unknown division: {0}")]
    UnknownDivision(String),

    #[error("Unknown group: {0}")]
    UnknownGroup(String),

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    pub fn invalid_hour(hour: u8) -> Self {
        Self::InvalidHour { hour }
    }

    pub fn invalid_minute(minute: u8) -> Self {
        Self::InvalidMinute { minute }
    }

    pub fn invalid_date_offset(offset: i8) -> Self {
        Self::InvalidDateOffset { offset }
    }

    pub fn unknown_division(name: impl Into<String>) -> Self {
        Self::UnknownDivision(name.into())
    }

    pub fn unknown_group(name: impl Into<String>) -> Self {
        Self::UnknownGroup(name.into())
    }

    pub fn unknown_team(name: impl Into<String>) -> Self {
        Self::UnknownTeam(name.into())
    }

    pub fn unknown_section(name: impl Into<String>) -> Self {
        Self::UnknownSection(name.into())
    }

    /// Check if error comes from bad caller input rather than the environment
    /// (file system, config parsing, logger setup)
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AppError::InvalidHour { .. }
                | AppError::InvalidMinute { .. }
                | AppError::InvalidDateOffset { .. }
                | AppError::UnknownDivision(_)
                | AppError::UnknownGroup(_)
                | AppError::UnknownTeam(_)
                | AppError::UnknownSection(_)
        )
    }
}
