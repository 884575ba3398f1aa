use crate::constants::{MAX_REFRESH_INTERVAL_SECONDS, MIN_REFRESH_INTERVAL_SECONDS};
use crate::error::AppError;
use crate::league::LEAGUE;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `log_file_path` - Optional log file path to validate
/// * `default_division` - Division key or name opened by default
/// * `refresh_interval_seconds` - Auto-refresh interval of the interactive view
///
/// # Validation Rules
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
/// - The default division must exist in the league
/// - The refresh interval must lie within the supported bounds
pub fn validate_config(
    log_file_path: &Option<String>,
    default_division: &str,
    refresh_interval_seconds: u64,
) -> Result<(), AppError> {
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    if LEAGUE.division(default_division).is_err() {
        return Err(AppError::config_error(format!(
            "Unknown default division '{default_division}'"
        )));
    }

    if !(MIN_REFRESH_INTERVAL_SECONDS..=MAX_REFRESH_INTERVAL_SECONDS)
        .contains(&refresh_interval_seconds)
    {
        return Err(AppError::config_error(format!(
            "Refresh interval must be between {MIN_REFRESH_INTERVAL_SECONDS} and {MAX_REFRESH_INTERVAL_SECONDS} seconds, got {refresh_interval_seconds}"
        )));
    }

    Ok(())
}
