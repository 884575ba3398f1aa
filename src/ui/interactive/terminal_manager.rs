//! Terminal management for interactive UI
//!
//! Raw mode, the alternate screen and the window title are set up before the
//! loop starts and restored afterwards. Debug mode stays on the main screen so
//! log output remains in the scrollback.

use crate::constants::TERMINAL_TITLE;
use crate::error::AppError;
use crossterm::{
    cursor, execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::stdout;

/// Configuration for terminal management operations
#[derive(Debug, Clone, Default)]
pub struct TerminalConfig {
    pub debug_mode: bool,
}

/// Terminal manager responsible for setup and cleanup operations
pub struct TerminalManager {
    config: TerminalConfig,
}

impl TerminalManager {
    pub fn with_config(config: TerminalConfig) -> Self {
        Self { config }
    }

    /// Setup terminal for interactive mode
    /// Returns a handle to stdout that can be used for rendering
    pub fn setup_terminal(&self) -> Result<std::io::Stdout, AppError> {
        let mut stdout = stdout();

        enable_raw_mode()?;
        execute!(stdout, SetTitle(TERMINAL_TITLE))?;
        if !self.config.debug_mode {
            execute!(stdout, EnterAlternateScreen)?;
        }

        Ok(stdout)
    }

    /// Cleanup terminal after interactive mode
    /// Restores terminal to its original state
    pub fn cleanup_terminal(&self, mut stdout: std::io::Stdout) -> Result<(), AppError> {
        disable_raw_mode()?;
        if !self.config.debug_mode {
            execute!(stdout, LeaveAlternateScreen)?;
        }
        execute!(stdout, cursor::Show)?;
        Ok(())
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_config_default() {
        let config = TerminalConfig::default();
        assert!(!config.debug_mode);
    }

    #[test]
    fn test_terminal_manager_with_config() {
        let manager = TerminalManager::with_config(TerminalConfig { debug_mode: true });
        assert!(manager.config().debug_mode);
    }
}
