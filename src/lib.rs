//! International Professional Football League (IPFL) Teletext Dashboard Library
//!
//! This library provides the league logic behind the IPFL dashboard (standings
//! ranking and match status resolution), the static league catalog, placeholder
//! data generation, and teletext-style page rendering.
//!
//! # Examples
//!
//! ```rust
//! use ipfl_teletext::dashboard::{DashboardState, RenderOptions, Section, build_page};
//! use ipfl_teletext::error::AppError;
//! use ipfl_teletext::league::{ClockTime, make_rng};
//!
//! fn main() -> Result<(), AppError> {
//!     let state = DashboardState::new(Section::Live);
//!     let now = ClockTime::new(14, 20)?;
//!     let mut rng = make_rng(Some(2026));
//!
//!     let page = build_page(
//!         &state,
//!         now,
//!         &mut rng,
//!         RenderOptions { plain: true, once: true },
//!     )?;
//!
//!     let mut stdout = std::io::stdout();
//!     page.render_buffered(&mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod league;
pub mod teletext_ui;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use dashboard::{Action, DashboardState, Section, build_page};
pub use error::AppError;
pub use league::{
    ClockTime, DateOffset, Fixture, MatchStatus, TeamRecord, rank_standings, resolve_match_status,
};
pub use teletext_ui::{TeletextPage, TeletextRow};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
