//! Dashboard sections, selection state and the page builders that render them.

pub mod pages;
pub mod state;

pub use pages::{RenderOptions, build_page};
pub use state::{Action, DashboardState, LeaderBoard, Section};
