//! Interactive UI module for the ipfl_teletext application
//!
//! This module is organized into focused submodules:
//! - `state_manager`: Timers, the page on screen and the dashboard selection
//! - `input_handler`: Key bindings
//! - `event_handler`: Event polling and dispatch
//! - `refresh_manager`: Adaptive polling and auto-refresh timing
//! - `terminal_manager`: Raw mode and alternate screen handling
//! - `core`: Main interactive UI loop

mod core;
mod event_handler;
mod input_handler;
mod refresh_manager;
mod state_manager;
mod terminal_manager;

pub use core::*;
pub use input_handler::{KeyCommand, map_key_to_command};
