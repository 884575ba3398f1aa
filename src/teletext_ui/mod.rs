// src/teletext_ui/mod.rs - Teletext page model, pagination and rendering

pub mod core;
pub mod footer;
pub mod formatting;
pub mod pagination;
pub mod utils;

pub use core::*;

pub use utils::get_ansi_code;
