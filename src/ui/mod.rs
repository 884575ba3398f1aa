pub mod interactive;
pub mod teletext;

pub use interactive::{InteractiveOptions, run_interactive_ui};
