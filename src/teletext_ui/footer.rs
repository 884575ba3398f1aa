//! Footer rendering for teletext pages
//!
//! Interactive pages end in a single blue bar with the key help. Pages
//! printed with `--once` end in a blank line and the league credit instead.

use crate::teletext_ui::utils::get_ansi_code;
use crate::ui::teletext::colors::*;

/// Key help used when the page does not set its own.
pub const DEFAULT_CONTROLS: &str = "q=Выход";

/// Appended to the key help when the content spans several pages.
pub const PAGE_CONTROLS: &str = "←→=Страницы";

pub const CREDIT_LINE: &str = "© 2026 International Professional Football League";

/// Key help text for the footer bar.
pub fn footer_text(total_pages: usize, controls: Option<&str>) -> String {
    let controls = controls.unwrap_or(DEFAULT_CONTROLS);
    if total_pages > 1 {
        format!("{controls} {PAGE_CONTROLS}")
    } else {
        controls.to_string()
    }
}

/// Renders the footer as lines.
///
/// # Arguments
/// * `width` - The width of the terminal
/// * `total_pages` - The total number of pages
/// * `controls` - Optional key help overriding the default
/// * `once_mode` - Whether the page is printed once and not redrawn
/// * `plain` - Whether to skip colour sequences
///
/// In interactive mode exactly one line is returned, which the renderer
/// pins to the bottom row of the terminal.
pub fn render_footer(
    width: usize,
    total_pages: usize,
    controls: Option<&str>,
    once_mode: bool,
    plain: bool,
) -> Vec<String> {
    if once_mode {
        return vec![String::new(), CREDIT_LINE.to_string()];
    }

    let text = footer_text(total_pages, controls);
    let footer_width = width.saturating_sub(6);

    if plain {
        return vec![format!("   {text:^footer_width$}   ")];
    }

    vec![format!(
        "\x1b[48;5;{}m\x1b[38;5;21m{}\x1b[38;5;231m{:^width$}\x1b[38;5;21m{}\x1b[0m",
        get_ansi_code(header_bg(), 21),
        "   ",
        text,
        "   ",
        width = footer_width
    )]
}
