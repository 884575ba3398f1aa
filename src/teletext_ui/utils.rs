use crossterm::style::Color;

/// Helper function to extract ANSI color code from crossterm Color enum.
/// Provides a fallback value for non-ANSI colors.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}

/// Wraps text in a 256-colour foreground sequence unless plain output is requested.
pub fn paint(text: &str, color: Color, fallback: u8, plain: bool) -> String {
    if plain {
        text.to_string()
    } else {
        format!(
            "\x1b[38;5;{}m{text}\x1b[0m",
            get_ansi_code(color, fallback)
        )
    }
}

/// Truncates to at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
