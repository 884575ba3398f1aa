use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::stdout;

const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

const TELETEXT_WHITE: Color = Color::AnsiValue(231);
const TELETEXT_CYAN: Color = Color::AnsiValue(51);

/// Builds the framed lines of a status box. Lines with a highlight colour
/// are split at the first ':' so only the value part is coloured.
fn status_box_lines(lines: &[(String, Option<Color>)]) -> (usize, String, String, String) {
    let max_content_width = lines
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0);
    let box_width = max_content_width + 4; // 2 for borders, 2 for padding
    let border = format!("╔{:═<width$}╗", "", width = box_width - 2);
    let sep = format!("╠{:═<width$}╣", "", width = box_width - 2);
    let bottom = format!("╚{:═<width$}╝", "", width = box_width - 2);
    (max_content_width, border, sep, bottom)
}

/// Helper to print a dynamic-width version status box with optional color highlights
pub fn print_version_status_box(lines: Vec<(String, Option<Color>)>) {
    let (max_content_width, border, sep, bottom) = status_box_lines(&lines);

    execute!(
        stdout(),
        SetForegroundColor(TELETEXT_WHITE),
        Print(format!("{border}\n"))
    )
    .ok();

    for (i, (line, color)) in lines.iter().enumerate() {
        match (color, line.split_once(':')) {
            (Some(c), Some((pre, col))) => {
                let pre = format!("║ {pre}:");
                let col = col.trim_start();
                let used = pre.chars().count() - 2 + col.chars().count();
                let pad = max_content_width.saturating_sub(used);
                execute!(
                    stdout(),
                    SetForegroundColor(TELETEXT_WHITE),
                    Print(pre),
                    SetForegroundColor(*c),
                    Print(col),
                    SetForegroundColor(TELETEXT_WHITE),
                    Print(format!("{:pad$} ║\n", "")),
                )
                .ok();
            }
            (Some(c), None) => {
                execute!(
                    stdout(),
                    SetForegroundColor(*c),
                    Print(format!("║ {line:<max_content_width$} ║")),
                    SetForegroundColor(TELETEXT_WHITE),
                    Print("\n")
                )
                .ok();
            }
            (None, _) => {
                execute!(
                    stdout(),
                    SetForegroundColor(TELETEXT_WHITE),
                    Print(format!("║ {line:<max_content_width$} ║\n")),
                )
                .ok();
            }
        }
        if i == 0 && lines.len() > 2 {
            execute!(stdout(), Print(format!("{sep}\n"))).ok();
        }
    }

    execute!(stdout(), Print(format!("{bottom}\n")), ResetColor).ok();
}

/// Prints the version box shown by `--version`.
pub fn print_version_info() {
    println!();
    print_version_status_box(vec![
        ("IPFL Teletext Status".to_string(), None),
        (String::new(), None),
        (
            format!("Version: {CURRENT_VERSION}"),
            Some(TELETEXT_WHITE),
        ),
        (format!("Package: {CRATE_NAME}"), Some(TELETEXT_CYAN)),
        (String::new(), None),
        ("All match numbers are placeholder data.".to_string(), None),
    ]);
}

pub fn print_logo() {
    execute!(
        stdout(),
        SetForegroundColor(TELETEXT_CYAN),
        Print(format!(
            "\n{}",
            r#"
██╗██████╗░███████╗██╗░░░░░  ░░███╗░░░█████╗░░█████╗░
██║██╔══██╗██╔════╝██║░░░░░  ░████║░░██╔══██╗██╔══██╗
██║██████╔╝█████╗░░██║░░░░░  ██╔██║░░██║░░██║██║░░██║
██║██╔═══╝░██╔══╝░░██║░░░░░  ╚═╝██║░░██║░░██║██║░░██║
██║██║░░░░░██║░░░░░███████╗  ███████╗╚█████╔╝╚█████╔╝
╚═╝╚═╝░░░░░╚═╝░░░░░╚══════╝  ╚══════╝░╚════╝░░╚════╝░
"#
        )),
        ResetColor
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_box_fits_longest_line() {
        let lines = vec![
            ("Title".to_string(), None),
            ("Version: 1.2.3".to_string(), Some(TELETEXT_WHITE)),
        ];
        let (width, border, sep, bottom) = status_box_lines(&lines);
        assert_eq!(width, "Version: 1.2.3".chars().count());
        assert_eq!(border.chars().count(), width + 4);
        assert_eq!(sep.chars().count(), width + 4);
        assert!(bottom.starts_with('╚') && bottom.ends_with('╝'));
    }

    #[test]
    fn test_empty_box() {
        let (width, border, _, _) = status_box_lines(&[]);
        assert_eq!(width, 0);
        assert_eq!(border, "╔══╗");
    }
}
