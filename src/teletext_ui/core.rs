// src/teletext_ui/core.rs - Teletext page model and buffered rendering

use crate::constants::ui::{DEFAULT_HEIGHT, DEFAULT_WIDTH, TITLE_WIDTH};
use crate::error::AppError;
use crate::league::{LeaderStat, MatchStatus, RosterPlayer, Score, StandingsEntry};
use crossterm::{execute, style::Print};
use std::io::Write;
use tracing::debug;

use crate::ui::teletext::colors::*;
pub use crate::ui::teletext::page_config::TeletextPageConfig;

use super::utils::get_ansi_code;

#[derive(Debug)]
pub struct TeletextPage {
    pub(super) page_number: u16,
    pub(super) title: String,
    pub(super) subheader: String,
    pub(super) content_rows: Vec<TeletextRow>,
    pub(super) current_page: usize,
    pub(super) screen_height: u16,
    pub(super) plain: bool,
    pub(super) show_footer: bool,
    pub(super) ignore_height_limit: bool,
    pub(super) header_date: Option<String>,
    pub(super) footer_controls: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TeletextRow {
    /// Heading inside the content area ("Идут сейчас")
    SectionHeader(String),
    MatchResult {
        pool: String,
        home_team: String,
        away_team: String,
        kickoff: String,
        status: MatchStatus,
        score: Option<Score>,
    },
    StandingsHeader,
    Standings(StandingsEntry),
    Leader {
        rank: usize,
        name: String,
        team: String,
        stat: LeaderStat,
    },
    TeamEntry {
        number: usize,
        name: String,
        selected: bool,
    },
    RosterHeader,
    RosterEntry(RosterPlayer),
    Message(String),
}

impl TeletextPage {
    /// Creates a new TeletextPage instance with the specified parameters.
    ///
    /// # Arguments
    /// * `page_number` - The teletext page number (e.g., 201 for the live board)
    /// * `title` - The title displayed at the top of the page
    /// * `subheader` - The subtitle displayed below the title
    /// * `plain` - Whether to render without colour sequences
    /// * `show_footer` - Whether to show the control footer
    /// * `ignore_height_limit` - Whether to ignore terminal height limits
    ///
    /// # Example
    /// ```
    /// use ipfl_teletext::TeletextPage;
    ///
    /// let page = TeletextPage::new(
    ///     201,
    ///     "IPFL".to_string(),
    ///     "LIVE".to_string(),
    ///     false,
    ///     true,
    ///     false,
    /// );
    /// ```
    pub fn new(
        page_number: u16,
        title: String,
        subheader: String,
        plain: bool,
        show_footer: bool,
        ignore_height_limit: bool,
    ) -> Self {
        let screen_height = if ignore_height_limit {
            DEFAULT_HEIGHT
        } else {
            crossterm::terminal::size()
                .map(|(_, h)| h)
                .unwrap_or(DEFAULT_HEIGHT)
        };

        TeletextPage {
            page_number,
            title,
            subheader,
            content_rows: Vec::new(),
            current_page: 0,
            screen_height,
            plain,
            show_footer,
            ignore_height_limit,
            header_date: None,
            footer_controls: None,
        }
    }

    /// Creates a new TeletextPage from a configuration struct.
    pub fn from_config(config: TeletextPageConfig) -> Self {
        Self::new(
            config.page_number,
            config.title,
            config.subheader,
            config.plain,
            config.show_footer,
            config.ignore_height_limit,
        )
    }

    pub fn page_number(&self) -> u16 {
        self.page_number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subheader(&self) -> &str {
        &self.subheader
    }

    pub fn rows(&self) -> &[TeletextRow] {
        &self.content_rows
    }

    pub fn add_row(&mut self, row: TeletextRow) {
        self.content_rows.push(row);
    }

    pub fn add_section_header(&mut self, text: impl Into<String>) {
        self.content_rows.push(TeletextRow::SectionHeader(text.into()));
    }

    /// Adds a free-text message, trimming indentation from each line.
    pub fn add_message(&mut self, message: &str) {
        let formatted_message = message
            .lines()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n");
        self.content_rows.push(TeletextRow::Message(formatted_message));
    }

    /// Test-friendly accessor for message rows.
    pub fn has_message(&self, message: &str) -> bool {
        self.content_rows
            .iter()
            .any(|row| matches!(row, TeletextRow::Message(m) if m == message))
    }

    /// Sets the date shown on the right of the header line.
    pub fn set_header_date(&mut self, date: impl Into<String>) {
        self.header_date = Some(date.into());
    }

    /// Overrides the key help shown in the footer.
    pub fn set_footer_controls(&mut self, controls: impl Into<String>) {
        self.footer_controls = Some(controls.into());
    }

    /// Updates the screen height used for pagination.
    pub fn set_screen_height(&mut self, height: u16) {
        self.screen_height = height;
    }

    /// Re-reads the terminal size after a resize event and keeps the current
    /// page in range.
    pub fn handle_resize(&mut self) {
        if self.ignore_height_limit {
            return;
        }
        if let Ok((_, height)) = crossterm::terminal::size() {
            debug!("Terminal resized, new height {height}");
            self.screen_height = height;
            let current = self.current_page;
            self.set_current_page(current);
        }
    }

    /// Builds the full screen as lines: header, subheader, blank line, the rows
    /// of the current page and the footer.
    pub fn render_lines(&self, width: usize) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.screen_height as usize);
        lines.push(self.header_line(width));
        lines.push(self.subheader_line(width));
        lines.push(String::new());

        let (visible_rows, _) = self.get_page_content();
        for row in visible_rows {
            lines.extend(super::formatting::format_row(row, self.plain));
        }

        if self.show_footer {
            lines.extend(super::footer::render_footer(
                width,
                self.total_pages(),
                self.footer_controls.as_deref(),
                self.ignore_height_limit,
                self.plain,
            ));
        }

        lines
    }

    fn header_line(&self, width: usize) -> String {
        let header_text = match &self.header_date {
            Some(date) => format!("IPFL {} {}", self.page_number, date),
            None => format!("IPFL {}", self.page_number),
        };
        let header_width = width.saturating_sub(TITLE_WIDTH);

        if self.plain {
            return format!(
                "{:<title_w$}{:>header_width$}",
                self.title,
                header_text,
                title_w = TITLE_WIDTH
            );
        }

        format!(
            "\x1b[48;5;{}m\x1b[38;5;{}m{:<title_w$}\x1b[48;5;{}m\x1b[38;5;231m{:>header_width$}\x1b[0m",
            get_ansi_code(title_bg(), 46),
            get_ansi_code(header_fg(), 21),
            self.title,
            get_ansi_code(header_bg(), 21),
            header_text,
            title_w = TITLE_WIDTH
        )
    }

    fn subheader_line(&self, width: usize) -> String {
        let total_pages = self.total_pages();
        let page_info = if total_pages > 1 && !self.ignore_height_limit {
            format!("{}/{}", self.current_page + 1, total_pages)
        } else {
            String::new()
        };
        let info_width = width.saturating_sub(self.subheader.chars().count());

        let text = format!("{}{:>info_width$}", self.subheader, page_info);
        if self.plain {
            text
        } else {
            format!(
                "\x1b[38;5;{}m{text}\x1b[0m",
                get_ansi_code(subheader_fg(), 46)
            )
        }
    }

    /// Renders the page using double buffering for reduced flickering.
    /// The whole screen is built in one buffer and written in one operation.
    ///
    /// In interactive mode every line is positioned absolutely and the footer
    /// sits on the last terminal row; otherwise lines are written one after
    /// another so the output stays in the scrollback.
    pub fn render_buffered<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let width = if self.ignore_height_limit {
            DEFAULT_WIDTH
        } else {
            execute!(out, crossterm::cursor::Hide)?;
            crossterm::terminal::size()
                .map(|(w, _)| w)
                .unwrap_or(DEFAULT_WIDTH)
        };

        let lines = self.render_lines(width as usize);
        let mut buffer = String::with_capacity(lines.iter().map(|l| l.len() + 8).sum());

        if self.ignore_height_limit {
            for line in &lines {
                buffer.push_str(line);
                buffer.push('\n');
            }
        } else {
            buffer.push_str("\x1b[H"); // Move to home position
            buffer.push_str("\x1b[0J"); // Clear from cursor down

            let footer_lines = if self.show_footer { 1 } else { 0 };
            let body_len = lines.len().saturating_sub(footer_lines);
            for (index, line) in lines.iter().take(body_len).enumerate() {
                buffer.push_str(&format!("\x1b[{};1H{line}", index + 1));
            }
            if let Some(footer) = lines.last().filter(|_| footer_lines > 0) {
                buffer.push_str(&format!("\x1b[{};1H{footer}", self.screen_height.max(1)));
            }
        }

        execute!(out, Print(buffer))?;
        if !self.ignore_height_limit {
            execute!(out, crossterm::cursor::Show)?;
        }
        out.flush()?;
        Ok(())
    }
}
