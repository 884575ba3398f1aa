//! Row formatting: turns a `TeletextRow` into the terminal lines it occupies.

use super::core::TeletextRow;
use super::utils::{paint, truncate_chars};
use crate::constants::ui::{CONTENT_MARGIN, POOL_WIDTH, TEAM_NAME_WIDTH};
use crate::league::{MatchStatus, RosterPlayer, Score, StandingsEntry};
use crate::ui::teletext::colors::*;

/// Badge shown for finished matches.
pub const FINISHED_LABEL: &str = "ЗАВЕРШЕН";

/// Status column text: "ЗАВЕРШЕН", the live minute ("23'") or the kick-off time.
pub fn status_label(status: MatchStatus, kickoff: &str) -> String {
    match status {
        MatchStatus::Finished => FINISHED_LABEL.to_string(),
        MatchStatus::Live { minute } => format!("{minute}'"),
        MatchStatus::Upcoming => kickoff.to_string(),
    }
}

/// Number of terminal lines a row occupies. Must agree with `format_row`.
pub fn row_height(row: &TeletextRow) -> u16 {
    match row {
        TeletextRow::Message(message) => message.lines().count().max(1) as u16 + 1, // + spacer
        TeletextRow::SectionHeader(_) => 2, // heading + spacer
        _ => 1,
    }
}

pub fn format_row(row: &TeletextRow, plain: bool) -> Vec<String> {
    let margin = " ".repeat(CONTENT_MARGIN);
    match row {
        TeletextRow::SectionHeader(text) => vec![
            format!("{margin}{}", paint(text, subheader_fg(), 46, plain)),
            String::new(),
        ],
        TeletextRow::MatchResult {
            pool,
            home_team,
            away_team,
            kickoff,
            status,
            score,
        } => vec![format!(
            "{margin}{}",
            format_match_line(pool, home_team, away_team, kickoff, *status, *score, plain)
        )],
        TeletextRow::StandingsHeader => vec![format!(
            "{margin}{}",
            paint(&standings_header(), subheader_fg(), 46, plain)
        )],
        TeletextRow::Standings(entry) => {
            vec![format!("{margin}{}", paint(&standings_line(entry), text_fg(), 231, plain))]
        }
        TeletextRow::Leader {
            rank,
            name,
            team,
            stat,
        } => vec![format!(
            "{margin}{} {} {} {}",
            paint(&format!("{rank:>2}."), result_fg(), 46, plain),
            paint(&format!("{:<14}", truncate_chars(name, 14)), text_fg(), 231, plain),
            paint(&format!("{:<14}", truncate_chars(team, 14)), pool_fg(), 51, plain),
            paint(&format!("{:>5}", stat.display_value()), live_fg(), 226, plain),
        )],
        TeletextRow::TeamEntry {
            number,
            name,
            selected,
        } => {
            let marker = if *selected { "▶" } else { " " };
            let color = if *selected { selected_fg() } else { text_fg() };
            vec![format!(
                "{margin}{} {}",
                paint(marker, selected_fg(), 201, plain),
                paint(&format!("{number}. {name}"), color, 231, plain)
            )]
        }
        TeletextRow::RosterHeader => vec![format!(
            "{margin}{}",
            paint(&roster_header(), subheader_fg(), 46, plain)
        )],
        TeletextRow::RosterEntry(player) => {
            vec![format!("{margin}{}", paint(&roster_line(player), text_fg(), 231, plain))]
        }
        TeletextRow::Message(message) => {
            let mut lines: Vec<String> = message
                .lines()
                .map(|line| format!("{margin}{}", paint(line, text_fg(), 231, plain)))
                .collect();
            if lines.is_empty() {
                lines.push(margin.clone());
            }
            lines.push(String::new());
            lines
        }
    }
}

fn format_match_line(
    pool: &str,
    home_team: &str,
    away_team: &str,
    kickoff: &str,
    status: MatchStatus,
    score: Option<Score>,
    plain: bool,
) -> String {
    let teams = format!(
        "{:<w$} - {:<w$}",
        truncate_chars(home_team, TEAM_NAME_WIDTH),
        truncate_chars(away_team, TEAM_NAME_WIDTH),
        w = TEAM_NAME_WIDTH
    );
    let score_text = match score {
        Some(score) if status.has_score() => score.to_string(),
        _ => String::new(),
    };
    let status_text = status_label(status, kickoff);
    let status_color = match status {
        MatchStatus::Finished => result_fg(),
        MatchStatus::Live { .. } => live_fg(),
        MatchStatus::Upcoming => text_fg(),
    };

    format!(
        "{} {} {} {}",
        paint(
            &format!("{:<w$}", truncate_chars(pool, POOL_WIDTH), w = POOL_WIDTH),
            pool_fg(),
            51,
            plain
        ),
        paint(&teams, text_fg(), 231, plain),
        paint(&format!("{score_text:>5}"), result_fg(), 46, plain),
        paint(&status_text, status_color, 231, plain)
    )
}

fn standings_header() -> String {
    format!(
        "{:>3}  {:<w$}{:>3} {:>3} {:>3} {:>3} {:>7} {:>4} {:>3}",
        "#",
        "Команда",
        "И",
        "В",
        "Н",
        "П",
        "Мячи",
        "РМ",
        "О",
        w = TEAM_NAME_WIDTH
    )
}

fn standings_line(entry: &StandingsEntry) -> String {
    let record = &entry.record;
    let goals = format!("{}-{}", record.goals_for, record.goals_against);
    format!(
        "{:>3}  {:<w$}{:>3} {:>3} {:>3} {:>3} {:>7} {:>+4} {:>3}",
        entry.position,
        truncate_chars(&record.name, TEAM_NAME_WIDTH),
        record.played,
        record.won,
        record.drawn,
        record.lost,
        goals,
        record.goal_diff(),
        record.points(),
        w = TEAM_NAME_WIDTH
    )
}

fn roster_header() -> String {
    format!(
        "{:>3} {:<22} {:<3} {:>3} {:>3} {:>5}",
        "№", "Игрок", "Поз", "Г", "П", "Рейт"
    )
}

fn roster_line(player: &RosterPlayer) -> String {
    format!(
        "{:>3} {:<22} {:<3} {:>3} {:>3} {:>5.1}",
        player.number,
        truncate_chars(&player.name, 22),
        player.position.short_label(),
        player.goals,
        player.assists,
        player.rating
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::{Position, TeamRecord};

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(MatchStatus::Finished, "10:00"), "ЗАВЕРШЕН");
        assert_eq!(status_label(MatchStatus::Live { minute: 7 }, "10:00"), "7'");
        assert_eq!(status_label(MatchStatus::Upcoming, "11:00"), "11:00");
    }

    #[test]
    fn test_match_line_upcoming_has_no_score() {
        let row = TeletextRow::MatchResult {
            pool: "Север-B".to_string(),
            home_team: "Glasgow".to_string(),
            away_team: "Narvik".to_string(),
            kickoff: "13:00".to_string(),
            status: MatchStatus::Upcoming,
            score: None,
        };
        let lines = format_row(&row, true);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Север-B"));
        assert!(lines[0].contains("Glasgow"));
        assert!(lines[0].contains("Narvik"));
        assert!(lines[0].trim_end().ends_with("13:00"));
        // Pool label and team separator only, no score
        assert_eq!(lines[0].matches('-').count(), 2);
    }

    #[test]
    fn test_match_line_live_shows_minute_and_score() {
        let row = TeletextRow::MatchResult {
            pool: "Юг-A".to_string(),
            home_team: "Cairo".to_string(),
            away_team: "Aden".to_string(),
            kickoff: "10:00".to_string(),
            status: MatchStatus::Live { minute: 33 },
            score: Some(Score { home: 2, away: 1 }),
        };
        let line = &format_row(&row, true)[0];
        assert!(line.contains("2-1"));
        assert!(line.trim_end().ends_with("33'"));
    }

    #[test]
    fn test_standings_line_columns() {
        let entry = StandingsEntry {
            position: 1,
            record: TeamRecord::from_results("Bergen", 3, 2, 1, 10, 6),
        };
        let line = standings_line(&entry);
        assert!(line.contains("Bergen"));
        assert!(line.contains("10-6"));
        assert!(line.contains("+4"));
        assert!(line.trim_end().ends_with("11"));
    }

    #[test]
    fn test_roster_line() {
        let player = RosterPlayer {
            number: 9,
            name: "Luca Rossi".to_string(),
            position: Position::Forward,
            goals: 14,
            assists: 3,
            rating: 8.25,
        };
        let line = roster_line(&player);
        assert!(line.starts_with("  9 Luca Rossi"));
        assert!(line.contains("НП"));
        assert!(line.contains(" 14"));
    }

    #[test]
    fn test_row_heights_match_formatting() {
        let rows = vec![
            TeletextRow::SectionHeader("Идут сейчас".to_string()),
            TeletextRow::Message("Раздел\nв разработке".to_string()),
            TeletextRow::StandingsHeader,
            TeletextRow::TeamEntry {
                number: 1,
                name: "Tokyo".to_string(),
                selected: true,
            },
        ];
        for row in &rows {
            assert_eq!(format_row(row, true).len() as u16, row_height(row), "{row:?}");
        }
    }
}
