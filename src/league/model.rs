//! Core league value types shared by the ranking, status and rendering code.

use crate::error::AppError;
use chrono::{Local, Timelike, Utc};
use std::fmt;
use std::str::FromStr;

/// One team's line in a standings table.
///
/// Counts are signed: the placeholder generator derives `drawn` by subtraction
/// and may produce a negative value, which is kept visible rather than clamped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeamRecord {
    pub name: String,
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
}

impl TeamRecord {
    /// Builds a record from results, deriving `played` as `won + drawn + lost`.
    pub fn from_results(
        name: impl Into<String>,
        won: i32,
        drawn: i32,
        lost: i32,
        goals_for: i32,
        goals_against: i32,
    ) -> Self {
        Self {
            name: name.into(),
            played: won + drawn + lost,
            won,
            drawn,
            lost,
            goals_for,
            goals_against,
        }
    }

    pub fn goal_diff(&self) -> i32 {
        self.goals_for - self.goals_against
    }

    /// Three points for a win, one for a draw.
    pub fn points(&self) -> i32 {
        self.won * 3 + self.drawn
    }

    /// True when `played == won + drawn + lost`.
    pub fn is_consistent(&self) -> bool {
        self.played == self.won + self.drawn + self.lost
    }

    pub fn has_negative_draws(&self) -> bool {
        self.drawn < 0
    }
}

/// Day a fixture belongs to, relative to the viewer's today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateOffset {
    Yesterday,
    Today,
    Tomorrow,
}

impl DateOffset {
    pub const ALL: [DateOffset; 3] = [DateOffset::Yesterday, DateOffset::Today, DateOffset::Tomorrow];

    pub fn as_i8(self) -> i8 {
        match self {
            DateOffset::Yesterday => -1,
            DateOffset::Today => 0,
            DateOffset::Tomorrow => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateOffset::Yesterday => "Вчера",
            DateOffset::Today => "Сегодня",
            DateOffset::Tomorrow => "Завтра",
        }
    }

    /// Next day, stopping at tomorrow.
    pub fn later(self) -> Self {
        match self {
            DateOffset::Yesterday => DateOffset::Today,
            DateOffset::Today | DateOffset::Tomorrow => DateOffset::Tomorrow,
        }
    }

    /// Previous day, stopping at yesterday.
    pub fn earlier(self) -> Self {
        match self {
            DateOffset::Tomorrow => DateOffset::Today,
            DateOffset::Today | DateOffset::Yesterday => DateOffset::Yesterday,
        }
    }

    /// Calendar date this offset points at, in `%d.%m.%Y` form.
    pub fn display_date(self) -> String {
        let today = Utc::now().with_timezone(&Local).date_naive();
        let date = match self {
            DateOffset::Yesterday => today.pred_opt().unwrap_or(today),
            DateOffset::Today => today,
            DateOffset::Tomorrow => today.succ_opt().unwrap_or(today),
        };
        date.format("%d.%m.%Y").to_string()
    }
}

impl TryFrom<i8> for DateOffset {
    type Error = AppError;

    fn try_from(offset: i8) -> Result<Self, Self::Error> {
        match offset {
            -1 => Ok(DateOffset::Yesterday),
            0 => Ok(DateOffset::Today),
            1 => Ok(DateOffset::Tomorrow),
            other => Err(AppError::invalid_date_offset(other)),
        }
    }
}

impl FromStr for DateOffset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yesterday" | "-1" => Ok(DateOffset::Yesterday),
            "today" | "0" => Ok(DateOffset::Today),
            "tomorrow" | "1" | "+1" => Ok(DateOffset::Tomorrow),
            _ => Err(AppError::config_error(format!(
                "Invalid day '{s}', expected yesterday, today or tomorrow"
            ))),
        }
    }
}

/// Wall-clock hour and minute as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, AppError> {
        if hour > 23 {
            return Err(AppError::invalid_hour(hour));
        }
        if minute > 59 {
            return Err(AppError::invalid_minute(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Current local time. Uses UTC internally and converts for display, like
    /// the rest of the date handling.
    pub fn now() -> Self {
        Self::from_time(&Utc::now().with_timezone(&Local))
    }

    pub fn from_time<T: Timelike>(time: &T) -> Self {
        // chrono guarantees hour < 24 and minute < 60
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A scheduled pairing, built once from the static catalog and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fixture {
    /// Division-group label such as "Север-A"
    pub pool: String,
    pub scheduled_hour: u8,
    pub home_team: String,
    pub away_team: String,
    pub date_offset: DateOffset,
}

impl Fixture {
    /// Kick-off as shown on the board, e.g. "09:00".
    pub fn kickoff(&self) -> String {
        format!("{:02}:00", self.scheduled_hour)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    Finished,
    Live { minute: u8 },
    Upcoming,
}

impl MatchStatus {
    pub fn is_live(&self) -> bool {
        matches!(self, MatchStatus::Live { .. })
    }

    /// Whether a score line is shown for this status.
    pub fn has_score(&self) -> bool {
        !matches!(self, MatchStatus::Upcoming)
    }
}

/// Placeholder score. Values carry no meaning beyond being non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// A fixture together with the status and score derived for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMatch {
    pub fixture: Fixture,
    pub status: MatchStatus,
    pub score: Option<Score>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_points_and_goal_diff() {
        let record = TeamRecord::from_results("Bergen", 3, 2, 1, 10, 6);
        assert_eq!(record.points(), 11);
        assert_eq!(record.goal_diff(), 4);
        assert_eq!(record.played, 6);
        assert!(record.is_consistent());
    }

    #[test]
    fn test_negative_goal_diff() {
        let record = TeamRecord::from_results("Aden", 0, 1, 5, 2, 13);
        assert_eq!(record.goal_diff(), -11);
        assert_eq!(record.points(), 1);
    }

    #[test]
    fn test_negative_draws_detected() {
        let record = TeamRecord {
            name: "Riga".to_string(),
            played: 20,
            won: 14,
            drawn: -3,
            lost: 9,
            goals_for: 30,
            goals_against: 25,
        };
        assert!(record.has_negative_draws());
        assert!(record.is_consistent());
        assert_eq!(record.points(), 39);
    }

    #[test]
    fn test_date_offset_conversions() {
        assert_eq!(DateOffset::try_from(-1).unwrap(), DateOffset::Yesterday);
        assert_eq!(DateOffset::try_from(0).unwrap(), DateOffset::Today);
        assert_eq!(DateOffset::try_from(1).unwrap(), DateOffset::Tomorrow);
        assert!(matches!(
            DateOffset::try_from(2),
            Err(AppError::InvalidDateOffset { offset: 2 })
        ));

        for offset in DateOffset::ALL {
            assert_eq!(DateOffset::try_from(offset.as_i8()).unwrap(), offset);
        }
    }

    #[test]
    fn test_date_offset_from_str() {
        assert_eq!("yesterday".parse::<DateOffset>().unwrap(), DateOffset::Yesterday);
        assert_eq!("Today".parse::<DateOffset>().unwrap(), DateOffset::Today);
        assert_eq!("+1".parse::<DateOffset>().unwrap(), DateOffset::Tomorrow);
        assert!("next week".parse::<DateOffset>().is_err());
    }

    #[test]
    fn test_date_offset_stepping_saturates() {
        assert_eq!(DateOffset::Tomorrow.later(), DateOffset::Tomorrow);
        assert_eq!(DateOffset::Yesterday.earlier(), DateOffset::Yesterday);
        assert_eq!(DateOffset::Yesterday.later(), DateOffset::Today);
        assert_eq!(DateOffset::Tomorrow.earlier(), DateOffset::Today);
    }

    #[test]
    fn test_clock_time_validation() {
        assert!(ClockTime::new(23, 59).is_ok());
        assert!(matches!(
            ClockTime::new(24, 0),
            Err(AppError::InvalidHour { hour: 24 })
        ));
        assert!(matches!(
            ClockTime::new(10, 60),
            Err(AppError::InvalidMinute { minute: 60 })
        ));
    }

    #[test]
    fn test_clock_time_from_chrono() {
        let time = NaiveTime::from_hms_opt(7, 5, 30).unwrap();
        let clock = ClockTime::from_time(&time);
        assert_eq!(clock.hour(), 7);
        assert_eq!(clock.minute(), 5);
        assert_eq!(clock.to_string(), "07:05");
    }

    #[test]
    fn test_fixture_kickoff_format() {
        let fixture = Fixture {
            pool: "Север-A".to_string(),
            scheduled_hour: 9,
            home_team: "Murmansk".to_string(),
            away_team: "Helsinki".to_string(),
            date_offset: DateOffset::Today,
        };
        assert_eq!(fixture.kickoff(), "09:00");
    }

    #[test]
    fn test_score_display() {
        assert_eq!(Score { home: 3, away: 0 }.to_string(), "3-0");
    }
}
