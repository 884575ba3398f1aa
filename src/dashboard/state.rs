//! Explicit presentation state of the dashboard.
//!
//! Everything a page builder needs to know about what the viewer has
//! selected lives in `DashboardState`. Transitions go through
//! `DashboardState::apply`, which consumes the old state and returns the new
//! one, so the interactive loop and the one-shot mode share the same rules.

use crate::constants::pages;
use crate::error::AppError;
use crate::league::{DateOffset, Division, Group, LEAGUE, LeaderStat, SeasonLeader};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Navigation tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Live,
    Schedule,
    Divisions,
    Standings,
    News,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Live,
        Section::Schedule,
        Section::Divisions,
        Section::Standings,
        Section::News,
    ];

    /// Key used on the command line and in the config file.
    pub fn key(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Live => "live",
            Section::Schedule => "schedule",
            Section::Divisions => "divisions",
            Section::Standings => "standings",
            Section::News => "news",
        }
    }

    /// Tab label shown in the subheader.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Live => "Live",
            Section::Schedule => "Расписание",
            Section::Divisions => "Дивизионы",
            Section::Standings => "Таблица",
            Section::News => "Новости",
        }
    }

    pub fn page_number(self) -> u16 {
        match self {
            Section::Home => pages::HOME,
            Section::Live => pages::LIVE,
            Section::Schedule => pages::SCHEDULE,
            Section::Divisions => pages::DIVISIONS,
            Section::Standings => pages::STANDINGS,
            Section::News => pages::NEWS,
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or_default()
    }

    /// Next tab, wrapping from the last to the first.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping from the first to the last.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = AppError;

    /// Accepts the key ("standings"), the tab label ("Таблица") or the
    /// section's page number ("301").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("stats") {
            return Ok(Section::Standings);
        }
        Self::ALL
            .into_iter()
            .find(|section| {
                section.key().eq_ignore_ascii_case(wanted)
                    || section.label().to_lowercase() == wanted.to_lowercase()
                    || section.page_number().to_string() == wanted
            })
            .ok_or_else(|| AppError::unknown_section(s))
    }
}

/// Leader board shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeaderBoard {
    #[default]
    Goals,
    Assists,
    Rating,
}

impl LeaderBoard {
    pub fn label(self) -> &'static str {
        match self {
            LeaderBoard::Goals => "Голы",
            LeaderBoard::Assists => "Ассисты",
            LeaderBoard::Rating => "Рейтинг",
        }
    }

    pub fn next(self) -> Self {
        match self {
            LeaderBoard::Goals => LeaderBoard::Assists,
            LeaderBoard::Assists => LeaderBoard::Rating,
            LeaderBoard::Rating => LeaderBoard::Goals,
        }
    }

    pub fn leaders(self) -> &'static [SeasonLeader] {
        match self {
            LeaderBoard::Goals => &LEAGUE.top_scorers,
            LeaderBoard::Assists => &LEAGUE.top_assisters,
            LeaderBoard::Rating => &LEAGUE.top_rated,
        }
    }

    /// Whether a stat value belongs on this board.
    pub fn matches(self, stat: &LeaderStat) -> bool {
        matches!(
            (self, stat),
            (LeaderBoard::Goals, LeaderStat::Goals(_))
                | (LeaderBoard::Assists, LeaderStat::Assists(_))
                | (LeaderBoard::Rating, LeaderStat::Rating(_))
        )
    }
}

/// User intent, decoupled from the key that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectSection(Section),
    NextSection,
    PreviousSection,
    NextDay,
    PreviousDay,
    NextDivision,
    PreviousDivision,
    NextGroup,
    NextLeaderBoard,
    /// Opens the roster of the n-th team (0-based) of the selected group.
    OpenRoster(usize),
    CloseRoster,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    section: Section,
    day: DateOffset,
    division_index: usize,
    group_index: usize,
    leader_board: LeaderBoard,
    roster_team: Option<&'static str>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(Section::default())
    }
}

impl DashboardState {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            day: DateOffset::Today,
            division_index: 0,
            group_index: 0,
            leader_board: LeaderBoard::default(),
            roster_team: None,
        }
    }

    /// Builds the starting state from command-line style selections.
    ///
    /// A team selection opens its roster and moves the division and group
    /// selection to where that team plays; it wins over `division`/`group`.
    pub fn from_selection(
        section: Section,
        day: DateOffset,
        division: Option<&str>,
        group: Option<&str>,
        team: Option<&str>,
    ) -> Result<Self, AppError> {
        let mut state = Self::new(section);
        state.day = day;

        if let Some(division) = division {
            state.division_index = LEAGUE.division_index(division)?;
        }
        if let Some(group) = group {
            let division = state.division();
            let wanted = division.group(group)?;
            state.group_index = division
                .groups
                .iter()
                .position(|g| g.letter == wanted.letter)
                .unwrap_or_default();
        }
        if let Some(team) = team {
            let team = LEAGUE.canonical_team_name(team)?;
            let (division, group) = LEAGUE.find_team(team)?;
            state.division_index = LEAGUE.division_index(division.key)?;
            state.group_index = division
                .groups
                .iter()
                .position(|g| g.letter == group.letter)
                .unwrap_or_default();
            state.roster_team = Some(team);
        }

        Ok(state)
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn day(&self) -> DateOffset {
        self.day
    }

    pub fn leader_board(&self) -> LeaderBoard {
        self.leader_board
    }

    pub fn roster_team(&self) -> Option<&'static str> {
        self.roster_team
    }

    pub fn division_index(&self) -> usize {
        self.division_index
    }

    pub fn group_index(&self) -> usize {
        self.group_index
    }

    pub fn division(&self) -> &'static Division {
        let divisions = &LEAGUE.divisions;
        &divisions[self.division_index % divisions.len()]
    }

    pub fn group(&self) -> &'static Group {
        let groups = &self.division().groups;
        &groups[self.group_index % groups.len()]
    }

    /// Applies one action and returns the resulting state.
    pub fn apply(self, action: Action) -> Self {
        let division_count = LEAGUE.divisions.len();
        let next = match action {
            Action::SelectSection(section) => Self {
                section,
                roster_team: None,
                ..self
            },
            Action::NextSection => Self {
                section: self.section.next(),
                roster_team: None,
                ..self
            },
            Action::PreviousSection => Self {
                section: self.section.previous(),
                roster_team: None,
                ..self
            },
            Action::NextDay => Self {
                day: self.day.later(),
                ..self
            },
            Action::PreviousDay => Self {
                day: self.day.earlier(),
                ..self
            },
            Action::NextDivision => Self {
                division_index: (self.division_index + 1) % division_count,
                group_index: 0,
                roster_team: None,
                ..self
            },
            Action::PreviousDivision => Self {
                division_index: (self.division_index + division_count - 1) % division_count,
                group_index: 0,
                roster_team: None,
                ..self
            },
            Action::NextGroup => Self {
                group_index: (self.group_index + 1) % self.division().groups.len(),
                roster_team: None,
                ..self
            },
            Action::NextLeaderBoard => Self {
                leader_board: self.leader_board.next(),
                ..self
            },
            Action::OpenRoster(index) => match self.group().teams.get(index) {
                Some(team) => Self {
                    roster_team: Some(*team),
                    ..self
                },
                None => {
                    tracing::debug!("No team at position {} in {}", index + 1, self.pool_label());
                    self
                }
            },
            Action::CloseRoster => Self {
                roster_team: None,
                ..self
            },
        };

        tracing::debug!(
            "Dashboard state: section={}, day={:?}, pool={}, roster={:?}",
            next.section,
            next.day,
            next.pool_label(),
            next.roster_team
        );
        next
    }

    /// "Север-A" style label of the selected group.
    pub fn pool_label(&self) -> String {
        self.division().pool_label(self.group())
    }
}
