//! Static league configuration: divisions, groups, teams, the daily fixture
//! lists and the season leader boards.
//!
//! Everything here is built once on first access and only read afterwards.

use super::model::{DateOffset, Fixture};
use crate::error::AppError;
use once_cell::sync::Lazy;

/// Round-robin pairings (home index, away index) for a four-team group.
const ROUND_ROBIN: [(usize, usize); 6] = [(0, 1), (2, 3), (0, 2), (1, 3), (0, 3), (1, 2)];

/// Hours between two kick-offs of the same group.
const KICKOFF_SPACING_HOURS: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub letter: &'static str,
    pub teams: [&'static str; 4],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division {
    /// Lookup key used on the command line and in config ("north")
    pub key: &'static str,
    /// Display name ("Север")
    pub name: &'static str,
    pub groups: Vec<Group>,
}

impl Division {
    pub fn group(&self, letter: &str) -> Result<&Group, AppError> {
        self.groups
            .iter()
            .find(|g| g.letter.eq_ignore_ascii_case(letter))
            .ok_or_else(|| AppError::unknown_group(format!("{}-{letter}", self.key)))
    }

    /// Pool label shown on the boards, e.g. "Север-A".
    pub fn pool_label(&self, group: &Group) -> String {
        format!("{}-{}", self.name, group.letter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LeaderStat {
    Goals(u32),
    Assists(u32),
    Rating(f32),
}

impl LeaderStat {
    pub fn display_value(&self) -> String {
        match self {
            LeaderStat::Goals(v) | LeaderStat::Assists(v) => v.to_string(),
            LeaderStat::Rating(r) => format!("{r:.1}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonLeader {
    pub name: &'static str,
    pub team: &'static str,
    pub stat: LeaderStat,
}

/// The whole league as a lookup structure.
#[derive(Debug)]
pub struct League {
    pub divisions: Vec<Division>,
    fixtures: Vec<Fixture>,
    pub top_scorers: Vec<SeasonLeader>,
    pub top_assisters: Vec<SeasonLeader>,
    pub top_rated: Vec<SeasonLeader>,
}

impl League {
    fn build() -> Self {
        let divisions = vec![
            Division {
                key: "north",
                name: "Север",
                groups: vec![
                    Group {
                        letter: "A",
                        teams: ["Murmansk", "Helsinki", "Stockholm", "Bergen"],
                    },
                    Group {
                        letter: "B",
                        teams: ["Glasgow", "Narvik", "Edinburgh", "Riga"],
                    },
                ],
            },
            Division {
                key: "west",
                name: "Запад",
                groups: vec![
                    Group {
                        letter: "A",
                        teams: ["Chicago", "Turin", "Cadiz", "Kingston"],
                    },
                    Group {
                        letter: "B",
                        teams: ["Cologne", "Verdun", "Dakar", "Tunis"],
                    },
                ],
            },
            Division {
                key: "south",
                name: "Юг",
                groups: vec![
                    Group {
                        letter: "A",
                        teams: ["Krasnodar", "Cairo", "Damascus", "Aden"],
                    },
                    Group {
                        letter: "B",
                        teams: ["Plymouth", "Makhachkala", "Lahore", "Muscat"],
                    },
                ],
            },
            Division {
                key: "east",
                name: "Восток",
                groups: vec![
                    Group {
                        letter: "A",
                        teams: ["Tokyo", "Seoul", "Shanghai", "Manila"],
                    },
                    Group {
                        letter: "B",
                        teams: ["Beijing", "Cebu", "Canberra", "Magadan"],
                    },
                ],
            },
        ];

        let fixtures = build_fixtures(&divisions);

        let top_scorers = vec![
            leader("Eriksson", "Stockholm", LeaderStat::Goals(47)),
            leader("Silva", "Turin", LeaderStat::Goals(42)),
            leader("Nakamura", "Tokyo", LeaderStat::Goals(39)),
            leader("O'Connor", "Cork", LeaderStat::Goals(38)),
            leader("Martinez", "Cadiz", LeaderStat::Goals(36)),
        ];
        let top_assisters = vec![
            leader("Petrov", "Murmansk", LeaderStat::Assists(34)),
            leader("Anderson", "Glasgow", LeaderStat::Assists(31)),
            leader("Chen", "Shanghai", LeaderStat::Assists(29)),
            leader("Ibrahim", "Cairo", LeaderStat::Assists(27)),
            leader("Santos", "Lima", LeaderStat::Assists(25)),
        ];
        let top_rated = vec![
            leader("Johansson", "Helsinki", LeaderStat::Rating(9.2)),
            leader("Volkov", "Krasnodar", LeaderStat::Rating(9.1)),
            leader("Kim", "Seoul", LeaderStat::Rating(8.9)),
            leader("Murphy", "Edinburgh", LeaderStat::Rating(8.8)),
            leader("Garcia", "Mexico", LeaderStat::Rating(8.7)),
        ];

        League {
            divisions,
            fixtures,
            top_scorers,
            top_assisters,
            top_rated,
        }
    }

    pub fn division(&self, key: &str) -> Result<&Division, AppError> {
        let wanted = key.trim();
        self.divisions
            .iter()
            .find(|d| d.key.eq_ignore_ascii_case(wanted) || d.name == wanted)
            .ok_or_else(|| AppError::unknown_division(key))
    }

    pub fn division_index(&self, key: &str) -> Result<usize, AppError> {
        let division = self.division(key)?;
        Ok(self
            .divisions
            .iter()
            .position(|d| d.key == division.key)
            .unwrap_or_default())
    }

    /// Finds the division and group a team plays in. Case-insensitive.
    pub fn find_team(&self, team: &str) -> Result<(&Division, &Group), AppError> {
        let wanted = team.trim();
        self.divisions
            .iter()
            .flat_map(|d| d.groups.iter().map(move |g| (d, g)))
            .find(|(_, g)| g.teams.iter().any(|t| t.eq_ignore_ascii_case(wanted)))
            .ok_or_else(|| AppError::unknown_team(team))
    }

    /// Canonical spelling of a team name.
    pub fn canonical_team_name(&self, team: &str) -> Result<&'static str, AppError> {
        let (_, group) = self.find_team(team)?;
        group
            .teams
            .iter()
            .copied()
            .find(|t| t.eq_ignore_ascii_case(team.trim()))
            .ok_or_else(|| AppError::unknown_team(team))
    }

    pub fn all_teams(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.divisions
            .iter()
            .flat_map(|d| d.groups.iter())
            .flat_map(|g| g.teams.iter().copied())
    }

    /// All fixtures of one day, ordered by kick-off hour.
    pub fn fixtures_for(&self, day: DateOffset) -> Vec<&Fixture> {
        self.fixtures.iter().filter(|f| f.date_offset == day).collect()
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }
}

fn leader(name: &'static str, team: &'static str, stat: LeaderStat) -> SeasonLeader {
    SeasonLeader { name, team, stat }
}

/// Each division plays at hours `d, d + 4, d + 8, ...` where `d` is its index,
/// so every hour of the day has one division on the pitch with both groups.
/// Pairings rotate per day and home/away flips away from today.
fn build_fixtures(divisions: &[Division]) -> Vec<Fixture> {
    let mut fixtures = Vec::new();

    for day in DateOffset::ALL {
        let rotation = ((day.as_i8() + 1) as usize) * 2;
        for (division_index, division) in divisions.iter().enumerate() {
            for group in &division.groups {
                for slot in 0..ROUND_ROBIN.len() {
                    let (home, away) = ROUND_ROBIN[(slot + rotation) % ROUND_ROBIN.len()];
                    let (home, away) = if day == DateOffset::Today {
                        (home, away)
                    } else {
                        (away, home)
                    };
                    fixtures.push(Fixture {
                        pool: division.pool_label(group),
                        scheduled_hour: division_index as u8 + slot as u8 * KICKOFF_SPACING_HOURS,
                        home_team: group.teams[home].to_string(),
                        away_team: group.teams[away].to_string(),
                        date_offset: day,
                    });
                }
            }
        }
    }

    fixtures.sort_by(|a, b| {
        a.date_offset
            .cmp(&b.date_offset)
            .then(a.scheduled_hour.cmp(&b.scheduled_hour))
            .then_with(|| a.pool.cmp(&b.pool))
    });
    fixtures
}

/// The league, populated on first use.
pub static LEAGUE: Lazy<League> = Lazy::new(League::build);
