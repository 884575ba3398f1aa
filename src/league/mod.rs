//! League logic: value types, standings ranking, match status resolution,
//! the static catalog and placeholder data generation.

pub mod catalog;
pub mod generator;
pub mod match_status;
pub mod model;
pub mod standings;

pub use catalog::{Division, Group, LEAGUE, League, LeaderStat, SeasonLeader};
pub use generator::{
    Position, RosterPlayer, generate_group_standings, generate_roster, generate_team_record,
    make_rng,
};
pub use match_status::{placeholder_score, resolve_fixture, resolve_match_status};
pub use model::{ClockTime, DateOffset, Fixture, MatchStatus, ResolvedMatch, Score, TeamRecord};
pub use standings::{StandingsEntry, compare_records, rank_standings, standings_table};
