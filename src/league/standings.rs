//! Standings ranking.

use super::model::TeamRecord;
use std::cmp::Ordering;

/// A ranked table line with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsEntry {
    pub position: usize,
    pub record: TeamRecord,
}

/// Orders two records for the table: points, then goal difference, then goals
/// scored, all descending.
pub fn compare_records(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(|| b.goal_diff().cmp(&a.goal_diff()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// Ranks teams by points, goal difference and goals scored.
///
/// The sort is stable, so teams level on all three keys keep their input
/// order. Ranking an already ranked table returns it unchanged.
pub fn rank_standings(mut records: Vec<TeamRecord>) -> Vec<TeamRecord> {
    records.sort_by(compare_records);
    records
}

/// Ranks the records and attaches table positions.
pub fn standings_table(records: Vec<TeamRecord>) -> Vec<StandingsEntry> {
    let ranked = rank_standings(records);
    tracing::debug!("Ranked {} teams", ranked.len());

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, record)| StandingsEntry {
            position: index + 1,
            record,
        })
        .collect()
}
