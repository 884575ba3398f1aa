//! Page builders: turn a `DashboardState` into a `TeletextPage`.
//!
//! Builders are pure apart from the random source, which is passed in so the
//! caller decides between a seeded and an entropy-seeded generator.

use super::state::{DashboardState, Section};
use crate::constants::pages;
use crate::error::AppError;
use crate::league::{
    ClockTime, DateOffset, Fixture, LEAGUE, MatchStatus, generate_group_standings,
    generate_roster, resolve_fixture, standings_table,
};
use crate::teletext_ui::{TeletextPage, TeletextPageConfig, TeletextRow};
use rand::Rng;

pub const PAGE_TITLE: &str = "IPFL";
pub const LIVE_NOW_HEADING: &str = "Идут сейчас";
pub const NEXT_MATCHES_HEADING: &str = "Следующие матчи";
pub const NO_LIVE_MATCHES: &str = "Сейчас матчей нет";
pub const NO_MORE_MATCHES: &str = "Сегодня матчей больше нет";
pub const IN_DEVELOPMENT: &str = "Раздел в разработке";
pub const STANDINGS_LEGEND: &str =
    "И=игры В=победы Н=ничьи П=поражения РМ=разница мячей О=очки";

/// Output options that do not belong to the dashboard state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// No colour sequences
    pub plain: bool,
    /// Single static print: everything on one page, credit line footer
    pub once: bool,
}

/// Builds the page for the current state. When a roster is open it replaces
/// the section page.
///
/// # Errors
///
/// Propagates `AppError::InvalidHour` from status resolution; the static
/// catalog never produces one, so in practice this only fails on a corrupted
/// fixture list.
pub fn build_page<R: Rng + ?Sized>(
    state: &DashboardState,
    now: ClockTime,
    rng: &mut R,
    options: RenderOptions,
) -> Result<TeletextPage, AppError> {
    if let Some(team) = state.roster_team() {
        return Ok(build_roster_page(state, team, rng, options));
    }

    let mut page = new_page(
        state.section().page_number(),
        subheader(state.section(), section_context(state)),
        options,
    );
    page.set_header_date(header_day(state).display_date());

    match state.section() {
        Section::Home => add_leaders(&mut page, state),
        Section::Live => add_live_board(&mut page, now, rng)?,
        Section::Schedule => add_schedule(&mut page, state.day(), now, rng)?,
        Section::Divisions => add_divisions(&mut page, state),
        Section::Standings => add_standings(&mut page, state, rng),
        Section::News => page.add_message(IN_DEVELOPMENT),
    }

    if !options.once {
        page.set_footer_controls(section_controls(state.section()));
    }

    tracing::debug!(
        "Built page {} with {} rows",
        page.page_number(),
        page.rows().len()
    );
    Ok(page)
}

fn new_page(page_number: u16, subheader: String, options: RenderOptions) -> TeletextPage {
    let mut config = TeletextPageConfig::new(page_number, PAGE_TITLE.to_string(), subheader);
    if options.once {
        config = config.for_once_mode(options.plain);
    } else {
        config.plain = options.plain;
    }
    TeletextPage::from_config(config)
}

fn subheader(section: Section, context: Option<String>) -> String {
    let label = section.label().to_uppercase();
    match context {
        Some(context) => format!("{label} | {context}"),
        None => label,
    }
}

fn header_day(state: &DashboardState) -> DateOffset {
    match state.section() {
        Section::Schedule => state.day(),
        _ => DateOffset::Today,
    }
}

/// Extra subheader text for sections that depend on a selection.
fn section_context(state: &DashboardState) -> Option<String> {
    match state.section() {
        Section::Home => Some(format!("Лидеры: {}", state.leader_board().label())),
        Section::Schedule => Some(state.day().label().to_string()),
        Section::Divisions | Section::Standings => Some(state.pool_label()),
        Section::Live | Section::News => None,
    }
}

fn section_controls(section: Section) -> &'static str {
    match section {
        Section::Home => "q=Выход Tab=Раздел b=Лидеры",
        Section::Live => "q=Выход Tab=Раздел r=Обновить",
        Section::Schedule => "q=Выход Tab=Раздел Shift+←→=День",
        Section::Divisions => "q=Выход ↑↓=Дивизион g=Группа 1-4=Состав",
        Section::Standings => "q=Выход ↑↓=Дивизион g=Группа r=Обновить",
        Section::News => "q=Выход Tab=Раздел",
    }
}

fn add_leaders(page: &mut TeletextPage, state: &DashboardState) {
    let board = state.leader_board();
    page.add_section_header(format!("Лидеры сезона: {}", board.label()));
    for (index, leader) in board.leaders().iter().enumerate() {
        page.add_row(TeletextRow::Leader {
            rank: index + 1,
            name: leader.name.to_string(),
            team: leader.team.to_string(),
            stat: leader.stat,
        });
    }
}

fn match_row<R: Rng + ?Sized>(
    fixture: &Fixture,
    now: ClockTime,
    rng: &mut R,
) -> Result<TeletextRow, AppError> {
    let resolved = resolve_fixture(fixture, now, rng)?;
    Ok(TeletextRow::MatchResult {
        pool: resolved.fixture.pool.clone(),
        home_team: resolved.fixture.home_team.clone(),
        kickoff: resolved.fixture.kickoff(),
        away_team: resolved.fixture.away_team,
        status: resolved.status,
        score: resolved.score,
    })
}

/// Today's current kick-off slot plus the next slot that has fixtures.
fn add_live_board<R: Rng + ?Sized>(
    page: &mut TeletextPage,
    now: ClockTime,
    rng: &mut R,
) -> Result<(), AppError> {
    let today = LEAGUE.fixtures_for(DateOffset::Today);

    page.add_section_header(LIVE_NOW_HEADING);
    let current: Vec<&Fixture> = today
        .iter()
        .copied()
        .filter(|f| f.scheduled_hour == now.hour())
        .collect();
    if current.is_empty() {
        page.add_message(NO_LIVE_MATCHES);
    }
    for fixture in current {
        page.add_row(match_row(fixture, now, rng)?);
    }

    page.add_section_header(NEXT_MATCHES_HEADING);
    let next_hour = today
        .iter()
        .map(|f| f.scheduled_hour)
        .filter(|hour| *hour > now.hour())
        .min();
    match next_hour {
        Some(hour) => {
            for fixture in today.iter().filter(|f| f.scheduled_hour == hour) {
                page.add_row(match_row(fixture, now, rng)?);
            }
        }
        None => page.add_message(NO_MORE_MATCHES),
    }

    Ok(())
}

/// Every fixture of `day`, one block per division group.
fn add_schedule<R: Rng + ?Sized>(
    page: &mut TeletextPage,
    day: DateOffset,
    now: ClockTime,
    rng: &mut R,
) -> Result<(), AppError> {
    let fixtures = LEAGUE.fixtures_for(day);
    let mut live_count = 0usize;

    for division in &LEAGUE.divisions {
        for group in &division.groups {
            let pool = division.pool_label(group);
            page.add_section_header(pool.clone());
            for fixture in fixtures.iter().filter(|f| f.pool == pool) {
                let row = match_row(fixture, now, rng)?;
                if let TeletextRow::MatchResult {
                    status: MatchStatus::Live { .. },
                    ..
                } = row
                {
                    live_count += 1;
                }
                page.add_row(row);
            }
        }
    }

    tracing::debug!(
        "Schedule for {:?}: {} fixtures, {live_count} live",
        day,
        fixtures.len()
    );
    Ok(())
}

fn add_divisions(page: &mut TeletextPage, state: &DashboardState) {
    let division = state.division();
    let group = state.group();

    page.add_section_header("Дивизионы");
    for (index, entry) in LEAGUE.divisions.iter().enumerate() {
        page.add_row(TeletextRow::TeamEntry {
            number: index + 1,
            name: entry.name.to_string(),
            selected: entry.key == division.key,
        });
    }

    page.add_section_header(format!("Группы: {}", division.name));
    for (index, entry) in division.groups.iter().enumerate() {
        page.add_row(TeletextRow::TeamEntry {
            number: index + 1,
            name: format!("Группа {}", entry.letter),
            selected: entry.letter == group.letter,
        });
    }

    page.add_section_header(format!("Команды: {}", division.pool_label(group)));
    for (index, team) in group.teams.iter().enumerate() {
        page.add_row(TeletextRow::TeamEntry {
            number: index + 1,
            name: team.to_string(),
            selected: false,
        });
    }
}

fn add_standings<R: Rng + ?Sized>(page: &mut TeletextPage, state: &DashboardState, rng: &mut R) {
    let records = generate_group_standings(state.group(), rng);
    page.add_section_header(state.pool_label());
    page.add_row(TeletextRow::StandingsHeader);
    for entry in standings_table(records) {
        page.add_row(TeletextRow::Standings(entry));
    }
    page.add_message(STANDINGS_LEGEND);
}

fn build_roster_page<R: Rng + ?Sized>(
    state: &DashboardState,
    team: &str,
    rng: &mut R,
    options: RenderOptions,
) -> TeletextPage {
    let pool = LEAGUE
        .find_team(team)
        .map(|(division, group)| division.pool_label(group))
        .unwrap_or_else(|_| state.pool_label());

    let mut page = new_page(pages::ROSTER, format!("СОСТАВ | {team}"), options);
    page.set_header_date(DateOffset::Today.display_date());
    page.add_section_header(format!("{team} ({pool})"));
    page.add_row(TeletextRow::RosterHeader);
    for player in generate_roster(team, rng) {
        page.add_row(TeletextRow::RosterEntry(player));
    }
    if !options.once {
        page.set_footer_controls("q=Выход Esc=Назад r=Обновить");
    }
    page
}
