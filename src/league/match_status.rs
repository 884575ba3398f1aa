//! Match status derivation from kick-off hour, day and the current clock.

use super::model::{ClockTime, DateOffset, Fixture, MatchStatus, ResolvedMatch, Score};
use crate::constants::{LIVE_LAST_MINUTE, MAX_PLACEHOLDER_GOALS};
use crate::error::AppError;
use rand::Rng;
use std::cmp::Ordering;

/// Determines whether a fixture is finished, live or upcoming.
///
/// Yesterday's fixtures are always finished and tomorrow's always upcoming.
/// For today the scheduled hour is compared with the current hour: an earlier
/// hour is finished, a later one upcoming, and the current hour is live through
/// minute 50 (inclusive) and finished from minute 51.
///
/// # Errors
///
/// Returns `AppError::InvalidHour` when `scheduled_hour` is outside 0-23.
/// Out-of-range hours are rejected rather than clamped.
///
/// # Examples
///
/// ```rust
/// use ipfl_teletext::league::{ClockTime, DateOffset, MatchStatus, resolve_match_status};
///
/// let now = ClockTime::new(10, 50).unwrap();
/// let status = resolve_match_status(10, DateOffset::Today, now).unwrap();
/// assert_eq!(status, MatchStatus::Live { minute: 50 });
/// ```
pub fn resolve_match_status(
    scheduled_hour: u8,
    date_offset: DateOffset,
    now: ClockTime,
) -> Result<MatchStatus, AppError> {
    if scheduled_hour > 23 {
        return Err(AppError::invalid_hour(scheduled_hour));
    }

    let status = match date_offset {
        DateOffset::Yesterday => MatchStatus::Finished,
        DateOffset::Tomorrow => MatchStatus::Upcoming,
        DateOffset::Today => match scheduled_hour.cmp(&now.hour()) {
            Ordering::Less => MatchStatus::Finished,
            Ordering::Equal if now.minute() > LIVE_LAST_MINUTE => MatchStatus::Finished,
            Ordering::Equal => MatchStatus::Live {
                minute: now.minute(),
            },
            Ordering::Greater => MatchStatus::Upcoming,
        },
    };

    Ok(status)
}

/// Placeholder score for a status: none for upcoming matches, otherwise each
/// side gets 0-3 goals.
pub fn placeholder_score<R: Rng + ?Sized>(status: MatchStatus, rng: &mut R) -> Option<Score> {
    if !status.has_score() {
        return None;
    }
    Some(Score {
        home: rng.random_range(0..=MAX_PLACEHOLDER_GOALS),
        away: rng.random_range(0..=MAX_PLACEHOLDER_GOALS),
    })
}

/// Resolves a fixture's status for `now` and attaches a placeholder score.
pub fn resolve_fixture<R: Rng + ?Sized>(
    fixture: &Fixture,
    now: ClockTime,
    rng: &mut R,
) -> Result<ResolvedMatch, AppError> {
    let status = resolve_match_status(fixture.scheduled_hour, fixture.date_offset, now)?;
    let score = placeholder_score(status, rng);

    if status.is_live() {
        tracing::debug!(
            "Live: {} vs {} ({}) at {now}",
            fixture.home_team,
            fixture.away_team,
            fixture.pool
        );
    }

    Ok(ResolvedMatch {
        fixture: fixture.clone(),
        status,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn at(hour: u8, minute: u8) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    #[test]
    fn test_live_at_minute_fifty() {
        assert_eq!(
            resolve_match_status(10, DateOffset::Today, at(10, 50)).unwrap(),
            MatchStatus::Live { minute: 50 }
        );
    }

    #[test]
    fn test_finished_from_minute_fifty_one() {
        assert_eq!(
            resolve_match_status(10, DateOffset::Today, at(10, 51)).unwrap(),
            MatchStatus::Finished
        );
    }

    #[test]
    fn test_live_at_kickoff() {
        assert_eq!(
            resolve_match_status(10, DateOffset::Today, at(10, 0)).unwrap(),
            MatchStatus::Live { minute: 0 }
        );
    }

    #[test]
    fn test_upcoming_later_hour() {
        assert_eq!(
            resolve_match_status(10, DateOffset::Today, at(9, 0)).unwrap(),
            MatchStatus::Upcoming
        );
    }

    #[test]
    fn test_finished_earlier_hour() {
        assert_eq!(
            resolve_match_status(10, DateOffset::Today, at(11, 5)).unwrap(),
            MatchStatus::Finished
        );
    }

    #[test]
    fn test_other_days_ignore_clock() {
        for hour in 0..24 {
            for minute in [0, 30, 50, 51, 59] {
                let now = at(hour, minute);
                for scheduled in [0, 10, 23] {
                    assert_eq!(
                        resolve_match_status(scheduled, DateOffset::Tomorrow, now).unwrap(),
                        MatchStatus::Upcoming
                    );
                    assert_eq!(
                        resolve_match_status(scheduled, DateOffset::Yesterday, now).unwrap(),
                        MatchStatus::Finished
                    );
                }
            }
        }
    }

    #[test]
    fn test_invalid_hour_rejected() {
        assert!(matches!(
            resolve_match_status(24, DateOffset::Today, at(10, 0)),
            Err(AppError::InvalidHour { hour: 24 })
        ));
        // Rejected regardless of day
        assert!(resolve_match_status(99, DateOffset::Yesterday, at(10, 0)).is_err());
    }

    #[test]
    fn test_placeholder_score_ranges() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let score = placeholder_score(MatchStatus::Finished, &mut rng).unwrap();
            assert!(score.home <= MAX_PLACEHOLDER_GOALS);
            assert!(score.away <= MAX_PLACEHOLDER_GOALS);
        }
        assert!(placeholder_score(MatchStatus::Live { minute: 12 }, &mut rng).is_some());
        assert!(placeholder_score(MatchStatus::Upcoming, &mut rng).is_none());
    }

    #[test]
    fn test_resolve_fixture_attaches_score() {
        let mut rng = SmallRng::seed_from_u64(1);
        let fixture = Fixture {
            pool: "Восток-A".to_string(),
            scheduled_hour: 18,
            home_team: "Tokyo".to_string(),
            away_team: "Seoul".to_string(),
            date_offset: DateOffset::Today,
        };

        let live = resolve_fixture(&fixture, at(18, 20), &mut rng).unwrap();
        assert_eq!(live.status, MatchStatus::Live { minute: 20 });
        assert!(live.score.is_some());

        let upcoming = resolve_fixture(&fixture, at(17, 59), &mut rng).unwrap();
        assert_eq!(upcoming.status, MatchStatus::Upcoming);
        assert!(upcoming.score.is_none());
        assert_eq!(upcoming.fixture, fixture);
    }
}
