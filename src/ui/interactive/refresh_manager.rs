//! Auto-refresh timing for the interactive UI.
//!
//! A refresh rebuilds the page from the same selection: statuses are
//! re-resolved against the clock and placeholder numbers are drawn again.

use crate::constants::polling;
use crate::league::MatchStatus;
use crate::teletext_ui::{TeletextPage, TeletextRow};
use std::time::{Duration, Instant};

/// Upper bound on the refresh interval while a live match is on screen, so the
/// minute counter keeps moving.
const LIVE_REFRESH_INTERVAL: Duration = Duration::from_secs(15);

/// Calculate adaptive polling interval based on user activity
pub(super) fn calculate_poll_interval(time_since_activity: Duration) -> Duration {
    if time_since_activity < Duration::from_secs(polling::SEMI_ACTIVE_THRESHOLD_SECONDS) {
        Duration::from_millis(polling::ACTIVE_MS)
    } else if time_since_activity < Duration::from_secs(polling::IDLE_THRESHOLD_SECONDS) {
        Duration::from_millis(polling::SEMI_ACTIVE_MS)
    } else {
        Duration::from_millis(polling::IDLE_MS)
    }
}

/// Whether the page shows at least one match in progress.
pub(super) fn page_has_live_matches(page: &TeletextPage) -> bool {
    page.rows().iter().any(|row| {
        matches!(
            row,
            TeletextRow::MatchResult {
                status: MatchStatus::Live { .. },
                ..
            }
        )
    })
}

/// Calculate auto-refresh interval from the configured one and what is on screen
pub(super) fn calculate_auto_refresh_interval(configured: Duration, has_live: bool) -> Duration {
    if has_live {
        configured.min(LIVE_REFRESH_INTERVAL)
    } else {
        configured
    }
}

/// Parameters for auto-refresh checking
pub(super) struct AutoRefreshParams {
    pub needs_refresh: bool,
    pub last_auto_refresh: Instant,
    pub auto_refresh_interval: Duration,
}

/// Check if auto-refresh should be triggered
pub(super) fn should_trigger_auto_refresh(params: AutoRefreshParams) -> bool {
    if params.needs_refresh {
        return false;
    }

    let due = params.last_auto_refresh.elapsed() >= params.auto_refresh_interval;
    if due {
        tracing::debug!(
            "Auto-refresh triggered after {:?}",
            params.auto_refresh_interval
        );
    }
    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::Score;

    #[test]
    fn test_poll_interval_adapts_to_activity() {
        assert_eq!(
            calculate_poll_interval(Duration::from_secs(1)),
            Duration::from_millis(polling::ACTIVE_MS)
        );
        assert_eq!(
            calculate_poll_interval(Duration::from_secs(10)),
            Duration::from_millis(polling::SEMI_ACTIVE_MS)
        );
        assert_eq!(
            calculate_poll_interval(Duration::from_secs(120)),
            Duration::from_millis(polling::IDLE_MS)
        );
    }

    #[test]
    fn test_live_matches_shorten_interval() {
        let configured = Duration::from_secs(60);
        assert_eq!(
            calculate_auto_refresh_interval(configured, true),
            LIVE_REFRESH_INTERVAL
        );
        assert_eq!(calculate_auto_refresh_interval(configured, false), configured);
        assert_eq!(
            calculate_auto_refresh_interval(Duration::from_secs(5), true),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn test_page_has_live_matches() {
        let mut page = TeletextPage::new(
            201,
            "IPFL".to_string(),
            "LIVE".to_string(),
            true,
            true,
            true,
        );
        page.add_row(TeletextRow::MatchResult {
            pool: "Север-A".to_string(),
            home_team: "Murmansk".to_string(),
            away_team: "Helsinki".to_string(),
            kickoff: "12:00".to_string(),
            status: MatchStatus::Finished,
            score: Some(Score { home: 1, away: 0 }),
        });
        assert!(!page_has_live_matches(&page));

        page.add_row(TeletextRow::MatchResult {
            pool: "Север-B".to_string(),
            home_team: "Glasgow".to_string(),
            away_team: "Narvik".to_string(),
            kickoff: "13:00".to_string(),
            status: MatchStatus::Live { minute: 4 },
            score: Some(Score { home: 0, away: 0 }),
        });
        assert!(page_has_live_matches(&page));
    }

    #[test]
    fn test_should_trigger_auto_refresh() {
        let long_ago = Instant::now()
            .checked_sub(Duration::from_secs(120))
            .unwrap_or_else(Instant::now);

        assert!(should_trigger_auto_refresh(AutoRefreshParams {
            needs_refresh: false,
            last_auto_refresh: long_ago,
            auto_refresh_interval: Duration::from_secs(60),
        }));
        assert!(!should_trigger_auto_refresh(AutoRefreshParams {
            needs_refresh: true,
            last_auto_refresh: long_ago,
            auto_refresh_interval: Duration::from_secs(60),
        }));
        assert!(!should_trigger_auto_refresh(AutoRefreshParams {
            needs_refresh: false,
            last_auto_refresh: Instant::now(),
            auto_refresh_interval: Duration::from_secs(60),
        }));
    }
}
