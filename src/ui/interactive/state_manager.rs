//! State management for interactive UI
//!
//! Groups the loop's mutable state: timers, the page on screen and the
//! dashboard selection the page was built from.

use crate::dashboard::{Action, DashboardState};
use crate::teletext_ui::TeletextPage;
use std::time::{Duration, Instant};

/// Timer state for various interactive UI operations
#[derive(Debug)]
pub struct TimerState {
    pub last_auto_refresh: Instant,
    pub last_manual_refresh: Instant,
    pub last_page_change: Instant,
    pub last_resize: Instant,
    pub last_activity: Instant,
}

impl TimerState {
    /// Initialize all timers so the first interaction is never throttled
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_auto_refresh: now,
            last_manual_refresh: now.checked_sub(Duration::from_secs(1)).unwrap_or(now),
            last_page_change: now.checked_sub(Duration::from_millis(200)).unwrap_or(now),
            last_resize: now.checked_sub(Duration::from_millis(500)).unwrap_or(now),
            last_activity: now,
        }
    }

    pub fn update_activity(&mut self) {
        self.last_activity = Instant::now();
    }

    pub fn time_since_activity(&self) -> Duration {
        self.last_activity.elapsed()
    }

    pub fn update_auto_refresh(&mut self) {
        self.last_auto_refresh = Instant::now();
    }

    pub fn update_manual_refresh(&mut self) {
        self.last_manual_refresh = Instant::now();
    }

    pub fn update_page_change(&mut self) {
        self.last_page_change = Instant::now();
    }

    pub fn update_resize(&mut self) {
        self.last_resize = Instant::now();
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI rendering and interaction state
#[derive(Debug)]
pub struct UIState {
    pub needs_refresh: bool,
    pub needs_render: bool,
    pub current_page: Option<TeletextPage>,
    /// Page index to restore after a rebuild that keeps the selection
    pub preserved_page: Option<usize>,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            needs_refresh: true,
            needs_render: false,
            current_page: None,
            preserved_page: None,
        }
    }

    /// Set current page, restoring a preserved page index if one is pending
    pub fn set_current_page(&mut self, mut page: TeletextPage) {
        if let Some(index) = self.preserved_page.take() {
            page.set_current_page(index);
        }
        self.current_page = Some(page);
        self.needs_render = true;
    }

    /// Re-reads the terminal size and redraws
    pub fn handle_resize(&mut self) {
        if let Some(page) = &mut self.current_page {
            page.handle_resize();
        }
        self.needs_render = true;
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

/// Main interactive state coordinator
#[derive(Debug)]
pub struct InteractiveState {
    pub timers: TimerState,
    pub ui: UIState,
    pub dashboard: DashboardState,
}

impl InteractiveState {
    pub fn new(dashboard: DashboardState) -> Self {
        Self {
            timers: TimerState::new(),
            ui: UIState::new(),
            dashboard,
        }
    }

    pub fn update_activity(&mut self) {
        self.timers.update_activity();
    }

    pub fn time_since_activity(&self) -> Duration {
        self.timers.time_since_activity()
    }

    /// Rebuild with the same selection, keeping the visible page
    pub fn request_reroll(&mut self) {
        self.ui.preserved_page = self.current_page().map(TeletextPage::get_current_page);
        self.ui.needs_refresh = true;
    }

    /// Applies a dashboard action. A changed selection rebuilds from page 1.
    pub fn dispatch(&mut self, action: Action) {
        let next = self.dashboard.clone().apply(action);
        if next != self.dashboard {
            self.dashboard = next;
            self.ui.preserved_page = None;
            self.ui.needs_refresh = true;
        }
    }

    pub fn needs_refresh(&self) -> bool {
        self.ui.needs_refresh
    }

    pub fn clear_refresh_flag(&mut self) {
        self.ui.needs_refresh = false;
    }

    pub fn needs_render(&self) -> bool {
        self.ui.needs_render
    }

    pub fn request_render(&mut self) {
        self.ui.needs_render = true;
    }

    pub fn clear_render_flag(&mut self) {
        self.ui.needs_render = false;
    }

    pub fn set_current_page(&mut self, page: TeletextPage) {
        self.ui.set_current_page(page);
    }

    pub fn current_page(&self) -> Option<&TeletextPage> {
        self.ui.current_page.as_ref()
    }

    pub fn current_page_mut(&mut self) -> Option<&mut TeletextPage> {
        self.ui.current_page.as_mut()
    }

    pub fn handle_resize(&mut self) {
        self.ui.handle_resize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Section;

    fn page_with_rows(rows: usize) -> TeletextPage {
        let mut page = TeletextPage::new(
            202,
            "IPFL".to_string(),
            "РАСПИСАНИЕ".to_string(),
            true,
            true,
            false,
        );
        page.set_screen_height(10);
        for index in 0..rows {
            page.add_message(&format!("Матч {index}"));
        }
        page
    }

    #[test]
    fn test_initial_state_requests_refresh() {
        let state = InteractiveState::new(DashboardState::default());
        assert!(state.needs_refresh());
        assert!(!state.needs_render());
        assert!(state.current_page().is_none());
    }

    #[test]
    fn test_dispatch_changes_selection_and_requests_refresh() {
        let mut state = InteractiveState::new(DashboardState::default());
        state.clear_refresh_flag();

        state.dispatch(Action::SelectSection(Section::Live));
        assert!(state.needs_refresh());
        assert_eq!(state.dashboard.section(), Section::Live);
    }

    #[test]
    fn test_dispatch_without_change_is_noop() {
        let mut state = InteractiveState::new(DashboardState::new(Section::Schedule));
        state.clear_refresh_flag();
        // No roster is open, so closing one changes nothing
        state.dispatch(Action::CloseRoster);
        assert!(!state.needs_refresh());
    }

    #[test]
    fn test_reroll_preserves_page() {
        let mut state = InteractiveState::new(DashboardState::default());
        let mut page = page_with_rows(6);
        page.next_page();
        state.set_current_page(page);
        state.request_reroll();
        assert_eq!(state.ui.preserved_page, Some(1));

        state.set_current_page(page_with_rows(6));
        assert_eq!(state.current_page().unwrap().get_current_page(), 1);
        assert_eq!(state.ui.preserved_page, None);
    }

    #[test]
    fn test_set_current_page_requests_render() {
        let mut state = InteractiveState::new(DashboardState::default());
        state.set_current_page(page_with_rows(1));
        assert!(state.needs_render());
        state.clear_render_flag();
        assert!(!state.needs_render());
    }
}
