//! Event handling coordination for interactive UI
//!
//! Polls crossterm for one event per loop iteration and applies it to the
//! `InteractiveState`: key presses go through the key map, resizes are
//! debounced.

use super::input_handler::{KeyCommand, map_key_to_command};
use super::refresh_manager::calculate_poll_interval;
use super::state_manager::InteractiveState;
use crate::error::AppError;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;

const PAGE_CHANGE_DEBOUNCE: Duration = Duration::from_millis(200);
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(500);
const MANUAL_REFRESH_DEBOUNCE: Duration = Duration::from_secs(1);

/// Result of processing an event
#[derive(Debug, PartialEq)]
pub enum EventResult {
    /// Nothing happened during the poll window
    Continue,
    /// Exit the application
    Exit,
    /// Event was handled, continue processing
    Handled,
}

/// Applies polled terminal events to the interactive state.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Process events for one iteration of the main loop
    pub fn process_events(&self, state: &mut InteractiveState) -> Result<EventResult, AppError> {
        let poll_interval = calculate_poll_interval(state.time_since_activity());

        if !event::poll(poll_interval)? {
            return Ok(EventResult::Continue);
        }

        state.update_activity();

        match event::read()? {
            // Windows reports releases as well
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                Ok(self.handle_key_event(state, &key_event))
            }
            Event::Resize(_, _) => {
                self.handle_resize_event(state);
                Ok(EventResult::Handled)
            }
            _ => Ok(EventResult::Continue),
        }
    }

    /// Applies one key press to the state
    pub fn handle_key_event(&self, state: &mut InteractiveState, key_event: &KeyEvent) -> EventResult {
        tracing::debug!(
            "Key event: {:?}, modifiers: {:?}",
            key_event.code,
            key_event.modifiers
        );

        let Some(command) = map_key_to_command(key_event) else {
            return EventResult::Continue;
        };

        match command {
            KeyCommand::Quit => {
                tracing::info!("Quit requested");
                return EventResult::Exit;
            }
            KeyCommand::Reroll => {
                if state.timers.last_manual_refresh.elapsed() >= MANUAL_REFRESH_DEBOUNCE {
                    tracing::info!("Manual refresh requested");
                    state.request_reroll();
                    state.timers.update_manual_refresh();
                }
            }
            KeyCommand::NextPage | KeyCommand::PreviousPage => {
                if state.timers.last_page_change.elapsed() >= PAGE_CHANGE_DEBOUNCE {
                    if let Some(page) = state.current_page_mut() {
                        if command == KeyCommand::NextPage {
                            page.next_page();
                        } else {
                            page.previous_page();
                        }
                        state.request_render();
                    }
                    state.timers.update_page_change();
                }
            }
            KeyCommand::Dashboard(action) => state.dispatch(action),
        }

        EventResult::Handled
    }

    /// Handle resize events, dropping bursts within the debounce window
    fn handle_resize_event(&self, state: &mut InteractiveState) {
        if state.timers.last_resize.elapsed() < RESIZE_DEBOUNCE {
            tracing::debug!("Resize event ignored due to debouncing");
            return;
        }
        tracing::debug!("Processing resize event");
        state.handle_resize();
        state.timers.update_resize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{DashboardState, Section};
    use crate::teletext_ui::TeletextPage;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_exits() {
        let handler = EventHandler::new();
        let mut state = InteractiveState::new(DashboardState::default());
        assert_eq!(
            handler.handle_key_event(&mut state, &press(KeyCode::Char('q'))),
            EventResult::Exit
        );
    }

    #[test]
    fn test_section_key_requests_refresh() {
        let handler = EventHandler::new();
        let mut state = InteractiveState::new(DashboardState::default());
        state.clear_refresh_flag();

        let result = handler.handle_key_event(&mut state, &press(KeyCode::Char('t')));
        assert_eq!(result, EventResult::Handled);
        assert!(state.needs_refresh());
        assert_eq!(state.dashboard.section(), Section::Standings);
    }

    #[test]
    fn test_page_keys_render_without_rebuild() {
        let handler = EventHandler::new();
        let mut state = InteractiveState::new(DashboardState::default());
        let mut page = TeletextPage::new(
            202,
            "IPFL".to_string(),
            "РАСПИСАНИЕ".to_string(),
            true,
            true,
            false,
        );
        page.set_screen_height(10);
        for index in 0..6 {
            page.add_message(&format!("Матч {index}"));
        }
        state.set_current_page(page);
        state.clear_refresh_flag();
        state.clear_render_flag();

        handler.handle_key_event(&mut state, &press(KeyCode::Right));
        assert!(state.needs_render());
        assert!(!state.needs_refresh());
        assert_eq!(state.current_page().unwrap().get_current_page(), 1);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let handler = EventHandler::new();
        let mut state = InteractiveState::new(DashboardState::default());
        assert_eq!(
            handler.handle_key_event(&mut state, &press(KeyCode::Char('z'))),
            EventResult::Continue
        );
    }

    #[test]
    fn test_resize_burst_is_debounced() {
        let handler = EventHandler::new();
        let mut state = InteractiveState::new(DashboardState::default());
        state.timers.update_resize();
        state.clear_render_flag();

        handler.handle_resize_event(&mut state);
        assert!(!state.needs_render());
    }

    #[test]
    fn test_first_resize_is_processed() {
        let handler = EventHandler::new();
        let mut state = InteractiveState::new(DashboardState::default());
        state.clear_render_flag();

        handler.handle_resize_event(&mut state);
        assert!(state.needs_render());
    }
}
