//! Main interactive UI loop.
//!
//! Builds the page for the current dashboard selection, renders it, and
//! reacts to key presses, resizes and the auto-refresh timer until the user
//! quits.

use super::event_handler::{EventHandler, EventResult};
use super::refresh_manager::{
    AutoRefreshParams, calculate_auto_refresh_interval, page_has_live_matches,
    should_trigger_auto_refresh,
};
use super::state_manager::InteractiveState;
use super::terminal_manager::{TerminalConfig, TerminalManager};
use crate::dashboard::{DashboardState, RenderOptions, build_page};
use crate::error::AppError;
use crate::league::{ClockTime, make_rng};
use rand::rngs::SmallRng;
use std::io::Write;
use std::time::Duration;

/// Settings for one interactive session.
#[derive(Debug, Clone)]
pub struct InteractiveOptions {
    pub initial_state: DashboardState,
    pub plain: bool,
    pub seed: Option<u64>,
    pub refresh_interval: Duration,
    pub debug_mode: bool,
}

/// Runs the interactive dashboard until the user quits.
///
/// The terminal is restored even when the loop fails; the loop's error is
/// returned after cleanup.
pub fn run_interactive_ui(options: InteractiveOptions) -> Result<(), AppError> {
    let terminal = TerminalManager::with_config(TerminalConfig {
        debug_mode: options.debug_mode,
    });
    let mut stdout = terminal.setup_terminal()?;

    let result = run_event_loop(&mut stdout, &options);

    terminal.cleanup_terminal(stdout)?;
    result
}

fn run_event_loop<W: Write>(out: &mut W, options: &InteractiveOptions) -> Result<(), AppError> {
    let mut rng = make_rng(options.seed);
    let mut state = InteractiveState::new(options.initial_state.clone());
    let event_handler = EventHandler::new();
    let render_options = RenderOptions {
        plain: options.plain,
        once: false,
    };

    tracing::info!(
        "Interactive mode started in section {}",
        state.dashboard.section()
    );

    loop {
        if state.needs_refresh() {
            rebuild_page(&mut state, &mut rng, render_options)?;
        }

        if state.needs_render() {
            if let Some(page) = state.current_page() {
                page.render_buffered(out)?;
            }
            state.clear_render_flag();
        }

        let has_live = state.current_page().is_some_and(page_has_live_matches);
        if should_trigger_auto_refresh(AutoRefreshParams {
            needs_refresh: state.needs_refresh(),
            last_auto_refresh: state.timers.last_auto_refresh,
            auto_refresh_interval: calculate_auto_refresh_interval(
                options.refresh_interval,
                has_live,
            ),
        }) {
            state.request_reroll();
            continue;
        }

        match event_handler.process_events(&mut state)? {
            EventResult::Exit => break,
            EventResult::Continue | EventResult::Handled => {}
        }
    }

    tracing::info!("Interactive mode finished");
    Ok(())
}

fn rebuild_page(
    state: &mut InteractiveState,
    rng: &mut SmallRng,
    render_options: RenderOptions,
) -> Result<(), AppError> {
    let now = ClockTime::now();
    let page = build_page(&state.dashboard, now, rng, render_options)?;
    tracing::debug!("Rebuilt page {} at {now}", page.page_number());

    state.set_current_page(page);
    state.clear_refresh_flag();
    state.timers.update_auto_refresh();
    Ok(())
}
