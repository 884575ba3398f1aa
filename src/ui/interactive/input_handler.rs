//! Keyboard input handling for the interactive UI.
//!
//! Keys are first mapped to a `KeyCommand`, which keeps the binding table
//! testable without a terminal. Dashboard commands carry the `Action` they
//! apply to the selection state.

use crate::dashboard::{Action, Section};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    Quit,
    /// Rebuild the current page with fresh placeholder numbers
    Reroll,
    NextPage,
    PreviousPage,
    Dashboard(Action),
}

/// Checks if the given key event matches the day navigation shortcut.
/// Uses Shift + Left/Right for all platforms (works reliably in all terminals)
fn is_day_navigation_key(key_event: &KeyEvent, is_left: bool) -> bool {
    let expected_code = if is_left {
        KeyCode::Left
    } else {
        KeyCode::Right
    };

    key_event.code == expected_code && key_event.modifiers.contains(KeyModifiers::SHIFT)
}

/// Maps a key press to the command it triggers, if any.
///
/// | Key | Command |
/// |---|---|
/// | `q` | quit |
/// | `r` | reroll placeholder data |
/// | `←` / `→` | previous / next page |
/// | `Shift+←` / `Shift+→` | previous / next day |
/// | `Tab` / `Shift+Tab` | next / previous section |
/// | `h l s d t n` | home, live, schedule, divisions, standings (table), news |
/// | `↑` / `↓` | previous / next division |
/// | `g` | next group |
/// | `b` | next leader board |
/// | `1`-`4` | open roster of that team |
/// | `Esc` | close roster |
pub fn map_key_to_command(key_event: &KeyEvent) -> Option<KeyCommand> {
    if is_day_navigation_key(key_event, true) {
        return Some(KeyCommand::Dashboard(Action::PreviousDay));
    }
    if is_day_navigation_key(key_event, false) {
        return Some(KeyCommand::Dashboard(Action::NextDay));
    }

    let action = match key_event.code {
        KeyCode::Char('q') => return Some(KeyCommand::Quit),
        KeyCode::Char('r') => return Some(KeyCommand::Reroll),
        KeyCode::Left => return Some(KeyCommand::PreviousPage),
        KeyCode::Right => return Some(KeyCommand::NextPage),
        KeyCode::Tab => Action::NextSection,
        KeyCode::BackTab => Action::PreviousSection,
        KeyCode::Char('h') => Action::SelectSection(Section::Home),
        KeyCode::Char('l') => Action::SelectSection(Section::Live),
        KeyCode::Char('s') => Action::SelectSection(Section::Schedule),
        KeyCode::Char('d') => Action::SelectSection(Section::Divisions),
        KeyCode::Char('t') => Action::SelectSection(Section::Standings),
        KeyCode::Char('n') => Action::SelectSection(Section::News),
        KeyCode::Up => Action::PreviousDivision,
        KeyCode::Down => Action::NextDivision,
        KeyCode::Char('g') => Action::NextGroup,
        KeyCode::Char('b') => Action::NextLeaderBoard,
        KeyCode::Char(c @ '1'..='4') => Action::OpenRoster(c as usize - '1' as usize),
        KeyCode::Esc => Action::CloseRoster,
        _ => return None,
    };

    Some(KeyCommand::Dashboard(action))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    #[test]
    fn test_basic_commands() {
        assert_eq!(map_key_to_command(&key(KeyCode::Char('q'))), Some(KeyCommand::Quit));
        assert_eq!(map_key_to_command(&key(KeyCode::Char('r'))), Some(KeyCommand::Reroll));
        assert_eq!(map_key_to_command(&key(KeyCode::Left)), Some(KeyCommand::PreviousPage));
        assert_eq!(map_key_to_command(&key(KeyCode::Right)), Some(KeyCommand::NextPage));
    }

    #[test]
    fn test_shift_arrows_navigate_days() {
        assert_eq!(
            map_key_to_command(&shift(KeyCode::Left)),
            Some(KeyCommand::Dashboard(Action::PreviousDay))
        );
        assert_eq!(
            map_key_to_command(&shift(KeyCode::Right)),
            Some(KeyCommand::Dashboard(Action::NextDay))
        );
    }

    #[test]
    fn test_section_keys() {
        let cases = [
            ('h', Section::Home),
            ('l', Section::Live),
            ('s', Section::Schedule),
            ('d', Section::Divisions),
            ('t', Section::Standings),
            ('n', Section::News),
        ];
        for (c, section) in cases {
            assert_eq!(
                map_key_to_command(&key(KeyCode::Char(c))),
                Some(KeyCommand::Dashboard(Action::SelectSection(section)))
            );
        }
        assert_eq!(
            map_key_to_command(&key(KeyCode::Tab)),
            Some(KeyCommand::Dashboard(Action::NextSection))
        );
        assert_eq!(
            map_key_to_command(&shift(KeyCode::BackTab)),
            Some(KeyCommand::Dashboard(Action::PreviousSection))
        );
    }

    #[test]
    fn test_roster_keys() {
        assert_eq!(
            map_key_to_command(&key(KeyCode::Char('1'))),
            Some(KeyCommand::Dashboard(Action::OpenRoster(0)))
        );
        assert_eq!(
            map_key_to_command(&key(KeyCode::Char('4'))),
            Some(KeyCommand::Dashboard(Action::OpenRoster(3)))
        );
        assert_eq!(map_key_to_command(&key(KeyCode::Char('5'))), None);
        assert_eq!(
            map_key_to_command(&key(KeyCode::Esc)),
            Some(KeyCommand::Dashboard(Action::CloseRoster))
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(map_key_to_command(&key(KeyCode::Char('x'))), None);
        assert_eq!(map_key_to_command(&key(KeyCode::Enter)), None);
    }
}
