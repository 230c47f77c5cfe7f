use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::terminal::state::DashboardState;

/// Returns `true` when the dashboard should exit.
pub fn handle_key(key: KeyEvent, state: &mut DashboardState) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        _ => {}
    }

    if state.is_loading() {
        return false;
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => state.move_selection(-1),
        KeyCode::Home | KeyCode::Char('g') => state.select_first(),
        KeyCode::End | KeyCode::Char('G') => state.select_last(),
        _ => {}
    }
    false
}
