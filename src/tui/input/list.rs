use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

/// Rows a PageUp/PageDown jump covers, matching the table viewport.
const PAGE: usize = 7;

/// Default navigation handling for the record table.
pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.rows.is_empty() {
        return;
    }
    let last = app.rows.len() - 1;
    let current = app.table.selected().unwrap_or(0);
    let next = match key.code {
        KeyCode::Up | KeyCode::Char('k') => current.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => (current + 1).min(last),
        KeyCode::PageUp => current.saturating_sub(PAGE),
        KeyCode::PageDown => (current + PAGE).min(last),
        KeyCode::Home | KeyCode::Char('g') => 0,
        KeyCode::End | KeyCode::Char('G') => last,
        _ => return,
    };
    app.table.select(Some(next));
}
