mod editor;
mod list;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::io::store_io::{self, StoreError};
use crate::ops::roster_ops;

use super::app::{App, Focus};

/// What a key event means in the current focus state. Everything not
/// recognized here is forwarded to the focused widget's default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleFocus,
    Quit,
    DeleteSelected,
    SubmitEntry,
    Forward,
}

/// Map `(focus, key)` to a command.
///
/// `q` quits from either focus, including while typing in the editor,
/// so a name containing `q` cannot be entered. Long-standing behavior,
/// kept as-is.
pub fn interpret(focus: Focus, key: &KeyEvent) -> Command {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Command::ToggleFocus,
        (KeyCode::Char('q'), KeyModifiers::NONE) => Command::Quit,
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Command::Quit,
        (KeyCode::Backspace, _) if focus == Focus::List => Command::DeleteSelected,
        (KeyCode::Enter, _) if focus == Focus::Editor => Command::SubmitEntry,
        _ => Command::Forward,
    }
}

/// Handle one key event. The only failure mode is the write-through save;
/// a save error is fatal and propagates out of the event loop.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    match interpret(app.focus, &key) {
        Command::ToggleFocus => {
            app.toggle_focus();
            Ok(())
        }
        Command::Quit => {
            app.should_quit = true;
            Ok(())
        }
        Command::DeleteSelected => delete_selected(app),
        Command::SubmitEntry => submit_entry(app),
        Command::Forward => {
            match app.focus {
                Focus::List => list::handle_key(app, key),
                Focus::Editor => editor::handle_key(app, key),
            }
            Ok(())
        }
    }
}

/// Remove the last record matching the highlighted row's name, then
/// re-project and persist. No selection (empty list) is a no-op.
fn delete_selected(app: &mut App) -> Result<(), StoreError> {
    let Some(name) = app.selected_name() else {
        return Ok(());
    };
    if let Some(removed) = roster_ops::delete_last_match(&mut app.roster, &name) {
        app.refresh_rows();
        app.clamp_selection();
        store_io::save(&app.data_path, &app.roster)?;
        log::info!("deleted {:?}, {} records", removed.name, app.roster.len());
    }
    Ok(())
}

/// Append a record from the editor buffer, clear the editor, re-project
/// and persist. Never rejects the input.
fn submit_entry(app: &mut App) -> Result<(), StoreError> {
    let added = roster_ops::append_entry(&mut app.roster, &app.edit_buffer);
    app.refresh_rows();
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.clamp_selection();
    store_io::save(&app.data_path, &app.roster)?;
    log::info!("added {:?}, {} records", added.name, app.roster.len());
    Ok(())
}
