use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::util::unicode;

/// Maximum characters accepted into the entry buffer.
const CHAR_LIMIT: usize = 156;

/// Default text-editing handling for the entry field. Cursor movement and
/// deletion are grapheme-aware; the cursor byte offset always lands on a
/// grapheme boundary.
pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            insert_char(app, c);
        }
        KeyCode::Backspace => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(prev..app.edit_cursor, "");
                app.edit_cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(end) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(app.edit_cursor..end, "");
            }
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = next;
            }
        }
        KeyCode::Home => app.edit_cursor = 0,
        KeyCode::End => app.edit_cursor = app.edit_buffer.len(),
        _ => {}
    }
}

fn insert_char(app: &mut App, c: char) {
    if app.edit_buffer.chars().count() >= CHAR_LIMIT {
        return;
    }
    app.edit_buffer.insert(app.edit_cursor, c);
    app.edit_cursor += c.len_utf8();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Roster;
    use std::path::PathBuf;

    fn editor_app() -> App {
        let mut app = App::new(Roster::default(), PathBuf::from("/tmp/unused.json"));
        app.toggle_focus();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut app = editor_app();
        type_str(&mut app, "Ana,30");
        assert_eq!(app.edit_buffer, "Ana,30");
        assert_eq!(app.edit_cursor, 6);
    }

    #[test]
    fn mid_buffer_insert_after_left() {
        let mut app = editor_app();
        type_str(&mut app, "Aa");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.edit_buffer, "Ana");
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut app = editor_app();
        type_str(&mut app, "Ze");
        press(&mut app, KeyCode::Char('\u{301}')); // combining acute on 'e'
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.edit_buffer, "Z");
        assert_eq!(app.edit_cursor, 1);
    }

    #[test]
    fn delete_removes_grapheme_under_cursor() {
        let mut app = editor_app();
        type_str(&mut app, "abc");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.edit_buffer, "bc");
        assert_eq!(app.edit_cursor, 0);
    }

    #[test]
    fn movement_clamps_at_both_ends() {
        let mut app = editor_app();
        type_str(&mut app, "ab");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.edit_cursor, 2);
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.edit_cursor, 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.edit_cursor, 2);
    }

    #[test]
    fn char_limit_drops_further_input() {
        let mut app = editor_app();
        type_str(&mut app, &"x".repeat(CHAR_LIMIT + 10));
        assert_eq!(app.edit_buffer.chars().count(), CHAR_LIMIT);
    }

    #[test]
    fn control_chords_are_ignored() {
        let mut app = editor_app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL),
        );
        assert!(app.edit_buffer.is_empty());
    }
}
