use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Hint shown while the entry buffer is empty.
pub const PLACEHOLDER: &str = "Name, Age";

/// Render the single-line entry field: a `> ` prompt, then the buffer (or
/// the placeholder), with a block cursor only while the editor is focused.
pub fn render_input_field(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Editor;
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
    let dim = Style::default().fg(app.theme.dim);

    let mut spans: Vec<Span> = vec![Span::raw("> ")];

    if app.edit_buffer.is_empty() {
        if focused {
            let head = unicode::grapheme_at(PLACEHOLDER, 0);
            spans.push(Span::styled(head.to_string(), dim.add_modifier(Modifier::REVERSED)));
            spans.push(Span::styled(PLACEHOLDER[head.len()..].to_string(), dim));
        } else {
            spans.push(Span::styled(PLACEHOLDER.to_string(), dim));
        }
    } else {
        spans.push(Span::raw(app.edit_buffer[..app.edit_cursor].to_string()));
        if focused {
            let under = unicode::grapheme_at(&app.edit_buffer, app.edit_cursor);
            if under.is_empty() {
                // Cursor past the last grapheme
                spans.push(Span::styled(" ", cursor_style));
            } else {
                spans.push(Span::styled(under.to_string(), cursor_style));
                spans.push(Span::raw(
                    app.edit_buffer[app.edit_cursor + under.len()..].to_string(),
                ));
            }
        } else {
            spans.push(Span::raw(app.edit_buffer[app.edit_cursor..].to_string()));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
