use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Static one-line help string under the entry field.
pub const HELP_TEXT: &str = "(esc to alternate, directional to navigate, enter to create)";

pub fn render_help_row(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(Span::styled(
        HELP_TEXT,
        Style::default().fg(app.theme.dim),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
