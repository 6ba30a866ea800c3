pub mod help_row;
pub mod input_field;
pub mod table_view;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use super::app::App;

/// Table region height: 7 visible rows inside the border pair.
const TABLE_HEIGHT: u16 = 9;

/// Main render function. Three fixed regions in vertical order: the
/// record table, the entry field, the help row. Redrawn after every event.
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // top padding
            Constraint::Length(TABLE_HEIGHT), // record table
            Constraint::Length(1),
            Constraint::Length(1), // entry field
            Constraint::Length(1),
            Constraint::Length(1), // help row
            Constraint::Min(0),
        ])
        .split(frame.area());

    table_view::render_table(frame, app, chunks[1]);
    input_field::render_input_field(frame, app, chunks[3]);
    help_row::render_help_row(frame, app, chunks[5]);
}
