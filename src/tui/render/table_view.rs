use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::tui::app::App;
use crate::util::unicode;

/// Fixed column width in cells, for both Name and Age.
pub const COL_WIDTH: u16 = 15;

/// Render the bordered record table. The highlighted row tracks the table
/// selection regardless of focus; cells are truncated to the column width.
pub fn render_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let header = Row::new(vec!["Name", "Age"])
        .style(Style::default().add_modifier(Modifier::UNDERLINED));

    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(unicode::truncate_to_width(&r.name, COL_WIDTH as usize)),
                Cell::from(unicode::truncate_to_width(&r.age, COL_WIDTH as usize)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [Constraint::Length(COL_WIDTH), Constraint::Length(COL_WIDTH)],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .row_highlight_style(
        Style::default()
            .fg(app.theme.selected_fg)
            .bg(app.theme.selected_bg),
    );

    frame.render_stateful_widget(table, area, &mut app.table);
}
