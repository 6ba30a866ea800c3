use std::path::PathBuf;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::model::{Person, Roster};
use crate::tui::app::App;

pub const TERM_W: u16 = 70;
pub const TERM_H: u16 = 16;

/// Build an App over an in-memory roster; the data path is never written.
pub fn app_with(entries: &[(&str, &str)]) -> App {
    let mut roster = Roster::default();
    for (name, age) in entries {
        roster.push(Person {
            name: (*name).into(),
            age: (*age).into(),
        });
    }
    App::new(roster, PathBuf::from("/tmp/unused.json"))
}

/// Render the full view into an in-memory buffer and return plain text
/// (no styles), trailing blanks trimmed.
pub fn render_to_string(app: &mut App) -> String {
    let backend = TestBackend::new(TERM_W, TERM_H);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| super::render(frame, app)).unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}
