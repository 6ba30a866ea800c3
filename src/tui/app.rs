use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::TableState;

use crate::io::store_io;
use crate::model::Roster;

use super::input;
use super::render;
use super::theme::Theme;

/// Which region owns keyboard input. Exactly one at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Editor,
}

/// A displayed table row: a rendering-only projection of a record,
/// regenerated from the roster after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub name: String,
    pub age: String,
}

/// Project the roster into displayed rows, one per record, in store order.
pub fn project_rows(roster: &Roster) -> Vec<RosterRow> {
    roster
        .iter()
        .map(|p| RosterRow {
            name: p.name.clone(),
            age: p.age.clone(),
        })
        .collect()
}

/// Main application state. Single-writer: the event loop owns it and hands
/// it by `&mut` to input handling and rendering.
pub struct App {
    pub roster: Roster,
    pub rows: Vec<RosterRow>,
    pub focus: Focus,
    pub table: TableState,
    pub edit_buffer: String,
    /// Byte offset of the editor cursor, always on a grapheme boundary
    pub edit_cursor: usize,
    pub should_quit: bool,
    pub theme: Theme,
    pub data_path: PathBuf,
}

impl App {
    pub fn new(roster: Roster, data_path: PathBuf) -> Self {
        let rows = project_rows(&roster);
        let mut table = TableState::default();
        if !rows.is_empty() {
            table.select(Some(0));
        }
        App {
            roster,
            rows,
            focus: Focus::List,
            table,
            edit_buffer: String::new(),
            edit_cursor: 0,
            should_quit: false,
            theme: Theme::default(),
            data_path,
        }
    }

    /// Flip which region owns input. The table highlight and the editor
    /// cursor follow this state in lockstep: never both, never neither.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::List => Focus::Editor,
            Focus::Editor => Focus::List,
        };
        if self.focus == Focus::List {
            self.clamp_selection();
        }
    }

    /// Regenerate the displayed rows from the roster. Called after every
    /// mutation; rows are never patched in place.
    pub fn refresh_rows(&mut self) {
        self.rows = project_rows(&self.roster);
    }

    /// Name of the currently highlighted row, if any.
    pub fn selected_name(&self) -> Option<String> {
        let index = self.table.selected()?;
        self.rows.get(index).map(|row| row.name.clone())
    }

    /// Keep the table selection inside the row range after a mutation.
    pub fn clamp_selection(&mut self) {
        if self.rows.is_empty() {
            self.table.select(None);
        } else {
            let index = self.table.selected().unwrap_or(0);
            self.table.select(Some(index.min(self.rows.len() - 1)));
        }
    }
}

/// Run the TUI: load the roster from the fixed path, then drive the
/// crossterm event loop until quit or a fatal store error.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let data_path = PathBuf::from(store_io::DATA_PATH);
    let roster = store_io::load(&data_path)?;
    log::info!(
        "loaded {} records from {}",
        roster.len(),
        data_path.display()
    );
    let mut app = App::new(roster, data_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            // A failed write-through save is fatal and exits the loop
            input::handle_key(app, key)?;
        }

        if app.should_quit {
            break;
        }
    }
    log::info!("quit");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Person;

    fn app_with(entries: &[(&str, &str)]) -> App {
        let mut roster = Roster::default();
        for (name, age) in entries {
            roster.push(Person {
                name: (*name).into(),
                age: (*age).into(),
            });
        }
        App::new(roster, PathBuf::from("/tmp/unused.json"))
    }

    #[test]
    fn initial_focus_is_list() {
        let app = app_with(&[("A", "1")]);
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn toggle_twice_returns_to_original_focus() {
        let mut app = app_with(&[]);
        app.toggle_focus();
        assert_eq!(app.focus, Focus::Editor);
        app.toggle_focus();
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn projection_is_idempotent() {
        let app = app_with(&[("A", "1"), ("B", "2")]);
        assert_eq!(project_rows(&app.roster), project_rows(&app.roster));
    }

    #[test]
    fn projection_preserves_store_order() {
        let app = app_with(&[("B", "2"), ("A", "1")]);
        let names: Vec<&str> = app.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn initial_selection_follows_contents() {
        assert_eq!(app_with(&[]).table.selected(), None);
        assert_eq!(app_with(&[("A", "1")]).table.selected(), Some(0));
    }

    #[test]
    fn clamp_selection_after_shrink() {
        let mut app = app_with(&[("A", "1"), ("B", "2")]);
        app.table.select(Some(1));
        app.roster.remove(1);
        app.refresh_rows();
        app.clamp_selection();
        assert_eq!(app.table.selected(), Some(0));
    }

    #[test]
    fn selected_name_on_empty_list_is_none() {
        let app = app_with(&[]);
        assert_eq!(app.selected_name(), None);
    }
}
