use ratatui::style::Color;

/// Color theme for the TUI. 256-color indices, matching a plain dark
/// terminal: gray borders, yellow-on-purple selection.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Color,
    pub dim: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            border: Color::Indexed(240),
            dim: Color::Indexed(240),
            selected_fg: Color::Indexed(229),
            selected_bg: Color::Indexed(57),
        }
    }
}
