pub mod layout;
pub mod render;

use ratatui::style::{Color, Modifier, Style};

/// Border style for a pane depending on focus
pub(crate) fn pane_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub(crate) fn active_dot_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn inactive_dot_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
