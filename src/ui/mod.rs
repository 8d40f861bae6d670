pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
};

use crate::{app::state::AppState, cli::Cli, ui::theme::theme_for};

pub fn render(frame: &mut Frame, state: &AppState, cli: &Cli) {
    let area = frame.area();

    if area.width < 34 || area.height < 18 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 34x18.")
            .block(Block::default().borders(Borders::ALL).title("clima-tui"));
        frame.render_widget(warning, area);
        return;
    }

    let theme = theme_for(cli);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(12),
            Constraint::Min(7),
        ])
        .split(area);

    widgets::header::render(frame, chunks[0], theme);
    widgets::calendar::render(frame, chunks[1], state, theme);
    widgets::info::render(frame, chunks[2], state, theme);
}
