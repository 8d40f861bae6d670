use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
};

use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, theme: Theme) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Dados Multiplataforma",
        Style::default()
            .fg(theme.header_fg)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .padding(Padding::vertical(1))
            .style(Style::default().bg(theme.header_bg)),
    );
    frame.render_widget(title, area);
}
