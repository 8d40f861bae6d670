use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::{
    app::state::{AppState, DisplayState},
    domain::reading::WeatherInfo,
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    match &state.display {
        DisplayState::Loading => render_loading(frame, area, state, theme),
        DisplayState::Loaded(info) => render_table(frame, area, info, theme),
        // Absence of data renders nothing; the loading indicator simply
        // disappears.
        DisplayState::Idle | DisplayState::Empty => {}
    }
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let tick = if state.animate_ui { state.frame_tick } else { 0 };
    let bar_width = usize::from(area.width).saturating_sub(6).clamp(16, 40);

    let lines = vec![
        Line::from(Span::styled(
            format!("{} Carregando dados...", spinner(tick)),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            indeterminate_bar(tick, bar_width),
            Style::default().fg(theme.accent),
        )),
    ];

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(panel, area);
}

fn render_table(frame: &mut Frame, area: Rect, info: &WeatherInfo, theme: Theme) {
    let rows = vec![
        info_row("DATA", &info.date, theme),
        info_row("HORA", &info.time, theme),
        info_row("TEMPERATURA", &info.temperature, theme),
        info_row("UMIDADE", &info.humidity, theme),
    ];

    let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(10)])
        .column_spacing(2)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(table, area);
}

fn info_row(label: &'static str, value: &str, theme: Theme) -> Row<'static> {
    Row::new(vec![
        Cell::from(label).style(
            Style::default()
                .fg(theme.muted_text)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::from(value.to_string()).style(Style::default().fg(theme.text)),
    ])
}

fn spinner(tick: u64) -> &'static str {
    const FRAMES: [&str; 4] = ["-", "\\", "|", "/"];
    FRAMES[(tick as usize) % FRAMES.len()]
}

fn indeterminate_bar(tick: u64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut chars = vec!['·'; width];
    let head = (tick as usize) % width;
    chars[head] = '█';
    if head > 0 {
        chars[head - 1] = '▓';
    }
    if head + 1 < width {
        chars[head + 1] = '▓';
    }
    format!("[{}]", chars.into_iter().collect::<String>())
}
