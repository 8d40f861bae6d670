use chrono::{Local, NaiveDate};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::AppState,
    domain::calendar::{MonthGrid, WEEKDAY_LABELS},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let grid = MonthGrid::containing(state.cursor);
    let today = Local::now().date_naive();

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", grid.month_name(), grid.year),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            WEEKDAY_LABELS.join(" "),
            Style::default().fg(theme.muted_text),
        )),
    ];

    for week in &grid.cells {
        if week.iter().all(Option::is_none) {
            continue;
        }
        lines.push(week_line(week, &grid, state, today, theme));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "arrows move · pgup/pgdn month · enter query · t today · q quit",
        Style::default().fg(theme.muted_text),
    )));

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(panel, area);
}

fn week_line(
    week: &[Option<u32>; 7],
    grid: &MonthGrid,
    state: &AppState,
    today: NaiveDate,
    theme: Theme,
) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, cell) in week.iter().enumerate() {
        match cell {
            Some(day) => {
                let date = NaiveDate::from_ymd_opt(grid.year, grid.month, *day);
                spans.push(Span::styled(
                    format!("{day:>2}"),
                    day_style(date, state, today, theme),
                ));
            }
            None => spans.push(Span::raw("  ")),
        }
        if idx < 6 {
            spans.push(Span::raw(" "));
        }
    }
    Line::from(spans)
}

fn day_style(date: Option<NaiveDate>, state: &AppState, today: NaiveDate, theme: Theme) -> Style {
    if date == Some(state.cursor) {
        return Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    let mut style = Style::default().fg(theme.text);
    if date == Some(today) {
        style = style.fg(theme.today).add_modifier(Modifier::BOLD);
    }
    if date.is_some() && date == state.selected_date {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}
