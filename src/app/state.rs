use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use crate::{
    app::events::{AppEvent, start_frame_task},
    cli::Cli,
    data::store::StoreClient,
    domain::{
        calendar::{step_days, step_months},
        reading::{WeatherInfo, format_query_date, select_latest},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Idle,
    Loading,
    Loaded(WeatherInfo),
    Empty,
}

#[derive(Debug)]
pub struct AppState {
    pub running: bool,
    pub cursor: NaiveDate,
    pub selected_date: Option<NaiveDate>,
    pub display: DisplayState,
    pub latest_request: u64,
    pub frame_tick: u64,
    pub animate_ui: bool,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        Self {
            running: true,
            cursor: cli.date.unwrap_or_else(|| Local::now().date_naive()),
            selected_date: None,
            display: DisplayState::Idle,
            latest_request: 0,
            frame_tick: 0,
            animate_ui: !cli.no_animation,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.display, DisplayState::Loading)
    }

    /// Single reducer for the whole screen. All mutation happens here, on the
    /// event-loop task; fetch tasks only ever talk back through the channel.
    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                start_frame_task(tx.clone(), cli.fps);
                tx.send(AppEvent::DateSelected(self.cursor)).await?;
            }
            AppEvent::TickFrame => {
                self.frame_tick = self.frame_tick.saturating_add(1);
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::DateSelected(date) => {
                self.cursor = date;
                self.selected_date = Some(date);
                self.display = DisplayState::Loading;
                self.start_fetch(tx, cli, date);
            }
            AppEvent::FetchCompleted { request, readings } => {
                // A completion for anything but the newest request is stale;
                // dropping it here is what keeps a slow response for an old
                // date from overwriting the current selection.
                if request != self.latest_request {
                    tracing::debug!(
                        request,
                        latest = self.latest_request,
                        "dropping stale fetch completion"
                    );
                    return Ok(());
                }
                self.display = match readings {
                    Some(readings) => match select_latest(&readings) {
                        Some(info) => DisplayState::Loaded(info),
                        None => DisplayState::Empty,
                    },
                    None => DisplayState::Empty,
                };
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }

        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => {
                    tx.send(AppEvent::Quit).await?;
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    tx.send(AppEvent::DateSelected(self.cursor)).await?;
                }
                KeyCode::Char('r') => {
                    if let Some(date) = self.selected_date {
                        tx.send(AppEvent::DateSelected(date)).await?;
                    }
                }
                KeyCode::Char('t') => {
                    self.cursor = Local::now().date_naive();
                }
                KeyCode::Left => self.cursor = step_days(self.cursor, -1),
                KeyCode::Right => self.cursor = step_days(self.cursor, 1),
                KeyCode::Up => self.cursor = step_days(self.cursor, -7),
                KeyCode::Down => self.cursor = step_days(self.cursor, 7),
                KeyCode::PageUp | KeyCode::Char('[') => self.cursor = step_months(self.cursor, -1),
                KeyCode::PageDown | KeyCode::Char(']') => self.cursor = step_months(self.cursor, 1),
                _ => {}
            }
        }

        Ok(())
    }

    fn start_fetch(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli, date: NaiveDate) {
        self.latest_request += 1;
        let request = self.latest_request;
        let client = StoreClient::new(cli.store_url(), cli.collection.clone());
        let query_date = format_query_date(date);
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let readings = match client.fetch_readings(&query_date).await {
                Ok(readings) => Some(readings),
                Err(err) => {
                    tracing::error!(date = %query_date, error = %err, "sensor query failed");
                    None
                }
            };
            let _ = tx2
                .send(AppEvent::FetchCompleted { request, readings })
                .await;
        });
    }
}
