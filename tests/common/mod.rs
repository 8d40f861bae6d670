#![allow(dead_code)]

use chrono::NaiveDate;
use clap::Parser;
use clima_tui::{
    app::{events::AppEvent, state::AppState},
    cli::Cli,
    domain::reading::Reading,
};
use tokio::sync::mpsc;

// A closed local port: spawned fetch tasks fail fast without touching the
// network.
pub fn offline_cli() -> Cli {
    cli_with_store("http://127.0.0.1:9")
}

pub fn cli_with_store(url: &str) -> Cli {
    Cli::parse_from([
        "clima-tui",
        "2026-08-07",
        "--store-url",
        url,
        "--no-animation",
    ])
}

pub fn fixture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

pub fn reading(time: &str, temp: &str, hmd: &str) -> Reading {
    Reading {
        date: Some("2026-08-07".to_string()),
        time: Some(time.to_string()),
        temp: Some(temp.to_string()),
        hmd: Some(hmd.to_string()),
    }
}

pub fn fixture_readings() -> Vec<Reading> {
    vec![
        reading("08:00", "19", "61"),
        reading("14:30", "23", "52"),
        reading("02:00", "16", "70"),
    ]
}

/// Drains the event channel until a fetch completion arrives, skipping frame
/// ticks and other chatter.
pub async fn wait_for_completion(rx: &mut mpsc::Receiver<AppEvent>) -> AppEvent {
    loop {
        match rx.recv().await {
            Some(event @ AppEvent::FetchCompleted { .. }) => return event,
            Some(_) => {}
            None => panic!("event channel closed before the fetch completed"),
        }
    }
}

pub async fn apply(state: &mut AppState, event: AppEvent, tx: &mpsc::Sender<AppEvent>, cli: &Cli) {
    state.handle_event(event, tx, cli).await.unwrap();
}
