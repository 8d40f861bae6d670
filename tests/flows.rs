mod common;

use clima_tui::app::{
    events::AppEvent,
    state::{AppState, DisplayState},
};
use common::{apply, fixture_date, fixture_readings, offline_cli, reading};
use tokio::sync::mpsc;

#[tokio::test]
async fn flow_selection_renders_latest_reading() {
    let cli = offline_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(16);

    apply(&mut state, AppEvent::DateSelected(fixture_date()), &tx, &cli).await;
    assert!(state.is_loading());

    apply(
        &mut state,
        AppEvent::FetchCompleted {
            request: 1,
            readings: Some(fixture_readings()),
        },
        &tx,
        &cli,
    )
    .await;

    match &state.display {
        DisplayState::Loaded(info) => {
            assert_eq!(info.date, "2026-08-07");
            assert_eq!(info.time, "14:30");
            assert_eq!(info.temperature, "23°C");
            assert_eq!(info.humidity, "52%");
        }
        other => panic!("expected loaded display, got {other:?}"),
    }
}

#[tokio::test]
async fn flow_reselection_replaces_previous_reading() {
    let cli = offline_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(16);

    apply(&mut state, AppEvent::DateSelected(fixture_date()), &tx, &cli).await;
    apply(
        &mut state,
        AppEvent::FetchCompleted {
            request: 1,
            readings: Some(fixture_readings()),
        },
        &tx,
        &cli,
    )
    .await;

    // Picking another date replaces the table with the loading indicator
    // until its own result lands.
    let next = fixture_date().succ_opt().unwrap();
    apply(&mut state, AppEvent::DateSelected(next), &tx, &cli).await;
    assert!(state.is_loading());

    apply(
        &mut state,
        AppEvent::FetchCompleted {
            request: 2,
            readings: Some(vec![reading("06:15", "17", "74")]),
        },
        &tx,
        &cli,
    )
    .await;

    match &state.display {
        DisplayState::Loaded(info) => assert_eq!(info.time, "06:15"),
        other => panic!("expected loaded display, got {other:?}"),
    }
}

#[tokio::test]
async fn flow_no_records_leaves_the_screen_empty() {
    let cli = offline_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(16);

    apply(&mut state, AppEvent::DateSelected(fixture_date()), &tx, &cli).await;
    apply(
        &mut state,
        AppEvent::FetchCompleted {
            request: 1,
            readings: Some(Vec::new()),
        },
        &tx,
        &cli,
    )
    .await;

    assert_eq!(state.display, DisplayState::Empty);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn flow_slow_stale_response_never_overwrites_newer_selection() {
    let cli = offline_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(16);

    apply(&mut state, AppEvent::DateSelected(fixture_date()), &tx, &cli).await;
    let next = fixture_date().succ_opt().unwrap();
    apply(&mut state, AppEvent::DateSelected(next), &tx, &cli).await;

    apply(
        &mut state,
        AppEvent::FetchCompleted {
            request: 1,
            readings: Some(vec![reading("23:59", "99", "99")]),
        },
        &tx,
        &cli,
    )
    .await;
    assert!(state.is_loading(), "stale completion must not end loading");

    apply(
        &mut state,
        AppEvent::FetchCompleted {
            request: 2,
            readings: Some(Vec::new()),
        },
        &tx,
        &cli,
    )
    .await;
    assert_eq!(state.display, DisplayState::Empty);
}

#[tokio::test]
async fn flow_quit_key_ends_the_session() {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    let cli = offline_cli();
    let mut state = AppState::new(&cli);
    let (tx, mut rx) = mpsc::channel(16);

    apply(
        &mut state,
        AppEvent::Input(Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        ))),
        &tx,
        &cli,
    )
    .await;

    match rx.recv().await {
        Some(AppEvent::Quit) => {}
        other => panic!("expected quit event, got {other:?}"),
    }

    apply(&mut state, AppEvent::Quit, &tx, &cli).await;
    assert!(!state.running);
}
