mod app;
mod app_event;
mod components;
mod fetch;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use razzie_api::ApiClient;
use std::io;
use std::sync::mpsc::{self, Sender};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

use app::{AppState, View};
use app_event::AppEvent;

/// The single page the movies view loads on activation.
const MOVIE_PAGE_SIZE: u32 = 100;

pub fn run(handle: &Handle, client: ApiClient) -> Result<()> {
    let (tx, rx) = mpsc::channel();

    let mut state = AppState::new();
    let request = state.begin_dashboard_request();
    fetch::spawn_dashboard(handle, client.clone(), tx.clone(), request);
    let request = state.begin_movies_request();
    fetch::spawn_movies(handle, client.clone(), tx.clone(), request, MOVIE_PAGE_SIZE);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    while !state.should_quit {
        terminal.draw(|f| ui::draw(f, &state))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                handle_key(key, &mut state, handle, &client, &tx);
            }
        }

        while let Ok(app_event) = rx.try_recv() {
            state.apply(app_event);
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_key(
    key: KeyEvent,
    state: &mut AppState,
    handle: &Handle,
    client: &ApiClient,
    tx: &Sender<AppEvent>,
) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
        }
        KeyCode::Tab => state.toggle_view(),
        KeyCode::Backspace => state.pop_input(),
        KeyCode::Enter => match state.view {
            View::Dashboard => {
                if let Some((request, year)) = state.submit_lookup() {
                    fetch::spawn_winners(handle, client.clone(), tx.clone(), request, year);
                }
            }
            View::Movies => state.submit_filter(),
        },
        KeyCode::Char(c) => state.push_input(c),
        _ => {}
    }
}
