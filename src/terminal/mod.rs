pub mod cards;
pub mod events;
pub mod state;
pub mod ui;

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{DefaultTerminal, Terminal, backend::TestBackend};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use crate::api::DashboardClient;
use crate::terminal::state::{DashboardState, FetchOutcome};

/// Redraw interval while waiting for input; also drives the spinner.
const TICK: Duration = Duration::from_millis(100);

pub fn run_tui(client: DashboardClient) -> Result<()> {
    color_eyre::install().map_err(|e| anyhow!("{e}"))?;

    let rx = spawn_fetch(client);
    let mut state = DashboardState::new();

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut state, &rx);
    ratatui::restore();

    result
}

/// Fires the dashboard request on a worker thread. Nobody joins it: if the
/// UI exits first the result is simply dropped.
pub fn spawn_fetch(client: DashboardClient) -> Receiver<FetchOutcome> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        log::debug!("Fetching {}", client.dashboard_url());
        let _ = tx.send(client.fetch_dashboard());
    });
    rx
}

/// Moves a finished fetch into `state`. Returns `true` once loaded.
pub fn poll_fetch(state: &mut DashboardState, rx: &Receiver<FetchOutcome>) -> bool {
    if !state.is_loading() {
        return true;
    }
    match rx.try_recv() {
        Ok(outcome) => state.apply(outcome),
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Disconnected) => {
            state.apply(Err(anyhow!("dashboard fetch ended without a result")))
        }
    }
    !state.is_loading()
}

fn run(
    terminal: &mut DefaultTerminal,
    state: &mut DashboardState,
    rx: &Receiver<FetchOutcome>,
) -> Result<()> {
    loop {
        poll_fetch(state, rx);
        terminal.draw(|f| ui::render(f, state))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && events::handle_key(key, state)
        {
            break;
        }
        state.tick();
    }
    Ok(())
}

/// Fetch once and render the result off-screen, for `snapshot`.
pub fn snapshot(client: &DashboardClient, width: u16, height: u16) -> String {
    let mut state = DashboardState::new();
    state.apply(client.fetch_dashboard());
    render_to_string(&state, width, height)
}

/// Renders `state` into a `width`×`height` buffer and returns it as text,
/// one line per row with trailing blanks trimmed.
pub fn render_to_string(state: &DashboardState, width: u16, height: u16) -> String {
    let Ok(mut terminal) = Terminal::new(TestBackend::new(width, height)) else {
        return String::new();
    };
    if terminal.draw(|f| ui::render(f, state)).is_err() {
        return String::new();
    }

    let buf = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buf.area.height {
        let line: String = (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
