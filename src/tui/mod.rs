pub mod action;
pub mod handlers;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::route::Route;
use crate::store;
use action::AppEvent;
use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use state::AppState;
use std::io::{self, Stdout};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(config: Config, start: Route) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, config, start).await;
    // Restore even when the loop failed, then report the loop's error first.
    let restored = restore_terminal(&mut terminal);
    result.and(restored)
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn event_loop(terminal: &mut Term, config: Config, start: Route) -> Result<()> {
    let mut state = AppState::new(config)?;
    {
        let mut store = store::shared();
        store.subscribe(|ui| log::debug!("ui state changed: {:?}", ui));
        state.enter(start, &mut store);
    }

    let mut events = EventStream::new();

    loop {
        {
            let store = store::shared();
            terminal.draw(|f| view::draw(f, &state, &store))?;
        }

        let event = tokio::select! {
            _ = state.ticker.tick() => AppEvent::Tick,
            next = events.next() => match next {
                Some(Ok(ev)) => AppEvent::Terminal(ev),
                Some(Err(e)) => return Err(e).context("Terminal event stream failed"),
                None => break,
            },
        };

        match event {
            AppEvent::Tick => state.refresh_clock(),
            AppEvent::Terminal(Event::Key(key)) => {
                if let Some(action) = handlers::key_to_action(&state, key) {
                    let mut store = store::shared();
                    handlers::apply(&mut state, &mut store, action);
                    state.editor.sync_with(&store);
                }
            }
            AppEvent::Terminal(_) => {}
        }

        if state.should_quit {
            break;
        }
    }
    Ok(())
}
