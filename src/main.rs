//! Terminal lifecycle, event loop, and cleanup for the portfolio TUI.

mod actions;
mod app;
mod content;
mod events;
mod links;
mod replies;
mod sheet;
mod state;
mod suggest;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use app::App;
use events::{key_to_action, mouse_to_action, TICK_RATE};
use replies::{ReplyScheduler, REPLY_DELAY};

fn main() -> Result<()> {
    // Initialise structured logging (RUST_LOG controls the filter).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("folio_tui=info".parse()?))
        .with_target(false)
        .init();

    let delay = std::env::var("FOLIO_REPLY_DELAY_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(REPLY_DELAY);

    // Set up the terminal in raw / alternate-screen mode with mouse capture
    // for the sheet drag gesture.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(ReplyScheduler::new(delay)?);
    let (cols, rows) = crossterm::terminal::size()?;
    app.handle_resize(cols, rows);

    let result = run_loop(&mut terminal, &mut app);

    // Always restore the terminal, even on error.
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.tick = app.tick.wrapping_add(1);
        app.poll_replies();

        if app.should_quit {
            return Ok(());
        }

        let tick = app.tick;
        terminal.draw(|frame| ui::render(frame, app, tick))?;

        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) => {
                    let action = key_to_action(
                        &key,
                        app.state.palette.visible,
                        app.state.palette.suggestions_visible(),
                    );
                    if let Some(a) = action {
                        app.dispatch(a);
                        if app.should_quit {
                            return Ok(());
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    let ctx = app.mouse_context();
                    if let Some(a) = mouse_to_action(&mouse, &ctx) {
                        app.dispatch(a);
                    }
                }
                Event::Resize(cols, rows) => app.handle_resize(cols, rows),
                _ => {}
            }
        }
    }
}
