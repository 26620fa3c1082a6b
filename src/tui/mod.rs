//! Full-screen terminal UI for SOS.

mod app;
mod geometry;
mod input;
mod ui;

pub use app::{App, AppAction, Focus, Popup};
pub use geometry::BoardGeometry;
pub use input::move_cursor;
pub use ui::{draw, player_color};

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the player quits.
///
/// The terminal is restored even when the event loop fails.
#[instrument(skip(config))]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting SOS terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!(error = %e, "Terminal UI failed");
    }
    info!(moves = app.game().history().len(), "Terminal UI closed");
    res
}

fn run_app(terminal: &mut CrosstermTerminal, app: &mut App) -> Result<()> {
    loop {
        let mut geometry = None;
        terminal.draw(|f| geometry = Some(draw(f, app)))?;
        if let Some(geometry) = geometry {
            app.set_geometry(geometry);
        }

        // Poll with a short timeout so resizes redraw promptly.
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            // Skip key release events (crossterm fires both press and release on some platforms).
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if app.handle_key(key) == AppAction::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
}
