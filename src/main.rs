// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::wildcard_enum_match_arm)]
#![warn(clippy::fn_params_excessive_bools)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::let_and_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::explicit_iter_loop)]

mod app;
mod config;
mod input;
mod layout;
mod logging;
mod rail;
mod ui;
mod view;

use app::{App, LogSink};
use color_eyre::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use layout::LoadedLayout;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};
use std::path::PathBuf;
use std::{io, time::Duration};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    // A broken config.toml must not keep the launcher from starting
    let (config, config_error) = match config::Config::load() {
        Ok(config) => (config, None),
        Err(error) => (config::Config::default(), Some(error)),
    };

    let _log_guard = config::Config::log_dir()
        .and_then(|dir| logging::init(&dir, &config.logging.level))
        .map_err(|error| eprintln!("Logging disabled: {error}"))
        .ok();
    if let Some(error) = config_error {
        warn!(%error, "config.toml unreadable, using defaults");
    }

    let layout = load_layout(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let viewport = ui::viewport_width(Rect::new(0, 0, size.width, size.height));
    let mut app = App::new(layout, config.rail.geometry(), viewport, Box::new(LogSink));
    let res = run_app(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn load_layout(config: &config::Config) -> LoadedLayout {
    let base_dir = config::Config::config_dir().unwrap_or_else(|_| PathBuf::from("."));
    match layout::store_for_source(&config.layout.source, &base_dir, config.layout.timeout()) {
        Ok(store) => {
            info!(source = %store.describe(), "loading layout");
            layout::load(store.as_ref())
        }
        Err(error) => {
            warn!(%error, "layout store unavailable, using built-in defaults");
            LoadedLayout::builtin()
        }
    }
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &config::Config,
) -> Result<()> {
    loop {
        app.clear_expired_status_toast();

        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        // Poll for events with a timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(key_input) = input::key_input(key) {
                        app.handle_key(key_input);
                    }
                    if app.reload_requested {
                        app.replace_layout(load_layout(config));
                    }
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        let size = terminal.size()?;
                        let area = Rect::new(0, 0, size.width, size.height);
                        if let Some(target) =
                            ui::hit_test(area, app.scene(), mouse.column, mouse.row)
                        {
                            app.dispatch_pointer(target);
                        }
                    }
                }
                Event::Resize(width, height) => {
                    app.resize(ui::viewport_width(Rect::new(0, 0, width, height)));
                }
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
    }

    Ok(())
}
