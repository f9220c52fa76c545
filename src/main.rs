// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Playlist Player TUI.
//!
//! A terminal player for a fixed catalog of playlists.
//!
//! The catalog is read once at start-up from a JSON document. The user steps
//! through playlists and their tracks, plays and pauses, scrubs through the
//! current track and sets the volume, while an MPV worker does the actual
//! audio playback.
//!
//! ## Architecture
//!
//! * The **Main Thread** owns the terminal, the catalog and the player
//!   controller, and handles one event at a time.
//! * The **Audio Worker** owns the MPV context, executes playback commands
//!   and reports progress and end of track.
//! * **Input and Tick Threads** capture key presses and drive periodic
//!   redraws.
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is restored even when the event loop fails. Communication
//! between threads is handled via `std::sync::mpsc` channels.

mod components;
mod config;
mod controller;
mod controls;
mod events;
mod logging;
mod model;
mod player;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result, bail};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    path::PathBuf,
    rc::Rc,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    components::{StatusLine, TrackListView},
    config::AppConfig,
    controller::PlayerController,
    events::{AppEvent, process_events},
    model::Catalog,
    player::AudioPlayer,
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub controller: PlayerController<AudioPlayer>,

    pub track_list: TrackListView,

    pub status: StatusLine,
}

impl App {
    /// Create a new instance of application state, starting the audio worker
    /// and loading the first track of the catalog.
    pub fn new(config: AppConfig, catalog: Rc<Catalog>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let audio_player = AudioPlayer::new(event_tx.clone());
        let controller = PlayerController::new(catalog, audio_player, config.volume)
            .context("Failed to load the first track")?;

        Ok(Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            controller,
            track_list: TrackListView::new(),
            status: StatusLine::new(),
        })
    }
}

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    catalog: Option<PathBuf>,
    help: bool,
}

/// The entry point of the application.
///
/// Reads the configuration and catalog, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1).collect())?;
    if args.help {
        print_help();
        return Ok(());
    }

    let config = config::load_config();
    logging::setup_logging(&config.log_file)?;

    let Some(catalog_path) = args.catalog.or_else(|| config.catalog.clone()) else {
        bail!("No catalog given, pass --catalog <path> or set `catalog` in the configuration file");
    };

    let catalog = Catalog::load(&catalog_path)
        .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;

    let mut app = App::new(config, Rc::new(catalog)).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

fn parse_args(args: Vec<String>) -> Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "-c" | "--catalog" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    bail!("--catalog requires a path");
                };
                if value.trim().is_empty() {
                    bail!("--catalog cannot be empty");
                }
                out.catalog = Some(PathBuf::from(value.trim()));
            }
            "-h" | "--help" => out.help = true,
            other => bail!("unknown argument {other}"),
        }
        index += 1;
    }
    Ok(out)
}

fn print_help() {
    println!("playdeck");
    println!("  -c, --catalog <path>   Catalog document to play from");
    println!("  -h, --help             Show this help");
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    log::info!("Player started");

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
