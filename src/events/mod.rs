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

//! Application event handling.
//!
//! Every input to the player arrives as an [`AppEvent`] on a single channel:
//! key presses from the input thread, notifications from the audio worker and
//! periodic ticks. Events are handled one at a time, each running to
//! completion and followed by a redraw, so no partially applied state is ever
//! rendered.

mod handlers;
mod key_handlers;

use handlers::*;

use std::io::Stdout;

use anyhow::{Result, anyhow};
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, player::MediaEvent, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Media(MediaEvent),

    Tick,

    ExitApplication,

    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error if the terminal cannot be drawn or a fatal error is
/// reported by a background worker.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::FatalError(message) => return Err(anyhow!(message)),
            AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
            AppEvent::Media(media_event) => handle_media_event(app, media_event),
            // Nothing to update, the tick only forces the redraw below
            AppEvent::Tick => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
