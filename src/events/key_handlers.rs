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

//! Keyboard input routing.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::{
    App,
    controls::{scrub_by, volume_target},
    events::AppEvent,
};

/// Maps keyboard input to player operations.
///
/// This function acts as the input router for the TUI, translating low-level
/// [`KeyEvent`]s into controller operations. It handles:
///
/// * **Application Control**: exiting the program.
/// * **Navigation**: next/previous track and playlist, and moving the track
///   list highlight.
/// * **Playback**: play/pause, scrubbing and volume, through the bounded
///   controls in [`crate::controls`].
///
/// A failed controller operation is reported to the user and does not end
/// the event loop.
///
/// # Errors
///
/// Returns an error if an application event cannot be queued.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let state = app.controller.state().clone();
    let track_count = app.controller.current_playlist().len();
    let fine_seek_step = app.config.fine_seek_step;
    let seek_step = app.config.seek_step;
    let volume_step = app.config.volume_step;

    let result = match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            Ok(())
        }

        KeyCode::Char(' ') => app.controller.toggle_play_pause(),

        KeyCode::Char('n') | KeyCode::Right => app.controller.select_next_track(),
        KeyCode::Char('p') | KeyCode::Left => app.controller.select_previous_track(),
        KeyCode::Char(']') => app.controller.select_next_playlist(),
        KeyCode::Char('[') => app.controller.select_previous_playlist(),

        KeyCode::Char('j') | KeyCode::Down => {
            app.track_list.next(track_count);
            Ok(())
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.track_list.previous(track_count);
            Ok(())
        }
        KeyCode::Enter => app.controller.select_track(app.track_list.highlighted()),

        KeyCode::Char(',') => scrub_by(&mut app.controller, -fine_seek_step),
        KeyCode::Char('.') => scrub_by(&mut app.controller, fine_seek_step),
        KeyCode::Char('<') => scrub_by(&mut app.controller, -seek_step),
        KeyCode::Char('>') => scrub_by(&mut app.controller, seek_step),

        KeyCode::Char('-') => {
            let volume = volume_target(state.volume, -volume_step);
            app.controller.set_volume(volume)
        }
        KeyCode::Char('=') | KeyCode::Char('+') => {
            let volume = volume_target(state.volume, volume_step);
            app.controller.set_volume(volume)
        }

        _ => Ok(()),
    };

    app.status.report(result);

    let new_state = app.controller.state();
    if new_state.playlist_index != state.playlist_index || new_state.track_index != state.track_index {
        app.track_list.follow(new_state.track_index);
    }

    Ok(())
}
