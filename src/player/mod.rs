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

//! Audio playback control.
//!
//! This module provides the [`MediaPlayback`] interface the player controller
//! drives, and [`AudioPlayer`], its implementation backed by MPV. The player
//! manages a background worker thread that interfaces with the underlying
//! audio library, so heavy audio operations never block the main application
//! thread.
//!
//! Commands are fire-and-forget: a successful return means the request was
//! handed to the worker. Outcomes come back asynchronously as
//! [`MediaEvent`]s on the application event channel.

mod commands;

use std::sync::mpsc;

#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::{events::AppEvent, player::commands::AudioPlayerCommand};

pub(crate) type Result<T> = std::result::Result<T, PlayerError>;

#[derive(Debug, Error)]
pub(crate) enum PlayerError {
    #[error("audio worker is no longer running")]
    Disconnected,
}

impl<T> From<mpsc::SendError<T>> for PlayerError {
    fn from(_: mpsc::SendError<T>) -> Self {
        PlayerError::Disconnected
    }
}

/// Notifications reported by the playback engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MediaEvent {
    /// Playback position moved, `duration` is the engine's current notion of
    /// the track length and may be `NaN` before the metadata is known.
    TimeUpdate { position: f64, duration: f64 },
    MetadataLoaded { duration: f64 },
    /// The current track played through to its end.
    Ended,
}

/// The media playback primitive.
///
/// Exactly one owner issues commands to an implementation of this trait.
#[cfg_attr(test, automock)]
pub(crate) trait MediaPlayback {
    /// Replaces the current resource with the one at `locator`, leaving it
    /// paused.
    fn load(&mut self, locator: &str) -> Result<()>;

    fn play(&mut self) -> Result<()>;

    fn pause(&mut self) -> Result<()>;

    /// Moves the playback position to `seconds` from the start of the track.
    fn set_position(&mut self, seconds: f64) -> Result<()>;

    /// Sets the output level, `0.0` is silent and `1.0` is full volume.
    fn set_volume(&mut self, level: f64) -> Result<()>;
}

/// A handle to the audio playback engine.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct AudioPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send media notifications (progress, end of
    ///   track, errors) back to the main event loop.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Self { command_tx }
    }

    fn send(&self, command: AudioPlayerCommand) -> Result<()> {
        log::trace!("Sending {:?} to audio worker", command);
        self.command_tx.send(command)?;
        Ok(())
    }
}

impl MediaPlayback for AudioPlayer {
    fn load(&mut self, locator: &str) -> Result<()> {
        self.send(AudioPlayerCommand::Load(locator.to_string()))
    }

    fn play(&mut self) -> Result<()> {
        self.send(AudioPlayerCommand::Play)
    }

    fn pause(&mut self) -> Result<()> {
        self.send(AudioPlayerCommand::Pause)
    }

    fn set_position(&mut self, seconds: f64) -> Result<()> {
        self.send(AudioPlayerCommand::Seek(seconds))
    }

    fn set_volume(&mut self, level: f64) -> Result<()> {
        self.send(AudioPlayerCommand::SetVolume(level))
    }
}
