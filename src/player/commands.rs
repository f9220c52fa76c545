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

//! MPV-backed audio playback engine and event processing.
//!
//! This module provides the core audio playback logic, leveraging `libmpv` for
//! audio decoding and playback control. It manages a background worker thread
//! that bridges the gap between the command-based [`MediaPlayback`] interface
//! and the low-level MPV property observation system.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`AudioPlayerCommand`]s from the
//!    controller (load, play, pause, seek, volume).
//! 2. **Event Channel**: Broadcasts [`MediaEvent`]s to the main event loop,
//!    such as track progress, duration and end of track.
//!
//! [`MediaPlayback`]: crate::player::MediaPlayback

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    sync::mpsc::{Receiver, Sender, TryRecvError},
    thread,
};

use crate::{events::AppEvent, player::MediaEvent};

/// MPV expresses volume as a percentage.
const MPV_VOLUME_SCALE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AudioPlayerCommand {
    Load(String),
    Play,
    Pause,
    Seek(f64),
    SetVolume(f64),
}

/// Spawns the audio worker thread to process playback commands.
///
/// This function takes ownership of the command receiver and the event sender,
/// moving them into a dedicated background thread.
///
/// If the internal worker returns an error, it is caught here and broadcast as
/// a fatal application event.
pub(crate) fn spawn_player_worker(command_rx: Receiver<AudioPlayerCommand>, event_tx: Sender<AppEvent>) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = audio_player_worker(command_rx, event_tx) {
            log::error!("MPV worker failure: {:?}", e);
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

/// The primary execution loop for the audio player backend.
///
/// This function initializes a local `libmpv` context and alternates between
/// draining incoming commands and waiting briefly for MPV events. It returns
/// once the command channel is closed, i.e. the player handle was dropped.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize or if an event
/// cannot be delivered to the main loop.
fn audio_player_worker(command_rx: Receiver<AudioPlayerCommand>, event_tx: Sender<AppEvent>) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;

    log::info!("MPV audio worker started");

    let mut duration = f64::NAN;

    while process_commands(&mut handler, &command_rx, &mut duration) {
        process_mpv_events(&mut handler, &mut duration, &event_tx)?;
    }

    log::info!("MPV audio worker stopped");

    Ok(())
}

/// Drains and executes all pending commands from the controller.
///
/// Returns `false` once the command channel has been closed.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &Receiver<AudioPlayerCommand>,
    duration: &mut f64,
) -> bool {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(TryRecvError::Empty) => return true,
            Err(TryRecvError::Disconnected) => return false,
        };

        // A failed command leaves the engine as it was, the controller does
        // not track playback failures.
        if let Err(e) = execute_command(handler, &command, duration) {
            log::warn!("Failed to execute {:?}: {:?}", command, e);
        }
    }
}

fn execute_command(
    handler: &mut mpv::MpvHandler,
    command: &AudioPlayerCommand,
    duration: &mut f64,
) -> Result<()> {
    match command {
        AudioPlayerCommand::Load(locator) => {
            *duration = f64::NAN;
            // Pause first so the new file does not start on its own
            handler.set_property("pause", true)?;
            handler
                .command(&["loadfile", locator.as_str(), "replace"])
                .context(format!("Failed to load file: {}", locator))?;
        }
        AudioPlayerCommand::Play => {
            handler.set_property("pause", false)?;
        }
        AudioPlayerCommand::Pause => {
            handler.set_property("pause", true)?;
        }
        AudioPlayerCommand::Seek(seconds) => {
            let position = seconds.to_string();
            handler.command(&["seek", position.as_str(), "absolute"])?;
        }
        AudioPlayerCommand::SetVolume(level) => {
            handler.set_property("volume", level * MPV_VOLUME_SCALE)?;
        }
    }

    Ok(())
}

/// Polls for MPV events and forwards them as media notifications.
///
/// This function waits for up to 50ms for an event from the MPV context.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    duration: &mut f64,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    if let Some(mpv_event) = handler.wait_event(0.05) {
        let media_event = match mpv_event {
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("duration", Format::Double(seconds)) => {
                    *duration = seconds;
                    Some(MediaEvent::MetadataLoaded { duration: seconds })
                }
                ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                    Some(MediaEvent::TimeUpdate {
                        position: seconds,
                        duration: *duration,
                    })
                }
                _ => None,
            },
            mpv::Event::EndFile(Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF)) => {
                Some(MediaEvent::Ended)
            }
            mpv::Event::EndFile(Err(e)) => {
                log::warn!("Playback ended with error: {:?}", e);
                None
            }
            _ => None,
        };

        if let Some(event) = media_event {
            event_tx
                .send(AppEvent::Media(event))
                .context("Failed to send media event")?;
        }
    }

    Ok(())
}
