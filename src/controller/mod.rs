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

//! The player state machine.
//!
//! [`PlayerController`] owns every piece of mutable player state and is the
//! only component that issues commands to the [`MediaPlayback`] primitive.
//! Each operation mutates the state and then directly enforces the rule that
//! keeps the primitive in step with it:
//!
//! * a change of the active track reloads it, and restarts playback when the
//!   user intends to be playing;
//! * a change of play/pause intent issues the matching play or pause;
//! * a change of volume is forwarded as is.
//!
//! Playback progress and duration are only ever taken from the primitive's
//! notifications, apart from the optimistic position write made by
//! [`PlayerController::seek`].

use std::rc::Rc;

use crate::{
    model::{Catalog, Playlist, Track},
    player::{MediaEvent, MediaPlayback, Result},
    util::format::format_time,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlayerState {
    pub(crate) playlist_index: usize,
    pub(crate) track_index: usize,
    /// The last explicit play/pause request.
    pub(crate) is_playing: bool,
    pub(crate) volume: f64,
    /// Seconds elapsed in the current track.
    pub(crate) progress: f64,
    /// Length of the current track in seconds, `0` or `NaN` until known.
    pub(crate) duration: f64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            playlist_index: 0,
            track_index: 0,
            is_playing: false,
            volume: 1.0,
            progress: 0.0,
            duration: 0.0,
        }
    }
}

pub(crate) struct PlayerController<M: MediaPlayback> {
    catalog: Rc<Catalog>,
    media: M,
    state: PlayerState,
}

impl<M: MediaPlayback> PlayerController<M> {
    /// Creates the controller on the first track of the first playlist,
    /// paused, and loads that track into the primitive.
    pub(crate) fn new(catalog: Rc<Catalog>, media: M, volume: f64) -> Result<Self> {
        let mut controller = Self {
            catalog,
            media,
            state: PlayerState {
                volume,
                ..PlayerState::default()
            },
        };

        controller.track_changed()?;
        controller.volume_changed()?;

        Ok(controller)
    }

    pub(crate) fn state(&self) -> &PlayerState {
        &self.state
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn current_playlist(&self) -> &Playlist {
        &self.catalog.playlists()[self.state.playlist_index]
    }

    pub(crate) fn current_track(&self) -> &Track {
        &self.current_playlist().tracks[self.state.track_index]
    }

    pub(crate) fn select_next_track(&mut self) -> Result<()> {
        let count = self.current_playlist().len();
        self.state.track_index = (self.state.track_index + 1) % count;
        self.track_changed()
    }

    pub(crate) fn select_previous_track(&mut self) -> Result<()> {
        let count = self.current_playlist().len();
        self.state.track_index = (self.state.track_index + count - 1) % count;
        self.track_changed()
    }

    /// Makes the track at `index` of the current playlist the active one,
    /// wrapping indices past the end of the playlist.
    pub(crate) fn select_track(&mut self, index: usize) -> Result<()> {
        let count = self.current_playlist().len();
        self.state.track_index = index % count;
        self.track_changed()
    }

    pub(crate) fn select_next_playlist(&mut self) -> Result<()> {
        let count = self.catalog.len();
        self.state.playlist_index = (self.state.playlist_index + 1) % count;
        self.state.track_index = 0;
        self.track_changed()
    }

    pub(crate) fn select_previous_playlist(&mut self) -> Result<()> {
        let count = self.catalog.len();
        self.state.playlist_index = (self.state.playlist_index + count - 1) % count;
        self.state.track_index = 0;
        self.track_changed()
    }

    /// Flips the play/pause intent. This is the only operation that changes
    /// it, every other transition keeps the current intent.
    pub(crate) fn toggle_play_pause(&mut self) -> Result<()> {
        self.state.is_playing = !self.state.is_playing;
        self.intent_changed()
    }

    /// Moves playback to `seconds`. The value is trusted to lie within
    /// `[0, duration]`, which the scrub control guarantees.
    pub(crate) fn seek(&mut self, seconds: f64) -> Result<()> {
        self.state.progress = seconds;
        self.media.set_position(seconds)
    }

    /// Sets the output level. The value is trusted to lie within `[0, 1]`,
    /// which the volume control guarantees.
    pub(crate) fn set_volume(&mut self, volume: f64) -> Result<()> {
        self.state.volume = volume;
        self.volume_changed()
    }

    pub(crate) fn handle_media_event(&mut self, event: MediaEvent) -> Result<()> {
        match event {
            MediaEvent::TimeUpdate { position, duration } => {
                self.on_time_update(position, duration);
                Ok(())
            }
            MediaEvent::MetadataLoaded { duration } => {
                self.on_metadata_loaded(duration);
                Ok(())
            }
            MediaEvent::Ended => self.on_ended(),
        }
    }

    fn on_time_update(&mut self, position: f64, duration: f64) {
        self.state.progress = position;
        self.state.duration = duration;
    }

    fn on_metadata_loaded(&mut self, duration: f64) {
        self.state.duration = duration;
    }

    fn on_ended(&mut self) -> Result<()> {
        log::debug!("Track finished, advancing");
        self.select_next_track()
    }

    // Reload the active track, resuming playback if that is the intent.
    fn track_changed(&mut self) -> Result<()> {
        let locator = self.current_track().url.clone();

        log::info!(
            "Loading playlist {} track {}: {}",
            self.state.playlist_index,
            self.state.track_index,
            locator
        );

        self.media.load(&locator)?;
        if self.state.is_playing {
            self.media.play()?;
        }

        Ok(())
    }

    fn intent_changed(&mut self) -> Result<()> {
        log::debug!("Playback intent changed, playing: {}", self.state.is_playing);

        if self.state.is_playing {
            self.media.play()
        } else {
            self.media.pause()
        }
    }

    fn volume_changed(&mut self) -> Result<()> {
        self.media.set_volume(self.state.volume)
    }

    pub(crate) fn elapsed_text(&self) -> String {
        format_time(self.state.progress)
    }

    pub(crate) fn duration_text(&self) -> String {
        format_time(self.state.duration)
    }

    pub(crate) fn remaining_text(&self) -> String {
        format_time(self.state.duration - self.state.progress)
    }

    /// Fraction of the current track played so far, `0` while the duration
    /// is unknown.
    pub(crate) fn progress_ratio(&self) -> f64 {
        let duration = self.state.duration;
        if duration.is_finite() && duration > 0.0 {
            (self.state.progress / duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::eq};
    use proptest::prelude::*;

    use super::*;
    use crate::player::{MockMediaPlayback, PlayerError};

    fn fixture(sizes: &[usize]) -> Rc<Catalog> {
        let playlists = sizes
            .iter()
            .enumerate()
            .map(|(p, &size)| Playlist {
                name: format!("playlist {p}"),
                artist: format!("artist {p}"),
                year: 2000 + p as i32,
                tracks: (0..size)
                    .map(|t| Track {
                        name: format!("track {t}"),
                        url: format!("p{p}/t{t}.mp3"),
                        duration: 180.0,
                    })
                    .collect(),
            })
            .collect();

        Rc::new(Catalog::new(playlists).unwrap())
    }

    /// A controller that has been mounted, with all expectations from the
    /// initial load cleared.
    fn mounted(sizes: &[usize]) -> PlayerController<MockMediaPlayback> {
        let mut media = MockMediaPlayback::new();
        media.expect_load().times(1).returning(|_| Ok(()));
        media.expect_set_volume().times(1).returning(|_| Ok(()));

        let mut controller = PlayerController::new(fixture(sizes), media, 1.0).unwrap();
        controller.media.checkpoint();
        controller
    }

    /// A controller whose primitive accepts any number of commands.
    fn permissive(sizes: &[usize]) -> PlayerController<MockMediaPlayback> {
        let mut controller = mounted(sizes);
        controller.media.expect_load().returning(|_| Ok(()));
        controller.media.expect_play().returning(|| Ok(()));
        controller.media.expect_pause().returning(|| Ok(()));
        controller.media.expect_set_position().returning(|_| Ok(()));
        controller.media.expect_set_volume().returning(|_| Ok(()));
        controller
    }

    #[test]
    fn mount_loads_first_track_paused_at_initial_volume() {
        let mut media = MockMediaPlayback::new();
        let mut seq = Sequence::new();
        media
            .expect_load()
            .with(eq("p0/t0.mp3"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        media
            .expect_set_volume()
            .with(eq(0.8))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let controller = PlayerController::new(fixture(&[3]), media, 0.8).unwrap();

        assert_eq!(
            controller.state(),
            &PlayerState {
                volume: 0.8,
                ..PlayerState::default()
            }
        );
        assert_eq!(controller.current_track().name, "track 0");
    }

    #[test]
    fn next_track_reloads_without_playing_when_paused() {
        let mut controller = mounted(&[3]);
        controller
            .media
            .expect_load()
            .with(eq("p0/t1.mp3"))
            .times(1)
            .returning(|_| Ok(()));

        controller.select_next_track().unwrap();

        assert_eq!(controller.state().track_index, 1);
        assert!(!controller.state().is_playing);
    }

    #[test]
    fn previous_track_wraps_to_last() {
        let mut controller = mounted(&[3]);
        controller
            .media
            .expect_load()
            .with(eq("p0/t2.mp3"))
            .times(1)
            .returning(|_| Ok(()));

        controller.select_previous_track().unwrap();

        assert_eq!(controller.state().track_index, 2);
        assert_eq!(controller.state().playlist_index, 0);
    }

    #[test]
    fn track_change_while_playing_reloads_then_plays() {
        let mut controller = mounted(&[3]);
        controller.state.is_playing = true;

        let mut seq = Sequence::new();
        controller
            .media
            .expect_load()
            .with(eq("p0/t1.mp3"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        controller
            .media
            .expect_play()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        controller.select_next_track().unwrap();

        assert!(controller.state().is_playing);
    }

    #[test]
    fn ended_on_last_track_wraps_and_keeps_playing() {
        let mut controller = mounted(&[3, 2]);
        controller.state.track_index = 2;
        controller.state.is_playing = true;

        let mut seq = Sequence::new();
        controller
            .media
            .expect_load()
            .with(eq("p0/t0.mp3"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        controller
            .media
            .expect_play()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        controller.handle_media_event(MediaEvent::Ended).unwrap();

        assert_eq!(controller.state().playlist_index, 0);
        assert_eq!(controller.state().track_index, 0);
        assert!(controller.state().is_playing);
    }

    #[test]
    fn ended_while_paused_only_reloads() {
        let mut controller = mounted(&[3]);
        controller
            .media
            .expect_load()
            .with(eq("p0/t1.mp3"))
            .times(1)
            .returning(|_| Ok(()));

        controller.handle_media_event(MediaEvent::Ended).unwrap();

        assert_eq!(controller.state().track_index, 1);
    }

    #[test]
    fn next_playlist_resets_track_and_keeps_intent() {
        let mut controller = mounted(&[3, 2, 4]);
        controller.state.track_index = 2;
        controller.state.is_playing = true;

        let mut seq = Sequence::new();
        controller
            .media
            .expect_load()
            .with(eq("p1/t0.mp3"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        controller
            .media
            .expect_play()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        controller.select_next_playlist().unwrap();

        assert_eq!(controller.state().playlist_index, 1);
        assert_eq!(controller.state().track_index, 0);
        assert!(controller.state().is_playing);
        assert_eq!(controller.current_playlist().name, "playlist 1");
    }

    #[test]
    fn previous_playlist_wraps_to_last() {
        let mut controller = mounted(&[3, 2, 4]);
        controller.state.track_index = 1;
        controller
            .media
            .expect_load()
            .with(eq("p2/t0.mp3"))
            .times(1)
            .returning(|_| Ok(()));

        controller.select_previous_playlist().unwrap();

        assert_eq!(controller.state().playlist_index, 2);
        assert_eq!(controller.state().track_index, 0);
    }

    #[test]
    fn select_track_wraps_index_into_playlist() {
        let mut controller = mounted(&[3]);
        controller
            .media
            .expect_load()
            .with(eq("p0/t1.mp3"))
            .times(1)
            .returning(|_| Ok(()));

        controller.select_track(4).unwrap();

        assert_eq!(controller.state().track_index, 1);
    }

    #[test]
    fn single_track_playlist_restarts_on_end() {
        let mut controller = mounted(&[1]);
        controller.state.is_playing = true;

        let mut seq = Sequence::new();
        controller
            .media
            .expect_load()
            .with(eq("p0/t0.mp3"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        controller
            .media
            .expect_play()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        controller.handle_media_event(MediaEvent::Ended).unwrap();

        assert_eq!(controller.state().track_index, 0);
    }

    #[test]
    fn toggle_alternates_between_play_and_pause() {
        let mut controller = mounted(&[3]);

        let mut seq = Sequence::new();
        controller
            .media
            .expect_play()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        controller
            .media
            .expect_pause()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        controller
            .media
            .expect_play()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        controller.toggle_play_pause().unwrap();
        assert!(controller.state().is_playing);

        controller.toggle_play_pause().unwrap();
        assert!(!controller.state().is_playing);

        controller.toggle_play_pause().unwrap();
        assert!(controller.state().is_playing);
    }

    #[test]
    fn volume_change_while_paused_does_not_play() {
        let mut controller = mounted(&[3]);
        controller
            .media
            .expect_set_volume()
            .with(eq(0.5))
            .times(1)
            .returning(|_| Ok(()));
        controller.media.expect_play().never();

        controller.set_volume(0.5).unwrap();

        assert_eq!(controller.state().volume, 0.5);
        assert!(!controller.state().is_playing);
    }

    #[test]
    fn seek_updates_progress_optimistically() {
        let mut controller = mounted(&[3]);
        controller
            .media
            .expect_set_position()
            .with(eq(42.5))
            .times(1)
            .returning(|_| Ok(()));

        controller.seek(42.5).unwrap();

        assert_eq!(controller.state().progress, 42.5);
        assert_eq!(controller.elapsed_text(), "0:42");
    }

    #[test]
    fn scrub_without_duration_leaves_position_alone() {
        let mut controller = mounted(&[3]);
        controller.media.expect_set_position().never();

        controller
            .handle_media_event(MediaEvent::TimeUpdate {
                position: 120.0,
                duration: f64::NAN,
            })
            .unwrap();
        crate::controls::scrub_by(&mut controller, 5.0).unwrap();

        controller
            .handle_media_event(MediaEvent::TimeUpdate {
                position: 300.0,
                duration: f64::INFINITY,
            })
            .unwrap();
        crate::controls::scrub_by(&mut controller, 20.0).unwrap();

        assert_eq!(controller.state().progress, 300.0);
    }

    #[test]
    fn scrub_with_duration_seeks_within_track() {
        let mut controller = mounted(&[3]);
        controller
            .media
            .expect_set_position()
            .with(eq(200.0))
            .times(1)
            .returning(|_| Ok(()));

        controller
            .handle_media_event(MediaEvent::TimeUpdate {
                position: 190.0,
                duration: 200.0,
            })
            .unwrap();
        crate::controls::scrub_by(&mut controller, 20.0).unwrap();

        assert_eq!(controller.state().progress, 200.0);
    }

    #[test]
    fn notifications_drive_progress_and_duration() {
        let mut controller = mounted(&[3]);

        controller
            .handle_media_event(MediaEvent::MetadataLoaded { duration: 200.0 })
            .unwrap();
        assert_eq!(controller.state().duration, 200.0);
        assert_eq!(controller.state().progress, 0.0);

        controller
            .handle_media_event(MediaEvent::TimeUpdate {
                position: 75.0,
                duration: 200.0,
            })
            .unwrap();

        assert_eq!(controller.state().progress, 75.0);
        assert_eq!(controller.elapsed_text(), "1:15");
        assert_eq!(controller.duration_text(), "3:20");
        assert_eq!(controller.remaining_text(), "2:05");
        assert_eq!(controller.progress_ratio(), 0.375);
    }

    #[test]
    fn unknown_duration_degrades_display() {
        let mut controller = mounted(&[3]);

        controller
            .handle_media_event(MediaEvent::TimeUpdate {
                position: 12.0,
                duration: f64::NAN,
            })
            .unwrap();

        assert_eq!(controller.elapsed_text(), "0:12");
        assert_eq!(controller.duration_text(), "0:00");
        assert_eq!(controller.remaining_text(), "0:00");
        assert_eq!(controller.progress_ratio(), 0.0);
    }

    #[test]
    fn primitive_failure_is_propagated() {
        let mut controller = mounted(&[3]);
        controller
            .media
            .expect_play()
            .times(1)
            .returning(|| Err(PlayerError::Disconnected));

        let result = controller.toggle_play_pause();

        assert!(matches!(result, Err(PlayerError::Disconnected)));
    }

    proptest! {
        #[test]
        fn next_track_cycles_through_playlist(size in 1usize..12, start in 0usize..12) {
            let start = start % size;
            let mut controller = permissive(&[size]);
            controller.state.track_index = start;

            for step in 1..=size {
                controller.select_next_track().unwrap();
                prop_assert_eq!(controller.state().track_index, (start + step) % size);
            }

            prop_assert_eq!(controller.state().track_index, start);
        }

        #[test]
        fn previous_track_undoes_next_track(
            size in 1usize..12,
            start in 0usize..12,
            forward_first in any::<bool>(),
        ) {
            let start = start % size;
            let mut controller = permissive(&[size]);
            controller.state.track_index = start;

            if forward_first {
                controller.select_next_track().unwrap();
                controller.select_previous_track().unwrap();
            } else {
                controller.select_previous_track().unwrap();
                controller.select_next_track().unwrap();
            }

            prop_assert_eq!(controller.state().track_index, start);
        }

        #[test]
        fn playlist_navigation_wraps_and_resets_track(
            sizes in proptest::collection::vec(1usize..6, 1..6),
            ops in proptest::collection::vec(any::<bool>(), 1..30),
        ) {
            let count = sizes.len();
            let mut controller = permissive(&sizes);
            let mut expected = 0usize;

            for forward in ops {
                controller.state.track_index = sizes[controller.state.playlist_index] - 1;

                if forward {
                    controller.select_next_playlist().unwrap();
                    expected = (expected + 1) % count;
                } else {
                    controller.select_previous_playlist().unwrap();
                    expected = (expected + count - 1) % count;
                }

                prop_assert_eq!(controller.state().playlist_index, expected);
                prop_assert_eq!(controller.state().track_index, 0);
            }
        }

        #[test]
        fn indices_stay_in_range_under_any_operation(ops in proptest::collection::vec(0u8..7, 1..100)) {
            let sizes = [3usize, 1, 5];
            let mut controller = permissive(&sizes);

            for op in ops {
                match op {
                    0 => controller.select_next_track().unwrap(),
                    1 => controller.select_previous_track().unwrap(),
                    2 => controller.select_next_playlist().unwrap(),
                    3 => controller.select_previous_playlist().unwrap(),
                    4 => controller.toggle_play_pause().unwrap(),
                    5 => controller.handle_media_event(MediaEvent::Ended).unwrap(),
                    _ => controller.select_track(op as usize * 3).unwrap(),
                }

                let state = controller.state();
                prop_assert!(state.playlist_index < sizes.len());
                prop_assert!(state.track_index < sizes[state.playlist_index]);
            }
        }
    }
}
