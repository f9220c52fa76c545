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

//! Domain models and core data structures.
//!
//! This module defines the entities the player works with: playlists and the
//! tracks they contain, as read from the catalog document.

pub(crate) mod catalog;

pub(crate) use catalog::Catalog;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Track {
    pub(crate) name: String,
    /// Locator of the audio resource, a file path or a URL.
    pub(crate) url: String,
    /// Informational duration in seconds, the playback engine reports the
    /// authoritative one once the track is loaded.
    pub(crate) duration: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Playlist {
    pub(crate) name: String,
    pub(crate) artist: String,
    pub(crate) year: i32,
    pub(crate) tracks: Vec<Track>,
}

impl Playlist {
    pub(crate) fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Sum of the informational durations of every track, in seconds.
    pub(crate) fn total_duration(&self) -> f64 {
        self.tracks
            .iter()
            .map(|t| t.duration)
            .filter(|d| d.is_finite() && *d > 0.0)
            .sum()
    }
}
