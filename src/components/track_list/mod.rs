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

//! Track list for the current playlist.
//!
//! The list keeps its own highlight, which the user moves freely to pick a
//! track, and which snaps back to the active track whenever the controller
//! changes it.

mod render;

use ratatui::widgets::TableState;

pub(crate) struct TrackListView {
    pub(crate) table_state: TableState,
}

impl TrackListView {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new().with_selected(Some(0)),
        }
    }

    pub(crate) fn highlighted(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    pub(crate) fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = (self.highlighted() + 1) % len;
        self.table_state.select(Some(i));
    }

    pub(crate) fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = (self.highlighted() + len - 1) % len;
        self.table_state.select(Some(i));
    }

    /// Moves the highlight onto the active track.
    pub(crate) fn follow(&mut self, track_index: usize) {
        self.table_state.select(Some(track_index));
    }
}
