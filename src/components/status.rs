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

//! Status of the last player operation, shown in the footer.

use crate::player;

#[derive(Debug, Default)]
pub(crate) struct StatusLine {
    last_error: Option<String>,
}

impl StatusLine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of a user operation. A success clears any earlier
    /// error so the footer returns to the key help.
    pub(crate) fn report(&mut self, result: player::Result<()>) {
        match result {
            Ok(()) => self.last_error = None,
            Err(e) => self.report_failure(e),
        }
    }

    /// Records a failure without clearing on success, for outcomes of engine
    /// notifications which arrive continuously.
    pub(crate) fn report_failure(&mut self, error: player::PlayerError) {
        log::error!("Player operation failed: {}", error);
        self.last_error = Some(error.to_string());
    }

    pub(crate) fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
