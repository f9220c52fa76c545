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

//! Unicode symbols for the TUI.
//!
//! These are selected for compatibility with most modern terminal emulators
//! and fonts.

pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const ICON_PAUSE: &str = "\u{23F8}";
pub(crate) const ICON_NEXT: &str = "\u{23ED}";
pub(crate) const ICON_PREV: &str = "\u{23EE}";
pub(crate) const ICON_NOTE: &str = "\u{266B}";

pub(crate) const ICON_VOLUME_MEDIUM: &str = "\u{1F509}";
