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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every handled event to provide a reactive user interface.

mod footer;
pub(crate) mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    App,
    render::{footer::draw_footer, player::draw_player},
};

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the track list of the current playlist, the
/// player panel and a one line footer.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the
///   track list to update its scroll position.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(area);

    let controller = &app.controller;
    app.track_list.draw(
        f,
        outer[0],
        controller.current_playlist(),
        controller.catalog().len(),
        controller.state(),
        &app.theme,
    );

    draw_player(f, outer[1], app);

    draw_footer(f, outer[2], app);
}
