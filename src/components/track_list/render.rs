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

//! UI rendering logic for the track list.
//!
//! This module draws the header of the current playlist and the table of its
//! tracks, marking the active track and showing the browse highlight.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::TrackListView,
    controller::PlayerState,
    model::Playlist,
    render::icons::ICON_PLAY,
    theme::Theme,
    util::format::format_time,
};

impl TrackListView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        playlist: &Playlist,
        playlist_count: usize,
        state: &PlayerState,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let header_text = format!(
            "{} | {} tracks | {} | playlist {}/{}",
            playlist.name,
            playlist.len(),
            format_time(playlist.total_duration()),
            state.playlist_index + 1,
            playlist_count
        );

        let header = Paragraph::new(header_text).block(header_block);
        f.render_widget(header, chunks[0]);

        self.draw_table(f, chunks[1], playlist, state.track_index, theme);
    }

    fn draw_table(&mut self, f: &mut Frame, area: Rect, playlist: &Playlist, active: usize, theme: &Theme) {
        let rows = playlist.tracks.iter().enumerate().map(|(i, track)| {
            let is_active = i == active;

            let marker = if is_active {
                Line::from(ICON_PLAY).style(Style::default().fg(theme.accent_colour))
            } else {
                Line::from("")
            };

            let title_style = if is_active {
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.table_track_fg)
            };

            Row::new(vec![
                Cell::from(marker),
                Cell::from(
                    Line::from(format!("{:02}", i + 1))
                        .style(Style::default().fg(theme.table_track_number_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(Line::from(track.name.as_str()).style(title_style)),
                Cell::from(
                    Line::from(format_time(track.duration))
                        .style(Style::default().fg(theme.table_time_fg))
                        .alignment(Alignment::Right),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(7),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from(Line::from("#").alignment(Alignment::Right)),
                Cell::from("Title"),
                Cell::from(Line::from("Time").alignment(Alignment::Right)),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
        .block(Block::default().padding(Padding::horizontal(1)));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
