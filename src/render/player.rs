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

//! Render the music player interface.
//!
//! This module renders the visual representation of the current track, the
//! playlist it belongs to, playback time and the progress and volume gauges.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    render::icons::{ICON_NOTE, ICON_PAUSE, ICON_PLAY, ICON_VOLUME_MEDIUM},
};

/// Renders the main player widget including track info and gauges.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let controller = &app.controller;
    let state = controller.state();
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(chunks[0]);

    let icon = if state.is_playing { ICON_PAUSE } else { ICON_PLAY };

    // The title carries the play state: highlighted while playing, dimmed
    // while paused
    let title_style = if state.is_playing {
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.paused_colour).add_modifier(Modifier::DIM)
    };

    let track_line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(controller.current_track().name.as_str(), title_style),
    ]);
    f.render_widget(Paragraph::new(track_line), info_chunks[0]);

    let time_line = Line::from(vec![
        Span::styled(controller.elapsed_text(), Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
        Span::styled(" / ", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(controller.duration_text(), Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
        Span::styled(" (-", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(controller.remaining_text(), Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
        Span::styled(")", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
    ]);
    f.render_widget(Paragraph::new(time_line).alignment(Alignment::Right), info_chunks[1]);

    let playlist = controller.current_playlist();
    let playlist_line = Line::from(vec![
        Span::raw(format!(" {} ", ICON_NOTE)),
        Span::styled(playlist.artist.as_str(), Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
        Span::raw(" \u{2022} "),
        Span::styled(playlist.name.as_str(), Style::default().add_modifier(Modifier::BOLD)).fg(theme.accent_colour),
        Span::raw(format!(" ({})", playlist.year)),
    ]);
    f.render_widget(Paragraph::new(playlist_line), chunks[1]);

    let control_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(chunks[2]);

    let volume_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(5)])
        .split(control_chunks[1]);

    f.render_widget(Paragraph::new(ICON_VOLUME_MEDIUM), volume_layout[0]);

    let volume = state.volume.clamp(0.0, 1.0);

    let volume_gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(volume)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_layout[1]);

    let volume_label = Paragraph::new(format!(" {}%", (volume * 100.0).round() as u16))
        .alignment(Alignment::Right)
        .fg(Color::White);
    f.render_widget(volume_label, volume_layout[2]);

    let position_gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(controller.progress_ratio())
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, chunks[4]);
}
