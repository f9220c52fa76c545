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

//! Bounded input controls.
//!
//! The scrub and volume controls own their ranges: the values they produce
//! are always within bounds, so the controller accepts them as given.

use crate::{
    controller::PlayerController,
    player::{MediaPlayback, Result},
};

/// Position the scrub control moves to when nudged by `delta` seconds.
///
/// The control spans `[0, duration]`. While the duration is unknown (not yet
/// loaded, or infinite for a stream) the control cannot move and there is no
/// target.
pub(crate) fn scrub_target(progress: f64, duration: f64, delta: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 {
        return None;
    }

    let current = if progress.is_finite() { progress } else { 0.0 };

    Some((current + delta).clamp(0.0, duration))
}

/// Nudges the scrub control by `delta` seconds, seeking only when the control
/// can move.
pub(crate) fn scrub_by<M: MediaPlayback>(controller: &mut PlayerController<M>, delta: f64) -> Result<()> {
    let state = controller.state();
    match scrub_target(state.progress, state.duration, delta) {
        Some(target) => controller.seek(target),
        None => Ok(()),
    }
}

/// Level the volume control moves to when nudged by `delta`, within `[0, 1]`.
pub(crate) fn volume_target(volume: f64, delta: f64) -> f64 {
    // Round to the control's 0.01 step so repeated nudges do not drift
    let level = ((volume + delta) * 100.0).round() / 100.0;
    level.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrub_stays_within_track() {
        assert_eq!(scrub_target(10.0, 100.0, 5.0), Some(15.0));
        assert_eq!(scrub_target(98.0, 100.0, 20.0), Some(100.0));
        assert_eq!(scrub_target(3.0, 100.0, -5.0), Some(0.0));
    }

    #[test]
    fn scrub_cannot_move_without_duration() {
        assert_eq!(scrub_target(120.0, f64::NAN, 5.0), None);
        assert_eq!(scrub_target(0.0, 0.0, 20.0), None);
        assert_eq!(scrub_target(300.0, f64::INFINITY, 20.0), None);
        assert_eq!(scrub_target(12.0, f64::INFINITY, -5.0), None);
    }

    #[test]
    fn volume_stays_within_unit_range() {
        assert_eq!(volume_target(0.5, 0.05), 0.55);
        assert_eq!(volume_target(0.98, 0.05), 1.0);
        assert_eq!(volume_target(0.02, -0.05), 0.0);
    }

    #[test]
    fn repeated_volume_steps_land_on_whole_percentages() {
        let mut volume = 1.0;
        for _ in 0..10 {
            volume = volume_target(volume, -0.05);
        }

        assert_eq!(volume, 0.5);
    }
}
