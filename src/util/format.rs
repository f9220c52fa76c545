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

//! Time formatting for the player display.

/// Formats a playback time in seconds as `M:SS`.
///
/// Minutes are not padded, seconds are truncated and padded to two digits.
/// Values with no meaningful time (zero, negative, `NaN` or infinite, as
/// reported by the engine before a track is loaded or for a live stream)
/// render as `0:00`.
///
/// # Examples
///
/// ```
/// assert_eq!(format_time(75.0), "1:15");
/// assert_eq!(format_time(9.0), "0:09");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// ```
pub(crate) fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return String::from("0:00");
    }

    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(59.0), "0:59");
        assert_eq!(format_time(60.0), "1:00");
        assert_eq!(format_time(75.0), "1:15");
        assert_eq!(format_time(9.0), "0:09");
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(format_time(0.5), "0:00");
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(119.7), "1:59");
    }

    #[test]
    fn unset_times_render_as_zero() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-4.0), "0:00");
    }
}
