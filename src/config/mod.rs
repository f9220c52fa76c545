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

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "playdeck";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Catalog document to load when none is given on the command line.
    pub catalog: Option<PathBuf>,
    pub volume: f64,
    pub volume_step: f64,
    pub fine_seek_step: f64,
    pub seek_step: f64,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog: None,
            volume: 1.0,
            volume_step: 0.05,
            fine_seek_step: 5.0,
            seek_step: 20.0,
            log_file: PathBuf::from("playdeck.log"),
        }
    }
}

pub fn load_config() -> AppConfig {
    let config: AppConfig = confy::load(CONFIG_NAME, None).unwrap_or_default();
    config.sanitized()
}

impl AppConfig {
    /// Brings the initial volume into `[0, 1]`, replacing a value that is
    /// not a number with the default.
    fn sanitized(mut self) -> Self {
        self.volume = if self.volume.is_finite() {
            self.volume.clamp(0.0, 1.0)
        } else {
            AppConfig::default().volume
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"catalog": "/music/playlists.json"}"#).unwrap();

        assert_eq!(config.catalog, Some(PathBuf::from("/music/playlists.json")));
        assert_eq!(config.volume, 1.0);
        assert_eq!(config.seek_step, 20.0);
        assert_eq!(config.log_file, PathBuf::from("playdeck.log"));
    }

    #[test]
    fn volume_is_brought_into_range() {
        let config = |volume| AppConfig { volume, ..AppConfig::default() }.sanitized();

        assert_eq!(config(f64::NAN).volume, 1.0);
        assert_eq!(config(f64::INFINITY).volume, 1.0);
        assert_eq!(config(1.7).volume, 1.0);
        assert_eq!(config(-0.2).volume, 0.0);
        assert_eq!(config(0.4).volume, 0.4);
    }
}
