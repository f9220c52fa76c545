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

//! Playlist catalog.
//!
//! The catalog is the fixed, ordered collection of playlists available to the
//! player. It is read once at start-up and never changes afterwards, so it is
//! validated up front: once a [`Catalog`] exists every playlist has at least
//! one track and index lookups within range cannot fail.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::model::Playlist;

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no playlists")]
    Empty,
    #[error("playlist \"{0}\" contains no tracks")]
    EmptyPlaylist(String),
}

#[derive(Deserialize)]
struct CatalogDocument {
    playlists: Vec<Playlist>,
}

#[derive(Debug)]
pub(crate) struct Catalog {
    playlists: Vec<Playlist>,
}

impl Catalog {
    pub(crate) fn new(playlists: Vec<Playlist>) -> Result<Self, CatalogError> {
        if playlists.is_empty() {
            return Err(CatalogError::Empty);
        }

        if let Some(empty) = playlists.iter().find(|p| p.tracks.is_empty()) {
            return Err(CatalogError::EmptyPlaylist(empty.name.clone()));
        }

        Ok(Self { playlists })
    }

    /// Parses a catalog document of the form `{"playlists": [...]}`.
    pub(crate) fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.playlists)
    }

    pub(crate) fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut catalog = Self::from_json(&json)?;
        if let Some(base) = path.parent() {
            catalog.resolve_locators(base);
        }

        log::info!(
            "Loaded {} playlists from {}",
            catalog.len(),
            path.display()
        );

        Ok(catalog)
    }

    // Relative file locators are relative to the catalog document, not to the
    // working directory. URLs and absolute paths are left alone.
    fn resolve_locators(&mut self, base: &Path) {
        let tracks = self.playlists.iter_mut().flat_map(|p| p.tracks.iter_mut());
        for track in tracks {
            if track.url.contains("://") || Path::new(&track.url).is_absolute() {
                continue;
            }
            track.url = base.join(&track.url).display().to_string();
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.playlists.len()
    }

    pub(crate) fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }
}
