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

//! Log output.
//!
//! The terminal belongs to the user interface while the player runs, so log
//! records are written to a file instead. The level defaults to `info` and
//! can be changed with the `RUST_LOG` environment variable.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub(crate) fn setup_logging(log_file: &Path) -> Result<()> {
    let file = File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialise logging")?;

    Ok(())
}
