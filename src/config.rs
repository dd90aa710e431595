/*
config.rs

Copyright 2025 Hervé Quatremain

This file is part of Polymaze.

Polymaze is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Polymaze is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Polymaze. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Puzzle settings.
//!
//! The settings can be loaded from a JSON file. Missing keys get their default value:
//!
//! ```json
//! {
//!     "rule_seed": 1,
//!     "polyhedron": "dodecahedron",
//!     "transition_ms": 250,
//!     "min_steps": 4
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// Default duration of the rotation to the next face.
pub const DEFAULT_TRANSITION_MS: u64 = 250;

/// Default interval between two checks for the end of the rotation.
pub const DEFAULT_POLL_MS: u64 = 10;

/// Puzzle settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Seed for the maze layout.
    pub rule_seed: u64,

    /// Name of the polyhedron. A random polyhedron is used if not set.
    pub polyhedron: Option<String>,

    /// Start face. A random face is used if not set.
    pub start_face: Option<usize>,

    /// Duration, in milliseconds, of the rotation to the next face.
    pub transition_ms: u64,

    /// Interval, in milliseconds, between two checks for the end of the rotation.
    pub poll_ms: u64,

    /// Minimum distance between the start and the destination faces. The polyhedron default is
    /// used if not set.
    pub min_steps: Option<usize>,

    /// Maximum distance between the start and the destination faces. The polyhedron default is
    /// used if not set.
    pub max_steps: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rule_seed: 0,
            polyhedron: None,
            start_face: None,
            transition_ms: DEFAULT_TRANSITION_MS,
            poll_ms: DEFAULT_POLL_MS,
            min_steps: None,
            max_steps: None,
        }
    }
}

impl Settings {
    /// Read the settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Settings file: {path:?}");
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let settings: Settings = serde_json::from_reader(reader)?;
        Ok(settings)
    }

    /// Duration of the rotation to the next face.
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Interval between two checks for the end of the rotation.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }
}
