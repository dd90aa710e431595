/*
cache.rs

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

//! Cache of the generated mazes.
//!
//! Several puzzles that share the same rule seed and the same polyhedron also share the same
//! maze. The maze is generated by the first puzzle that needs it, and then reused.
//!
//! Each key has its own lock, so that the generation of a maze only blocks the callers that are
//! waiting for that same maze.

use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use super::transitions::PermissibleTransitions;
use crate::error::ConfigError;

/// Cache key: rule seed and polyhedron name.
type Key = (u64, String);

/// Slot for one maze. Empty until the first caller generates the maze.
type Slot = Arc<Mutex<Option<Arc<PermissibleTransitions>>>>;

/// Maze cache.
#[derive(Default)]
pub struct TransitionCache {
    slots: Mutex<HashMap<Key, Slot>>,
}

impl TransitionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the process-wide cache.
    pub fn global() -> &'static TransitionCache {
        static CACHE: OnceLock<TransitionCache> = OnceLock::new();
        CACHE.get_or_init(TransitionCache::new)
    }

    /// Return the maze for the given key, generating it with `build` if it is not in the cache
    /// yet.
    ///
    /// When several threads ask for the same missing key, only one runs `build`, and the others
    /// wait for its result. If `build` fails, then the slot stays empty and the next caller
    /// tries again.
    ///
    /// # Errors
    ///
    /// The method returns the error from `build`.
    pub fn get_or_generate<F>(
        &self,
        seed: u64,
        polyhedron: &str,
        build: F,
    ) -> Result<Arc<PermissibleTransitions>, ConfigError>
    where
        F: FnOnce() -> Result<PermissibleTransitions, ConfigError>,
    {
        let slot: Slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots
                .entry((seed, polyhedron.to_string()))
                .or_default()
                .clone()
        };

        let mut maze = slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(t) = maze.as_ref() {
            debug!("Reusing the maze for {polyhedron} with seed {seed}");
            return Ok(Arc::clone(t));
        }

        debug!("Generating the maze for {polyhedron} with seed {seed}");
        let t: Arc<PermissibleTransitions> = Arc::new(build()?);
        *maze = Some(Arc::clone(&t));
        Ok(t)
    }

    /// Number of mazes in the cache.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|s| s.lock().unwrap_or_else(PoisonError::into_inner).is_some())
            .count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
