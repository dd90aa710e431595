/*
seed.rs

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

//! Rule seed.
//!
//! The rule seed is the only source of randomness for the maze layout: for a given polyhedron,
//! the same seed always produces the same hub set and the same walls.
//!
//! The generator algorithm is pinned to ChaCha8, so that a seed keeps giving the same maze
//! after a dependency update.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seed that drives the maze generation.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct RuleSeed(pub u64);

impl fmt::Display for RuleSeed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl RuleSeed {
    /// Return a new random number generator for this seed.
    ///
    /// Every call returns a generator at the start of the same sequence.
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }

    /// Select one of the candidate hub sets.
    pub fn select_hub_set<'a, R: Rng + ?Sized>(
        hub_sets: &'a [Vec<usize>],
        rng: &mut R,
    ) -> Option<&'a Vec<usize>> {
        if hub_sets.is_empty() {
            None
        } else {
            Some(&hub_sets[rng.random_range(0..hub_sets.len())])
        }
    }
}
