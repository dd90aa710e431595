/*
route.rs

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

//! Faces visited by the player.

use serde::{Deserialize, Serialize};

/// Ordered list of the faces visited since the last reset, strike, or solve.
///
/// A face can appear several times: the player may walk back and forth.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Route {
    faces: Vec<usize>,
}

impl Route {
    /// Create a [`Route`] object that starts at the given face.
    pub fn new(face: usize) -> Self {
        Self { faces: vec![face] }
    }

    /// Remove all the faces from the route.
    pub fn clear(&mut self) {
        self.faces.clear();
    }

    /// Restart the route from the given face.
    pub fn restart(&mut self, face: usize) {
        self.faces.clear();
        self.faces.push(face);
    }

    /// Add a face to the route.
    pub fn push(&mut self, face: usize) {
        self.faces.push(face);
    }

    /// Get the number of faces in the route.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Whether the route is empty.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Return the faces of the route.
    pub fn get(&self) -> &[usize] {
        &self.faces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_keeps_only_one_face() {
        let mut r = Route::new(3);
        r.push(4);
        r.push(3);
        assert_eq!(r.get(), &[3, 4, 3]);
        r.restart(4);
        assert_eq!(r.get(), &[4]);
        r.clear();
        assert!(r.is_empty());
    }
}
