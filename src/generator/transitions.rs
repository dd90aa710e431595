/*
transitions.rs

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

//! Open edges (no wall) between the faces of a polyhedron.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Permissible transitions between faces.
///
/// The relation is symmetric: face A leads to face B if and only if face B leads to face A.
/// The object is only modified by the maze generator. Once built, it is shared read-only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PermissibleTransitions {
    /// For each face, the faces that can be reached directly.
    open: Vec<BTreeSet<usize>>,
}

impl PermissibleTransitions {
    /// Create the object with a wall on every edge.
    pub fn new(num_faces: usize) -> Self {
        Self {
            open: vec![BTreeSet::new(); num_faces],
        }
    }

    /// Remove the wall between the given faces.
    pub(crate) fn open(&mut self, face1: usize, face2: usize) {
        self.open[face1].insert(face2);
        self.open[face2].insert(face1);
    }

    /// Whether there is no wall between the two faces.
    pub fn is_open(&self, face1: usize, face2: usize) -> bool {
        self.open.get(face1).is_some_and(|s| s.contains(&face2))
    }

    /// Faces directly reachable from the given face.
    pub fn reachable(&self, face: usize) -> &BTreeSet<usize> {
        &self.open[face]
    }

    /// Number of faces.
    pub fn num_faces(&self) -> usize {
        self.open.len()
    }

    /// Number of open edges.
    pub fn num_open(&self) -> usize {
        self.open.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Print the transitions.
    pub fn debug(&self) {
        let mut s: String = String::new();
        for (f, reachable) in self.open.iter().enumerate() {
            s.clear();
            s.push_str(&format!("{f:>3} -->"));
            for other in reachable {
                s.push_str(&format!(" {other}"));
            }
            debug!("{s}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_is_symmetric() {
        let mut t = PermissibleTransitions::new(3);
        assert!(!t.is_open(0, 1));
        t.open(0, 1);
        assert!(t.is_open(0, 1));
        assert!(t.is_open(1, 0));
        assert!(!t.is_open(1, 2));
        assert_eq!(t.num_open(), 1);
        // Opening twice does not count twice
        t.open(1, 0);
        assert_eq!(t.num_open(), 1);
    }

    #[test]
    fn unknown_face_is_walled() {
        let t = PermissibleTransitions::new(2);
        assert!(!t.is_open(5, 0));
    }

    #[test]
    fn json_dump() {
        let mut t = PermissibleTransitions::new(2);
        t.open(0, 1);
        let s: String = serde_json::to_string(&t).unwrap();
        assert_eq!(s, r#"{"open":[[1],[0]]}"#);
        let back: PermissibleTransitions = serde_json::from_str(&s).unwrap();
        assert_eq!(back, t);
    }
}
