/*
maze.rs

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

//! Generate the walls of a maze on the faces of a polyhedron.
//!
//! The maze grows from the hub faces. Each hub starts a group of faces, and the groups grow
//! randomly, one face at a time, until every face belongs to a group. Each group is a tree.
//! The groups are then connected to each other by opening one more wall for every pair of
//! groups, which creates loops.
//!
//! The walls around the hub faces are always open.

use log::{Level, debug, log_enabled};
use rand::Rng;
use rand::seq::SliceRandom;

use super::bfs;
use super::polyhedron::PolyhedronGraph;
use super::transitions::PermissibleTransitions;
use crate::error::ConfigError;

/// Maze generator.
pub struct MazeGenerator<'a> {
    /// Polyhedron to build the maze on.
    graph: &'a PolyhedronGraph,

    /// For each face, the group that claimed it.
    owner: Vec<Option<usize>>,

    /// For each group, the faces that might still have unclaimed neighbors.
    active: Vec<Vec<usize>>,

    /// For each group, the faces that do not have unclaimed neighbors anymore.
    finished: Vec<Vec<usize>>,

    /// Number of faces claimed by a group.
    covered: usize,

    /// Walls opened so far.
    transitions: PermissibleTransitions,
}

impl<'a> MazeGenerator<'a> {
    /// Create the generator for the given polyhedron.
    pub fn new(graph: &'a PolyhedronGraph) -> Self {
        Self {
            graph,
            owner: vec![None; graph.num_faces()],
            active: Vec::new(),
            finished: Vec::new(),
            covered: 0,
            transitions: PermissibleTransitions::new(graph.num_faces()),
        }
    }

    /// Generate the maze.
    ///
    /// The result only depends on the polyhedron, the hubs, and the state of the random number
    /// generator.
    ///
    /// # Errors
    ///
    /// The method returns an error if the hub list is empty, if a hub does not exist, or if the
    /// polyhedron is not connected.
    pub fn generate<R: Rng + ?Sized>(
        mut self,
        hubs: &[usize],
        rng: &mut R,
    ) -> Result<PermissibleTransitions, ConfigError> {
        let num_faces: usize = self.graph.num_faces();
        if hubs.is_empty() {
            return Err(ConfigError::EmptyHubSet {
                polyhedron: self.graph.name().to_string(),
            });
        }
        if let Some(hub) = hubs.iter().find(|h| **h >= num_faces) {
            return Err(ConfigError::HubOutOfRange {
                polyhedron: self.graph.name().to_string(),
                hub: *hub,
                faces: num_faces,
            });
        }

        self.open_hubs(hubs);
        self.grow(rng)?;

        // Randomize the order in which the groups get connected
        for (active, finished) in self.active.iter_mut().zip(self.finished.iter_mut()) {
            finished.append(active);
            finished.shuffle(rng);
        }
        self.connect_groups();

        let reached: usize = bfs::distances(&self.transitions, hubs[0])
            .iter()
            .filter(|d| d.is_some())
            .count();
        if reached != num_faces {
            return Err(ConfigError::Disconnected {
                polyhedron: self.graph.name().to_string(),
                reached,
                faces: num_faces,
            });
        }

        debug!(
            "Maze on {}: {} open edges for {} faces",
            self.graph.name(),
            self.transitions.num_open(),
            num_faces
        );
        if log_enabled!(Level::Debug) {
            self.transitions.debug();
        }
        Ok(self.transitions)
    }

    /// Create one group per hub and open all the walls around the hubs.
    fn open_hubs(&mut self, hubs: &[usize]) {
        for (group, hub) in hubs.iter().enumerate() {
            self.active.push(Vec::new());
            self.finished.push(Vec::new());
            if self.owner[*hub].is_none() {
                self.claim(*hub, group);
            }
        }

        for (group, hub) in hubs.iter().enumerate() {
            let neighbors: Vec<usize> = self.graph.neighbors(*hub).collect();
            for n in neighbors {
                self.transitions.open(*hub, n);
                if self.owner[n].is_none() {
                    self.claim(n, group);
                }
            }
        }
    }

    /// Grow the groups until all the faces are claimed.
    fn grow<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ConfigError> {
        while self.covered < self.graph.num_faces() {
            let groups: Vec<usize> = (0..self.active.len())
                .filter(|g| !self.active[*g].is_empty())
                .collect();
            if groups.is_empty() {
                return Err(ConfigError::Disconnected {
                    polyhedron: self.graph.name().to_string(),
                    reached: self.covered,
                    faces: self.graph.num_faces(),
                });
            }

            let group: usize = groups[rng.random_range(0..groups.len())];
            let index: usize = rng.random_range(0..self.active[group].len());
            let face: usize = self.active[group][index];

            let free: Vec<usize> = self
                .graph
                .neighbors(face)
                .filter(|n| self.owner[*n].is_none())
                .collect();
            if free.is_empty() {
                self.active[group].remove(index);
                self.finished[group].push(face);
                continue;
            }

            let next: usize = free[rng.random_range(0..free.len())];
            self.transitions.open(face, next);
            self.claim(next, group);
        }
        Ok(())
    }

    /// For every pair of groups, open the first wall found between the two groups.
    fn connect_groups(&mut self) {
        for g1 in 0..self.finished.len() {
            for g2 in (g1 + 1)..self.finished.len() {
                let pair: Option<(usize, usize)> = self.finished[g1].iter().find_map(|a| {
                    self.finished[g2]
                        .iter()
                        .find(|b| {
                            self.graph.are_adjacent(*a, **b) && !self.transitions.is_open(*a, **b)
                        })
                        .map(|b| (*a, *b))
                });
                if let Some((a, b)) = pair {
                    debug!("Connecting group {g1} and group {g2} through {a}-{b}");
                    self.transitions.open(a, b);
                }
            }
        }
    }

    /// Add the face to the group.
    fn claim(&mut self, face: usize, group: usize) {
        self.owner[face] = Some(group);
        self.active[group].push(face);
        self.covered += 1;
    }
}
