/*
puzzle.rs

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

//! Puzzle instance.
//!
//! A [`Puzzle`] groups everything needed to play: the polyhedron, the maze (shared with the
//! other puzzles that use the same rule seed and polyhedron), the walk in progress, and the
//! clock face table of the current face.

use log::info;
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::clockface::ClockfaceTable;
use crate::config::Settings;
use crate::error::{ConfigError, Result};
use crate::game::{MazeWalk, MoveOutcome};
use crate::generator::bfs;
use crate::generator::cache::TransitionCache;
use crate::generator::maze::MazeGenerator;
use crate::generator::polyhedra::{self, PolyhedronSpec};
use crate::generator::polyhedron::PolyhedronGraph;
use crate::generator::seed::RuleSeed;
use crate::generator::transitions::PermissibleTransitions;
use crate::observer::PuzzleObserver;

/// Identifier of the next puzzle, for the log messages.
static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Puzzle in progress.
pub struct Puzzle {
    /// Puzzle identifier, for the log messages.
    id: usize,

    /// Polyhedron name for display.
    readable_name: String,

    /// Seed used to build the maze.
    seed: RuleSeed,

    /// Faces without walls.
    hubs: Vec<usize>,

    /// Polyhedron.
    graph: PolyhedronGraph,

    /// Maze.
    transitions: Arc<PermissibleTransitions>,

    /// Walk in progress.
    walk: MazeWalk,

    /// Clock face table for the current face.
    clockface: ClockfaceTable,
}

impl Puzzle {
    /// Create a puzzle from the settings.
    ///
    /// The polyhedron and the start face are selected with `rng` when the settings do not
    /// provide them. The destination face is always selected with `rng`. The maze itself only
    /// depends on the rule seed.
    ///
    /// # Errors
    ///
    /// The method returns an error if the polyhedron is unknown or invalid, or if the settings
    /// are not consistent with the polyhedron.
    pub fn new<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Result<Self> {
        let spec: PolyhedronSpec = match &settings.polyhedron {
            Some(name) => polyhedra::find(name)?,
            None => {
                let mut list: Vec<PolyhedronSpec> = polyhedra::catalog();
                list.swap_remove(rng.random_range(0..list.len()))
            }
        };
        let graph: PolyhedronGraph = spec.build()?;
        Self::with_graph(
            graph,
            spec.readable_name,
            &spec.hub_sets,
            (
                settings.min_steps.unwrap_or(spec.min_steps),
                settings.max_steps.unwrap_or(spec.max_steps),
            ),
            settings,
            TransitionCache::global(),
            rng,
        )
    }

    /// Create a puzzle for the given polyhedron.
    ///
    /// # Errors
    ///
    /// The method returns an error if the maze cannot be built, or if no destination face is at
    /// the requested distance from the start face.
    pub fn with_graph<R: Rng + ?Sized>(
        graph: PolyhedronGraph,
        readable_name: &str,
        hub_sets: &[Vec<usize>],
        steps: (usize, usize),
        settings: &Settings,
        cache: &TransitionCache,
        rng: &mut R,
    ) -> Result<Self> {
        let seed: RuleSeed = RuleSeed(settings.rule_seed);
        let (min_steps, max_steps) = steps;
        if min_steps == 0 || min_steps > max_steps {
            return Err(ConfigError::InvalidRange {
                min: min_steps,
                max: max_steps,
            }
            .into());
        }

        // The hub set and the maze come from the same random sequence
        let mut seed_rng = seed.rng();
        let hubs: Vec<usize> = RuleSeed::select_hub_set(hub_sets, &mut seed_rng)
            .ok_or_else(|| ConfigError::EmptyHubSet {
                polyhedron: graph.name().to_string(),
            })?
            .clone();
        let transitions: Arc<PermissibleTransitions> =
            cache.get_or_generate(seed.0, graph.name(), || {
                MazeGenerator::new(&graph).generate(&hubs, &mut seed_rng)
            })?;

        let start: usize = match settings.start_face {
            Some(face) if face >= graph.num_faces() => {
                return Err(ConfigError::FaceOutOfRange {
                    polyhedron: graph.name().to_string(),
                    face,
                    faces: graph.num_faces(),
                }
                .into());
            }
            Some(face) => face,
            None => rng.random_range(0..graph.num_faces()),
        };
        let destination: usize =
            bfs::pick_destination(&transitions, start, min_steps, max_steps, rng)?;

        // Only puzzles that could be built get an ID
        let id: usize = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        info!("[Polyhedral Maze #{id}] Polyhedron: {readable_name}");
        info!("[Polyhedral Maze #{id}] Rule seed: {seed}");
        info!("[Polyhedral Maze #{id}] Hub faces: {hubs:?}");
        info!(
            "[Polyhedral Maze #{id}] Start face: {start}. Destination face: {destination} ({} steps).",
            bfs::distances(&transitions, start)[destination].unwrap_or_default()
        );

        let mut walk: MazeWalk = MazeWalk::new(id, start, destination);
        walk.set_timing(settings.transition_duration(), settings.poll_interval());
        let clockface: ClockfaceTable = ClockfaceTable::for_face(graph.face(start));

        Ok(Self {
            id,
            readable_name: readable_name.to_string(),
            seed,
            hubs,
            graph,
            transitions,
            walk,
            clockface,
        })
    }

    /// Puzzle identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Polyhedron name for display.
    pub fn readable_name(&self) -> &str {
        &self.readable_name
    }

    /// Rule seed.
    pub fn seed(&self) -> RuleSeed {
        self.seed
    }

    /// Faces without walls.
    pub fn hubs(&self) -> &[usize] {
        &self.hubs
    }

    /// Polyhedron.
    pub fn graph(&self) -> &PolyhedronGraph {
        &self.graph
    }

    /// Maze.
    pub fn transitions(&self) -> &Arc<PermissibleTransitions> {
        &self.transitions
    }

    /// Walk in progress.
    pub fn walk(&self) -> &MazeWalk {
        &self.walk
    }

    /// Face shown on top.
    pub fn current_face(&self) -> usize {
        self.walk.current_face()
    }

    /// Face to reach.
    pub fn destination(&self) -> usize {
        self.walk.destination()
    }

    /// Whether the puzzle is solved.
    pub fn is_solved(&self) -> bool {
        self.walk.is_solved()
    }

    /// Clock face table of the current face.
    pub fn clockface(&self) -> &ClockfaceTable {
        &self.clockface
    }

    /// Wait for the rotation in progress, if any, to finish.
    pub fn wait_idle(&mut self) {
        self.walk.wait_idle();
    }

    /// Go through the given edge of the current face.
    pub fn attempt_move(&mut self, edge: usize, observer: &mut dyn PuzzleObserver) -> MoveOutcome {
        let outcome: MoveOutcome =
            self.walk.attempt_move(&self.graph, &self.transitions, edge, observer);
        self.refresh_clockface();
        outcome
    }

    /// Go back to the start face.
    pub fn reset(&mut self, observer: &mut dyn PuzzleObserver) {
        self.walk.reset(observer);
        self.refresh_clockface();
    }

    /// The host ends the session.
    pub fn external_terminate(&mut self) {
        self.walk.external_terminate();
    }

    /// Recompute the clock face table after a face change.
    fn refresh_clockface(&mut self) {
        self.clockface = ClockfaceTable::for_face(self.graph.face(self.walk.current_face()));
    }
}
