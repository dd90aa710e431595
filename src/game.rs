/*
game.rs

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

//! Manage the status of a maze walk in progress.
//!
//! The walk is either active or solved. Solved is final: moves and resets are ignored.
//!
//! Every move rotates the polyhedron to show the new face on top. While that visual
//! transition is in progress, the walk is busy and the next move waits for the transition to
//! finish.

use log::{debug, info};
use std::thread;
use std::time::{Duration, Instant};

use crate::generator::polyhedron::PolyhedronGraph;
use crate::generator::transitions::PermissibleTransitions;
use crate::observer::PuzzleObserver;
use crate::route::Route;

/// Result of a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player moved to the given face.
    Moved(usize),

    /// The player reached the destination face.
    Solved(usize),

    /// A wall is in the way. The value is the face on the other side of the wall, if any.
    Strike(Option<usize>),

    /// The puzzle is already solved.
    Ignored,
}

/// Visual transition in progress.
#[derive(Debug, Copy, Clone)]
struct Transition {
    /// Time when the transition started.
    started: Instant,

    /// How long the transition lasts.
    duration: Duration,
}

/// Status of the walk in progress.
#[derive(Debug)]
pub struct MazeWalk {
    /// Puzzle identifier, for the log messages.
    id: usize,

    /// Face shown on top.
    current: usize,

    /// Face where the walk started.
    start: usize,

    /// Face to reach.
    destination: usize,

    /// Whether the destination face has been reached.
    solved: bool,

    /// Faces visited since the last reset or strike.
    route: Route,

    /// Duration of the visual transition after each move.
    transition_duration: Duration,

    /// How often to check whether the visual transition is over.
    poll_interval: Duration,

    /// Visual transition in progress, if any.
    transition: Option<Transition>,
}

impl MazeWalk {
    /// Create a [`MazeWalk`] object.
    pub fn new(id: usize, start: usize, destination: usize) -> Self {
        Self {
            id,
            current: start,
            start,
            destination,
            solved: false,
            route: Route::new(start),
            transition_duration: Duration::ZERO,
            poll_interval: Duration::from_millis(10),
            transition: None,
        }
    }

    /// Set the duration of the visual transitions, and how often to check for their end.
    pub fn set_timing(&mut self, transition_duration: Duration, poll_interval: Duration) {
        self.transition_duration = transition_duration;
        self.poll_interval = poll_interval.max(Duration::from_millis(1));
    }

    /// Face shown on top.
    pub fn current_face(&self) -> usize {
        self.current
    }

    /// Face where the walk started.
    pub fn start_face(&self) -> usize {
        self.start
    }

    /// Face to reach.
    pub fn destination(&self) -> usize {
        self.destination
    }

    /// Whether the puzzle is solved.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Faces visited since the last reset or strike.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Whether a visual transition is in progress.
    pub fn is_busy(&self) -> bool {
        self.transition.is_some_and(|t| t.started.elapsed() < t.duration)
    }

    /// Wait for the visual transition in progress, if any, to finish.
    pub fn wait_idle(&mut self) {
        while self.is_busy() {
            thread::sleep(self.poll_interval);
        }
        self.transition = None;
    }

    /// Go through the given edge of the current face.
    ///
    /// If a wall is in the way, the observer receives a strike, the player stays on the current
    /// face, and the route restarts from that face.
    pub fn attempt_move(
        &mut self,
        graph: &PolyhedronGraph,
        transitions: &PermissibleTransitions,
        edge: usize,
        observer: &mut dyn PuzzleObserver,
    ) -> MoveOutcome {
        if self.solved {
            return MoveOutcome::Ignored;
        }
        self.wait_idle();

        let target: Option<usize> = graph.face(self.current).neighbor(edge);
        let Some(face) = target.filter(|f| transitions.is_open(self.current, *f)) else {
            info!(
                "[Polyhedral Maze #{}] Tried to go from face {} to {}: strike.",
                self.id,
                self.current,
                target.map_or("outside".to_string(), |f| f.to_string())
            );
            self.route.restart(self.current);
            observer.strike(self.current, target);
            return MoveOutcome::Strike(target);
        };

        self.route.push(face);
        self.go_to(face, observer);
        if face == self.destination {
            info!(
                "[Polyhedral Maze #{}] Face {face} reached in {} moves: {:?}. Solved.",
                self.id,
                self.route.len().saturating_sub(1),
                self.route.get()
            );
            self.solved = true;
            observer.solved(face);
            return MoveOutcome::Solved(face);
        }
        MoveOutcome::Moved(face)
    }

    /// Go back to the start face and restart the route.
    ///
    /// Nothing happens once the puzzle is solved.
    pub fn reset(&mut self, observer: &mut dyn PuzzleObserver) {
        if self.solved {
            return;
        }
        self.wait_idle();
        info!("[Polyhedral Maze #{}] Reset to face {}.", self.id, self.start);
        self.route.restart(self.start);
        if self.current != self.start {
            self.go_to(self.start, observer);
        }
    }

    /// The host ends the session: forget the route.
    pub fn external_terminate(&mut self) {
        self.route.clear();
    }

    /// Show the given face on top.
    fn go_to(&mut self, face: usize, observer: &mut dyn PuzzleObserver) {
        debug!("[Polyhedral Maze #{}] Setting face to: {face}", self.id);
        self.current = face;
        observer.face_changed(face);
        observer.transition_started(face, self.transition_duration);
        self.transition = Some(Transition {
            started: Instant::now(),
            duration: self.transition_duration,
        });
    }
}
