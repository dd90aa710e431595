/*
observer.rs

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

//! Report what happens in the puzzle.
//!
//! The puzzle does not draw anything and does not know what a strike costs. It reports the
//! events to a [`PuzzleObserver`] object, which is provided by the host.
//!
//! Two observers are provided:
//!
//! * [`EventLog`] keeps the events in memory.
//! * [`ChannelObserver`] sends the events through an [`async_channel`] channel, so that another
//!   thread (or the main loop of a user interface) can process them.

use log::warn;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Event emitted by the puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PuzzleEvent {
    /// The current face changed.
    FaceChanged { face: usize },

    /// The polyhedron starts rotating to show the given face on top.
    TransitionStarted { face: usize, duration_ms: u64 },

    /// The player tried to go through a wall. `attempted` is None when the edge leads off the
    /// shape.
    Strike {
        from: usize,
        attempted: Option<usize>,
    },

    /// The player reached the destination face.
    Solved { face: usize },
}

/// Receive the puzzle events.
///
/// [`PuzzleObserver::strike`] and [`PuzzleObserver::solved`] are called exactly once for each
/// strike and for the solve.
pub trait PuzzleObserver {
    /// The current face changed.
    fn face_changed(&mut self, _face: usize) {}

    /// A visual transition to the given face starts.
    fn transition_started(&mut self, _face: usize, _duration: Duration) {}

    /// The player tried to go through a wall.
    fn strike(&mut self, from: usize, attempted: Option<usize>);

    /// The puzzle is solved.
    fn solved(&mut self, face: usize);
}

/// Observer that stores the events.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<PuzzleEvent>,
}

impl EventLog {
    /// Create an [`EventLog`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the events received so far.
    pub fn events(&self) -> &[PuzzleEvent] {
        &self.events
    }

    /// Number of strikes received so far.
    pub fn strikes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PuzzleEvent::Strike { .. }))
            .count()
    }

    /// Number of solves received so far.
    pub fn solves(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PuzzleEvent::Solved { .. }))
            .count()
    }

    /// Remove the events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl PuzzleObserver for EventLog {
    fn face_changed(&mut self, face: usize) {
        self.events.push(PuzzleEvent::FaceChanged { face });
    }

    fn transition_started(&mut self, face: usize, duration: Duration) {
        self.events.push(PuzzleEvent::TransitionStarted {
            face,
            duration_ms: duration.as_millis() as u64,
        });
    }

    fn strike(&mut self, from: usize, attempted: Option<usize>) {
        self.events.push(PuzzleEvent::Strike { from, attempted });
    }

    fn solved(&mut self, face: usize) {
        self.events.push(PuzzleEvent::Solved { face });
    }
}

/// Observer that forwards the events to a channel.
pub struct ChannelObserver {
    sender: async_channel::Sender<PuzzleEvent>,
}

impl ChannelObserver {
    /// Create a [`ChannelObserver`] object that sends the events to the given channel.
    pub fn new(sender: async_channel::Sender<PuzzleEvent>) -> Self {
        Self { sender }
    }

    fn send(&self, event: PuzzleEvent) {
        if let Err(e) = self.sender.send_blocking(event) {
            warn!("Event dropped, the receiver is gone: {:?}", e.into_inner());
        }
    }
}

impl PuzzleObserver for ChannelObserver {
    fn face_changed(&mut self, face: usize) {
        self.send(PuzzleEvent::FaceChanged { face });
    }

    fn transition_started(&mut self, face: usize, duration: Duration) {
        self.send(PuzzleEvent::TransitionStarted {
            face,
            duration_ms: duration.as_millis() as u64,
        });
    }

    fn strike(&mut self, from: usize, attempted: Option<usize>) {
        self.send(PuzzleEvent::Strike { from, attempted });
    }

    fn solved(&mut self, face: usize) {
        self.send(PuzzleEvent::Solved { face });
    }
}
