/*
error.rs

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

//! Error types.
//!
//! Three families of errors exist:
//!
//! * [`ConfigError`]: the polyhedron data or the puzzle parameters are wrong. This is an authoring
//!   bug and the puzzle cannot be built.
//! * [`InternalError`]: an invariant that the maze generator guarantees does not hold. This is a
//!   bug in Polymaze.
//! * [`CommandError`]: the player typed an invalid command. The error is reported to the player
//!   and the puzzle continues.
//!
//! Walking into a wall is not an error: it is a strike, reported through
//! [`crate::observer::PuzzleObserver`].

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum PolymazeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Errors in the polyhedron data or in the puzzle parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("polyhedron {polyhedron}: the hub set is empty")]
    EmptyHubSet { polyhedron: String },

    #[error("polyhedron {polyhedron}: hub face {hub} does not exist ({faces} faces)")]
    HubOutOfRange {
        polyhedron: String,
        hub: usize,
        faces: usize,
    },

    #[error("polyhedron {polyhedron}: face {face} edge {edge} points to unknown face {neighbor}")]
    NeighborOutOfRange {
        polyhedron: String,
        face: usize,
        edge: usize,
        neighbor: usize,
    },

    #[error("polyhedron {polyhedron}: face {face} lists face {neighbor}, but not the other way")]
    AsymmetricAdjacency {
        polyhedron: String,
        face: usize,
        neighbor: usize,
    },

    #[error("polyhedron {polyhedron}: only {reached} of {faces} faces are connected")]
    Disconnected {
        polyhedron: String,
        reached: usize,
        faces: usize,
    },

    #[error("degenerate shape: {0}")]
    Degenerate(String),

    #[error("unknown polyhedron: {0}")]
    UnknownPolyhedron(String),

    #[error("invalid destination range [{min}, {max}]")]
    InvalidRange { min: usize, max: usize },

    #[error("polyhedron {polyhedron}: face {face} does not exist ({faces} faces)")]
    FaceOutOfRange {
        polyhedron: String,
        face: usize,
        faces: usize,
    },
}

/// Broken invariants.
#[derive(Debug, Error, PartialEq)]
pub enum InternalError {
    #[error("no face at distance [{min}, {max}] from face {start}")]
    NoDestination { start: usize, min: usize, max: usize },

    #[error("face {to} cannot be reached from face {from}")]
    Unreachable { from: usize, to: usize },

    #[error("faces {from} and {to} are not adjacent")]
    NotAdjacent { from: usize, to: usize },

    #[error("the wall between faces {from} and {to} is on the shortest path")]
    BlockedPath { from: usize, to: usize },
}

/// Errors in the commands that the player types.
///
/// The [`std::fmt::Display`] text is the message reported back to the player.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Unrecognized command: \"{0}\".")]
    Unrecognized(String),

    #[error("Direction #{position} ({value}) is out of range. The remaining directions were ignored.")]
    InvalidDirection { position: usize, value: i64 },
}

/// Convenience type alias for results using [`PolymazeError`].
pub type Result<T> = std::result::Result<T, PolymazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_direction_message_names_position_and_value() {
        let e = CommandError::InvalidDirection {
            position: 2,
            value: 99,
        };
        let msg = e.to_string();
        assert!(msg.contains("#2"));
        assert!(msg.contains("99"));
    }

    #[test]
    fn config_error_converts_to_top_level() {
        let e: PolymazeError = ConfigError::UnknownPolyhedron("blob".to_string()).into();
        assert!(matches!(e, PolymazeError::Config(_)));
        assert_eq!(e.to_string(), "unknown polyhedron: blob");
    }
}
