/*
lib.rs

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

//! Seeded mazes on the faces of convex polyhedra.
//!
//! The player stands on one face of a polyhedron and must reach a destination face. Some edges
//! are walls. Going through a wall is a strike.
//!
//! * [`generator`] builds the face graph of the polyhedron and the maze. The same rule seed
//!   always gives the same maze.
//! * [`puzzle::Puzzle`] selects the start and destination faces and tracks the walk.
//! * [`command`] interprets the text commands (`reset`, `solve`, `move 3 1 4`).
//! * [`observer`] reports the strikes and the solve to the host.

pub mod cli_options;
pub mod clockface;
pub mod command;
pub mod config;
pub mod error;
pub mod game;
pub mod generator;
pub mod observer;
pub mod puzzle;
pub mod route;
