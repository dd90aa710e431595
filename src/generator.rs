/*
generator.rs

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

//! Manage polyhedra and generate random mazes on their faces.
//!
//! [`polyhedra::PolyhedronSpec`] objects describe the built-in polyhedra: name, vertexes,
//! candidate hub sets, and the distance range between the start and the destination faces.
//! A list of [`polyhedra::PolyhedronSpec`] objects is provided at built time.
//!
//! Before a polyhedron can be used, its face-adjacency graph must be built.
//! The [`polyhedra::PolyhedronSpec::build`] method computes a
//! [`polyhedron::PolyhedronGraph`] object from the vertexes.
//!
//! To play, a maze must be created.
//! A maze is composed of two parts:
//!
//! * The open walls, represented by a [`transitions::PermissibleTransitions`] object.
//!   You create this object by creating a [`maze::MazeGenerator`] object and by using its
//!   [`maze::MazeGenerator::generate`] method with the hubs and the random number generator
//!   returned by [`seed::RuleSeed`].
//!   Mazes are shared between puzzles through the [`cache::TransitionCache`] object.
//!
//! * The start and the destination faces.
//!   The [`bfs::pick_destination`] function selects a destination face at the right distance
//!   from the start face.

pub mod bfs;
pub mod cache;
pub mod maze;
pub mod polyhedra;
pub mod polyhedron;
pub mod seed;
pub mod transitions;
