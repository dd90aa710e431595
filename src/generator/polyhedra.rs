/*
polyhedra.rs

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

//! Built-in polyhedra.
//!
//! Each [`PolyhedronSpec`] describes a convex polyhedron by its vertexes only. The faces and the
//! adjacency are computed by [`PolyhedronGraph::from_convex_points`].
//!
//! For developers: add your new polyhedron to [`catalog`]. The hub-set face IDs refer to the
//! face numbering produced by the convex hull builder, which depends on the order of the
//! vertexes.

use nalgebra::Vector3;

use super::polyhedron::PolyhedronGraph;
use crate::error::ConfigError;

/// Golden ratio.
const PHI: f64 = 1.618_033_988_749_895;

/// Description of a built-in polyhedron.
#[derive(Debug, Clone)]
pub struct PolyhedronSpec {
    /// Identifier, used on the command line.
    pub name: &'static str,

    /// Name for display.
    pub readable_name: &'static str,

    /// Candidate hub sets. The rule seed selects one of them.
    pub hub_sets: Vec<Vec<usize>>,

    /// Minimum number of steps between the start and the destination faces.
    pub min_steps: usize,

    /// Maximum number of steps between the start and the destination faces.
    pub max_steps: usize,

    /// Function that returns the vertexes of the polyhedron.
    vertices_fn: fn() -> Vec<Vector3<f64>>,
}

impl PolyhedronSpec {
    /// Vertexes of the polyhedron.
    pub fn vertices(&self) -> Vec<Vector3<f64>> {
        (self.vertices_fn)()
    }

    /// Build the face-adjacency graph of the polyhedron.
    ///
    /// # Errors
    ///
    /// The method returns an error if the vertexes do not describe a convex polyhedron.
    pub fn build(&self) -> Result<PolyhedronGraph, ConfigError> {
        PolyhedronGraph::from_convex_points(self.name, &self.vertices())
    }
}

/// Return the list of the built-in polyhedra.
pub fn catalog() -> Vec<PolyhedronSpec> {
    vec![
        PolyhedronSpec {
            name: "tetrahedron",
            readable_name: "Tetrahedron",
            hub_sets: vec![vec![0], vec![1], vec![2], vec![3]],
            min_steps: 1,
            max_steps: 3,
            vertices_fn: tetrahedron,
        },
        PolyhedronSpec {
            name: "cube",
            readable_name: "Cube",
            hub_sets: vec![vec![0], vec![1], vec![2]],
            min_steps: 2,
            max_steps: 5,
            vertices_fn: cube,
        },
        PolyhedronSpec {
            name: "octahedron",
            readable_name: "Octahedron",
            hub_sets: vec![vec![0], vec![3], vec![5]],
            min_steps: 2,
            max_steps: 7,
            vertices_fn: octahedron,
        },
        PolyhedronSpec {
            name: "triangularprism",
            readable_name: "Triangular prism",
            hub_sets: vec![vec![0], vec![1], vec![4]],
            min_steps: 1,
            max_steps: 4,
            vertices_fn: triangular_prism,
        },
        PolyhedronSpec {
            name: "dodecahedron",
            readable_name: "Dodecahedron",
            hub_sets: vec![vec![0, 7], vec![2, 9], vec![4, 11]],
            min_steps: 3,
            max_steps: 11,
            vertices_fn: dodecahedron,
        },
        PolyhedronSpec {
            name: "icosahedron",
            readable_name: "Icosahedron",
            hub_sets: vec![vec![0, 13], vec![3, 16], vec![5, 11, 19]],
            min_steps: 4,
            max_steps: 19,
            vertices_fn: icosahedron,
        },
        PolyhedronSpec {
            name: "cuboctahedron",
            readable_name: "Cuboctahedron",
            hub_sets: vec![vec![0, 9], vec![2, 12], vec![5, 13]],
            min_steps: 3,
            max_steps: 13,
            vertices_fn: cuboctahedron,
        },
        PolyhedronSpec {
            name: "rhombicdodecahedron",
            readable_name: "Rhombic dodecahedron",
            hub_sets: vec![vec![0, 10], vec![3, 8], vec![6]],
            min_steps: 3,
            max_steps: 11,
            vertices_fn: rhombic_dodecahedron,
        },
        PolyhedronSpec {
            name: "truncatedoctahedron",
            readable_name: "Truncated octahedron",
            hub_sets: vec![vec![0, 13], vec![4, 9], vec![2, 7, 11]],
            min_steps: 3,
            max_steps: 13,
            vertices_fn: truncated_octahedron,
        },
    ]
}

/// Find a polyhedron by name.
///
/// An exact match is preferred. Otherwise the first polyhedron whose name contains the
/// given string (case insensitive) is returned.
///
/// # Errors
///
/// The function returns an error if no polyhedron matches.
pub fn find(name: &str) -> Result<PolyhedronSpec, ConfigError> {
    let query: String = name.to_lowercase().replace([' ', '-', '_'], "");
    let list: Vec<PolyhedronSpec> = catalog();

    if let Some(p) = list.iter().find(|p| p.name == query) {
        return Ok(p.clone());
    }
    list.into_iter()
        .find(|p| !query.is_empty() && p.name.contains(&query))
        .ok_or_else(|| ConfigError::UnknownPolyhedron(name.to_string()))
}

/// All the sign combinations of the given coordinates (duplicates for zero coordinates are
/// removed).
fn signs(x: f64, y: f64, z: f64) -> Vec<Vector3<f64>> {
    let mut ret: Vec<Vector3<f64>> = Vec::with_capacity(8);
    for sx in [1.0, -1.0] {
        for sy in [1.0, -1.0] {
            for sz in [1.0, -1.0] {
                let v: Vector3<f64> = Vector3::new(sx * x, sy * y, sz * z);
                if !ret.contains(&v) {
                    ret.push(v);
                }
            }
        }
    }
    ret
}

/// Sign combinations of the three cyclic permutations of the given coordinates.
fn cyclic_signs(x: f64, y: f64, z: f64) -> Vec<Vector3<f64>> {
    let mut ret: Vec<Vector3<f64>> = signs(x, y, z);
    ret.extend(signs(z, x, y));
    ret.extend(signs(y, z, x));
    ret
}

/// Sign combinations of all the permutations of the given coordinates.
fn all_signs(x: f64, y: f64, z: f64) -> Vec<Vector3<f64>> {
    let mut ret: Vec<Vector3<f64>> = cyclic_signs(x, y, z);
    for v in cyclic_signs(y, x, z) {
        if !ret.contains(&v) {
            ret.push(v);
        }
    }
    ret
}

fn tetrahedron() -> Vec<Vector3<f64>> {
    vec![
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(1.0, -1.0, -1.0),
        Vector3::new(-1.0, 1.0, -1.0),
        Vector3::new(-1.0, -1.0, 1.0),
    ]
}

fn cube() -> Vec<Vector3<f64>> {
    signs(1.0, 1.0, 1.0)
}

fn octahedron() -> Vec<Vector3<f64>> {
    cyclic_signs(1.0, 0.0, 0.0)
}

fn triangular_prism() -> Vec<Vector3<f64>> {
    let mut ret: Vec<Vector3<f64>> = Vec::with_capacity(6);
    for y in [1.0, -1.0] {
        for i in 0..3 {
            let a: f64 = f64::from(i) * 2.0 * std::f64::consts::PI / 3.0;
            ret.push(Vector3::new(a.cos(), y, a.sin()));
        }
    }
    ret
}

fn dodecahedron() -> Vec<Vector3<f64>> {
    let mut ret: Vec<Vector3<f64>> = signs(1.0, 1.0, 1.0);
    ret.extend(cyclic_signs(0.0, 1.0 / PHI, PHI));
    ret
}

fn icosahedron() -> Vec<Vector3<f64>> {
    cyclic_signs(0.0, 1.0, PHI)
}

fn cuboctahedron() -> Vec<Vector3<f64>> {
    cyclic_signs(1.0, 1.0, 0.0)
}

fn rhombic_dodecahedron() -> Vec<Vector3<f64>> {
    let mut ret: Vec<Vector3<f64>> = signs(1.0, 1.0, 1.0);
    ret.extend(cyclic_signs(2.0, 0.0, 0.0));
    ret
}

fn truncated_octahedron() -> Vec<Vector3<f64>> {
    all_signs(0.0, 1.0, 2.0)
}
