/*
polyhedron.rs

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

//! Face-adjacency graph of a polyhedron.
//!
//! Each [`Face`] stores its vertexes in counter-clockwise order when seen from outside the
//! polyhedron. Edge `i` of a face goes from vertex `i` to vertex `i + 1` (cyclic), and
//! [`Face::neighbors`]`[i]` is the face on the other side of that edge.

use log::debug;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::error::ConfigError;

/// Tolerance for the coplanarity tests of the convex hull builder.
const EPSILON: f64 = 1e-6;

/// What lies on the other side of a face edge.
///
/// - `Face` is the adjacent face ID.
/// - `Open` means the edge leads off the shape. This only happens with shapes that are not
///   closed, such as the strips used for testing.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Neighbor {
    Face(usize),
    Open,
}

impl Neighbor {
    /// Return the face ID, or None for an open edge.
    pub fn face(self) -> Option<usize> {
        match self {
            Neighbor::Face(f) => Some(f),
            Neighbor::Open => None,
        }
    }
}

/// A polyhedron face.
#[derive(Debug, Clone)]
pub struct Face {
    /// Adjacent faces, indexed by edge.
    pub neighbors: Vec<Neighbor>,

    /// Outward unit normal.
    pub normal: Vector3<f64>,

    /// Vertex ring, counter-clockwise when seen from outside.
    pub vertices: Vec<Vector3<f64>>,
}

impl Face {
    /// Number of edges (and vertexes) of the face.
    pub fn num_edges(&self) -> usize {
        self.neighbors.len()
    }

    /// Return the face on the other side of the given edge.
    pub fn neighbor(&self, edge: usize) -> Option<usize> {
        self.neighbors.get(edge).and_then(|n| n.face())
    }

    /// Return the index of the edge shared with the given face.
    pub fn edge_to(&self, face: usize) -> Option<usize> {
        self.neighbors
            .iter()
            .position(|n| *n == Neighbor::Face(face))
    }

    /// Center of the vertex ring.
    pub fn centroid(&self) -> Vector3<f64> {
        let sum: Vector3<f64> = self.vertices.iter().sum();
        sum / self.vertices.len() as f64
    }

    /// Unit vector in the face plane, perpendicular to the given edge, and pointing away from
    /// the face interior. This is the direction of the arrow drawn on that edge.
    pub fn edge_direction(&self, edge: usize) -> Vector3<f64> {
        let n: usize = self.vertices.len();
        let v1: Vector3<f64> = self.vertices[edge % n];
        let v2: Vector3<f64> = self.vertices[(edge + 1) % n];
        let mut away: Vector3<f64> = (v2 - v1).cross(&self.normal);

        // Do not rely on the winding: the arrow must point away from the centroid
        let midpoint: Vector3<f64> = (v1 + v2) / 2.0;
        if away.dot(&(midpoint - self.centroid())) < 0.0 {
            away = -away;
        }
        away.normalize()
    }
}

/// Immutable description of a polyhedron.
#[derive(Debug, Clone)]
pub struct PolyhedronGraph {
    name: String,
    faces: Vec<Face>,
}

impl PolyhedronGraph {
    /// Create a [`PolyhedronGraph`] object from its faces.
    ///
    /// # Errors
    ///
    /// The method returns an error if a face has less than three edges, if the vertex ring and
    /// the neighbor list do not have the same length, if a neighbor does not exist, or if the
    /// adjacency is not symmetric.
    pub fn new(name: &str, faces: Vec<Face>) -> Result<Self, ConfigError> {
        let num_faces: usize = faces.len();
        if num_faces == 0 {
            return Err(ConfigError::Degenerate(format!("{name} has no faces")));
        }

        for (f, face) in faces.iter().enumerate() {
            if face.num_edges() < 3 || face.vertices.len() != face.num_edges() {
                return Err(ConfigError::Degenerate(format!(
                    "{name}: face {f} has {} edges and {} vertexes",
                    face.num_edges(),
                    face.vertices.len()
                )));
            }
            for (edge, n) in face.neighbors.iter().enumerate() {
                let Neighbor::Face(other) = *n else {
                    continue;
                };
                if other >= num_faces {
                    return Err(ConfigError::NeighborOutOfRange {
                        polyhedron: name.to_string(),
                        face: f,
                        edge,
                        neighbor: other,
                    });
                }
                if faces[other].edge_to(f).is_none() {
                    return Err(ConfigError::AsymmetricAdjacency {
                        polyhedron: name.to_string(),
                        face: f,
                        neighbor: other,
                    });
                }
            }
        }

        Ok(Self {
            name: name.to_string(),
            faces,
        })
    }

    /// Build the graph of the convex hull of the given points.
    ///
    /// All the points must be vertexes of the hull (no interior points, no points in the middle
    /// of an edge or of a face).
    /// Faces are numbered in the order they are discovered, which only depends on the order of
    /// the points.
    ///
    /// # Errors
    ///
    /// The method returns an error if the points do not span a volume, or if some points are
    /// not vertexes of the hull.
    pub fn from_convex_points(name: &str, points: &[Vector3<f64>]) -> Result<Self, ConfigError> {
        let n: usize = points.len();
        let mut rings: Vec<Vec<usize>> = Vec::new();
        let mut normals: Vec<Vector3<f64>> = Vec::new();

        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    // Already part of a known face
                    if rings
                        .iter()
                        .any(|r| r.contains(&i) && r.contains(&j) && r.contains(&k))
                    {
                        continue;
                    }
                    if let Some((ring, normal)) = Self::support_plane(points, i, j, k) {
                        rings.push(ring);
                        normals.push(normal);
                    }
                }
            }
        }

        if rings.len() < 4 {
            return Err(ConfigError::Degenerate(format!(
                "{name}: the points do not span a volume"
            )));
        }

        let mut faces: Vec<Face> = Vec::with_capacity(rings.len());
        for (f, ring) in rings.iter().enumerate() {
            let len: usize = ring.len();
            let neighbors: Vec<Neighbor> = (0..len)
                .map(|e| {
                    let a: usize = ring[e];
                    let b: usize = ring[(e + 1) % len];
                    rings
                        .iter()
                        .enumerate()
                        .find(|(g, other)| *g != f && other.contains(&a) && other.contains(&b))
                        .map_or(Neighbor::Open, |(g, _)| Neighbor::Face(g))
                })
                .collect();
            faces.push(Face {
                neighbors,
                normal: normals[f],
                vertices: ring.iter().map(|v| points[*v]).collect(),
            });
        }

        debug!("Polyhedron {name}: {} faces", faces.len());
        let graph: PolyhedronGraph = Self::new(name, faces)?;

        // Every hull edge is shared by two faces, unless some points are not hull vertexes
        if !graph.is_closed() {
            return Err(ConfigError::Degenerate(format!(
                "{name}: some points are not vertexes of the hull"
            )));
        }
        let reached: usize = graph.connected_faces();
        if reached != graph.num_faces() {
            return Err(ConfigError::Disconnected {
                polyhedron: name.to_string(),
                reached,
                faces: graph.num_faces(),
            });
        }
        Ok(graph)
    }

    /// If the plane through the three points leaves all the other points on one side, then
    /// return all the points in that plane, sorted counter-clockwise around the outward normal,
    /// and the outward normal.
    fn support_plane(
        points: &[Vector3<f64>],
        i: usize,
        j: usize,
        k: usize,
    ) -> Option<(Vec<usize>, Vector3<f64>)> {
        let cross: Vector3<f64> = (points[j] - points[i]).cross(&(points[k] - points[i]));
        if cross.norm() < EPSILON {
            return None;
        }
        let mut normal: Vector3<f64> = cross.normalize();
        let offset: f64 = normal.dot(&points[i]);

        let mut above: bool = false;
        let mut below: bool = false;
        for p in points {
            let side: f64 = normal.dot(p) - offset;
            above |= side > EPSILON;
            below |= side < -EPSILON;
        }
        match (above, below) {
            (true, true) => return None,
            (true, false) => normal = -normal,
            _ => (),
        }

        let mut ring: Vec<usize> = (0..points.len())
            .filter(|v| (normal.dot(&points[*v]) - normal.dot(&points[i])).abs() <= EPSILON)
            .collect();

        let center: Vector3<f64> =
            ring.iter().map(|v| points[*v]).sum::<Vector3<f64>>() / ring.len() as f64;
        let u: Vector3<f64> = (points[ring[0]] - center).normalize();
        let w: Vector3<f64> = normal.cross(&u);
        let angle = |v: &usize| -> f64 {
            let d: Vector3<f64> = points[*v] - center;
            d.dot(&w).atan2(d.dot(&u))
        };
        ring.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
        Some((ring, normal))
    }

    /// Name of the polyhedron.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// List of the faces.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Return the face with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the face does not exist.
    pub fn face(&self, face: usize) -> &Face {
        &self.faces[face]
    }

    /// Number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Iterate over the faces adjacent to the given face, in edge order. Open edges are skipped.
    pub fn neighbors(&self, face: usize) -> impl Iterator<Item = usize> + '_ {
        self.faces[face].neighbors.iter().filter_map(|n| n.face())
    }

    /// Whether the two faces share an edge.
    pub fn are_adjacent(&self, face1: usize, face2: usize) -> bool {
        self.faces[face1].edge_to(face2).is_some()
    }

    /// Whether every edge of every face has a neighbor.
    pub fn is_closed(&self) -> bool {
        self.faces
            .iter()
            .all(|f| f.neighbors.iter().all(|n| *n != Neighbor::Open))
    }

    /// Number of faces reachable from face 0 through the face adjacency.
    pub fn connected_faces(&self) -> usize {
        let mut seen: Vec<bool> = vec![false; self.faces.len()];
        let mut queue: VecDeque<usize> = VecDeque::from([0]);
        seen[0] = true;
        let mut count: usize = 1;
        while let Some(f) = queue.pop_front() {
            for n in self.neighbors(f) {
                if !seen[n] {
                    seen[n] = true;
                    count += 1;
                    queue.push_back(n);
                }
            }
        }
        count
    }
}

/// Build a flat strip of unit squares along the X axis, all facing +Z.
/// The two ends and the long sides of the strip are open edges.
#[cfg(test)]
pub fn square_strip(len: usize) -> PolyhedronGraph {
    let faces: Vec<Face> = (0..len)
        .map(|i| {
            let x: f64 = i as f64;
            Face {
                // Edges: bottom, right, top, left
                neighbors: vec![
                    Neighbor::Open,
                    if i + 1 < len {
                        Neighbor::Face(i + 1)
                    } else {
                        Neighbor::Open
                    },
                    Neighbor::Open,
                    if i > 0 {
                        Neighbor::Face(i - 1)
                    } else {
                        Neighbor::Open
                    },
                ],
                normal: Vector3::z(),
                vertices: vec![
                    Vector3::new(x, 0.0, 0.0),
                    Vector3::new(x + 1.0, 0.0, 0.0),
                    Vector3::new(x + 1.0, 1.0, 0.0),
                    Vector3::new(x, 1.0, 0.0),
                ],
            }
        })
        .collect();
    PolyhedronGraph::new("strip", faces).expect("valid strip")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cube_points() -> Vec<Vector3<f64>> {
        let mut points: Vec<Vector3<f64>> = Vec::new();
        for x in [-1.0, 1.0] {
            for y in [-1.0, 1.0] {
                for z in [-1.0, 1.0] {
                    points.push(Vector3::new(x, y, z));
                }
            }
        }
        points
    }

    fn cube() -> PolyhedronGraph {
        PolyhedronGraph::from_convex_points("cube", &cube_points()).expect("cube hull")
    }

    #[test]
    fn cube_hull_has_six_squares() {
        let cube = cube();
        assert_eq!(cube.num_faces(), 6);
        assert!(cube.is_closed());
        for face in cube.faces() {
            assert_eq!(face.num_edges(), 4);
            assert_relative_eq!(face.normal.norm(), 1.0, epsilon = 1e-9);
            // Outward: the normal points the same way as the face center
            assert!(face.normal.dot(&face.centroid()) > 0.0);
        }
    }

    #[test]
    fn hull_rings_are_counter_clockwise_from_outside() {
        let cube = cube();
        for face in cube.faces() {
            let v = &face.vertices;
            let turn: Vector3<f64> = (v[1] - v[0]).cross(&(v[2] - v[1]));
            assert!(turn.dot(&face.normal) > 0.0);
        }
    }

    #[test]
    fn opposite_faces_of_cube_are_not_adjacent() {
        let cube = cube();
        for (f, face) in cube.faces().iter().enumerate() {
            let opposite: usize = cube
                .faces()
                .iter()
                .position(|g| g.normal.dot(&face.normal) < -0.99)
                .expect("opposite face");
            assert!(!cube.are_adjacent(f, opposite));
            assert_eq!(cube.neighbors(f).count(), 4);
        }
    }

    #[test]
    fn neighbors_share_the_edge_vertexes() {
        let cube = cube();
        for face in cube.faces() {
            for e in 0..face.num_edges() {
                let other: &Face = cube.face(face.neighbor(e).expect("closed"));
                let a = face.vertices[e];
                let b = face.vertices[(e + 1) % face.num_edges()];
                assert!(other.vertices.iter().any(|v| (v - a).norm() < 1e-9));
                assert!(other.vertices.iter().any(|v| (v - b).norm() < 1e-9));
            }
        }
    }

    #[test]
    fn edge_direction_points_away_from_face() {
        let strip = square_strip(1);
        let face = strip.face(0);
        assert_relative_eq!(face.edge_direction(0), Vector3::new(0.0, -1.0, 0.0));
        assert_relative_eq!(face.edge_direction(1), Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(face.edge_direction(2), Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(face.edge_direction(3), Vector3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn strip_is_open() {
        let strip = square_strip(3);
        assert!(!strip.is_closed());
        assert_eq!(strip.face(1).neighbor(1), Some(2));
        assert_eq!(strip.face(1).neighbor(0), None);
        assert_eq!(strip.face(2).edge_to(1), Some(3));
        assert_eq!(strip.connected_faces(), 3);
    }

    #[test]
    fn asymmetric_adjacency_is_rejected() {
        let mut faces: Vec<Face> = square_strip(2).faces().to_vec();
        faces[1].neighbors[3] = Neighbor::Open;
        let err = PolyhedronGraph::new("broken", faces).unwrap_err();
        assert_eq!(
            err,
            ConfigError::AsymmetricAdjacency {
                polyhedron: "broken".to_string(),
                face: 0,
                neighbor: 1
            }
        );
    }

    #[test]
    fn unknown_neighbor_is_rejected() {
        let mut faces: Vec<Face> = square_strip(1).faces().to_vec();
        faces[0].neighbors[0] = Neighbor::Face(7);
        assert!(matches!(
            PolyhedronGraph::new("broken", faces),
            Err(ConfigError::NeighborOutOfRange { neighbor: 7, .. })
        ));
    }

    #[test]
    fn point_inside_a_face_is_rejected() {
        let mut points: Vec<Vector3<f64>> = cube_points();

        // Center of the top face
        points.push(Vector3::new(0.0, 0.0, 1.0));
        assert!(matches!(
            PolyhedronGraph::from_convex_points("dented", &points),
            Err(ConfigError::Degenerate(_))
        ));
    }

    #[test]
    fn flat_points_are_degenerate() {
        let points: Vec<Vector3<f64>> = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
        ];
        assert!(matches!(
            PolyhedronGraph::from_convex_points("flat", &points),
            Err(ConfigError::Degenerate(_))
        ));
    }
}
