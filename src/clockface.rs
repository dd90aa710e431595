/*
clockface.rs

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

//! Map clock hours to the edges of the current face.
//!
//! The polyhedron is displayed with the current face on top (its normal along +Y). Seen from
//! above, 12 o'clock is the +Z direction and the hours go clockwise, so 3 o'clock is -X.
//! Each hour is assigned the edge whose arrow is the closest to that hour. This way a player can
//! designate an edge by its clock position, whatever its index in the face.

use log::debug;
use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::generator::polyhedron::Face;

/// Number of hours on the clock face.
pub const HOURS: usize = 12;

/// Angle between two consecutive hours, in degrees.
const DEGREES_PER_HOUR: f64 = 360.0 / HOURS as f64;

/// Edge indexes for each clock hour.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClockfaceTable {
    /// Edge index for hours 0 (12 o'clock) to 11.
    edges: [usize; HOURS],
}

impl ClockfaceTable {
    /// Build the table for the given face, seen after applying the given rotation to the
    /// polyhedron.
    pub fn compute(face: &Face, orientation: &UnitQuaternion<f64>) -> Self {
        let angles: Vec<f64> = edge_angles(face, orientation);
        let mut edges: [usize; HOURS] = [0; HOURS];

        for (hour, edge) in edges.iter_mut().enumerate() {
            *edge = nearest(&angles, hour as f64 * DEGREES_PER_HOUR);
        }
        debug!("Clockface table: {edges:?}");
        Self { edges }
    }

    /// Build the table for the given face, with the face on top.
    pub fn for_face(face: &Face) -> Self {
        Self::compute(face, &face_up_rotation(&face.normal))
    }

    /// Return the edge index for the given hour. Hours 0 and 12 are the same.
    pub fn edge(&self, hour: usize) -> usize {
        self.edges[hour % HOURS]
    }

    /// Return the whole table.
    pub fn edges(&self) -> &[usize; HOURS] {
        &self.edges
    }
}

/// Rotation that brings the given normal to the +Y axis.
pub fn face_up_rotation(normal: &Vector3<f64>) -> UnitQuaternion<f64> {
    // No unique rotation for a face pointing straight down: use a half turn
    UnitQuaternion::rotation_between(normal, &Vector3::y())
        .unwrap_or_else(|| UnitQuaternion::from_axis_angle(&Vector3::x_axis(), PI))
}

/// Clock angle, in degrees, of each edge arrow of the face.
pub fn edge_angles(face: &Face, orientation: &UnitQuaternion<f64>) -> Vec<f64> {
    (0..face.num_edges())
        .map(|e| clock_angle(&(orientation * face.edge_direction(e))))
        .collect()
}

/// Angle in [0, 360) of the projection of the vector onto the XZ plane, measured clockwise from
/// +Z when seen from above.
pub fn clock_angle(v: &Vector3<f64>) -> f64 {
    (-v.x).atan2(v.z).to_degrees().rem_euclid(360.0)
}

/// Index of the angle closest to the target. On a tie, the first one wins.
fn nearest(angles: &[f64], target: f64) -> usize {
    let mut best: f64 = f64::INFINITY;
    let mut index: usize = 0;
    for (i, angle) in angles.iter().enumerate() {
        let d: f64 = angular_distance(*angle, target);
        if d < best {
            best = d;
            index = i;
        }
    }
    index
}

/// Smallest difference between two angles in degrees.
fn angular_distance(a: f64, b: f64) -> f64 {
    let d: f64 = (a - b).abs();
    d.min((d - 360.0).abs())
}
