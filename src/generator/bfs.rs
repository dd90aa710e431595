/*
bfs.rs

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

//! Breadth-first searches through the open walls of a maze.

use log::debug;
use rand::Rng;
use std::collections::VecDeque;

use super::transitions::PermissibleTransitions;
use crate::error::InternalError;

/// Return the number of steps from the `start` face to every face, or None for the faces that
/// cannot be reached.
pub fn distances(transitions: &PermissibleTransitions, start: usize) -> Vec<Option<usize>> {
    search(transitions, start).0
}

/// Run the search and return the distances and the parent of each face.
fn search(
    transitions: &PermissibleTransitions,
    start: usize,
) -> (Vec<Option<usize>>, Vec<Option<usize>>) {
    let num_faces: usize = transitions.num_faces();
    let mut dist: Vec<Option<usize>> = vec![None; num_faces];
    let mut parent: Vec<Option<usize>> = vec![None; num_faces];
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(num_faces);

    if start >= num_faces {
        return (dist, parent);
    }
    dist[start] = Some(0);
    queue.push_back(start);

    while let Some(face) = queue.pop_front() {
        let d: usize = dist[face].unwrap_or_default();
        for next in transitions.reachable(face) {
            if dist[*next].is_none() {
                dist[*next] = Some(d + 1);
                parent[*next] = Some(face);
                queue.push_back(*next);
            }
        }
    }
    (dist, parent)
}

/// Select a random face that is between `min_steps` and `max_steps` (inclusive) away from the
/// `start` face.
///
/// # Errors
///
/// The function returns an error if no face is in the range. The maze generator guarantees
/// that all the faces are connected, therefore the error indicates that the range is too long
/// for the polyhedron.
pub fn pick_destination<R: Rng + ?Sized>(
    transitions: &PermissibleTransitions,
    start: usize,
    min_steps: usize,
    max_steps: usize,
    rng: &mut R,
) -> Result<usize, InternalError> {
    let candidates: Vec<usize> = distances(transitions, start)
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_some_and(|d| d >= min_steps && d <= max_steps))
        .map(|(f, _)| f)
        .collect();

    debug!(
        "{} faces between {min_steps} and {max_steps} steps from face {start}",
        candidates.len()
    );
    if candidates.is_empty() {
        return Err(InternalError::NoDestination {
            start,
            min: min_steps,
            max: max_steps,
        });
    }
    Ok(candidates[rng.random_range(0..candidates.len())])
}

/// Return the faces along a shortest path from the `from` face to the `to` face.
///
/// The `from` face is not part of the returned list, but the `to` face is. The list is
/// empty when both faces are the same.
///
/// # Errors
///
/// The function returns an error if the `to` face cannot be reached.
pub fn shortest_path(
    transitions: &PermissibleTransitions,
    from: usize,
    to: usize,
) -> Result<Vec<usize>, InternalError> {
    if from == to {
        return Ok(Vec::new());
    }
    let (dist, parent) = search(transitions, from);
    if dist.get(to).copied().flatten().is_none() {
        return Err(InternalError::Unreachable { from, to });
    }

    let mut path: Vec<usize> = Vec::new();
    let mut face: usize = to;
    while face != from {
        path.push(face);
        face = parent[face].ok_or(InternalError::Unreachable { from, to })?;
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::seed::RuleSeed;

    /// 0 - 1 - 2 - 3 - 4, plus a shortcut 0 - 5 - 3.
    fn sample() -> PermissibleTransitions {
        let mut t = PermissibleTransitions::new(7);
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4), (0, 5), (5, 3)] {
            t.open(a, b);
        }
        t
    }

    #[test]
    fn distances_from_start() {
        let d = distances(&sample(), 0);
        assert_eq!(
            d,
            vec![Some(0), Some(1), Some(2), Some(2), Some(3), Some(1), None]
        );
    }

    #[test]
    fn destination_in_range() {
        let t = sample();
        let mut rng = RuleSeed(3).rng();
        for _ in 0..50 {
            let dest: usize = pick_destination(&t, 0, 2, 3, &mut rng).unwrap();
            assert!([2, 3, 4].contains(&dest));
        }
    }

    #[test]
    fn destination_out_of_reach() {
        let err = pick_destination(&sample(), 0, 4, 9, &mut RuleSeed(0).rng()).unwrap_err();
        assert_eq!(
            err,
            InternalError::NoDestination {
                start: 0,
                min: 4,
                max: 9
            }
        );
    }

    #[test]
    fn path_is_shortest() {
        let t = sample();
        let path: Vec<usize> = shortest_path(&t, 0, 4).unwrap();
        assert_eq!(path, vec![5, 3, 4]);
        assert_eq!(Some(path.len()), distances(&t, 0)[4]);
    }

    #[test]
    fn empty_path_to_self() {
        assert!(shortest_path(&sample(), 2, 2).unwrap().is_empty());
    }

    #[test]
    fn unreachable_face() {
        assert_eq!(
            shortest_path(&sample(), 0, 6),
            Err(InternalError::Unreachable { from: 0, to: 6 })
        );
    }
}
