/*
commands.rs

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

//! Play complete puzzles through the text commands.

use polymaze::command::{self, CommandResponse, relative_edge};
use polymaze::config::Settings;
use polymaze::error::CommandError;
use polymaze::generator::bfs;
use polymaze::generator::polyhedra;
use polymaze::generator::seed::RuleSeed;
use polymaze::observer::{EventLog, PuzzleEvent};
use polymaze::puzzle::Puzzle;

fn puzzle(name: &str, seed: u64, rng_seed: u64) -> Puzzle {
    let settings = Settings {
        rule_seed: seed,
        polyhedron: Some(name.to_string()),
        transition_ms: 0,
        ..Settings::default()
    };
    Puzzle::new(&settings, &mut RuleSeed(rng_seed).rng()).unwrap()
}

/// Return an hour whose edge leads to an open neighbor of the current face.
fn open_hour(p: &Puzzle) -> (usize, usize) {
    let current: usize = p.current_face();
    (1..=12)
        .find_map(|h| {
            let edge: usize = p.clockface().edge(h);
            p.graph()
                .face(current)
                .neighbor(edge)
                .filter(|n| p.transitions().is_open(current, *n))
                .map(|n| (h, n))
        })
        .unwrap()
}

#[test]
fn forced_solve_on_every_polyhedron() {
    for spec in polyhedra::catalog() {
        let mut p = puzzle(spec.name, 5, 6);
        let mut log = EventLog::new();
        let start: usize = p.current_face();
        let path: Vec<usize> = bfs::shortest_path(p.transitions(), start, p.destination()).unwrap();

        assert_eq!(
            command::execute(&mut p, "solve", &mut log).unwrap(),
            CommandResponse::Done
        );
        assert!(p.is_solved(), "{}", spec.name);
        assert_eq!(p.current_face(), p.destination());
        assert_eq!(&p.walk().route().get()[1..], path.as_slice());
        assert_eq!(log.solves(), 1);
        assert_eq!(log.strikes(), 0);
        assert_eq!(
            log.events().last(),
            Some(&PuzzleEvent::Solved {
                face: p.destination()
            })
        );

        // Everything is ignored now
        assert_eq!(
            command::execute(&mut p, "move 1", &mut log).unwrap(),
            CommandResponse::Ignored
        );
        assert_eq!(log.solves(), 1);
    }
}

#[test]
fn every_hour_moves_or_strikes() {
    for spec in polyhedra::catalog() {
        for hour in 1..=12 {
            let mut p = puzzle(spec.name, 3, hour as u64);
            if p.is_solved() {
                continue;
            }
            let mut log = EventLog::new();
            let current: usize = p.current_face();
            let edge: usize = p.clockface().edge(hour);
            let target: Option<usize> = p.graph().face(current).neighbor(edge);
            let open: bool = target.is_some_and(|t| p.transitions().is_open(current, t));

            command::execute(&mut p, &format!("move {hour}"), &mut log).unwrap();
            if open {
                assert_eq!(Some(p.current_face()), target);
                assert_eq!(log.strikes(), 0);
            } else {
                assert_eq!(p.current_face(), current);
                assert_eq!(p.walk().route().get(), &[current]);
                assert_eq!(log.strikes(), 1);
            }
        }
    }
}

#[test]
fn relative_turn_after_first_move() {
    let mut found: bool = false;
    for rng_seed in 0..20 {
        let mut p = puzzle("truncatedoctahedron", 8, rng_seed);
        let start: usize = p.current_face();
        let (hour, first) = open_hour(&p);
        if first == p.destination() {
            continue;
        }

        // Find a turn that goes through an open wall of the second face
        let face = p.graph().face(first);
        let from_index: usize = face.edge_to(start).unwrap();
        let turn = (1..face.num_edges() as i64).find_map(|d| {
            let edge: usize = relative_edge(from_index, d, face.num_edges())?;
            face.neighbor(edge)
                .filter(|n| p.transitions().is_open(first, *n))
                .map(|n| (d, n))
        });
        let Some((d, second)) = turn else {
            continue;
        };

        let mut log = EventLog::new();
        command::execute(&mut p, &format!("move {hour} {d}"), &mut log).unwrap();
        assert_eq!(p.current_face(), second);
        assert_eq!(log.strikes(), 0);
        if !p.is_solved() {
            assert_eq!(p.walk().route().get(), &[start, first, second]);
        }
        found = true;
        break;
    }
    assert!(found);
}

#[test]
fn invalid_token_keeps_the_first_move() {
    let mut p = puzzle("dodecahedron", 4, 2);
    let (hour, first) = open_hour(&p);
    if first == p.destination() {
        return;
    }
    let mut log = EventLog::new();
    assert_eq!(
        command::execute(&mut p, &format!("move {hour} 99"), &mut log).unwrap(),
        CommandResponse::Aborted(CommandError::InvalidDirection {
            position: 2,
            value: 99
        })
    );
    assert_eq!(p.current_face(), first);
}

#[test]
fn oversized_token_keeps_the_first_move() {
    let mut p = puzzle("dodecahedron", 4, 2);
    let (hour, first) = open_hour(&p);
    if first == p.destination() {
        return;
    }
    let mut log = EventLog::new();
    assert_eq!(
        command::execute(&mut p, &format!("move {hour} 99999999999999999999"), &mut log).unwrap(),
        CommandResponse::Aborted(CommandError::InvalidDirection {
            position: 2,
            value: i64::MAX
        })
    );
    assert_eq!(p.current_face(), first);
    assert_eq!(log.strikes(), 0);
}

#[test]
fn reset_after_two_moves() {
    let mut p = puzzle("icosahedron", 1, 3);
    let start: usize = p.current_face();
    let mut log = EventLog::new();
    for _ in 0..2 {
        let (hour, next) = open_hour(&p);
        if next == p.destination() {
            return;
        }
        command::execute(&mut p, &format!("{hour}"), &mut log).unwrap();
    }
    command::execute(&mut p, "reset", &mut log).unwrap();
    assert_eq!(p.current_face(), start);
    assert_eq!(p.walk().route().get(), &[start]);
    assert_eq!(log.strikes(), 0);
}
