/*
puzzle_ids.rs

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

//! Puzzle IDs in the log messages.
//!
//! The IDs are process-wide, so this file holds a single test.

use polymaze::config::Settings;
use polymaze::generator::seed::RuleSeed;
use polymaze::puzzle::Puzzle;

#[test]
fn failed_puzzles_do_not_use_an_id() {
    let settings = Settings {
        polyhedron: Some("cube".to_string()),
        transition_ms: 0,
        ..Settings::default()
    };
    let mut rng = RuleSeed(1).rng();
    let first: Puzzle = Puzzle::new(&settings, &mut rng).unwrap();

    let failures: [Settings; 4] = [
        Settings {
            min_steps: Some(4),
            max_steps: Some(2),
            ..settings.clone()
        },
        Settings {
            start_face: Some(6),
            ..settings.clone()
        },
        Settings {
            min_steps: Some(50),
            max_steps: Some(60),
            ..settings.clone()
        },
        Settings {
            polyhedron: Some("blob".to_string()),
            ..settings.clone()
        },
    ];
    for s in &failures {
        assert!(Puzzle::new(s, &mut rng).is_err());
    }

    let second: Puzzle = Puzzle::new(&settings, &mut rng).unwrap();
    assert_eq!(second.id(), first.id() + 1);
}
