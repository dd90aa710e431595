/*
command.rs

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

//! Interpret the text commands.
//!
//! The commands are case-insensitive:
//!
//! * `reset`: go back to the start face.
//! * `solve`: walk the shortest path to the destination face.
//! * `[move] <hour> [<turn>...]`: the first number is a clock hour, from 1 to 12, and selects
//!   the edge of the current face closest to that hour. Each following number selects the next
//!   edge relative to the edge the player just came through: count that many edges clockwise
//!   from it. On a face with `n` edges, turns go from 1 to `n - 1`.
//!
//! For example, on a square face, `move 9 2 2` goes through the edge at 9 o'clock and then
//! crosses the next two faces straight ahead.

use log::info;
use std::sync::Arc;

use crate::error::{CommandError, InternalError, PolymazeError};
use crate::game::MoveOutcome;
use crate::generator::bfs;
use crate::generator::transitions::PermissibleTransitions;
use crate::observer::PuzzleObserver;
use crate::puzzle::Puzzle;

/// Parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Reset,
    Solve,
    Move(Vec<i64>),
}

/// What the command did.
#[derive(Debug, PartialEq)]
pub enum CommandResponse {
    /// The command ran.
    Done,

    /// The puzzle is already solved. Nothing happened.
    Ignored,

    /// The command is invalid. The moves before the invalid direction, if any, were applied.
    Aborted(CommandError),
}

impl Command {
    /// Parse a command line.
    ///
    /// # Errors
    ///
    /// The function returns [`CommandError::Unrecognized`] for anything other than `reset`,
    /// `solve`, or a list of integers optionally preceded by `move`.
    /// The range of the directions is not checked here. Integers too large for an `i64` are
    /// kept as [`i64::MAX`] (or [`i64::MIN`]) so that they are reported as out of range.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let line: String = input.trim().to_lowercase();
        let unrecognized = || CommandError::Unrecognized(input.trim().to_string());

        let mut tokens = line.split_whitespace().peekable();
        match tokens.peek() {
            Some(&"reset") if line == "reset" => return Ok(Command::Reset),
            Some(&"solve") if line == "solve" => return Ok(Command::Solve),
            Some(&"move") => {
                tokens.next();
            }
            Some(_) => (),
            None => return Err(unrecognized()),
        }

        let directions: Vec<i64> = tokens
            .map(parse_integer)
            .collect::<Option<_>>()
            .ok_or_else(unrecognized)?;
        if directions.is_empty() {
            return Err(unrecognized());
        }
        Ok(Command::Move(directions))
    }
}

/// Parse an optionally signed decimal integer, saturating on overflow.
fn parse_integer(token: &str) -> Option<i64> {
    let digits: &str = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match token.parse::<i64>() {
        Ok(v) => Some(v),
        Err(_) if token.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Return the edge that is `turn` edges clockwise from the edge `from_index`, on a face with
/// `num_edges` edges.
///
/// Returns None when `turn` is not in the range `[1, num_edges - 1]`.
pub fn relative_edge(from_index: usize, turn: i64, num_edges: usize) -> Option<usize> {
    let turn: usize = usize::try_from(turn).ok()?;
    if turn == 0 || turn >= num_edges {
        return None;
    }
    Some((from_index % num_edges + num_edges - turn) % num_edges)
}

/// Parse and run a command.
///
/// Invalid commands do not return an error: they are reported in the
/// [`CommandResponse::Aborted`] response.
///
/// # Errors
///
/// The function returns an error if the maze is inconsistent with the polyhedron.
pub fn execute(
    puzzle: &mut Puzzle,
    input: &str,
    observer: &mut dyn PuzzleObserver,
) -> Result<CommandResponse, PolymazeError> {
    if puzzle.is_solved() {
        return Ok(CommandResponse::Ignored);
    }
    let command: Command = match Command::parse(input) {
        Ok(c) => c,
        Err(e) => {
            info!("[Polyhedral Maze #{}] {e}", puzzle.id());
            return Ok(CommandResponse::Aborted(e));
        }
    };

    match command {
        Command::Reset => {
            puzzle.reset(observer);
            Ok(CommandResponse::Done)
        }
        Command::Solve => {
            force_solve(puzzle, observer)?;
            Ok(CommandResponse::Done)
        }
        Command::Move(directions) => run_directions(puzzle, &directions, observer),
    }
}

/// Apply a list of directions.
///
/// The sequence stops at the first strike, because the following directions are relative to
/// a move that did not happen. It also stops when the puzzle is solved.
fn run_directions(
    puzzle: &mut Puzzle,
    directions: &[i64],
    observer: &mut dyn PuzzleObserver,
) -> Result<CommandResponse, PolymazeError> {
    let mut came_from: Option<usize> = None;

    for (i, &value) in directions.iter().enumerate() {
        // The clock face table and the edge count refer to the face shown after the previous
        // rotation
        puzzle.wait_idle();
        let current: usize = puzzle.current_face();
        let edge: Option<usize> = match came_from {
            None => usize::try_from(value)
                .ok()
                .filter(|h| (1..=12).contains(h))
                .map(|h| puzzle.clockface().edge(h)),
            Some(previous) => {
                let face = puzzle.graph().face(current);
                let from_index: usize =
                    face.edge_to(previous).ok_or(InternalError::NotAdjacent {
                        from: current,
                        to: previous,
                    })?;
                relative_edge(from_index, value, face.num_edges())
            }
        };
        let Some(edge) = edge else {
            let e = CommandError::InvalidDirection {
                position: i + 1,
                value,
            };
            info!("[Polyhedral Maze #{}] {e}", puzzle.id());
            return Ok(CommandResponse::Aborted(e));
        };

        match puzzle.attempt_move(edge, observer) {
            MoveOutcome::Moved(_) => came_from = Some(current),
            MoveOutcome::Solved(_) | MoveOutcome::Strike(_) | MoveOutcome::Ignored => break,
        }
    }
    Ok(CommandResponse::Done)
}

/// Walk the shortest path from the current face to the destination face.
///
/// # Errors
///
/// The function returns an error if the destination cannot be reached, which means that the
/// maze is broken.
pub fn force_solve(
    puzzle: &mut Puzzle,
    observer: &mut dyn PuzzleObserver,
) -> Result<(), PolymazeError> {
    if puzzle.is_solved() {
        return Ok(());
    }
    let transitions: Arc<PermissibleTransitions> = Arc::clone(puzzle.transitions());
    let path: Vec<usize> =
        bfs::shortest_path(&transitions, puzzle.current_face(), puzzle.destination())?;
    info!(
        "[Polyhedral Maze #{}] Solving from face {}: {path:?}",
        puzzle.id(),
        puzzle.current_face()
    );

    for face in path {
        let current: usize = puzzle.current_face();
        let edge: usize = puzzle
            .graph()
            .face(current)
            .edge_to(face)
            .ok_or(InternalError::NotAdjacent {
                from: current,
                to: face,
            })?;
        if let MoveOutcome::Strike(_) = puzzle.attempt_move(edge, observer) {
            return Err(InternalError::BlockedPath {
                from: current,
                to: face,
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::generator::cache::TransitionCache;
    use crate::generator::polyhedron::square_strip;
    use crate::generator::seed::RuleSeed;
    use crate::observer::{EventLog, PuzzleEvent};

    // Strip of five squares facing the player, from face 0 to face 4.
    // Hour 9 is the edge towards face 1. Hour 3 and hour 12 lead off the strip.
    fn strip_puzzle() -> Puzzle {
        let settings = Settings {
            start_face: Some(0),
            transition_ms: 0,
            ..Settings::default()
        };
        Puzzle::with_graph(
            square_strip(5),
            "Strip",
            &[vec![0]],
            (4, 4),
            &settings,
            &TransitionCache::new(),
            &mut RuleSeed(0).rng(),
        )
        .unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("reset"), Ok(Command::Reset));
        assert_eq!(Command::parse("  RESET "), Ok(Command::Reset));
        assert_eq!(Command::parse("Solve"), Ok(Command::Solve));
        assert_eq!(Command::parse("move 3 1 4"), Ok(Command::Move(vec![3, 1, 4])));
        assert_eq!(Command::parse("3 1"), Ok(Command::Move(vec![3, 1])));
        assert_eq!(Command::parse("move -2"), Ok(Command::Move(vec![-2])));
        assert_eq!(Command::parse("move +4"), Ok(Command::Move(vec![4])));
    }

    #[test]
    fn oversized_integers_saturate() {
        assert_eq!(
            Command::parse("move 3 99999999999999999999"),
            Ok(Command::Move(vec![3, i64::MAX]))
        );
        assert_eq!(
            Command::parse("-99999999999999999999"),
            Ok(Command::Move(vec![i64::MIN]))
        );
    }

    #[test]
    fn parse_errors() {
        let inputs = [
            "", "move", "jump 3", "move 3 x", "reset now", "move 3.5", "move -", "move 1e3",
        ];
        for input in inputs {
            assert!(
                matches!(Command::parse(input), Err(CommandError::Unrecognized(_))),
                "{input}"
            );
        }
    }

    #[test]
    fn relative_turns() {
        assert_eq!(relative_edge(1, 1, 5), Some(0));
        assert_eq!(relative_edge(3, 4, 6), Some(5));
        assert_eq!(relative_edge(0, 2, 4), Some(2));
        assert_eq!(relative_edge(1, 4, 4), None);
        assert_eq!(relative_edge(1, 0, 4), None);
        assert_eq!(relative_edge(1, -1, 4), None);
    }

    #[test]
    fn straight_ahead_to_the_destination() {
        let mut puzzle = strip_puzzle();
        let mut log = EventLog::new();
        assert_eq!(puzzle.destination(), 4);
        assert_eq!(
            execute(&mut puzzle, "move 9 2 2 2", &mut log).unwrap(),
            CommandResponse::Done
        );
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.walk().route().get(), &[0, 1, 2, 3, 4]);
        assert_eq!(log.solves(), 1);
        assert_eq!(log.strikes(), 0);

        // No-op once solved
        assert_eq!(
            execute(&mut puzzle, "reset", &mut log).unwrap(),
            CommandResponse::Ignored
        );
        assert_eq!(puzzle.current_face(), 4);
    }

    #[test]
    fn invalid_direction_keeps_previous_moves() {
        let mut puzzle = strip_puzzle();
        let mut log = EventLog::new();
        assert_eq!(
            execute(&mut puzzle, "move 9 99", &mut log).unwrap(),
            CommandResponse::Aborted(CommandError::InvalidDirection {
                position: 2,
                value: 99
            })
        );
        assert_eq!(puzzle.current_face(), 1);
        assert_eq!(log.strikes(), 0);
    }

    #[test]
    fn oversized_direction_keeps_previous_moves() {
        let mut puzzle = strip_puzzle();
        let mut log = EventLog::new();
        assert_eq!(
            execute(&mut puzzle, "move 9 99999999999999999999", &mut log).unwrap(),
            CommandResponse::Aborted(CommandError::InvalidDirection {
                position: 2,
                value: i64::MAX
            })
        );
        assert_eq!(puzzle.current_face(), 1);
        assert_eq!(puzzle.walk().route().get(), &[0, 1]);

        // Oversized first hour
        assert_eq!(
            execute(&mut puzzle, "99999999999999999999 2", &mut log).unwrap(),
            CommandResponse::Aborted(CommandError::InvalidDirection {
                position: 1,
                value: i64::MAX
            })
        );
        assert_eq!(puzzle.current_face(), 1);
    }

    #[test]
    fn invalid_first_hour() {
        let mut puzzle = strip_puzzle();
        let mut log = EventLog::new();
        for (input, value) in [("move 13", 13), ("0 2", 0)] {
            assert_eq!(
                execute(&mut puzzle, input, &mut log).unwrap(),
                CommandResponse::Aborted(CommandError::InvalidDirection { position: 1, value })
            );
        }
        assert!(log.events().is_empty());
    }

    #[test]
    fn strike_stops_the_sequence() {
        let mut puzzle = strip_puzzle();
        let mut log = EventLog::new();
        execute(&mut puzzle, "move 9 1 2", &mut log).unwrap();
        // Turn 1 from face 1 goes through the top edge, off the strip
        assert_eq!(puzzle.current_face(), 1);
        assert_eq!(puzzle.walk().route().get(), &[1]);
        assert_eq!(log.strikes(), 1);
        assert_eq!(
            log.events().last(),
            Some(&PuzzleEvent::Strike {
                from: 1,
                attempted: None
            })
        );
    }

    #[test]
    fn twelve_o_clock() {
        let mut puzzle = strip_puzzle();
        let mut log = EventLog::new();
        execute(&mut puzzle, "move 12", &mut log).unwrap();
        assert_eq!(log.strikes(), 1);
        assert_eq!(puzzle.current_face(), 0);
    }

    #[test]
    fn reset_command() {
        let mut puzzle = strip_puzzle();
        let mut log = EventLog::new();
        execute(&mut puzzle, "9 2", &mut log).unwrap();
        assert_eq!(puzzle.current_face(), 2);
        execute(&mut puzzle, "reset", &mut log).unwrap();
        assert_eq!(puzzle.current_face(), 0);
        assert_eq!(puzzle.walk().route().get(), &[0]);
    }

    #[test]
    fn solve_command() {
        let mut puzzle = strip_puzzle();
        let mut log = EventLog::new();
        execute(&mut puzzle, "move 9", &mut log).unwrap();
        assert_eq!(
            execute(&mut puzzle, "solve", &mut log).unwrap(),
            CommandResponse::Done
        );
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.walk().route().get(), &[0, 1, 2, 3, 4]);
        assert_eq!(log.solves(), 1);
        assert_eq!(log.strikes(), 0);

        // Nothing more to do
        force_solve(&mut puzzle, &mut log).unwrap();
        assert_eq!(log.solves(), 1);
    }

    #[test]
    fn invalid_commands_are_silent_once_solved() {
        let mut puzzle = strip_puzzle();
        let mut log = EventLog::new();
        execute(&mut puzzle, "solve", &mut log).unwrap();
        assert!(puzzle.is_solved());
        for input in ["move 9 left", "jump", "move 13", ""] {
            assert_eq!(
                execute(&mut puzzle, input, &mut log).unwrap(),
                CommandResponse::Ignored,
                "{input}"
            );
        }
        assert_eq!(puzzle.current_face(), 4);
    }

    #[test]
    fn unrecognized_command_does_not_move() {
        let mut puzzle = strip_puzzle();
        let mut log = EventLog::new();
        assert!(matches!(
            execute(&mut puzzle, "move 9 left", &mut log).unwrap(),
            CommandResponse::Aborted(CommandError::Unrecognized(_))
        ));
        assert_eq!(puzzle.current_face(), 0);
    }
}
