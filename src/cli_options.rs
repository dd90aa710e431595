/*
cli_options.rs

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

//! Process command-line options and run a puzzle in the terminal.
//!
//! # Examples
//!
//! List the available polyhedra:
//!
//! ```text
//! $ polymaze --ls
//! tetrahedron          Tetrahedron (4 faces)
//! cube                 Cube (6 faces)
//! ...
//! ```
//!
//! Print the maze for the dodecahedron with the rule seed 42:
//!
//! ```text
//! $ polymaze -p dodecahedron -s 42 --dump
//! ```
//!
//! Play on the cube. The commands are read from the standard input:
//!
//! ```text
//! $ polymaze -p cube -s 3
//! Cube, rule seed 3. Destination: face 5.
//! Face 0: 12 -> 0 (face 2), 1 -> 0 (face 2), 2 -> 3 (face 4), ...
//! > move 3 2
//! ```

use clap::Parser;
use log::debug;
use serde::Serialize;
use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::thread;

use crate::clockface::HOURS;
use crate::command::{self, CommandResponse};
use crate::config::Settings;
use crate::generator::polyhedra;
use crate::generator::transitions::PermissibleTransitions;
use crate::observer::{ChannelObserver, PuzzleEvent};
use crate::puzzle::Puzzle;

const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\nLicense GPL-3.0-or-later"
);

/// Walk seeded mazes on the faces of polyhedra.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the polyhedra
    #[arg(long, default_value_t = false)]
    ls: bool,

    /// Name of the polyhedron. A random polyhedron is used if not set
    #[arg(short, long)]
    polyhedron: Option<String>,

    /// Rule seed for the maze
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start face
    #[arg(long)]
    start: Option<usize>,

    /// Minimum distance between the start and the destination faces
    #[arg(long)]
    min_steps: Option<usize>,

    /// Maximum distance between the start and the destination faces
    #[arg(long)]
    max_steps: Option<usize>,

    /// Duration of the rotation to the next face, in milliseconds
    #[arg(short, long)]
    transition_ms: Option<u64>,

    /// JSON settings file. The other options override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the maze as JSON and exit
    #[arg(long, default_value_t = false)]
    dump: bool,

    /// Walk the shortest path to the destination and exit
    #[arg(long, default_value_t = false, conflicts_with = "dump")]
    solve: bool,

    /// Print the events as JSON lines
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Maze description printed by `--dump`.
#[derive(Serialize)]
struct Dump<'a> {
    polyhedron: &'a str,
    rule_seed: u64,
    hubs: &'a [usize],
    start: usize,
    destination: usize,
    transitions: &'a PermissibleTransitions,
}

/// Parse and process command-line options. Return the process exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the polyhedra
    //
    if args.ls {
        for p in polyhedra::catalog() {
            let faces: String = p
                .build()
                .map_or("invalid".to_string(), |g| format!("{} faces", g.num_faces()));
            println!("{:<20} {} ({faces})", p.name, p.readable_name);
        }
        return 0;
    }

    let settings: Settings = match settings_from_args(&args) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("{msg}");
            return 1;
        }
    };
    debug!("Settings: {settings:?}");

    let mut puzzle: Puzzle = match Puzzle::new(&settings, &mut rand::rng()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    //
    // Print the maze
    //
    if args.dump {
        let dump = Dump {
            polyhedron: puzzle.graph().name(),
            rule_seed: puzzle.seed().0,
            hubs: puzzle.hubs(),
            start: puzzle.walk().start_face(),
            destination: puzzle.destination(),
            transitions: puzzle.transitions(),
        };
        return match serde_json::to_string_pretty(&dump) {
            Ok(s) => {
                println!("{s}");
                0
            }
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        };
    }

    // The events are printed by another thread
    let (sender, receiver) = async_channel::bounded::<PuzzleEvent>(64);
    let json: bool = args.json;
    let printer = thread::spawn(move || {
        while let Ok(event) = receiver.recv_blocking() {
            print_event(&event, json);
        }
    });
    let mut observer: ChannelObserver = ChannelObserver::new(sender);

    println!(
        "{}, rule seed {}. Destination: face {}.",
        puzzle.readable_name(),
        puzzle.seed(),
        puzzle.destination()
    );

    let ret: u8 = if args.solve {
        match command::force_solve(&mut puzzle, &mut observer) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Error: {e}");
                2
            }
        }
    } else {
        interactive(&mut puzzle, &mut observer)
    };

    puzzle.wait_idle();
    puzzle.external_terminate();
    drop(observer);
    if printer.join().is_err() {
        eprintln!("Error: the event printer stopped unexpectedly");
    }
    ret
}

/// Merge the settings file and the command-line options.
fn settings_from_args(args: &Args) -> Result<Settings, String> {
    let mut settings: Settings = match &args.config {
        Some(path) => Settings::load(path).map_err(|e| format!("Cannot read {path:?}: {e}"))?,
        None => Settings::default(),
    };
    if let Some(p) = &args.polyhedron {
        settings.polyhedron = Some(p.clone());
    }
    if let Some(s) = args.seed {
        settings.rule_seed = s;
    }
    if let Some(f) = args.start {
        settings.start_face = Some(f);
    }
    if let Some(m) = args.min_steps {
        settings.min_steps = Some(m);
    }
    if let Some(m) = args.max_steps {
        settings.max_steps = Some(m);
    }
    if let Some(t) = args.transition_ms {
        settings.transition_ms = t;
    }
    Ok(settings)
}

/// Read the commands from the standard input until the puzzle is solved or the input ends.
fn interactive(puzzle: &mut Puzzle, observer: &mut ChannelObserver) -> u8 {
    print_face(puzzle);
    for line in io::stdin().lock().lines() {
        let line: String = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match command::execute(puzzle, &line, observer) {
            Ok(CommandResponse::Done) => (),
            Ok(CommandResponse::Ignored) => println!("The puzzle is already solved."),
            Ok(CommandResponse::Aborted(e)) => println!("{e}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return 2;
            }
        }
        if puzzle.is_solved() {
            return 0;
        }
        puzzle.wait_idle();
        print_face(puzzle);
    }
    0
}

/// Print the current face, with the edge and the neighbor face for each clock hour.
fn print_face(puzzle: &Puzzle) {
    let face: usize = puzzle.current_face();
    let hours: Vec<String> = (0..HOURS)
        .map(|h| {
            let edge: usize = puzzle.clockface().edge(h);
            let hour: usize = if h == 0 { HOURS } else { h };
            match puzzle.graph().face(face).neighbor(edge) {
                Some(n) => format!("{hour} -> {edge} (face {n})"),
                None => format!("{hour} -> {edge} (open)"),
            }
        })
        .collect();
    println!("Face {face}: {}", hours.join(", "));
}

/// Print an event received from the puzzle.
fn print_event(event: &PuzzleEvent, json: bool) {
    if json {
        match serde_json::to_string(event) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Error: {e}"),
        }
        return;
    }
    match event {
        PuzzleEvent::FaceChanged { face } => println!("Now on face {face}."),
        PuzzleEvent::TransitionStarted { .. } => (),
        PuzzleEvent::Strike {
            from,
            attempted: Some(to),
        } => println!("Strike! The way from face {from} to face {to} is walled."),
        PuzzleEvent::Strike {
            from,
            attempted: None,
        } => println!("Strike! Face {from} has no neighbor on that side."),
        PuzzleEvent::Solved { face } => println!("Solved! Face {face} reached."),
    }
}
