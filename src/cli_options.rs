/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of StrokeX.

StrokeX is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

StrokeX is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
StrokeX. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! The StrokeX engine has no window of its own. The command-line tool is intended for level
//! designers and developers: it lists and verifies the levels, prints solutions, replays
//! strokes through the engine, and stress-tests the engine with random input.
//!
//! # Examples
//!
//! List the levels:
//!
//! ```text
//! $ strokex --ls
//!  1   3 nodes   3 edges  You can start from any node!
//!  2   9 nodes  10 edges  Start from a node with odd connections! (node 1)
//! ...
//! ```
//!
//! Replay a stroke on level 1 and print the resulting game state:
//!
//! ```text
//! $ strokex --level 1 --play 0,1,2,0
//! Level 1: solved in 1.00s, 98 points
//! { "screen": "Playing", "level": 1, ... }
//! ```
//!
//! Verify a level file and stress the engine with it:
//!
//! ```text
//! $ strokex --levels my_levels.json --check --fuzz 100000 --seed 42
//! ```

use chrono::{DateTime, Local};
use clap::Parser;
use log::debug;
use std::env;
use std::error::Error;
use std::path::PathBuf;

use strokex::catalog::LevelCatalog;
use strokex::config::{COPYRIGHT_NOTICE, PKG_NAME, Settings, VERSION};
use strokex::graph::{GraphModel, NodeId};
use strokex::hint::{self, HintKind};
use strokex::session::{GameSession, Signal};
use strokex::simulate::{self, RandomPlayer};
use strokex::solver;
use strokex::validator::Verdict;

/// Level tools for the StrokeX single-stroke puzzle.
#[derive(Parser)]
#[command(
    name = PKG_NAME,
    about,
    long_about = None,
    version = VERSION,
    long_version = COPYRIGHT_NOTICE
)]
struct Args {
    /// List the levels
    #[arg(long, default_value_t = false)]
    ls: bool,

    /// Verify the authoring rules of all the levels
    #[arg(long, default_value_t = false)]
    check: bool,

    /// Use the levels from this JSON file instead of the built-in levels
    #[arg(long)]
    levels: Option<PathBuf>,

    /// Write the levels to this JSON file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Level to work on
    #[arg(short, long, default_value_t = 1)]
    level: i32,

    /// Print a single-stroke solution for the level
    #[arg(short, long, default_value_t = false)]
    solution: bool,

    /// Replay a comma-separated list of node identifiers as a stroke on the level
    #[arg(short, long)]
    play: Option<String>,

    /// Seconds between two pointer events when replaying a stroke
    #[arg(long, default_value_t = 0.25)]
    pace: f64,

    /// Run the given number of frames of random input and verify the engine invariants
    #[arg(short, long)]
    fuzz: Option<usize>,

    /// Seed for the random input, for reproducible runs
    #[arg(long, requires = "fuzz")]
    seed: Option<u64>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
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

    let catalog: LevelCatalog = match &args.levels {
        Some(path) => match LevelCatalog::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}: {e}", path.display());
                return 1;
            }
        },
        None => LevelCatalog::builtin(),
    };
    debug!("Catalog with {} levels", catalog.len());

    let mut ret: u8 = 0;

    if args.ls {
        list_levels(&catalog);
    }

    if args.check {
        match catalog.validate() {
            Ok(()) => println!("{} levels verified", catalog.len()),
            Err(e) => {
                eprintln!("Error: {e}");
                ret = 1;
            }
        }
    }

    if let Some(path) = &args.export {
        if let Err(e) = catalog.save(path) {
            eprintln!("Error: {}: {e}", path.display());
            return 1;
        }
        println!("{} levels written to {}", catalog.len(), path.display());
    }

    if args.solution {
        print_solution(&catalog, args.level);
    }

    if let Some(nodes) = &args.play {
        match parse_nodes(nodes) {
            Some(nodes) => {
                if let Err(e) = play(&catalog, args.level, &nodes, args.pace) {
                    eprintln!("Error: {e}");
                    ret = 1;
                }
            }
            None => {
                eprintln!("Error: --play expects node identifiers separated by commas");
                return 2;
            }
        }
    }

    if let Some(frames) = args.fuzz {
        let mut session = GameSession::new(catalog, Settings::default());
        let res = match args.seed {
            Some(seed) => RandomPlayer::seeded(seed).run(&mut session, frames),
            None => RandomPlayer::new().run(&mut session, frames),
        };
        match res {
            Ok(report) => println!(
                "{} frames, {} strokes: {} solved, {} failed, {} incomplete, {} levels loaded, \
                 total score {}",
                report.frames,
                report.strokes,
                report.solved,
                report.failed,
                report.incomplete,
                report.levels_loaded,
                session.progression().total_score()
            ),
            Err(e) => {
                eprintln!("Invariant violation: {e}");
                ret = 1;
            }
        }
    }

    ret
}

/// Print one line per level.
fn list_levels(catalog: &LevelCatalog) {
    for (i, level) in catalog.levels().iter().enumerate() {
        let graph = GraphModel::from_level(level);
        let h = hint::advise(&graph);
        let start: String = match (h.kind, h.start) {
            (HintKind::StartFromOddNode, Some(n)) => format!(" (node {n})"),
            _ => String::new(),
        };
        println!(
            "{:>2}  {:>2} nodes  {:>2} edges  {}{}",
            i + 1,
            graph.num_nodes(),
            graph.edges().len(),
            h.message,
            start
        );
    }
}

/// Print a solution for the level.
fn print_solution(catalog: &LevelCatalog, level: i32) {
    let level: i32 = catalog.resolve(level);
    let graph = GraphModel::from_level(catalog.get(level));
    match solver::find_trail(&graph) {
        Some(trail) => {
            let s: Vec<String> = trail.iter().map(|n| n.to_string()).collect();
            println!("Level {level}: {}", s.join(","));
        }
        None => println!("Level {level}: no single-stroke solution"),
    }
}

/// Parse a list such as `0,1,2,0`.
fn parse_nodes(list: &str) -> Option<Vec<NodeId>> {
    let nodes: Result<Vec<NodeId>, _> = list
        .split(',')
        .map(|s| s.trim().parse::<NodeId>())
        .collect();
    match nodes {
        Ok(n) if !n.is_empty() => Some(n),
        _ => None,
    }
}

/// Replay the stroke and print the result and the final game state.
fn play(
    catalog: &LevelCatalog,
    level: i32,
    nodes: &[NodeId],
    pace: f64,
) -> Result<(), Box<dyn Error>> {
    let mut session = GameSession::starting_at(catalog.clone(), Settings::default(), level);
    session.begin();
    let level: i32 = session.progression().current_level();

    for signal in simulate::play_stroke(&mut session, nodes, pace) {
        match signal {
            Signal::Solved { score, elapsed, .. } => {
                println!("Level {level}: solved in {elapsed:.2}s, {score} points")
            }
            Signal::Failed { .. } => println!("Level {level}: failed, an edge was traced twice"),
            Signal::StrokeReleased { verdict } => debug!("Stroke released: {verdict}"),
            _ => (),
        }
    }
    if session.last_verdict() == Some(Verdict::Incomplete) {
        println!(
            "Level {level}: incomplete, {} of {} edges traced",
            session.graph().total_visits(),
            session.graph().edges().len()
        );
    }
    if let Some(record) = session.progression().history().last() {
        let when: DateTime<Local> = record.when.into();
        println!("Recorded on {}", when.format("%Y-%m-%d %H:%M:%S"));
    }

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_lists() {
        assert_eq!(parse_nodes("0,1, 2,0"), Some(vec![0, 1, 2, 0]));
        assert_eq!(parse_nodes(""), None);
        assert_eq!(parse_nodes("0,x"), None);
    }

    #[test]
    fn replay_prints_the_snapshot() {
        let catalog = LevelCatalog::builtin();
        assert!(play(&catalog, 1, &[0, 1, 2, 0], 0.25).is_ok());
        assert!(play(&catalog, 1, &[0, 1, 0], 0.25).is_ok());
        assert!(play(&catalog, 99, &[0, 1], 0.25).is_ok());
    }
}
