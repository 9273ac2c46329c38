/*
simulate.rs

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

//! Drive a game with scripted or random pointer input.
//!
//! [`stroke_events`] converts a node sequence into the pointer events a player would produce
//! when drawing it. [`RandomPlayer`] produces erratic input (presses anywhere, jittery moves,
//! stray releases, button mashing) and verifies the engine invariants after every frame.

use log::{debug, warn};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::graph::{GraphModel, NodeId, Point};
use crate::session::{GameSession, PointerEvent, Signal};
use crate::validator::Verdict;

/// Frame duration used when a scripted stroke is replayed.
pub const SCRIPTED_FRAME: f64 = 1.0 / 60.0;

/// Return the pointer events that draw the given node sequence: a press on the first node, a
/// move to each following node, and a release on the last one.
///
/// Unknown nodes are skipped.
pub fn stroke_events(graph: &GraphModel, nodes: &[NodeId]) -> Vec<PointerEvent> {
    let points: Vec<Point> = nodes
        .iter()
        .filter_map(|id| graph.node(*id).map(|n| n.position))
        .collect();
    let mut events: Vec<PointerEvent> = Vec::with_capacity(points.len() + 1);

    if let Some((first, rest)) = points.split_first() {
        events.push(PointerEvent::Down(*first));
        events.extend(rest.iter().map(|p| PointerEvent::Move(*p)));
        events.push(PointerEvent::Up(*points.last().unwrap_or(first)));
    }
    events
}

/// Replay a node sequence, one pointer event per frame. Return all the signals.
pub fn play_stroke(session: &mut GameSession, nodes: &[NodeId], frame: f64) -> Vec<Signal> {
    let events: Vec<PointerEvent> = stroke_events(session.graph(), nodes);
    let mut signals: Vec<Signal> = Vec::new();
    for event in events {
        signals.extend(session.update(&[event], frame));
    }
    signals
}

/// Broken engine invariant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    /// Two consecutive path nodes are not linked by an edge.
    #[error("Frame {frame}: path step {from} -> {to} has no edge")]
    DisconnectedPath { frame: usize, from: NodeId, to: NodeId },

    /// The visit counters do not add up to the number of path steps.
    #[error("Frame {frame}: {visits} edge visits for a path of {steps} steps")]
    VisitMismatch {
        frame: usize,
        visits: u32,
        steps: usize,
    },

    /// The total score or the highest unlocked level went down.
    #[error("Frame {frame}: progression went backwards")]
    Regression { frame: usize },

    /// A node is highlighted while a stroke is in progress.
    #[error("Frame {frame}: node highlighted while drawing")]
    HighlightWhileDrawing { frame: usize },
}

/// Outcome of a random run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FuzzReport {
    pub frames: usize,
    pub strokes: usize,
    pub solved: usize,
    pub failed: usize,
    pub incomplete: usize,
    pub levels_loaded: usize,
}

/// Player that produces erratic input.
pub struct RandomPlayer<R: Rng> {
    rng: R,
    button_down: bool,
}

impl RandomPlayer<ThreadRng> {
    /// Create a [`RandomPlayer`] object that uses the thread random generator.
    pub fn new() -> Self {
        Self {
            rng: rand::rng(),
            button_down: false,
        }
    }
}

impl Default for RandomPlayer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPlayer<StdRng> {
    /// Create a [`RandomPlayer`] object that always plays the same way for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            button_down: false,
        }
    }
}

impl<R: Rng> RandomPlayer<R> {
    /// Pick a position, usually close to a node, sometimes anywhere around the level.
    fn random_position(&mut self, graph: &GraphModel, radius: f32) -> Point {
        let nodes = graph.nodes();
        if nodes.is_empty() {
            return Point::new(
                self.rng.random_range(0.0..1880.0),
                self.rng.random_range(0.0..1060.0),
            );
        }
        if self.rng.random_bool(0.7) {
            let node = &nodes[self.rng.random_range(0..nodes.len())];
            let spread: f32 = radius * 1.5;
            return Point::new(
                node.position.x + self.rng.random_range(-spread..=spread),
                node.position.y + self.rng.random_range(-spread..=spread),
            );
        }

        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for n in nodes {
            min_x = min_x.min(n.position.x);
            min_y = min_y.min(n.position.y);
            max_x = max_x.max(n.position.x);
            max_y = max_y.max(n.position.y);
        }
        let margin: f32 = radius * 3.0;
        Point::new(
            self.rng.random_range(min_x - margin..=max_x + margin),
            self.rng.random_range(min_y - margin..=max_y + margin),
        )
    }

    /// Generate the pointer events of one frame.
    fn frame_events(&mut self, graph: &GraphModel, radius: f32) -> Vec<PointerEvent> {
        let count: usize = self.rng.random_range(0..=4);
        let mut events: Vec<PointerEvent> = Vec::with_capacity(count);

        for _ in 0..count {
            let p: Point = self.random_position(graph, radius);
            let roll: f64 = self.rng.random();
            let event: PointerEvent = if !self.button_down && roll < 0.25 {
                self.button_down = true;
                PointerEvent::Down(p)
            } else if self.button_down && roll < 0.08 {
                self.button_down = false;
                PointerEvent::Up(p)
            } else if roll > 0.98 {
                // Stray event that a buggy platform layer could deliver
                if self.rng.random_bool(0.5) {
                    PointerEvent::Down(p)
                } else {
                    PointerEvent::Up(p)
                }
            } else {
                PointerEvent::Move(p)
            };
            events.push(event);
        }
        events
    }

    /// Play one frame, including the occasional button click.
    pub fn play_frame(&mut self, session: &mut GameSession) -> Vec<Signal> {
        let mut signals: Vec<Signal> = Vec::new();

        let roll: f64 = self.rng.random();
        if roll < 0.01 {
            signals.extend(session.reset());
        } else if roll < 0.015 {
            signals.extend(session.show_hint());
        } else if roll < 0.02 || (session.is_level_complete() && roll < 0.2) {
            signals.extend(session.next_level());
        } else if roll < 0.025 {
            signals.extend(session.previous_level());
        }

        let radius: f32 = session.settings().node_radius;
        let events: Vec<PointerEvent> = self.frame_events(session.graph(), radius);
        let dt: f64 = self.rng.random_range(0.005..0.05);
        signals.extend(session.update(&events, dt));
        signals
    }

    /// Play `frames` frames and verify the invariants after each of them.
    ///
    /// # Errors
    ///
    /// The method stops at the first broken invariant and returns it.
    pub fn run(
        &mut self,
        session: &mut GameSession,
        frames: usize,
    ) -> Result<FuzzReport, InvariantViolation> {
        let mut report = FuzzReport {
            levels_loaded: session.begin().len(),
            ..FuzzReport::default()
        };

        for frame in 0..frames {
            let total_before: u64 = session.progression().total_score();
            let unlocked_before: i32 = session.progression().max_unlocked_level();

            for signal in self.play_frame(session) {
                match signal {
                    Signal::StrokeStarted { .. } => report.strokes += 1,
                    Signal::Solved { .. } => report.solved += 1,
                    Signal::Failed { .. } => report.failed += 1,
                    Signal::StrokeReleased {
                        verdict: Verdict::Incomplete,
                    } => report.incomplete += 1,
                    Signal::LevelLoaded { .. } => report.levels_loaded += 1,
                    _ => (),
                }
            }
            report.frames += 1;

            if session.progression().total_score() < total_before
                || session.progression().max_unlocked_level() < unlocked_before
            {
                return Err(InvariantViolation::Regression { frame });
            }
            if let Err(e) = check_invariants(session, frame) {
                warn!("{e}");
                return Err(e);
            }
        }
        debug!("Random run finished: {report:?}");
        Ok(report)
    }
}

/// Verify the path and the visit counters of the session.
pub fn check_invariants(session: &GameSession, frame: usize) -> Result<(), InvariantViolation> {
    let graph: &GraphModel = session.graph();
    let path = session.path();

    if let Some((from, to)) = path.steps().find(|(a, b)| !graph.are_connected(*a, *b)) {
        return Err(InvariantViolation::DisconnectedPath { frame, from, to });
    }
    let steps: usize = path.steps().count();
    let visits: u32 = graph.total_visits();
    if visits as usize != steps {
        return Err(InvariantViolation::VisitMismatch {
            frame,
            visits,
            steps,
        });
    }
    if session.is_drawing() && graph.highlighted().is_some() {
        return Err(InvariantViolation::HighlightWhileDrawing { frame });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LevelCatalog;
    use crate::config::Settings;

    fn session() -> GameSession {
        let mut s = GameSession::new(LevelCatalog::builtin(), Settings::default());
        s.begin();
        s
    }

    #[test]
    fn stroke_events_shape() {
        let s = session();
        let events = stroke_events(s.graph(), &[0, 1, 2]);
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], PointerEvent::Down(_)));
        assert!(matches!(events[2], PointerEvent::Move(_)));
        assert!(matches!(events[3], PointerEvent::Up(_)));
        assert!(stroke_events(s.graph(), &[]).is_empty());
        assert_eq!(stroke_events(s.graph(), &[42]).len(), 0);
    }

    #[test]
    fn play_stroke_solves_triangle() {
        let mut s = session();
        let signals = play_stroke(&mut s, &[0, 1, 2, 0], SCRIPTED_FRAME);
        assert!(signals.contains(&Signal::StrokeReleased {
            verdict: Verdict::Solved
        }));
        assert!(check_invariants(&s, 0).is_ok());
    }

    #[test]
    fn seeded_runs_keep_invariants() {
        for seed in 0..8 {
            let mut s = GameSession::new(LevelCatalog::builtin(), Settings::default());
            let report = RandomPlayer::seeded(seed).run(&mut s, 2_000).unwrap();
            assert_eq!(report.frames, 2_000);
            assert!(report.levels_loaded >= 1);
        }
    }

    #[test]
    fn violation_messages() {
        let e = InvariantViolation::DisconnectedPath {
            frame: 3,
            from: 0,
            to: 4,
        };
        assert_eq!(e.to_string(), "Frame 3: path step 0 -> 4 has no edge");
        let e = InvariantViolation::VisitMismatch {
            frame: 7,
            visits: 2,
            steps: 1,
        };
        assert_eq!(e.to_string(), "Frame 7: 2 edge visits for a path of 1 steps");
    }

    #[test]
    fn same_seed_same_game() {
        let mut a = GameSession::new(LevelCatalog::builtin(), Settings::default());
        let mut b = GameSession::new(LevelCatalog::builtin(), Settings::default());
        let ra = RandomPlayer::seeded(7).run(&mut a, 500).unwrap();
        let rb = RandomPlayer::seeded(7).run(&mut b, 500).unwrap();
        assert_eq!(ra, rb);
        assert_eq!(a.path(), b.path());
    }
}
