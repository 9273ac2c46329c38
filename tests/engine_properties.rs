/*
engine_properties.rs

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

use proptest::prelude::*;
use strokex::catalog::{LevelCatalog, LevelDef};
use strokex::config::Settings;
use strokex::graph::{GraphModel, Point};
use strokex::hint::{self, HintKind};
use strokex::score::score;
use strokex::session::{GameSession, PointerEvent, Signal};
use strokex::simulate::{SCRIPTED_FRAME, check_invariants, play_stroke};
use strokex::validator::{self, Verdict};

#[derive(Clone, Debug)]
enum Op {
    Down { node: u8, dx: i8, dy: i8 },
    Move { node: u8, dx: i8, dy: i8 },
    Up,
    Reset,
    Hint,
    Next,
    Previous,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => (any::<u8>(), any::<i8>(), any::<i8>()).prop_map(|(node, dx, dy)| Op::Down {
            node,
            dx,
            dy
        }),
        6 => (any::<u8>(), any::<i8>(), any::<i8>()).prop_map(|(node, dx, dy)| Op::Move {
            node,
            dx,
            dy
        }),
        2 => Just(Op::Up),
        1 => Just(Op::Reset),
        1 => Just(Op::Hint),
        1 => Just(Op::Next),
        1 => Just(Op::Previous),
    ]
}

/// Position near a node of the active level. Offsets stay within 127 pixels of the center.
fn near(session: &GameSession, node: u8, dx: i8, dy: i8) -> Point {
    let nodes = session.graph().nodes();
    let p = nodes[node as usize % nodes.len()].position;
    Point::new(p.x + f32::from(dx) * 0.5, p.y + f32::from(dy) * 0.5)
}

fn apply_op(session: &mut GameSession, op: &Op) -> Vec<Signal> {
    match *op {
        Op::Down { node, dx, dy } => {
            let p = near(session, node, dx, dy);
            session.update(&[PointerEvent::Down(p)], SCRIPTED_FRAME)
        }
        Op::Move { node, dx, dy } => {
            let p = near(session, node, dx, dy);
            session.update(&[PointerEvent::Move(p)], SCRIPTED_FRAME)
        }
        Op::Up => session.update(&[PointerEvent::Up(Point::default())], SCRIPTED_FRAME),
        Op::Reset => session.reset(),
        Op::Hint => session.show_hint(),
        Op::Next => session.next_level(),
        Op::Previous => session.previous_level(),
    }
}

#[test]
fn odd_degree_nodes_come_in_pairs() {
    for level in LevelCatalog::builtin().levels() {
        let graph = GraphModel::from_level(level);
        let degrees = graph.degrees();
        assert_eq!(degrees.iter().sum::<usize>(), 2 * graph.edges().len());
        let odd = hint::odd_degree_count(&graph);
        assert_eq!(odd % 2, 0);
        assert!(odd == 0 || odd == 2);
    }
}

proptest! {
    #[test]
    fn pointer_storm_keeps_invariants(
        start in 1i32..=14,
        ops in prop::collection::vec(op_strategy(), 1..200),
    ) {
        let mut s = GameSession::starting_at(LevelCatalog::builtin(), Settings::default(), start);
        s.begin();

        for (frame, op) in ops.iter().enumerate() {
            let total = s.progression().total_score();
            let unlocked = s.progression().max_unlocked_level();
            let was_complete = s.is_level_complete();
            let level = s.progression().current_level();

            let signals = apply_op(&mut s, op);

            prop_assert!(check_invariants(&s, frame).is_ok());
            prop_assert!(s.progression().total_score() >= total);
            prop_assert!(s.progression().max_unlocked_level() >= unlocked);
            prop_assert!(s.progression().current_level() <= s.progression().max_unlocked_level());
            if was_complete && s.progression().current_level() == level {
                prop_assert!(s.is_level_complete());
            }
            for signal in signals {
                if let Signal::Solved { score: points, .. } = signal {
                    prop_assert!((20..=100).contains(&points));
                    prop_assert_eq!(validator::evaluate(s.graph()), Verdict::Solved);
                }
            }
        }
    }

    #[test]
    fn scripted_strokes_match_the_validator(
        level in 1i32..=14,
        picks in prop::collection::vec(any::<u8>(), 1..30),
    ) {
        let mut s = GameSession::starting_at(LevelCatalog::builtin(), Settings::default(), level);
        s.begin();
        let n = s.graph().num_nodes();
        let nodes: Vec<usize> = picks.iter().map(|p| *p as usize % n).collect();

        let signals = play_stroke(&mut s, &nodes, SCRIPTED_FRAME);
        let verdict = validator::evaluate(s.graph());

        let expected = Signal::StrokeReleased { verdict };
        prop_assert!(signals.contains(&expected));
        prop_assert_eq!(s.last_verdict(), Some(verdict));
        prop_assert_eq!(s.path().first(), Some(nodes[0]));
        prop_assert!(s.path().len() <= nodes.len());
        prop_assert_eq!(s.is_level_complete(), verdict == Verdict::Solved);
        prop_assert!(check_invariants(&s, 0).is_ok());
    }

    #[test]
    fn score_stays_in_range(t in 0.0f64..10_000.0, u in 0.0f64..10_000.0) {
        let (a, b) = (score(t), score(u));
        prop_assert!((20..=100).contains(&a));
        if t <= u {
            prop_assert!(a >= b);
        }
    }

    #[test]
    fn random_levels_either_validate_or_fail_cleanly(
        n in 1usize..8,
        edges in prop::collection::vec((0usize..10, 0usize..10), 0..16),
    ) {
        let level = LevelDef {
            nodes: (0..n).map(|i| Point::new(100.0 * i as f32, 0.0)).collect(),
            edges,
        };
        if level.validate(1).is_ok() {
            let graph = GraphModel::from_level(&level);
            let h = hint::advise(&graph);
            prop_assert_eq!(h.odd_count % 2, 0);
            prop_assert_eq!(h.kind, hint::kind_for(h.odd_count));
            if h.kind == HintKind::StartFromOddNode {
                let start = h.start.unwrap();
                prop_assert_eq!(graph.degree(start) % 2, 1);
            }
        }
    }
}
