/*
snapshot.rs

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

//! State of the game for the presentation layer.
//!
//! A [`Snapshot`] object is a plain copy of everything the renderer needs for a frame. It can be
//! serialized, which the command-line tool uses to print the state of a game.

use serde::{Deserialize, Serialize};

use crate::graph::{EdgeMark, NodeId, Point};
use crate::hint::Hint;
use crate::session::{GameSession, Screen};
use crate::validator::Verdict;

/// Node as displayed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NodeView {
    pub id: NodeId,
    pub position: Point,
    pub highlighted: bool,

    /// Whether the current path goes through the node.
    pub on_path: bool,
}

/// Edge as displayed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EdgeView {
    pub a: NodeId,
    pub b: NodeId,
    pub visit_count: u32,
    pub mark: EdgeMark,
}

/// Everything the renderer displays.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub screen: Screen,
    pub level: i32,
    pub max_unlocked_level: i32,
    pub level_count: i32,

    /// Whether the "next level" button must be disabled.
    pub next_locked: bool,
    pub drawing: bool,
    pub level_complete: bool,

    /// Result of the last released stroke.
    pub verdict: Option<Verdict>,

    /// Time spent on the level, in seconds.
    pub elapsed: f64,
    pub level_score: u32,
    pub total_score: u64,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,

    /// Traced path as a polyline through the node centers.
    pub path: Vec<Point>,

    /// Hint, only while the hint popup is open.
    pub hint: Option<Hint>,
}

impl Snapshot {
    /// Capture the state of the session.
    pub fn capture(session: &GameSession) -> Self {
        let graph = session.graph();
        let path = session.path();
        let progression = session.progression();

        Self {
            screen: session.screen(),
            level: progression.current_level(),
            max_unlocked_level: progression.max_unlocked_level(),
            level_count: progression.level_count(),
            next_locked: progression.is_next_locked(),
            drawing: session.is_drawing(),
            level_complete: session.is_level_complete(),
            verdict: session.last_verdict(),
            elapsed: session.elapsed(),
            level_score: session.level_score(),
            total_score: progression.total_score(),
            nodes: graph
                .nodes()
                .iter()
                .map(|n| NodeView {
                    id: n.id,
                    position: n.position,
                    highlighted: n.highlighted,
                    on_path: path.contains(n.id),
                })
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|e| EdgeView {
                    a: e.a,
                    b: e.b,
                    visit_count: e.visit_count,
                    mark: e.mark(),
                })
                .collect(),
            path: path
                .get()
                .iter()
                .filter_map(|id| graph.node(*id).map(|n| n.position))
                .collect(),
            hint: session.is_hint_visible().then(|| session.hint()),
        }
    }
}

impl GameSession {
    /// Capture the state of the session for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::LevelCatalog;
    use crate::config::Settings;
    use crate::graph::EdgeMark;
    use crate::session::{GameSession, PointerEvent};

    #[test]
    fn snapshot_reflects_partial_stroke() {
        let mut s = GameSession::new(LevelCatalog::builtin(), Settings::default());
        s.begin();
        let p0 = s.graph().node(0).unwrap().position;
        let p1 = s.graph().node(1).unwrap().position;
        s.update(&[PointerEvent::Down(p0), PointerEvent::Move(p1)], 0.1);

        let snap = s.snapshot();
        assert_eq!(snap.level, 1);
        assert!(snap.drawing);
        assert!(snap.next_locked);
        assert_eq!(snap.path, vec![p0, p1]);
        assert!(snap.nodes[0].on_path && snap.nodes[1].on_path && !snap.nodes[2].on_path);
        assert_eq!(snap.edges[0].mark, EdgeMark::Traced);
        assert_eq!(snap.edges[1].mark, EdgeMark::Untouched);
        assert_eq!(snap.hint, None);

        s.show_hint();
        assert!(s.snapshot().hint.is_some());
    }

    #[test]
    fn snapshot_serializes_points_as_pairs() {
        let mut s = GameSession::new(LevelCatalog::builtin(), Settings::default());
        s.begin();
        let json = serde_json::to_value(s.snapshot()).unwrap();
        assert_eq!(json["nodes"][0]["position"], serde_json::json!([940.0, 441.0]));
        assert_eq!(json["edges"][0]["mark"], "Untouched");
        assert_eq!(json["screen"], "Playing");
    }
}
