/*
tracer.rs

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

//! Path-tracing state machine.
//!
//! The [`PathTracer`] object follows the pointer while the player draws:
//!
//! * [`PathTracer::start`] begins a fresh attempt from a node (`Idle` or `Drawing` to
//!   `Drawing`). The visit counters of the graph go back to zero.
//! * [`PathTracer::extend`] appends the node under the pointer when it is adjacent to the last
//!   node of the path, and counts the visit of the edge between them. Anything else (empty
//!   space, the current node, a node without a direct edge) is ignored.
//! * [`PathTracer::release`] ends the stroke (`Drawing` to `Idle`) and evaluates it. The path
//!   and the visit counters stay as they are so that the result can be displayed.
//! * [`PathTracer::reset`] clears the path and the visit counters from any state.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::{GraphModel, NodeId, Point};
use crate::path::Path;
use crate::timer::LevelTimer;
use crate::validator::{self, Verdict};

/// Tracer states.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum TracerState {
    /// No stroke in progress.
    #[default]
    Idle,

    /// The pointer is down and the stroke follows it.
    Drawing,
}

/// Stroke state machine.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct PathTracer {
    state: TracerState,
    path: Path,
}

impl PathTracer {
    /// Create an idle [`PathTracer`] object with an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> TracerState {
        self.state
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.state == TracerState::Drawing
    }

    /// Current path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Begin a new stroke from the given node.
    ///
    /// Any previous attempt is discarded, including one still in progress. The level timer
    /// is started if it is not already running.
    pub fn start(
        &mut self,
        graph: &mut GraphModel,
        node: NodeId,
        timer: &mut LevelTimer,
        now: f64,
    ) {
        if self.is_drawing() {
            debug!("New stroke while drawing: previous stroke discarded");
        }
        self.reset(graph);
        self.path.push(node);
        self.state = TracerState::Drawing;
        if timer.start(now) {
            debug!("Level timer started at {now:.3}s");
        }
        debug!("Stroke started at node {node}");
    }

    /// Follow the pointer. Return the pair of nodes of the traversed edge when the path grows.
    pub fn extend(
        &mut self,
        graph: &mut GraphModel,
        position: Point,
        radius: f32,
    ) -> Option<(NodeId, NodeId)> {
        if !self.is_drawing() {
            return None;
        }
        let last: NodeId = self.path.last()?;
        let node: NodeId = graph.node_at(position, radius)?;

        if node == last || !graph.are_connected(last, node) {
            return None;
        }
        self.path.push(node);
        graph.mark_visited(last, node);
        debug!(
            "Path extended {last} -> {node} (visits = {})",
            graph.visit_count(last, node)
        );
        Some((last, node))
    }

    /// End the stroke and evaluate it. Return None when no stroke was in progress.
    pub fn release(&mut self, graph: &GraphModel) -> Option<Verdict> {
        if !self.is_drawing() {
            return None;
        }
        self.state = TracerState::Idle;
        let verdict: Verdict = validator::evaluate(graph);
        debug!("Stroke released after {} nodes: {verdict}", self.path.len());
        Some(verdict)
    }

    /// Clear the path and the visit counters, and stop drawing.
    pub fn reset(&mut self, graph: &mut GraphModel) {
        self.path.clear();
        graph.reset_visits();
        self.state = TracerState::Idle;
    }
}
