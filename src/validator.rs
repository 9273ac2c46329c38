/*
validator.rs

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

//! Decide whether the stroke solves the puzzle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::graph::GraphModel;

/// Result of the evaluation of a stroke.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Some edges have not been traced, and none has been traced twice.
    Incomplete,

    /// Every edge has been traced exactly once.
    Solved,

    /// At least one edge has been traced more than once.
    Failed,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Incomplete => write!(f, "incomplete"),
            Verdict::Solved => write!(f, "solved"),
            Verdict::Failed => write!(f, "failed"),
        }
    }
}

/// Evaluate the visit counters of the graph.
///
/// A graph without edges is never solved.
pub fn evaluate(graph: &GraphModel) -> Verdict {
    let edges = graph.edges();

    if !edges.is_empty() && edges.iter().all(|e| e.visit_count == 1) {
        Verdict::Solved
    } else if edges.iter().any(|e| e.visit_count > 1) {
        Verdict::Failed
    } else {
        Verdict::Incomplete
    }
}
