/*
hint.rs

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

//! Hints based on the degree of the nodes.
//!
//! A connected graph can be drawn in a single stroke when it has zero or two nodes with an odd
//! number of edges (odd degree). With zero such nodes the stroke can start anywhere and ends
//! where it started. With two, the stroke must start on one of them and ends on the other.
//!
//! The advisor only selects a message. It does not search for a solution.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::graph::{GraphModel, NodeId};

/// General advice shown with every hint.
pub const TIP: &str = "Trace through each line exactly once.";

/// Hint category.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum HintKind {
    /// All the nodes have an even degree: any node is a valid start.
    StartAnywhere,

    /// Exactly two nodes have an odd degree: start from one of them.
    StartFromOddNode,

    /// Any other configuration.
    KeepTrying,
}

impl HintKind {
    /// Message for the player.
    pub fn message(&self) -> &'static str {
        match self {
            HintKind::StartAnywhere => "You can start from any node!",
            HintKind::StartFromOddNode => "Start from a node with odd connections!",
            HintKind::KeepTrying => "This puzzle has a solution - keep trying!",
        }
    }
}

impl fmt::Display for HintKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Hint for the current level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Hint {
    /// Hint category.
    pub kind: HintKind,

    /// Number of nodes with an odd degree.
    pub odd_count: usize,

    /// Suggested starting node: the first node with an odd degree, or node 0 when all the
    /// degrees are even. None for an empty graph.
    pub start: Option<NodeId>,

    /// Message for the player.
    pub message: String,

    /// General advice.
    pub tip: String,
}

/// Number of nodes with an odd degree.
pub fn odd_degree_count(graph: &GraphModel) -> usize {
    graph.degrees().iter().filter(|d| *d % 2 == 1).count()
}

/// Return the nodes with an odd degree, in identifier order.
pub fn odd_degree_nodes(graph: &GraphModel) -> Vec<NodeId> {
    graph
        .degrees()
        .iter()
        .enumerate()
        .filter(|(_, d)| *d % 2 == 1)
        .map(|(id, _)| id)
        .collect()
}

/// Select the hint category for the given number of odd-degree nodes.
pub fn kind_for(odd_count: usize) -> HintKind {
    match odd_count {
        0 => HintKind::StartAnywhere,
        2 => HintKind::StartFromOddNode,
        _ => HintKind::KeepTrying,
    }
}

/// Build the hint for the graph.
pub fn advise(graph: &GraphModel) -> Hint {
    let odd: Vec<NodeId> = odd_degree_nodes(graph);
    let kind: HintKind = kind_for(odd.len());
    let start: Option<NodeId> = match odd.first() {
        Some(n) => Some(*n),
        None if graph.num_nodes() > 0 => Some(0),
        None => None,
    };

    Hint {
        kind,
        odd_count: odd.len(),
        start,
        message: kind.message().to_string(),
        tip: TIP.to_string(),
    }
}
