/*
solver.rs

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

//! Find a single-stroke solution.
//!
//! This module is a developer tool: the command-line interface uses it to print a solution, and
//! the tests use it to verify that every level can be solved. The game never calls it.
//!
//! The solver uses Hierholzer's algorithm. The walk starts from the first odd-degree node, or
//! from the first end of the first edge when all the degrees are even, and splices sub-circuits
//! in until all the edges are used.

use log::debug;

use crate::graph::{GraphModel, NodeId};
use crate::hint;

/// Return a sequence of nodes that goes through every edge exactly once, or None if the graph
/// has no such sequence (more than two odd-degree nodes, or edges that are not connected).
pub fn find_trail(graph: &GraphModel) -> Option<Vec<NodeId>> {
    let edges = graph.edges();
    if edges.is_empty() {
        return None;
    }

    let odd: Vec<NodeId> = hint::odd_degree_nodes(graph);
    let start: NodeId = match odd.len() {
        0 => edges[0].a,
        2 => odd[0],
        n => {
            debug!("{n} odd-degree nodes: no single-stroke solution");
            return None;
        }
    };

    let num_nodes: usize = graph.num_nodes();
    let mut adjacent: Vec<Vec<(NodeId, usize)>> = vec![Vec::new(); num_nodes];
    for (i, e) in edges.iter().enumerate() {
        if e.a >= num_nodes || e.b >= num_nodes {
            return None;
        }
        adjacent[e.a].push((e.b, i));
        adjacent[e.b].push((e.a, i));
    }

    let mut used: Vec<bool> = vec![false; edges.len()];
    // Next adjacency entry to try, for each node
    let mut next: Vec<usize> = vec![0; num_nodes];
    let mut stack: Vec<NodeId> = vec![start];
    let mut trail: Vec<NodeId> = Vec::with_capacity(edges.len() + 1);

    while let Some(&v) = stack.last() {
        while next[v] < adjacent[v].len() && used[adjacent[v][next[v]].1] {
            next[v] += 1;
        }
        match adjacent[v].get(next[v]) {
            Some(&(u, e)) => {
                used[e] = true;
                stack.push(u);
            }
            None => {
                trail.push(v);
                stack.pop();
            }
        }
    }

    if trail.len() != edges.len() + 1 {
        debug!("Edges are not connected: no single-stroke solution");
        return None;
    }
    trail.reverse();
    Some(trail)
}
