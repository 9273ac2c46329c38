/*
graph.rs

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

//! Graph of the level being played.
//!
//! The [`GraphModel`] object stores the nodes and the edges of the active level, together with
//! the per-edge visit counters that the player's stroke increments, and the per-node highlight
//! flag that the presentation layer uses for hovering feedback.
//!
//! Graphs are tiny (a handful of nodes, at most a few dozen edges), so every lookup is a linear
//! scan over the edge list.

use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

use crate::catalog::LevelDef;

/// Node identifier. Identifiers are assigned by catalog order and go from `0` to `n - 1`.
pub type NodeId = usize;

/// Position in the coordinate space of the level layout.
///
/// The engine only uses positions for pointer hit testing. Positions are serialized as
/// `[x, y]` arrays.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
#[serde(from = "(f32, f32)", into = "(f32, f32)")]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a [`Point`] object.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f32 {
        let dx: f32 = other.x - self.x;
        let dy: f32 = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// A circle that the player connects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Node {
    /// Node identifier.
    pub id: NodeId,

    /// Node center.
    pub position: Point,

    /// Whether the pointer hovers the node while no stroke is in progress.
    pub highlighted: bool,
}

/// How an edge must be rendered, derived from its visit counter.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum EdgeMark {
    /// Not traced yet.
    Untouched = 0,

    /// Traced exactly once.
    Traced = 1,

    /// Traced more than once, which is a mistake.
    Retraced = 2,
}

/// An undirected line between two nodes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Edge {
    /// First end.
    pub a: NodeId,

    /// Second end.
    pub b: NodeId,

    /// Number of times the edge has been traced since the last reset.
    pub visit_count: u32,
}

impl Edge {
    /// Create an [`Edge`] object that has not been traced.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        Self {
            a,
            b,
            visit_count: 0,
        }
    }

    /// Whether the edge links the two nodes, in any order.
    pub fn joins(&self, n1: NodeId, n2: NodeId) -> bool {
        (self.a == n1 && self.b == n2) || (self.a == n2 && self.b == n1)
    }

    /// Whether the node is one of the two ends.
    pub fn touches(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }

    /// Rendering state of the edge.
    pub fn mark(&self) -> EdgeMark {
        let capped: u8 = self.visit_count.min(EdgeMark::Retraced as u32) as u8;
        EdgeMark::from_repr(capped).unwrap_or(EdgeMark::Retraced)
    }
}

/// Nodes, edges, and visit counters of the active level.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct GraphModel {
    /// Nodes, indexed by their identifier.
    nodes: Vec<Node>,

    /// Edges in catalog order.
    edges: Vec<Edge>,
}

impl GraphModel {
    /// Create an empty [`GraphModel`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`GraphModel`] object for the given level.
    pub fn from_level(level: &LevelDef) -> Self {
        let mut graph: GraphModel = Self::new();
        graph.load(level);
        graph
    }

    /// Replace the nodes and the edges with the ones of the given level.
    ///
    /// All the visit counters start at zero and no node is highlighted.
    pub fn load(&mut self, level: &LevelDef) {
        self.nodes = level
            .nodes
            .iter()
            .enumerate()
            .map(|(id, position)| Node {
                id,
                position: *position,
                highlighted: false,
            })
            .collect();
        self.edges = level.edges.iter().map(|(a, b)| Edge::new(*a, *b)).collect();
        debug!(
            "Graph loaded: {} nodes, {} edges",
            self.nodes.len(),
            self.edges.len()
        );
    }

    /// Return the nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return the edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Return the node with the given identifier.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Whether an edge links the two nodes.
    pub fn are_connected(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.iter().any(|e| e.joins(a, b))
    }

    /// Increment the visit counter of the edge between the two nodes.
    ///
    /// Nothing happens if the nodes are not adjacent.
    pub fn mark_visited(&mut self, a: NodeId, b: NodeId) {
        match self.edges.iter_mut().find(|e| e.joins(a, b)) {
            Some(edge) => edge.visit_count += 1,
            None => debug!("No edge between {a} and {b}: visit ignored"),
        }
    }

    /// Visit counter of the edge between the two nodes, or zero if there is no such edge.
    pub fn visit_count(&self, a: NodeId, b: NodeId) -> u32 {
        self.edges
            .iter()
            .find(|e| e.joins(a, b))
            .map_or(0, |e| e.visit_count)
    }

    /// Set all the visit counters back to zero.
    pub fn reset_visits(&mut self) {
        for edge in &mut self.edges {
            edge.visit_count = 0;
        }
    }

    /// Number of edges incident to the node.
    pub fn degree(&self, node: NodeId) -> usize {
        self.edges.iter().filter(|e| e.touches(node)).count()
    }

    /// Degree of every node, indexed by node identifier.
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = vec![0; self.nodes.len()];
        for edge in &self.edges {
            if let Some(d) = degrees.get_mut(edge.a) {
                *d += 1;
            }
            if let Some(d) = degrees.get_mut(edge.b) {
                *d += 1;
            }
        }
        degrees
    }

    /// Return the first node, in identifier order, whose center is within `radius` of the
    /// given position.
    pub fn node_at(&self, position: Point, radius: f32) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|n| n.position.distance(position) <= radius)
            .map(|n| n.id)
    }

    /// Turn off the highlight of all the nodes.
    pub fn clear_highlights(&mut self) {
        for node in &mut self.nodes {
            node.highlighted = false;
        }
    }

    /// Highlight the given node.
    pub fn set_highlight(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.highlighted = true;
        }
    }

    /// Return the highlighted node, if any.
    pub fn highlighted(&self) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.highlighted).map(|n| n.id)
    }

    /// Sum of all the visit counters.
    pub fn total_visits(&self) -> u32 {
        self.edges.iter().map(|e| e.visit_count).sum()
    }
}
