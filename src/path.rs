/*
path.rs

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

//! Stroke drawn by the player.

use serde::{Deserialize, Serialize};

use crate::graph::NodeId;

/// Ordered list of the nodes that the stroke went through.
///
/// The first node is the node where the pointer went down. Two consecutive nodes are always
/// linked by an edge of the level: the [`crate::tracer::PathTracer`] object only appends
/// adjacent nodes.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Path {
    path: Vec<NodeId>,
}

impl Path {
    /// Create an empty [`Path`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all the nodes from the path.
    pub fn clear(&mut self) {
        self.path.clear();
    }

    /// Add a node to the path.
    pub fn push(&mut self, node: NodeId) {
        self.path.push(node);
    }

    /// Get the number of nodes in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no node.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the stroke went through the node.
    pub fn contains(&self, node: NodeId) -> bool {
        self.path.contains(&node)
    }

    /// Return the path as a slice.
    pub fn get(&self) -> &[NodeId] {
        &self.path
    }

    /// Return the first node in the path.
    pub fn first(&self) -> Option<NodeId> {
        self.path.first().copied()
    }

    /// Return the last node in the path.
    pub fn last(&self) -> Option<NodeId> {
        self.path.last().copied()
    }

    /// Iterate over the traversed node pairs, in stroke order.
    pub fn steps(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_follow_stroke_order() {
        let mut p = Path::new();
        assert_eq!(p.first(), None);
        assert_eq!(p.steps().count(), 0);
        for n in [0, 1, 2, 0] {
            p.push(n);
        }
        assert_eq!(p.first(), Some(0));
        assert_eq!(p.last(), Some(0));
        assert!(p.contains(2));
        assert!(!p.contains(3));
        assert_eq!(p.steps().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 0)]);
        p.clear();
        assert!(p.is_empty());
    }
}
