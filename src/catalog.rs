/*
catalog.rs

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

//! Level definitions.
//!
//! The [`LevelCatalog`] object is the immutable list of puzzles, indexed by a 1-based level
//! number. The built-in catalog comes from the static table in [`levels`]. Level designers can
//! also provide their own catalog as a JSON document (see [`loader`]).
//!
//! Each level is a [`LevelDef`] object: the node positions, in identifier order, and the list of
//! edges as unordered node pairs.
//! A catalog must be simple and connected. The [`LevelCatalog::validate`] method verifies these
//! authoring rules. The engine itself does not check them again at runtime.

pub mod levels;
pub mod loader;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use thiserror::Error;

use crate::graph::{NodeId, Point};

/// Puzzle definition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelDef {
    /// Node positions. The position index is the node identifier.
    pub nodes: Vec<Point>,

    /// Edges as pairs of node identifiers. The order of the two ends does not matter.
    pub edges: Vec<(NodeId, NodeId)>,
}

/// Errors reported when loading or verifying a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file cannot be read or written.
    #[error("Cannot access the catalog file: {0}")]
    Io(#[from] io::Error),

    /// The catalog document is not valid JSON or does not have the expected structure.
    #[error("Cannot parse the catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog does not define any level.
    #[error("The catalog does not define any level")]
    Empty,

    /// The level does not have any edge.
    #[error("Level {level}: no edges")]
    NoEdges { level: usize },

    /// An edge references a node that the level does not define.
    #[error("Level {level}: edge ({}, {}) references an unknown node", .edge.0, .edge.1)]
    UnknownNode {
        level: usize,
        edge: (NodeId, NodeId),
    },

    /// An edge links a node to itself.
    #[error("Level {level}: node {node} is linked to itself")]
    SelfLoop { level: usize, node: NodeId },

    /// The same pair of nodes is listed twice.
    #[error("Level {level}: edge ({}, {}) is listed more than once", .edge.0, .edge.1)]
    DuplicateEdge {
        level: usize,
        edge: (NodeId, NodeId),
    },

    /// A node has no edge.
    #[error("Level {level}: node {node} does not have any edges")]
    IsolatedNode { level: usize, node: NodeId },

    /// Some edges cannot be reached from the others.
    #[error("Level {level}: the graph is not connected")]
    Disconnected { level: usize },
}

impl LevelDef {
    /// Verify the authoring rules of the level. `level` is the 1-based level number used in
    /// error messages.
    pub fn validate(&self, level: usize) -> Result<(), CatalogError> {
        if self.edges.is_empty() {
            return Err(CatalogError::NoEdges { level });
        }

        let num_nodes: usize = self.nodes.len();
        let mut seen: HashSet<(NodeId, NodeId)> = HashSet::with_capacity(self.edges.len());
        let mut adjacent: Vec<Vec<NodeId>> = vec![Vec::new(); num_nodes];

        for &(a, b) in &self.edges {
            if a >= num_nodes || b >= num_nodes {
                return Err(CatalogError::UnknownNode {
                    level,
                    edge: (a, b),
                });
            }
            if a == b {
                return Err(CatalogError::SelfLoop { level, node: a });
            }
            if !seen.insert((a.min(b), a.max(b))) {
                return Err(CatalogError::DuplicateEdge {
                    level,
                    edge: (a, b),
                });
            }
            adjacent[a].push(b);
            adjacent[b].push(a);
        }

        if let Some(node) = adjacent.iter().position(|a| a.is_empty()) {
            return Err(CatalogError::IsolatedNode { level, node });
        }

        // Every node has an edge, so reaching all the nodes means reaching all the edges
        let mut visited: Vec<bool> = vec![false; num_nodes];
        let mut stack: Vec<NodeId> = vec![0];
        visited[0] = true;
        while let Some(n) = stack.pop() {
            for &m in &adjacent[n] {
                if !visited[m] {
                    visited[m] = true;
                    stack.push(m);
                }
            }
        }
        if visited.iter().any(|v| !v) {
            return Err(CatalogError::Disconnected { level });
        }
        Ok(())
    }
}

/// List of the puzzles.
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    /// Level definitions. Level number `n` is at index `n - 1`.
    ///
    /// The list is never empty.
    levels: Vec<LevelDef>,
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LevelCatalog {
    /// Create the catalog with the built-in puzzles.
    pub fn builtin() -> Self {
        Self {
            levels: levels::builtin_levels(),
        }
    }

    /// Create a catalog from the provided level definitions.
    ///
    /// # Errors
    ///
    /// The method returns an error when the list is empty or when a level breaks an authoring
    /// rule (see [`LevelDef::validate`]).
    pub fn new(levels: Vec<LevelDef>) -> Result<Self, CatalogError> {
        let catalog: LevelCatalog = Self { levels };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Verify all the levels of the catalog.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.levels.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, level) in self.levels.iter().enumerate() {
            if let Err(e) = level.validate(i + 1) {
                warn!("{e}");
                return Err(e);
            }
        }
        debug!("Catalog verified: {} levels", self.levels.len());
        Ok(())
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the catalog has no level. Always false for a catalog that passed validation.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Return the level number that [`LevelCatalog::get`] serves for the requested level.
    ///
    /// Unknown levels (zero, negative, or past the end of the catalog) fall back to level 1.
    pub fn resolve(&self, level: i32) -> i32 {
        if level >= 1 && (level as usize) <= self.levels.len() {
            level
        } else {
            debug!("Level {level} does not exist: falling back to level 1");
            1
        }
    }

    /// Return the definition of the given level, or of level 1 if the level does not exist.
    pub fn get(&self, level: i32) -> &LevelDef {
        let index: usize = self.resolve(level) as usize - 1;
        &self.levels[index]
    }

    /// Return all the level definitions.
    pub fn levels(&self) -> &[LevelDef] {
        &self.levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(nodes: usize, edges: &[(NodeId, NodeId)]) -> LevelDef {
        LevelDef {
            nodes: (0..nodes).map(|i| Point::new(i as f32 * 100.0, 0.0)).collect(),
            edges: edges.to_vec(),
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = LevelCatalog::builtin();
        assert_eq!(catalog.len(), 14);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn unknown_levels_fall_back_to_first() {
        let catalog = LevelCatalog::builtin();
        assert_eq!(catalog.resolve(0), 1);
        assert_eq!(catalog.resolve(-3), 1);
        assert_eq!(catalog.resolve(15), 1);
        assert_eq!(catalog.resolve(14), 14);
        assert_eq!(catalog.get(99), catalog.get(1));
        assert_eq!(catalog.get(1).edges, vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn validation_rejects_bad_levels() {
        assert!(matches!(
            level(2, &[]).validate(1),
            Err(CatalogError::NoEdges { level: 1 })
        ));
        assert!(matches!(
            level(2, &[(0, 2)]).validate(4),
            Err(CatalogError::UnknownNode { level: 4, edge: (0, 2) })
        ));
        assert!(matches!(
            level(2, &[(1, 1)]).validate(1),
            Err(CatalogError::SelfLoop { node: 1, .. })
        ));
        assert!(matches!(
            level(3, &[(0, 1), (1, 2), (1, 0)]).validate(1),
            Err(CatalogError::DuplicateEdge { edge: (1, 0), .. })
        ));
        assert!(matches!(
            level(3, &[(0, 1)]).validate(1),
            Err(CatalogError::IsolatedNode { node: 2, .. })
        ));
        assert!(matches!(
            level(4, &[(0, 1), (2, 3)]).validate(2),
            Err(CatalogError::Disconnected { level: 2 })
        ));
        assert!(level(3, &[(0, 1), (1, 2)]).validate(1).is_ok());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(LevelCatalog::new(Vec::new()), Err(CatalogError::Empty)));
    }
}
