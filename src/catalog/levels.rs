/*
levels.rs

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

//! Built-in puzzles.
//!
//! For developers: to add a level, append an entry to [`LEVELS`]. Node identifiers are the
//! positions in the `nodes` array. Run `strokex --check` to verify the new level.

use crate::graph::{NodeId, Point};

use super::LevelDef;

/// Static description of a level.
struct LevelTable {
    nodes: &'static [(f32, f32)],
    edges: &'static [(NodeId, NodeId)],
}

/// The reference levels, in play order. Level 1 is the first entry.
const LEVELS: [LevelTable; 14] = [
    // 1: triangle
    LevelTable {
        nodes: &[(940.0, 441.0), (705.0, 707.0), (1175.0, 707.0)],
        edges: &[(0, 1), (1, 2), (2, 0)],
    },
    // 2: grid with a diagonal
    LevelTable {
        nodes: &[
            (705.0, 353.0),
            (940.0, 353.0),
            (1175.0, 353.0),
            (705.0, 530.0),
            (940.0, 530.0),
            (1175.0, 530.0),
            (705.0, 707.0),
            (940.0, 707.0),
            (1175.0, 707.0),
        ],
        edges: &[
            (0, 1),
            (1, 2),
            (2, 5),
            (5, 8),
            (8, 7),
            (7, 6),
            (6, 3),
            (3, 0),
            (1, 4),
            (4, 6),
        ],
    },
    // 3: pentagram in a pentagon
    LevelTable {
        nodes: &[
            (940.0, 318.0),
            (1175.0, 495.0),
            (1081.0, 742.0),
            (799.0, 742.0),
            (705.0, 495.0),
        ],
        edges: &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 0),
            (0, 2),
            (1, 3),
            (2, 4),
            (3, 0),
            (4, 1),
        ],
    },
    // 4: two squares
    LevelTable {
        nodes: &[
            (705.0, 441.0),
            (940.0, 441.0),
            (1175.0, 441.0),
            (705.0, 707.0),
            (940.0, 707.0),
            (1175.0, 707.0),
        ],
        edges: &[(0, 1), (1, 2), (3, 4), (4, 5), (0, 3), (1, 4), (2, 5)],
    },
    // 5: triangle strip
    LevelTable {
        nodes: &[
            (588.0, 353.0),
            (822.0, 353.0),
            (1057.0, 353.0),
            (1292.0, 353.0),
            (705.0, 618.0),
            (940.0, 618.0),
            (1175.0, 618.0),
        ],
        edges: &[
            (0, 1),
            (0, 4),
            (1, 2),
            (1, 4),
            (1, 5),
            (2, 3),
            (2, 5),
            (2, 6),
            (3, 6),
            (4, 5),
            (5, 6),
        ],
    },
    // 6: diamond
    LevelTable {
        nodes: &[
            (940.0, 353.0),
            (822.0, 530.0),
            (1057.0, 530.0),
            (940.0, 795.0),
        ],
        edges: &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)],
    },
    // 7: house
    LevelTable {
        nodes: &[
            (940.0, 353.0),
            (705.0, 530.0),
            (1175.0, 530.0),
            (1175.0, 795.0),
            (705.0, 795.0),
        ],
        edges: &[(0, 1), (0, 2), (1, 2), (1, 4), (2, 3), (3, 4)],
    },
    // 8: envelope
    LevelTable {
        nodes: &[
            (658.0, 318.0),
            (1128.0, 318.0),
            (1363.0, 565.0),
            (1128.0, 795.0),
            (658.0, 795.0),
        ],
        edges: &[(0, 1), (0, 4), (1, 2), (1, 3), (1, 4), (2, 3), (3, 4)],
    },
    // 9: hexagon with a chord
    LevelTable {
        nodes: &[
            (705.0, 353.0),
            (1175.0, 353.0),
            (1410.0, 618.0),
            (1175.0, 795.0),
            (705.0, 795.0),
            (470.0, 618.0),
        ],
        edges: &[(0, 1), (0, 5), (1, 2), (1, 4), (2, 3), (3, 4), (4, 5)],
    },
    // 10: kite with a tail
    LevelTable {
        nodes: &[
            (940.0, 353.0),
            (822.0, 530.0),
            (1057.0, 530.0),
            (940.0, 707.0),
            (1292.0, 530.0),
        ],
        edges: &[(0, 1), (0, 2), (1, 3), (2, 3), (2, 4)],
    },
    // 11: two hexagons sharing a side
    LevelTable {
        nodes: &[
            (705.0, 353.0),
            (822.0, 283.0),
            (940.0, 353.0),
            (940.0, 495.0),
            (822.0, 565.0),
            (705.0, 495.0),
            (1057.0, 283.0),
            (1175.0, 353.0),
            (1175.0, 495.0),
            (1057.0, 565.0),
        ],
        edges: &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 0),
            (2, 6),
            (6, 7),
            (7, 8),
            (8, 9),
            (9, 3),
        ],
    },
    // 12: flag
    LevelTable {
        nodes: &[
            (822.0, 441.0),
            (705.0, 618.0),
            (940.0, 618.0),
            (1175.0, 618.0),
        ],
        edges: &[(0, 1), (0, 2), (1, 2), (2, 3)],
    },
    // 13: bow tie
    LevelTable {
        nodes: &[
            (822.0, 441.0),
            (1057.0, 441.0),
            (940.0, 530.0),
            (822.0, 618.0),
            (1057.0, 618.0),
        ],
        edges: &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)],
    },
    // 14: open frame
    LevelTable {
        nodes: &[
            (658.0, 389.0),
            (940.0, 389.0),
            (1222.0, 389.0),
            (658.0, 707.0),
            (1222.0, 707.0),
        ],
        edges: &[(0, 1), (1, 2), (1, 4), (0, 3), (3, 4)],
    },
];

/// Build the list of the built-in level definitions.
pub fn builtin_levels() -> Vec<LevelDef> {
    LEVELS
        .iter()
        .map(|l| LevelDef {
            nodes: l.nodes.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            edges: l.edges.to_vec(),
        })
        .collect()
}
