/*
config.rs

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

//! Build-time constants and engine settings.

use serde::{Deserialize, Serialize};

/// Package name, used in log messages and by the command-line parser.
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Package version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Long version string printed by `strokex --version`.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>"
);

/// Radius of the node hit circles, in the coordinate space of the level layouts.
pub const NODE_RADIUS: f32 = 39.2;

/// Points awarded for a puzzle solved instantly.
pub const BASE_SCORE: u32 = 100;

/// Lowest score a solved puzzle can earn.
pub const MIN_SCORE: u32 = 20;

/// Points lost per elapsed second.
pub const PENALTY_PER_SECOND: f64 = 2.0;

/// Tunable engine parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Distance from a node center under which the pointer is considered over the node.
    pub node_radius: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            node_radius: NODE_RADIUS,
        }
    }
}
