/*
score.rs

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

//! Points earned for a solved puzzle.

use crate::config::{BASE_SCORE, MIN_SCORE, PENALTY_PER_SECOND};

/// Compute the score for a puzzle solved in `elapsed_seconds`.
///
/// The player starts with [`BASE_SCORE`] points and loses [`PENALTY_PER_SECOND`] points per
/// second, rounded down to whole points. The score never goes below [`MIN_SCORE`].
/// Negative and NaN durations count as zero seconds.
pub fn score(elapsed_seconds: f64) -> u32 {
    let seconds: f64 = if elapsed_seconds.is_nan() {
        0.0
    } else {
        elapsed_seconds.max(0.0)
    };
    let penalty: f64 = (seconds * PENALTY_PER_SECOND).floor();
    let remaining: f64 = f64::from(BASE_SCORE) - penalty;

    if remaining <= f64::from(MIN_SCORE) {
        MIN_SCORE
    } else {
        remaining as u32
    }
}
