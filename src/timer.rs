/*
timer.rs

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

//! Level timer.
//!
//! The timer starts with the first stroke of a level and keeps running across stroke restarts
//! and resets. It stops when the puzzle is solved. Times are readings of the session clock, in
//! seconds.

use serde::{Deserialize, Serialize};

/// Start and stop times of the level.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct LevelTimer {
    /// Session clock reading when the first stroke started.
    start: Option<f64>,

    /// Session clock reading when the puzzle was solved.
    end: Option<f64>,
}

impl LevelTimer {
    /// Create a stopped [`LevelTimer`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the timer has been started.
    pub fn is_running(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    /// Whether the timer has been started, even if it is now stopped.
    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }

    /// Start the timer, unless it already runs. Return whether the timer started.
    pub fn start(&mut self, now: f64) -> bool {
        if self.start.is_some() {
            return false;
        }
        self.start = Some(now);
        self.end = None;
        true
    }

    /// Stop the timer and return the elapsed time.
    pub fn stop(&mut self, now: f64) -> f64 {
        if self.start.is_some() && self.end.is_none() {
            self.end = Some(now);
        }
        self.elapsed(now)
    }

    /// Elapsed time in seconds: zero before the start, frozen after the stop.
    pub fn elapsed(&self, now: f64) -> f64 {
        match (self.start, self.end) {
            (Some(s), Some(e)) => e - s,
            (Some(s), None) => now - s,
            (None, _) => 0.0,
        }
    }
}
