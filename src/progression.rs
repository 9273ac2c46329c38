/*
progression.rs

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

//! Level progression and scores.
//!
//! The [`ProgressionTracker`] object tracks the level being played, the highest level that the
//! player unlocked, and the cumulative score. Solving the highest unlocked level unlocks the
//! next one. Players can move back to any earlier level and forward up to the highest unlocked
//! level.
//!
//! Every solve is also recorded in an in-memory history, which is lost when the process exits.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// A solved puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SolveRecord {
    /// Level number.
    pub level: i32,

    /// Points earned.
    pub score: u32,

    /// How long did it take for solving the puzzle.
    pub time: Duration,

    /// Completion timestamp.
    pub when: SystemTime,
}

/// Level and score bookkeeping.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProgressionTracker {
    /// Level being played (1-based).
    current_level: i32,

    /// Highest level the player can select. Never decreases.
    max_unlocked_level: i32,

    /// Sum of the scores of all the solved puzzles. Never decreases.
    total_score: u64,

    /// Number of levels in the catalog.
    level_count: i32,

    /// Solved puzzles, oldest first.
    history: Vec<SolveRecord>,
}

impl ProgressionTracker {
    /// Create a [`ProgressionTracker`] object for a catalog of `level_count` levels.
    ///
    /// The player starts at level 1, which is the only unlocked level.
    pub fn new(level_count: usize) -> Self {
        Self {
            current_level: 1,
            max_unlocked_level: 1,
            total_score: 0,
            level_count: i32::try_from(level_count).unwrap_or(i32::MAX).max(1),
            history: Vec::new(),
        }
    }

    /// Create a [`ProgressionTracker`] object where all the levels up to `level` are unlocked
    /// and `level` is selected. The caller provides a level that exists in the catalog.
    pub fn starting_at(level_count: usize, level: i32) -> Self {
        let mut tracker: ProgressionTracker = Self::new(level_count);
        let level: i32 = level.clamp(1, tracker.level_count);
        tracker.current_level = level;
        tracker.max_unlocked_level = level;
        tracker
    }

    /// Level being played.
    pub fn current_level(&self) -> i32 {
        self.current_level
    }

    /// Highest unlocked level.
    pub fn max_unlocked_level(&self) -> i32 {
        self.max_unlocked_level
    }

    /// Cumulative score.
    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    /// Number of levels.
    pub fn level_count(&self) -> i32 {
        self.level_count
    }

    /// Whether the player cannot move to the next level yet.
    pub fn is_next_locked(&self) -> bool {
        self.current_level >= self.max_unlocked_level
    }

    /// Change the level being played. The caller provides a level that exists in the catalog.
    pub fn set_current_level(&mut self, level: i32) {
        self.current_level = level;
    }

    /// Move to the next level if it is unlocked. Return whether the level changed.
    pub fn advance_level(&mut self) -> bool {
        if self.is_next_locked() {
            debug!(
                "Level {} is the highest unlocked level: cannot advance",
                self.current_level
            );
            return false;
        }
        self.current_level += 1;
        true
    }

    /// Move to the previous level. Return whether the level changed.
    pub fn retreat_level(&mut self) -> bool {
        if self.current_level <= 1 {
            return false;
        }
        self.current_level -= 1;
        true
    }

    /// Record the solve of the current level.
    ///
    /// The score is added to the total. When the player solved the highest unlocked level and
    /// more levels remain, the next level is unlocked and its number returned.
    pub fn on_solved(&mut self, level_score: u32, time: Duration) -> Option<i32> {
        self.total_score += u64::from(level_score);
        self.history.push(SolveRecord {
            level: self.current_level,
            score: level_score,
            time,
            when: SystemTime::now(),
        });
        info!(
            "Level {} solved in {:.2}s: {} points (total {})",
            self.current_level,
            time.as_secs_f64(),
            level_score,
            self.total_score
        );

        if self.current_level == self.max_unlocked_level
            && self.current_level < self.level_count
        {
            self.max_unlocked_level += 1;
            info!("Level {} unlocked", self.max_unlocked_level);
            return Some(self.max_unlocked_level);
        }
        None
    }

    /// Solved puzzles, oldest first.
    pub fn history(&self) -> &[SolveRecord] {
        &self.history
    }

    /// Best score for the given level, or None if the level has never been solved.
    pub fn best_score(&self, level: i32) -> Option<u32> {
        self.history
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.score)
            .max()
    }
}
