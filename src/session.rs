/*
session.rs

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

//! Manage the game in progress.
//!
//! The [`GameSession`] object owns everything about the game: the level catalog, the graph of
//! the active level, the stroke state machine, the level timer, and the progression.
//! The frame loop drives it through a single entry point, [`GameSession::update`], which
//! receives the pointer events of the frame and the frame duration. UI buttons map to direct
//! calls ([`GameSession::reset`], [`GameSession::show_hint`], [`GameSession::next_level`], ...).
//!
//! Every call returns the [`Signal`] events that happened, in order. Cosmetic systems (particles,
//! screen shake, sounds, popup fades) react to these signals and never touch the session.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::catalog::LevelCatalog;
use crate::config::Settings;
use crate::graph::{GraphModel, NodeId, Point};
use crate::hint::{self, Hint};
use crate::path::Path;
use crate::progression::ProgressionTracker;
use crate::score;
use crate::timer::LevelTimer;
use crate::tracer::PathTracer;
use crate::validator::Verdict;

/// Pointer input, in the coordinate space of the level layouts.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    /// The button went down.
    Down(Point),

    /// The pointer moved, with or without the button held.
    Move(Point),

    /// The button went up.
    Up(Point),
}

impl PointerEvent {
    /// Pointer position of the event.
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down(p) | PointerEvent::Move(p) | PointerEvent::Up(p) => *p,
        }
    }
}

/// Screens of the game.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Title screen, before the player starts.
    #[default]
    Title,

    /// A level is being played.
    Playing,
}

/// Engine events for the presentation layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Signal {
    /// A level has been loaded.
    LevelLoaded { level: i32 },

    /// The player pressed on a node and a new stroke started.
    StrokeStarted { node: NodeId },

    /// The stroke went through a new edge.
    PathExtended {
        from: NodeId,
        to: NodeId,
        visits: u32,
    },

    /// The path and the visit counters have been cleared.
    PathReset,

    /// The player released the pointer.
    StrokeReleased { verdict: Verdict },

    /// The puzzle is solved.
    Solved {
        level: i32,
        score: u32,
        elapsed: f64,
    },

    /// An edge has been traced more than once.
    Failed { level: i32 },

    /// A new level is available.
    LevelUnlocked { level: i32 },

    /// The hint popup opened.
    HintShown,

    /// The hint popup closed.
    HintHidden,
}

/// Game in progress.
#[derive(Debug)]
pub struct GameSession {
    /// Available levels.
    catalog: LevelCatalog,

    /// Engine parameters.
    settings: Settings,

    /// Title screen or playing.
    screen: Screen,

    /// Graph of the active level.
    graph: GraphModel,

    /// Stroke state machine.
    tracer: PathTracer,

    /// Level timer.
    timer: LevelTimer,

    /// Levels and scores.
    progression: ProgressionTracker,

    /// Session clock: sum of the frame durations, in seconds.
    clock: f64,

    /// Last known pointer position.
    pointer: Option<Point>,

    /// Whether the active level has been solved. No stroke can start until another level is
    /// loaded.
    level_complete: bool,

    /// Score earned for the active level.
    level_score: u32,

    /// Result of the last released stroke.
    last_verdict: Option<Verdict>,

    /// Whether the hint popup is open. While open, a press closes it and does nothing else.
    hint_visible: bool,
}

impl GameSession {
    /// Create a [`GameSession`] object on the title screen, at level 1.
    pub fn new(catalog: LevelCatalog, settings: Settings) -> Self {
        let progression = ProgressionTracker::new(catalog.len());
        Self::with_progression(catalog, settings, progression)
    }

    /// Create a [`GameSession`] object on the title screen, with all the levels up to `level`
    /// unlocked and `level` selected. Unknown levels fall back to level 1.
    pub fn starting_at(catalog: LevelCatalog, settings: Settings, level: i32) -> Self {
        let level: i32 = catalog.resolve(level);
        let progression = ProgressionTracker::starting_at(catalog.len(), level);
        Self::with_progression(catalog, settings, progression)
    }

    fn with_progression(
        catalog: LevelCatalog,
        settings: Settings,
        progression: ProgressionTracker,
    ) -> Self {
        Self {
            catalog,
            settings,
            screen: Screen::Title,
            graph: GraphModel::new(),
            tracer: PathTracer::new(),
            timer: LevelTimer::new(),
            progression,
            clock: 0.0,
            pointer: None,
            level_complete: false,
            level_score: 0,
            last_verdict: None,
            hint_visible: false,
        }
    }

    /// Leave the title screen and load the current level.
    pub fn begin(&mut self) -> Vec<Signal> {
        let mut signals: Vec<Signal> = Vec::new();
        if self.screen == Screen::Title {
            info!("Game started");
            self.load_level(self.progression.current_level(), &mut signals);
        }
        signals
    }

    /// Process one frame: advance the session clock by `delta_time` seconds, then apply the
    /// pointer events in arrival order.
    pub fn update(&mut self, events: &[PointerEvent], delta_time: f64) -> Vec<Signal> {
        let mut signals: Vec<Signal> = Vec::new();

        if delta_time.is_finite() && delta_time > 0.0 {
            self.clock += delta_time;
        }

        for event in events {
            self.pointer = Some(event.position());
            if self.screen != Screen::Playing {
                continue;
            }
            match event {
                PointerEvent::Down(p) => self.pointer_down(*p, &mut signals),
                PointerEvent::Move(p) => self.pointer_move(*p, &mut signals),
                PointerEvent::Up(_) => self.pointer_up(&mut signals),
            }
        }

        self.refresh_highlight();
        signals
    }

    fn pointer_down(&mut self, position: Point, signals: &mut Vec<Signal>) {
        if self.hint_visible {
            self.hint_visible = false;
            signals.push(Signal::HintHidden);
            return;
        }
        if self.level_complete {
            return;
        }
        if let Some(node) = self.graph.node_at(position, self.settings.node_radius) {
            self.tracer
                .start(&mut self.graph, node, &mut self.timer, self.clock);
            self.last_verdict = None;
            signals.push(Signal::StrokeStarted { node });
        }
    }

    fn pointer_move(&mut self, position: Point, signals: &mut Vec<Signal>) {
        if self.level_complete || self.hint_visible {
            return;
        }
        if let Some((from, to)) =
            self.tracer
                .extend(&mut self.graph, position, self.settings.node_radius)
        {
            signals.push(Signal::PathExtended {
                from,
                to,
                visits: self.graph.visit_count(from, to),
            });
        }
    }

    fn pointer_up(&mut self, signals: &mut Vec<Signal>) {
        let verdict: Verdict = match self.tracer.release(&self.graph) {
            Some(v) => v,
            None => return,
        };
        self.last_verdict = Some(verdict);
        signals.push(Signal::StrokeReleased { verdict });

        let level: i32 = self.progression.current_level();
        match verdict {
            Verdict::Solved => {
                let elapsed: f64 = self.timer.stop(self.clock);
                let points: u32 = score::score(elapsed);
                self.level_score = points;
                self.level_complete = true;
                signals.push(Signal::Solved {
                    level,
                    score: points,
                    elapsed,
                });
                let time: Duration = Duration::try_from_secs_f64(elapsed).unwrap_or_default();
                if let Some(unlocked) = self.progression.on_solved(points, time) {
                    signals.push(Signal::LevelUnlocked { level: unlocked });
                }
            }
            Verdict::Failed => {
                info!("Level {level}: an edge has been traced more than once");
                signals.push(Signal::Failed { level });
            }
            Verdict::Incomplete => (),
        }
    }

    /// Highlight the node under the pointer when no stroke is in progress.
    fn refresh_highlight(&mut self) {
        self.graph.clear_highlights();
        if self.screen != Screen::Playing
            || self.level_complete
            || self.hint_visible
            || self.tracer.is_drawing()
        {
            return;
        }
        if let Some(p) = self.pointer
            && let Some(node) = self.graph.node_at(p, self.settings.node_radius)
        {
            self.graph.set_highlight(node);
        }
    }

    /// Clear the path and the visit counters. The level timer keeps running.
    ///
    /// Ignored on the title screen and once the level is solved.
    pub fn reset(&mut self) -> Vec<Signal> {
        let mut signals: Vec<Signal> = Vec::new();
        if self.screen != Screen::Playing || self.level_complete {
            return signals;
        }
        self.tracer.reset(&mut self.graph);
        self.last_verdict = None;
        debug!("Path reset");
        signals.push(Signal::PathReset);
        signals
    }

    /// Open the hint popup. Ignored while a stroke is in progress.
    pub fn show_hint(&mut self) -> Vec<Signal> {
        let mut signals: Vec<Signal> = Vec::new();
        if self.screen == Screen::Playing && !self.hint_visible && !self.tracer.is_drawing() {
            self.hint_visible = true;
            let hint: Hint = self.hint();
            debug!("Hint: {} (odd nodes = {})", hint.message, hint.odd_count);
            signals.push(Signal::HintShown);
        }
        signals
    }

    /// Close the hint popup.
    pub fn hide_hint(&mut self) -> Vec<Signal> {
        let mut signals: Vec<Signal> = Vec::new();
        if self.hint_visible {
            self.hint_visible = false;
            signals.push(Signal::HintHidden);
        }
        signals
    }

    /// Hint for the active level.
    pub fn hint(&self) -> Hint {
        hint::advise(&self.graph)
    }

    /// Load the next level, if it is unlocked.
    pub fn next_level(&mut self) -> Vec<Signal> {
        let mut signals: Vec<Signal> = Vec::new();
        if self.screen == Screen::Playing && self.progression.advance_level() {
            self.load_level(self.progression.current_level(), &mut signals);
        }
        signals
    }

    /// Load the previous level, if any.
    pub fn previous_level(&mut self) -> Vec<Signal> {
        let mut signals: Vec<Signal> = Vec::new();
        if self.screen == Screen::Playing && self.progression.retreat_level() {
            self.load_level(self.progression.current_level(), &mut signals);
        }
        signals
    }

    /// Replace the graph, the path, and the timer with fresh ones for the given level.
    ///
    /// Unknown levels load level 1, which then becomes the current level.
    fn load_level(&mut self, level: i32, signals: &mut Vec<Signal>) {
        let level: i32 = self.catalog.resolve(level);
        self.progression.set_current_level(level);
        self.graph = GraphModel::from_level(self.catalog.get(level));
        self.tracer = PathTracer::new();
        self.timer = LevelTimer::new();
        self.level_complete = false;
        self.level_score = 0;
        self.last_verdict = None;
        self.hint_visible = false;
        self.screen = Screen::Playing;
        self.refresh_highlight();
        info!("Level {level} loaded");
        signals.push(Signal::LevelLoaded { level });
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Graph of the active level.
    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    /// Current path.
    pub fn path(&self) -> &Path {
        self.tracer.path()
    }

    /// Levels and scores.
    pub fn progression(&self) -> &ProgressionTracker {
        &self.progression
    }

    /// Available levels.
    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    /// Engine parameters.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.tracer.is_drawing()
    }

    /// Whether the active level has been solved.
    pub fn is_level_complete(&self) -> bool {
        self.level_complete
    }

    /// Whether the hint popup is open.
    pub fn is_hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// Result of the last released stroke, cleared when a new stroke starts.
    pub fn last_verdict(&self) -> Option<Verdict> {
        self.last_verdict
    }

    /// Score earned for the active level, zero until it is solved.
    pub fn level_score(&self) -> u32 {
        self.level_score
    }

    /// Session clock, in seconds.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Time spent on the active level since its first stroke, frozen once solved.
    pub fn elapsed(&self) -> f64 {
        self.timer.elapsed(self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(session: &GameSession, id: NodeId) -> Point {
        session.graph().node(id).unwrap().position
    }

    fn playing() -> GameSession {
        let mut s = GameSession::new(LevelCatalog::builtin(), Settings::default());
        s.begin();
        s
    }

    /// Press on the first node, move through the others, and release.
    fn stroke(s: &mut GameSession, nodes: &[NodeId], dt: f64) -> Vec<Signal> {
        let mut signals = s.update(&[PointerEvent::Down(pos(s, nodes[0]))], dt);
        for n in &nodes[1..] {
            let p = pos(s, *n);
            signals.extend(s.update(&[PointerEvent::Move(p)], dt));
        }
        let last = pos(s, nodes[nodes.len() - 1]);
        signals.extend(s.update(&[PointerEvent::Up(last)], dt));
        signals
    }

    #[test]
    fn title_screen_ignores_pointer() {
        let mut s = GameSession::new(LevelCatalog::builtin(), Settings::default());
        assert_eq!(s.screen(), Screen::Title);
        let signals = s.update(&[PointerEvent::Down(Point::new(940.0, 441.0))], 0.1);
        assert!(signals.is_empty());
        assert!(!s.is_drawing());
        assert_eq!(s.reset(), Vec::new());
        assert_eq!(s.begin(), vec![Signal::LevelLoaded { level: 1 }]);
        assert_eq!(s.begin(), Vec::new());
        assert_eq!(s.screen(), Screen::Playing);
    }

    #[test]
    fn triangle_circuit_solves_level_one() {
        let mut s = playing();
        let signals = stroke(&mut s, &[0, 1, 2, 0], 1.0);
        assert!(signals.contains(&Signal::StrokeStarted { node: 0 }));
        assert!(signals.contains(&Signal::StrokeReleased {
            verdict: Verdict::Solved
        }));
        assert!(signals.contains(&Signal::LevelUnlocked { level: 2 }));
        assert!(s.is_level_complete());
        assert_eq!(s.last_verdict(), Some(Verdict::Solved));
        // Timer started on the press frame: four more frames of one second
        assert_eq!(s.elapsed(), 4.0);
        assert_eq!(s.level_score(), 92);
        assert_eq!(s.progression().total_score(), 92);
        assert_eq!(s.progression().max_unlocked_level(), 2);
    }

    #[test]
    fn retrace_fails_and_keeps_state() {
        let mut s = playing();
        let signals = stroke(&mut s, &[0, 1, 2, 0, 1], 0.1);
        assert!(signals.contains(&Signal::Failed { level: 1 }));
        assert!(!s.is_level_complete());
        assert_eq!(s.graph().visit_count(0, 1), 2);
        assert_eq!(s.path().get(), &[0, 1, 2, 0, 1]);
        assert_eq!(s.progression().total_score(), 0);
        assert_eq!(s.progression().max_unlocked_level(), 1);
    }

    #[test]
    fn new_press_starts_over() {
        let mut s = playing();
        stroke(&mut s, &[0, 1], 0.1);
        assert_eq!(s.last_verdict(), Some(Verdict::Incomplete));
        assert_eq!(s.graph().total_visits(), 1);

        let p = pos(&s, 2);
        s.update(&[PointerEvent::Down(p)], 0.1);
        assert!(s.is_drawing());
        assert_eq!(s.path().get(), &[2]);
        assert_eq!(s.graph().total_visits(), 0);
        assert_eq!(s.last_verdict(), None);
    }

    #[test]
    fn events_in_one_frame_apply_in_order() {
        let mut s = playing();
        let events: Vec<PointerEvent> = [0, 1, 2, 0]
            .iter()
            .enumerate()
            .map(|(i, n)| {
                let p = pos(&s, *n);
                if i == 0 {
                    PointerEvent::Down(p)
                } else {
                    PointerEvent::Move(p)
                }
            })
            .chain([PointerEvent::Up(Point::new(0.0, 0.0))])
            .collect();
        s.update(&events, 0.5);
        assert!(s.is_level_complete());
        assert_eq!(s.elapsed(), 0.0);
        assert_eq!(s.level_score(), 100);
    }

    #[test]
    fn press_outside_nodes_does_nothing() {
        let mut s = playing();
        let signals = s.update(&[PointerEvent::Down(Point::new(10.0, 10.0))], 0.1);
        assert!(signals.is_empty());
        assert!(!s.is_drawing());
        assert_eq!(s.elapsed(), 0.0);
    }

    #[test]
    fn reset_is_refused_once_solved() {
        let mut s = playing();
        stroke(&mut s, &[0, 1], 0.1);
        assert_eq!(s.reset(), vec![Signal::PathReset]);
        assert!(s.path().is_empty());

        stroke(&mut s, &[0, 2, 1, 0], 0.1);
        assert!(s.is_level_complete());
        assert!(s.reset().is_empty());
        assert_eq!(s.graph().total_visits(), 3);
        // No new stroke either
        let p = pos(&s, 1);
        assert!(s.update(&[PointerEvent::Down(p)], 0.1).is_empty());
    }

    #[test]
    fn timer_spans_restarts_and_resets() {
        let mut s = playing();
        s.update(&[], 5.0);
        stroke(&mut s, &[0, 1], 1.0);
        s.reset();
        s.update(&[], 10.0);
        stroke(&mut s, &[0, 1, 2, 0], 1.0);
        // First press at clock 6, solve at clock 6 + 2 + 10 + 5 = 23
        assert_eq!(s.elapsed(), 17.0);
        assert_eq!(s.level_score(), 66);
    }

    #[test]
    fn level_navigation() {
        let mut s = playing();
        assert!(s.next_level().is_empty());
        assert!(s.previous_level().is_empty());

        stroke(&mut s, &[0, 1, 2, 0], 0.1);
        assert_eq!(s.next_level(), vec![Signal::LevelLoaded { level: 2 }]);
        assert!(!s.is_level_complete());
        assert_eq!(s.graph().edges().len(), 10);
        assert_eq!(s.elapsed(), 0.0);
        assert!(s.next_level().is_empty());
        assert_eq!(s.previous_level(), vec![Signal::LevelLoaded { level: 1 }]);
        assert_eq!(s.progression().current_level(), 1);
        assert_eq!(s.progression().max_unlocked_level(), 2);
        assert_eq!(s.progression().total_score(), 100);
    }

    #[test]
    fn resolving_old_level_does_not_unlock_more() {
        let mut s = playing();
        stroke(&mut s, &[0, 1, 2, 0], 0.1);
        s.next_level();
        s.previous_level();
        let signals = stroke(&mut s, &[0, 1, 2, 0], 0.1);
        assert!(!signals.iter().any(|e| matches!(e, Signal::LevelUnlocked { .. })));
        assert_eq!(s.progression().max_unlocked_level(), 2);
        assert_eq!(s.progression().history().len(), 2);
    }

    #[test]
    fn hint_popup_blocks_strokes() {
        let mut s = playing();
        assert_eq!(s.show_hint(), vec![Signal::HintShown]);
        assert!(s.show_hint().is_empty());
        assert_eq!(s.hint().message, "You can start from any node!");

        // The press closes the popup and does not start a stroke
        let p = pos(&s, 0);
        assert_eq!(s.update(&[PointerEvent::Down(p)], 0.1), vec![Signal::HintHidden]);
        assert!(!s.is_drawing());
        s.update(&[PointerEvent::Down(p)], 0.1);
        assert!(s.is_drawing());
        assert!(s.hide_hint().is_empty());
    }

    #[test]
    fn no_hint_while_drawing() {
        let mut s = playing();
        let (p0, p1) = (pos(&s, 0), pos(&s, 1));
        s.update(&[PointerEvent::Down(p0)], 0.1);
        assert!(s.show_hint().is_empty());
        assert!(!s.is_hint_visible());

        s.update(&[PointerEvent::Move(p1)], 0.1);
        assert_eq!(s.path().get(), &[0, 1]);
        let signals = s.update(&[PointerEvent::Up(p1)], 0.1);
        assert_eq!(
            signals,
            vec![Signal::StrokeReleased {
                verdict: Verdict::Incomplete
            }]
        );
        assert_eq!(s.show_hint(), vec![Signal::HintShown]);
    }

    #[test]
    fn hover_highlights_only_when_idle() {
        let mut s = playing();
        let p = pos(&s, 1);
        s.update(&[PointerEvent::Move(p)], 0.1);
        assert_eq!(s.graph().highlighted(), Some(1));

        s.update(&[PointerEvent::Down(p)], 0.1);
        assert_eq!(s.graph().highlighted(), None);

        s.update(&[PointerEvent::Up(p)], 0.1);
        assert_eq!(s.graph().highlighted(), Some(1));

        s.update(&[PointerEvent::Move(Point::new(0.0, 0.0))], 0.1);
        assert_eq!(s.graph().highlighted(), None);
    }

    #[test]
    fn starting_at_unlocks_previous_levels() {
        let mut s = GameSession::starting_at(LevelCatalog::builtin(), Settings::default(), 5);
        s.begin();
        assert_eq!(s.progression().current_level(), 5);
        assert_eq!(s.progression().max_unlocked_level(), 5);
        assert_eq!(s.previous_level(), vec![Signal::LevelLoaded { level: 4 }]);

        let s = GameSession::starting_at(LevelCatalog::builtin(), Settings::default(), 40);
        assert_eq!(s.progression().current_level(), 1);
    }
}
