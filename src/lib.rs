/*
lib.rs

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

//! StrokeX puzzle engine.
//!
//! StrokeX is a single-stroke puzzle: the player must trace every edge of a small graph exactly
//! once, without lifting the pointer. This crate is the engine of the game. It does not draw
//! anything: the frame loop feeds pointer events to a [`session::GameSession`] object and renders
//! the [`snapshot::Snapshot`] it produces.
//!
//! * [`catalog`] stores the levels.
//! * [`graph`] is the graph of the active level, with its edge visit counters.
//! * [`tracer`] follows the pointer and grows the [`path::Path`] along the edges.
//! * [`validator`] decides whether a stroke solved the puzzle.
//! * [`hint`] tells the player where to start.
//! * [`score`] and [`progression`] manage points and unlocked levels.
//! * [`solver`] and [`simulate`] are tools for level designers and for testing.

pub mod catalog;
pub mod config;
pub mod graph;
pub mod hint;
pub mod path;
pub mod progression;
pub mod score;
pub mod session;
pub mod simulate;
pub mod snapshot;
pub mod solver;
pub mod timer;
pub mod tracer;
pub mod validator;
