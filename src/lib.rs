/*
lib.rs

Copyright 2025 Hervé Quatremain

This file is part of Gridplay.

Gridplay is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Gridplay is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Gridplay. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Grid puzzle engine.
//!
//! Gridplay generates and plays three kinds of grid puzzles:
//!
//! * word search: find the words hidden in a grid of letters ([`selection`]),
//! * nonogram: fill the cells that the row and column hints describe ([`nonogram`]),
//! * clue crossword: type the answers to two questions ([`crossword`]).
//!
//! A [`session::GameSession`] object generates the puzzle, routes the player's events, and
//! tracks the playing time.
//!
//! ```
//! use gridplay::session::{Difficulty, GameConfig, GameKind, GameSession};
//!
//! let config = GameConfig::new(GameKind::Nonogram, Difficulty::Easy).with_seed(7);
//! let session = GameSession::new(config).unwrap();
//! assert!(!session.ended());
//! ```

pub mod crossword;
pub mod generator;
pub mod nonogram;
pub mod random_source;
pub mod selection;
pub mod session;
pub mod timer;
