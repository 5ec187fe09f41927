/*
generator.rs

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

//! Generate random puzzles.
//!
//! All the puzzles are laid out on a rectangular [`grid::Grid`] and addressed by
//! [`grid::Position`] objects.
//!
//! * A word-search puzzle hides words in a grid of letters.
//!   You create it by creating a [`word_placement::WordPlacementGenerator`] object and by using its
//!   [`word_placement::WordPlacementGenerator::generate`] method.
//!   Words are placed along the eight [`direction::Direction`] values.
//!   Words that cannot be placed are dropped, so the puzzle might hold fewer words than requested.
//!
//! * The row and column hints of a nonogram come from [`hints::compute_hints`].
//!
//! * The word lists and the crossword clues come from [`catalog`].
//!   Word lists can also be loaded from a file with [`catalog::load_word_list`].

pub mod catalog;
pub mod direction;
pub mod grid;
pub mod hints;
pub mod word_placement;
