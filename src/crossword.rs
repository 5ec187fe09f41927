/*
crossword.rs

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

//! Clue crossword with keyboard input.
//!
//! A clue cell holds two questions: the answer to the first one goes to the right of the clue
//! cell, and the answer to the second one goes below it.
//! The player selects a cell with the pointer and types letters.
//! The cursor advances in the typing direction after each letter and never moves onto the clue
//! cell or wraps to another line.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::generator::catalog::Clue;
use crate::generator::direction::Direction;
use crate::generator::grid::{Grid, Position};
use crate::random_source::RandomSource;

/// Direction in which the cursor advances while typing.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum TypingDirection {
    #[default]
    Across,
    Down,
}

impl TypingDirection {
    fn toggled(self) -> Self {
        match self {
            TypingDirection::Across => TypingDirection::Down,
            TypingDirection::Down => TypingDirection::Across,
        }
    }

    fn forward(self) -> Direction {
        match self {
            TypingDirection::Across => Direction::Right,
            TypingDirection::Down => Direction::Down,
        }
    }

    fn backward(self) -> Direction {
        match self {
            TypingDirection::Across => Direction::Left,
            TypingDirection::Down => Direction::Up,
        }
    }
}

/// Arrow keys.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

/// Keyboard and pointer input for the crossword.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// The player clicks a cell.
    Click(Position),
    Letter(char),
    Backspace,
    Arrow(Arrow),

    /// Switch between typing across and down (space bar).
    ToggleDirection,
}

/// A question and the location of its answer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CrosswordEntry {
    pub question: String,
    pub answer: String,
    pub start: Position,
    pub direction: TypingDirection,
}

impl CrosswordEntry {
    /// Return the cells of the answer with their letters.
    pub fn cells(&self) -> Vec<(Position, char)> {
        self.answer
            .chars()
            .enumerate()
            .filter_map(|(k, c)| self.start.step(self.direction.forward(), k).map(|p| (p, c)))
            .collect()
    }
}

/// Crossword layout and solution.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CrosswordPuzzle {
    pub width: usize,
    pub height: usize,

    /// Cell that displays the questions.
    pub clue_cell: Position,

    /// Across entry first, then down entry. An entry is missing when no clue has the required
    /// length.
    pub entries: Vec<CrosswordEntry>,
}

impl CrosswordPuzzle {
    /// Generate a crossword of `width × height` cells.
    ///
    /// The clue cell is placed at random, leaving room for answers of at least three letters when
    /// the grid is at least four cells wide and high.
    pub fn generate(
        clues: &BTreeMap<usize, Vec<Clue>>,
        width: usize,
        height: usize,
        rng: &mut impl RandomSource,
    ) -> Self {
        let clue_cell: Position = Position::new(
            rng.below(width.saturating_sub(3).max(1)),
            rng.below(height.saturating_sub(3).max(1)),
        );
        let mut entries: Vec<CrosswordEntry> = Vec::with_capacity(2);

        for (direction, len) in [
            (TypingDirection::Across, width.saturating_sub(clue_cell.x + 1)),
            (TypingDirection::Down, height.saturating_sub(clue_cell.y + 1)),
        ] {
            let Some(candidates) = clues.get(&len).filter(|c| !c.is_empty()) else {
                debug!("No clue with {len} letters for the {direction:?} entry");
                continue;
            };
            let clue: Clue = candidates[rng.below(candidates.len())];
            if let Some(start) = clue_cell.step(direction.forward(), 1) {
                entries.push(CrosswordEntry {
                    question: clue.question.to_string(),
                    answer: clue.answer.to_uppercase(),
                    start,
                    direction,
                });
            }
        }
        debug!(
            "Crossword {width}x{height}: clue cell at ({}, {}), {} entries",
            clue_cell.x,
            clue_cell.y,
            entries.len()
        );
        Self {
            width,
            height,
            clue_cell,
            entries,
        }
    }

    /// Whether the position is inside the grid and not the clue cell.
    fn is_writable(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height && pos != self.clue_cell
    }
}

/// Crossword in progress.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CrosswordBoard {
    puzzle: CrosswordPuzzle,

    /// Letters typed by the player.
    letters: Grid<Option<char>>,

    /// Cell under the cursor.
    selected: Option<Position>,

    direction: TypingDirection,

    /// Whether every answer is complete and correct.
    ended: bool,
}

impl CrosswordBoard {
    /// Create a [`CrosswordBoard`] object with an empty grid and no selection.
    pub fn new(puzzle: CrosswordPuzzle) -> Self {
        Self {
            letters: Grid::new(puzzle.width, puzzle.height, None),
            puzzle,
            selected: None,
            direction: TypingDirection::Across,
            ended: false,
        }
    }

    /// Process an input event.
    pub fn handle(&mut self, event: KeyEvent) {
        if self.ended {
            return;
        }
        match event {
            KeyEvent::Click(pos) => self.click(pos),
            KeyEvent::Letter(c) => self.type_letter(c),
            KeyEvent::Backspace => self.backspace(),
            KeyEvent::Arrow(arrow) => self.arrow(arrow),
            KeyEvent::ToggleDirection => self.direction = self.direction.toggled(),
        }
    }

    /// Select a cell. Clicking the selected cell again switches the typing direction.
    fn click(&mut self, pos: Position) {
        if !self.puzzle.is_writable(pos) {
            return;
        }
        if pos.y + 1 >= self.puzzle.height {
            self.direction = TypingDirection::Across;
        } else if pos.x + 1 >= self.puzzle.width {
            self.direction = TypingDirection::Down;
        } else if self.selected == Some(pos) {
            self.direction = self.direction.toggled();
        }
        self.selected = Some(pos);
    }

    fn type_letter(&mut self, c: char) {
        let Some(pos) = self.selected else {
            return;
        };
        let Some(letter) = c.to_uppercase().next().filter(|l| l.is_alphabetic()) else {
            return;
        };
        self.letters.set(pos, Some(letter));
        self.move_cursor(self.direction.forward());
        self.update_ended();
    }

    /// Clear the selected cell and step back.
    fn backspace(&mut self) {
        let Some(pos) = self.selected else {
            return;
        };
        self.letters.set(pos, None);
        self.move_cursor(self.direction.backward());
    }

    fn arrow(&mut self, arrow: Arrow) {
        if self.selected.is_none() {
            return;
        }
        let direction: Direction = match arrow {
            Arrow::Up => Direction::Up,
            Arrow::Down => Direction::Down,
            Arrow::Left => Direction::Left,
            Arrow::Right => Direction::Right,
        };
        self.move_cursor(direction);
    }

    /// Move the cursor one cell, unless the destination is outside the grid or the clue cell.
    fn move_cursor(&mut self, direction: Direction) {
        if let Some(next) = self
            .selected
            .and_then(|pos| pos.step(direction, 1))
            .filter(|next| self.puzzle.is_writable(*next))
        {
            self.selected = Some(next);
        }
    }

    fn update_ended(&mut self) {
        self.ended = !self.puzzle.entries.is_empty()
            && self.puzzle.entries.iter().all(|entry| {
                entry
                    .cells()
                    .iter()
                    .all(|(pos, c)| self.letters.get(*pos) == Some(&Some(*c)))
            });
        if self.ended {
            debug!("Crossword solved");
        }
    }

    pub fn puzzle(&self) -> &CrosswordPuzzle {
        &self.puzzle
    }

    pub fn letters(&self) -> &Grid<Option<char>> {
        &self.letters
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn direction(&self) -> TypingDirection {
        self.direction
    }

    /// Whether every answer is complete and correct.
    pub fn ended(&self) -> bool {
        self.ended
    }

    /// Number of entries whose cells hold the correct answer.
    pub fn solved_entries(&self) -> usize {
        self.puzzle
            .entries
            .iter()
            .filter(|entry| {
                entry
                    .cells()
                    .iter()
                    .all(|(pos, c)| self.letters.get(*pos) == Some(&Some(*c)))
            })
            .count()
    }
}
