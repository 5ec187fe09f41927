/*
nonogram.rs

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

//! Manage a nonogram in progress.
//!
//! The solution is a random grid of filled cells.
//! The player fills cells or crosses them out.
//! Filling a cell that is not part of the solution costs a life; the game is lost when no life
//! remains, and won when every cell of the solution is filled.
//!
//! Cells are addressed by their row-major index.

use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use crate::generator::grid::{Grid, Position};
use crate::generator::hints::{self, LineHints};
use crate::random_source::RandomSource;

/// Number of lives at the beginning of a game.
pub const STARTING_LIVES: usize = 3;

/// Number of hints at the beginning of a game.
pub const STARTING_HINTS: usize = 5;

/// Number of times a solution is drawn again when it has no filled cell.
const MAX_SOLUTION_DRAWS: usize = 10;

/// Number of random draws when looking for a cell to reveal, before scanning the whole grid.
const HINT_DRAWS: usize = 64;

/// Player mark on a cell.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Mark {
    #[default]
    Unmarked,

    /// The player filled a cell of the solution.
    Filled,

    /// The player crossed the cell out. This is only a note and has no effect on the game.
    Crossed,

    /// The player tried to fill a cell that is not part of the solution.
    Wrong,
}

/// Type of move.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum DrawType {
    #[default]
    Fill,
    Cross,

    /// Repeat the type of the move that started the drag.
    Continue,
}

/// Input events, as relayed by the interface.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum NonogramEvent {
    /// The pointer is pressed on a cell: start a drag and apply the move.
    Press { cell: usize, draw: DrawType },

    /// The pointer enters a cell. Applies a [`DrawType::Continue`] move while dragging.
    Enter { cell: usize },

    /// The pointer is released or leaves the grid.
    Release,

    /// Reveal a cell of the solution.
    Hint,
}

/// Result of a game.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Nonogram status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NonogramPuzzle {
    /// Cells of the solution.
    solution: Grid<bool>,

    /// Player marks.
    marks: Grid<Mark>,

    /// Row and column hints, computed from the solution.
    hints: LineHints,

    /// Remaining lives.
    lives: usize,

    /// Remaining hints.
    hints_remaining: usize,

    /// Whether the game is won or lost.
    ended: bool,

    /// Whether the pointer is down.
    drawing: bool,

    /// Type of the move that started the current drag. Never [`DrawType::Continue`].
    draw_type: DrawType,
}

impl NonogramPuzzle {
    /// Create a game with a random `size × size` solution.
    ///
    /// Each cell belongs to the solution with probability `fill_probability`.
    /// The solution is not guaranteed to be the only one that matches the hints.
    pub fn new_game(size: usize, fill_probability: f64, rng: &mut impl RandomSource) -> Self {
        let mut solution: Grid<bool> = Grid::square(size, false);

        for draw in 0..MAX_SOLUTION_DRAWS {
            solution = Grid::square(size, false);
            for i in 0..solution.len() {
                solution.set_index(i, rng.chance(fill_probability));
            }
            if solution.cells().contains(&true) {
                break;
            }
            debug!("Solution draw {draw} has no filled cell");
        }

        // A game must have at least one cell to fill
        if !solution.cells().contains(&true) && !solution.is_empty() {
            let i: usize = rng.below(solution.len());
            solution.set_index(i, true);
        }
        Self::from_solution(solution)
    }

    /// Create a game for the given solution.
    pub fn from_solution(solution: Grid<bool>) -> Self {
        let hints: LineHints = hints::compute_hints(&solution);
        debug!(
            "New nonogram {}x{}: {} filled cells",
            solution.width(),
            solution.height(),
            solution.cells().iter().filter(|c| **c).count()
        );
        Self {
            marks: Grid::new(solution.width(), solution.height(), Mark::Unmarked),
            solution,
            hints,
            lives: STARTING_LIVES,
            hints_remaining: STARTING_HINTS,
            ended: false,
            drawing: false,
            draw_type: DrawType::Fill,
        }
    }

    /// Process an input event.
    pub fn handle(&mut self, event: NonogramEvent, rng: &mut impl RandomSource) {
        match event {
            NonogramEvent::Press { cell, draw } => self.press(cell, draw),
            NonogramEvent::Enter { cell } => self.enter(cell),
            NonogramEvent::Release => self.release(),
            NonogramEvent::Hint => self.use_hint(rng),
        }
    }

    /// Start a drag on the given cell.
    pub fn press(&mut self, cell: usize, draw: DrawType) {
        if self.ended {
            return;
        }
        self.apply_move(cell, draw);
        self.drawing = !self.ended;
    }

    /// Continue the drag on the given cell.
    pub fn enter(&mut self, cell: usize) {
        if self.drawing {
            self.apply_move(cell, DrawType::Continue);
            self.drawing = !self.ended;
        }
    }

    /// Stop the drag.
    pub fn release(&mut self) {
        self.drawing = false;
    }

    /// Apply a move to the given cell.
    pub fn apply_move(&mut self, cell: usize, draw: DrawType) {
        if self.ended {
            return;
        }
        let (Some(filled), Some(mark)) = (
            self.solution.get_index(cell).copied(),
            self.marks.get_index(cell).copied(),
        ) else {
            warn!("Ignoring move on cell {cell}: outside the grid");
            return;
        };
        let draw: DrawType = match draw {
            DrawType::Continue => self.draw_type,
            d => {
                self.draw_type = d;
                d
            }
        };

        match draw {
            DrawType::Fill => {
                if filled {
                    self.marks.set_index(cell, Mark::Filled);
                } else if mark != Mark::Wrong {
                    self.marks.set_index(cell, Mark::Wrong);
                    self.lives = self.lives.saturating_sub(1);
                    debug!("Wrong fill on cell {cell}: {} lives left", self.lives);
                }
                self.update_ended();
            }
            DrawType::Cross | DrawType::Continue => match mark {
                Mark::Crossed => self.marks.set_index(cell, Mark::Unmarked),
                Mark::Unmarked => self.marks.set_index(cell, Mark::Crossed),
                Mark::Filled | Mark::Wrong => (),
            },
        }
    }

    /// Reveal a random cell of the solution that the player has not filled yet.
    pub fn use_hint(&mut self, rng: &mut impl RandomSource) {
        if self.ended || self.hints_remaining == 0 {
            return;
        }
        let cell: usize = self.pick_hidden_cell(rng);
        debug!("Hint reveals cell {cell}");
        self.marks.set_index(cell, Mark::Filled);
        self.hints_remaining -= 1;
        self.update_ended();
    }

    /// Return a cell of the solution that is not filled yet.
    fn pick_hidden_cell(&self, rng: &mut impl RandomSource) -> usize {
        let hidden = |i: usize| self.solution.cells()[i] && self.marks.cells()[i] != Mark::Filled;

        for _ in 0..HINT_DRAWS {
            let i: usize = rng.below(self.solution.len());
            if hidden(i) {
                return i;
            }
        }

        let candidates: Vec<usize> = (0..self.solution.len()).filter(|i| hidden(*i)).collect();
        if candidates.is_empty() {
            // Unreachable: the game ends when every cell of the solution is filled
            error!("No hidden cell left in a game in progress");
            panic!("Bug: hint requested while every solution cell is filled");
        }
        candidates[rng.below(candidates.len())]
    }

    /// Update the ended status after a fill.
    fn update_ended(&mut self) {
        let solved: bool = self
            .solution
            .cells()
            .iter()
            .zip(self.marks.cells())
            .all(|(filled, mark)| !filled || *mark == Mark::Filled);
        if solved {
            debug!("Nonogram solved");
            self.ended = true;
        } else if self.lives == 0 {
            debug!("Nonogram lost");
            self.ended = true;
        }
        if self.ended {
            self.drawing = false;
        }
    }

    /// Whether the game is won or lost.
    pub fn ended(&self) -> bool {
        self.ended
    }

    pub fn outcome(&self) -> Outcome {
        if !self.ended {
            Outcome::InProgress
        } else if self.lives == 0 {
            Outcome::Lost
        } else {
            Outcome::Won
        }
    }

    pub fn lives(&self) -> usize {
        self.lives
    }

    pub fn hints_remaining(&self) -> usize {
        self.hints_remaining
    }

    /// Whether a drag is in progress.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn size(&self) -> usize {
        self.solution.width()
    }

    pub fn solution(&self) -> &Grid<bool> {
        &self.solution
    }

    pub fn marks(&self) -> &Grid<Mark> {
        &self.marks
    }

    pub fn hints(&self) -> &LineHints {
        &self.hints
    }

    /// Return the mark of the given cell.
    pub fn mark_at(&self, pos: Position) -> Option<Mark> {
        self.marks.get(pos).copied()
    }

    /// Return the grid of the cells that the player filled.
    pub fn revealed(&self) -> Grid<bool> {
        self.marks.map(|m| *m == Mark::Filled)
    }

    /// Whether the filled cells of the row match its hint.
    pub fn row_completed(&self, y: usize) -> bool {
        y < self.marks.height()
            && hints::line_runs(self.marks.row(y).into_iter().map(|m| m == Mark::Filled))
                == self.hints.rows[y]
    }

    /// Whether the filled cells of the column match its hint.
    pub fn column_completed(&self, x: usize) -> bool {
        x < self.marks.width()
            && hints::line_runs(self.marks.column(x).into_iter().map(|m| m == Mark::Filled))
                == self.hints.columns[x]
    }
}
