/*
grid.rs

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

//! Rectangular grid of cells stored in row-major order.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Cell coordinates. `x` is the column and `y` the row, both starting at 0.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Return the position `steps` cells away in the given direction, or None if that position
    /// would have a negative coordinate.
    pub fn step(self, direction: Direction, steps: usize) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let x: isize = self.x as isize + dx * steps as isize;
        let y: isize = self.y as isize + dy * steps as isize;
        if x < 0 || y < 0 {
            None
        } else {
            Some(Position::new(x as usize, y as usize))
        }
    }
}

/// Grid of `width × height` cells.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with all the cells set to `value`.
    pub fn new(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    /// Create a `size × size` grid with all the cells set to `value`.
    pub fn square(size: usize, value: T) -> Self {
        Self::new(size, size, value)
    }

    /// Return a copy of the given row.
    pub fn row(&self, y: usize) -> Vec<T> {
        self.cells[y * self.width..(y + 1) * self.width].to_vec()
    }

    /// Return a copy of the given column.
    pub fn column(&self, x: usize) -> Vec<T> {
        (0..self.height)
            .map(|y| self.cells[y * self.width + x].clone())
            .collect()
    }
}

impl<T> Grid<T> {
    /// Build a grid from its cells in row-major order.
    ///
    /// Return None if the number of cells does not match the dimensions.
    pub fn from_cells(width: usize, height: usize, cells: Vec<T>) -> Option<Self> {
        if cells.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the position is inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Return the row-major index of the position, or None if it is outside the grid.
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then_some(pos.y * self.width + pos.x)
    }

    /// Return the position of a row-major index, or None if it is outside the grid.
    pub fn position_of(&self, index: usize) -> Option<Position> {
        (index < self.cells.len()).then(|| Position::new(index % self.width, index / self.width))
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.cells.get(index)
    }

    /// Set the value of a cell. Positions outside the grid are ignored.
    pub fn set(&mut self, pos: Position, value: T) {
        if let Some(i) = self.index_of(pos) {
            self.cells[i] = value;
        }
    }

    /// Set the value of a cell from its row-major index. Indexes outside the grid are ignored.
    pub fn set_index(&mut self, index: usize, value: T) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = value;
        }
    }

    /// Return the cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Return the positions of the cells that match the predicate.
    pub fn positions_where<F>(&self, mut predicate: F) -> Vec<Position>
    where
        F: FnMut(&T) -> bool,
    {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| predicate(c))
            .map(|(i, _)| Position::new(i % self.width, i / self.width))
            .collect()
    }

    /// Convert every cell with the given function.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let grid: Grid<usize> = Grid::from_cells(3, 2, (0..6).collect()).expect("6 cells");
        assert_eq!(grid.row(1), vec![3, 4, 5]);
        assert_eq!(grid.column(2), vec![2, 5]);
        assert_eq!(grid.index_of(Position::new(1, 1)), Some(4));
        assert_eq!(grid.position_of(5), Some(Position::new(2, 1)));
        assert_eq!(grid.position_of(6), None);
    }

    #[test]
    fn test_outside_positions_are_ignored() {
        let mut grid: Grid<char> = Grid::square(2, '.');
        grid.set(Position::new(2, 0), 'X');
        grid.set_index(9, 'X');
        assert!(grid.cells().iter().all(|c| *c == '.'));
        assert_eq!(grid.get(Position::new(0, 2)), None);
    }

    #[test]
    fn test_wrong_cell_count_is_rejected() {
        assert!(Grid::from_cells(2, 2, vec![true; 3]).is_none());
    }

    #[test]
    fn test_step_never_goes_negative() {
        let origin = Position::new(1, 1);
        assert_eq!(origin.step(Direction::UpLeft, 1), Some(Position::new(0, 0)));
        assert_eq!(origin.step(Direction::UpLeft, 2), None);
        assert_eq!(origin.step(Direction::DownRight, 3), Some(Position::new(4, 4)));
    }
}
