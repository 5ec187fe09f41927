/*
direction.rs

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

//! The eight compass directions a word can follow in a grid.
//!
//! The `y` axis grows downward, like the rows of the grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a word in the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

/// Unit vector `(dx, dy)` of each direction, in the declaration order of [`Direction`].
const DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

impl Direction {
    /// All the directions, in a stable order.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// Return the unit vector `(dx, dy)` of the direction.
    pub fn delta(self) -> (isize, isize) {
        DELTAS[self as usize]
    }

    /// Return the direction for the given unit vector, or None if the vector is not one of the
    /// eight unit vectors.
    pub fn from_delta(dx: isize, dy: isize) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.delta() == (dx, dy))
    }

    /// Whether the direction is one of the four diagonals.
    pub fn is_diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }

    /// For a diagonal, return the horizontal and the vertical directions it is made of.
    pub fn axes(self) -> Option<(Direction, Direction)> {
        match self {
            Direction::DownRight => Some((Direction::Right, Direction::Down)),
            Direction::DownLeft => Some((Direction::Left, Direction::Down)),
            Direction::UpRight => Some((Direction::Right, Direction::Up)),
            Direction::UpLeft => Some((Direction::Left, Direction::Up)),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &str = match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::DownRight => "down-right",
            Direction::DownLeft => "down-left",
            Direction::UpRight => "up-right",
            Direction::UpLeft => "up-left",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_declaration_order() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_delta(d.delta().0, d.delta().1), Some(d));
        }
    }

    #[test]
    fn test_only_unit_vectors_are_directions() {
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
        assert_eq!(Direction::from_delta(1, 2), None);
    }

    #[test]
    fn test_diagonal_axes() {
        let diagonals: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|d| d.is_diagonal())
            .collect();
        assert_eq!(diagonals.len(), 4);
        for d in diagonals {
            let (h, v) = d.axes().expect("diagonal has axes");
            assert_eq!(h.delta().0 + v.delta().0, d.delta().0);
            assert_eq!(h.delta().1 + v.delta().1, d.delta().1);
        }
        assert_eq!(Direction::Up.axes(), None);
    }
}
