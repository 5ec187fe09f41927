/*
hints.rs

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

//! Compute the run-length hints of a nonogram.
//!
//! Each row and each column gets the lengths of its runs of consecutive filled cells, from left to
//! right and from top to bottom.
//! A line without filled cells has an empty hint.

use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// Run lengths of one line.
pub type LineHint = Vec<usize>;

/// Hints for all the rows and all the columns.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct LineHints {
    /// One hint per row, from top to bottom.
    pub rows: Vec<LineHint>,

    /// One hint per column, from left to right.
    pub columns: Vec<LineHint>,
}

/// Return the run lengths of a line of cells.
pub fn line_runs<I>(line: I) -> LineHint
where
    I: IntoIterator<Item = bool>,
{
    let mut runs: LineHint = Vec::new();
    let mut run: usize = 0;

    for filled in line {
        if filled {
            run += 1;
        } else if run > 0 {
            runs.push(run);
            run = 0;
        }
    }
    if run > 0 {
        runs.push(run);
    }
    runs
}

/// Compute the hints of a solution grid.
pub fn compute_hints(solution: &Grid<bool>) -> LineHints {
    LineHints {
        rows: (0..solution.height())
            .map(|y| line_runs(solution.row(y)))
            .collect(),
        columns: (0..solution.width())
            .map(|x| line_runs(solution.column(x)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(rows: &[&str]) -> Grid<bool> {
        let cells: Vec<bool> = rows.iter().flat_map(|r| r.chars().map(|c| c == '#')).collect();
        Grid::from_cells(rows[0].len(), rows.len(), cells).expect("rectangular grid")
    }

    #[test]
    fn test_runs_are_split_by_empty_cells() {
        assert_eq!(line_runs([true, true, false, true]), vec![2, 1]);
        assert_eq!(line_runs([false, false, false]), Vec::<usize>::new());
        assert_eq!(line_runs([true, false, true, false, true]), vec![1, 1, 1]);
        assert_eq!(line_runs([false, true, true, true]), vec![3]);
    }

    #[test]
    fn test_rows_and_columns() {
        let hints: LineHints = compute_hints(&grid(&["##.#", "....", "####", ".#.."]));
        assert_eq!(hints.rows, vec![vec![2, 1], vec![], vec![4], vec![1]]);
        assert_eq!(
            hints.columns,
            vec![vec![1, 1], vec![1, 2], vec![1], vec![1, 1]]
        );
    }

    proptest! {
        #[test]
        fn prop_hints_count_every_filled_cell(cells in proptest::collection::vec(any::<bool>(), 36)) {
            let solution: Grid<bool> = Grid::from_cells(6, 6, cells.clone()).unwrap();
            let hints: LineHints = compute_hints(&solution);
            let filled: usize = cells.iter().filter(|c| **c).count();
            prop_assert_eq!(hints.rows.iter().flatten().sum::<usize>(), filled);
            prop_assert_eq!(hints.columns.iter().flatten().sum::<usize>(), filled);
            prop_assert!(hints.rows.iter().flatten().all(|r| *r > 0));
        }

        // Lay the runs out in a line, then read them back in the same order, along a row and
        // along a column
        #[test]
        fn prop_runs_read_back_in_order(
            lead in 0usize..3,
            layout in proptest::collection::vec((0usize..3, 1usize..5), 1..6),
            tail in 0usize..3,
        ) {
            let mut line: Vec<bool> = vec![false; lead];
            let mut runs: LineHint = Vec::new();
            for (k, (gap, run)) in layout.iter().enumerate() {
                if k > 0 {
                    line.extend(std::iter::repeat_n(false, gap + 1));
                }
                line.extend(std::iter::repeat_n(true, *run));
                runs.push(*run);
            }
            line.extend(std::iter::repeat_n(false, tail));

            prop_assert_eq!(line_runs(line.iter().copied()), runs.clone());
            let row: LineHints = compute_hints(&Grid::from_cells(line.len(), 1, line.clone()).unwrap());
            prop_assert_eq!(&row.rows[0], &runs);
            let column: LineHints = compute_hints(&Grid::from_cells(1, line.len(), line).unwrap());
            prop_assert_eq!(&column.columns[0], &runs);
        }
    }
}
