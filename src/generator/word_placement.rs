/*
word_placement.rs

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

//! Place words in a square grid for word-search puzzles.
//!
//! Words are drawn in a random order from the candidate list and placed along one of the eight
//! [`Direction`]s.
//! Two words can cross each other when they share the same letter in the crossing cell.
//! Once all the words are processed, the remaining empty cells get random letters.
//!
//! The search is bounded: a word gets at most [`WordPlacementGenerator::attempts_per_word`]
//! origins before being dropped, so the output might contain fewer words than requested.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;

use super::direction::Direction;
use super::grid::{Grid, Position};
use crate::random_source::RandomSource;

/// Number of attempts per word, for each word requested.
const ATTEMPT_FACTOR: usize = 10;

/// Number of times an origin is drawn again when it has already been tried for the word.
const ORIGIN_RETRIES: usize = 10;

/// Letters used to fill the cells that no word covers.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A word in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    /// Word, in uppercase.
    pub word: String,

    /// Position of the first letter.
    pub origin: Position,

    /// Direction from the first letter to the last.
    pub direction: Direction,
}

impl PlacedWord {
    /// Number of letters.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Return the positions of the letters, from the first to the last.
    pub fn cells(&self) -> Vec<Position> {
        (0..self.len())
            .filter_map(|k| self.origin.step(self.direction, k))
            .collect()
    }
}

/// Word-search grid and the words hidden in it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordSearchPuzzle {
    /// Letters. After generation every cell holds a letter.
    pub grid: Grid<char>,

    /// Words hidden in the grid, in placement order.
    pub placed: Vec<PlacedWord>,
}

impl WordSearchPuzzle {
    /// Number of words hidden in the grid. It might be lower than the number requested.
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Grid side.
    pub fn size(&self) -> usize {
        self.grid.width()
    }

    /// Return the placed word that matches the given string, ignoring case.
    pub fn find_word(&self, candidate: &str) -> Option<&PlacedWord> {
        let candidate: String = candidate.to_uppercase();
        self.placed.iter().find(|p| p.word == candidate)
    }
}

/// Statistics about the last generated grid.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlacementReport {
    /// Number of words taken from the candidate list.
    pub attempted: usize,

    /// Number of words placed in the grid.
    pub placed: usize,

    /// Number of words skipped because they are longer than the grid side.
    pub too_long: usize,

    /// Number of words skipped because they contain characters other than letters.
    pub rejected: usize,

    /// Number of words dropped because no free path was found.
    pub dropped: usize,

    /// Number of origins tried, for all the words.
    pub iterations: usize,
}

/// [`WordPlacementGenerator`] object.
pub struct WordPlacementGenerator {
    /// Grid side.
    pub size: usize,

    /// Number of words to take from the candidate list.
    pub target_count: usize,

    /// Maximum number of origins tried for a word.
    pub attempts_per_word: usize,

    /// Letters used to fill the free cells.
    alphabet: Vec<char>,

    /// Statistics about the last generated grid.
    pub report: PlacementReport,

    /// Duration in seconds it took to generate the last grid.
    pub duration: f32,
}

impl WordPlacementGenerator {
    /// Create the object.
    pub fn new(size: usize, target_count: usize) -> Self {
        Self {
            size,
            target_count,
            attempts_per_word: ATTEMPT_FACTOR * target_count.max(1),
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            report: PlacementReport::default(),
            duration: 0.0,
        }
    }

    /// Use another alphabet for the free cells. An empty alphabet keeps the current one.
    pub fn with_alphabet(mut self, alphabet: &str) -> Self {
        let letters: Vec<char> = alphabet.chars().flat_map(char::to_uppercase).collect();
        if !letters.is_empty() {
            self.alphabet = letters;
        }
        self
    }

    /// Generate a grid from the candidate words.
    ///
    /// Words are normalized to uppercase. Empty words, duplicated words, words with characters
    /// other than letters, and words longer than the grid are skipped.
    pub fn generate<S: AsRef<str>>(
        &mut self,
        words: &[S],
        rng: &mut impl RandomSource,
    ) -> WordSearchPuzzle {
        let start: Instant = Instant::now();
        self.report = PlacementReport::default();

        let mut cells: Grid<Option<char>> = Grid::square(self.size, None);
        let mut placed: Vec<PlacedWord> = Vec::with_capacity(self.target_count);

        // Draw the words without replacement
        let mut pool: Vec<usize> = (0..words.len()).collect();
        while self.report.attempted < self.target_count && !pool.is_empty() {
            let word: String = words[pool.swap_remove(rng.below(pool.len()))]
                .as_ref()
                .trim()
                .to_uppercase();
            self.report.attempted += 1;

            if word.is_empty() || placed.iter().any(|p| p.word == word) {
                debug!("Skipping empty or duplicated word {word:?}");
                continue;
            }
            if !word.chars().all(char::is_alphabetic) {
                debug!("Skipping {word:?}: only letters can be placed in the grid");
                self.report.rejected += 1;
                continue;
            }
            let letters: Vec<char> = word.chars().collect();
            if letters.len() > self.size {
                debug!("Skipping {word}: {} letters for a grid of {}", letters.len(), self.size);
                self.report.too_long += 1;
                continue;
            }

            match self.place_word(&letters, &mut cells, rng) {
                Some((origin, direction)) => {
                    debug!("Placed {word} at ({}, {}) going {direction}", origin.x, origin.y);
                    placed.push(PlacedWord {
                        word,
                        origin,
                        direction,
                    });
                }
                None => {
                    debug!("Dropped {word}: no free path found");
                    self.report.dropped += 1;
                }
            }
        }
        self.report.placed = placed.len();

        // Fill the remaining cells with random letters
        let grid: Grid<char> = cells.map(|c| match c {
            Some(letter) => *letter,
            None => self.alphabet[rng.below(self.alphabet.len())],
        });

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Placed {} of {} words  Iterations = {}  Duration = {}",
            self.report.placed, self.report.attempted, self.report.iterations, self.duration
        );
        WordSearchPuzzle { grid, placed }
    }

    /// Try to place the word, and return its origin and direction on success.
    fn place_word(
        &mut self,
        letters: &[char],
        cells: &mut Grid<Option<char>>,
        rng: &mut impl RandomSource,
    ) -> Option<(Position, Direction)> {
        let mut visited: HashSet<Position> = HashSet::with_capacity(self.attempts_per_word);

        for _ in 0..self.attempts_per_word {
            self.report.iterations += 1;
            let origin: Position = self.pick_origin(&mut visited, rng);

            let mut candidates: Vec<Direction> = self.fitting_directions(origin, letters.len());

            // For each diagonal that fits, maybe drop its two axes so that diagonals get a fair
            // share of the placements
            let mut dropped_axes: Vec<Direction> = Vec::new();
            for diagonal in candidates.iter().filter(|d| d.is_diagonal()) {
                if rng.chance(0.5)
                    && let Some((horizontal, vertical)) = diagonal.axes()
                {
                    dropped_axes.push(horizontal);
                    dropped_axes.push(vertical);
                }
            }
            candidates.retain(|d| !dropped_axes.contains(d));

            // Letters can only be shared, not overwritten
            candidates.retain(|d| Self::path_is_free(letters, origin, *d, cells));

            if candidates.is_empty() {
                continue;
            }
            let direction: Direction = candidates[rng.below(candidates.len())];
            for (k, letter) in letters.iter().enumerate() {
                if let Some(pos) = origin.step(direction, k) {
                    cells.set(pos, Some(*letter));
                }
            }
            return Some((origin, direction));
        }
        None
    }

    /// Draw an origin, preferring a cell not yet tried for the current word.
    fn pick_origin(
        &self,
        visited: &mut HashSet<Position>,
        rng: &mut impl RandomSource,
    ) -> Position {
        let mut origin: Position = Position::default();
        for _ in 0..ORIGIN_RETRIES {
            origin = Position::new(rng.below(self.size), rng.below(self.size));
            if !visited.contains(&origin) {
                break;
            }
        }
        visited.insert(origin);
        origin
    }

    /// Return the directions for which a word of the given length stays inside the grid.
    fn fitting_directions(&self, origin: Position, len: usize) -> Vec<Direction> {
        let right: bool = origin.x + len <= self.size;
        let left: bool = origin.x + 1 >= len;
        let down: bool = origin.y + len <= self.size;
        let up: bool = origin.y + 1 >= len;

        Direction::ALL
            .into_iter()
            .filter(|d| match d {
                Direction::Right => right,
                Direction::Left => left,
                Direction::Down => down,
                Direction::Up => up,
                Direction::DownRight => down && right,
                Direction::DownLeft => down && left,
                Direction::UpRight => up && right,
                Direction::UpLeft => up && left,
            })
            .collect()
    }

    /// Whether every cell along the path is empty or already holds the required letter.
    fn path_is_free(
        letters: &[char],
        origin: Position,
        direction: Direction,
        cells: &Grid<Option<char>>,
    ) -> bool {
        letters.iter().enumerate().all(|(k, letter)| {
            match origin.step(direction, k).and_then(|pos| cells.get(pos)) {
                Some(Some(existing)) => existing == letter,
                Some(None) => true,
                None => false,
            }
        })
    }
}

/// Generate a word-search grid of `size × size` with up to `target_count` words.
pub fn generate<S: AsRef<str>>(
    words: &[S],
    size: usize,
    target_count: usize,
    rng: &mut impl RandomSource,
) -> WordSearchPuzzle {
    WordPlacementGenerator::new(size, target_count).generate(words, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::catalog;
    use crate::random_source::seeded;
    use proptest::prelude::*;

    const WORDS: [&str; 12] = [
        "APPLE", "BANANA", "CHERRY", "GRAPE", "LEMON", "MANGO", "MELON", "OLIVE", "PEACH",
        "PEAR", "PLUM", "KIWI",
    ];

    fn assert_fidelity(puzzle: &WordSearchPuzzle) {
        for p in &puzzle.placed {
            for (k, letter) in p.word.chars().enumerate() {
                let pos: Position = p.origin.step(p.direction, k).expect("inside the grid");
                assert_eq!(
                    puzzle.grid.get(pos),
                    Some(&letter),
                    "{} letter {k} at {pos:?}",
                    p.word
                );
            }
        }
    }

    #[test]
    fn test_placed_words_are_readable() {
        let mut rng = seeded(1);
        let puzzle: WordSearchPuzzle = generate(&WORDS, 10, 8, &mut rng);
        assert!(puzzle.placed_count() > 0);
        assert!(puzzle.placed_count() <= 8);
        assert_fidelity(&puzzle);
    }

    #[test]
    fn test_every_cell_is_filled_with_a_letter() {
        let mut rng = seeded(2);
        let puzzle: WordSearchPuzzle = generate(&WORDS, 12, 10, &mut rng);
        assert_eq!(puzzle.grid.len(), 144);
        assert!(puzzle.grid.cells().iter().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a: WordSearchPuzzle = generate(&WORDS, 10, 10, &mut seeded(99));
        let b: WordSearchPuzzle = generate(&WORDS, 10, 10, &mut seeded(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_too_long_words_yield_random_grid() {
        let words = ["EXTRAORDINARY", "INCOMPREHENSIBLE", "ACKNOWLEDGEMENT"];
        let mut generator = WordPlacementGenerator::new(5, 3);
        let puzzle: WordSearchPuzzle = generator.generate(&words, &mut seeded(3));
        assert_eq!(puzzle.placed_count(), 0);
        assert_eq!(generator.report.too_long, 3);
        assert_eq!(generator.report.iterations, 0);
        assert_eq!(puzzle.grid.len(), 25);
    }

    #[test]
    fn test_target_count_limits_attempts() {
        let mut generator = WordPlacementGenerator::new(15, 3);
        let puzzle: WordSearchPuzzle = generator.generate(&WORDS, &mut seeded(4));
        assert_eq!(generator.report.attempted, 3);
        assert!(puzzle.placed_count() <= 3);
        assert!(generator.report.iterations <= 3 * generator.attempts_per_word);
    }

    #[test]
    fn test_words_are_normalized_and_deduplicated() {
        let words = ["kiwi", "KIWI", " Kiwi "];
        let puzzle: WordSearchPuzzle = generate(&words, 6, 3, &mut seeded(5));
        assert_eq!(puzzle.placed_count(), 1);
        assert_eq!(puzzle.placed[0].word, "KIWI");
        assert!(puzzle.find_word("kiwi").is_some());
    }

    #[test]
    fn test_custom_alphabet_fills_free_cells() {
        let mut generator = WordPlacementGenerator::new(4, 0).with_alphabet("xy");
        let puzzle: WordSearchPuzzle = generator.generate(&WORDS, &mut seeded(6));
        assert_eq!(puzzle.placed_count(), 0);
        assert!(puzzle.grid.cells().iter().all(|c| *c == 'X' || *c == 'Y'));
    }

    #[test]
    fn test_crowded_grid_shares_letters_only() {
        // Many words sharing letters on a small grid force crossings
        let words = ["AAAA", "ABAB", "BABA", "AABB", "BBAA", "ABBA", "BAAB"];
        let puzzle: WordSearchPuzzle = generate(&words, 4, 7, &mut seeded(8));
        assert_fidelity(&puzzle);
    }

    #[test]
    fn test_fitting_directions_near_corner() {
        let generator = WordPlacementGenerator::new(5, 1);
        let dirs: Vec<Direction> = generator.fitting_directions(Position::new(0, 0), 5);
        assert_eq!(
            dirs,
            vec![Direction::Right, Direction::Down, Direction::DownRight]
        );
        let dirs: Vec<Direction> = generator.fitting_directions(Position::new(2, 2), 4);
        assert!(dirs.is_empty());
    }

    #[test]
    fn test_words_with_other_characters_are_rejected() {
        let words: Vec<String> = catalog::parse_word_list("ICE CREAM\nR2D2\nmelon\nT-REX\n");
        let mut generator = WordPlacementGenerator::new(10, 4);
        let puzzle: WordSearchPuzzle = generator.generate(&words, &mut seeded(1));
        let placed: Vec<&str> = puzzle.placed.iter().map(|p| p.word.as_str()).collect();
        assert_eq!(placed, vec!["MELON"]);
        assert_eq!(generator.report.rejected, 3);
        assert!(puzzle.grid.cells().iter().all(|c| c.is_ascii_uppercase()));
    }

    proptest! {
        #[test]
        fn prop_placements_never_conflict(seed in any::<u64>(), size in 4usize..14, count in 0usize..12) {
            let puzzle: WordSearchPuzzle = generate(&WORDS, size, count, &mut seeded(seed));
            prop_assert!(puzzle.placed_count() <= count);
            for p in &puzzle.placed {
                prop_assert!(p.len() <= size);
                for (k, letter) in p.word.chars().enumerate() {
                    let pos = p.origin.step(p.direction, k);
                    prop_assert!(pos.is_some());
                    prop_assert_eq!(puzzle.grid.get(pos.unwrap()), Some(&letter));
                }
            }
        }
    }
}
