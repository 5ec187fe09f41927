/*
selection.rs

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

//! Turn pointer gestures into word selections.
//!
//! The player presses the pointer on the first letter of a word, drags it to the last letter, and
//! releases it.
//! The selection is accepted when the line is horizontal, vertical, or a perfect diagonal, and when
//! the letters along the line spell one of the hidden words.
//!
//! [`SelectionMachine::handle`] is the only function that changes the selection status.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::generator::direction::Direction;
use crate::generator::grid::Position;
use crate::generator::word_placement::WordSearchPuzzle;
use crate::random_source::RandomSource;

/// Named colors for the found words.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Orange,
    Blue,
    Green,
    Red,
    Yellow,
    Purple,
    Pink,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 7] = [
        PaletteColor::Orange,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Red,
        PaletteColor::Yellow,
        PaletteColor::Purple,
        PaletteColor::Pink,
    ];
}

/// RGB color. Components are integers between 0 and 255.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Roll a random color.
    fn random(rng: &mut impl RandomSource) -> Self {
        Self {
            r: rng.below(256) as u8,
            g: rng.below(256) as u8,
            b: rng.below(256) as u8,
        }
    }
}

/// Color that the player asks for when releasing the pointer.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorChoice {
    Palette(PaletteColor),
    Custom(Rgb),

    /// A random entry from the palette.
    RandomPalette,

    /// A random color, rolled again each time the word is confirmed.
    Rainbow,
}

/// Color of a found word.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum WordColor {
    Palette(PaletteColor),
    Custom(Rgb),
    Rainbow(Rgb),
}

impl WordColor {
    fn resolve(choice: ColorChoice, rng: &mut impl RandomSource) -> Self {
        match choice {
            ColorChoice::Palette(c) => WordColor::Palette(c),
            ColorChoice::Custom(rgb) => WordColor::Custom(rgb),
            ColorChoice::RandomPalette => {
                WordColor::Palette(PaletteColor::ALL[rng.below(PaletteColor::ALL.len())])
            }
            ColorChoice::Rainbow => WordColor::Rainbow(Rgb::random(rng)),
        }
    }
}

/// A word that the player found.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    /// Word, in uppercase.
    pub word: String,

    /// Cells selected by the player, from the first letter to the last.
    pub path: Vec<Position>,

    pub color: WordColor,
}

/// Line being drawn by the player.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Gesture {
    pub start: Position,
    pub end: Position,
}

impl Gesture {
    /// Return the direction and the number of steps from the start to the end, or None if the
    /// line does not follow one of the eight directions.
    pub fn direction(&self) -> Option<(Direction, usize)> {
        let dx: isize = self.end.x as isize - self.start.x as isize;
        let dy: isize = self.end.y as isize - self.start.y as isize;
        if !is_aligned(dx, dy) {
            return None;
        }
        let direction: Direction = Direction::from_delta(dx.signum(), dy.signum())?;
        Some((direction, dx.unsigned_abs().max(dy.unsigned_abs())))
    }

    /// Return the cells from the start to the end, or None if the line is not aligned.
    pub fn cells(&self) -> Option<Vec<Position>> {
        let (direction, steps) = self.direction()?;
        (0..=steps).map(|k| self.start.step(direction, k)).collect()
    }
}

/// Whether a line of the given extent is horizontal, vertical, or a perfect diagonal.
///
/// A single cell (`dx == dy == 0`) is not a line.
pub fn is_aligned(dx: isize, dy: isize) -> bool {
    ((dx == 0) != (dy == 0)) || (dx != 0 && dx.abs() == dy.abs())
}

/// Selection states.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    Dragging(Gesture),
}

/// Pointer events, with coordinates already converted to grid cells.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    Down(Position),
    Move(Position),
    Up(Position, ColorChoice),
}

/// Effect of an event on the selection, so the interface can give feedback.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The event has no effect in the current state.
    Ignored,

    /// A drag started.
    Started,

    /// The end of the drag moved.
    Extended,

    /// The line does not follow one of the eight directions.
    Misaligned,

    /// The letters along the line do not spell a hidden word.
    NotAWord(String),

    /// A new word is found.
    Found(String),

    /// The word was already found. Only its color changed.
    Recolored(String),
}

/// Manage the word selection and the list of found words.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionMachine {
    state: SelectionState,

    /// Found words, in the order the player found them.
    found: Vec<FoundWord>,

    /// Whether all the hidden words are found.
    ended: bool,
}

impl SelectionMachine {
    /// Create a [`SelectionMachine`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`SelectionMachine`] object for the puzzle.
    ///
    /// A puzzle without hidden words has nothing left to find, so the selection starts ended.
    pub fn for_puzzle(puzzle: &WordSearchPuzzle) -> Self {
        Self {
            ended: puzzle.placed_count() == 0,
            ..Self::default()
        }
    }

    /// Process a pointer event.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        puzzle: &WordSearchPuzzle,
        rng: &mut impl RandomSource,
    ) -> SelectionOutcome {
        if self.ended {
            return SelectionOutcome::Ignored;
        }
        match (self.state, event) {
            (SelectionState::Idle, PointerEvent::Down(cell)) => {
                if !puzzle.grid.contains(cell) {
                    warn!("Ignoring pointer down outside the grid: {cell:?}");
                    return SelectionOutcome::Ignored;
                }
                self.state = SelectionState::Dragging(Gesture {
                    start: cell,
                    end: cell,
                });
                SelectionOutcome::Started
            }
            (SelectionState::Dragging(gesture), PointerEvent::Move(cell)) => {
                if !puzzle.grid.contains(cell) || gesture.end == cell {
                    return SelectionOutcome::Ignored;
                }
                self.state = SelectionState::Dragging(Gesture { end: cell, ..gesture });
                SelectionOutcome::Extended
            }
            (SelectionState::Dragging(gesture), PointerEvent::Up(cell, color)) => {
                self.state = SelectionState::Idle;
                let end: Position = if puzzle.grid.contains(cell) {
                    cell
                } else {
                    gesture.end
                };
                self.confirm(Gesture { end, ..gesture }, color, puzzle, rng)
            }
            // Down while dragging, and Move or Up while idle
            _ => SelectionOutcome::Ignored,
        }
    }

    /// Evaluate a finished gesture.
    fn confirm(
        &mut self,
        gesture: Gesture,
        color: ColorChoice,
        puzzle: &WordSearchPuzzle,
        rng: &mut impl RandomSource,
    ) -> SelectionOutcome {
        let Some(path) = gesture.cells() else {
            debug!("Discarding misaligned selection {gesture:?}");
            return SelectionOutcome::Misaligned;
        };
        let candidate: String = path
            .iter()
            .filter_map(|pos| puzzle.grid.get(*pos))
            .collect();

        let Some(placed) = puzzle.find_word(&candidate) else {
            debug!("Discarding selection {candidate}: not a hidden word");
            return SelectionOutcome::NotAWord(candidate);
        };
        let word: String = placed.word.clone();
        let color: WordColor = WordColor::resolve(color, rng);

        let outcome: SelectionOutcome = match self.found.iter_mut().find(|f| f.word == word) {
            Some(found) => {
                found.color = color;
                SelectionOutcome::Recolored(word)
            }
            None => {
                self.found.push(FoundWord {
                    word: word.clone(),
                    path,
                    color,
                });
                SelectionOutcome::Found(word)
            }
        };

        self.ended = self.found.len() == puzzle.placed_count();
        debug!(
            "{} of {} words found",
            self.found.len(),
            puzzle.placed_count()
        );
        outcome
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Return the line being drawn, if any.
    pub fn gesture(&self) -> Option<Gesture> {
        match self.state {
            SelectionState::Dragging(g) => Some(g),
            SelectionState::Idle => None,
        }
    }

    pub fn found_words(&self) -> &[FoundWord] {
        &self.found
    }

    /// Whether all the hidden words are found.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::grid::Grid;
    use crate::generator::word_placement::PlacedWord;
    use crate::random_source::{ScriptedRandom, seeded};

    /// ```text
    /// C A T X
    /// O X O X
    /// W X G X
    /// X X X X
    /// ```
    fn puzzle() -> WordSearchPuzzle {
        let rows = ["CATX", "OXOX", "WXGX", "XXXX"];
        let cells: Vec<char> = rows.iter().flat_map(|r| r.chars()).collect();
        WordSearchPuzzle {
            grid: Grid::from_cells(4, 4, cells).expect("4x4"),
            placed: vec![
                PlacedWord {
                    word: "CAT".to_string(),
                    origin: Position::new(0, 0),
                    direction: Direction::Right,
                },
                PlacedWord {
                    word: "COW".to_string(),
                    origin: Position::new(0, 0),
                    direction: Direction::Down,
                },
                PlacedWord {
                    word: "TOG".to_string(),
                    origin: Position::new(2, 0),
                    direction: Direction::Down,
                },
            ],
        }
    }

    fn select(
        machine: &mut SelectionMachine,
        puzzle: &WordSearchPuzzle,
        from: (usize, usize),
        to: (usize, usize),
        color: ColorChoice,
    ) -> SelectionOutcome {
        let mut rng = seeded(0);
        machine.handle(PointerEvent::Down(Position::new(from.0, from.1)), puzzle, &mut rng);
        machine.handle(PointerEvent::Move(Position::new(to.0, to.1)), puzzle, &mut rng);
        machine.handle(
            PointerEvent::Up(Position::new(to.0, to.1), color),
            puzzle,
            &mut rng,
        )
    }

    #[test]
    fn test_alignment_law() {
        assert!(is_aligned(3, 0));
        assert!(is_aligned(0, 4));
        assert!(is_aligned(3, 3));
        assert!(is_aligned(-2, 2));
        assert!(!is_aligned(2, 1));
        assert!(!is_aligned(0, 0));
    }

    #[test]
    fn test_gesture_cells() {
        let g = Gesture {
            start: Position::new(3, 0),
            end: Position::new(0, 3),
        };
        assert_eq!(g.direction(), Some((Direction::DownLeft, 3)));
        assert_eq!(g.cells().map(|c| c.len()), Some(4));
        let g = Gesture {
            start: Position::new(0, 0),
            end: Position::new(2, 1),
        };
        assert_eq!(g.cells(), None);
    }

    #[test]
    fn test_find_words_until_the_end() {
        let puzzle = puzzle();
        let mut machine = SelectionMachine::new();
        let red = ColorChoice::Palette(PaletteColor::Red);

        assert_eq!(
            select(&mut machine, &puzzle, (0, 0), (2, 0), red),
            SelectionOutcome::Found("CAT".to_string())
        );
        assert_eq!(
            select(&mut machine, &puzzle, (0, 0), (0, 2), red),
            SelectionOutcome::Found("COW".to_string())
        );
        assert!(!machine.ended());
        assert_eq!(
            select(&mut machine, &puzzle, (2, 0), (2, 2), red),
            SelectionOutcome::Found("TOG".to_string())
        );
        assert!(machine.ended());
        assert_eq!(machine.found_words().len(), 3);
        assert_eq!(machine.found_words()[0].path.len(), 3);

        // Nothing changes once every word is found
        assert_eq!(
            select(&mut machine, &puzzle, (0, 0), (2, 0), red),
            SelectionOutcome::Ignored
        );
    }

    #[test]
    fn test_found_again_only_recolors() {
        let puzzle = puzzle();
        let mut machine = SelectionMachine::new();
        select(
            &mut machine,
            &puzzle,
            (0, 0),
            (2, 0),
            ColorChoice::Palette(PaletteColor::Blue),
        );
        let outcome = select(
            &mut machine,
            &puzzle,
            (0, 0),
            (2, 0),
            ColorChoice::Custom(Rgb::new(1, 2, 3)),
        );
        assert_eq!(outcome, SelectionOutcome::Recolored("CAT".to_string()));
        assert_eq!(machine.found_words().len(), 1);
        assert_eq!(
            machine.found_words()[0].color,
            WordColor::Custom(Rgb::new(1, 2, 3))
        );
        assert!(!machine.ended());
    }

    #[test]
    fn test_rainbow_rolls_a_new_color_each_time() {
        let puzzle = puzzle();
        let mut machine = SelectionMachine::new();
        let mut rng = ScriptedRandom::new(&[0.0, 0.5, 0.999, 0.25]);
        for _ in 0..2 {
            machine.handle(PointerEvent::Down(Position::new(0, 0)), &puzzle, &mut rng);
            machine.handle(
                PointerEvent::Up(Position::new(2, 0), ColorChoice::Rainbow),
                &puzzle,
                &mut rng,
            );
        }
        // First roll: 0.0, 0.5, 0.999. Second roll: 0.25, 0.0, 0.5
        assert_eq!(
            machine.found_words()[0].color,
            WordColor::Rainbow(Rgb::new(64, 0, 128))
        );
    }

    #[test]
    fn test_misaligned_and_unknown_selections_are_discarded() {
        let puzzle = puzzle();
        let mut machine = SelectionMachine::new();
        let green = ColorChoice::Palette(PaletteColor::Green);

        assert_eq!(
            select(&mut machine, &puzzle, (0, 0), (2, 1), green),
            SelectionOutcome::Misaligned
        );
        assert_eq!(
            select(&mut machine, &puzzle, (1, 1), (1, 1), green),
            SelectionOutcome::Misaligned
        );
        assert_eq!(
            select(&mut machine, &puzzle, (0, 0), (3, 3), green),
            SelectionOutcome::NotAWord("CXGX".to_string())
        );
        // Reading backward does not spell the word
        assert_eq!(
            select(&mut machine, &puzzle, (2, 0), (0, 0), green),
            SelectionOutcome::NotAWord("TAC".to_string())
        );
        assert!(machine.found_words().is_empty());
        assert_eq!(machine.state(), SelectionState::Idle);
    }

    #[test]
    fn test_idle_events_are_ignored() {
        let puzzle = puzzle();
        let mut machine = SelectionMachine::new();
        let mut rng = seeded(0);
        assert_eq!(
            machine.handle(PointerEvent::Move(Position::new(1, 0)), &puzzle, &mut rng),
            SelectionOutcome::Ignored
        );
        assert_eq!(
            machine.handle(
                PointerEvent::Up(Position::new(1, 0), ColorChoice::RandomPalette),
                &puzzle,
                &mut rng
            ),
            SelectionOutcome::Ignored
        );
        assert_eq!(machine, SelectionMachine::new());
    }

    #[test]
    fn test_drag_tracks_the_end() {
        let puzzle = puzzle();
        let mut machine = SelectionMachine::new();
        let mut rng = seeded(0);
        machine.handle(PointerEvent::Down(Position::new(0, 0)), &puzzle, &mut rng);
        machine.handle(PointerEvent::Move(Position::new(1, 1)), &puzzle, &mut rng);
        assert_eq!(
            machine.gesture(),
            Some(Gesture {
                start: Position::new(0, 0),
                end: Position::new(1, 1)
            })
        );
        // A second press while dragging does not restart the gesture
        machine.handle(PointerEvent::Down(Position::new(3, 3)), &puzzle, &mut rng);
        assert_eq!(machine.gesture().map(|g| g.start), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_word_lookup_ignores_case() {
        let puzzle = puzzle();
        assert_eq!(puzzle.find_word("cAt").map(|p| p.origin), Some(Position::new(0, 0)));
        assert!(puzzle.find_word("dog").is_none());
    }

    #[test]
    fn test_puzzle_without_words_starts_ended() {
        let mut empty: WordSearchPuzzle = puzzle();
        empty.placed.clear();
        let mut machine = SelectionMachine::for_puzzle(&empty);
        assert!(machine.ended());
        let mut rng = seeded(4);
        assert_eq!(
            machine.handle(PointerEvent::Down(Position::new(0, 0)), &empty, &mut rng),
            SelectionOutcome::Ignored
        );
        assert!(!SelectionMachine::for_puzzle(&puzzle()).ended());
    }

}
