/*
session.rs

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

//! Manage the game in progress.
//!
//! A [`GameSession`] generates the puzzle for the configured game, routes the player's events to
//! the matching board, and drives the elapsed-time counter:
//!
//! * the timer starts with the game,
//! * it pauses once, when the game ends,
//! * it is reset and started again when the game restarts.
//!
//! When the game ends, a [`GameSummary`] is available for the end-of-game screen.

use chrono::{DateTime, Local};
use clap::ValueEnum;
use log::{debug, info, warn};
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use strum_macros::FromRepr;
use thiserror::Error;

use crate::crossword::{CrosswordBoard, CrosswordPuzzle, KeyEvent};
use crate::generator::catalog;
use crate::generator::word_placement::{WordPlacementGenerator, WordSearchPuzzle};
use crate::nonogram::{Mark, NonogramEvent, NonogramPuzzle, Outcome, STARTING_HINTS};
use crate::random_source::{self, RandomSource};
use crate::selection::{FoundWord, PointerEvent, SelectionMachine, SelectionOutcome};
use crate::timer::{ElapsedTimer, Stopwatch};

/// Smallest grid side.
pub const MIN_SIZE: usize = 4;

/// Largest grid side for word-search and nonogram games.
pub const MAX_SIZE: usize = 30;

/// Largest grid side for crosswords. Answers have at most one letter less.
pub const MAX_CROSSWORD_SIZE: usize = 12;

/// Puzzle difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl Difficulty {
    /// Number of words to hide in a word-search grid.
    pub fn word_count(self) -> usize {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Medium => 10,
            Difficulty::Hard => 15,
        }
    }

    /// Probability for a nonogram cell to be part of the solution. Denser grids are easier.
    pub fn fill_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Medium => 0.6,
            Difficulty::Hard => 0.5,
        }
    }

    /// Default grid width and height for the game.
    pub fn dimensions(self, kind: GameKind) -> (usize, usize) {
        match (kind, self) {
            (GameKind::WordSearch, Difficulty::Easy) => (10, 10),
            (GameKind::WordSearch, Difficulty::Medium) => (12, 12),
            (GameKind::WordSearch, Difficulty::Hard) => (15, 15),
            (GameKind::Nonogram, Difficulty::Easy) => (5, 5),
            (GameKind::Nonogram, Difficulty::Medium) => (10, 10),
            (GameKind::Nonogram, Difficulty::Hard) => (15, 15),
            (GameKind::Crossword, Difficulty::Easy) => (8, 8),
            (GameKind::Crossword, Difficulty::Medium) => (10, 12),
            (GameKind::Crossword, Difficulty::Hard) => (12, 12),
        }
    }
}

/// Game types.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
pub enum GameKind {
    #[default]
    WordSearch,
    Nonogram,
    Crossword,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameKind::WordSearch => write!(f, "word search"),
            GameKind::Nonogram => write!(f, "nonogram"),
            GameKind::Crossword => write!(f, "crossword"),
        }
    }
}

/// Invalid game configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid size {size} is out of range ({min} to {max})")]
    SizeOutOfRange { size: usize, min: usize, max: usize },

    #[error("fill probability {0} must be greater than 0 and at most 1")]
    FillProbability(f64),

    #[error("unknown theme {0:?}")]
    UnknownTheme(String),

    #[error("the word list is empty")]
    EmptyWordList,

    #[error("invalid game code {0:?}: expected <kind>-<difficulty>-<seed>")]
    InvalidGameCode(String),
}

/// Parameters of a new game.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct GameConfig {
    pub kind: GameKind,
    pub difficulty: Difficulty,

    /// Grid side, instead of the difficulty default.
    pub size: Option<usize>,

    /// Seed of the random source. A random seed is drawn when not provided.
    pub seed: Option<u64>,

    /// Nonogram fill probability, instead of the difficulty default.
    pub fill_probability: Option<f64>,

    /// Candidate words for word-search games.
    pub words: Option<Vec<String>>,

    /// Name of a built-in word list, used when no word is provided.
    /// A random theme is selected when neither words nor theme are provided.
    pub theme: Option<String>,
}

impl GameConfig {
    /// Create a [`GameConfig`] object with the difficulty defaults.
    pub fn new(kind: GameKind, difficulty: Difficulty) -> Self {
        Self {
            kind,
            difficulty,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_fill_probability(mut self, p: f64) -> Self {
        self.fill_probability = Some(p);
        self
    }

    pub fn with_words(mut self, words: Vec<String>) -> Self {
        self.words = Some(words);
        self
    }

    pub fn with_theme(mut self, theme: &str) -> Self {
        self.theme = Some(theme.to_string());
        self
    }

    /// Create a [`GameConfig`] object from a code returned by [`GameSession::game_code`].
    ///
    /// The code only holds the game type, the difficulty level, and the seed, so it reproduces
    /// games that use the default size and word list.
    ///
    /// # Errors
    ///
    /// The function returns an error if the code is malformed or if an index does not match a
    /// game type or a difficulty level.
    pub fn from_game_code(code: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidGameCode(code.to_string());
        let mut parts = code.trim().split('-');
        let (Some(kind), Some(difficulty), Some(seed), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let kind: GameKind = kind
            .parse::<i32>()
            .ok()
            .and_then(GameKind::from_repr)
            .ok_or_else(invalid)?;
        let difficulty: Difficulty = difficulty
            .parse::<i32>()
            .ok()
            .and_then(Difficulty::from_repr)
            .ok_or_else(invalid)?;
        let seed: u64 = seed.parse().map_err(|_| invalid())?;
        Ok(Self::new(kind, difficulty).with_seed(seed))
    }

    /// Grid width and height.
    pub fn dimensions(&self) -> (usize, usize) {
        match self.size {
            Some(s) => (s, s),
            None => self.difficulty.dimensions(self.kind),
        }
    }

    /// Nonogram fill probability.
    pub fn fill_probability(&self) -> f64 {
        self.fill_probability
            .unwrap_or_else(|| self.difficulty.fill_probability())
    }

    /// Verify the parameters.
    ///
    /// # Errors
    ///
    /// Return an error for a grid size out of range, a fill probability outside `(0, 1]`, an
    /// unknown theme, or an empty word list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max: usize = match self.kind {
            GameKind::Crossword => MAX_CROSSWORD_SIZE,
            _ => MAX_SIZE,
        };
        let (width, height) = self.dimensions();
        for size in [width, height] {
            if !(MIN_SIZE..=max).contains(&size) {
                return Err(ConfigError::SizeOutOfRange {
                    size,
                    min: MIN_SIZE,
                    max,
                });
            }
        }

        let p: f64 = self.fill_probability();
        if !(p > 0.0 && p <= 1.0) {
            return Err(ConfigError::FillProbability(p));
        }

        if let Some(words) = &self.words
            && words.iter().all(|w| w.trim().is_empty())
        {
            return Err(ConfigError::EmptyWordList);
        }
        if let Some(theme) = &self.theme
            && catalog::find_theme(theme).is_none()
        {
            return Err(ConfigError::UnknownTheme(theme.clone()));
        }
        Ok(())
    }

    /// Return the candidate words: the provided words, else the theme words, else the words of a
    /// random theme.
    fn resolve_words(&self, rng: &mut impl RandomSource) -> Vec<String> {
        if let Some(words) = &self.words {
            return words.clone();
        }
        let theme: &catalog::Theme = match self.theme.as_deref().and_then(catalog::find_theme) {
            Some(t) => t,
            None => &catalog::themes()[rng.below(catalog::themes().len())],
        };
        debug!("Using the {} theme", theme.name);
        theme.words.iter().map(|w| w.to_string()).collect()
    }
}

/// Board of the game in progress.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Board {
    WordSearch {
        puzzle: WordSearchPuzzle,
        selection: SelectionMachine,
    },
    Nonogram(NonogramPuzzle),
    Crossword(CrosswordBoard),
}

impl Board {
    fn ended(&self) -> bool {
        match self {
            Board::WordSearch { selection, .. } => selection.ended(),
            Board::Nonogram(n) => n.ended(),
            Board::Crossword(c) => c.ended(),
        }
    }
}

/// Events that the interface sends to the session.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Word-search selection.
    Pointer(PointerEvent),

    /// Nonogram moves.
    Nonogram(NonogramEvent),

    /// Crossword input.
    Key(KeyEvent),

    /// Ask for a hint.
    Hint,
}

/// Effect of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventResult {
    /// Result of a word-search pointer event.
    pub selection: Option<SelectionOutcome>,

    /// Whether this event ended the game.
    pub just_ended: bool,
}

/// What the end-of-game screen displays.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub kind: GameKind,
    pub difficulty: Difficulty,
    pub seed: u64,
    pub outcome: Outcome,

    /// Playing time.
    pub elapsed: Duration,

    /// Nonogram only.
    pub lives_remaining: Option<usize>,

    /// Nonogram only.
    pub hints_used: Option<usize>,

    /// Words found, solution cells filled, or crossword entries solved.
    pub solved: usize,

    /// Words placed, solution cells, or crossword entries.
    pub total: usize,

    pub finished_at: DateTime<Local>,
}

/// Game in progress.
#[derive(Debug)]
pub struct GameSession<T: ElapsedTimer = Stopwatch> {
    config: GameConfig,

    /// Candidate words, resolved once per session so that a restart uses the same list.
    words: Vec<String>,

    /// Seed of the current game.
    seed: u64,

    rng: StdRng,
    board: Board,
    timer: T,

    /// Available once the game has ended.
    summary: Option<GameSummary>,
}

impl GameSession<Stopwatch> {
    /// Create a game that uses the monotonic clock.
    ///
    /// # Errors
    ///
    /// The function returns an error if the configuration is not valid.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_timer(config, Stopwatch::new())
    }
}

impl<T: ElapsedTimer> GameSession<T> {
    /// Create a game that uses the given timer.
    ///
    /// # Errors
    ///
    /// The function returns an error if the configuration is not valid.
    pub fn with_timer(config: GameConfig, mut timer: T) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed: u64 = config.seed.unwrap_or_else(random_source::fresh_seed);
        let mut rng: StdRng = random_source::seeded(seed);
        let words: Vec<String> = match config.kind {
            GameKind::WordSearch => config.resolve_words(&mut rng),
            _ => Vec::new(),
        };
        let board: Board = Self::build_board(&config, &words, &mut rng);

        timer.reset();
        timer.start();
        info!(
            "New {} game ({}) with seed {seed}",
            config.kind, config.difficulty
        );
        let mut session: Self = Self {
            config,
            words,
            seed,
            rng,
            board,
            timer,
            summary: None,
        };
        if session.board.ended() {
            session.finish();
        }
        Ok(session)
    }

    /// Generate the puzzle.
    fn build_board(config: &GameConfig, words: &[String], rng: &mut StdRng) -> Board {
        let (width, height) = config.dimensions();
        match config.kind {
            GameKind::WordSearch => {
                let mut generator: WordPlacementGenerator =
                    WordPlacementGenerator::new(width, config.difficulty.word_count());
                let puzzle: WordSearchPuzzle = generator.generate(words, rng);
                if puzzle.placed_count() == 0 {
                    warn!("No word could be placed in the grid: the game is over");
                }
                Board::WordSearch {
                    selection: SelectionMachine::for_puzzle(&puzzle),
                    puzzle,
                }
            }
            GameKind::Nonogram => Board::Nonogram(NonogramPuzzle::new_game(
                width,
                config.fill_probability(),
                rng,
            )),
            GameKind::Crossword => Board::Crossword(CrosswordBoard::new(
                CrosswordPuzzle::generate(&catalog::clues_by_length(), width, height, rng),
            )),
        }
    }

    /// Discard the game and generate a new one with a fresh seed.
    pub fn restart(&mut self) {
        self.seed = self.rng.random();
        self.rng = random_source::seeded(self.seed);
        self.board = Self::build_board(&self.config, &self.words, &mut self.rng);
        self.summary = None;
        self.timer.reset();
        self.timer.start();
        info!("Restarted {} game with seed {}", self.config.kind, self.seed);
        if self.board.ended() {
            self.finish();
        }
    }

    /// Process an event from the interface.
    ///
    /// Events that do not apply to the current game are ignored.
    pub fn handle(&mut self, event: GameEvent) -> EventResult {
        let was_ended: bool = self.board.ended();
        let mut selection: Option<SelectionOutcome> = None;

        match (&mut self.board, event) {
            (Board::WordSearch { puzzle, selection: machine }, GameEvent::Pointer(e)) => {
                selection = Some(machine.handle(e, puzzle, &mut self.rng));
            }
            (Board::Nonogram(nonogram), GameEvent::Nonogram(e)) => {
                nonogram.handle(e, &mut self.rng);
            }
            (Board::Nonogram(nonogram), GameEvent::Hint) => nonogram.use_hint(&mut self.rng),
            (Board::Crossword(crossword), GameEvent::Key(e)) => crossword.handle(e),
            (_, e) => debug!("Ignoring {e:?} in a {} game", self.config.kind),
        }

        let just_ended: bool = !was_ended && self.board.ended();
        if just_ended {
            self.finish();
        }
        EventResult {
            selection,
            just_ended,
        }
    }

    /// Stop the timer and record the summary. Called once, when the game ends.
    fn finish(&mut self) {
        self.timer.pause();
        let summary: GameSummary = self.build_summary();
        info!(
            "Game over: {:?} in {}s ({}/{})",
            summary.outcome,
            summary.elapsed.as_secs(),
            summary.solved,
            summary.total
        );
        self.summary = Some(summary);
    }

    fn build_summary(&self) -> GameSummary {
        let (solved, total) = self.progress();
        GameSummary {
            kind: self.config.kind,
            difficulty: self.config.difficulty,
            seed: self.seed,
            outcome: self.outcome(),
            elapsed: self.timer.elapsed(),
            lives_remaining: self.lives_remaining(),
            hints_used: self.hints_remaining().map(|h| STARTING_HINTS - h),
            solved,
            total,
            finished_at: Local::now(),
        }
    }

    /// Return the number of solved items and the total number of items.
    pub fn progress(&self) -> (usize, usize) {
        match &self.board {
            Board::WordSearch { puzzle, selection } => {
                (selection.found_words().len(), puzzle.placed_count())
            }
            Board::Nonogram(n) => {
                let total: usize = n.solution().cells().iter().filter(|c| **c).count();
                let solved: usize = n
                    .solution()
                    .cells()
                    .iter()
                    .zip(n.marks().cells())
                    .filter(|(filled, mark)| **filled && **mark == Mark::Filled)
                    .count();
                (solved, total)
            }
            Board::Crossword(c) => (c.solved_entries(), c.puzzle().entries.len()),
        }
    }

    /// Whether the game is won or lost.
    pub fn ended(&self) -> bool {
        self.board.ended()
    }

    pub fn outcome(&self) -> Outcome {
        match &self.board {
            Board::Nonogram(n) => n.outcome(),
            board if board.ended() => Outcome::Won,
            _ => Outcome::InProgress,
        }
    }

    /// Remaining lives, for games with lives.
    pub fn lives_remaining(&self) -> Option<usize> {
        match &self.board {
            Board::Nonogram(n) => Some(n.lives()),
            _ => None,
        }
    }

    /// Remaining hints, for games with hints.
    pub fn hints_remaining(&self) -> Option<usize> {
        match &self.board {
            Board::Nonogram(n) => Some(n.hints_remaining()),
            _ => None,
        }
    }

    /// Words found so far. Empty for games other than word search.
    pub fn found_words(&self) -> &[FoundWord] {
        match &self.board {
            Board::WordSearch { selection, .. } => selection.found_words(),
            _ => &[],
        }
    }

    /// Number of words hidden in the word-search grid.
    pub fn placed_count(&self) -> Option<usize> {
        match &self.board {
            Board::WordSearch { puzzle, .. } => Some(puzzle.placed_count()),
            _ => None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Return the code that [`GameConfig::from_game_code`] accepts to replay this game.
    pub fn game_code(&self) -> String {
        format!(
            "{}-{}-{}",
            self.config.kind as i32, self.config.difficulty as i32, self.seed
        )
    }

    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// End-of-game summary, once the game has ended.
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::grid::Position;
    use crate::nonogram::DrawType;
    use crate::selection::{ColorChoice, PaletteColor};

    /// Timer that counts the calls it receives.
    #[derive(Debug, Default)]
    struct CountingTimer {
        starts: usize,
        pauses: usize,
        resets: usize,
        running: bool,
    }

    impl ElapsedTimer for CountingTimer {
        fn start(&mut self) {
            self.starts += 1;
            self.running = true;
        }

        fn pause(&mut self) {
            self.pauses += 1;
            self.running = false;
        }

        fn reset(&mut self) {
            self.resets += 1;
            self.running = false;
        }

        fn elapsed(&self) -> Duration {
            Duration::from_secs(42)
        }

        fn is_running(&self) -> bool {
            self.running
        }
    }

    fn find_all_words(session: &mut GameSession<CountingTimer>) -> Vec<EventResult> {
        let placed = match session.board() {
            Board::WordSearch { puzzle, .. } => puzzle.placed.clone(),
            _ => panic!("not a word search"),
        };
        let mut results: Vec<EventResult> = Vec::new();
        for p in placed {
            let cells: Vec<Position> = p.cells();
            session.handle(GameEvent::Pointer(PointerEvent::Down(cells[0])));
            results.push(session.handle(GameEvent::Pointer(PointerEvent::Up(
                cells[cells.len() - 1],
                ColorChoice::Palette(PaletteColor::Orange),
            ))));
        }
        results
    }

    #[test]
    fn test_config_validation() {
        let config = GameConfig::new(GameKind::Nonogram, Difficulty::Easy);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(
            config.clone().with_size(2).validate(),
            Err(ConfigError::SizeOutOfRange {
                size: 2,
                min: MIN_SIZE,
                max: MAX_SIZE
            })
        );
        assert_eq!(
            config.clone().with_fill_probability(0.0).validate(),
            Err(ConfigError::FillProbability(0.0))
        );
        assert_eq!(
            GameConfig::new(GameKind::Crossword, Difficulty::Hard)
                .with_size(13)
                .validate(),
            Err(ConfigError::SizeOutOfRange {
                size: 13,
                min: MIN_SIZE,
                max: MAX_CROSSWORD_SIZE
            })
        );
        assert_eq!(
            config.clone().with_theme("planets").validate(),
            Err(ConfigError::UnknownTheme("planets".to_string()))
        );
        assert_eq!(
            config.with_words(vec![" ".to_string()]).validate(),
            Err(ConfigError::EmptyWordList)
        );
    }

    #[test]
    fn test_word_search_session_ends_once() {
        let config = GameConfig::new(GameKind::WordSearch, Difficulty::Easy)
            .with_theme("fruits")
            .with_seed(11);
        let mut session = GameSession::with_timer(config, CountingTimer::default())
            .expect("valid configuration");
        assert_eq!(session.timer().starts, 1);
        let placed: usize = session.placed_count().expect("word search");
        assert!(placed > 0);

        let results = find_all_words(&mut session);
        assert_eq!(results.iter().filter(|r| r.just_ended).count(), 1);
        assert!(results.last().is_some_and(|r| r.just_ended));
        assert!(session.ended());
        assert_eq!(session.outcome(), Outcome::Won);
        assert_eq!(session.found_words().len(), placed);
        assert_eq!(session.timer().pauses, 1);

        let summary = session.summary().expect("summary after the end");
        assert_eq!(summary.solved, placed);
        assert_eq!(summary.total, placed);
        assert_eq!(summary.elapsed, Duration::from_secs(42));
        assert_eq!(summary.lives_remaining, None);

        // Further events do not pause the timer again
        session.handle(GameEvent::Pointer(PointerEvent::Down(Position::new(0, 0))));
        assert_eq!(session.timer().pauses, 1);
    }

    #[test]
    fn test_nonogram_session_loses_after_three_mistakes() {
        let config = GameConfig::new(GameKind::Nonogram, Difficulty::Medium).with_seed(5);
        let mut session = GameSession::with_timer(config, CountingTimer::default())
            .expect("valid configuration");
        let empty: Vec<usize> = match session.board() {
            Board::Nonogram(n) => (0..n.solution().len())
                .filter(|i| !n.solution().cells()[*i])
                .collect(),
            _ => panic!("not a nonogram"),
        };
        assert!(empty.len() >= 3);

        for cell in &empty[..3] {
            session.handle(GameEvent::Nonogram(NonogramEvent::Press {
                cell: *cell,
                draw: DrawType::Fill,
            }));
            session.handle(GameEvent::Nonogram(NonogramEvent::Release));
        }
        assert!(session.ended());
        assert_eq!(session.outcome(), Outcome::Lost);
        assert_eq!(session.lives_remaining(), Some(0));
        assert_eq!(session.timer().pauses, 1);
        assert_eq!(
            session.summary().map(|s| s.outcome),
            Some(Outcome::Lost)
        );
    }

    #[test]
    fn test_hint_event_reaches_the_nonogram() {
        let config = GameConfig::new(GameKind::Nonogram, Difficulty::Hard).with_seed(9);
        let mut session = GameSession::new(config).expect("valid configuration");
        session.handle(GameEvent::Hint);
        assert_eq!(session.hints_remaining(), Some(STARTING_HINTS - 1));
        assert_eq!(session.progress().0, 1);
    }

    #[test]
    fn test_mismatched_events_are_ignored() {
        let config = GameConfig::new(GameKind::Crossword, Difficulty::Medium).with_seed(3);
        let mut session = GameSession::new(config).expect("valid configuration");
        let before = session.board().clone();
        let result = session.handle(GameEvent::Hint);
        session.handle(GameEvent::Pointer(PointerEvent::Down(Position::new(0, 0))));
        assert_eq!(session.board(), &before);
        assert!(!result.just_ended);
        assert_eq!(session.hints_remaining(), None);
        assert!(session.found_words().is_empty());
    }

    #[test]
    fn test_restart_draws_a_new_game() {
        let config = GameConfig::new(GameKind::Nonogram, Difficulty::Medium).with_seed(21);
        let mut session = GameSession::with_timer(config, CountingTimer::default())
            .expect("valid configuration");
        session.handle(GameEvent::Hint);
        let first_seed: u64 = session.seed();

        session.restart();
        assert_ne!(session.seed(), first_seed);
        assert_eq!(session.hints_remaining(), Some(STARTING_HINTS));
        assert!(session.summary().is_none());
        assert_eq!(session.timer().resets, 2);
        assert_eq!(session.timer().starts, 2);
        assert!(session.timer().is_running());
    }

    #[test]
    fn test_same_seed_same_session() {
        let config = GameConfig::new(GameKind::WordSearch, Difficulty::Hard).with_seed(77);
        let a = GameSession::new(config.clone()).expect("valid configuration");
        let b = GameSession::new(config).expect("valid configuration");
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_unplaceable_words_end_the_game_at_once() {
        let config = GameConfig::new(GameKind::WordSearch, Difficulty::Easy)
            .with_words(vec!["ABCDEFGHIJKLMNOP".to_string()])
            .with_seed(1);
        let mut session = GameSession::with_timer(config, CountingTimer::default())
            .expect("valid configuration");
        assert_eq!(session.placed_count(), Some(0));
        assert!(session.ended());
        assert_eq!(session.progress(), (0, 0));
        assert_eq!(session.timer().pauses, 1);
        assert_eq!(session.summary().map(|s| s.outcome), Some(Outcome::Won));

        // The game stays over and the timer is not paused again
        let result = session.handle(GameEvent::Pointer(PointerEvent::Down(Position::new(0, 0))));
        assert!(!result.just_ended);
        assert_eq!(result.selection, Some(SelectionOutcome::Ignored));
        assert_eq!(session.timer().pauses, 1);

        session.restart();
        assert!(session.ended());
        assert_eq!(session.timer().pauses, 2);
        assert!(session.summary().is_some());
    }

    #[test]
    fn test_game_code_replays_the_game() {
        let config = GameConfig::new(GameKind::Nonogram, Difficulty::Hard).with_seed(1234);
        let session = GameSession::new(config).expect("valid configuration");
        assert_eq!(session.game_code(), "1-2-1234");

        let replay_config = GameConfig::from_game_code(&session.game_code()).expect("valid code");
        assert_eq!(replay_config.kind, GameKind::Nonogram);
        assert_eq!(replay_config.difficulty, Difficulty::Hard);
        let replay = GameSession::new(replay_config).expect("valid configuration");
        assert_eq!(replay.board(), session.board());
    }

    #[test]
    fn test_malformed_game_codes_are_rejected() {
        for code in ["", "0-1", "0-1-2-3", "3-0-5", "0-7-5", "a-b-c", "0-1--5"] {
            assert_eq!(
                GameConfig::from_game_code(code),
                Err(ConfigError::InvalidGameCode(code.to_string())),
                "{code:?}"
            );
        }
        assert_eq!(
            GameConfig::from_game_code(" 2-0-99 ").map(|c| (c.kind, c.difficulty, c.seed)),
            Ok((GameKind::Crossword, Difficulty::Easy, Some(99)))
        );
    }

}
