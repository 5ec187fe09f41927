/*
cli_options.rs

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

//! Process command-line options.
//!
//! In command-line mode, Gridplay generates puzzles and prints them as text or JSON.
//! With `--play`, it also solves each puzzle by sending the expected events to the game session
//! and prints the end-of-game summary.
//!
//! # Examples
//!
//! List the built-in word lists:
//!
//! ```
//! $ gridplay --ls
//! Animals (20 words)
//! Fruits (20 words)
//! Countries (20 words)
//! Computing (20 words)
//! ```
//!
//! Generate and solve three hard nonograms of 20 x 20 cells, and print some statistics:
//!
//! ```
//! $ gridplay -g nonogram -f hard --size 20 -c 3 --play --summary
//! ```
//!
//! Each puzzle comes with a game code. Replay a puzzle from its code:
//!
//! ```
//! $ gridplay --code 1-2-1234
//! ```

use clap::Parser;
use log::{debug, error};
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use gridplay::crossword::{CrosswordBoard, KeyEvent};
use gridplay::generator::catalog;
use gridplay::generator::grid::Position;
use gridplay::nonogram::{DrawType, Mark, NonogramEvent, NonogramPuzzle};
use gridplay::selection::{ColorChoice, PointerEvent};
use gridplay::session::{Board, Difficulty, GameConfig, GameEvent, GameKind, GameSession};

/// Generate grid puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// List the built-in word lists
    #[arg(long, default_value_t = false)]
    ls: bool,

    /// Type of puzzle to generate
    #[arg(value_enum, short, long, default_value_t = GameKind::WordSearch)]
    game: GameKind,

    /// Difficulty level for the puzzle
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Grid side, instead of the difficulty default
    #[arg(long)]
    size: Option<usize>,

    /// Seed of the random generator, to reproduce a puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Game code printed with a previous puzzle, to replay it. Replaces the game type, the
    /// difficulty level, and the seed
    #[arg(long, conflicts_with = "seed")]
    code: Option<String>,

    /// Probability for a nonogram cell to be filled
    #[arg(short, long)]
    probability: Option<f64>,

    /// File with the words to hide, one word per line
    #[arg(short, long, conflicts_with = "theme")]
    words: Option<PathBuf>,

    /// Built-in word list to use
    #[arg(short, long)]
    theme: Option<String>,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Solve the puzzles and print the game summary
    #[arg(long, default_value_t = false)]
    play: bool,

    /// Print the puzzles in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the word lists
    //
    if args.ls {
        for theme in catalog::themes() {
            println!("{} ({} words)", theme.name, theme.words.len());
        }
        return 0;
    }

    //
    // Build the game configuration
    //
    let mut config: GameConfig = match &args.code {
        Some(code) => match GameConfig::from_game_code(code) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        },
        None => {
            let mut c: GameConfig = GameConfig::new(args.game, args.difficulty);
            c.seed = args.seed;
            c
        }
    };
    config.size = args.size;
    config.fill_probability = args.probability;
    config.theme = args.theme;
    if let Some(path) = &args.words {
        match catalog::load_word_list(path) {
            Ok(words) => config.words = Some(words),
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
    }

    let start: Instant = Instant::now();
    let mut session: GameSession = match GameSession::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}. Use --help for the valid values.");
            return 1;
        }
    };

    let count: usize = args.count.max(1);
    let mut duration: f32 = start.elapsed().as_secs_f32();
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut solved: usize = 0;
    let mut items: usize = 0;
    let mut i: usize = 0;
    loop {
        debug!("Puzzle {i} generated with seed {}", session.seed());
        total += duration;
        if duration > max {
            max = duration;
        }

        if args.play {
            play(&mut session);
        }
        let (s, t) = session.progress();
        solved += s;
        items += t;

        if let Err(e) = print_session(&session, args.json, args.play) {
            error!("Cannot serialize the puzzle: {e}");
            return 1;
        }

        i += 1;
        if i >= count {
            break;
        }
        let restart_time: Instant = Instant::now();
        session.restart();
        duration = restart_time.elapsed().as_secs_f32();
    }

    // Print some stats
    if args.summary {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
    average solved = {}
     average items = {}",
            total,
            total / count as f32,
            max,
            solved / count,
            items / count,
        );
    }
    0
}

/// Print the board, and the summary when the game has ended.
fn print_session(session: &GameSession, json: bool, play: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(session.board())?);
        if let Some(summary) = session.summary() {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
        return Ok(());
    }

    println!(
        "\n# {} {} (code {})",
        session.config().kind,
        session.config().difficulty,
        session.game_code()
    );
    match session.board() {
        Board::WordSearch { puzzle, .. } => {
            for y in 0..puzzle.grid.height() {
                let row: Vec<String> =
                    puzzle.grid.row(y).iter().map(|c| c.to_string()).collect();
                println!("{}", row.join(" "));
            }
            println!();
            for word in &puzzle.placed {
                if play {
                    println!(
                        "{} at ({}, {}) {}",
                        word.word, word.origin.x, word.origin.y, word.direction
                    );
                } else {
                    println!("{}", word.word);
                }
            }
        }
        Board::Nonogram(nonogram) => print_nonogram(nonogram),
        Board::Crossword(crossword) => print_crossword(crossword),
    }

    if let Some(summary) = session.summary() {
        println!(
            "\n{:?} in {}s: {}/{} solved, finished at {}",
            summary.outcome,
            summary.elapsed.as_secs(),
            summary.solved,
            summary.total,
            summary.finished_at.format("%Y-%m-%d %H:%M:%S")
        );
        if let (Some(lives), Some(hints)) = (summary.lives_remaining, summary.hints_used) {
            println!("{lives} lives left, {hints} hints used");
        }
    }
    Ok(())
}

fn print_nonogram(nonogram: &NonogramPuzzle) {
    let hints = nonogram.hints();
    let row_width: usize = hints.rows.iter().map(|h| h.len()).max().unwrap_or(0) * 2;
    let depth: usize = hints.columns.iter().map(|h| h.len()).max().unwrap_or(0);

    // Column hints are aligned at the bottom
    for level in 0..depth {
        let mut line: String = " ".repeat(row_width + 1);
        for hint in &hints.columns {
            let skip: usize = depth - hint.len();
            match level.checked_sub(skip) {
                Some(k) => line.push_str(&format!("{:>3}", hint[k])),
                None => line.push_str("   "),
            }
        }
        println!("{line}");
    }

    for (y, hint) in hints.rows.iter().enumerate() {
        let numbers: Vec<String> = hint.iter().map(|n| n.to_string()).collect();
        let mut line: String = format!("{:>row_width$} ", numbers.join(" "));
        for mark in nonogram.marks().row(y) {
            let symbol: char = match mark {
                Mark::Unmarked => '.',
                Mark::Filled => '#',
                Mark::Crossed => 'x',
                Mark::Wrong => '!',
            };
            line.push_str(&format!("{symbol:>3}"));
        }
        println!("{line}");
    }
}

fn print_crossword(crossword: &CrosswordBoard) {
    let puzzle = crossword.puzzle();
    for y in 0..puzzle.height {
        let mut line: Vec<char> = Vec::with_capacity(puzzle.width);
        for x in 0..puzzle.width {
            let pos: Position = Position::new(x, y);
            if pos == puzzle.clue_cell {
                line.push('?');
            } else {
                line.push(crossword.letters().get(pos).copied().flatten().unwrap_or('.'));
            }
        }
        let cells: Vec<String> = line.iter().map(|c| c.to_string()).collect();
        println!("{}", cells.join(" "));
    }
    println!();
    for entry in &puzzle.entries {
        println!(
            "{:?} ({} letters): {}",
            entry.direction,
            entry.answer.chars().count(),
            entry.question
        );
    }
}

/// Solve the puzzle by sending the events a player would send.
fn play(session: &mut GameSession) {
    if matches!(session.board(), Board::Crossword(_)) {
        play_crossword(session);
        return;
    }
    let mut events: Vec<GameEvent> = Vec::new();
    match session.board() {
        Board::WordSearch { puzzle, .. } => {
            for word in &puzzle.placed {
                let cells = word.cells();
                if let (Some(first), Some(last)) = (cells.first(), cells.last()) {
                    events.push(GameEvent::Pointer(PointerEvent::Down(*first)));
                    events.push(GameEvent::Pointer(PointerEvent::Up(
                        *last,
                        ColorChoice::Rainbow,
                    )));
                }
            }
        }
        Board::Nonogram(nonogram) => {
            for (cell, filled) in nonogram.solution().cells().iter().enumerate() {
                if *filled {
                    events.push(GameEvent::Nonogram(NonogramEvent::Press {
                        cell,
                        draw: DrawType::Fill,
                    }));
                    events.push(GameEvent::Nonogram(NonogramEvent::Release));
                }
            }
        }
        Board::Crossword(_) => (),
    }
    for event in events {
        session.handle(event);
    }
}

/// Type each answer, switching the typing direction when needed.
fn play_crossword(session: &mut GameSession) {
    let entries = match session.board() {
        Board::Crossword(c) => c.puzzle().entries.clone(),
        _ => return,
    };
    for entry in entries {
        session.handle(GameEvent::Key(KeyEvent::Click(entry.start)));
        if let Board::Crossword(c) = session.board()
            && c.direction() != entry.direction
        {
            session.handle(GameEvent::Key(KeyEvent::ToggleDirection));
        }
        for letter in entry.answer.chars() {
            session.handle(GameEvent::Key(KeyEvent::Letter(letter)));
        }
    }
}
