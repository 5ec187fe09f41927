/*
catalog.rs

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

//! Word lists and crossword clues.
//!
//! A few themed word lists are provided at build time.
//! Word lists can also be read from text files: one word per line, blank lines and lines starting
//! with `#` are ignored.

use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error while loading a word list.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("cannot read the word list {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("the word list {0:?} does not contain any word")]
    Empty(PathBuf),
}

/// Themed word list.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    pub words: &'static [&'static str],
}

/// Crossword clue and its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clue {
    pub question: &'static str,
    pub answer: &'static str,
}

static THEMES: [Theme; 4] = [
    Theme {
        name: "Animals",
        words: &[
            "BADGER", "BEAVER", "CAMEL", "DONKEY", "EAGLE", "FALCON", "GIRAFFE", "HAMSTER",
            "JAGUAR", "KOALA", "LEOPARD", "LIZARD", "OTTER", "PANDA", "RABBIT", "SALMON",
            "TIGER", "TURTLE", "WALRUS", "ZEBRA",
        ],
    },
    Theme {
        name: "Fruits",
        words: &[
            "APPLE", "APRICOT", "AVOCADO", "BANANA", "CHERRY", "COCONUT", "FIG", "GRAPE",
            "GUAVA", "KIWI", "LEMON", "LIME", "MANGO", "MELON", "OLIVE", "ORANGE", "PAPAYA",
            "PEACH", "PEAR", "PLUM",
        ],
    },
    Theme {
        name: "Countries",
        words: &[
            "BRAZIL", "CANADA", "CHILE", "CHINA", "EGYPT", "FRANCE", "GHANA", "GREECE",
            "INDIA", "ITALY", "JAPAN", "KENYA", "MEXICO", "NEPAL", "NORWAY", "PERU",
            "PORTUGAL", "SPAIN", "SWEDEN", "TURKEY",
        ],
    },
    Theme {
        name: "Computing",
        words: &[
            "ARRAY", "BINARY", "BUFFER", "CACHE", "COMPILER", "CURSOR", "DEBUG", "FLOAT",
            "KERNEL", "LINKER", "MEMORY", "MODULE", "PARSER", "POINTER", "QUEUE", "SOCKET",
            "STACK", "STRING", "THREAD", "VECTOR",
        ],
    },
];

/// Crossword clues. Answers cover the lengths 3 to 11.
static CLUES: [Clue; 27] = [
    Clue { question: "Feline pet", answer: "CAT" },
    Clue { question: "Opposite of no", answer: "YES" },
    Clue { question: "Star of the solar system", answer: "SUN" },
    Clue { question: "Frozen water", answer: "ICE" },
    Clue { question: "Planet we live on", answer: "EARTH" },
    Clue { question: "Large body of salt water", answer: "OCEAN" },
    Clue { question: "Yellow curved fruit", answer: "BANANA" },
    Clue { question: "Season after spring", answer: "SUMMER" },
    Clue { question: "Colour of the clear sky", answer: "BLUE" },
    Clue { question: "Shines at night", answer: "MOON" },
    Clue { question: "Baked bread shop", answer: "BAKERY" },
    Clue { question: "Vehicle with two wheels", answer: "BICYCLE" },
    Clue { question: "Day after Monday", answer: "TUESDAY" },
    Clue { question: "Musical instrument with keys", answer: "PIANO" },
    Clue { question: "Device that keeps food cold", answer: "FREEZER" },
    Clue { question: "Stick used to write on a blackboard", answer: "CHALK" },
    Clue { question: "Book of maps", answer: "ATLAS" },
    Clue { question: "Person who flies a plane", answer: "AVIATOR" },
    Clue { question: "Sport played with a round ball and goals", answer: "FOOTBALL" },
    Clue { question: "Place with many books", answer: "LIBRARY" },
    Clue { question: "Room where food is cooked", answer: "KITCHEN" },
    Clue { question: "Tool that shows north", answer: "COMPASS" },
    Clue { question: "Celebration of a birth date", answer: "BIRTHDAY" },
    Clue { question: "Building where films are shown", answer: "CINEMA" },
    Clue { question: "Scientist who studies the stars", answer: "ASTRONOMER" },
    Clue { question: "Guide for travellers", answer: "TOURGUIDE" },
    Clue { question: "Study of the past", answer: "ARCHAEOLOGY" },
];

/// Return the built-in themes.
pub fn themes() -> &'static [Theme] {
    &THEMES
}

/// Return the theme with the given name, ignoring case.
pub fn find_theme(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Return the clues indexed by the length of their answer.
pub fn clues_by_length() -> BTreeMap<usize, Vec<Clue>> {
    let mut map: BTreeMap<usize, Vec<Clue>> = BTreeMap::new();
    for clue in CLUES {
        map.entry(clue.answer.chars().count()).or_default().push(clue);
    }
    map
}

/// Parse a word list: one word per line, in any case.
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_uppercase)
        .collect()
}

/// Read a word list from a file.
///
/// # Errors
///
/// The function returns an error if the file cannot be read or does not contain any word.
pub fn load_word_list(path: &Path) -> Result<Vec<String>, WordListError> {
    let content: String = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words: Vec<String> = parse_word_list(&content);
    debug!("Loaded {} words from {path:?}", words.len());
    if words.is_empty() {
        return Err(WordListError::Empty(path.to_path_buf()));
    }
    Ok(words)
}
