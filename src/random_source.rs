/*
random_source.rs

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

//! Source of randomness for the generators and the game boards.
//!
//! Every stochastic step draws from a [`RandomSource`], so that a seeded source reproduces a
//! puzzle exactly.
//! Any [`rand::RngCore`] generator is a [`RandomSource`]; sessions use a
//! [`rand::rngs::StdRng`] seeded from a `u64` so the seed can be logged and replayed.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Seedable source of uniformly distributed values.
pub trait RandomSource {
    /// Return a value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Return an index in `0..n`.
    ///
    /// `n` must be greater than zero.
    fn below(&mut self, n: usize) -> usize {
        let i: usize = (self.next_f64() * n as f64) as usize;
        i.min(n.saturating_sub(1))
    }

    /// Return `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

impl<R: RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Create a generator from a seed.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw a seed from the operating system entropy (through the thread generator).
pub fn fresh_seed() -> u64 {
    rand::rng().random()
}

/// Replay a fixed list of values, in a loop.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    values: Vec<f64>,
    index: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            index: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        let v: f64 = self.values[self.index % self.values.len()];
        self.index += 1;
        v
    }
}
