/*
timer.rs

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

//! Elapsed time of the game in progress.
//!
//! The session does not own a clock. It only tells an [`ElapsedTimer`] when to start (new game),
//! when to pause (the game ends), and when to reset (restart).

use std::time::{Duration, Instant};

/// Periodic counter driven by the session.
pub trait ElapsedTimer {
    /// Start or resume counting. Starting a running timer has no effect.
    fn start(&mut self);

    /// Stop counting and keep the elapsed time.
    fn pause(&mut self);

    /// Stop counting and set the elapsed time back to zero.
    fn reset(&mut self);

    fn elapsed(&self) -> Duration;

    fn is_running(&self) -> bool;
}

/// [`ElapsedTimer`] based on the monotonic clock.
#[derive(Debug, Default, Clone)]
pub struct Stopwatch {
    /// Time when the timer was last started, if it is running.
    start_time: Option<Instant>,

    /// Time counted before the last pause.
    pause_duration: Duration,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ElapsedTimer for Stopwatch {
    fn start(&mut self) {
        if self.start_time.is_none() {
            self.start_time = Some(Instant::now());
        }
    }

    fn pause(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.pause_duration += start.elapsed();
        }
    }

    fn reset(&mut self) {
        self.start_time = None;
        self.pause_duration = Duration::ZERO;
    }

    fn elapsed(&self) -> Duration {
        match self.start_time {
            Some(start) => self.pause_duration + start.elapsed(),
            None => self.pause_duration,
        }
    }

    fn is_running(&self) -> bool {
        self.start_time.is_some()
    }
}
