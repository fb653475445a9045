// wsbench - Whitespace Collapse Benchmark
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Stopwatch for the timed block.
//!
//! One tick is 100 ns of [`Instant`] time. Ticks are signed so that
//! baseline-relative values can go negative. Readings of 100 ms or more no
//! longer fit the six-digit column and widen their row.

use std::time::{Duration, Instant};

/// Elapsed time in ticks of [`NANOS_PER_TICK`] nanoseconds.
pub type Ticks = i64;

/// Length of one tick.
pub const NANOS_PER_TICK: u128 = 100;

/// Converts a duration to whole ticks, saturating at `Ticks::MAX`.
#[inline]
pub fn to_ticks(duration: Duration) -> Ticks {
    Ticks::try_from(duration.as_nanos() / NANOS_PER_TICK).unwrap_or(Ticks::MAX)
}

/// A restartable stopwatch.
///
/// The harness shares one instance across every repetition and candidate;
/// each [`restart`](Stopwatch::restart) discards the previous reading.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
    elapsed: Duration,
}

impl Stopwatch {
    /// Creates a stopped stopwatch reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the reading to zero and starts timing.
    #[inline]
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.started = Some(Instant::now());
    }

    /// Stops timing and folds the running interval into the reading.
    ///
    /// Stopping a stopped stopwatch leaves the reading alone.
    #[inline]
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed += started.elapsed();
        }
    }

    /// Returns the current reading, including a running interval.
    pub fn elapsed(&self) -> Duration {
        match self.started {
            Some(started) => self.elapsed + started.elapsed(),
            None => self.elapsed,
        }
    }

    /// Returns the current reading in ticks.
    pub fn elapsed_ticks(&self) -> Ticks {
        to_ticks(self.elapsed())
    }
}
