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

//! wsbench benchmark harness
//!
//! Times interchangeable whitespace-collapse candidates against one shared
//! fixture set, checks their outputs and reports comparable rows.
//!
//! ## Flow
//!
//! 1. [`environment::configure`] pins the process, raises priorities
//!    (best effort) and returns the run seed.
//! 2. [`fixtures::standard_fixtures`] builds the seed-suffixed fixtures.
//! 3. [`BenchmarkSuite::run`] measures the baseline, prints the header and
//!    runs every candidate through [`BenchmarkRunner::run_benchmark`].
//!
//! ## Usage
//!
//! ```no_run
//! use wsbench_harness::{environment, BenchmarkSuite, CandidateRegistry, HarnessConfig};
//!
//! # fn main() -> wsbench_harness::Result<()> {
//! let config = HarnessConfig::default();
//! let seed = environment::configure(config.pin_core);
//! let suite = BenchmarkSuite::new(seed, CandidateRegistry::standard(), config);
//! suite.run(&mut std::io::stdout().lock())?;
//! # Ok(())
//! # }
//! ```
//!
//! Timing uses a fixed number of repetitions; the last one wins and the
//! baseline's reading is subtracted.

pub mod candidate;
pub mod config;
pub mod environment;
pub mod error;
pub mod fixtures;
pub mod measurement;
pub mod reporters;
pub mod runner;

pub use candidate::{Candidate, CandidateFn, CandidateRegistry};
pub use config::{HarnessConfig, OutputFormat};
pub use environment::{configure, prepare, EnvironmentReport, HintOutcome, Seed};
pub use error::{BenchError, Result};
pub use fixtures::{standard_fixtures, Fixture};
pub use measurement::{Stopwatch, Ticks};
pub use runner::{BenchmarkResult, BenchmarkRunner, BenchmarkSuite, SuiteReport, REPETITIONS};
