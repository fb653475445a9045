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

//! Benchmark execution.
//!
//! [`BenchmarkRunner::run_benchmark`] times one candidate over the fixture
//! set and writes one report row. [`BenchmarkSuite`] measures the baseline,
//! prints the header and drives every registered candidate through the
//! runner in order.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};

use crate::candidate::{Candidate, CandidateRegistry};
use crate::config::{HarnessConfig, OutputFormat};
use crate::environment::Seed;
use crate::error::{BenchError, Result};
use crate::fixtures::{standard_fixtures, Fixture, WARM_UP_INDEX};
use crate::measurement::{Stopwatch, Ticks};
use crate::reporters::{console, json};

/// Number of times the timed block runs. Only the last reading is kept.
pub const REPETITIONS: usize = 10;

/// Outcome of timing one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkResult {
    /// Name shown in the report.
    pub name: String,
    /// Raw reading of the last repetition.
    pub elapsed_ticks: Ticks,
    /// `elapsed_ticks` minus the baseline; may be negative.
    pub reported_elapsed: Ticks,
    /// Pass/fail for each fixture after the warm-up one, in fixture order.
    pub passes: Vec<bool>,
    /// Character length of the candidate's output for the warm-up fixture.
    pub warm_up_len: usize,
}

impl BenchmarkResult {
    /// Returns a copy with `reported_elapsed` recomputed against `baseline`.
    pub fn rebased(&self, baseline: Ticks) -> Self {
        Self {
            reported_elapsed: self.elapsed_ticks.saturating_sub(baseline),
            ..self.clone()
        }
    }

    /// Returns whether every checked fixture passed.
    pub fn all_passed(&self) -> bool {
        self.passes.iter().all(|&pass| pass)
    }

    /// Returns the number of checked fixtures that passed.
    pub fn pass_count(&self) -> usize {
        self.passes.iter().filter(|&&pass| pass).count()
    }
}

/// Times candidates with one shared stopwatch.
#[derive(Debug)]
pub struct BenchmarkRunner {
    config: HarnessConfig,
    stopwatch: Stopwatch,
}

impl BenchmarkRunner {
    /// Creates a runner laying rows out according to `config`.
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            stopwatch: Stopwatch::new(),
        }
    }

    /// Times `candidate` and returns the result without writing anything.
    ///
    /// Each of the [`REPETITIONS`] rounds feeds the warm-up fixture to the
    /// candidate outside timing, then times one pass over every other
    /// fixture. The stopwatch is restarted each round, so the returned
    /// elapsed time is that of the final round. A panicking candidate is not
    /// caught.
    pub fn measure(
        &mut self,
        candidate: &Candidate,
        fixtures: &[Fixture],
        baseline_elapsed: Ticks,
        display_name: Option<&str>,
    ) -> Result<BenchmarkResult> {
        if fixtures.len() < 2 {
            return Err(BenchError::TooFewFixtures {
                count: fixtures.len(),
            });
        }

        let warm_up = &fixtures[WARM_UP_INDEX];
        let checked = &fixtures[WARM_UP_INDEX + 1..];
        let mut outputs = vec![String::new(); checked.len()];
        let mut warm_up_len = 0;

        for _ in 0..REPETITIONS {
            warm_up_len = candidate.invoke(&warm_up.input).chars().count();

            self.stopwatch.restart();
            for (slot, fixture) in outputs.iter_mut().zip(checked) {
                *slot = candidate.invoke(&fixture.input);
            }
            self.stopwatch.stop();
        }

        let elapsed_ticks = self.stopwatch.elapsed_ticks();
        let passes = checked
            .iter()
            .zip(&outputs)
            .map(|(fixture, output)| fixture.accepts(output))
            .collect();

        let result = BenchmarkResult {
            name: display_name.unwrap_or(candidate.name()).to_string(),
            elapsed_ticks,
            reported_elapsed: elapsed_ticks.saturating_sub(baseline_elapsed),
            passes,
            warm_up_len,
        };

        debug!(
            candidate = %result.name,
            elapsed_ticks = result.elapsed_ticks,
            reported = result.reported_elapsed,
            passed = result.pass_count(),
            checked = result.passes.len(),
            "candidate measured"
        );

        Ok(result)
    }

    /// Times `candidate` and writes exactly one report row to `out`.
    pub fn run_benchmark<W: Write>(
        &mut self,
        candidate: &Candidate,
        fixtures: &[Fixture],
        baseline_elapsed: Ticks,
        display_name: Option<&str>,
        out: &mut W,
    ) -> Result<BenchmarkResult> {
        let result = self.measure(candidate, fixtures, baseline_elapsed, display_name)?;
        console::write_row(out, &result, &self.config)?;
        Ok(result)
    }
}

/// Everything a suite run produced.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    /// Seed appended to the fixture strings.
    pub seed: Seed,
    /// Raw elapsed ticks of the baseline candidate.
    pub baseline_elapsed: Ticks,
    /// Labels of the checked fixtures, in column order.
    pub fixtures: Vec<String>,
    /// One result per candidate, in registration order.
    pub results: Vec<BenchmarkResult>,
}

impl SuiteReport {
    /// Returns the results that passed every fixture.
    pub fn fully_passing(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.results.iter().filter(|r| r.all_passed())
    }
}

/// A full benchmark run: baseline, header, then one row per candidate.
#[derive(Debug)]
pub struct BenchmarkSuite {
    seed: Seed,
    baseline: Candidate,
    fixtures: Vec<Fixture>,
    registry: CandidateRegistry,
    config: HarnessConfig,
}

impl BenchmarkSuite {
    /// Creates a suite over the standard fixtures for `seed`.
    ///
    /// The baseline returns the seed's decimal text.
    pub fn new(seed: Seed, registry: CandidateRegistry, config: HarnessConfig) -> Self {
        Self {
            seed,
            baseline: Candidate::baseline(seed.to_string()),
            fixtures: standard_fixtures(seed),
            registry,
            config,
        }
    }

    /// Replaces the fixture set.
    pub fn with_fixtures(mut self, fixtures: Vec<Fixture>) -> Self {
        self.fixtures = fixtures;
        self
    }

    /// Returns the fixture set.
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Runs the baseline and every selected candidate, reporting to `out`.
    ///
    /// In table format the header and one row per candidate are written as
    /// the run progresses. In JSON format nothing is written until the end.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<SuiteReport> {
        self.config.validate()?;
        let mut runner = BenchmarkRunner::new(self.config.clone());

        let baseline = runner.measure(&self.baseline, &self.fixtures, 0, None)?;
        info!(
            seed = self.seed,
            baseline_ticks = baseline.elapsed_ticks,
            registered = self.registry.len(),
            "baseline measured"
        );

        if self.config.format == OutputFormat::Table {
            console::write_header(out, &self.fixtures, &self.config)?;
        }

        let mut results = Vec::new();
        for candidate in self.registry.iter() {
            if !self.config.selects(candidate.name()) {
                continue;
            }
            let result = match self.config.format {
                OutputFormat::Table => runner.run_benchmark(
                    candidate,
                    &self.fixtures,
                    baseline.elapsed_ticks,
                    None,
                    out,
                )?,
                OutputFormat::Json => {
                    runner.measure(candidate, &self.fixtures, baseline.elapsed_ticks, None)?
                }
            };
            results.push(result);
        }

        let report = SuiteReport {
            seed: self.seed,
            baseline_elapsed: baseline.elapsed_ticks,
            fixtures: self.fixtures[WARM_UP_INDEX + 1..]
                .iter()
                .map(|f| f.label.clone())
                .collect(),
            results,
        };

        if self.config.format == OutputFormat::Json {
            json::write_report(out, &report)?;
        }

        info!(
            candidates = report.results.len(),
            fully_passing = report.fully_passing().count(),
            "suite complete"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn fixtures() -> Vec<Fixture> {
        vec![
            Fixture::new("warm-up", "warm  up", "warm  up"),
            Fixture::new("a", "a  b", "a b"),
            Fixture::new("b", "c", "c"),
        ]
    }

    #[test]
    fn test_invocation_count() {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);
        let candidate = Candidate::new("count", move |s| {
            counter.set(counter.get() + 1);
            s.to_string()
        });

        let mut runner = BenchmarkRunner::new(HarnessConfig::default());
        runner.measure(&candidate, &fixtures(), 0, None).unwrap();

        // warm-up + two checked fixtures, ten times over
        assert_eq!(calls.get(), REPETITIONS * 3);
    }

    #[test]
    fn test_too_few_fixtures_rejected_before_invoking() {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);
        let candidate = Candidate::new("count", move |s| {
            counter.set(counter.get() + 1);
            s.to_string()
        });

        let mut runner = BenchmarkRunner::new(HarnessConfig::default());
        let err = runner
            .measure(&candidate, &fixtures()[..1], 0, None)
            .unwrap_err();
        assert!(matches!(err, BenchError::TooFewFixtures { count: 1 }));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_display_name_override() {
        let candidate = Candidate::new("declared", |s| s.to_string());
        let mut runner = BenchmarkRunner::new(HarnessConfig::default());

        let result = runner.measure(&candidate, &fixtures(), 0, None).unwrap();
        assert_eq!(result.name, "declared");

        let result = runner
            .measure(&candidate, &fixtures(), 0, Some("override"))
            .unwrap();
        assert_eq!(result.name, "override");
    }

    #[test]
    fn test_last_repetition_output_is_checked() {
        // Correct only on the final round of checked invocations.
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);
        let candidate = Candidate::new("late", move |s| {
            counter.set(counter.get() + 1);
            if counter.get() > (REPETITIONS - 1) * 3 {
                s.replace("  ", " ")
            } else {
                String::from("wrong")
            }
        });

        let mut runner = BenchmarkRunner::new(HarnessConfig::default());
        let result = runner.measure(&candidate, &fixtures(), 0, None).unwrap();
        assert_eq!(result.passes, vec![true, true]);
    }

    #[test]
    fn test_rebased_on_itself_is_zero() {
        let result = BenchmarkResult {
            name: "x".to_string(),
            elapsed_ticks: 1234,
            reported_elapsed: 1234,
            passes: vec![true],
            warm_up_len: 3,
        };
        assert_eq!(result.rebased(result.elapsed_ticks).reported_elapsed, 0);
        assert_eq!(result.rebased(2000).reported_elapsed, -766);
    }

    #[test]
    fn test_pass_counts() {
        let result = BenchmarkResult {
            name: "x".to_string(),
            elapsed_ticks: 0,
            reported_elapsed: 0,
            passes: vec![true, false, true],
            warm_up_len: 0,
        };
        assert_eq!(result.pass_count(), 2);
        assert!(!result.all_passed());
    }
}
