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

//! Command-line arguments and the benchmark command.
//!
//! Running `wsbench` with no arguments prepares the environment, measures
//! the baseline and prints the comparison table. The flags only narrow or
//! reshape that run.

use std::io;

use clap::{Parser, ValueEnum};
use tracing::info;
use wsbench_harness::config::DEFAULT_PIN_CORE;
use wsbench_harness::{
    environment, BenchmarkSuite, CandidateRegistry, HarnessConfig, OutputFormat,
};

/// Report format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Fixed-width text table
    Table,
    /// Pretty-printed JSON
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => OutputFormat::Table,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// wsbench - compare whitespace collapse implementations
///
/// Times every candidate over a fixed fixture set, subtracts the harness
/// overhead measured with a trivial baseline, and marks each fixture PASS or
/// FAIL.
#[derive(Debug, Parser)]
#[command(name = "wsbench")]
#[command(author, version, about = "wsbench - compare whitespace collapse implementations", long_about = None)]
pub struct Cli {
    /// Leave processor affinity and priorities untouched
    #[arg(long)]
    pub no_pin: bool,

    /// Core to pin the process to
    #[arg(long, value_name = "INDEX", default_value_t = DEFAULT_PIN_CORE, conflicts_with = "no_pin")]
    pub core: usize,

    /// Only run candidates whose name contains this text
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

impl Cli {
    /// Builds the harness configuration described by the arguments.
    pub fn config(&self) -> HarnessConfig {
        let mut config = HarnessConfig::default()
            .with_pin_core((!self.no_pin).then_some(self.core))
            .with_format(self.format.into());
        if let Some(filter) = &self.filter {
            config = config.with_filter(filter.clone());
        }
        config
    }

    /// Runs the benchmark and writes the report to stdout.
    pub fn execute(self) -> wsbench_harness::Result<()> {
        let config = self.config();
        config.validate()?;

        let env = environment::prepare(config.pin_core);
        info!(
            seed = env.seed,
            affinity = %env.affinity,
            process_priority = %env.process_priority,
            thread_priority = %env.thread_priority,
            "environment ready"
        );

        let suite = BenchmarkSuite::new(env.seed, CandidateRegistry::standard(), config);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        suite.run(&mut out)?;
        Ok(())
    }
}
