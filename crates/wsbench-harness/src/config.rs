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

//! Harness configuration.
//!
//! The repetition count is not configurable: it is the fixed
//! [`REPETITIONS`](crate::runner::REPETITIONS) constant. Everything here is
//! report layout or environment preparation.

use crate::error::{BenchError, Result};

/// Width of the function name column.
pub const DEFAULT_NAME_WIDTH: usize = 25;

/// Minimum width of the elapsed ticks column.
pub const DEFAULT_ELAPSED_WIDTH: usize = 6;

/// Width of every PASS/FAIL column.
pub const DEFAULT_CELL_WIDTH: usize = 13;

/// Core the process is pinned to unless told otherwise.
pub const DEFAULT_PIN_CORE: usize = 1;

/// Output format for a suite run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Fixed-width text table.
    #[default]
    Table,
    /// Pretty-printed JSON suite report.
    Json,
}

/// Configuration for a benchmark suite run.
///
/// # Example
///
/// ```
/// use wsbench_harness::config::{HarnessConfig, OutputFormat};
///
/// let config = HarnessConfig::default()
///     .with_pin_core(None)
///     .with_filter("regex")
///     .with_format(OutputFormat::Json);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Width of the name column; longer names are truncated.
    pub name_width: usize,
    /// Minimum width of the right-aligned elapsed column.
    pub elapsed_width: usize,
    /// Width of each PASS/FAIL cell.
    pub cell_width: usize,
    /// Core to pin the process to; `None` skips all scheduling hints.
    pub pin_core: Option<usize>,
    /// Only candidates whose name contains this substring run.
    pub filter: Option<String>,
    /// How the suite report is rendered.
    pub format: OutputFormat,
}

impl HarnessConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            name_width: DEFAULT_NAME_WIDTH,
            elapsed_width: DEFAULT_ELAPSED_WIDTH,
            cell_width: DEFAULT_CELL_WIDTH,
            pin_core: Some(DEFAULT_PIN_CORE),
            filter: None,
            format: OutputFormat::Table,
        }
    }

    /// Sets the core to pin to, or disables environment preparation.
    pub fn with_pin_core(mut self, core: Option<usize>) -> Self {
        self.pin_core = core;
        self
    }

    /// Restricts the run to candidates whose name contains `filter`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the name column width.
    pub fn with_name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    /// Returns whether a candidate name passes the filter.
    pub fn selects(&self, name: &str) -> bool {
        self.filter
            .as_deref()
            .map_or(true, |filter| name.contains(filter))
    }

    /// Checks the layout widths.
    pub fn validate(&self) -> Result<()> {
        if self.name_width == 0 {
            return Err(BenchError::invalid_config("name_width", "must be positive"));
        }
        if self.elapsed_width == 0 {
            return Err(BenchError::invalid_config("elapsed_width", "must be positive"));
        }
        if self.cell_width < "FAIL".len() {
            return Err(BenchError::invalid_config(
                "cell_width",
                format!("must be at least {}", "FAIL".len()),
            ));
        }
        Ok(())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new()
    }
}
