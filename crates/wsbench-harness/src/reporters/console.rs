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

//! Fixed-width table reporter.
//!
//! ```text
//! |                           | Time  |   TEST 1    |   TEST 2    |
//! | Function Name             |(ticks)| dup. spaces | spaces+tabs |
//! |---------------------------|-------|-------------|-------------|
//! | match_unicode_to_space    |   812 |    PASS     |    PASS     |79|
//! ```
//!
//! Each row ends with the candidate's warm-up output length.

use std::io::{self, Write};

use crate::config::HarnessConfig;
use crate::fixtures::{Fixture, WARM_UP_INDEX};
use crate::runner::BenchmarkResult;

/// Pads or truncates `text` to exactly `width` chars, left aligned.
fn fit_left(text: &str, width: usize) -> String {
    format!("{:<width$.width$}", text, width = width)
}

/// Centres `text` in `width` chars, truncating when it is wider.
fn fit_centre(text: &str, width: usize) -> String {
    format!("{:^width$.width$}", text, width = width)
}

/// Renders the three header lines for the checked fixtures.
pub fn format_header(fixtures: &[Fixture], config: &HarnessConfig) -> Vec<String> {
    let checked = fixtures.get(WARM_UP_INDEX + 1..).unwrap_or_default();
    let elapsed_col = config.elapsed_width + 1;

    let mut titles = format!(
        "| {} |{}|",
        fit_left("", config.name_width),
        fit_centre("Time", elapsed_col)
    );
    let mut labels = format!(
        "| {} |{}|",
        fit_left("Function Name", config.name_width),
        fit_centre("(ticks)", elapsed_col)
    );
    let mut rule = format!(
        "|{}|{}|",
        "-".repeat(config.name_width + 2),
        "-".repeat(elapsed_col)
    );

    for (i, fixture) in checked.iter().enumerate() {
        titles.push_str(&fit_centre(&format!("TEST {}", i + 1), config.cell_width));
        titles.push('|');
        labels.push_str(&fit_centre(&fixture.label, config.cell_width));
        labels.push('|');
        rule.push_str(&"-".repeat(config.cell_width));
        rule.push('|');
    }

    vec![titles, labels, rule]
}

/// Renders one result row.
pub fn format_row(result: &BenchmarkResult, config: &HarnessConfig) -> String {
    let mut row = format!(
        "| {} |{:>width$} |",
        fit_left(&result.name, config.name_width),
        result.reported_elapsed,
        width = config.elapsed_width
    );

    for &pass in &result.passes {
        row.push_str(&fit_centre(if pass { "PASS" } else { "FAIL" }, config.cell_width));
        row.push('|');
    }

    row.push_str(&result.warm_up_len.to_string());
    row.push('|');
    row
}

/// Writes the header lines.
pub fn write_header<W: Write>(
    out: &mut W,
    fixtures: &[Fixture],
    config: &HarnessConfig,
) -> io::Result<()> {
    for line in format_header(fixtures, config) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Writes one result row as a single line.
pub fn write_row<W: Write>(
    out: &mut W,
    result: &BenchmarkResult,
    config: &HarnessConfig,
) -> io::Result<()> {
    writeln!(out, "{}", format_row(result, config))?;
    out.flush()
}
