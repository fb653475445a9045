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

//! The input/expected-output fixture set.
//!
//! Fixture 0 is the warm-up fixture: its input is fed to each candidate once
//! per repetition for a diagnostic length, but it is never timed or checked.

use serde::Serialize;

/// Index of the warm-up fixture.
pub const WARM_UP_INDEX: usize = 0;

/// An input paired with the output a correct candidate produces for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture {
    /// Column title in the report header.
    pub label: String,
    /// Text handed to the candidate.
    pub input: String,
    /// Exact output expected back.
    pub expected: String,
}

impl Fixture {
    /// Creates a fixture.
    pub fn new(
        label: impl Into<String>,
        input: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            input: input.into(),
            expected: expected.into(),
        }
    }

    /// Returns whether `output` matches the expected output exactly.
    #[inline]
    pub fn accepts(&self, output: &str) -> bool {
        self.expected == output
    }
}

/// Builds the standard fixture set with `seed` appended to every string.
///
/// The suffix makes the strings unique to the run so no candidate result can
/// be computed ahead of time.
pub fn standard_fixtures(seed: u64) -> Vec<Fixture> {
    let suffix = seed.to_string();
    let fixture = |label: &str, input: &str, expected: &str| {
        Fixture::new(
            label,
            format!("{input}{suffix}"),
            format!("{expected}{suffix}"),
        )
    };

    let warm_up = "This is   a Warm ONLY up function for\tbest   \r\n benchmark results.";

    vec![
        fixture("warm-up", warm_up, warm_up),
        fixture(
            "dup. spaces",
            "Hello World,    how are   you           doing?",
            "Hello World, how are you doing?",
        ),
        fixture(
            "spaces+tabs",
            "It\twas\t \tso    nice  to\t\t see you \tin 1950.  \t",
            "It was so nice to see you in 1950. ",
        ),
        fixture(
            "spaces+CR/LF",
            "That car\r\nis sooooooooo     fast.",
            "That car is sooooooooo fast.",
        ),
        fixture("\"  \" -> \" \"", "  ", " "),
        fixture("\" \" -> \" \"", " ", " "),
    ]
}
