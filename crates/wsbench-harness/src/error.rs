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

//! Error types for benchmark runs.
//!
//! A mismatching candidate output is not an error; it is a `FAIL` cell in
//! the report. A panicking candidate is not an error either: the panic is
//! left to unwind through the harness and end the run.

use std::io;
use thiserror::Error;

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while running or reporting a benchmark.
#[derive(Error, Debug)]
pub enum BenchError {
    /// The fixture set has no fixture left after the warm-up one.
    #[error("benchmark needs a warm-up fixture and at least one checked fixture, got {count}")]
    TooFewFixtures {
        /// Number of fixtures supplied
        count: usize,
    },

    /// Invalid configuration parameter.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Writing to the report surface failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialising a report failed.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl BenchError {
    /// Creates an [`BenchError::InvalidConfig`] error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        BenchError::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::Serialize(err.to_string())
    }
}
