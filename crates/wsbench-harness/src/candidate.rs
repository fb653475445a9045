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

//! Candidates and the ordered candidate registry.
//!
//! A candidate pairs a display name with a boxed transform. The registry is
//! an explicit `Vec` built once at startup; registration order is report
//! order.

use std::fmt;
use wsbench_collapse::CANDIDATES;

/// A transform under benchmark.
pub type CandidateFn = Box<dyn Fn(&str) -> String>;

/// A named whitespace-collapsing function.
pub struct Candidate {
    name: String,
    implementation: CandidateFn,
}

impl Candidate {
    /// Creates a candidate from any `Fn(&str) -> String`.
    pub fn new<F>(name: impl Into<String>, implementation: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        Self {
            name: name.into(),
            implementation: Box::new(implementation),
        }
    }

    /// Creates the baseline candidate.
    ///
    /// It ignores its input and returns `constant`, so timing it measures
    /// only the harness loop and the output slot writes.
    pub fn baseline(constant: impl Into<String>) -> Self {
        let constant = constant.into();
        Self::new("BASELINE", move |_| constant.clone())
    }

    /// Returns the declared display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the transform.
    #[inline]
    pub fn invoke(&self, input: &str) -> String {
        (self.implementation)(input)
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate").field("name", &self.name).finish()
    }
}

/// Ordered collection of candidates.
#[derive(Debug, Default)]
pub struct CandidateRegistry {
    candidates: Vec<Candidate>,
}

impl CandidateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every candidate of `wsbench-collapse`.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (name, f) in CANDIDATES {
            registry.register(Candidate::new(*name, *f));
        }
        registry
    }

    /// Appends a candidate.
    pub fn register(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    /// Appends a candidate built from a name and a closure.
    pub fn register_fn<F>(&mut self, name: &str, f: F)
    where
        F: Fn(&str) -> String + 'static,
    {
        self.register(Candidate::new(name, f));
    }

    /// Iterates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Returns the number of registered candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns whether no candidate is registered.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
