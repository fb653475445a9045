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

//! Regular expression candidates.
//!
//! [`regex_compiled_spaces`] reuses one pattern compiled on first use. The
//! other two compile their pattern on every call, which is part of what they
//! measure.

use once_cell::sync::Lazy;
use regex::Regex;

static MULTIPLE_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" {2,}").expect("regex must be valid"));

/// Replaces runs of two or more U+0020 with one space.
pub fn regex_compiled_spaces(input: &str) -> String {
    MULTIPLE_SPACES.replace_all(input, " ").into_owned()
}

/// Replaces runs of two or more whitespace chars with one space.
///
/// A lone tab or newline survives as-is.
pub fn regex_ws_runs(input: &str) -> String {
    replace_uncached(r"\s{2,}", input)
}

/// Replaces every whitespace run, including single chars, with one space.
pub fn regex_ws_uncompiled(input: &str) -> String {
    replace_uncached(r"\s+", input)
}

fn replace_uncached(pattern: &str, input: &str) -> String {
    // Both call sites pass literal patterns.
    let re = Regex::new(pattern).expect("regex must be valid");
    re.replace_all(input, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_pattern_builds() {
        let _ = &*MULTIPLE_SPACES;
    }

    #[test]
    fn test_regex_compiled_spaces() {
        assert_eq!(regex_compiled_spaces("a    b"), "a b");
        assert_eq!(regex_compiled_spaces("a\t\tb"), "a\t\tb");
    }

    #[test]
    fn test_regex_ws_runs_leaves_single_tab() {
        assert_eq!(regex_ws_runs("It\twas  so"), "It\twas so");
        assert_eq!(regex_ws_runs("car\r\nis"), "car is");
    }

    #[test]
    fn test_regex_ws_uncompiled() {
        assert_eq!(regex_ws_uncompiled("It\twas\t \tso"), "It was so");
        assert_eq!(regex_ws_uncompiled(" "), " ");
        assert_eq!(regex_ws_uncompiled("\u{2003}\u{2003}x"), " x");
    }
}
