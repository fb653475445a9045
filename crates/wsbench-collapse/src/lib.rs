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

//! Whitespace collapse candidates
//!
//! Interchangeable implementations of one operation: collapse every run of
//! whitespace in a string into a single space. Each candidate is a plain
//! `fn(&str) -> String` with no shared state, so the benchmark harness can
//! treat them as black boxes.
//!
//! The candidates disagree on the details. Some only recognise
//! U+0020, some keep the first whitespace character of a run instead of
//! writing a space, and some trim the ends. Only [`match_unicode_to_space`]
//! and [`regex_ws_uncompiled`] produce the canonical form for every input;
//! the others are there to be compared against it.
//!
//! # Families
//!
//! - [`scan`]: char buffer rewritten in place behind a write cursor
//! - [`builder`]: output accumulated into a fresh `String`
//! - [`pattern`]: regular expression replacement
//!
//! # Examples
//!
//! ```
//! use wsbench_collapse::match_unicode_to_space;
//!
//! assert_eq!(match_unicode_to_space("That car\r\nis  fast."), "That car is fast.");
//! assert_eq!(match_unicode_to_space("  "), " ");
//! ```

pub mod builder;
pub mod pattern;
pub mod scan;

pub use builder::{ascii_blank_trim, is_whitespace_keep, split_join_spaces, trim_then_collapse};
pub use pattern::{regex_compiled_spaces, regex_ws_runs, regex_ws_uncompiled};
pub use scan::{match_space_nel_keep, match_unicode_keep, match_unicode_to_space, scan_space_only};

/// Signature shared by every candidate.
pub type CollapseFn = fn(&str) -> String;

/// Every candidate, in the order they are benchmarked.
pub const CANDIDATES: &[(&str, CollapseFn)] = &[
    ("match_space_nel_keep", match_space_nel_keep),
    ("scan_space_only", scan_space_only),
    ("match_unicode_keep", match_unicode_keep),
    ("match_unicode_to_space", match_unicode_to_space),
    ("ascii_blank_trim", ascii_blank_trim),
    ("is_whitespace_keep", is_whitespace_keep),
    ("split_join_spaces", split_join_spaces),
    ("regex_compiled_spaces", regex_compiled_spaces),
    ("trim_then_collapse", trim_then_collapse),
    ("regex_ws_runs", regex_ws_runs),
    ("regex_ws_uncompiled", regex_ws_uncompiled),
];

/// Returns whether `c` belongs to the whitespace set the candidates collapse.
///
/// The set is the Unicode `White_Space` property spelled out as literals:
/// the ASCII controls U+0009..=U+000D, U+0020, NEXT LINE, NO-BREAK SPACE,
/// OGHAM SPACE MARK, the U+2000..=U+200A typographic spaces, the line and
/// paragraph separators, NARROW NO-BREAK SPACE, MEDIUM MATHEMATICAL SPACE
/// and IDEOGRAPHIC SPACE.
#[inline]
pub fn is_collapse_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{0085}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}
