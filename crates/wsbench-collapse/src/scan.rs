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

//! Write-cursor candidates.
//!
//! Each function copies the input into a `Vec<char>` and compacts it in
//! place: `dst` never overtakes the read index, so the buffer can be reused
//! as the output.

use crate::is_collapse_whitespace;

/// Compacts `src` in place, keeping the first char of every run matched by
/// `is_blank` and rewriting it through `replace`.
#[inline]
fn compact<P, R>(input: &str, is_blank: P, replace: R) -> String
where
    P: Fn(char) -> bool,
    R: Fn(char) -> char,
{
    let mut src: Vec<char> = input.chars().collect();
    let mut dst = 0;
    let mut last_was_blank = false;

    for i in 0..src.len() {
        let ch = src[i];
        if is_blank(ch) {
            if !last_was_blank {
                src[dst] = replace(ch);
                dst += 1;
                last_was_blank = true;
            }
        } else {
            last_was_blank = false;
            src[dst] = ch;
            dst += 1;
        }
    }

    src[..dst].iter().collect()
}

/// Collapses runs of U+0020 and U+0085 (NEXT LINE), keeping the first char.
///
/// Tabs and line breaks pass through untouched.
pub fn match_space_nel_keep(input: &str) -> String {
    compact(input, |c| matches!(c, '\u{0020}' | '\u{0085}'), |c| c)
}

/// Collapses runs of U+0020 only.
pub fn scan_space_only(input: &str) -> String {
    compact(input, |c| c == ' ', |c| c)
}

/// Collapses runs of any whitespace, keeping the first char of each run.
///
/// `"a\r\nb"` becomes `"a\rb"`, not `"a b"`.
pub fn match_unicode_keep(input: &str) -> String {
    compact(input, is_collapse_whitespace, |c| c)
}

/// Collapses runs of any whitespace into one U+0020.
///
/// This is the reference form: leading and trailing runs are collapsed,
/// never removed.
pub fn match_unicode_to_space(input: &str) -> String {
    compact(input, is_collapse_whitespace, |_| ' ')
}
