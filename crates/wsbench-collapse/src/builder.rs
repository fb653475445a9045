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

//! Candidates that build a fresh `String`.

/// Turns runs of `\r`, `\n`, `\t` and U+0020 into one space, then trims.
///
/// Trimming means a whitespace-only input collapses to the empty string.
pub fn ascii_blank_trim(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_blanks = false;

    for c in input.chars() {
        match c {
            '\r' | '\n' | '\t' | ' ' => {
                if !in_blanks {
                    in_blanks = true;
                    out.push(' ');
                }
            }
            _ => {
                in_blanks = false;
                out.push(c);
            }
        }
    }

    out.trim().to_string()
}

/// Collapses `char::is_whitespace` runs, keeping the first char of each run.
pub fn is_whitespace_keep(input: &str) -> String {
    let mut out = String::new();
    let mut in_whitespace = false;

    for c in input.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push(c);
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
            out.push(c);
        }
    }

    out
}

/// Trims the input, then turns every whitespace run into one space.
pub fn trim_then_collapse(input: &str) -> String {
    let trimmed = input.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut in_whitespace = false;

    for c in trimmed.chars() {
        if c.is_whitespace() {
            if in_whitespace {
                continue;
            }
            out.push(' ');
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }

    out
}

/// Splits on U+0020, drops empty pieces and joins with single spaces.
///
/// Leading and trailing spaces disappear along with the empty pieces.
pub fn split_join_spaces(input: &str) -> String {
    input
        .split(' ')
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
