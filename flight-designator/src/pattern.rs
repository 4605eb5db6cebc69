// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::fields::{is_valid_airline_code, is_valid_suffix, split_digits, trim_separator};

/// The segments of a well-formed flight designator.
///
/// The segments reference the scanned string. A well-formed designator has
/// the shape
///
/// ```text
/// AIRLINE [whitespace] DIGITS [whitespace] [SUFFIX]
/// ```
///
/// where the airline code has two or three characters, the flight number one
/// to four digits and the suffix at most one letter. The value of the flight
/// number is not checked, thus `XY0000` is well-formed.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub(crate) struct Parts<'a> {
    pub airline: &'a str,
    pub number: &'a str,
    /// Empty if the designator has no suffix.
    pub suffix: &'a str,
}

impl<'a> Parts<'a> {
    /// Splits the string into its segments.
    ///
    /// Returns `None` if the string is not a well-formed flight designator.
    pub fn split(s: &'a str) -> Option<Self> {
        // the longer airline code is tried first, e.g. KLM645 is KLM and 645
        Self::split_at_airline(s, 3).or_else(|| Self::split_at_airline(s, 2))
    }

    fn split_at_airline(s: &'a str, len: usize) -> Option<Self> {
        let airline = s.get(..len)?;

        if !is_valid_airline_code(airline) {
            return None;
        }

        let (number, rest) = split_digits(trim_separator(&s[len..]))?;
        let suffix = trim_separator(rest);

        if is_valid_suffix(Some(suffix)) {
            Some(Self {
                airline,
                number,
                suffix,
            })
        } else {
            None
        }
    }
}
