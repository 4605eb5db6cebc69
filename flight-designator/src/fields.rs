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

//! Rules for the single parts of a flight designator.
//!
//! A designator is made of an airline code, a flight number and an optional
//! operational suffix. Each part is checked on its own by the functions of
//! this module. Letters are matched case-insensitive, except the suffix
//! letter a flight number may carry.

use std::ops::RangeInclusive;

/// The lowest flight number that can be assigned.
pub const MIN_FLIGHT_NUMBER: u32 = 1;

/// The highest flight number that can be assigned.
pub const MAX_FLIGHT_NUMBER: u32 = 9999;

/// The maximum number of digits of a flight number and the width a padded
/// flight number is formatted to.
pub const FLIGHT_NUMBER_WIDTH: usize = 4;

const FLIGHT_NUMBERS: RangeInclusive<u32> = MIN_FLIGHT_NUMBER..=MAX_FLIGHT_NUMBER;

/// Returns `true` if the airline code is two letters or digits optionally
/// followed by a third letter.
///
/// ```
/// use flight_designator::is_valid_airline_code;
///
/// assert!(is_valid_airline_code("LH"));
/// assert!(is_valid_airline_code("4U"));
/// assert!(is_valid_airline_code("klm"));
/// assert!(!is_valid_airline_code("LH1"));
/// assert!(!is_valid_airline_code("X"));
/// ```
pub fn is_valid_airline_code(code: &str) -> bool {
    match code.as_bytes() {
        [a, b] => a.is_ascii_alphanumeric() && b.is_ascii_alphanumeric(),
        [a, b, c] => {
            a.is_ascii_alphanumeric() && b.is_ascii_alphanumeric() && c.is_ascii_alphabetic()
        }
        _ => false,
    }
}

/// Returns `true` if the flight number is a run of one to four digits with a
/// value from 1 to 9999.
///
/// Leading zeros are allowed as long as the value is not zero. A single
/// trailing uppercase suffix letter, optionally separated by whitespace, is
/// tolerated. Unlike the other parts, a lowercase letter is rejected here.
///
/// ```
/// use flight_designator::is_valid_flight_number;
///
/// assert!(is_valid_flight_number("18"));
/// assert!(is_valid_flight_number("0018"));
/// assert!(is_valid_flight_number("18 C"));
/// assert!(!is_valid_flight_number("0000"));
/// assert!(!is_valid_flight_number("00001"));
/// assert!(!is_valid_flight_number("18c"));
/// ```
pub fn is_valid_flight_number(number: &str) -> bool {
    let Some((digits, rest)) = split_digits(number) else {
        return false;
    };

    let suffix = trim_separator(rest);
    matches!(suffix.as_bytes(), [] | [b'A'..=b'Z'])
        && digits
            .parse::<u32>()
            .is_ok_and(|value| FLIGHT_NUMBERS.contains(&value))
}

/// Returns `true` if the suffix is a single letter or not present at all.
///
/// ```
/// use flight_designator::is_valid_suffix;
///
/// assert!(is_valid_suffix(Some("C")));
/// assert!(is_valid_suffix(Some("")));
/// assert!(is_valid_suffix(None));
/// assert!(!is_valid_suffix(Some("1")));
/// assert!(!is_valid_suffix(Some("AB")));
/// ```
pub fn is_valid_suffix(suffix: Option<&str>) -> bool {
    match suffix.map(str::as_bytes) {
        None | Some([]) => true,
        Some([letter]) => letter.is_ascii_alphabetic(),
        Some(_) => false,
    }
}

/// Returns `true` for the whitespace allowed between the parts of a
/// designator.
///
/// These are the white space and line terminator characters of ECMAScript,
/// which differ from [`char::is_whitespace`] in U+0085 and U+FEFF.
pub(crate) fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Removes leading separators.
pub(crate) fn trim_separator(s: &str) -> &str {
    s.trim_start_matches(is_separator)
}

/// Splits the leading run of one to four ASCII digits from the rest of the
/// string.
pub(crate) fn split_digits(s: &str) -> Option<(&str, &str)> {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();

    if (1..=FLIGHT_NUMBER_WIDTH).contains(&len) {
        Some(s.split_at(len))
    } else {
        None
    }
}

/// Reads the integer at the start of the string, ignoring leading whitespace
/// and anything after the digits.
///
/// Returns `None` if there are no digits or the value doesn't fit.
pub(crate) fn leading_number(s: &str) -> Option<u32> {
    let s = trim_separator(s);
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    s[..len].parse().ok()
}
