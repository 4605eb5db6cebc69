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

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::fields::*;
use crate::pattern::Parts;

/// A flight designator of an airline code, flight number and optional
/// operational suffix.
///
/// A designator is parsed from a string like `LH2054` or `AS 33 C`. The parsed
/// airline code and suffix are kept as typed and are uppercased only when the
/// designator is formatted.
///
/// ```
/// use flight_designator::FlightDesignator;
///
/// # fn main() -> Result<(), flight_designator::Error> {
/// let designator: FlightDesignator = "lh0018c".parse()?;
///
/// assert_eq!(designator.airline_code(), Some("lh"));
/// assert_eq!(designator.flight_number(), Some(18));
/// assert_eq!(designator.operational_suffix(), Some("c"));
///
/// assert_eq!(designator.to_string(), "LH18C");
/// assert_eq!(designator.to_formatted(true, true), "LH 0018 C");
/// #     Ok(())
/// # }
/// ```
///
/// A designator can also be composed [`from_parts`](FlightDesignator::from_parts)
/// which are not checked until [`is_valid`](FlightDesignator::is_valid) is
/// called.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FlightDesignator {
    airline_code: Option<String>,
    flight_number: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, with = "empty_suffix"))]
    operational_suffix: Option<String>,
}

impl FlightDesignator {
    /// Creates an empty designator which is not valid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Composes a designator from its parts without validating them.
    ///
    /// The flight number is read from the leading digits of `number` and
    /// becomes `None` if there are none. Empty strings are the same as a
    /// missing part.
    ///
    /// ```
    /// use flight_designator::FlightDesignator;
    ///
    /// let designator = FlightDesignator::from_parts(Some("XY"), Some("0000"), Some("1"));
    /// assert_eq!(designator.flight_number(), Some(0));
    /// assert!(!designator.is_valid());
    /// ```
    pub fn from_parts(airline: Option<&str>, number: Option<&str>, suffix: Option<&str>) -> Self {
        Self {
            airline_code: non_empty(airline),
            flight_number: number.and_then(leading_number),
            operational_suffix: non_empty(suffix),
        }
    }

    /// The airline code as it was typed.
    pub fn airline_code(&self) -> Option<&str> {
        self.airline_code.as_deref().filter(|s| !s.is_empty())
    }

    pub fn flight_number(&self) -> Option<u32> {
        self.flight_number
    }

    /// The operational suffix as it was typed or `None` if the designator has
    /// no suffix.
    pub fn operational_suffix(&self) -> Option<&str> {
        self.operational_suffix.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns `true` if every part of this designator is valid.
    ///
    /// The airline code and flight number must be present while the suffix
    /// is optional.
    pub fn is_valid(&self) -> bool {
        self.airline_code().is_some_and(is_valid_airline_code)
            && self
                .flight_number
                .is_some_and(|number| is_valid_flight_number(&number.to_string()))
            && is_valid_suffix(self.operational_suffix())
    }

    /// Formats this designator.
    ///
    /// The airline code and suffix are uppercased. With `spaces` the parts are
    /// separated by a single space and with `pad` the flight number is padded
    /// with leading zeros to four digits.
    ///
    /// Returns an empty string if the airline code or flight number is missing
    /// or the flight number is zero.
    pub fn to_formatted(&self, spaces: bool, pad: bool) -> String {
        let (Some(airline), Some(number)) = (
            self.airline_code(),
            self.flight_number.filter(|&number| number != 0),
        ) else {
            return String::new();
        };

        let mut parts = vec![
            airline.to_uppercase(),
            if pad {
                format!("{number:0width$}", width = FLIGHT_NUMBER_WIDTH)
            } else {
                number.to_string()
            },
        ];

        if let Some(suffix) = self.operational_suffix() {
            parts.push(suffix.to_uppercase());
        }

        parts.join(if spaces { " " } else { "" })
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_owned)
}

/// A missing suffix is written as empty string and an empty string is read
/// as missing suffix.
#[cfg(feature = "serde")]
mod empty_suffix {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(suffix: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(suffix.as_deref().unwrap_or_default())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let suffix = Option::<String>::deserialize(deserializer)?;
        Ok(super::non_empty(suffix.as_deref()))
    }
}

impl FromStr for FlightDesignator {
    type Err = Error;

    /// Parses a string `s` to return a FlightDesignator.
    ///
    /// # Errors
    ///
    /// Returns [`Malformed`] if `s` doesn't have the shape of a flight
    /// designator and [`InvalidFlightNumber`] if the flight number is zero.
    ///
    /// [`Malformed`]: Error::Malformed
    /// [`InvalidFlightNumber`]: Error::InvalidFlightNumber
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = Parts::split(s).ok_or_else(|| Error::Malformed {
            input: s.to_string(),
        })?;

        let invalid_number = || Error::InvalidFlightNumber {
            number: parts.number.to_string(),
        };

        if !is_valid_flight_number(parts.number) {
            return Err(invalid_number());
        }

        let flight_number = parts.number.parse().map_err(|_| invalid_number())?;
        trace!("flight designator \"{s}\" parsed into {parts:?}");

        Ok(Self {
            airline_code: Some(parts.airline.to_string()),
            flight_number: Some(flight_number),
            operational_suffix: non_empty(Some(parts.suffix)),
        })
    }
}

impl TryFrom<&str> for FlightDesignator {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Formats the designator without padding. The alternate flag `{:#}`
/// separates the parts by spaces.
impl fmt::Display for FlightDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_formatted(f.alternate(), false))
    }
}

/// Parses a flight designator.
///
/// Returns `None` if the string is not a valid designator. Use
/// [`str::parse`] to get the reason why parsing failed.
///
/// ```
/// let designator = flight_designator::parse("KLM645").expect("designator should parse");
/// assert_eq!(designator.airline_code(), Some("KLM"));
/// assert_eq!(designator.flight_number(), Some(645));
///
/// assert_eq!(flight_designator::parse("AS0"), None);
/// ```
pub fn parse(s: &str) -> Option<FlightDesignator> {
    match s.parse::<FlightDesignator>() {
        Ok(designator) => Some(designator),
        Err(err) => {
            debug!("{err}");
            None
        }
    }
}

/// Returns `true` if the string is a valid flight designator.
///
/// ```
/// assert!(flight_designator::is_valid("U24511"));
/// assert!(flight_designator::is_valid("23 1234"));
/// assert!(!flight_designator::is_valid("XY00001"));
/// ```
pub fn is_valid(s: &str) -> bool {
    Parts::split(s).is_some_and(|parts| is_valid_flight_number(parts.number))
}

/// Parses and formats a flight designator.
///
/// See [`FlightDesignator::to_formatted`] for the meaning of `spaces` and
/// `pad`. Returns `None` if the string is not a valid designator.
///
/// ```
/// use flight_designator::format;
///
/// assert_eq!(format("lh0018", false, false).as_deref(), Some("LH18"));
/// assert_eq!(format("lh0018c", true, true).as_deref(), Some("LH 0018 C"));
/// assert_eq!(format("ASDFGHGF", false, false), None);
/// ```
pub fn format(s: &str, spaces: bool, pad: bool) -> Option<String> {
    parse(s).map(|designator| designator.to_formatted(spaces, pad))
}
