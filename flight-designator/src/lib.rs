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

//! IATA/ICAO flight designator parser.
//!
//! A flight designator identifies a flight by the airline code, the flight
//! number and an optional operational suffix, e.g. `LH2054` or `AS33C`. This
//! crate checks the shape of a designator, splits it into its parts and formats
//! it in a canonical form. It doesn't check if an airline code or flight number
//! is actually assigned.
//!
//! # Examples
//!
//! Check if a string is a flight designator:
//!
//! ```
//! assert!(flight_designator::is_valid("LH2054"));
//! assert!(flight_designator::is_valid("KLM 645"));
//! assert!(!flight_designator::is_valid("AS0"));
//! ```
//!
//! Parse a [`FlightDesignator`] and print it in its canonical form:
//!
//! ```
//! use flight_designator::FlightDesignator;
//!
//! # fn main() -> Result<(), flight_designator::Error> {
//! let designator: FlightDesignator = "4u050".parse()?;
//!
//! println!("{designator}"); // => "4U50"
//! println!("{}", designator.to_formatted(true, true)); // => "4U 0050"
//! #     Ok(())
//! # }
//! ```
//!
//! Or do both at once with [`format`]:
//!
//! ```
//! assert_eq!(
//!     flight_designator::format("yyy 9999 a", false, false).as_deref(),
//!     Some("YYY9999A")
//! );
//! ```
//!
//! # Features
//!
//! - `serde`: Serialize and deserialize a [`FlightDesignator`] as record with
//!   the fields `airlineCode`, `flightNumber` and `operationalSuffix`.

mod designator;
mod error;
mod fields;
mod pattern;

pub use designator::{format, is_valid, parse, FlightDesignator};
pub use error::Error;
pub use fields::{
    is_valid_airline_code, is_valid_flight_number, is_valid_suffix, FLIGHT_NUMBER_WIDTH,
    MAX_FLIGHT_NUMBER, MIN_FLIGHT_NUMBER,
};
