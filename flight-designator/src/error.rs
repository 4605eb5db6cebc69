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

use std::error;
use std::fmt;

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The input doesn't have the shape of a flight designator.
    Malformed { input: String },
    /// The input has the right shape but the flight number is zero.
    InvalidFlightNumber { number: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { input } => {
                write!(f, "invalid flight designator \"{input}\"")
            }
            Self::InvalidFlightNumber { number } => {
                write!(
                    f,
                    "flight number is \"{number}\" but should be in the range from 1 to 9999"
                )
            }
        }
    }
}

impl error::Error for Error {}
