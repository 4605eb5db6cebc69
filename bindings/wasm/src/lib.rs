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

//! JavaScript bindings of the flight designator parser.

use flight_designator::FlightDesignator;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(js_name = FlightDesignator)]
#[derive(Debug, Clone, Default)]
pub struct JsFlightDesignator {
    inner: FlightDesignator,
}

#[wasm_bindgen(js_class = FlightDesignator)]
impl JsFlightDesignator {
    #[wasm_bindgen(constructor)]
    pub fn new(airline: Option<String>, number: Option<String>, suffix: Option<String>) -> Self {
        Self {
            inner: FlightDesignator::from_parts(
                airline.as_deref(),
                number.as_deref(),
                suffix.as_deref(),
            ),
        }
    }

    #[wasm_bindgen(getter, js_name = airlineCode)]
    pub fn airline_code(&self) -> Option<String> {
        self.inner.airline_code().map(str::to_owned)
    }

    #[wasm_bindgen(getter, js_name = flightNumber)]
    pub fn flight_number(&self) -> Option<u32> {
        self.inner.flight_number()
    }

    /// The suffix or an empty string if there is none.
    #[wasm_bindgen(getter, js_name = operationalSuffix)]
    pub fn operational_suffix(&self) -> String {
        self.inner
            .operational_suffix()
            .unwrap_or_default()
            .to_owned()
    }

    #[wasm_bindgen(js_name = isValid)]
    pub fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_formatted(&self, spaces: Option<bool>, pad: Option<bool>) -> String {
        self.inner
            .to_formatted(spaces.unwrap_or_default(), pad.unwrap_or_default())
    }

    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner)?)
    }
}

impl From<JsFlightDesignator> for FlightDesignator {
    fn from(value: JsFlightDesignator) -> Self {
        value.inner
    }
}

impl From<FlightDesignator> for JsFlightDesignator {
    fn from(value: FlightDesignator) -> Self {
        Self { inner: value }
    }
}

/// Parses a flight designator or returns `undefined` if it is invalid.
#[wasm_bindgen]
pub fn parse(value: &str) -> Option<JsFlightDesignator> {
    flight_designator::parse(value).map(JsFlightDesignator::from)
}

#[wasm_bindgen(js_name = isValid)]
pub fn is_valid(value: &str) -> bool {
    flight_designator::is_valid(value)
}

#[wasm_bindgen(js_name = isValidAirlineCode)]
pub fn is_valid_airline_code(value: &str) -> bool {
    flight_designator::is_valid_airline_code(value)
}

#[wasm_bindgen(js_name = isValidFlightNumber)]
pub fn is_valid_flight_number(value: &str) -> bool {
    flight_designator::is_valid_flight_number(value)
}

#[wasm_bindgen(js_name = isValidSuffix)]
pub fn is_valid_suffix(value: Option<String>) -> bool {
    flight_designator::is_valid_suffix(value.as_deref())
}

/// Parses and formats a flight designator or returns `undefined` if it is
/// invalid.
#[wasm_bindgen]
pub fn format(value: &str, spaces: Option<bool>, pad: Option<bool>) -> Option<String> {
    flight_designator::format(value, spaces.unwrap_or_default(), pad.unwrap_or_default())
}
