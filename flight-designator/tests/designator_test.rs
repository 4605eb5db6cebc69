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

use flight_designator::{format, is_valid, parse, FlightDesignator};

const VALID_FLIGHTS: [&str; 13] = [
    "U24511", "LH2054", "AS33", "KLM645", "YYY9999A", "AS33C", "X11", "23 1234", "123", "R6750",
    "AB6430", "4U050", "LH180",
];

const INVALID_FLIGHTS: [&str; 6] = ["1", "23", "X1", "AS0", "XY00001", "ASDFGHGF"];

#[test]
fn valid_flights() {
    for flight in VALID_FLIGHTS {
        assert!(is_valid(flight), "{flight} should be valid");
    }
}

#[test]
fn invalid_flights() {
    for flight in INVALID_FLIGHTS {
        assert!(!is_valid(flight), "{flight} should be invalid");
        assert_eq!(parse(flight), None, "{flight} should not parse");
        assert_eq!(format(flight, true, true), None);
    }
}

#[test]
fn parsed_valid_flights_are_valid() {
    for flight in VALID_FLIGHTS {
        let designator = parse(flight).expect("valid flight should parse");
        assert!(designator.is_valid(), "{flight} should be valid once parsed");
    }
}

#[test]
fn invalid_flights_from_parts_are_invalid() {
    for flight in INVALID_FLIGHTS {
        // airline, number and suffix at their usual position
        let part = |start: usize, end: usize| {
            let len = flight.len();
            flight.get(start.min(len)..end.min(len))
        };

        let designator = FlightDesignator::from_parts(part(0, 2), part(2, 6), part(6, usize::MAX));
        assert!(!designator.is_valid(), "{flight} should be invalid");
    }
}

#[test]
fn parses_parts() {
    let expected = [
        ("U24511", "U2", 4511, None),
        ("LH2054", "LH", 2054, None),
        ("AS33", "AS", 33, None),
        ("KLM645", "KLM", 645, None),
        ("YYY9999A", "YYY", 9999, Some("A")),
        ("AS33C", "AS", 33, Some("C")),
        ("X11", "X1", 1, None),
        ("23 1234", "23", 1234, None),
        ("123", "12", 3, None),
        ("R6750", "R6", 750, None),
        ("AB6430", "AB", 6430, None),
        ("4U050", "4U", 50, None),
        ("LH180", "LH", 180, None),
    ];

    for (flight, airline, number, suffix) in expected {
        let designator = parse(flight).expect("valid flight should parse");
        assert_eq!(designator.airline_code(), Some(airline));
        assert_eq!(designator.flight_number(), Some(number));
        assert_eq!(designator.operational_suffix(), suffix);
    }
}

#[test]
fn formats() {
    assert_eq!(format("YYY 9999 A", false, false).as_deref(), Some("YYY9999A"));
    assert_eq!(format("4U050", false, false).as_deref(), Some("4U50"));
    assert_eq!(format("lh0018", false, false).as_deref(), Some("LH18"));
    assert_eq!(format("lh0018", true, false).as_deref(), Some("LH 18"));
    assert_eq!(format("lh0018", false, true).as_deref(), Some("LH0018"));
    assert_eq!(format("lh0018", true, true).as_deref(), Some("LH 0018"));
    assert_eq!(format("lh0018c", false, true).as_deref(), Some("LH0018C"));
    assert_eq!(format("lh0018c", true, true).as_deref(), Some("LH 0018 C"));
}

#[test]
fn padded_format_is_canonical() {
    for flight in VALID_FLIGHTS {
        let canonical = format(flight, false, true).expect("valid flight should format");
        assert_eq!(format(&canonical, false, true), Some(canonical.clone()));
        assert!(is_valid(&canonical));
    }
}

#[test]
fn zero_flight_number_is_well_formed_but_invalid() {
    for flight in ["XY0000", "XY 0", "AS0C"] {
        assert!(!is_valid(flight));
        assert!(flight.parse::<FlightDesignator>().is_err());
    }
}

#[test]
fn airline_code_boundaries() {
    assert!(is_valid("AB1"));
    assert!(is_valid("ABC1"));
    assert!(!is_valid("A 1"));
    assert!(!is_valid("ABCD1"));
}

#[test]
fn suffix_boundaries() {
    assert!(is_valid("LH18"));
    assert!(is_valid("LH18 C"));
    assert!(!is_valid("LH18CD"));
    assert!(!is_valid("LH18 C1"));
}

#[cfg(feature = "serde")]
#[test]
fn serializes_record() {
    let designator = parse("AS33C").expect("valid flight should parse");
    let json = serde_json::to_value(&designator).expect("designator should serialize");

    assert_eq!(
        json,
        serde_json::json!({
            "airlineCode": "AS",
            "flightNumber": 33,
            "operationalSuffix": "C",
        })
    );

    let decoded: FlightDesignator =
        serde_json::from_value(json).expect("designator should deserialize");
    assert_eq!(decoded, designator);
}

#[cfg(feature = "serde")]
#[test]
fn serializes_missing_suffix_as_empty_string() {
    let designator = parse("U24511").expect("valid flight should parse");
    let json = serde_json::to_value(&designator).expect("designator should serialize");

    assert_eq!(
        json,
        serde_json::json!({
            "airlineCode": "U2",
            "flightNumber": 4511,
            "operationalSuffix": "",
        })
    );

    let decoded: FlightDesignator =
        serde_json::from_value(json).expect("designator should deserialize");
    assert_eq!(decoded, designator);
    assert_eq!(decoded.operational_suffix(), None);
}

#[cfg(feature = "serde")]
#[test]
fn deserializes_absent_suffix() {
    let designator = parse("U24511").expect("valid flight should parse");

    for json in [
        r#"{"airlineCode":"U2","flightNumber":4511,"operationalSuffix":null}"#,
        r#"{"airlineCode":"U2","flightNumber":4511}"#,
    ] {
        let decoded: FlightDesignator =
            serde_json::from_str(json).expect("designator should deserialize");
        assert_eq!(decoded, designator);
    }
}
