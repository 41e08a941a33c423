// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::str::FromStr;

// A user unit is a CSS pixel, 1in is 96px.
const UNITS: &[(&str, f64)] = &[
    ("px", 1.0),
    ("em", 16.0),
    ("ex", 16.0 / 2.0),
    ("pt", 16.0 / 12.0),
    ("pc", 16.0),
    ("in", 16.0 * 6.0),
    ("cm", 16.0 / (2.54 / 6.0)),
    ("mm", 16.0 / (25.4 / 6.0)),
];

/// Converts a length like `2em`, `10cm` or `12.5` into whole pixels.
///
/// Leading and trailing whitespaces are ignored.
/// Returns 0 for malformed, unknown, relative (like `%` or `vw`) and non-positive values,
/// which should be treated as an absent value.
pub fn to_pixels(text: &str) -> u32 {
    let text = text.trim();

    let number = split_unit(text)
        .and_then(|(value, factor)| parse_number(value).map(|n| n * factor))
        .or_else(|| parse_number(text));

    match number {
        Some(n) => {
            let n = n.round();
            if n > 0.0 && n <= u32::MAX as f64 {
                n as u32
            } else {
                if n > 0.0 {
                    log::debug!("'{}' is too large.", text);
                }

                0
            }
        }
        None => {
            if !text.is_empty() {
                log::debug!("'{}' is not a supported length.", text);
            }

            0
        }
    }
}

fn split_unit(text: &str) -> Option<(&str, f64)> {
    let idx = text.len().checked_sub(2)?;
    if !text.is_char_boundary(idx) {
        return None;
    }

    let (value, unit) = text.split_at(idx);
    let factor = UNITS.iter().find(|(name, _)| *name == unit)?.1;
    Some((value, factor))
}

fn parse_number(text: &str) -> Option<f64> {
    svgtypes::Number::from_str(text)
        .ok()
        .map(|n| n.0)
        .filter(|n| n.is_finite())
}
