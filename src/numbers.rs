// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use float_cmp::ApproxEqUlps;

/// Formats a number for an SVG attribute.
///
/// Up to 7 fractional digits, no trailing zeros, no exponent and no `-0`.
/// The output does not depend on a locale.
pub(crate) fn format_number(num: f64) -> String {
    // Integers are the most common case.
    if num.fract().approx_eq_ulps(&0.0, 4) && num.abs() < i64::MAX as f64 {
        return (num.round() as i64).to_string();
    }

    // Nothing left to round and the scaled value may overflow.
    if num.abs() >= 1e15 {
        return num.to_string();
    }

    // Round to prevent ugly numbers like 0.30000000000000004.
    let v = (num * 10_000_000.0).round() / 10_000_000.0;
    if v == 0.0 {
        // Also handles `-0`.
        return "0".to_string();
    }

    v.to_string()
}

/// Formats a list of numbers separated by a space.
pub(crate) fn format_numbers(list: &[f64]) -> String {
    let mut s = String::new();
    for (i, n) in list.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }

        s.push_str(&format_number(*n));
    }

    s
}
