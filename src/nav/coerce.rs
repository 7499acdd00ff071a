// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lenient numeric coercion for address values.
//!
//! Numbers are read from the longest numeric prefix of the input, the way address values have
//! always been read. Anything without a numeric prefix reads as `0`.

use crate::format::HashValue;

/// Reads a base-10 integer prefix (`"12px"` → 12, `"1.9"` → 1, `"abc"` → 0).
pub fn parse_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = split_sign(text);

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(byte - b'0'));
    }

    if !seen_digit {
        return 0;
    }
    if negative {
        -value
    } else {
        value
    }
}

/// Reads a decimal floating point prefix (`"0.5_"` → 0.5, `"1e2x"` → 100, `"-"` → 0).
///
/// Non-finite results read as `0`.
pub fn parse_float(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match text[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Reads `N` floats from a list value; missing items take the matching `defaults` entry.
pub fn parse_floats<const N: usize>(value: &HashValue, defaults: [f64; N]) -> [f64; N] {
    let items = value.items();
    let mut out = defaults;
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = parse_float(item);
    }
    out
}

/// Circular wrap of `index` into `0..count`.
///
/// `count` must be non-zero; the navigation store rejects designs where it could be zero.
pub fn wrap_index(index: i64, count: usize) -> usize {
    debug_assert!(count > 0, "wrap_index called with an empty collection");
    let count = i64::try_from(count.max(1)).unwrap_or(i64::MAX);
    // rem_euclid with a positive modulus is always in 0..count.
    index.rem_euclid(count) as usize
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}
