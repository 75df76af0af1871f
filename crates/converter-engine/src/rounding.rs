// ABOUTME: Display rounding for conversion results at the API boundary
// ABOUTME: Rounds temperature to one decimal place and length/weight to two
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use converter_core::models::Category;

/// Magnitude at and above which results are reported without rounding
pub const UNROUNDED_MAGNITUDE: f64 = 1e21;

/// Round a full-precision result to the category's display precision
///
/// Rounding works on the exact binary value of the result, so `0.015` (stored
/// just below one and a half hundredths) shows as `0.01`. Exact halves round
/// away from zero. A result that rounds to zero is reported as `0.0`, never
/// `-0.0`.
#[must_use]
pub fn round_for_display(category: Category, value: f64) -> f64 {
    round_to_decimals(value, category.display_decimals())
}

/// Round `value` to `decimals` places
///
/// Non-finite values and magnitudes of at least [`UNROUNDED_MAGNITUDE`] are
/// returned unchanged, as are precisions too fine to scale in 128 bits.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() || value.abs() >= UNROUNDED_MAGNITUDE {
        return value;
    }

    let (mantissa, exponent) = decompose(value.abs());
    if exponent >= 0 {
        // Already an integer
        return value;
    }

    let Some(scale) = 10_u128.checked_pow(decimals) else {
        return value;
    };
    let Some(scaled) = u128::from(mantissa).checked_mul(scale) else {
        return value;
    };

    // |value| * 10^decimals == scaled / 2^shift exactly
    let shift = exponent.unsigned_abs();
    let units = if shift >= u128::BITS {
        0
    } else {
        let whole = scaled >> shift;
        let remainder = scaled & ((1_u128 << shift) - 1);
        if remainder >= 1_u128 << (shift - 1) {
            whole + 1
        } else {
            whole
        }
    };

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let text = if decimals == 0 {
        format!("{sign}{units}")
    } else {
        let width = decimals as usize;
        format!("{sign}{}.{:0width$}", units / scale, units % scale)
    };
    let rounded = text.parse::<f64>().unwrap_or(value);

    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Split a finite, non-negative value into `mantissa * 2^exponent`
fn decompose(value: f64) -> (u64, i32) {
    const MANTISSA_BITS: u64 = 52;
    const EXPONENT_BIAS: i32 = 1075;

    let bits = value.to_bits();
    let fraction = bits & ((1_u64 << MANTISSA_BITS) - 1);
    // Safe: the biased exponent is 11 bits wide
    #[allow(clippy::cast_possible_wrap)]
    let biased = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;

    if biased == 0 {
        (fraction, 1 - EXPONENT_BIAS)
    } else {
        (fraction | (1_u64 << MANTISSA_BITS), biased - EXPONENT_BIAS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_same(actual: f64, expected: f64) {
        assert_eq!(actual.to_bits(), expected.to_bits(), "expected {expected}, got {actual}");
    }

    #[test]
    fn test_weight_rounds_to_two_places() {
        let pounds = 1000.0 / 453.592;
        assert!((round_for_display(Category::Weight, pounds) - 2.20).abs() < f64::EPSILON);
    }

    #[test]
    fn test_temperature_rounds_to_one_place() {
        let celsius = (98.6 - 32.0) * 5.0 / 9.0;
        assert!((round_for_display(Category::Temperature, celsius) - 37.0).abs() < f64::EPSILON);
        assert!((round_for_display(Category::Temperature, 21.456) - 21.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_length_rounds_to_two_places() {
        assert!((round_for_display(Category::Length, 3.280_839_9) - 3.28).abs() < f64::EPSILON);
        assert!((round_for_display(Category::Length, 0.999_999_999) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_zero_normalized() {
        let rounded = round_for_display(Category::Length, -0.001);
        assert!(rounded.is_sign_positive());
        assert!(rounded.abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_values_round_symmetrically() {
        assert!((round_to_decimals(-1.256, 2) + 1.26).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rounds_stored_binary_value_not_decimal_literal() {
        // Each literal is stored slightly below its written half
        assert_same(round_for_display(Category::Length, 0.015), 0.01);
        assert_same(round_for_display(Category::Length, 2.675), 2.67);
        assert_same(round_for_display(Category::Temperature, 0.15), 0.1);
        assert_same(round_for_display(Category::Weight, 1.005), 1.0);
    }

    #[test]
    fn test_exact_halves_round_away_from_zero() {
        assert_same(round_for_display(Category::Temperature, 0.25), 0.3);
        assert_same(round_for_display(Category::Temperature, -0.25), -0.3);
        assert_same(round_for_display(Category::Temperature, 2.75), 2.8);
        assert_same(round_for_display(Category::Length, 0.125), 0.13);
        assert_same(round_to_decimals(2.5, 0), 3.0);
    }

    #[test]
    fn test_exactly_representable_values_unchanged() {
        assert_same(round_for_display(Category::Length, 0.25), 0.25);
        assert_same(round_for_display(Category::Weight, 1500.0), 1500.0);
    }

    #[test]
    fn test_huge_magnitudes_pass_through() {
        assert_same(round_for_display(Category::Length, 1e307), 1e307);
        assert_same(round_for_display(Category::Weight, -1e21), -1e21);
        assert_same(round_for_display(Category::Length, f64::MAX), f64::MAX);
        let just_below = round_for_display(Category::Length, 123_456_789_012.345_67);
        assert!(just_below.is_finite());
        assert!((just_below - 123_456_789_012.35).abs() < 1e-3);
    }

    #[test]
    fn test_tiny_values_round_to_zero() {
        let subnormal = f64::from_bits(1);
        assert_same(round_for_display(Category::Length, subnormal), 0.0);
        assert_same(round_for_display(Category::Length, -subnormal), 0.0);
        assert_same(round_for_display(Category::Temperature, 0.0), 0.0);
    }
}
