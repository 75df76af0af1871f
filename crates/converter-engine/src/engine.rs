// ABOUTME: Conversion engine dispatching each request to its category's algorithm
// ABOUTME: Routes length and weight to rate tables and temperature to scale formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Category dispatch
//!
//! The dispatch is a single step: a parsed [`Category`] selects the
//! algorithm, and an unrecognized category name never reaches it because
//! parsing already failed with `InvalidCategory`.

use converter_core::errors::{AppError, AppResult};
use converter_core::models::{Category, ConversionRequest, ConversionResult};
use tracing::debug;

use crate::linear::RateTable;
use crate::rounding::round_for_display;
use crate::temperature::TemperatureScale;

/// Stateless conversion entry point
pub struct ConversionEngine;

impl ConversionEngine {
    /// Convert `value` between two units of a category
    ///
    /// Returns the full-precision result; see [`round_for_display`] for the
    /// presentation rounding applied by the HTTP layer.
    ///
    /// # Errors
    ///
    /// Returns `UnknownUnit` if either unit is not defined for `category`,
    /// or `InvalidInput` if `value` is not finite.
    pub fn convert(category: Category, value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64> {
        if !value.is_finite() {
            return Err(AppError::invalid_input(format!(
                "Value must be a finite number, got {value}"
            )));
        }

        let result = match RateTable::for_category(category) {
            Some(table) => table.convert(value, from_unit, to_unit)?,
            None => TemperatureScale::convert(value, from_unit, to_unit)?,
        };

        debug!(
            category = %category,
            from_unit = %from_unit,
            to_unit = %to_unit,
            "Converted value"
        );

        Ok(result)
    }

    /// Convert with the category given by name
    ///
    /// # Errors
    ///
    /// Returns `InvalidCategory` if `category` is not a supported category,
    /// otherwise the errors of [`ConversionEngine::convert`].
    pub fn convert_named(
        category: &str,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> AppResult<f64> {
        Self::convert(category.parse()?, value, from_unit, to_unit)
    }

    /// Run a validated request and round the result for display
    ///
    /// # Errors
    ///
    /// Returns the errors of [`ConversionEngine::convert`].
    pub fn execute(request: ConversionRequest) -> AppResult<ConversionResult> {
        let category = request.category();
        let converted = Self::convert(
            category,
            request.value(),
            request.from_unit(),
            request.to_unit(),
        )?;

        Ok(request.into_result(round_for_display(category, converted)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use converter_core::constants::units::{LENGTH_RATES, WEIGHT_RATES};
    use converter_core::errors::ErrorCode;

    use crate::catalog::UnitCatalog;

    const SAMPLE_VALUES: [f64; 9] = [0.0, 1.0, -1.0, 0.5, 12.0, 98.6, -273.15, 1234.5678, 1e6];

    fn assert_relative(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_conversions() {
        assert_relative(
            ConversionEngine::convert_named("length", 1.0, "m", "cm").unwrap(),
            100.0,
        );
        assert_relative(
            ConversionEngine::convert_named("length", 12.0, "in", "ft").unwrap(),
            1.0,
        );
        assert_relative(
            ConversionEngine::convert_named("weight", 1.0, "kg", "lb").unwrap(),
            1000.0 / 453.592,
        );
        assert!(
            (ConversionEngine::convert_named("temperature", 98.6, "f", "c").unwrap() - 37.0).abs()
                < 1e-6
        );
    }

    #[test]
    fn test_round_trip_every_unit_pair() {
        for category in Category::ALL {
            let codes: Vec<_> = UnitCatalog::list(category).codes().collect();
            for from in &codes {
                for to in &codes {
                    for value in SAMPLE_VALUES {
                        let there = ConversionEngine::convert(category, value, from, to).unwrap();
                        let back = ConversionEngine::convert(category, there, to, from).unwrap();
                        assert_relative(back, value);
                    }
                }
            }
        }
    }

    #[test]
    fn test_identity_is_exact() {
        for category in Category::ALL {
            for code in UnitCatalog::list(category).codes() {
                for value in SAMPLE_VALUES {
                    let same = ConversionEngine::convert(category, value, code, code).unwrap();
                    assert_eq!(same.to_bits(), value.to_bits());
                }
            }
        }
    }

    #[test]
    fn test_base_unit_consistency() {
        for (category, rates, base) in [
            (Category::Length, LENGTH_RATES, "cm"),
            (Category::Weight, WEIGHT_RATES, "g"),
        ] {
            for rate in rates {
                for value in SAMPLE_VALUES {
                    let in_base = ConversionEngine::convert(category, value, rate.code, base).unwrap();
                    assert_eq!(in_base, value * rate.factor);
                }
            }
        }
    }

    #[test]
    fn test_unknown_unit_and_category() {
        let err = ConversionEngine::convert_named("length", 5.0, "m", "xx").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownUnit);

        let err = ConversionEngine::convert_named("volume", 5.0, "l", "ml").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCategory);

        // Codes from another category are not accepted
        let err = ConversionEngine::convert(Category::Temperature, 5.0, "kg", "c").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownUnit);
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let err = ConversionEngine::convert(Category::Length, f64::NAN, "m", "cm").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_execute_rounds_result() {
        let request = ConversionRequest::new(Category::Weight, 1.0, "kg", "lb").unwrap();
        let result = ConversionEngine::execute(request).unwrap();

        assert!((result.result - 2.2).abs() < f64::EPSILON);
        assert_eq!(result.from_unit, "kg");
        assert_eq!(result.to_unit, "lb");
        assert!((result.original_value - 1.0).abs() < f64::EPSILON);

        let request = ConversionRequest::new(Category::Length, 12.0, "in", "ft").unwrap();
        let result = ConversionEngine::execute(request).unwrap();
        assert!((result.result - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_execute_rounds_stored_value_and_keeps_huge_results() {
        let request = ConversionRequest::new(Category::Length, 0.015, "m", "m").unwrap();
        let result = ConversionEngine::execute(request).unwrap();
        assert_eq!(result.result.to_bits(), 0.01_f64.to_bits());

        let request = ConversionRequest::new(Category::Length, 1e307, "cm", "cm").unwrap();
        let result = ConversionEngine::execute(request).unwrap();
        assert_eq!(result.result.to_bits(), 1e307_f64.to_bits());
    }
}
