// ABOUTME: Temperature conversions between Celsius, Fahrenheit, and Kelvin
// ABOUTME: Applies closed-form formulas with Celsius as the pivot scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use converter_core::constants::units::{
    CELSIUS, FAHRENHEIT, FAHRENHEIT_FREEZING_POINT, FAHRENHEIT_SCALE_DENOMINATOR,
    FAHRENHEIT_SCALE_NUMERATOR, KELVIN, KELVIN_OFFSET,
};
use converter_core::errors::{AppError, AppResult};
use converter_core::models::Category;

/// Supported temperature scales
///
/// Temperature is not proportional (0 °C is not 0 °F), so it cannot share the
/// rate-table approach. Every conversion goes through Celsius:
///
/// - to Celsius: `F -> (v - 32) * 5/9`, `K -> v - 273.15`
/// - from Celsius: `F -> c * 9/5 + 32`, `K -> c + 273.15`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureScale {
    /// Degrees Celsius (`c`)
    Celsius,
    /// Degrees Fahrenheit (`f`)
    Fahrenheit,
    /// Kelvin (`k`)
    Kelvin,
}

impl TemperatureScale {
    /// Unit code used in requests
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Celsius => CELSIUS,
            Self::Fahrenheit => FAHRENHEIT,
            Self::Kelvin => KELVIN,
        }
    }

    /// Express a reading on this scale in Celsius
    #[must_use]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => {
                (value - FAHRENHEIT_FREEZING_POINT) * FAHRENHEIT_SCALE_DENOMINATOR
                    / FAHRENHEIT_SCALE_NUMERATOR
            }
            Self::Kelvin => value - KELVIN_OFFSET,
        }
    }

    /// Express a Celsius reading on this scale
    #[must_use]
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => {
                celsius * FAHRENHEIT_SCALE_NUMERATOR / FAHRENHEIT_SCALE_DENOMINATOR
                    + FAHRENHEIT_FREEZING_POINT
            }
            Self::Kelvin => celsius + KELVIN_OFFSET,
        }
    }

    /// Convert a reading to another scale
    #[must_use]
    pub fn convert_to(self, value: f64, target: Self) -> f64 {
        if self == target {
            return value;
        }
        target.from_celsius(self.to_celsius(value))
    }

    /// Convert between two unit codes
    ///
    /// # Errors
    ///
    /// Returns `UnknownUnit` if either code is not `c`, `f`, or `k`.
    pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64> {
        let from: Self = from_unit.parse()?;
        let to: Self = to_unit.parse()?;
        Ok(from.convert_to(value, to))
    }
}

impl FromStr for TemperatureScale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CELSIUS => Ok(Self::Celsius),
            FAHRENHEIT => Ok(Self::Fahrenheit),
            KELVIN => Ok(Self::Kelvin),
            other => Err(AppError::unknown_unit(Category::Temperature, other)),
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
