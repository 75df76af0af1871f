// ABOUTME: Conversion category enumeration (length, weight, temperature)
// ABOUTME: Closed set with parsing and display so invalid categories are rejected at the edge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{categories, precision};
use crate::errors::AppError;

/// Supported conversion domains
///
/// Each category owns its unit set and its conversion rule. Unit codes are
/// scoped to a category, so the same code could mean different units in two
/// categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Feet, meters, centimeters, inches
    Length,
    /// Kilograms, grams, pounds, ounces
    Weight,
    /// Celsius, Fahrenheit, Kelvin
    Temperature,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Self; 3] = [Self::Length, Self::Weight, Self::Temperature];

    /// Lowercase name used in request paths
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Length => categories::LENGTH,
            Self::Weight => categories::WEIGHT,
            Self::Temperature => categories::TEMPERATURE,
        }
    }

    /// Decimal places used when presenting results of this category
    #[must_use]
    pub const fn display_decimals(self) -> u32 {
        match self {
            Self::Length => precision::LENGTH_DECIMALS,
            Self::Weight => precision::WEIGHT_DECIMALS,
            Self::Temperature => precision::TEMPERATURE_DECIMALS,
        }
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            categories::LENGTH => Ok(Self::Length),
            categories::WEIGHT => Ok(Self::Weight),
            categories::TEMPERATURE => Ok(Self::Temperature),
            other => Err(AppError::invalid_category(other)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_known_categories() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let err = "volume".parse::<Category>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCategory);

        // Path segments are matched exactly
        let err = "Length".parse::<Category>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCategory);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Category::Temperature).unwrap();
        assert_eq!(json, "\"temperature\"");

        let parsed: Category = serde_json::from_str("\"weight\"").unwrap();
        assert_eq!(parsed, Category::Weight);
    }

    #[test]
    fn test_display_decimals() {
        assert_eq!(Category::Length.display_decimals(), 2);
        assert_eq!(Category::Weight.display_decimals(), 2);
        assert_eq!(Category::Temperature.display_decimals(), 1);
    }
}
