// ABOUTME: Scale-factor conversions for proportional units such as length and weight
// ABOUTME: Converts through the category base unit using constant rate tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use converter_core::constants::units::{ScaleFactor, LENGTH_RATES, WEIGHT_RATES};
use converter_core::errors::{AppError, AppResult};
use converter_core::models::Category;

/// Rate table for a proportional category
///
/// Each factor states how many base units one unit represents, so a
/// conversion is `value * from_factor / to_factor`.
#[derive(Debug, Clone, Copy)]
pub struct RateTable {
    category: Category,
    rates: &'static [ScaleFactor],
}

impl RateTable {
    /// Length rates (base unit: centimeter)
    pub const LENGTH: Self = Self {
        category: Category::Length,
        rates: LENGTH_RATES,
    };

    /// Weight rates (base unit: gram)
    pub const WEIGHT: Self = Self {
        category: Category::Weight,
        rates: WEIGHT_RATES,
    };

    /// Rate table for a category, if the category converts proportionally
    #[must_use]
    pub const fn for_category(category: Category) -> Option<Self> {
        match category {
            Category::Length => Some(Self::LENGTH),
            Category::Weight => Some(Self::WEIGHT),
            Category::Temperature => None,
        }
    }

    /// Category served by this table
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Unit whose factor is exactly one
    #[must_use]
    pub fn base_unit(&self) -> Option<&'static str> {
        self.rates
            .iter()
            .find(|rate| (rate.factor - 1.0).abs() < f64::EPSILON)
            .map(|rate| rate.code)
    }

    /// Scale factor of a unit code
    #[must_use]
    pub fn scale_of(&self, code: &str) -> Option<f64> {
        self.rates
            .iter()
            .find(|rate| rate.code == code)
            .map(|rate| rate.factor)
    }

    fn require_scale(&self, code: &str) -> AppResult<f64> {
        self.scale_of(code)
            .ok_or_else(|| AppError::unknown_unit(self.category, code))
    }

    /// Express `value` of `code` in the base unit
    ///
    /// # Errors
    ///
    /// Returns `UnknownUnit` if `code` is not in the table.
    pub fn to_base(&self, value: f64, code: &str) -> AppResult<f64> {
        Ok(value * self.require_scale(code)?)
    }

    /// Convert `value` from one unit to another
    ///
    /// # Errors
    ///
    /// Returns `UnknownUnit` if either unit is not in the table.
    pub fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64> {
        let from_scale = self.require_scale(from_unit)?;
        let to_scale = self.require_scale(to_unit)?;

        if from_unit == to_unit {
            return Ok(value);
        }

        Ok(value * from_scale / to_scale)
    }
}
