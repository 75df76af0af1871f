// ABOUTME: Conversion request and result models for a single conversion call
// ABOUTME: Validates incoming request bodies and shapes the JSON returned to clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::Category;
use crate::errors::{AppError, AppResult};

/// Raw conversion body as sent by clients
///
/// Every field is optional at this stage so that a missing field is reported
/// by name instead of as a generic deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionInput {
    /// Value to convert
    pub value: Option<f64>,
    /// Source unit code
    pub from_unit: Option<String>,
    /// Target unit code
    pub to_unit: Option<String>,
}

impl ConversionInput {
    /// Validate the body and bind it to a category
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when a field is absent or `null`, and
    /// `InvalidInput` when the value is not finite.
    pub fn into_request(self, category: Category) -> AppResult<ConversionRequest> {
        let value = self.value.ok_or_else(|| AppError::missing_field("value"))?;
        let from_unit = self
            .from_unit
            .ok_or_else(|| AppError::missing_field("fromUnit"))?;
        let to_unit = self.to_unit.ok_or_else(|| AppError::missing_field("toUnit"))?;

        ConversionRequest::new(category, value, from_unit, to_unit)
    }
}

/// A validated conversion to perform
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    category: Category,
    value: f64,
    from_unit: String,
    to_unit: String,
}

impl ConversionRequest {
    /// Create a request, rejecting non-finite values
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `value` is `NaN` or infinite.
    pub fn new(
        category: Category,
        value: f64,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> AppResult<Self> {
        if !value.is_finite() {
            return Err(AppError::invalid_input(format!(
                "Value must be a finite number, got {value}"
            )));
        }

        Ok(Self {
            category,
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        })
    }

    /// Conversion category
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Value to convert
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Source unit code
    #[must_use]
    pub fn from_unit(&self) -> &str {
        &self.from_unit
    }

    /// Target unit code
    #[must_use]
    pub fn to_unit(&self) -> &str {
        &self.to_unit
    }

    /// Pair this request with its computed value
    #[must_use]
    pub fn into_result(self, result: f64) -> ConversionResult {
        ConversionResult {
            result,
            from_unit: self.from_unit,
            to_unit: self.to_unit,
            original_value: self.value,
        }
    }
}

/// Outcome of a conversion, serialized as the API response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Converted value
    pub result: f64,
    /// Source unit code
    pub from_unit: String,
    /// Target unit code
    pub to_unit: String,
    /// Value as submitted
    pub original_value: f64,
}
