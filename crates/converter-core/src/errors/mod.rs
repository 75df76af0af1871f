// ABOUTME: Unified error types and error codes for the unit converter service
// ABOUTME: Maps conversion and request failures onto machine-readable codes and HTTP statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Centralized error handling for the converter service. It defines the
//! error codes, the `AppError` type carried through `AppResult`, and the JSON
//! error body returned to HTTP clients.

#[cfg(feature = "http-response")]
mod response;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Conversion (1000-1999)
    /// Category string is not one of the supported conversion domains
    InvalidCategory = 1000,
    /// Unit code is not defined for the requested category
    UnknownUnit = 1001,

    // Validation (3000-3999)
    /// Request input is malformed
    InvalidInput = 3000,
    /// A required request field is absent
    MissingRequiredField = 3001,

    // Resource Management (4000-4999)
    /// Route or resource does not exist
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration value could not be parsed
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected server failure
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidCategory
            | Self::UnknownUnit
            | Self::InvalidInput
            | Self::MissingRequiredField => 400,
            Self::ResourceNotFound => 404,
            Self::ConfigInvalid | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidCategory => "The conversion category is not supported",
            Self::UnknownUnit => "The unit is not valid for this conversion category",
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal server error occurred",
        }
    }

    /// Stable machine-readable name, identical to the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidCategory => "INVALID_CATEGORY",
            Self::UnknownUnit => "UNKNOWN_UNIT",
            Self::InvalidInput => "INVALID_INPUT",
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Whether this code reports a client mistake rather than a server fault
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        self.http_status() < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the application
#[derive(Debug, thiserror::Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors for common errors
impl AppError {
    /// Category is not length, weight, or temperature
    pub fn invalid_category(category: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidCategory,
            format!("Invalid conversion type: {}", category.into()),
        )
    }

    /// Unit code is not defined for the category
    pub fn unknown_unit(category: impl fmt::Display, unit: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::UnknownUnit,
            format!("Invalid {category} unit: {}", unit.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing from a request body
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required field: {}", field.into()),
        )
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid configuration value
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// HTTP error response format
///
/// `error` carries the human-readable message so browser clients can show it
/// directly; `code` is the machine-readable classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code
    pub code: ErrorCode,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.message.clone(),
            code: error.code,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: error.message,
            code: error.code,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::invalid_input(format!("Invalid JSON: {error}")).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidCategory.http_status(), 400);
        assert_eq!(ErrorCode::UnknownUnit.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
        assert!(ErrorCode::MissingRequiredField.is_client_error());
        assert!(!ErrorCode::ConfigInvalid.is_client_error());
    }

    #[test]
    fn test_error_messages() {
        let error = AppError::invalid_category("volume");
        assert_eq!(error.code, ErrorCode::InvalidCategory);
        assert_eq!(error.to_string(), "Invalid conversion type: volume");

        let error = AppError::unknown_unit("length", "xx");
        assert_eq!(error.code, ErrorCode::UnknownUnit);
        assert_eq!(error.to_string(), "Invalid length unit: xx");
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::from(AppError::unknown_unit("temperature", "r"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["error"], "Invalid temperature unit: r");
        assert_eq!(json["code"], "UNKNOWN_UNIT");
    }

    #[test]
    fn test_code_name_matches_serialized_form() {
        for code in [
            ErrorCode::InvalidCategory,
            ErrorCode::UnknownUnit,
            ErrorCode::InvalidInput,
            ErrorCode::MissingRequiredField,
            ErrorCode::ResourceNotFound,
            ErrorCode::ConfigInvalid,
            ErrorCode::InternalError,
        ] {
            let serialized = serde_json::to_value(code).unwrap();
            assert_eq!(serialized, code.as_str());
        }
    }

    #[test]
    fn test_json_error_conversion_keeps_source() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = AppError::from(parse_error);

        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(error.source.is_some());
        assert!(error.message.starts_with("Invalid JSON"));
    }
}
