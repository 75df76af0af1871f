// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion and result presentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file.

/// Unit tables, scale factors, and temperature formula constants
pub mod units;

/// Display precision applied to conversion results at the API boundary
pub mod precision {
    /// Decimal places for length results
    pub const LENGTH_DECIMALS: u32 = 2;
    /// Decimal places for weight results
    pub const WEIGHT_DECIMALS: u32 = 2;
    /// Decimal places for temperature results
    pub const TEMPERATURE_DECIMALS: u32 = 1;
}

/// Category names as they appear in request paths
pub mod categories {
    /// Length conversions
    pub const LENGTH: &str = "length";
    /// Weight conversions
    pub const WEIGHT: &str = "weight";
    /// Temperature conversions
    pub const TEMPERATURE: &str = "temperature";
}
