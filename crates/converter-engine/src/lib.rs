// ABOUTME: Unit conversion engine and unit catalog for length, weight, and temperature
// ABOUTME: Pure, stateless functions over constant unit tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Converter Engine
//!
//! Stateless conversion logic. Every call is independent: the unit tables are
//! compile-time constants, so calls can run concurrently without any
//! coordination.
//!
//! - **catalog**: unit codes and labels per category, in display order
//! - **linear**: scale-factor conversions through a base unit (length, weight)
//! - **temperature**: Celsius-pivot formulas (Celsius, Fahrenheit, Kelvin)
//! - **engine**: category dispatch tying the above together
//! - **rounding**: display precision applied at the API boundary

/// Unit catalog lookups
pub mod catalog;
/// Category dispatch for conversions
pub mod engine;
/// Base-unit mediated conversions for proportional units
pub mod linear;
/// Presentation rounding for conversion results
pub mod rounding;
/// Temperature scale conversions
pub mod temperature;

pub use catalog::{UnitCatalog, UnitListing};
pub use engine::ConversionEngine;
pub use linear::RateTable;
pub use rounding::round_for_display;
pub use temperature::TemperatureScale;
