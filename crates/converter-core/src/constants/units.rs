// ABOUTME: Unit catalogs and conversion constants for length, weight, and temperature
// ABOUTME: Provides named scale factors and labels to eliminate magic numbers in conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unit tables are ordered slices: the order is the display order used by
//! the browser form, so entries must not be sorted.

/// A unit as presented to clients: code plus human-readable label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabel {
    /// Short code used in requests (e.g. `cm`)
    pub code: &'static str,
    /// Display label (e.g. `Centimeters (cm)`)
    pub label: &'static str,
}

/// A unit's scale relative to its category's base unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor {
    /// Short code used in requests
    pub code: &'static str,
    /// Number of base units represented by one of this unit
    pub factor: f64,
}

const fn label(code: &'static str, label: &'static str) -> UnitLabel {
    UnitLabel { code, label }
}

const fn scale(code: &'static str, factor: f64) -> ScaleFactor {
    ScaleFactor { code, factor }
}

// ============================================================================
// Length (base unit: centimeter)
// ============================================================================

/// Length base unit
pub const LENGTH_BASE_UNIT: &str = "cm";

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

/// Centimeters per foot
pub const CM_PER_FOOT: f64 = 30.48;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Length scale factors in centimeters
pub const LENGTH_RATES: &[ScaleFactor] = &[
    scale("cm", 1.0),
    scale("m", CM_PER_METER),
    scale("ft", CM_PER_FOOT),
    scale("in", CM_PER_INCH),
];

/// Length units in display order
pub const LENGTH_UNITS: &[UnitLabel] = &[
    label("ft", "Feet (ft)"),
    label("m", "Meters (m)"),
    label("cm", "Centimeters (cm)"),
    label("in", "Inches (in)"),
];

// ============================================================================
// Weight (base unit: gram)
// ============================================================================

/// Weight base unit
pub const WEIGHT_BASE_UNIT: &str = "g";

/// Grams per kilogram
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Grams per pound
pub const GRAMS_PER_POUND: f64 = 453.592;

/// Grams per ounce
pub const GRAMS_PER_OUNCE: f64 = 28.3495;

/// Weight scale factors in grams
pub const WEIGHT_RATES: &[ScaleFactor] = &[
    scale("g", 1.0),
    scale("kg", GRAMS_PER_KG),
    scale("lb", GRAMS_PER_POUND),
    scale("oz", GRAMS_PER_OUNCE),
];

/// Weight units in display order
pub const WEIGHT_UNITS: &[UnitLabel] = &[
    label("kg", "Kilograms (kg)"),
    label("g", "Grams (g)"),
    label("lb", "Pounds (lb)"),
    label("oz", "Ounces (oz)"),
];

// ============================================================================
// Temperature (pivot: Celsius)
// ============================================================================

/// Celsius unit code
pub const CELSIUS: &str = "c";

/// Fahrenheit unit code
pub const FAHRENHEIT: &str = "f";

/// Kelvin unit code
pub const KELVIN: &str = "k";

/// Offset between Kelvin and Celsius (0 °C = 273.15 K)
pub const KELVIN_OFFSET: f64 = 273.15;

/// Fahrenheit reading at the freezing point of water
pub const FAHRENHEIT_FREEZING_POINT: f64 = 32.0;

/// Fahrenheit degrees per Celsius degree, numerator
pub const FAHRENHEIT_SCALE_NUMERATOR: f64 = 9.0;

/// Fahrenheit degrees per Celsius degree, denominator
pub const FAHRENHEIT_SCALE_DENOMINATOR: f64 = 5.0;

/// Temperature units in display order
pub const TEMPERATURE_UNITS: &[UnitLabel] = &[
    label(CELSIUS, "Celsius (°C)"),
    label(FAHRENHEIT, "Fahrenheit (°F)"),
    label(KELVIN, "Kelvin (K)"),
];
