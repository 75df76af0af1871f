// ABOUTME: Unit catalog returning valid unit codes and labels for each category
// ABOUTME: Preserves display order when listings are serialized to JSON objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use converter_core::constants::units::{
    UnitLabel, LENGTH_UNITS, TEMPERATURE_UNITS, WEIGHT_UNITS,
};
use converter_core::errors::AppResult;
use converter_core::models::Category;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Lookup of the units available in each category
pub struct UnitCatalog;

impl UnitCatalog {
    /// Units of a category in display order
    #[must_use]
    pub const fn units(category: Category) -> &'static [UnitLabel] {
        match category {
            Category::Length => LENGTH_UNITS,
            Category::Weight => WEIGHT_UNITS,
            Category::Temperature => TEMPERATURE_UNITS,
        }
    }

    /// List the units of a category
    #[must_use]
    pub const fn list(category: Category) -> UnitListing {
        UnitListing {
            category,
            units: Self::units(category),
        }
    }

    /// List the units of a category given by name
    ///
    /// # Errors
    ///
    /// Returns `InvalidCategory` if `category` is not a supported category name.
    pub fn list_units(category: &str) -> AppResult<UnitListing> {
        Ok(Self::list(category.parse()?))
    }

    /// Whether `code` is a unit of `category`
    #[must_use]
    pub fn contains(category: Category, code: &str) -> bool {
        Self::label(category, code).is_some()
    }

    /// Display label for a unit code
    #[must_use]
    pub fn label(category: Category, code: &str) -> Option<&'static str> {
        Self::units(category)
            .iter()
            .find(|unit| unit.code == code)
            .map(|unit| unit.label)
    }
}

/// Units of one category, serialized as an ordered `{code: label}` object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitListing {
    category: Category,
    units: &'static [UnitLabel],
}

impl UnitListing {
    /// Category this listing belongs to
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Units in display order
    #[must_use]
    pub const fn units(&self) -> &'static [UnitLabel] {
        self.units
    }

    /// Number of units
    #[must_use]
    pub const fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the listing is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Unit codes in display order
    pub fn codes(&self) -> impl Iterator<Item = &'static str> {
        self.units.iter().map(|unit| unit.code)
    }
}

impl Serialize for UnitListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.units.len()))?;
        for unit in self.units {
            map.serialize_entry(unit.code, unit.label)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use converter_core::errors::ErrorCode;

    #[test]
    fn test_weight_catalog_exact_order() {
        let listing = UnitCatalog::list_units("weight").unwrap();
        let entries: Vec<_> = listing.units().iter().map(|u| (u.code, u.label)).collect();

        assert_eq!(
            entries,
            vec![
                ("kg", "Kilograms (kg)"),
                ("g", "Grams (g)"),
                ("lb", "Pounds (lb)"),
                ("oz", "Ounces (oz)"),
            ]
        );
    }

    #[test]
    fn test_length_and_temperature_catalogs() {
        let length: Vec<_> = UnitCatalog::list(Category::Length).codes().collect();
        assert_eq!(length, vec!["ft", "m", "cm", "in"]);

        let temperature = UnitCatalog::list(Category::Temperature);
        assert_eq!(temperature.len(), 3);
        assert_eq!(
            UnitCatalog::label(Category::Temperature, "c"),
            Some("Celsius (°C)")
        );
        assert_eq!(
            UnitCatalog::label(Category::Temperature, "f"),
            Some("Fahrenheit (°F)")
        );
        assert_eq!(
            UnitCatalog::label(Category::Temperature, "k"),
            Some("Kelvin (K)")
        );
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = UnitCatalog::list_units("volume").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCategory);
    }

    #[test]
    fn test_codes_are_category_scoped() {
        assert!(UnitCatalog::contains(Category::Length, "cm"));
        assert!(!UnitCatalog::contains(Category::Weight, "cm"));
        assert!(!UnitCatalog::contains(Category::Temperature, "C"));
    }

    #[test]
    fn test_serialization_preserves_display_order() {
        let json = serde_json::to_string(&UnitCatalog::list(Category::Length)).unwrap();
        assert_eq!(
            json,
            r#"{"ft":"Feet (ft)","m":"Meters (m)","cm":"Centimeters (cm)","in":"Inches (in)"}"#
        );
    }
}
