//! # Measurement Unit Vocabulary
//!
//! The fixed set of measurement-unit tokens the ingredient parser recognizes.
//! Units are only used to classify the middle token of a "quantity unit name"
//! line; no conversion or canonicalization happens here. Matching is by
//! lowercase exact token equality, never by substring.

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Volume units (US customary and metric).
pub const VOLUME_UNITS: &[&str] = &[
    "cup",
    "cups",
    "tbsp",
    "tablespoon",
    "tablespoons",
    "tsp",
    "teaspoon",
    "teaspoons",
    "ml",
    "milliliter",
    "milliliters",
    "l",
    "liter",
    "liters",
    "pint",
    "pints",
    "quart",
    "quarts",
    "gallon",
    "gallons",
];

/// Mass units.
pub const MASS_UNITS: &[&str] = &[
    "oz", "ounce", "ounces", "lb", "pound", "pounds", "g", "gram", "grams", "kg", "kilogram",
    "kilograms",
];

/// Count and packaging units.
pub const COUNT_UNITS: &[&str] = &[
    "clove", "cloves", "piece", "pieces", "slice", "slices", "can", "cans", "package", "packages",
    "bottle", "bottles",
];

lazy_static! {
    static ref UNIT_VOCABULARY: HashSet<&'static str> = {
        let mut units = HashSet::new();
        units.extend(VOLUME_UNITS.iter().copied());
        units.extend(MASS_UNITS.iter().copied());
        units.extend(COUNT_UNITS.iter().copied());
        units
    };
}

/// Check whether a token is a recognized measurement unit.
///
/// The token is lowercased before lookup; callers keep the original casing
/// for output.
pub fn is_recognized_unit(token: &str) -> bool {
    UNIT_VOCABULARY.contains(token.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_units_from_every_category() {
        assert!(is_recognized_unit("cups"));
        assert!(is_recognized_unit("tbsp"));
        assert!(is_recognized_unit("kg"));
        assert!(is_recognized_unit("cloves"));
        assert!(is_recognized_unit("bottles"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(is_recognized_unit("Cups"));
        assert!(is_recognized_unit("TBSP"));
        assert!(is_recognized_unit("Oz"));
    }

    #[test]
    fn test_exact_token_equality_not_substring() {
        assert!(!is_recognized_unit("cupsful"));
        assert!(!is_recognized_unit("cu"));
        assert!(!is_recognized_unit("2cups"));
    }

    #[test]
    fn test_non_units_are_rejected() {
        assert!(!is_recognized_unit("large"));
        assert!(!is_recognized_unit("fresh"));
        assert!(!is_recognized_unit(""));
    }
}
