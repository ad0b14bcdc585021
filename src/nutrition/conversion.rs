//! Household-measure to grams conversion.
//!
//! Resolution order: food-specific override, then the gram/ml identity,
//! then the generic measure's grams-equivalent. An unknown code is an error;
//! silently treating quantity as grams would skew every total derived from
//! the entry, so the caller must block the save instead.

use thiserror::Error;

/// Measure code that is already grams.
pub const GRAM_CODE: &str = "gram";
/// Milliliters are treated 1:1 with grams (water-density simplification).
pub const ML_CODE: &str = "ml";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("unknown measure code \"{0}\"")]
    UnknownMeasure(String),
}

/// Convert a logged quantity of some measure into grams.
///
/// `override_grams_per_unit` is the food-specific grams value for one unit of
/// the measure, when such an override exists. `generic_grams_equivalent` is
/// the measure's generic grams-per-unit, when the measure code is known at
/// all.
pub fn quantity_to_grams(
    quantity: f64,
    measure_code: &str,
    override_grams_per_unit: Option<f64>,
    generic_grams_equivalent: Option<f64>,
) -> Result<f64, ConversionError> {
    if let Some(per_unit) = override_grams_per_unit {
        return Ok(per_unit * quantity);
    }
    if measure_code == GRAM_CODE || measure_code == ML_CODE {
        return Ok(quantity);
    }
    match generic_grams_equivalent {
        Some(per_unit) => Ok(per_unit * quantity),
        None => Err(ConversionError::UnknownMeasure(measure_code.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_generic() {
        // Olive oil: measure table says a tablespoon is 15 g, the food-specific
        // override says 8 g for this oil.
        let grams = quantity_to_grams(2.0, "tablespoon", Some(8.0), Some(15.0)).expect("convert");
        assert_eq!(grams, 16.0);
    }

    #[test]
    fn gram_and_ml_pass_through() {
        assert_eq!(quantity_to_grams(150.0, "gram", None, None).expect("gram"), 150.0);
        assert_eq!(quantity_to_grams(200.0, "ml", None, None).expect("ml"), 200.0);
    }

    #[test]
    fn generic_measure_scales_by_quantity() {
        let grams = quantity_to_grams(3.0, "cup", None, Some(240.0)).expect("convert");
        assert_eq!(grams, 720.0);
    }

    #[test]
    fn unknown_measure_is_an_error_not_a_passthrough() {
        let err = quantity_to_grams(5.0, "handful", None, None).unwrap_err();
        assert_eq!(err, ConversionError::UnknownMeasure("handful".into()));
    }

    #[test]
    fn override_applies_even_for_gram_code() {
        // An override on "gram" would be odd data, but precedence is precedence.
        let grams = quantity_to_grams(2.0, "gram", Some(10.0), None).expect("convert");
        assert_eq!(grams, 20.0);
    }
}
