//! Body-mass index and its clinical classification.

use serde::{Deserialize, Serialize};

/// BMI in kg/m². `None` when weight or height is non-positive or not finite;
/// the caller gets a sentinel to render, never NaN or infinity.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !weight_kg.is_finite() || !height_cm.is_finite() || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// WHO BMI bands. Each band is inclusive on its lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_weight_over_height_squared() {
        let v = bmi(70.0, 175.0).expect("bmi");
        assert!((v - 22.857).abs() < 0.001);
    }

    #[test]
    fn missing_height_or_weight_is_none() {
        assert_eq!(bmi(70.0, 0.0), None);
        assert_eq!(bmi(0.0, 175.0), None);
        assert_eq!(bmi(-70.0, 175.0), None);
    }

    #[test]
    fn non_finite_inputs_are_none_never_nan() {
        assert_eq!(bmi(f64::NAN, 175.0), None);
        assert_eq!(bmi(70.0, f64::NAN), None);
        assert_eq!(bmi(f64::INFINITY, 175.0), None);
        assert_eq!(bmi(70.0, f64::INFINITY), None);
    }

    #[test]
    fn strictly_increasing_in_weight_for_fixed_height() {
        let mut last = 0.0;
        for w in [40.0, 55.0, 70.0, 85.0, 100.0, 130.0] {
            let v = bmi(w, 175.0).expect("bmi");
            assert!(v > last);
            last = v;
        }
    }

    #[test]
    fn band_boundaries_are_inclusive_on_the_lower_bound() {
        assert_eq!(BmiCategory::classify(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
    }
}
