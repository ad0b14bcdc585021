//! Energy-expenditure pipeline: Mifflin-St Jeor BMR, activity scaling,
//! goal-adjusted target calories and macro gram targets.

use serde::{Deserialize, Serialize};

use super::scaling::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Fixed deficit/surplus applied for a lose/gain goal, roughly 0.45 kg/week.
pub const GOAL_OFFSET_KCAL: f64 = 500.0;

/// Biological sex as used by the Mifflin-St Jeor equation. The formula has
/// exactly two coefficient sets, so the type has exactly two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Canonical activity levels with their McArdle multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Intense,
    VeryIntense,
}

impl ActivityLevel {
    pub const fn factor(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Intense => 1.725,
            Self::VeryIntense => 1.9,
        }
    }
}

/// What the prescription is trying to achieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Maintain,
    Lose,
    Gain,
}

impl GoalKind {
    pub const fn calorie_offset(self) -> f64 {
        match self {
            Self::Maintain => 0.0,
            Self::Lose => -GOAL_OFFSET_KCAL,
            Self::Gain => GOAL_OFFSET_KCAL,
        }
    }
}

/// Inputs for a target-energy estimate. `protein_ratio_g_per_kg` and
/// `fat_percent_of_calories` are clinician-supplied; the engine mandates no
/// defaults for them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnergyInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: Sex,
    /// Usually one of the [`ActivityLevel`] factors; arbitrary positive
    /// floats are accepted numerically but are not a documented input.
    pub activity_factor: f64,
    pub goal: GoalKind,
    pub protein_ratio_g_per_kg: f64,
    pub fat_percent_of_calories: f64,
}

/// Full breakdown of an estimate, kept so a UI can show the derivation
/// steps and not just the final macro grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyTargets {
    pub bmr_kcal: f64,
    pub tdee_kcal: f64,
    pub target_kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

/// Basal metabolic rate, Mifflin-St Jeor (1990).
///
/// Male: 10w + 6.25h − 5a + 5; female: 10w + 6.25h − 5a − 161.
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Run the whole pipeline: BMR → TDEE → goal-adjusted calories → macro grams.
///
/// `None` when weight or height is non-positive or not finite, so a
/// half-filled estimate form gets a sentinel instead of a garbage number.
/// The carb target is not clamped: when protein and fat alone exceed the
/// calorie target it goes negative, and the caller must surface that
/// explicitly.
pub fn calculate_targets(input: &EnergyInput) -> Option<EnergyTargets> {
    if !input.weight_kg.is_finite()
        || !input.height_cm.is_finite()
        || input.weight_kg <= 0.0
        || input.height_cm <= 0.0
    {
        return None;
    }

    let bmr_kcal = mifflin_st_jeor(input.weight_kg, input.height_cm, input.age_years, input.sex);
    let tdee_kcal = bmr_kcal * input.activity_factor;
    let target_kcal = tdee_kcal + input.goal.calorie_offset();

    let protein_g = input.weight_kg * input.protein_ratio_g_per_kg;
    let fat_g = target_kcal * input.fat_percent_of_calories / 100.0 / KCAL_PER_G_FAT;
    let carbs_g =
        (target_kcal - protein_g * KCAL_PER_G_PROTEIN - fat_g * KCAL_PER_G_FAT) / KCAL_PER_G_CARBS;

    Some(EnergyTargets {
        bmr_kcal,
        tdee_kcal,
        target_kcal,
        protein_g,
        fat_g,
        carbs_g,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_input() -> EnergyInput {
        // 30-year-old male, 70 kg, 175 cm, moderate activity, maintenance.
        EnergyInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 30,
            sex: Sex::Male,
            activity_factor: ActivityLevel::Moderate.factor(),
            goal: GoalKind::Maintain,
            protein_ratio_g_per_kg: 1.8,
            fat_percent_of_calories: 25.0,
        }
    }

    #[test]
    fn mifflin_st_jeor_reference_male() {
        let bmr = mifflin_st_jeor(70.0, 175.0, 30, Sex::Male);
        assert_eq!(bmr, 1648.75);
    }

    #[test]
    fn mifflin_st_jeor_female_offset() {
        let male = mifflin_st_jeor(60.0, 165.0, 40, Sex::Male);
        let female = mifflin_st_jeor(60.0, 165.0, 40, Sex::Female);
        assert_eq!(male - female, 166.0);
    }

    #[test]
    fn tdee_scales_bmr_by_activity_factor() {
        let t = calculate_targets(&reference_input()).expect("targets");
        assert_eq!(t.bmr_kcal, 1648.75);
        assert!((t.tdee_kcal - 2555.5625).abs() < 1e-9);
        assert_eq!(t.target_kcal, t.tdee_kcal);
    }

    #[test]
    fn goal_offset_is_a_fixed_500() {
        let mut input = reference_input();
        input.goal = GoalKind::Lose;
        let lose = calculate_targets(&input).expect("targets");
        assert!((lose.target_kcal - (lose.tdee_kcal - 500.0)).abs() < 1e-9);

        input.goal = GoalKind::Gain;
        let gain = calculate_targets(&input).expect("targets");
        assert!((gain.target_kcal - (gain.tdee_kcal + 500.0)).abs() < 1e-9);
    }

    #[test]
    fn macro_targets_follow_the_ratio_inputs() {
        let t = calculate_targets(&reference_input()).expect("targets");
        assert!((t.protein_g - 126.0).abs() < 1e-9);
        let expected_fat = t.target_kcal * 0.25 / 9.0;
        assert!((t.fat_g - expected_fat).abs() < 1e-9);
        let expected_carbs = (t.target_kcal - t.protein_g * 4.0 - t.fat_g * 9.0) / 4.0;
        assert!((t.carbs_g - expected_carbs).abs() < 1e-9);
    }

    #[test]
    fn carb_target_can_go_negative_unclamped() {
        let mut input = reference_input();
        input.protein_ratio_g_per_kg = 10.0;
        input.fat_percent_of_calories = 60.0;
        let t = calculate_targets(&input).expect("targets");
        assert!(t.carbs_g < 0.0);
    }

    #[test]
    fn non_positive_biometrics_return_none() {
        let mut input = reference_input();
        input.weight_kg = 0.0;
        assert_eq!(calculate_targets(&input), None);

        let mut input = reference_input();
        input.height_cm = -1.0;
        assert_eq!(calculate_targets(&input), None);
    }

    #[test]
    fn non_finite_biometrics_return_none() {
        let mut input = reference_input();
        input.weight_kg = f64::NAN;
        assert_eq!(calculate_targets(&input), None);

        let mut input = reference_input();
        input.height_cm = f64::INFINITY;
        assert_eq!(calculate_targets(&input), None);
    }

    #[test]
    fn activity_factors_match_the_canonical_table() {
        let factors: Vec<f64> = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Intense,
            ActivityLevel::VeryIntense,
        ]
        .iter()
        .map(|l| l.factor())
        .collect();
        assert_eq!(factors, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }
}
