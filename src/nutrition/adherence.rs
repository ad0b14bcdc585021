//! Intake-vs-prescription adherence.

/// Percentage of a prescribed goal actually consumed.
///
/// `None` when no goal is set (absent or non-positive); that is a "no goal"
/// sentinel for the caller to render, never a 0% or a division by zero. The
/// raw percentage is not clamped — values over 100 mean overconsumption;
/// rounding for display is the caller's concern.
pub fn adherence(consumed: f64, goal: Option<f64>) -> Option<f64> {
    match goal {
        Some(g) if g > 0.0 => Some(consumed / g * 100.0),
        _ => None,
    }
}
