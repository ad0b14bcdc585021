//! Pure nutrition/energy calculation engine.
//!
//! Everything in this module is a synchronous, side-effect-free function over
//! value inputs. Fetching foods, measures and prescriptions happens in the
//! surrounding modules; by the time these functions run, every input is a
//! plain value, so they are safe to call speculatively (e.g. live form
//! previews) and from concurrent handlers without coordination.

pub mod adherence;
pub mod body;
pub mod conversion;
pub mod energy;
pub mod projection;
pub mod scaling;

pub use adherence::adherence;
pub use body::{bmi, BmiCategory};
pub use conversion::{quantity_to_grams, ConversionError};
pub use energy::{calculate_targets, ActivityLevel, EnergyInput, EnergyTargets, GoalKind, Sex};
pub use projection::{project, WeightProjection, WeightTrend};
pub use scaling::{aggregate, scale_nutrients, NutrientProfile, NutrientTotals};
