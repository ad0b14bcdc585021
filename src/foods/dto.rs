use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateFoodRequest {
    pub name: String,
    pub food_group: String,
    #[serde(default)]
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: Option<f64>,
    pub sodium_mg: Option<f64>,
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    "custom".into()
}

#[derive(Debug, Serialize)]
pub struct FoodResponse {
    pub id: Uuid,
    pub name: String,
    pub food_group: String,
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: Option<f64>,
    pub sodium_mg: Option<f64>,
    pub source: String,
    pub created_at: OffsetDateTime,
}

impl From<super::repo::Food> for FoodResponse {
    fn from(f: super::repo::Food) -> Self {
        Self {
            id: f.id,
            name: f.name,
            food_group: f.food_group,
            calories_kcal: f.calories_kcal,
            protein_g: f.protein_g,
            carbs_g: f.carbs_g,
            fat_g: f.fat_g,
            fiber_g: f.fiber_g,
            sodium_mg: f.sodium_mg,
            source: f.source,
            created_at: f.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FoodSearch {
    pub search: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}
fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize)]
pub struct PutOverrideRequest {
    pub grams_per_unit: f64,
}
