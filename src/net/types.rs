//! Backend DTOs for the REST API.
//!
//! DESIGN
//! ======
//! These mirror the backend's response schemas. Timestamps and dates stay as
//! the ISO strings the server sends; the UI only displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response of `POST /api/v1/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Intense,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseFat,
    #[default]
    Maintain,
    GainMuscle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Gender {
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl ActivityLevel {
    pub const ALL: [Self; 4] = [Self::Sedentary, Self::Light, Self::Moderate, Self::Intense];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Intense => "intense",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (little or no exercise)",
            Self::Light => "Light (1-3 days per week)",
            Self::Moderate => "Moderate (3-5 days per week)",
            Self::Intense => "Intense (6-7 days per week)",
        }
    }
}

impl Goal {
    pub const ALL: [Self; 3] = [Self::LoseFat, Self::Maintain, Self::GainMuscle];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoseFat => "lose_fat",
            Self::Maintain => "maintain",
            Self::GainMuscle => "gain_muscle",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LoseFat => "Lose fat",
            Self::Maintain => "Maintain weight",
            Self::GainMuscle => "Gain muscle",
        }
    }
}

impl Level {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// A user's body profile and the targets the backend derived from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub user_id: i64,
    pub gender: Gender,
    pub date_of_birth: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub body_fat_percent: Option<f64>,
    pub age: i64,
    pub lean_mass_kg: Option<f64>,
    pub bmr: Option<f64>,
    pub tdee: Option<f64>,
    pub protein_gram: Option<f64>,
    pub carb_gram: Option<f64>,
    pub fat_gram: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

/// Body of profile create/update calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    pub gender: Gender,
    pub date_of_birth: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub bmr: f64,
    pub tdee: f64,
    pub protein_gram: f64,
    pub carb_gram: f64,
    pub fat_gram: f64,
    pub daily_calories: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: i64,
    pub meal_id: i64,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,
    pub meal_plan_id: i64,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub description: Option<String>,
    #[serde(default)]
    pub food_items: Vec<FoodItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: i64,
    pub user_id: i64,
    pub day: u8,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    #[serde(default)]
    pub meals: Vec<Meal>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealInput {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodItemInput {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub workout_plan_id: i64,
    pub name: String,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: i64,
    pub user_id: i64,
    pub day: u8,
    pub muscle_group: String,
    pub level: Level,
    pub notes: Option<String>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    pub created_at: String,
    pub updated_at: String,
}

/// Subscription tier; mirrors the backend role values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    #[default]
    Free,
    Premium,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub user_id: i64,
    pub tier: Tier,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_active: bool,
}

impl Tier {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Premium => "Premium",
        }
    }
}

impl Subscription {
    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.is_active && self.tier == Tier::Premium
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub tier: Tier,
    pub payment_method: String,
}

impl Default for SubscribeRequest {
    fn default() -> Self {
        Self { tier: Tier::Premium, payment_method: "credit_card".to_owned() }
    }
}
