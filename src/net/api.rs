//! Typed wrappers over the backend REST routes.
//!
//! All routes live under `/api/v1`. Lookups of things the user may not have
//! created yet (profile, meal plan, workout plan, subscription) map `404` to
//! `Ok(None)` so pages can show an empty state; every other failure is
//! returned as-is.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::request::{ApiClient, RequestOptions};
use super::transport::Transport;
use super::types::{
    FoodItemInput, Meal, MealInput, MealPlan, MessageResponse, NutritionPlan, ProfileInput, SubscribeRequest,
    Subscription, TokenResponse, UserProfile, WorkoutPlan,
};
use crate::util::storage::CredentialStore;

pub const LOGIN_ENDPOINT: &str = "/api/v1/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/v1/auth/register";
pub const PROFILE_ENDPOINT: &str = "/api/v1/user/profile";
pub const NUTRITION_PLAN_ENDPOINT: &str = "/api/v1/nutrition/plan";
pub const WORKOUT_PLAN_ENDPOINT: &str = "/api/v1/workout/plan";
pub const GENERATE_WORKOUT_ENDPOINT: &str = "/api/v1/workout/generate-plan";
pub const WORKOUT_LOG_ENDPOINT: &str = "/api/v1/workout/log";
pub const SUBSCRIPTION_ENDPOINT: &str = "/api/v1/subscription";
pub const SUBSCRIBE_ENDPOINT: &str = "/api/v1/subscription/subscribe";
pub const CANCEL_SUBSCRIPTION_ENDPOINT: &str = "/api/v1/subscription/cancel";

fn meal_plan_endpoint(date: &str) -> String {
    format!("/api/v1/nutrition/meal-plan/{date}")
}

fn generate_meal_plan_endpoint(date: &str) -> String {
    format!("/api/v1/nutrition/generate-meal-plan/{date}")
}

fn custom_meal_endpoint(meal_plan_id: i64) -> String {
    format!("/api/v1/nutrition/meal-plan/{meal_plan_id}/meal")
}

fn meal_food_endpoint(meal_id: i64) -> String {
    format!("/api/v1/nutrition/meal/{meal_id}/food")
}

fn workout_days_endpoint(plan_id: i64) -> String {
    format!("/api/v1/workout/plan/{plan_id}/days")
}

fn to_json<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::transport(e.to_string()))
}

async fn call<R, T, S>(client: &ApiClient<T, S>, endpoint: &str, options: RequestOptions) -> Result<R, ApiError>
where
    R: DeserializeOwned,
    T: Transport,
    S: CredentialStore,
{
    client.request(endpoint, options).await?.into_typed()
}

/// Turn a `404` into `Ok(None)`.
fn optional<R>(result: Result<R, ApiError>) -> Result<Option<R>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange email + password for a bearer credential.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] for any failed call.
pub async fn login<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
    email: &str,
    password: &str,
) -> Result<TokenResponse, ApiError> {
    let options = RequestOptions::post()
        .form([("username", email), ("password", password)])
        .public();
    call(client, LOGIN_ENDPOINT, options).await
}

/// Create an account. Does not sign in.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] for any failed call.
pub async fn register<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
    email: &str,
    password: &str,
) -> Result<MessageResponse, ApiError> {
    let options = RequestOptions::post()
        .json(serde_json::json!({ "email": email, "password": password }))
        .public();
    call(client, REGISTER_ENDPOINT, options).await
}

// =============================================================================
// PROFILE
// =============================================================================

/// Fetch the signed-in user's profile; `None` if none was created yet.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] for any failure other than `404`.
pub async fn fetch_profile<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
) -> Result<Option<UserProfile>, ApiError> {
    optional(call(client, PROFILE_ENDPOINT, RequestOptions::get()).await)
}

/// # Errors
///
/// Returns the normalized [`ApiError`] for any failed call.
pub async fn create_profile<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
    input: &ProfileInput,
) -> Result<UserProfile, ApiError> {
    call(client, PROFILE_ENDPOINT, RequestOptions::post().json(to_json(input)?)).await
}

/// # Errors
///
/// Returns the normalized [`ApiError`] for any failed call.
pub async fn update_profile<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
    input: &ProfileInput,
) -> Result<UserProfile, ApiError> {
    call(client, PROFILE_ENDPOINT, RequestOptions::put().json(to_json(input)?)).await
}

// =============================================================================
// NUTRITION
// =============================================================================

/// # Errors
///
/// Returns the normalized [`ApiError`] for any failed call.
pub async fn fetch_nutrition_plan<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
) -> Result<NutritionPlan, ApiError> {
    call(client, NUTRITION_PLAN_ENDPOINT, RequestOptions::get()).await
}

/// Fetch the meal plan for `date` (`YYYY-MM-DD`); `None` if none exists.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] for any failure other than `404`.
pub async fn fetch_meal_plan<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
    date: &str,
) -> Result<Option<MealPlan>, ApiError> {
    optional(call(client, &meal_plan_endpoint(date), RequestOptions::get()).await)
}

/// Ask the backend to generate a meal plan for `date`. The response shape is
/// backend-defined.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] for any failed call.
pub async fn generate_meal_plan<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
    date: &str,
) -> Result<Value, ApiError> {
    call(client, &generate_meal_plan_endpoint(date), RequestOptions::post()).await
}

/// # Errors
///
/// Returns the normalized [`ApiError`] for any failed call.
pub async fn add_custom_meal<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
    meal_plan_id: i64,
    meal: &MealInput,
) -> Result<Meal, ApiError> {
    call(client, &custom_meal_endpoint(meal_plan_id), RequestOptions::post().json(to_json(meal)?)).await
}

/// # Errors
///
/// Returns the normalized [`ApiError`] for any failed call.
pub async fn add_food_to_meal<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
    meal_id: i64,
    food: &FoodItemInput,
) -> Result<Value, ApiError> {
    call(client, &meal_food_endpoint(meal_id), RequestOptions::post().json(to_json(food)?)).await
}

// =============================================================================
// WORKOUT
// =============================================================================

/// Fetch the current workout plan; `None` if none was generated yet.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] for any failure other than `404`.
pub async fn fetch_workout_plan<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
) -> Result<Option<WorkoutPlan>, ApiError> {
    optional(call(client, WORKOUT_PLAN_ENDPOINT, RequestOptions::get()).await)
}

/// # Errors
///
/// Returns the normalized [`ApiError`] for any failed call.
pub async fn fetch_workout_days<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
    plan_id: i64,
) -> Result<Vec<WorkoutPlan>, ApiError> {
    call(client, &workout_days_endpoint(plan_id), RequestOptions::get()).await
}

/// # Errors
///
/// Returns the normalized [`ApiError`] for any failed call.
pub async fn generate_workout_plan<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
) -> Result<WorkoutPlan, ApiError> {
    call(client, GENERATE_WORKOUT_ENDPOINT, RequestOptions::post()).await
}

/// Record a completed workout. Entry and response shapes are backend-defined.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] for any failed call.
pub async fn log_workout<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
    entry: &Value,
) -> Result<Value, ApiError> {
    call(client, WORKOUT_LOG_ENDPOINT, RequestOptions::post().json(entry.clone())).await
}

// =============================================================================
// SUBSCRIPTION
// =============================================================================

/// Fetch the current subscription; `None` means free tier.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] for any failure other than `404`.
pub async fn fetch_subscription<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
) -> Result<Option<Subscription>, ApiError> {
    optional(call(client, SUBSCRIPTION_ENDPOINT, RequestOptions::get()).await)
}

/// # Errors
///
/// Returns the normalized [`ApiError`] for any failed call.
pub async fn subscribe<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
    request: &SubscribeRequest,
) -> Result<Subscription, ApiError> {
    call(client, SUBSCRIBE_ENDPOINT, RequestOptions::post().json(to_json(request)?)).await
}

/// # Errors
///
/// Returns the normalized [`ApiError`] for any failed call.
pub async fn cancel_subscription<T: Transport, S: CredentialStore>(
    client: &ApiClient<T, S>,
) -> Result<Value, ApiError> {
    call(client, CANCEL_SUBSCRIPTION_ENDPOINT, RequestOptions::post()).await
}
