use futures::executor::block_on;

use super::*;
use crate::config::ApiConfig;
use crate::net::testing::FakeTransport;
use crate::net::transport::Method;
use crate::net::types::Tier;
use crate::util::storage::MemoryStore;

fn signed_in() -> (ApiClient<FakeTransport, MemoryStore>, FakeTransport) {
    let transport = FakeTransport::default();
    let client = ApiClient::new(
        ApiConfig::from_value(Some("http://api.test")),
        transport.clone(),
        MemoryStore::with_token("tok"),
    );
    (client, transport)
}

fn subscription_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7, "user_id": 3, "tier": "premium",
        "start_date": "2024-01-01T00:00:00", "end_date": null, "is_active": true
    })
}

// =============================================================
// Path helpers
// =============================================================

#[test]
fn dynamic_endpoints_format_expected_paths() {
    assert_eq!(meal_plan_endpoint("2024-03-05"), "/api/v1/nutrition/meal-plan/2024-03-05");
    assert_eq!(generate_meal_plan_endpoint("2024-03-05"), "/api/v1/nutrition/generate-meal-plan/2024-03-05");
    assert_eq!(custom_meal_endpoint(4), "/api/v1/nutrition/meal-plan/4/meal");
    assert_eq!(meal_food_endpoint(9), "/api/v1/nutrition/meal/9/food");
    assert_eq!(workout_days_endpoint(12), "/api/v1/workout/plan/12/days");
}

// =============================================================
// Auth
// =============================================================

#[test]
fn login_posts_form_without_credential() {
    let transport = FakeTransport::default();
    let client = ApiClient::new(ApiConfig::from_value(Some("http://api.test")), transport.clone(), MemoryStore::default());
    transport.reply_json(200, serde_json::json!({"access_token": "a.b.c", "token_type": "bearer"}));

    let token = block_on(login(&client, "me@x.com", "secret")).unwrap();
    assert_eq!(token.access_token, "a.b.c");

    let sent = transport.last_sent();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, "http://api.test/api/v1/auth/login");
    assert_eq!(sent.body.as_deref(), Some("username=me%40x.com&password=secret"));
    assert!(sent.header("Authorization").is_none());
}

#[test]
fn register_posts_json_without_credential() {
    let transport = FakeTransport::default();
    let client = ApiClient::new(ApiConfig::from_value(Some("http://api.test")), transport.clone(), MemoryStore::default());
    transport.reply_json(200, serde_json::json!({"message": "User registered successfully"}));

    let resp = block_on(register(&client, "me@x.com", "longpassword")).unwrap();
    assert_eq!(resp.message, "User registered successfully");

    let sent = transport.last_sent();
    assert_eq!(sent.url, "http://api.test/api/v1/auth/register");
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({"email": "me@x.com", "password": "longpassword"}));
}

#[test]
fn register_conflict_propagates_detail() {
    let transport = FakeTransport::default();
    let client = ApiClient::new(ApiConfig::from_value(None), transport.clone(), MemoryStore::default());
    transport.reply_json(400, serde_json::json!({"detail": "Email already registered"}));
    let err = block_on(register(&client, "me@x.com", "longpassword")).unwrap_err();
    assert_eq!(err.status(), 400);
    assert_eq!(err.message(), "Email already registered");
}

// =============================================================
// Optional lookups (404 -> None)
// =============================================================

#[test]
fn fetch_profile_not_found_is_none() {
    let (client, transport) = signed_in();
    transport.reply_json(404, serde_json::json!({"detail": "Profile not found"}));
    assert_eq!(block_on(fetch_profile(&client)).unwrap(), None);
}

#[test]
fn fetch_meal_plan_not_found_is_none() {
    let (client, transport) = signed_in();
    transport.reply_json(404, serde_json::json!({"detail": "Meal plan not found"}));
    assert_eq!(block_on(fetch_meal_plan(&client, "2024-03-05")).unwrap(), None);
    assert_eq!(transport.last_sent().url, "http://api.test/api/v1/nutrition/meal-plan/2024-03-05");
}

#[test]
fn fetch_workout_plan_server_error_is_hard_error() {
    let (client, transport) = signed_in();
    transport.reply_json(500, serde_json::json!({"detail": "boom"}));
    let err = block_on(fetch_workout_plan(&client)).unwrap_err();
    assert_eq!(err.status(), 500);
}

#[test]
fn fetch_subscription_found_is_some() {
    let (client, transport) = signed_in();
    transport.reply_json(200, subscription_json());
    let sub = block_on(fetch_subscription(&client)).unwrap().unwrap();
    assert_eq!(sub.tier, Tier::Premium);
    assert!(sub.is_premium());
}

#[test]
fn optional_lookup_still_requires_credential() {
    let transport = FakeTransport::default();
    let client = ApiClient::new(ApiConfig::from_value(None), transport.clone(), MemoryStore::default());
    let err = block_on(fetch_profile(&client)).unwrap_err();
    assert_eq!(err, ApiError::AuthRequired);
    assert!(transport.sent().is_empty());
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn subscribe_sends_tier_and_parses_subscription() {
    let (client, transport) = signed_in();
    transport.reply_json(200, subscription_json());
    let sub = block_on(subscribe(&client, &SubscribeRequest::default())).unwrap();
    assert_eq!(sub.id, 7);

    let sent = transport.last_sent();
    assert_eq!(sent.url, "http://api.test/api/v1/subscription/subscribe");
    assert_eq!(sent.header("Authorization"), Some("Bearer tok"));
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["tier"], "premium");
}

#[test]
fn cancel_subscription_posts_without_body() {
    let (client, transport) = signed_in();
    transport.reply_json(200, serde_json::json!({"message": "cancelled"}));
    block_on(cancel_subscription(&client)).unwrap();
    let sent = transport.last_sent();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, "http://api.test/api/v1/subscription/cancel");
    assert!(sent.body.is_none());
}

#[test]
fn log_workout_forwards_entry_verbatim() {
    let (client, transport) = signed_in();
    transport.reply_json(200, serde_json::json!({"ok": true}));
    let entry = serde_json::json!({"workout_plan_id": 3, "notes": "felt strong"});
    let resp = block_on(log_workout(&client, &entry)).unwrap();
    assert_eq!(resp, serde_json::json!({"ok": true}));
    let body: serde_json::Value = serde_json::from_str(transport.last_sent().body.as_deref().unwrap()).unwrap();
    assert_eq!(body, entry);
}

#[test]
fn typed_response_mismatch_is_status_zero() {
    let (client, transport) = signed_in();
    transport.reply_json(200, serde_json::json!({"unexpected": true}));
    let err = block_on(fetch_nutrition_plan(&client)).unwrap_err();
    assert_eq!(err.status(), 0);
}
