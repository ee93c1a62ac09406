use super::*;

// =============================================================
// Enum wire names
// =============================================================

#[test]
fn goal_uses_snake_case_on_the_wire() {
    assert_eq!(serde_json::to_value(Goal::LoseFat).unwrap(), serde_json::json!("lose_fat"));
    assert_eq!(serde_json::from_value::<Goal>(serde_json::json!("gain_muscle")).unwrap(), Goal::GainMuscle);
}

#[test]
fn enum_as_str_matches_serde_names() {
    for g in Gender::ALL {
        assert_eq!(serde_json::to_value(g).unwrap(), serde_json::json!(g.as_str()));
    }
    for a in ActivityLevel::ALL {
        assert_eq!(serde_json::to_value(a).unwrap(), serde_json::json!(a.as_str()));
    }
    for g in Goal::ALL {
        assert_eq!(serde_json::to_value(g).unwrap(), serde_json::json!(g.as_str()));
    }
}

// =============================================================
// Backend payloads
// =============================================================

#[test]
fn meal_plan_without_meals_defaults_to_empty() {
    let plan: MealPlan = serde_json::from_value(serde_json::json!({
        "id": 1, "user_id": 2, "day": 3,
        "total_calories": 2000.0, "total_protein": 150.0,
        "total_carbs": 200.0, "total_fat": 60.0,
        "created_at": "2024-01-01T00:00:00", "updated_at": "2024-01-01T00:00:00"
    }))
    .unwrap();
    assert!(plan.meals.is_empty());
    assert_eq!(plan.day, 3);
}

#[test]
fn profile_input_omits_absent_body_fat() {
    let input = ProfileInput {
        gender: Gender::Female,
        date_of_birth: "1990-05-01".to_owned(),
        height_cm: 170.0,
        weight_kg: 65.0,
        activity_level: ActivityLevel::Light,
        goal: Goal::Maintain,
        body_fat_percent: None,
    };
    let value = serde_json::to_value(&input).unwrap();
    assert!(value.get("body_fat_percent").is_none());
    assert_eq!(value["activity_level"], "light");
}

#[test]
fn subscription_is_premium_requires_active_premium() {
    let mut sub = Subscription {
        id: 1,
        user_id: 1,
        tier: Tier::Premium,
        start_date: "2024-01-01T00:00:00".to_owned(),
        end_date: None,
        is_active: true,
    };
    assert!(sub.is_premium());
    sub.is_active = false;
    assert!(!sub.is_premium());
    sub.is_active = true;
    sub.tier = Tier::Free;
    assert!(!sub.is_premium());
}

#[test]
fn subscribe_request_defaults_to_premium() {
    let value = serde_json::to_value(SubscribeRequest::default()).unwrap();
    assert_eq!(value, serde_json::json!({"tier": "premium", "payment_method": "credit_card"}));
}

#[test]
fn labels_are_for_display_not_the_wire() {
    assert_eq!(Goal::LoseFat.label(), "Lose fat");
    assert_eq!(Goal::LoseFat.as_str(), "lose_fat");
    assert_eq!(Tier::Premium.label(), "Premium");
    assert_eq!(Level::Intermediate.label(), "Intermediate");
}
