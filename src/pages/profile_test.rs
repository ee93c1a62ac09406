use super::*;

fn filled() -> ProfileForm {
    ProfileForm {
        gender: Gender::Female,
        date_of_birth: " 1990-04-12 ".to_owned(),
        height_cm: "168.5".to_owned(),
        weight_kg: "61".to_owned(),
        activity_level: ActivityLevel::Light,
        goal: Goal::LoseFat,
        body_fat_percent: String::new(),
    }
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn validate_builds_input_from_valid_form() {
    let input = filled().validate().unwrap();
    assert_eq!(input.date_of_birth, "1990-04-12");
    assert!((input.height_cm - 168.5).abs() < f64::EPSILON);
    assert!((input.weight_kg - 61.0).abs() < f64::EPSILON);
    assert_eq!(input.gender, Gender::Female);
    assert_eq!(input.body_fat_percent, None);
}

#[test]
fn validate_requires_date_of_birth() {
    let form = ProfileForm { date_of_birth: "  ".to_owned(), ..filled() };
    assert_eq!(form.validate(), Err("Please enter your date of birth."));
}

#[test]
fn validate_rejects_non_positive_height_and_weight() {
    let zero_height = ProfileForm { height_cm: "0".to_owned(), ..filled() };
    assert_eq!(zero_height.validate(), Err("Height must be a positive number."));
    let negative_weight = ProfileForm { weight_kg: "-3".to_owned(), ..filled() };
    assert_eq!(negative_weight.validate(), Err("Weight must be a positive number."));
    let garbage = ProfileForm { weight_kg: "abc".to_owned(), ..filled() };
    assert_eq!(garbage.validate(), Err("Weight must be a positive number."));
}

#[test]
fn validate_accepts_body_fat_bounds_inclusive() {
    let low = ProfileForm { body_fat_percent: "0".to_owned(), ..filled() };
    assert_eq!(low.validate().unwrap().body_fat_percent, Some(0.0));
    let high = ProfileForm { body_fat_percent: "100".to_owned(), ..filled() };
    assert_eq!(high.validate().unwrap().body_fat_percent, Some(100.0));
}

#[test]
fn validate_rejects_body_fat_out_of_range() {
    let over = ProfileForm { body_fat_percent: "100.5".to_owned(), ..filled() };
    assert_eq!(over.validate(), Err("Body fat must be between 0 and 100 percent."));
    let under = ProfileForm { body_fat_percent: "-1".to_owned(), ..filled() };
    assert_eq!(under.validate(), Err("Body fat must be between 0 and 100 percent."));
}

// =============================================================================
// helpers
// =============================================================================

#[test]
fn from_profile_round_trips_through_validate() {
    let profile = UserProfile {
        id: 1,
        user_id: 2,
        gender: Gender::Male,
        date_of_birth: "1985-09-30T00:00:00".to_owned(),
        height_cm: 180.0,
        weight_kg: 82.5,
        activity_level: ActivityLevel::Intense,
        goal: Goal::GainMuscle,
        body_fat_percent: Some(18.0),
        age: 39,
        lean_mass_kg: None,
        bmr: None,
        tdee: None,
        protein_gram: None,
        carb_gram: None,
        fat_gram: None,
        created_at: "2024-01-01T00:00:00".to_owned(),
        updated_at: "2024-01-01T00:00:00".to_owned(),
    };
    let form = ProfileForm::from_profile(&profile);
    assert_eq!(form.date_of_birth, "1985-09-30");
    let input = form.validate().unwrap();
    assert_eq!(input.goal, Goal::GainMuscle);
    assert_eq!(input.body_fat_percent, Some(18.0));
    assert!((input.weight_kg - 82.5).abs() < f64::EPSILON);
}

#[test]
fn parse_choice_matches_wire_names() {
    assert_eq!(parse_choice(&Goal::ALL, Goal::as_str, "gain_muscle"), Some(Goal::GainMuscle));
    assert_eq!(parse_choice(&Goal::ALL, Goal::as_str, "Gain muscle"), None);
}

#[test]
fn submit_label_depends_on_mode() {
    assert_eq!(submit_label(false, false), "Create profile");
    assert_eq!(submit_label(true, false), "Update profile");
    assert_eq!(submit_label(true, true), "Saving...");
}
