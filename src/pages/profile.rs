//! Body profile form: creates the profile on first save, updates it after.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use super::LoadState;
use crate::components::loading::Loading;
use crate::net::types::{ActivityLevel, Gender, Goal, ProfileInput, UserProfile};
use crate::state::auth::use_auth;
use crate::util::date::date_prefix;

/// Raw form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub gender: Gender,
    pub date_of_birth: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub body_fat_percent: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            gender: profile.gender,
            date_of_birth: date_prefix(&profile.date_of_birth).to_owned(),
            height_cm: profile.height_cm.to_string(),
            weight_kg: profile.weight_kg.to_string(),
            activity_level: profile.activity_level,
            goal: profile.goal,
            body_fat_percent: profile.body_fat_percent.map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    /// Check the fields and build the request body.
    ///
    /// # Errors
    ///
    /// Returns the message to show next to the form.
    pub fn validate(&self) -> Result<ProfileInput, &'static str> {
        let date_of_birth = self.date_of_birth.trim();
        if date_of_birth.is_empty() {
            return Err("Please enter your date of birth.");
        }
        let height_cm = parse_positive(&self.height_cm).ok_or("Height must be a positive number.")?;
        let weight_kg = parse_positive(&self.weight_kg).ok_or("Weight must be a positive number.")?;
        let body_fat_percent = match self.body_fat_percent.trim() {
            "" => None,
            raw => Some(
                raw.parse::<f64>()
                    .ok()
                    .filter(|v| (0.0..=100.0).contains(v))
                    .ok_or("Body fat must be between 0 and 100 percent.")?,
            ),
        };
        Ok(ProfileInput {
            gender: self.gender,
            date_of_birth: date_of_birth.to_owned(),
            height_cm,
            weight_kg,
            activity_level: self.activity_level,
            goal: self.goal,
            body_fat_percent,
        })
    }
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

/// Map a `<select>` value back to its enum variant.
fn parse_choice<T: Copy>(all: &[T], wire: fn(T) -> &'static str, value: &str) -> Option<T> {
    all.iter().copied().find(|item| wire(*item) == value)
}

fn submit_label(has_profile: bool, saving: bool) -> &'static str {
    match (has_profile, saving) {
        (_, true) => "Saving...",
        (true, false) => "Update profile",
        (false, false) => "Create profile",
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let profile = RwSignal::new(LoadState::<Option<UserProfile>>::Loading);
    let form = RwSignal::new(ProfileForm::default());
    let saving = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let auth = auth.clone();
        super::spawn_load(profile, async move { crate::net::api::fetch_profile(auth.client()).await });
    }

    Effect::new(move || {
        if let LoadState::Ready(Some(p)) = profile.get() {
            form.set(ProfileForm::from_profile(&p));
        }
    });

    let has_profile = move || profile.with(|p| p.ready().is_some_and(Option::is_some));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let input = match form.with_untracked(ProfileForm::validate) {
            Ok(input) => input,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        notice.set(None);
        saving.set(true);

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let exists = profile.with_untracked(|p| p.ready().is_some_and(Option::is_some));
            leptos::task::spawn_local(async move {
                let saved = if exists {
                    crate::net::api::update_profile(auth.client(), &input).await
                } else {
                    crate::net::api::create_profile(auth.client(), &input).await
                };
                match saved {
                    Ok(p) => {
                        let _ = profile.try_set(LoadState::Ready(Some(p)));
                        let _ = notice.try_set(Some("Profile saved.".to_owned()));
                    }
                    Err(e) => {
                        let _ = error.try_set(Some(e.message()));
                    }
                }
                let _ = saving.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (input, &auth);
    };

    view! {
        <section class="profile-page">
            {move || match profile.get() {
                LoadState::Loading => Some(view! { <Loading message="Loading your profile..."/> }.into_any()),
                LoadState::Failed(msg) => Some(view! { <p class="error">{msg}</p> }.into_any()),
                LoadState::Ready(_) => None,
            }}
            <form class="profile-form" on:submit=on_submit>
                <label>
                    "Gender"
                    <select
                        prop:value=move || form.get().gender.as_str()
                        on:change=move |ev| {
                            if let Some(v) = parse_choice(&Gender::ALL, Gender::as_str, &event_target_value(&ev)) {
                                form.update(|f| f.gender = v);
                            }
                        }
                    >
                        {Gender::ALL
                            .iter()
                            .map(|g| view! { <option value=g.as_str()>{g.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Date of birth"
                    <input
                        type="date"
                        prop:value=move || form.get().date_of_birth
                        on:input=move |ev| form.update(|f| f.date_of_birth = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Height (cm)"
                    <input
                        type="number"
                        step="0.1"
                        prop:value=move || form.get().height_cm
                        on:input=move |ev| form.update(|f| f.height_cm = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Weight (kg)"
                    <input
                        type="number"
                        step="0.1"
                        prop:value=move || form.get().weight_kg
                        on:input=move |ev| form.update(|f| f.weight_kg = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Activity level"
                    <select
                        prop:value=move || form.get().activity_level.as_str()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            if let Some(v) = parse_choice(&ActivityLevel::ALL, ActivityLevel::as_str, &value) {
                                form.update(|f| f.activity_level = v);
                            }
                        }
                    >
                        {ActivityLevel::ALL
                            .iter()
                            .map(|a| view! { <option value=a.as_str()>{a.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Goal"
                    <select
                        prop:value=move || form.get().goal.as_str()
                        on:change=move |ev| {
                            if let Some(v) = parse_choice(&Goal::ALL, Goal::as_str, &event_target_value(&ev)) {
                                form.update(|f| f.goal = v);
                            }
                        }
                    >
                        {Goal::ALL
                            .iter()
                            .map(|g| view! { <option value=g.as_str()>{g.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Body fat % (optional)"
                    <input
                        type="number"
                        step="0.1"
                        prop:value=move || form.get().body_fat_percent
                        on:input=move |ev| form.update(|f| f.body_fat_percent = event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || submit_label(has_profile(), saving.get())}
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
