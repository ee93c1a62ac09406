//! Weekly workout plan, generation and workout logging.

#[cfg(test)]
#[path = "workouts_test.rs"]
mod workouts_test;

use leptos::prelude::*;
use serde_json::{Value, json};

use super::LoadState;
use crate::components::loading::Loading;
use crate::net::types::{Exercise, WorkoutPlan};
use crate::state::auth::{AuthContext, use_auth};
use crate::util::date::today_iso;

/// The current plan plus one entry per training day.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutOverview {
    pub plan: WorkoutPlan,
    pub days: Vec<WorkoutPlan>,
}

/// Weekday for the backend's 1-based `day` (1 = Monday).
fn weekday_name(day: u8) -> &'static str {
    match day {
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        7 => "Sunday",
        _ => "Unscheduled",
    }
}

fn exercise_line(exercise: &Exercise) -> String {
    format!("{} x {} reps, rest {}s", exercise.sets, exercise.reps, exercise.rest_seconds)
}

/// Body of a workout log call for `plan_id` on `date`.
fn log_entry(plan_id: i64, date: &str, notes: &str) -> Value {
    let notes = notes.trim();
    json!({
        "workout_plan_id": plan_id,
        "date": date,
        "notes": if notes.is_empty() { Value::Null } else { Value::from(notes) },
    })
}

#[cfg(feature = "hydrate")]
async fn fetch_overview(auth: &AuthContext) -> Result<Option<WorkoutOverview>, crate::net::error::ApiError> {
    let Some(plan) = crate::net::api::fetch_workout_plan(auth.client()).await? else {
        return Ok(None);
    };
    let days = crate::net::api::fetch_workout_days(auth.client(), plan.id).await?;
    Ok(Some(WorkoutOverview { plan, days }))
}

#[cfg(feature = "hydrate")]
fn load_overview(auth: AuthContext, target: RwSignal<LoadState<Option<WorkoutOverview>>>) {
    super::spawn_load(target, async move { fetch_overview(&auth).await });
}

#[component]
pub fn WorkoutsPage() -> impl IntoView {
    let auth = use_auth();
    let overview = RwSignal::new(LoadState::<Option<WorkoutOverview>>::Loading);
    let busy = RwSignal::new(false);
    let notes = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    load_overview(auth.clone(), overview);

    let generate = {
        let auth = auth.clone();
        Callback::new(move |()| generate_plan(auth.clone(), overview, busy, error))
    };
    let log_today = Callback::new(move |plan_id: i64| {
        let entry = log_entry(plan_id, &today_iso(), &notes.get_untracked());
        record_workout(auth.clone(), entry, busy, notes, notice, error);
    });

    view! {
        <section class="workouts-page">
            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            {move || match overview.get() {
                LoadState::Loading => view! { <Loading message="Loading workout plan..."/> }.into_any(),
                LoadState::Failed(msg) => view! { <p class="error">{msg}</p> }.into_any(),
                LoadState::Ready(None) => {
                    view! {
                        <div class="empty-state">
                            <p>"Generate a personalized workout plan based on your fitness goals."</p>
                            <button
                                class="btn btn--primary"
                                disabled=move || busy.get()
                                on:click=move |_| generate.run(())
                            >
                                {move || if busy.get() { "Generating..." } else { "Generate workout plan" }}
                            </button>
                        </div>
                    }
                        .into_any()
                }
                LoadState::Ready(Some(WorkoutOverview { plan, days })) => {
                    let plan_id = plan.id;
                    view! {
                        <div class="workout-plan">
                            <p class="workout-plan__summary">
                                {format!("{} | {}", plan.muscle_group, plan.level.label())}
                            </p>
                            {plan.notes.map(|n| view! { <p class="workout-plan__notes">{n}</p> })}
                            <ul class="workout-plan__days">
                                {days.into_iter().map(|day| view! { <WorkoutDayCard day=day/> }).collect_view()}
                            </ul>
                            <div class="workout-log">
                                <h3>"Log today's workout"</h3>
                                <textarea
                                    placeholder="How did it go?"
                                    prop:value=move || notes.get()
                                    on:input=move |ev| notes.set(event_target_value(&ev))
                                ></textarea>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || busy.get()
                                    on:click=move |_| log_today.run(plan_id)
                                >
                                    "Log workout"
                                </button>
                            </div>
                            <button
                                class="btn btn--secondary"
                                disabled=move || busy.get()
                                on:click=move |_| generate.run(())
                            >
                                "Generate a new plan"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn WorkoutDayCard(day: WorkoutPlan) -> impl IntoView {
    view! {
        <li class="workout-day">
            <h3>{format!("{}: {}", weekday_name(day.day), day.muscle_group)}</h3>
            <ul class="workout-day__exercises">
                {day
                    .exercises
                    .into_iter()
                    .map(|exercise| {
                        let line = exercise_line(&exercise);
                        view! {
                            <li>
                                <strong>{exercise.name}</strong>
                                " "
                                <span>{line}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </li>
    }
}

fn generate_plan(
    auth: AuthContext,
    overview: RwSignal<LoadState<Option<WorkoutOverview>>>,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    if busy.get_untracked() {
        return;
    }
    busy.set(true);
    error.set(None);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::generate_workout_plan(auth.client()).await {
            Ok(_) => load_overview(auth, overview),
            Err(e) => {
                let _ = error.try_set(Some(e.message()));
            }
        }
        let _ = busy.try_set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, overview);
}

fn record_workout(
    auth: AuthContext,
    entry: Value,
    busy: RwSignal<bool>,
    notes: RwSignal<String>,
    notice: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
) {
    if busy.get_untracked() {
        return;
    }
    busy.set(true);
    error.set(None);
    notice.set(None);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::log_workout(auth.client(), &entry).await {
            Ok(_) => {
                let _ = notes.try_set(String::new());
                let _ = notice.try_set(Some("Workout logged.".to_owned()));
            }
            Err(e) => {
                let _ = error.try_set(Some(e.message()));
            }
        }
        let _ = busy.try_set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, entry, notes);
}
