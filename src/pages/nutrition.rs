//! Daily targets and today's meal plan.

#[cfg(test)]
#[path = "nutrition_test.rs"]
mod nutrition_test;

use leptos::prelude::*;

use super::{LoadState, format_amount};
use crate::components::loading::Loading;
use crate::components::premium_gate::PremiumGate;
use crate::net::types::{Meal, MealPlan, NutritionPlan};
use crate::state::auth::{AuthContext, use_auth};
use crate::util::date::today_iso;

/// Share of the daily calorie target covered by `plan`, as a whole percent.
fn calorie_coverage(plan: &MealPlan, target: &NutritionPlan) -> Option<u32> {
    if target.daily_calories <= 0.0 || !plan.total_calories.is_finite() {
        return None;
    }
    let ratio = (plan.total_calories / target.daily_calories * 100.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(ratio.max(0.0) as u32)
}

fn macro_line(meal: &Meal) -> String {
    format!(
        "{} | P {} | C {} | F {}",
        format_amount(Some(meal.calories), "kcal"),
        format_amount(Some(meal.protein), "g"),
        format_amount(Some(meal.carbs), "g"),
        format_amount(Some(meal.fat), "g"),
    )
}

#[cfg(feature = "hydrate")]
fn load_meal_plan(auth: AuthContext, target: RwSignal<LoadState<Option<MealPlan>>>, date: String) {
    super::spawn_load(target, async move { crate::net::api::fetch_meal_plan(auth.client(), &date).await });
}

#[component]
pub fn NutritionPage() -> impl IntoView {
    let auth = use_auth();
    let today = today_iso();
    let targets = RwSignal::new(LoadState::<NutritionPlan>::Loading);
    let meal_plan = RwSignal::new(LoadState::<Option<MealPlan>>::Loading);
    let generating = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let auth = auth.clone();
        super::spawn_load(targets, async move { crate::net::api::fetch_nutrition_plan(auth.client()).await });
    }
    #[cfg(feature = "hydrate")]
    load_meal_plan(auth.clone(), meal_plan, today.clone());

    let generate = Callback::new(move |()| generate_for(auth.clone(), today.clone(), meal_plan, generating, error));

    view! {
        <section class="nutrition-page">
            <h2>"Daily targets"</h2>
            {move || match targets.get() {
                LoadState::Loading => view! { <Loading message="Loading nutrition plan..."/> }.into_any(),
                LoadState::Failed(msg) => view! { <p class="error">{msg}</p> }.into_any(),
                LoadState::Ready(plan) => view! { <TargetsCard plan=plan/> }.into_any(),
            }}
            <h2>"Today's meals"</h2>
            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || match meal_plan.get() {
                LoadState::Loading => view! { <Loading message="Loading meal plan..."/> }.into_any(),
                LoadState::Failed(msg) => view! { <p class="error">{msg}</p> }.into_any(),
                LoadState::Ready(None) => {
                    view! {
                        <div class="empty-state">
                            <p>"No meal plan for today yet."</p>
                            <button
                                class="btn btn--primary"
                                disabled=move || generating.get()
                                on:click=move |_| generate.run(())
                            >
                                {move || if generating.get() { "Generating..." } else { "Generate meal plan" }}
                            </button>
                        </div>
                    }
                        .into_any()
                }
                LoadState::Ready(Some(plan)) => {
                    let coverage = targets.with(|t| t.ready().and_then(|t| calorie_coverage(&plan, t)));
                    view! {
                        <div class="meal-plan">
                            <p class="meal-plan__totals">
                                {format_amount(Some(plan.total_calories), "kcal")}
                                {coverage.map(|pct| format!(" ({pct}% of target)"))}
                            </p>
                            <ul class="meal-plan__meals">
                                {plan
                                    .meals
                                    .into_iter()
                                    .map(|meal| {
                                        let line = macro_line(&meal);
                                        view! {
                                            <li class="meal">
                                                <h3>{meal.name}</h3>
                                                <p class="meal__macros">{line}</p>
                                                {meal.description.map(|d| view! { <p class="meal__description">{d}</p> })}
                                                <ul class="meal__foods">
                                                    {meal
                                                        .food_items
                                                        .into_iter()
                                                        .map(|food| {
                                                            view! {
                                                                <li>
                                                                    {format!("{} ({} {})", food.name, food.quantity, food.unit)}
                                                                </li>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </ul>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                            <PremiumGate>
                                <button
                                    class="btn btn--secondary"
                                    disabled=move || generating.get()
                                    on:click=move |_| generate.run(())
                                >
                                    {move || if generating.get() { "Regenerating..." } else { "Regenerate meal plan" }}
                                </button>
                            </PremiumGate>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn TargetsCard(plan: NutritionPlan) -> impl IntoView {
    view! {
        <dl class="targets">
            <dt>"Calories"</dt>
            <dd>{format_amount(Some(plan.daily_calories), "kcal")}</dd>
            <dt>"Protein"</dt>
            <dd>{format_amount(Some(plan.protein_gram), "g")}</dd>
            <dt>"Carbs"</dt>
            <dd>{format_amount(Some(plan.carb_gram), "g")}</dd>
            <dt>"Fat"</dt>
            <dd>{format_amount(Some(plan.fat_gram), "g")}</dd>
            <dt>"BMR"</dt>
            <dd>{format_amount(Some(plan.bmr), "kcal")}</dd>
            <dt>"TDEE"</dt>
            <dd>{format_amount(Some(plan.tdee), "kcal")}</dd>
        </dl>
    }
}

/// Generate (or regenerate) the plan for `date`, then reload it.
fn generate_for(
    auth: AuthContext,
    date: String,
    meal_plan: RwSignal<LoadState<Option<MealPlan>>>,
    generating: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    if generating.get_untracked() {
        return;
    }
    generating.set(true);
    error.set(None);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::generate_meal_plan(auth.client(), &date).await {
            Ok(_) => load_meal_plan(auth, meal_plan, date),
            Err(e) => {
                let _ = error.try_set(Some(e.message()));
            }
        }
        let _ = generating.try_set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, date, meal_plan);
}
