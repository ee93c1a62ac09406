//! Dashboard shell and its landing view.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DashboardLayout` is the parent route of every `/dashboard/*` view. It
//! owns the guard, so child pages can assume a signed-in session.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_location;

use super::{LoadState, format_amount};
use crate::components::auth_guard::AuthGuard;
use crate::components::loading::Loading;
use crate::net::types::UserProfile;
use crate::routes::Route;
use crate::state::auth::use_auth;

/// Name shown in greetings: the local part of the email address.
fn display_name(email: &str) -> &str {
    match email.split_once('@') {
        Some((local, _)) if !local.is_empty() => local,
        _ => email,
    }
}

fn greeting(email: Option<&str>) -> String {
    match email.map(display_name) {
        Some(name) if !name.is_empty() => format!("Welcome back, {name}!"),
        _ => "Welcome back!".to_owned(),
    }
}

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let title = move || Route::dashboard_title(&pathname.get());

    view! {
        <AuthGuard>
            <div class="dashboard">
                <DashboardSidebar/>
                <main class="dashboard__main">
                    <header class="dashboard__header">
                        <h1>{title}</h1>
                    </header>
                    <Outlet/>
                </main>
            </div>
        </AuthGuard>
    }
}

#[component]
fn DashboardSidebar() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let email = move || state.get().user.map(|u| u.email).unwrap_or_default();

    // The enclosing guard redirects to sign-in when the session drops.
    let on_logout = move |_| {
        auth.logout();
    };

    view! {
        <aside class="dashboard__sidebar">
            <h2 class="dashboard__brand">"Planova"</h2>
            <nav class="dashboard__nav">
                {Route::DASHBOARD_NAV
                    .iter()
                    .map(|(route, label)| {
                        view! {
                            <A href=route.path() exact=true>
                                {*label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="dashboard__account">
                <span class="dashboard__email">{email}</span>
                <button class="btn btn--secondary" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </aside>
    }
}

#[component]
pub fn DashboardHome() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let profile = RwSignal::new(LoadState::<Option<UserProfile>>::Loading);

    #[cfg(feature = "hydrate")]
    super::spawn_load(profile, async move { crate::net::api::fetch_profile(auth.client()).await });

    let heading = move || greeting(state.get().user.as_ref().map(|u| u.email.as_str()));

    view! {
        <section class="dashboard-home">
            <h2>{heading}</h2>
            {move || match profile.get() {
                LoadState::Loading => view! { <Loading message="Loading your dashboard..."/> }.into_any(),
                LoadState::Failed(msg) => view! { <p class="error">{msg}</p> }.into_any(),
                LoadState::Ready(None) => {
                    view! {
                        <div class="empty-state">
                            <p>
                                "To get started, complete your profile so we can create personalized plans for you."
                            </p>
                            <A href=Route::Profile.path()>"Create your profile"</A>
                        </div>
                    }
                        .into_any()
                }
                LoadState::Ready(Some(p)) => view! { <ProfileSummary profile=p/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ProfileSummary(profile: UserProfile) -> impl IntoView {
    view! {
        <div class="profile-summary">
            <dl>
                <dt>"Age"</dt>
                <dd>{profile.age}</dd>
                <dt>"Height"</dt>
                <dd>{format_amount(Some(profile.height_cm), "cm")}</dd>
                <dt>"Weight"</dt>
                <dd>{format_amount(Some(profile.weight_kg), "kg")}</dd>
                <dt>"Goal"</dt>
                <dd>{profile.goal.label()}</dd>
                <dt>"Daily energy (TDEE)"</dt>
                <dd>{format_amount(profile.tdee, "kcal")}</dd>
                <dt>"Protein"</dt>
                <dd>{format_amount(profile.protein_gram, "g")}</dd>
                <dt>"Carbs"</dt>
                <dd>{format_amount(profile.carb_gram, "g")}</dd>
                <dt>"Fat"</dt>
                <dd>{format_amount(profile.fat_gram, "g")}</dd>
            </dl>
        </div>
    }
}
