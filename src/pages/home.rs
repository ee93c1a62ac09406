//! Root route: forwards to the dashboard or the sign-in page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Loading;
use crate::routes::Route;
use crate::state::auth::{AuthState, SessionPhase, use_auth};

fn home_target(state: &AuthState) -> Option<Route> {
    match state.phase() {
        SessionPhase::Uninitialized => None,
        SessionPhase::Anonymous => Some(Route::Login),
        SessionPhase::Authenticated => Some(Route::Dashboard),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let target = Memo::new(move |_| home_target(&auth.state.get()));

    Effect::new(move || {
        if let Some(route) = target.get() {
            navigate(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! { <Loading/> }
}
