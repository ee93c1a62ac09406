//! Route guard for views that need a signed-in user.
//!
//! Advisory only: it keeps anonymous visitors off protected screens, while
//! the backend still rejects unauthenticated API calls on its own.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Loading;
use crate::state::auth::use_auth;
use crate::util::auth::{GuardDecision, guard_memo, install_unauth_redirect};

/// Renders `children` for signed-in users, a placeholder while the session
/// resolves, and nothing (plus a redirect to `/login`) for anonymous users.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let decision = guard_memo(auth.state);
    install_unauth_redirect(decision, use_navigate());

    move || match decision.get() {
        GuardDecision::Pending => view! { <Loading/> }.into_any(),
        GuardDecision::Redirect => ().into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
