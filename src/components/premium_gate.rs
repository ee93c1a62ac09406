//! Presentation gate for premium-only features.
//!
//! Not a security boundary: the role comes from the unverified credential
//! payload, so every premium resource must also be enforced server-side.

#[cfg(test)]
#[path = "premium_gate_test.rs"]
mod premium_gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::Route;
use crate::state::auth::{AuthState, use_auth};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    Content,
    Fallback,
    Upsell,
}

#[must_use]
pub fn gate_view(state: &AuthState, has_fallback: bool) -> GateView {
    if state.is_premium() {
        GateView::Content
    } else if has_fallback {
        GateView::Fallback
    } else {
        GateView::Upsell
    }
}

fn upgrade_label(navigating: bool) -> &'static str {
    if navigating { "Redirecting..." } else { "Upgrade to Premium" }
}

/// Shows `children` to premium users, otherwise `fallback` or an upsell.
#[component]
pub fn PremiumGate(children: ChildrenFn, #[prop(optional, into)] fallback: Option<ViewFn>) -> impl IntoView {
    let auth = use_auth();
    let has_fallback = fallback.is_some();
    let shown = Memo::new(move |_| gate_view(&auth.state.get(), has_fallback));

    move || match shown.get() {
        GateView::Content => children().into_any(),
        GateView::Fallback => fallback.as_ref().map_or_else(|| ().into_any(), ViewFn::run),
        GateView::Upsell => view! { <UpgradePrompt/> }.into_any(),
    }
}

/// Default upsell with a button toward the subscription view.
#[component]
fn UpgradePrompt() -> impl IntoView {
    let navigate = use_navigate();
    let navigating = RwSignal::new(false);

    let on_upgrade = move |_| {
        navigating.set(true);
        navigate(Route::Subscription.path(), NavigateOptions::default());
    };

    view! {
        <div class="premium-gate">
            <h3 class="premium-gate__title">"Premium Feature"</h3>
            <p class="premium-gate__body">
                "This feature is available exclusively to premium subscribers. "
                "Upgrade your plan to unlock all premium features."
            </p>
            <button class="btn btn--primary" disabled=move || navigating.get() on:click=on_upgrade>
                {move || upgrade_label(navigating.get())}
            </button>
        </div>
    }
}
