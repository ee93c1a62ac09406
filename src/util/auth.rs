//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded views and the sign-in page apply identical redirect rules. The
//! decision is a pure function of session state; the redirect fires only when
//! that decision changes, never as a side effect of rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::Route;
use crate::state::auth::{AuthState, SessionPhase};

/// What a guarded view should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet: show a placeholder, decide later.
    Pending,
    /// Anonymous: send to sign-in, render nothing.
    Redirect,
    Render,
}

#[must_use]
pub fn guard_decision(state: &AuthState) -> GuardDecision {
    match state.phase() {
        SessionPhase::Uninitialized => GuardDecision::Pending,
        SessionPhase::Anonymous => GuardDecision::Redirect,
        SessionPhase::Authenticated => GuardDecision::Render,
    }
}

/// `true` once auth has resolved and no user is present.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    guard_decision(state) == GuardDecision::Redirect
}

/// `true` once auth has resolved to a signed-in user.
#[must_use]
pub fn should_redirect_auth(state: &AuthState) -> bool {
    guard_decision(state) == GuardDecision::Render
}

/// Navigate when `decision` transitions into `Redirect`.
#[must_use]
pub fn entered_redirect(previous: Option<GuardDecision>, current: GuardDecision) -> bool {
    current == GuardDecision::Redirect && previous != Some(GuardDecision::Redirect)
}

/// Memoized guard decision for the session signal. Subscribers are only
/// notified when the decision itself changes.
pub fn guard_memo(auth: RwSignal<AuthState>) -> Memo<GuardDecision> {
    Memo::new(move |_| guard_decision(&auth.get()))
}

/// Redirect to `/login` each time the guard decision enters `Redirect`.
pub fn install_unauth_redirect<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |previous: Option<GuardDecision>| {
        let current = decision.get();
        if entered_redirect(previous, current) {
            navigate(Route::Login.path(), NavigateOptions::default());
        }
        current
    });
}

/// Redirect signed-in users away from public-only views (sign-in, register).
pub fn install_auth_redirect<F>(auth: RwSignal<AuthState>, target: Route, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let signed_in = Memo::new(move |_| should_redirect_auth(&auth.get()));
    Effect::new(move || {
        if signed_in.get() {
            navigate(target.path(), NavigateOptions::default());
        }
    });
}
