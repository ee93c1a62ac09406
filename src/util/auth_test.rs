use super::*;
use crate::state::auth::SessionUser;

fn signed_in() -> AuthState {
    AuthState::authenticated(
        "a.b.c".to_owned(),
        SessionUser { email: "x@y.com".to_owned(), role: "user".to_owned() },
    )
}

// =============================================================
// guard_decision
// =============================================================

#[test]
fn pending_while_uninitialized() {
    assert_eq!(guard_decision(&AuthState::default()), GuardDecision::Pending);
}

#[test]
fn redirect_when_anonymous() {
    assert_eq!(guard_decision(&AuthState::anonymous()), GuardDecision::Redirect);
}

#[test]
fn render_when_authenticated() {
    assert_eq!(guard_decision(&signed_in()), GuardDecision::Render);
}

#[test]
fn busy_login_does_not_change_decision() {
    let mut state = AuthState::anonymous();
    state.busy = true;
    assert_eq!(guard_decision(&state), GuardDecision::Redirect);
}

// =============================================================
// Redirect predicates
// =============================================================

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&AuthState::anonymous()));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
    assert!(should_redirect_auth(&signed_in()));
}

// =============================================================
// entered_redirect
// =============================================================

#[test]
fn entered_redirect_fires_on_transition_only() {
    assert!(entered_redirect(None, GuardDecision::Redirect));
    assert!(entered_redirect(Some(GuardDecision::Pending), GuardDecision::Redirect));
    assert!(entered_redirect(Some(GuardDecision::Render), GuardDecision::Redirect));
    assert!(!entered_redirect(Some(GuardDecision::Redirect), GuardDecision::Redirect));
}

#[test]
fn entered_redirect_ignores_other_decisions() {
    assert!(!entered_redirect(None, GuardDecision::Pending));
    assert!(!entered_redirect(Some(GuardDecision::Pending), GuardDecision::Render));
}
