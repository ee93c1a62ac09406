use super::*;
use crate::state::auth::SessionUser;

#[test]
fn home_target_waits_for_initialization() {
    assert_eq!(home_target(&AuthState::default()), None);
}

#[test]
fn home_target_sends_anonymous_to_login() {
    assert_eq!(home_target(&AuthState::anonymous()), Some(Route::Login));
}

#[test]
fn home_target_sends_signed_in_to_dashboard() {
    let state = AuthState::authenticated(
        "a.b.c".to_owned(),
        SessionUser { email: "x@y.com".to_owned(), role: "user".to_owned() },
    );
    assert_eq!(home_target(&state), Some(Route::Dashboard));
}
