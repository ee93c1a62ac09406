//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthContext` is provided once by `App` and is the only writer of the
//! session signal. Route guards, the premium gate and pages read it through
//! [`use_auth`] and call its operations; none of them mutate the signal
//! directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::SessionStore;
use crate::net::error::ApiError;
use crate::net::request::ApiClient;
use crate::routes::Route;

/// Role value that unlocks premium features.
pub const PREMIUM_ROLE: &str = "premium";

/// Identity decoded from the credential. Display-only, never verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub email: String,
    pub role: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Persisted credential not read yet.
    Uninitialized,
    Anonymous,
    Authenticated,
}

/// Authentication state tracking the credential, the derived user and
/// in-flight status.
///
/// `user` is present exactly when `token` is present and decodable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
    pub initialized: bool,
    /// A login or registration call is in flight.
    pub busy: bool,
}

impl AuthState {
    #[must_use]
    pub fn anonymous() -> Self {
        Self { initialized: true, ..Self::default() }
    }

    #[must_use]
    pub fn authenticated(token: String, user: SessionUser) -> Self {
        Self { token: Some(token), user: Some(user), initialized: true, busy: false }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if !self.initialized {
            SessionPhase::Uninitialized
        } else if self.is_authenticated() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.role.as_str())
    }

    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.role() == Some(PREMIUM_ROLE)
    }
}

/// Shared session context: the state signal plus the operations that
/// transition it.
#[derive(Clone)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    store: SessionStore,
}

impl AuthContext {
    pub fn new(store: SessionStore) -> Self {
        Self { state: RwSignal::new(AuthState::default()), store }
    }

    /// API client sharing this session's credential store.
    pub fn client(&self) -> &ApiClient {
        self.store.client()
    }

    /// Read the persisted credential and resolve the initial phase.
    pub fn initialize(&self) {
        self.state.set(self.store.initialize());
    }

    /// Sign in and return where to navigate next.
    ///
    /// # Errors
    ///
    /// Propagates the login failure; the previous session is left intact.
    pub async fn login(&self, email: &str, password: &str) -> Result<Route, ApiError> {
        self.state.update(|s| s.busy = true);
        match self.store.login(email, password).await {
            Ok(transition) => {
                self.state.set(transition.state);
                Ok(transition.navigate_to)
            }
            Err(e) => {
                self.state.update(|s| s.busy = false);
                Err(e)
            }
        }
    }

    /// Create an account and return where to navigate next.
    ///
    /// # Errors
    ///
    /// Propagates the registration failure.
    pub async fn register(&self, email: &str, password: &str) -> Result<Route, ApiError> {
        self.state.update(|s| s.busy = true);
        let outcome = self.store.register(email, password).await;
        self.state.update(|s| s.busy = false);
        outcome
    }

    /// Drop the session and return where to navigate next.
    pub fn logout(&self) -> Route {
        let transition = self.store.logout();
        self.state.set(transition.state);
        transition.navigate_to
    }
}

/// Fetch the session context provided by `App`.
///
/// # Panics
///
/// Panics when called outside the `App` component tree.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
