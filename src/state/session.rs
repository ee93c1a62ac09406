//! Session transitions over the persisted credential.
//!
//! DESIGN
//! ======
//! `SessionStore` is pure with respect to UI state: each operation returns
//! the next [`AuthState`] (and where to navigate) instead of mutating a
//! signal. `AuthContext` applies those results.
//!
//! UNINITIALIZED -> {ANONYMOUS | AUTHENTICATED} on `initialize`;
//! ANONYMOUS -> AUTHENTICATED on `login`; AUTHENTICATED -> ANONYMOUS on
//! `logout` or when a reload finds an undecodable credential.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::auth::AuthState;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::request::ApiClient;
use crate::net::transport::{DefaultTransport, Transport};
use crate::routes::Route;
use crate::util::storage::{CredentialStore, DefaultStore};
use crate::util::token::decode_session_user;

/// Next session state plus the view to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: AuthState,
    pub navigate_to: Route,
}

#[derive(Clone, Debug)]
pub struct SessionStore<T = DefaultTransport, S = DefaultStore> {
    client: ApiClient<T, S>,
}

impl<T: Transport, S: CredentialStore> SessionStore<T, S> {
    pub fn new(client: ApiClient<T, S>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<T, S> {
        &self.client
    }

    /// Resolve the startup session from persistence.
    ///
    /// A credential that fails to decode is purged and the session starts
    /// anonymous. Nothing is raised.
    pub fn initialize(&self) -> AuthState {
        let store = self.client.store();
        let Some(token) = store.load() else {
            return AuthState::anonymous();
        };
        match decode_session_user(&token) {
            Ok(user) => AuthState::authenticated(token, user),
            Err(e) => {
                leptos::logging::warn!("discarding stored credential: {e}");
                store.clear();
                AuthState::anonymous()
            }
        }
    }

    /// Exchange credentials for a token, persist it and authenticate.
    ///
    /// # Errors
    ///
    /// Propagates the authenticator's error unchanged. A token that cannot be
    /// decoded yields [`ApiError::InvalidCredential`] and is not persisted; a
    /// token that cannot be persisted yields [`ApiError::Storage`]. Either way
    /// the prior session is left as it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<Transition, ApiError> {
        let issued = api::login(&self.client, email, password).await.inspect_err(|e| {
            leptos::logging::error!("login failed: {e}");
        })?;
        let user = decode_session_user(&issued.access_token).map_err(|reason| {
            leptos::logging::error!("login returned an unusable credential: {reason}");
            ApiError::InvalidCredential { reason }
        })?;

        self.client.store().save(&issued.access_token).map_err(|message| {
            leptos::logging::error!("login credential not stored: {message}");
            ApiError::Storage { message }
        })?;
        Ok(Transition { state: AuthState::authenticated(issued.access_token, user), navigate_to: Route::Dashboard })
    }

    /// Create an account; the caller is sent to sign in afterwards.
    ///
    /// # Errors
    ///
    /// Propagates the registration error unchanged.
    pub async fn register(&self, email: &str, password: &str) -> Result<Route, ApiError> {
        api::register(&self.client, email, password).await.inspect_err(|e| {
            leptos::logging::error!("registration failed: {e}");
        })?;
        Ok(Route::LoginAfterRegister)
    }

    /// Forget the credential. Safe to call when already anonymous.
    pub fn logout(&self) -> Transition {
        self.client.store().clear();
        Transition { state: AuthState::anonymous(), navigate_to: Route::Login }
    }
}
