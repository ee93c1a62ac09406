//! Page components, one module per route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are thin: they validate input, call `net::api` through the shared
//! session client and render whatever comes back. Load results land in a
//! [`LoadState`] signal so each view has one place to branch on.


pub mod dashboard;
pub mod home;
pub mod login;
pub mod nutrition;
pub mod profile;
pub mod register;
pub mod subscription;
pub mod workouts;

use crate::net::error::ApiError;

/// Lifecycle of a page's backend data.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.message()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Spawn `load` and publish its outcome into `target`.
///
/// Results arriving after the page was disposed are dropped.
#[cfg(feature = "hydrate")]
pub(crate) fn spawn_load<T, F>(target: leptos::prelude::RwSignal<LoadState<T>>, load: F)
where
    T: Send + Sync + 'static,
    F: std::future::Future<Output = Result<T, ApiError>> + 'static,
{
    use leptos::prelude::Set;

    leptos::task::spawn_local(async move {
        let _ = target.try_set(LoadState::from_result(load.await));
    });
}

/// Whole-unit display of a backend-computed quantity.
pub fn format_amount(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.0} {unit}"),
        _ => "Not calculated".to_owned(),
    }
}
