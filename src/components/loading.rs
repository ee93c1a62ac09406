//! Spinner placeholder shown while data or the session is resolving.

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(into, default = "Loading...".to_owned())] message: String) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner"></div>
            <p class="loading__message">{message}</p>
        </div>
    }
}
