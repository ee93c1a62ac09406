//! Sign-in page with email and password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::routes::Route;
use crate::state::auth::use_auth;
use crate::util::auth::install_auth_redirect;

pub const REGISTERED_MESSAGE: &str = "Registration successful! Please log in with your new account.";

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn show_registered_banner(flag: Option<&str>) -> bool {
    flag == Some("true")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let query = use_query_map();
    install_auth_redirect(auth.state, Route::Dashboard, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let registered = move || query.with(|q| show_registered_banner(q.get("registered").as_deref()));
    let state = auth.state;
    let busy = move || state.get().busy;

    let on_submit = {
        let auth = auth.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if auth.state.get_untracked().busy {
                return;
            }
            let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
                Ok(input) => input,
                Err(msg) => {
                    error.set(Some(msg.to_owned()));
                    return;
                }
            };
            error.set(None);

            // The signed-in redirect effect navigates once the session flips.
            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                leptos::task::spawn_local(async move {
                    if let Err(e) = auth.login(&email_value, &password_value).await {
                        let _ = error.try_set(Some(e.message()));
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Planova"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <Show when=registered>
                    <p class="auth-message auth-message--success">{REGISTERED_MESSAGE}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href=Route::Register.path()>"Create one"</a>
                </p>
            </div>
        </div>
    }
}
