//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::Route;
use crate::state::auth::use_auth;
use crate::util::auth::install_auth_redirect;

pub const MIN_PASSWORD_LEN: usize = 8;

fn validate_registration(email: &str, password: &str, confirm: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err("Please fill in all fields.");
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters long.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    install_auth_redirect(auth.state, Route::Dashboard, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let state = auth.state;
    let busy = move || state.get().busy;

    let on_submit = {
        let auth = auth.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if auth.state.get_untracked().busy {
                return;
            }
            let (email_value, password_value) =
                match validate_registration(&email.get(), &password.get(), &confirm.get()) {
                    Ok(input) => input,
                    Err(msg) => {
                        error.set(Some(msg.to_owned()));
                        return;
                    }
                };
            error.set(None);

            #[cfg(feature = "hydrate")]
            {
                let auth = auth.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match auth.register(&email_value, &password_value).await {
                        Ok(next) => navigate(next.path(), leptos_router::NavigateOptions::default()),
                        Err(e) => error.set(Some(e.message())),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (email_value, password_value, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Planova"</h1>
                <p class="auth-card__subtitle">"Create your account"</p>
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
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        {move || if busy() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href=Route::Login.path()>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
