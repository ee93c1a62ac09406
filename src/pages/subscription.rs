//! Subscription status with subscribe and cancel actions.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use leptos::prelude::*;

use super::LoadState;
use crate::components::loading::Loading;
use crate::net::types::{Subscription, Tier};
use crate::state::auth::{AuthContext, use_auth};

/// Shown after any change: the session role comes from the credential, which
/// is only reissued at sign-in.
pub const ROLE_REFRESH_NOTE: &str = "Changes to your plan take effect in the app the next time you log in.";

/// Effective tier; a missing or inactive subscription is the free tier.
fn effective_tier(subscription: Option<&Subscription>) -> Tier {
    if subscription.is_some_and(Subscription::is_premium) { Tier::Premium } else { Tier::Free }
}

fn status_line(subscription: Option<&Subscription>) -> String {
    match subscription {
        Some(sub) if sub.is_active => match &sub.end_date {
            Some(end) => format!("Active since {}, renews or ends {}", date_only(&sub.start_date), date_only(end)),
            None => format!("Active since {}", date_only(&sub.start_date)),
        },
        Some(_) => "Inactive".to_owned(),
        None => "No subscription".to_owned(),
    }
}

fn date_only(iso: &str) -> &str {
    crate::util::date::date_prefix(iso)
}

#[cfg(feature = "hydrate")]
fn load_subscription(auth: AuthContext, target: RwSignal<LoadState<Option<Subscription>>>) {
    super::spawn_load(target, async move { crate::net::api::fetch_subscription(auth.client()).await });
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Subscribe,
    Cancel,
}

#[component]
pub fn SubscriptionPage() -> impl IntoView {
    let auth = use_auth();
    let subscription = RwSignal::new(LoadState::<Option<Subscription>>::Loading);
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    load_subscription(auth.clone(), subscription);

    let act = Callback::new(move |action: Action| run_action(auth.clone(), action, subscription, busy, notice, error));

    view! {
        <section class="subscription-page">
            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            {move || match subscription.get() {
                LoadState::Loading => view! { <Loading message="Loading subscription..."/> }.into_any(),
                LoadState::Failed(msg) => view! { <p class="error">{msg}</p> }.into_any(),
                LoadState::Ready(current) => {
                    let tier = effective_tier(current.as_ref());
                    view! {
                        <div class="subscription">
                            <h2>{format!("Current plan: {}", tier.label())}</h2>
                            <p class="subscription__status">{status_line(current.as_ref())}</p>
                            {match tier {
                                Tier::Free => {
                                    view! {
                                        <button
                                            class="btn btn--primary"
                                            disabled=move || busy.get()
                                            on:click=move |_| act.run(Action::Subscribe)
                                        >
                                            {move || if busy.get() { "Processing..." } else { "Upgrade to Premium" }}
                                        </button>
                                    }
                                        .into_any()
                                }
                                Tier::Premium => {
                                    view! {
                                        <button
                                            class="btn btn--secondary"
                                            disabled=move || busy.get()
                                            on:click=move |_| act.run(Action::Cancel)
                                        >
                                            {move || if busy.get() { "Processing..." } else { "Cancel subscription" }}
                                        </button>
                                    }
                                        .into_any()
                                }
                            }}
                            <p class="subscription__note">{ROLE_REFRESH_NOTE}</p>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

fn run_action(
    auth: AuthContext,
    action: Action,
    subscription: RwSignal<LoadState<Option<Subscription>>>,
    busy: RwSignal<bool>,
    notice: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
) {
    if busy.get_untracked() {
        return;
    }
    busy.set(true);
    notice.set(None);
    error.set(None);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = match action {
            Action::Subscribe => {
                let request = crate::net::types::SubscribeRequest::default();
                crate::net::api::subscribe(auth.client(), &request).await.map(|sub| {
                    let _ = subscription.try_set(LoadState::Ready(Some(sub)));
                    "You are now subscribed to Premium."
                })
            }
            Action::Cancel => crate::net::api::cancel_subscription(auth.client()).await.map(|_| {
                load_subscription(auth.clone(), subscription);
                "Your subscription has been cancelled."
            }),
        };
        match outcome {
            Ok(msg) => {
                let _ = notice.try_set(Some(msg.to_owned()));
            }
            Err(e) => {
                let _ = error.try_set(Some(e.message()));
            }
        }
        let _ = busy.try_set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, action, subscription);
}
