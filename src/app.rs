//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::request::ApiClient;
use crate::net::transport::DefaultTransport;
use crate::pages::{
    dashboard::{DashboardHome, DashboardLayout},
    home::HomePage,
    login::LoginPage,
    nutrition::NutritionPage,
    profile::ProfilePage,
    register::RegisterPage,
    subscription::SubscriptionPage,
    workouts::WorkoutsPage,
};
use crate::state::auth::AuthContext;
use crate::state::session::SessionStore;
use crate::util::storage::DefaultStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the one session context and sets up client-side routing. The
/// persisted credential is read in an effect so it only happens in the
/// browser, after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client = ApiClient::new(ApiConfig::from_env(), DefaultTransport::default(), DefaultStore::default());
    let auth = AuthContext::new(SessionStore::new(client));
    provide_context(auth.clone());

    Effect::new(move || auth.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/planova.css"/>
        <Title text="Planova"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=DashboardHome/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("nutrition") view=NutritionPage/>
                    <Route path=StaticSegment("workouts") view=WorkoutsPage/>
                    <Route path=StaticSegment("subscription") view=SubscriptionPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
