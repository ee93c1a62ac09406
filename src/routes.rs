//! Client-side route table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Navigation targets the session layer and gates can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    /// Sign-in view with the "registration succeeded" banner.
    LoginAfterRegister,
    Register,
    Dashboard,
    Profile,
    Nutrition,
    Workouts,
    Subscription,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::LoginAfterRegister => "/login?registered=true",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Profile => "/dashboard/profile",
            Self::Nutrition => "/dashboard/nutrition",
            Self::Workouts => "/dashboard/workouts",
            Self::Subscription => "/dashboard/subscription",
        }
    }

    /// Sidebar entries of the dashboard, in display order.
    pub const DASHBOARD_NAV: [(Self, &'static str); 5] = [
        (Self::Dashboard, "Dashboard"),
        (Self::Nutrition, "Nutrition"),
        (Self::Workouts, "Workouts"),
        (Self::Profile, "Profile"),
        (Self::Subscription, "Subscription"),
    ];

    /// Header title for the dashboard page at `pathname`.
    #[must_use]
    pub fn dashboard_title(pathname: &str) -> &'static str {
        Self::DASHBOARD_NAV
            .iter()
            .find(|(route, _)| route.path() == pathname.trim_end_matches('/'))
            .map_or("Dashboard", |(_, name)| name)
    }
}
