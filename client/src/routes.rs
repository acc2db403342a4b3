//! Route table and auth guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` builds its router from `AppRoute` segments, and
//! `ProtectedRoute` / `RootRedirect` call `guard` to decide what to show.
//! Keeping the decision here as a pure function gives every page the same
//! redirect targets.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Root,
    Login,
    ForgotLogin,
    CreateUser,
    Dashboard,
    Profile,
    Home,
    UpdateUser,
}

impl AppRoute {
    /// Leading static path segment used in the router definition.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Root => "",
            Self::Login => "login",
            Self::ForgotLogin => "forgot-login",
            Self::CreateUser => "create-user",
            Self::Dashboard => "dashboard",
            Self::Profile => "profile",
            Self::Home => "home",
            Self::UpdateUser => "update-user",
        }
    }

    /// Absolute path for static routes. `UpdateUser` needs an ID; see
    /// [`update_user_path`].
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::ForgotLogin => "/forgot-login",
            Self::CreateUser => "/create-user",
            Self::Dashboard => "/dashboard",
            Self::Profile => "/profile",
            Self::Home => "/home",
            Self::UpdateUser => "/update-user",
        }
    }

    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Dashboard | Self::Profile | Self::Home | Self::UpdateUser)
    }
}

/// Path of the profile editor for `user_id`.
pub fn update_user_path(user_id: &str) -> String {
    format!("{}/{user_id}", AppRoute::UpdateUser.path())
}

/// What a route should do given the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(&'static str),
    /// Auth has not been restored from storage yet.
    Pending,
}

pub fn guard(route: AppRoute, auth: &AuthState) -> RouteDecision {
    if route == AppRoute::Root {
        if auth.loading {
            return RouteDecision::Pending;
        }
        let target = if auth.is_authenticated() { AppRoute::Dashboard } else { AppRoute::Login };
        return RouteDecision::Redirect(target.path());
    }
    if !route.requires_auth() {
        return RouteDecision::Render;
    }
    if auth.loading {
        RouteDecision::Pending
    } else if auth.is_authenticated() {
        RouteDecision::Render
    } else {
        RouteDecision::Redirect(AppRoute::Login.path())
    }
}
