//! Root application component with routing and the auth context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected_route::{ProtectedRoute, RootRedirect};
use crate::pages::{
    create_user::CreateUserPage, dashboard::DashboardPage, forgot_login::ForgotLoginPage, home::HomePage,
    login::LoginPage, profile::ProfilePage, update_user::UpdateUserPage,
};
use crate::routes::AppRoute;
use crate::state::auth::AuthState;

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
/// Provides the shared `RwSignal<AuthState>` and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Restore the stored session once the app is running in the browser.
    Effect::new(move || {
        let restored = AuthState::initialize(&crate::util::storage::LocalStorage, crate::util::jwt::now_ms());
        auth.set(restored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/account-portal.css"/>
        <Title text="Account Portal"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=AppRoute::Login.path()/> }>
                <Route path=StaticSegment(AppRoute::Root.segment()) view=RootRedirect/>
                <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(AppRoute::ForgotLogin.segment()) view=ForgotLoginPage/>
                <Route path=StaticSegment(AppRoute::CreateUser.segment()) view=CreateUserPage/>
                <Route
                    path=StaticSegment(AppRoute::Dashboard.segment())
                    view=|| view! { <ProtectedRoute route=AppRoute::Dashboard><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(AppRoute::Profile.segment())
                    view=|| view! { <ProtectedRoute route=AppRoute::Profile><ProfilePage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(AppRoute::Home.segment())
                    view=|| view! { <ProtectedRoute route=AppRoute::Home><HomePage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment(AppRoute::UpdateUser.segment()), ParamSegment("id"))
                    view=|| view! { <ProtectedRoute route=AppRoute::UpdateUser><UpdateUserPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
