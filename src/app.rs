//! Root application component with routing, session context, and the
//! startup session check.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::{RouteAccess, RouteGuard};
use crate::pages::{
    admin_dashboard::AdminDashboardPage, login::LoginPage, student_dashboard::StudentDashboardPage,
};
use crate::state::session::SessionState;

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
/// Owns the session signal, provides it via context, kicks off the startup
/// token check once, and declares the guarded routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Resolve the persisted token (if any) against the backend exactly
    // once; every guard renders its placeholder until this settles.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            use crate::net::api::HttpBackend;
            use crate::state::session::run_startup_check;
            use crate::util::token_store::BrowserTokenStore;

            let mut store = BrowserTokenStore;
            let outcome = run_startup_check(&HttpBackend, &mut store).await;
            session.update(|s| s.apply_startup(outcome));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/attendance-client.css"/>
        <Title text="Face Attendance"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <RouteGuard access=RouteAccess::AnonymousOnly>
                                <LoginPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("login")
                    view=|| {
                        view! {
                            <RouteGuard access=RouteAccess::AnonymousOnly>
                                <LoginPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("student-dashboard")
                    view=|| {
                        view! {
                            <RouteGuard access=RouteAccess::SignedIn>
                                <StudentDashboardPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("admin-dashboard")
                    view=|| {
                        view! {
                            <RouteGuard access=RouteAccess::AdminOnly>
                                <AdminDashboardPage/>
                            </RouteGuard>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
