//! Route authorization: decide per navigation target whether to render,
//! wait, or redirect.
//!
//! The decision logic is a pure function over the session state so it can
//! be tested off-browser; [`RouteGuard`] wraps it as a component. Every
//! routed page sits below a guard — nothing fetches protected data before
//! its guard has allowed rendering.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::{SessionState, SessionStatus};

/// Who may see a routed view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Only signed-out visitors (the login view). Signed-in users are
    /// forwarded to their own dashboard instead.
    AnonymousOnly,
    /// Any signed-in user.
    SignedIn,
    /// Admins only. Non-admins land on their own dashboard, not an error.
    AdminOnly,
}

/// What the guard decided for the current session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Startup check still in flight: show a neutral placeholder, decide
    /// nothing yet (avoids a flash-redirect before the check resolves).
    Pending,
    /// Render the target view.
    Allow,
    /// Navigate elsewhere instead of rendering.
    Redirect(&'static str),
}

/// Dashboard path for a role.
pub fn home_route(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin-dashboard",
        Role::Student => "/student-dashboard",
    }
}

/// Evaluate the access policy for one navigation target.
pub fn evaluate_route(access: RouteAccess, session: &SessionState) -> GuardOutcome {
    match session.status() {
        SessionStatus::Unresolved => GuardOutcome::Pending,
        SessionStatus::Anonymous => match access {
            RouteAccess::AnonymousOnly => GuardOutcome::Allow,
            RouteAccess::SignedIn | RouteAccess::AdminOnly => GuardOutcome::Redirect("/login"),
        },
        SessionStatus::Authenticated => {
            // The role only ever comes from the verified profile, never
            // from anything client-supplied.
            let role = session.role().unwrap_or(Role::Student);
            match access {
                RouteAccess::AnonymousOnly => GuardOutcome::Redirect(home_route(role)),
                RouteAccess::SignedIn => GuardOutcome::Allow,
                RouteAccess::AdminOnly => {
                    if role == Role::Admin {
                        GuardOutcome::Allow
                    } else {
                        GuardOutcome::Redirect(home_route(role))
                    }
                }
            }
        }
    }
}

/// Wrap a routed view in the access policy.
///
/// Renders a loading placeholder while the session is unresolved, the
/// children once allowed, and nothing (while navigating away) otherwise.
#[component]
pub fn RouteGuard(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Perform redirects as a side effect, outside of rendering.
    Effect::new(move || {
        if let GuardOutcome::Redirect(target) = evaluate_route(access, &session.get()) {
            navigate(target, NavigateOptions::default());
        }
    });

    view! {
        {move || match evaluate_route(access, &session.get()) {
            GuardOutcome::Pending => view! {
                <div class="guard-loading">
                    <p>"Loading..."</p>
                </div>
            }
            .into_any(),
            GuardOutcome::Allow => children().into_any(),
            GuardOutcome::Redirect(_) => ().into_any(),
        }}
    }
}
