//! Top navigation bar with the signed-in identity and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Navigation bar shown on dashboard pages.
///
/// Displays the application title, the signed-in user's name and role
/// badge, and a logout button. Logout clears the persisted token, resets
/// the session, and returns to the login view — no network round-trip.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let user_name = move || {
        session
            .get()
            .profile()
            .map(|p| p.name.clone())
            .unwrap_or_default()
    };
    let role_label = move || session.get().role().map(|r| r.label()).unwrap_or_default();

    let on_logout = move |_| {
        let mut store = crate::util::token_store::BrowserTokenStore;
        crate::state::session::run_logout(&mut store);
        session.update(SessionState::logout);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <span class="navbar__title">"Face Attendance"</span>
            <span class="navbar__spacer"></span>
            <span class="navbar__user">{user_name}</span>
            <span class="navbar__role-badge">{role_label}</span>
            <button class="btn navbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
