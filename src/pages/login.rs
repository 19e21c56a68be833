//! Login page: credential form feeding the session login flow.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Login page — user id + password, submit exchanges credentials and then
/// navigates to the resolved role's dashboard.
///
/// Submit is disabled while an attempt is in flight so attempts are never
/// raced; the last failure reason is shown under the form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let user_id = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(Option::<String>::None);

    let pending = move || session.get().login_pending();

    let submit = Callback::new(move |()| {
        let id = user_id.get();
        let pw = password.get();
        if id.trim().is_empty() || pw.trim().is_empty() {
            form_error.set(Some("Please fill in all fields".to_owned()));
            return;
        }
        form_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            // Refuse to start while a previous attempt is still pending.
            let mut started = false;
            session.update(|s| started = s.begin_login());
            if !started {
                return;
            }

            let id = id.trim().to_owned();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::components::route_guard::home_route;
                use crate::net::api::HttpBackend;
                use crate::state::session::run_login;
                use crate::util::token_store::BrowserTokenStore;

                let mut store = BrowserTokenStore;
                match run_login(&HttpBackend, &mut store, &id, &pw).await {
                    Ok((token, profile)) => {
                        let target = home_route(profile.role);
                        session.update(|s| s.complete_login(token, profile));
                        navigate(target, NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("login rejected for {id}");
                        session.update(|s| s.fail_login(&err));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, pw);
        }
    });

    let shown_error = move || form_error.get().or_else(|| session.get().last_error().map(str::to_owned));

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1>"Face Attendance"</h1>
                <p class="login-page__subtitle">"Sign in to your account"</p>

                <label class="login-page__label">
                    "User ID / Roll No"
                    <input
                        class="login-page__input"
                        type="text"
                        placeholder="Enter your user ID"
                        prop:value=move || user_id.get()
                        prop:disabled=pending
                        on:input=move |ev| user_id.set(event_target_value(&ev))
                    />
                </label>

                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        prop:disabled=pending
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <Show when=move || shown_error().is_some()>
                    <p class="login-page__error">{shown_error}</p>
                </Show>

                <button
                    class="btn btn--primary login-page__submit"
                    prop:disabled=pending
                    on:click=move |_| submit.run(())
                >
                    {move || if pending() { "Signing in..." } else { "Sign In" }}
                </button>
            </div>
        </div>
    }
}
