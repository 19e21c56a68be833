//! Admin dashboard: daily head count, attendance feed, student roster.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::api;
use crate::net::types::{AttendanceFeed, DailySummary, UserSummary};
use crate::state::session::SessionState;

/// Today's date as `YYYY-MM-DD`, from the browser clock.
fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.get(..10).unwrap_or_default().to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Admin dashboard — only rendered below an `AdminOnly` guard.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let token = move || session.get().token().map(str::to_owned).unwrap_or_default();

    let daily = LocalResource::new(move || {
        let token = token();
        async move { api::fetch_daily_summary(&token, &today()).await }
    });
    let feed = LocalResource::new(move || {
        let token = token();
        async move { api::fetch_all_attendance(&token).await }
    });
    let users = LocalResource::new(move || {
        let token = token();
        async move { api::fetch_users(&token).await }
    });

    let show_create = RwSignal::new(false);

    view! {
        <div class="admin-page">
            <Navbar/>

            <section class="admin-page__today">
                <h2>"Today"</h2>
                <Suspense fallback=move || view! { <p>"Loading summary..."</p> }>
                    {move || {
                        daily.get().map(|result| match result {
                            Ok(s) => view! { <DailyStats summary=s/> }.into_any(),
                            Err(_) => view! { <p class="error">"Could not load summary."</p> }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </section>

            <section class="admin-page__students">
                <header class="admin-page__students-header">
                    <h2>"Students"</h2>
                    <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                        "+ Add Student"
                    </button>
                </header>
                <Suspense fallback=move || view! { <p>"Loading students..."</p> }>
                    {move || {
                        users.get().map(|result| match result {
                            Ok(list) => view! { <UserTable users=list/> }.into_any(),
                            Err(_) => view! { <p class="error">"Could not load students."</p> }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </section>

            <section class="admin-page__feed">
                <h2>"Attendance"</h2>
                <Suspense fallback=move || view! { <p>"Loading attendance..."</p> }>
                    {move || {
                        feed.get().map(|result| match result {
                            Ok(body) => view! { <FeedTable feed=body/> }.into_any(),
                            Err(_) => view! { <p class="error">"Could not load attendance."</p> }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </section>

            <Show when=move || show_create.get()>
                <CreateStudentDialog
                    on_close=Callback::new(move |()| show_create.set(false))
                    users=users
                />
            </Show>
        </div>
    }
}

#[component]
fn DailyStats(summary: DailySummary) -> impl IntoView {
    view! {
        <div class="summary-stats">
            <div class="summary-stats__item">
                <span class="summary-stats__value">{summary.present_count}</span>
                <span class="summary-stats__label">"Present"</span>
            </div>
            <div class="summary-stats__item">
                <span class="summary-stats__value">{summary.absent_count}</span>
                <span class="summary-stats__label">"Absent"</span>
            </div>
            <div class="summary-stats__item">
                <span class="summary-stats__value">{summary.date.clone()}</span>
                <span class="summary-stats__label">"Date"</span>
            </div>
        </div>
    }
}

#[component]
fn UserTable(users: Vec<UserSummary>) -> impl IntoView {
    view! {
        <table class="user-table">
            <thead>
                <tr>
                    <th>"User ID"</th>
                    <th>"Name"</th>
                    <th>"Department"</th>
                    <th>"Face"</th>
                </tr>
            </thead>
            <tbody>
                {users
                    .into_iter()
                    .map(|u| {
                        let face = if u.face_registered_at.is_some() { "enrolled" } else { "—" };
                        view! {
                            <tr>
                                <td>{u.user_id.clone()}</td>
                                <td>{u.name.clone()}</td>
                                <td>{u.department.clone().unwrap_or_default()}</td>
                                <td>{face}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
fn FeedTable(feed: AttendanceFeed) -> impl IntoView {
    view! {
        <p class="admin-page__feed-count">{format!("{} records", feed.count)}</p>
        <table class="attendance-table">
            <thead>
                <tr>
                    <th>"User ID"</th>
                    <th>"Date"</th>
                    <th>"Time"</th>
                </tr>
            </thead>
            <tbody>
                {feed
                    .attendance
                    .into_iter()
                    .map(|r| {
                        view! {
                            <tr>
                                <td>{r.user_id.clone().unwrap_or_default()}</td>
                                <td>{r.date.clone()}</td>
                                <td>{r.time.clone().unwrap_or_default()}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

/// Modal dialog for creating a student account.
#[component]
fn CreateStudentDialog(
    on_close: Callback<()>,
    users: LocalResource<Result<Vec<UserSummary>, api::ApiError>>,
) -> impl IntoView {
    let user_id = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let session = expect_context::<RwSignal<SessionState>>();

    let submit = Callback::new(move |()| {
        if user_id.get().trim().is_empty()
            || name.get().trim().is_empty()
            || password.get().trim().is_empty()
        {
            error.set(Some("User ID, name and password are required".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::CreateUserRequest;

            let token = session.get_untracked().token().map(str::to_owned).unwrap_or_default();
            let req = CreateUserRequest {
                user_id: user_id.get().trim().to_owned(),
                password: password.get(),
                name: name.get().trim().to_owned(),
                email: Some(email.get().trim().to_owned()).filter(|s| !s.is_empty()),
                department: Some(department.get().trim().to_owned()).filter(|s| !s.is_empty()),
            };
            let users = users.clone();
            leptos::task::spawn_local(async move {
                match api::create_user(&token, &req).await {
                    Ok(()) => {
                        users.refetch();
                        on_close.run(());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &users);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Student"</h2>
                <label class="dialog__label">
                    "User ID / Roll No"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || user_id.get()
                        on:input=move |ev| user_id.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email (optional)"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Department (optional)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || department.get()
                        on:input=move |ev| department.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
