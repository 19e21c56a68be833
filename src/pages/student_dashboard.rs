//! Student dashboard: own profile, monthly summary, attendance history.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::api;
use crate::net::types::{AttendanceRecord, MonthlySummary, Profile};
use crate::state::session::SessionState;

/// Student dashboard — profile card plus the student's own attendance.
///
/// Only rendered below a `SignedIn` guard, so a token is present by the
/// time the resources fetch.
#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let token = move || session.get().token().map(str::to_owned).unwrap_or_default();

    let summary = LocalResource::new(move || {
        let token = token();
        async move { api::fetch_my_summary(&token).await }
    });
    let attendance = LocalResource::new(move || {
        let token = token();
        async move { api::fetch_my_attendance(&token).await }
    });

    view! {
        <div class="student-page">
            <Navbar/>

            {move || session.get().profile().cloned().map(|p| view! { <ProfileCard profile=p/> })}

            <section class="student-page__summary">
                <h2>"This Month"</h2>
                <Suspense fallback=move || view! { <p>"Loading summary..."</p> }>
                    {move || {
                        summary.get().map(|result| match result {
                            Ok(s) => view! { <SummaryStats summary=s/> }.into_any(),
                            Err(_) => view! { <p class="error">"Could not load summary."</p> }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </section>

            <section class="student-page__history">
                <h2>"Attendance History"</h2>
                <Suspense fallback=move || view! { <p>"Loading attendance..."</p> }>
                    {move || {
                        attendance.get().map(|result| match result {
                            Ok(body) => view! { <AttendanceTable records=body.attendance/> }
                                .into_any(),
                            Err(_) => view! { <p class="error">"Could not load attendance."</p> }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

/// Identity card with face-enrollment state.
#[component]
fn ProfileCard(profile: Profile) -> impl IntoView {
    let enrollment = if profile.face_registered_at.is_some() {
        "Face enrolled"
    } else {
        "Face not enrolled"
    };

    view! {
        <section class="profile-card">
            <h2>{profile.name.clone()}</h2>
            <p class="profile-card__id">{profile.user_id.clone()}</p>
            {profile
                .department
                .clone()
                .map(|d| view! { <p class="profile-card__department">{d}</p> })}
            <p class="profile-card__enrollment">{enrollment}</p>
        </section>
    }
}

#[component]
fn SummaryStats(summary: MonthlySummary) -> impl IntoView {
    view! {
        <div class="summary-stats">
            <div class="summary-stats__item">
                <span class="summary-stats__value">{summary.present_days}</span>
                <span class="summary-stats__label">"Present"</span>
            </div>
            <div class="summary-stats__item">
                <span class="summary-stats__value">{summary.absent_days}</span>
                <span class="summary-stats__label">"Absent"</span>
            </div>
            <div class="summary-stats__item">
                <span class="summary-stats__value">
                    {format!("{:.1}%", summary.attendance_percentage)}
                </span>
                <span class="summary-stats__label">{summary.month.clone()}</span>
            </div>
        </div>
    }
}

/// Date/time table for a list of attendance records.
#[component]
pub fn AttendanceTable(records: Vec<AttendanceRecord>) -> impl IntoView {
    view! {
        <table class="attendance-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Time"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {records
                    .into_iter()
                    .map(|r| {
                        view! {
                            <tr>
                                <td>{r.date.clone()}</td>
                                <td>{r.time.clone().unwrap_or_default()}</td>
                                <td>{r.status.clone().unwrap_or_else(|| "present".to_owned())}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
