use super::*;
use crate::net::types::Profile;
use crate::state::session::StartupOutcome;

fn anonymous() -> SessionState {
    let mut state = SessionState::default();
    state.apply_startup(StartupOutcome::Anonymous);
    state
}

fn signed_in(role: Role) -> SessionState {
    let mut state = SessionState::default();
    state.apply_startup(StartupOutcome::Authenticated {
        token: "tok".to_owned(),
        profile: Profile {
            user_id: "U1".to_owned(),
            name: "Test User".to_owned(),
            role,
            email: None,
            department: None,
            face_registered_at: None,
        },
    });
    state
}

// =============================================================
// Unresolved: no decisions yet
// =============================================================

#[test]
fn unresolved_session_is_pending_everywhere() {
    let state = SessionState::default();
    for access in [
        RouteAccess::AnonymousOnly,
        RouteAccess::SignedIn,
        RouteAccess::AdminOnly,
    ] {
        assert_eq!(evaluate_route(access, &state), GuardOutcome::Pending);
    }
}

// =============================================================
// Anonymous visitors
// =============================================================

#[test]
fn anonymous_renders_login_without_redirect_loop() {
    assert_eq!(
        evaluate_route(RouteAccess::AnonymousOnly, &anonymous()),
        GuardOutcome::Allow
    );
}

#[test]
fn anonymous_is_sent_to_login_from_protected_views() {
    assert_eq!(
        evaluate_route(RouteAccess::SignedIn, &anonymous()),
        GuardOutcome::Redirect("/login")
    );
    assert_eq!(
        evaluate_route(RouteAccess::AdminOnly, &anonymous()),
        GuardOutcome::Redirect("/login")
    );
}

// =============================================================
// Signed-in users
// =============================================================

#[test]
fn student_on_admin_view_lands_on_student_dashboard() {
    assert_eq!(
        evaluate_route(RouteAccess::AdminOnly, &signed_in(Role::Student)),
        GuardOutcome::Redirect("/student-dashboard")
    );
}

#[test]
fn admin_on_admin_view_is_allowed() {
    assert_eq!(
        evaluate_route(RouteAccess::AdminOnly, &signed_in(Role::Admin)),
        GuardOutcome::Allow
    );
}

#[test]
fn signed_in_users_may_see_shared_views() {
    assert_eq!(
        evaluate_route(RouteAccess::SignedIn, &signed_in(Role::Student)),
        GuardOutcome::Allow
    );
    assert_eq!(
        evaluate_route(RouteAccess::SignedIn, &signed_in(Role::Admin)),
        GuardOutcome::Allow
    );
}

#[test]
fn admin_revisiting_login_lands_on_admin_dashboard() {
    assert_eq!(
        evaluate_route(RouteAccess::AnonymousOnly, &signed_in(Role::Admin)),
        GuardOutcome::Redirect("/admin-dashboard")
    );
}

#[test]
fn student_revisiting_login_lands_on_student_dashboard() {
    assert_eq!(
        evaluate_route(RouteAccess::AnonymousOnly, &signed_in(Role::Student)),
        GuardOutcome::Redirect("/student-dashboard")
    );
}

// =============================================================
// home_route
// =============================================================

#[test]
fn home_route_maps_roles_to_dashboards() {
    assert_eq!(home_route(Role::Admin), "/admin-dashboard");
    assert_eq!(home_route(Role::Student), "/student-dashboard");
}
