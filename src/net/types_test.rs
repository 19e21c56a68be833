use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_deserializes_admin() {
    let role: Role = serde_json::from_str("\"admin\"").expect("admin role");
    assert_eq!(role, Role::Admin);
}

#[test]
fn role_deserializes_student() {
    let role: Role = serde_json::from_str("\"student\"").expect("student role");
    assert_eq!(role, Role::Student);
}

#[test]
fn role_accepts_legacy_user_spelling() {
    let role: Role = serde_json::from_str("\"user\"").expect("legacy role");
    assert_eq!(role, Role::Student);
}

#[test]
fn role_serializes_student_not_user() {
    let json = serde_json::to_string(&Role::Student).expect("serialize");
    assert_eq!(json, "\"student\"");
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_parses_full_record() {
    let profile: Profile = serde_json::from_value(serde_json::json!({
        "user_id": "S100",
        "name": "Ada Lovelace",
        "email": "ada@example.edu",
        "role": "user",
        "department": "CS",
        "face_registered_at": "2026-01-12T09:00:00Z",
        "created_at": "2025-09-01T00:00:00Z"
    }))
    .expect("profile");
    assert_eq!(profile.user_id, "S100");
    assert_eq!(profile.role, Role::Student);
    assert_eq!(profile.department.as_deref(), Some("CS"));
    assert!(profile.face_registered_at.is_some());
}

#[test]
fn profile_optional_fields_default_to_none() {
    let profile: Profile = serde_json::from_value(serde_json::json!({
        "user_id": "A1",
        "name": "Admin",
        "role": "admin"
    }))
    .expect("profile");
    assert_eq!(profile.role, Role::Admin);
    assert!(profile.email.is_none());
    assert!(profile.department.is_none());
    assert!(profile.face_registered_at.is_none());
}

// =============================================================
// Login and error bodies
// =============================================================

#[test]
fn login_response_parses_with_and_without_token_type() {
    let full: LoginResponse =
        serde_json::from_value(serde_json::json!({"access_token": "tok", "token_type": "bearer"}))
            .expect("login response");
    assert_eq!(full.access_token, "tok");
    assert_eq!(full.token_type.as_deref(), Some("bearer"));

    let bare: LoginResponse =
        serde_json::from_value(serde_json::json!({"access_token": "tok"})).expect("login response");
    assert!(bare.token_type.is_none());
}

#[test]
fn error_body_carries_detail() {
    let body: ErrorBody =
        serde_json::from_value(serde_json::json!({"detail": "Invalid credentials"})).expect("body");
    assert_eq!(body.detail, "Invalid credentials");
}

// =============================================================
// Attendance payloads
// =============================================================

#[test]
fn my_attendance_parses_records() {
    let body: MyAttendance = serde_json::from_value(serde_json::json!({
        "user_id": "S100",
        "attendance": [
            {"user_id": "S100", "date": "2026-08-28", "time": "09:01:44", "status": "present"},
            {"date": "2026-08-27"}
        ]
    }))
    .expect("attendance");
    assert_eq!(body.attendance.len(), 2);
    assert_eq!(body.attendance[0].time.as_deref(), Some("09:01:44"));
    assert!(body.attendance[1].time.is_none());
}

#[test]
fn monthly_summary_parses() {
    let summary: MonthlySummary = serde_json::from_value(serde_json::json!({
        "user_id": "S100",
        "month": "2026-08",
        "total_days": 29,
        "present_days": 22,
        "absent_days": 7,
        "attendance_percentage": 75.86
    }))
    .expect("summary");
    assert_eq!(summary.month, "2026-08");
    assert_eq!(summary.present_days, 22);
    assert!((summary.attendance_percentage - 75.86).abs() < f64::EPSILON);
}

#[test]
fn daily_summary_parses() {
    let summary: DailySummary = serde_json::from_value(serde_json::json!({
        "date": "2026-08-29",
        "present_count": 31,
        "absent_count": 4
    }))
    .expect("summary");
    assert_eq!(summary.present_count, 31);
    assert_eq!(summary.absent_count, 4);
}

#[test]
fn create_user_request_omits_empty_optionals() {
    let req = CreateUserRequest {
        user_id: "S200".to_owned(),
        password: "pw".to_owned(),
        name: "New Student".to_owned(),
        email: None,
        department: None,
    };
    let json = serde_json::to_value(&req).expect("serialize");
    assert!(json.get("email").is_none());
    assert!(json.get("department").is_none());
}
