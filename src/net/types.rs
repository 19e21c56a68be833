//! Serde types for the attendance backend's REST responses.
//!
//! Field shapes follow the backend contract: unknown fields are ignored,
//! optional fields default to `None`, so minor server-side additions do not
//! break deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Role carried by a user profile.
///
/// The backend historically stored students under the role string `user`;
/// both spellings deserialize to [`Role::Student`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[serde(alias = "user")]
    Student,
}

impl Role {
    /// Human-readable label for badges and tables.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Student => "Student",
        }
    }
}

/// Authenticated user profile as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub face_registered_at: Option<String>,
}

/// Success body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// One attendance mark: a user seen by the camera on a given day.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AttendanceRecord {
    #[serde(default)]
    pub user_id: Option<String>,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of `GET /attendance/me`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct MyAttendance {
    pub user_id: String,
    pub attendance: Vec<AttendanceRecord>,
}

/// Body of `GET /attendance/all`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct AttendanceFeed {
    pub count: usize,
    pub attendance: Vec<AttendanceRecord>,
}

/// Body of `GET /attendance/summary/me` (current month).
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct MonthlySummary {
    pub month: String,
    pub total_days: u32,
    pub present_days: u32,
    pub absent_days: u32,
    pub attendance_percentage: f64,
}

/// Body of `GET /attendance/summary/day`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct DailySummary {
    pub date: String,
    pub present_count: u32,
    pub absent_count: u32,
}

/// One row of `GET /users/all`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct UserSummary {
    pub user_id: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub face_registered_at: Option<String>,
}

/// Request body for `POST /users/create`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CreateUserRequest {
    pub user_id: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}
