//! REST API helpers for the attendance backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR) and native tests: stubs returning a transport error, since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. A non-2xx response becomes
//! `ApiError::Rejected` carrying the backend's `{ detail }` body (empty if
//! it sent none); failure to reach the backend at all becomes
//! `ApiError::Transport`. The session layer decides what each means.

#![allow(clippy::unused_async)]

use super::types::{
    AttendanceFeed, CreateUserRequest, DailySummary, LoginResponse, MonthlySummary, MyAttendance,
    Profile, UserSummary,
};
use crate::state::session::AuthBackend;

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    /// The backend could not be reached or answered garbage.
    #[error("network error: {0}")]
    Transport(String),
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("not available on server".to_owned()))
}

/// Decode a response body, mapping non-2xx statuses to `Rejected`.
#[cfg(feature = "hydrate")]
async fn into_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let detail = resp
            .json::<super::types::ErrorBody>()
            .await
            .map(|body| body.detail)
            .unwrap_or_default();
        return Err(ApiError::Rejected { status, detail });
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Exchange credentials for a token via `POST /auth/login`.
pub async fn login(user_id: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/auth/login")
            .query([("user_id", user_id), ("password", password)])
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        into_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, password);
        server_stub()
    }
}

/// Fetch the profile the token belongs to via `GET /users/me`.
pub async fn fetch_profile(token: &str) -> Result<Profile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/users/me")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        into_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Fetch the signed-in student's own attendance via `GET /attendance/me`.
pub async fn fetch_my_attendance(token: &str) -> Result<MyAttendance, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/attendance/me")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        into_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Fetch the student's current-month summary via `GET /attendance/summary/me`.
pub async fn fetch_my_summary(token: &str) -> Result<MonthlySummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/attendance/summary/me")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        into_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Fetch every attendance record via `GET /attendance/all` (admin).
pub async fn fetch_all_attendance(token: &str) -> Result<AttendanceFeed, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/attendance/all")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        into_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Fetch one day's head count via `GET /attendance/summary/day` (admin).
pub async fn fetch_daily_summary(token: &str, date: &str) -> Result<DailySummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/attendance/summary/day")
            .query([("date", date)])
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        into_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, date);
        server_stub()
    }
}

/// Fetch the user roster via `GET /users/all` (admin).
pub async fn fetch_users(token: &str) -> Result<Vec<UserSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/users/all")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        into_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Create a student account via `POST /users/create` (admin).
pub async fn create_user(token: &str, req: &CreateUserRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/users/create")
            .header("Authorization", &bearer(token))
            .json(req)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        // Success body ({ message, user_id }) is not interesting here.
        into_json::<serde_json::Value>(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, req);
        server_stub()
    }
}

/// Live backend wired into the session flows.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpBackend;

impl AuthBackend for HttpBackend {
    async fn exchange_credentials(
        &self,
        user_id: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        login(user_id, password).await.map(|r| r.access_token)
    }

    async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError> {
        fetch_profile(token).await
    }
}
